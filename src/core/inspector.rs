use crate::core::{FileReport, FileStats, Storage};
use crate::utils::error::{Result, ToolkitError};
use crate::utils::validation::validate_filename;
use std::io::Write;
use tokio::io::{AsyncBufReadExt, BufReader};

const PROMPT: &str = "Enter the name of the file to read (or 'exit' to quit): ";
const SEPARATOR_WIDTH: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    AwaitingInput,
    Terminated,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Terminate,
    Reject(String),
    Inspect(String),
}

/// Interactive file inspection loop. Reads filenames from the console,
/// prints file content and statistics, and classifies every failure without
/// leaving the loop.
pub struct Inspector<S: Storage> {
    storage: S,
    state: SessionState,
}

impl<S: Storage> Inspector<S> {
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: SessionState::AwaitingInput,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Pure input classification. Runs before any file access.
    pub fn evaluate(input: &str) -> Action {
        let trimmed = input.trim();

        if trimmed.eq_ignore_ascii_case("exit") {
            return Action::Terminate;
        }

        if trimmed.is_empty() {
            return Action::Reject("Filename cannot be empty".to_string());
        }

        if let Err(e) = validate_filename("filename", trimmed) {
            return Action::Reject(e.user_friendly_message());
        }

        Action::Inspect(trimmed.to_string())
    }

    pub async fn inspect(&self, filename: &str) -> Result<FileReport> {
        let bytes = self.storage.read_file(filename).await?;
        let content = String::from_utf8(bytes).map_err(|e| ToolkitError::DecodeError {
            path: filename.to_string(),
            source: e,
        })?;

        let stats = FileStats::from_content(&content);
        Ok(FileReport { content, stats })
    }

    pub fn render(filename: &str, report: &FileReport) -> String {
        let separator = "-".repeat(SEPARATOR_WIDTH);
        let mut out = String::new();

        out.push_str(&format!("\nFile '{}' content:\n", filename));
        out.push_str(&separator);
        out.push('\n');
        out.push_str(&report.content);
        if !report.content.ends_with('\n') {
            out.push('\n');
        }
        out.push_str(&separator);
        out.push('\n');
        out.push_str("Statistics:\n");
        out.push_str(&format!("  Lines: {}\n", report.stats.lines));
        out.push_str(&format!("  Words: {}\n", report.stats.words));
        out.push_str(&format!(
            "  Characters (including spaces): {}",
            report.stats.chars
        ));

        out
    }

    /// Process one line of input, updating the session state. Returns the
    /// text to show the user.
    pub async fn step(&mut self, input: &str) -> String {
        match Self::evaluate(input) {
            Action::Terminate => {
                self.state = SessionState::Terminated;
                "Exiting the program.".to_string()
            }
            Action::Reject(message) => format!("❌ {}", message),
            Action::Inspect(filename) => match self.inspect(&filename).await {
                Ok(report) => Self::render(&filename, &report),
                Err(e) => {
                    tracing::debug!(
                        "Inspection of '{}' failed: {} (Category: {:?})",
                        filename,
                        e,
                        e.category()
                    );
                    format!("❌ {}", e.user_friendly_message())
                }
            },
        }
    }

    /// Drive the loop on stdin until the user exits. Only console IO errors
    /// escape; inspection failures are reported and the loop continues.
    pub async fn run(&mut self) -> Result<()> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        while self.state == SessionState::AwaitingInput {
            print!("{}", PROMPT);
            std::io::stdout().flush()?;

            match lines.next_line().await? {
                Some(line) => {
                    let response = self.step(&line).await;
                    println!("{}", response);
                }
                None => {
                    // stdin closed
                    println!();
                    self.state = SessionState::Terminated;
                }
            }
        }

        Ok(())
    }
}
