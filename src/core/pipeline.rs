use crate::core::{ConfigProvider, Pipeline, Storage, TransformResult};
use crate::utils::error::{Result, ToolkitError};

pub struct ReversalPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> ReversalPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

// 在輸出路徑中替換 {timestamp} 佔位符
fn resolve_output_path(path: &str) -> String {
    if path.contains("{timestamp}") {
        path.replace(
            "{timestamp}",
            &chrono::Utc::now().format("%Y%m%d_%H%M%S").to_string(),
        )
    } else {
        path.to_string()
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for ReversalPipeline<S, C> {
    async fn extract(&self) -> Result<Vec<String>> {
        let input = self.config.input_path();

        // 先確認輸入檔存在，不存在就直接回報
        if !self.storage.exists(input).await {
            return Err(ToolkitError::MissingInputError {
                path: input.to_string(),
            });
        }

        tracing::debug!("Reading input file: {}", input);
        let bytes = self.storage.read_file(input).await?;
        let content = String::from_utf8(bytes).map_err(|e| ToolkitError::DecodeError {
            path: input.to_string(),
            source: e,
        })?;

        Ok(content.lines().map(str::to_owned).collect())
    }

    async fn transform(&self, lines: Vec<String>) -> Result<TransformResult> {
        let source_line_count = lines.len();

        // 反轉行順序，剝除行尾空白，再反轉每行字元並重新編號
        let transformed = lines
            .iter()
            .rev()
            .enumerate()
            .map(|(idx, line)| {
                let reversed: String = line.trim_end().chars().rev().collect();
                format!("Line {}: {}", idx + 1, reversed)
            })
            .collect();

        Ok(TransformResult {
            lines: transformed,
            source_line_count,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let output = resolve_output_path(self.config.output_path());

        let mut data = result.lines.join("\n");
        if !data.is_empty() {
            data.push('\n');
        }

        tracing::debug!("Writing {} lines to: {}", result.lines.len(), output);
        self.storage.write_file(&output, data.as_bytes()).await?;

        Ok(output)
    }
}
