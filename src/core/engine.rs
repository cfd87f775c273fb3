use crate::core::Pipeline;
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::monitor::SystemMonitor;

pub struct TransformEngine<P: Pipeline> {
    pipeline: P,
    #[cfg(feature = "cli")]
    monitor: Option<SystemMonitor>,
}

impl<P: Pipeline> TransformEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self {
            pipeline,
            #[cfg(feature = "cli")]
            monitor: None,
        }
    }

    #[cfg(feature = "cli")]
    pub fn new_with_monitoring(pipeline: P, enabled: bool) -> Self {
        Self {
            pipeline,
            monitor: enabled.then(|| SystemMonitor::new(true)),
        }
    }

    pub async fn run(&self) -> Result<String> {
        println!("Starting transform process...");

        // Extract
        println!("Reading input...");
        let lines = self.pipeline.extract().await?;
        println!("Read {} lines", lines.len());

        // Transform
        println!("Transforming lines...");
        let result = self.pipeline.transform(lines).await?;
        println!("Transformed {} lines", result.lines.len());

        // Load
        println!("Writing output...");
        let output_path = self.pipeline.load(result).await?;
        println!("Output saved to: {}", output_path);

        #[cfg(feature = "cli")]
        if let Some(monitor) = &self.monitor {
            monitor.log_summary();
        }

        Ok(output_path)
    }

    /// Operation boundary: every pipeline error is caught here, reported,
    /// and converted into a boolean outcome.
    pub async fn execute(&self) -> bool {
        match self.run().await {
            Ok(output_path) => {
                tracing::info!("✅ Transform completed successfully!");
                tracing::info!("📁 Output saved to: {}", output_path);
                true
            }
            Err(e) => {
                tracing::error!(
                    "❌ Transform failed: {} (Category: {:?}, Severity: {:?})",
                    e,
                    e.category(),
                    e.severity()
                );
                eprintln!("❌ {}", e.user_friendly_message());
                eprintln!("💡 {}", e.recovery_suggestion());
                false
            }
        }
    }
}
