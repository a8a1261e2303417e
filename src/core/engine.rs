use crate::core::Pipeline;
use crate::utils::error::Result;

pub struct CourseEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> CourseEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Runs extract, transform and load in order and returns the rendered report.
    pub async fn run(&self) -> Result<String> {
        tracing::info!("Reading course...");
        let lines = self.pipeline.extract().await?;
        tracing::info!("Read {} course lines", lines.len());

        tracing::info!("Plotting course...");
        let report = self.pipeline.transform(lines).await?;
        tracing::info!(
            "Plotted {} commands: simple {:?}, aimed {:?}",
            report.commands,
            report.simple,
            report.aimed
        );

        tracing::info!("Writing report...");
        let rendered = self.pipeline.load(report).await?;

        Ok(rendered)
    }
}
