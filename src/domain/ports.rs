use crate::domain::model::{CourseLine, CourseReport, ReportFormat};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> Option<&str>;
    fn report_format(&self) -> ReportFormat;
    fn expected_simple(&self) -> Option<i64>;
    fn expected_aimed(&self) -> Option<i64>;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<CourseLine>>;
    async fn transform(&self, lines: Vec<CourseLine>) -> Result<CourseReport>;
    async fn load(&self, report: CourseReport) -> Result<String>;
}
