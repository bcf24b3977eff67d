/// Errors raised while rendering the dashboard page.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    #[error("failed to draw chart: {0}")]
    Chart(String),
    #[error("failed to format page: {0}")]
    Format(#[from] std::fmt::Error),
}
