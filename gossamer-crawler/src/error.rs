use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrawlError {
    #[error("Crawl branch failed: {0}")]
    JoinError(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, CrawlError>;
