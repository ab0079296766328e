pub mod crawler;
pub mod error;
pub mod internet;
pub mod registry;

pub use crawler::{Crawler, ProgressCallback};
pub use error::CrawlError;
pub use internet::{Internet, Page};
pub use registry::{PageState, VisitRegistry};
