// Include handlers module directly from handlers.rs
#[path = "handlers.rs"]
pub mod handlers;

// Include the command tree so integration tests can drive argument parsing
#[path = "commands.rs"]
pub mod commands;

// Re-export commonly used handler functions for convenience
pub use handlers::{handle_crawl, handle_demo, resolve_path};

// Re-export crawl functionality from gossamer-core
pub use gossamer_core::crawl::{CrawlOptions, CrawlRun, execute_crawl};

pub const CLAP_STYLING: clap::builder::styling::Styles = clap::builder::styling::Styles::styled()
    .header(clap_cargo::style::HEADER)
    .usage(clap_cargo::style::USAGE)
    .literal(clap_cargo::style::LITERAL)
    .placeholder(clap_cargo::style::PLACEHOLDER)
    .error(clap_cargo::style::ERROR)
    .valid(clap_cargo::style::VALID)
    .invalid(clap_cargo::style::INVALID);
