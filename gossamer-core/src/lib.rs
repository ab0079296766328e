pub mod crawl;
pub mod loader;
pub mod report;

pub use crawl::{CrawlOptions, CrawlRun, execute_crawl};
pub use loader::{LoadError, load_internet, parse_internet};
pub use report::{CrawlReport, ReportFormat, save_report};

/// Print the startup banner.
pub fn print_banner() {
    println!(
        r#"
   __ _   ___   ___  ___   __ _  _ __ ___    ___  _ __
  / _` | / _ \ / __|/ __| / _` || '_ ` _ \  / _ \| '__|
 | (_| || (_) |\__ \\__ \| (_| || | | | | ||  __/| |
  \__, | \___/ |___/|___/ \__,_||_| |_| |_| \___||_|
  |___/"#
    );
    println!(
        "  gossamer v{} - a crawler for offline page graphs",
        env!("CARGO_PKG_VERSION")
    );
    println!();
}
