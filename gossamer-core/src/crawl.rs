use gossamer_crawler::{CrawlError, Crawler, Internet, ProgressCallback, VisitRegistry};
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Options for configuring a crawl operation
#[derive(Debug, Clone, Default)]
pub struct CrawlOptions {
    /// Entry address override; the table's first page when unset.
    pub entry: Option<String>,
    pub show_progress_bar: bool,
}

/// Outcome of a finished crawl run
pub struct CrawlRun {
    pub registry: VisitRegistry,
    /// Entry address the run actually started from, if one could be resolved.
    pub entry: Option<String>,
    pub duration: Duration,
}

impl CrawlRun {
    /// True when no traversal happened: unknown entry or an empty table.
    pub fn aborted(&self) -> bool {
        self.registry.is_empty()
    }
}

/// Execute a crawl with the given options
/// Returns the classified registry together with the resolved entry
pub async fn execute_crawl(
    internet: Internet,
    options: CrawlOptions,
) -> Result<CrawlRun, CrawlError> {
    let CrawlOptions {
        entry,
        show_progress_bar,
    } = options;

    // Set up single progress bar for overall crawl progress (only if enabled)
    let progress_bar = if show_progress_bar {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.cyan} {msg}")
                .unwrap(),
        );
        pb.set_message("Starting crawl...");
        Some(Arc::new(pb))
    } else {
        None
    };

    // Counter for tracking visited pages
    let visited_count = Arc::new(std::sync::atomic::AtomicUsize::new(0));

    // Progress callback for branch updates (only if the spinner is enabled)
    let progress_callback: ProgressCallback = if show_progress_bar {
        let pb_clone = progress_bar.clone().unwrap();
        let count_clone = visited_count.clone();
        Arc::new(move |_address: String| {
            let count = count_clone.fetch_add(1, std::sync::atomic::Ordering::Relaxed) + 1;
            pb_clone.set_message(format!("Crawling... {} pages visited", count));
            pb_clone.tick();
        })
    } else {
        // No-op callback when the spinner is disabled
        Arc::new(|_address: String| {})
    };

    let entry = entry.or_else(|| internet.first_address().map(str::to_string));
    let total_pages = internet.len();

    let crawler = Crawler::new().with_progress_callback(progress_callback);

    let start = Instant::now();
    let registry = match entry.as_deref() {
        Some(address) => crawler.crawl(Arc::new(internet), address).await?,
        None => VisitRegistry::new(),
    };
    let duration = start.elapsed();

    // Finish progress bar (only if enabled)
    if let Some(ref pb) = progress_bar {
        let visited = visited_count.load(std::sync::atomic::Ordering::Relaxed);
        pb.finish_with_message(format!(
            "Crawl complete! {} of {} pages visited",
            visited, total_pages
        ));
    }

    Ok(CrawlRun {
        registry,
        entry,
        duration,
    })
}
