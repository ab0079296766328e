use crate::error::Result;
use crate::internet::Internet;
use crate::registry::{PageState, VisitRegistry};
use std::sync::{Arc, Mutex};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

pub type ProgressCallback = Arc<dyn Fn(String) + Send + Sync>;

pub struct Crawler {
    progress_callback: Option<ProgressCallback>,
}

impl Crawler {
    pub fn new() -> Self {
        Self {
            progress_callback: None,
        }
    }

    pub fn with_progress_callback(mut self, callback: ProgressCallback) -> Self {
        self.progress_callback = Some(callback);
        self
    }

    /// Explore everything reachable from `entry` and classify each address
    /// encountered. Returns an empty registry when the entry does not exist
    /// in the table, leaving the abort decision to the caller.
    ///
    /// A spawned branch that panics surfaces as a `CrawlError::JoinError`.
    /// The entry page itself is expanded on the caller's task, so a panic
    /// there unwinds directly instead.
    pub async fn crawl(&self, internet: Arc<Internet>, entry: &str) -> Result<VisitRegistry> {
        let registry = VisitRegistry::new();

        if !internet.contains(entry) {
            warn!("Entry page {} does not exist, nothing to crawl", entry);
            return Ok(registry);
        }

        info!("Starting crawl of {}", entry);

        // Every branch, at any depth, parks its handle here. The drain loop
        // below is the single join point of the whole crawl.
        let branches: Arc<Mutex<Vec<JoinHandle<()>>>> = Arc::new(Mutex::new(Vec::new()));

        visit(&internet, &registry, &branches, &self.progress_callback, entry);

        // A branch pushes its children's handles before it completes, so
        // draining until the list stays empty joins every task transitively.
        loop {
            let next = branches.lock().unwrap().pop();
            match next {
                Some(handle) => handle.await?,
                None => break,
            }
        }

        info!("Crawl complete. {} addresses classified", registry.len());
        Ok(registry)
    }
}

impl Default for Crawler {
    fn default() -> Self {
        Self::new()
    }
}

/// Expand a single page: claim it, record dangling links, upgrade links that
/// are already known, and spawn a branch for each undiscovered link.
fn visit(
    internet: &Arc<Internet>,
    registry: &VisitRegistry,
    branches: &Arc<Mutex<Vec<JoinHandle<()>>>>,
    progress: &Option<ProgressCallback>,
    address: &str,
) {
    if !registry.insert_if_absent(address, PageState::Success) {
        // Another branch claimed this page first; this extra reference only
        // upgrades it to skipped.
        registry.mark_skipped(address);
        debug!("Lost claim on {}, marked skipped", address);
        return;
    }

    debug!("Visiting {}", address);
    if let Some(callback) = progress {
        callback(address.to_string());
    }

    let Some(page) = internet.page(address) else {
        return;
    };

    for link in &page.links {
        if !internet.contains(link) {
            if registry.insert_if_absent(link, PageState::Error) {
                warn!("Dangling link {} referenced from {}", link, address);
            }
        } else if registry.contains(link) {
            registry.mark_skipped(link);
        } else {
            let internet = Arc::clone(internet);
            let registry = registry.clone();
            let branch_list = Arc::clone(branches);
            let progress = progress.clone();
            let link = link.clone();

            let handle = tokio::spawn(async move {
                visit(&internet, &registry, &branch_list, &progress, &link);
            });
            branches.lock().unwrap().push(handle);
        }
    }
}
