use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A single node in the crawlable graph: an address plus the ordered list of
/// addresses it links to. Links may repeat and may point at addresses that
/// do not exist in the table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Page {
    pub address: String,
    #[serde(default)]
    pub links: Vec<String>,
}

impl Page {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            links: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.links.push(link.into());
        self
    }
}

/// The static node table a crawl runs against. Built once by a loader and
/// never mutated during traversal; the engine shares it behind an `Arc`.
#[derive(Debug, Clone, Default)]
pub struct Internet {
    pages: HashMap<String, Page>,
    first_address: Option<String>,
}

impl Internet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a page, keeping the existing entry on an address collision.
    /// Returns false when the address was already present.
    pub fn insert(&mut self, page: Page) -> bool {
        if self.pages.contains_key(&page.address) {
            return false;
        }
        if self.first_address.is_none() {
            self.first_address = Some(page.address.clone());
        }
        self.pages.insert(page.address.clone(), page);
        true
    }

    pub fn page(&self, address: &str) -> Option<&Page> {
        self.pages.get(address)
    }

    pub fn contains(&self, address: &str) -> bool {
        self.pages.contains_key(address)
    }

    /// Address of the first page inserted, used as the default crawl entry.
    pub fn first_address(&self) -> Option<&str> {
        self.first_address.as_deref()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}
