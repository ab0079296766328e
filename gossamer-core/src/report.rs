// Crawl report rendering

use gossamer_crawler::{PageState, VisitRegistry};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReportFormat {
    Text,
    Json,
}

impl ReportFormat {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "text" => Some(ReportFormat::Text),
            "json" => Some(ReportFormat::Json),
            _ => None,
        }
    }
}

/// Three-way partition of a finished crawl. Every visited page lands in
/// `success`; pages referenced more than once additionally land in `skipped`;
/// dangling link targets land in `failure`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CrawlReport {
    pub success: Vec<String>,
    pub skipped: Vec<String>,
    pub failure: Vec<String>,
}

impl CrawlReport {
    pub fn from_registry(registry: &VisitRegistry) -> Self {
        let mut report = CrawlReport::default();
        for (address, state) in registry.entries() {
            match state {
                PageState::Success => report.success.push(address),
                PageState::Skipped => {
                    report.success.push(address.clone());
                    report.skipped.push(address);
                }
                PageState::Error => report.failure.push(address),
            }
        }
        report
    }

    /// Render the canonical three-line text report. Empty categories render
    /// as `[]`; list order follows the registry snapshot.
    pub fn render_text(&self) -> String {
        let mut report = String::new();
        report.push_str(&format!("Success: [{}]\n", self.success.join(", ")));
        report.push_str(&format!("Skipped: [{}]\n", self.skipped.join(", ")));
        report.push_str(&format!("Failure: [{}]", self.failure.join(", ")));
        report
    }

    /// Render a structured JSON report with generator metadata.
    pub fn render_json(&self) -> Result<String, serde_json::Error> {
        let json_report = serde_json::json!({
            "report": {
                "metadata": {
                    "generator": "Gossamer",
                    "version": env!("CARGO_PKG_VERSION"),
                    "generated_at": chrono::Utc::now().to_rfc3339(),
                    "format": "json"
                },
                "summary": {
                    "visited": self.success.len(),
                    "skipped": self.skipped.len(),
                    "failed": self.failure.len()
                },
                "pages": {
                    "success": self.success,
                    "skipped": self.skipped,
                    "failure": self.failure
                }
            }
        });

        serde_json::to_string_pretty(&json_report)
    }

    /// Render in the requested format.
    pub fn render(&self, format: ReportFormat) -> Result<String, serde_json::Error> {
        match format {
            ReportFormat::Text => Ok(self.render_text()),
            ReportFormat::Json => self.render_json(),
        }
    }
}

pub fn save_report(content: &str, path: &Path) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(content.as_bytes())?;
    Ok(())
}
