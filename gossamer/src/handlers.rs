use clap::ArgMatches;
use colored::Colorize;
use gossamer_core::crawl::{CrawlOptions, execute_crawl};
use gossamer_core::loader::{load_internet, parse_internet};
use gossamer_core::report::{CrawlReport, ReportFormat, save_report};
use std::path::PathBuf;
use tracing_subscriber;

// Bundled sample internets exercised by the demo subcommand
const SAMPLE_INTERNETS: [(&str, &str); 2] = [
    ("Internet1", include_str!("../samples/internet1.json")),
    ("Internet2", include_str!("../samples/internet2.json")),
];

/// Expand a user-supplied path, resolving a leading tilde.
pub fn resolve_path(raw: &str) -> PathBuf {
    let expanded = shellexpand::tilde(raw);
    PathBuf::from(expanded.as_ref())
}

pub async fn handle_crawl(sub_matches: &ArgMatches) -> i32 {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let file = sub_matches.get_one::<String>("FILE").unwrap();
    let entry = sub_matches.get_one::<String>("entry").cloned();
    let output = sub_matches.get_one::<PathBuf>("output");
    let format = sub_matches
        .get_one::<String>("format")
        .and_then(|s| ReportFormat::from_str(s))
        .unwrap_or(ReportFormat::Text);
    let no_progress = sub_matches.get_flag("no-progress");

    let path = resolve_path(file);
    let internet = match load_internet(&path) {
        Ok(internet) => internet,
        Err(e) => {
            eprintln!("✗ {}", e);
            return 2;
        }
    };

    println!("\n🕷️  Crawling {}", path.display());
    println!("Pages: {}", internet.len());

    let options = CrawlOptions {
        entry,
        show_progress_bar: !no_progress,
    };

    let run = match execute_crawl(internet, options).await {
        Ok(run) => run,
        Err(e) => {
            eprintln!("✗ Crawl failed: {}", e);
            return 2;
        }
    };

    if run.aborted() {
        match run.entry.as_deref() {
            Some(address) => println!(
                "\n{} Crawl aborted due to nonexistent entry page '{}'.",
                "⚠".yellow().bold(),
                address
            ),
            None => println!(
                "\n{} Crawl aborted: the internet contains no pages.",
                "⚠".yellow().bold()
            ),
        }
    } else {
        println!("\n{} Crawl complete!", "✓".green().bold());
    }

    let report = CrawlReport::from_registry(&run.registry);
    println!();
    println!(
        "  Visited: {}",
        report.success.len().to_string().green().bold()
    );
    println!(
        "  Skipped: {}",
        report.skipped.len().to_string().yellow().bold()
    );
    println!(
        "  Failed:  {}",
        report.failure.len().to_string().red().bold()
    );
    println!("  Duration: {:?}", run.duration);
    println!();

    let rendered = match report.render(format) {
        Ok(rendered) => rendered,
        Err(e) => {
            eprintln!("✗ Failed to render report: {}", e);
            return 2;
        }
    };

    match output {
        Some(path) => {
            if let Err(e) = save_report(&rendered, path) {
                eprintln!("✗ Failed to save report to {}: {}", path.display(), e);
                return 2;
            }
            println!("{} Report saved to: {}", "✓".green().bold(), path.display());
        }
        None => println!("{}", rendered),
    }

    if run.aborted() || !report.failure.is_empty() {
        1
    } else {
        0
    }
}

pub async fn handle_demo() -> i32 {
    for (name, document) in SAMPLE_INTERNETS {
        println!("BEGIN {} TEST", name);

        let internet = match parse_internet(document) {
            Ok(internet) => internet,
            Err(e) => {
                eprintln!("✗ Failed to parse bundled sample {}: {}", name, e);
                return 2;
            }
        };

        let run = match execute_crawl(internet, CrawlOptions::default()).await {
            Ok(run) => run,
            Err(e) => {
                eprintln!("✗ Crawl failed: {}", e);
                return 2;
            }
        };

        let report = CrawlReport::from_registry(&run.registry);
        println!("{}", report.render_text());
        println!("END {} TEST\n", name);
    }
    0
}
