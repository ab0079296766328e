use crate::CLAP_STYLING;
use clap::{arg, command};

pub fn command_argument_builder() -> clap::Command {
    clap::Command::new("gossamer")
        .version(env!("CARGO_PKG_VERSION"))
        .bin_name("gossamer")
        .styles(CLAP_STYLING)
        .arg(arg!(-q --"quiet" "Suppress banner and non-essential output").required(false))
        .subcommand_required(false)
        .subcommand(
            command!("crawl")
                .about(
                    "Crawl a serialized internet, classifying every address it can reach from \
                the entry page.",
                )
                .arg(
                    arg!([FILE])
                        .required(true)
                        .help("Path to a JSON internet file"),
                )
                .arg(
                    arg!(-e --"entry" <ADDRESS>)
                        .required(false)
                        .help("Address to start crawling from (default: first page in the file)"),
                )
                .arg(
                    arg!(-o --"output" <PATH>)
                        .required(false)
                        .help("Save report to file (default: display to screen)")
                        .value_parser(clap::value_parser!(std::path::PathBuf)),
                )
                .arg(
                    arg!(-f --"format" <FORMAT>)
                        .required(false)
                        .help("Report format: text, json")
                        .value_parser(["text", "json"])
                        .default_value("text"),
                )
                .arg(
                    arg!(--"no-progress")
                        .required(false)
                        .help("Disable the progress spinner")
                        .action(clap::ArgAction::SetTrue),
                ),
        )
        .subcommand(
            command!("demo")
                .about("Crawl the bundled sample internets and print their reports."),
        )
}
