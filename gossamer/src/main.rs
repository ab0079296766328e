use gossamer::commands::command_argument_builder;
use gossamer::handlers;
use gossamer_core::print_banner;

#[tokio::main]
async fn main() {
    let cmd = command_argument_builder();
    let chosen_command = cmd.get_matches();
    let quiet = chosen_command.get_flag("quiet");

    // Show banner unless --quiet flag is set
    if !quiet {
        print_banner();
    }

    if chosen_command.subcommand().is_none() {
        // No subcommand provided, just show the banner
        return;
    }

    let exit_code = match chosen_command.subcommand() {
        Some(("crawl", primary_command)) => handlers::handle_crawl(primary_command).await,
        Some(("demo", _)) => handlers::handle_demo().await,
        _ => unreachable!("clap should ensure we don't get here"),
    };

    if exit_code != 0 {
        std::process::exit(exit_code);
    }
}
