//! html2md - HTML to Markdown converter

use std::io;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "html2md")]
#[command(version, about = "Convert HTML on stdin to Markdown on stdout", long_about = None)]
#[command(after_help = "EXAMPLES:
    html2md < page.html > page.md
    curl -s https://example.com | html2md

Set RUST_LOG=debug to see skipped content.")]
struct Cli {}

fn main() -> ExitCode {
    let _cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    match html2md::convert(io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("conversion failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
