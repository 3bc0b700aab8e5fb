use clap::Parser;
use std::process::ExitCode;
use text_stats::app;
use text_stats::args::Args;
use text_stats::config::Config;

fn main() -> ExitCode {
    let args = Args::parse();
    let config = Config::from(args);

    // Per-pass failures are reported on stderr and never fail the run
    app::run(&config);
    ExitCode::SUCCESS
}
