use clap::Parser;
use checkrun_analyzer::errors::ErrorHandler;
use checkrun_analyzer::structs::cli::Cli;
use checkrun_analyzer::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.command.target().log_filter()))
        .format_timestamp(None)
        .init();

    let mut runner = CommandRunner::new();
    if let Err(e) = runner.run_command(cli.command).await {
        ErrorHandler::handle_error(&e);
        std::process::exit(1);
    }
}
