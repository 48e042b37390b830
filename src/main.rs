use clap::Parser;
use env_logger::Env;
use fix_agent::structs::cli::Cli;
use fix_agent::workers::command_runner::CommandRunner;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .format_target(false)
        .init();

    let cli = Cli::parse();
    let mut runner = CommandRunner::new(cli.config);
    runner.run_command(cli.command).await?;
    Ok(())
}
