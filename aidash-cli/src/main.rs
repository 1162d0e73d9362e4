use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;
mod config;

#[derive(Parser)]
#[command(name = "aidash", about = "Dashboard for configured AI service providers")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage configuration
    Config(commands::config::ConfigArgs),
    /// List configured services by group
    List(commands::list::ListArgs),
    /// Run the dashboard server
    Serve(commands::serve::ServeArgs),
    /// Test connectivity of one service
    Test(commands::test::TestArgs),
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    match cli.command {
        Commands::Config(args) => commands::config::run(args),
        Commands::List(args) => commands::list::run(args),
        Commands::Serve(args) => commands::serve::run(args).await,
        Commands::Test(args) => commands::test::run(args).await,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_test_command() {
        let cli = Cli::try_parse_from(["aidash", "-v", "test", "openai", "--providers", "p.json"])
            .unwrap();
        assert!(cli.verbose);
        match cli.command {
            Commands::Test(args) => {
                assert_eq!(args.service, "openai");
                assert_eq!(args.providers.unwrap().to_str(), Some("p.json"));
            }
            _ => panic!("expected test command"),
        }
    }

    #[test]
    fn test_serve_flags_are_optional() {
        let cli = Cli::try_parse_from(["aidash", "serve"]).unwrap();
        match cli.command {
            Commands::Serve(args) => {
                assert!(args.host.is_none());
                assert!(args.port.is_none());
            }
            _ => panic!("expected serve command"),
        }
    }
}
