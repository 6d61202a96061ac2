//! apiscope - terminal companion for an API reverse-engineering backend

use clap::Parser;

mod app;
mod cli;
mod client;
mod config;
mod dispatch;
mod downloads;
mod error;
mod forms;
mod models;
mod output;
mod refresher;
mod render;
mod state;

use cli::{CapturedCommands, Cli, CommandContext, Commands, GlobalOptions};
use error::Result;
use forms::SingleRequestForm;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// `warn` by default, `debug` with --debug; RUST_LOG overrides both
fn init_logging(debug: bool) {
    let default_filter = if debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts),
        Commands::Status => cli::status::run(&opts).await,
        Commands::Version => {
            println!("apiscope version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Analyze {
            url,
            method,
            headers,
            data,
            params,
        } => {
            let ctx = CommandContext::new(&opts)?;
            let form = SingleRequestForm {
                url,
                method,
                headers: headers.unwrap_or_default(),
                body: data.unwrap_or_default(),
                params: params.unwrap_or_default(),
            };
            cli::analyze::run(&ctx, form).await
        }
        Commands::Batch { file, endpoints } => {
            let ctx = CommandContext::new(&opts)?;
            cli::batch::run(&ctx, file.as_deref(), endpoints).await
        }
        Commands::Discover { base_url, pick } => {
            let ctx = CommandContext::new(&opts)?;
            cli::discover::run(&ctx, base_url, pick).await
        }
        Commands::Captured(captured_cmd) => {
            let ctx = CommandContext::new(&opts)?;
            match captured_cmd {
                CapturedCommands::List => cli::captured::list(&ctx).await,
                CapturedCommands::Clear { yes } => cli::captured::clear(&ctx, yes).await,
            }
        }
        Commands::Export { format, out_dir } => {
            let ctx = CommandContext::new(&opts)?;
            cli::export::run(&ctx, format, out_dir.as_deref()).await
        }
        Commands::Docs { download, out_dir } => {
            let ctx = CommandContext::new(&opts)?;
            cli::docs::run(&ctx, download, out_dir.as_deref()).await
        }
        Commands::Watch { interval } => {
            let ctx = CommandContext::new(&opts)?;
            cli::watch::run(&ctx, interval).await
        }
        Commands::Console => {
            let ctx = CommandContext::new(&opts)?;
            cli::console::run(&ctx).await
        }
    }
}
