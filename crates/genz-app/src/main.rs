use std::future::Future;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use genz_config::Config;
use genz_io::{StdoutShare, SystemClipboard, copy_entry, share_entry};
use genz_source::{TermSource, load_with_status};
use genz_types::{LoadStatus, SearchResults};
use tokio::signal;
use tracing_subscriber::util::SubscriberInitExt;

pub mod cli;
pub mod context;
pub mod controller;
pub mod events;
pub mod io;
pub mod logging;
pub mod profile;
pub mod render;
pub mod state;
pub mod status;
pub mod ui;


use self::cli::{Cli, Command};
use self::controller::AppController;
use self::events::share::COPIED;
use self::render::Renderer;
use self::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    // Config loading logs through a scoped subscriber until the configured
    // filter is known
    let config = tracing::subscriber::with_default(
        logging::stderr_subscriber(logging::BOOTSTRAP_FILTER, cli.log_json),
        || profile::load_config(cli.config.as_deref()),
    )?;
    let config = cli.apply(config);
    logging::stderr_subscriber(&config.log_filter, cli.log_json)
        .try_init()
        .context("Failed to install the log subscriber")?;

    let source = profile::build_source(&config.source)?;

    match cli.command() {
        Command::Interactive => {
            let state = Arc::new(AppState::new(config));

            // Shutdown future (Ctrl+C)
            let shutdown = async {
                if let Err(e) = signal::ctrl_c().await {
                    tracing::error!("Failed to listen for ctrl+c: {e}");
                    std::future::pending::<()>().await;
                }
            };

            run(state, source, shutdown).await;
            Ok(())
        }
        command => run_command(command, &config, source).await,
    }
}

pub async fn run(
    state: Arc<AppState>,
    source: Box<dyn TermSource>,
    shutdown: impl Future<Output = ()>,
) {
    let controller = AppController::new(state);
    let mut tasks = controller.spawn_tasks(
        source,
        Arc::new(SystemClipboard::new()),
        Arc::new(StdoutShare),
    );

    tokio::pin!(shutdown);

    loop {
        tokio::select! {
            _ = &mut shutdown => {
                tracing::info!("Shutdown requested");
                break;
            }
            result = tasks.join_next() => {
                match result {
                    None => break,
                    Some(Ok(Ok(()))) => {}
                    Some(Ok(Err(e))) => {
                        tracing::error!("task exited: {e}");
                        break;
                    }
                    Some(Err(e)) => {
                        tracing::error!("task panicked: {e}");
                        break;
                    }
                }
            }
        }
    }

    controller.shutdown();
    tasks.abort_all();
}

/// One-shot subcommands: load once, print, exit
async fn run_command(
    command: Command,
    config: &Config,
    source: Box<dyn TermSource>,
) -> anyhow::Result<()> {
    let (store, status) = load_with_status(source.as_ref()).await;

    let renderer = Renderer::new(
        config.ui.color.enabled(atty::is(atty::Stream::Stdout)),
        config.ui.show_tags,
    );
    if let LoadStatus::Failed { .. } = status {
        eprintln!("{}", renderer.status(&status));
    }

    match command {
        Command::Search { query, json } => {
            let results = genz_lang_vietnamese::search_cards(store.records(), &query.join(" "));
            print_results(&renderer, &results, json)
        }
        Command::List { json } => {
            let results = genz_lang_vietnamese::search_cards(store.records(), "");
            print_results(&renderer, &results, json)
        }
        Command::Copy { term } => {
            let record = store
                .find_term(&term)
                .with_context(|| format!("Hông có từ \"{term}\" trong từ điển"))?;
            let clipboard = SystemClipboard::one_shot();
            if clipboard.waits_for_handover() {
                eprintln!("Giữ clipboard tới khi bạn copy thứ khác...");
            }

            let record = record.clone();
            let term = record.term.clone();
            let copied =
                tokio::task::spawn_blocking(move || copy_entry(&clipboard, &record)).await?;
            if !copied {
                anyhow::bail!("Could not copy \"{term}\" to the clipboard");
            }
            println!("{COPIED}");
            Ok(())
        }
        Command::Share { term } => {
            let record = store
                .find_term(&term)
                .with_context(|| format!("Hông có từ \"{term}\" trong từ điển"))?;
            if !share_entry(&StdoutShare, record) {
                anyhow::bail!("Could not share \"{}\"", record.term);
            }
            Ok(())
        }
        Command::Interactive => Ok(()),
    }
}

fn print_results(renderer: &Renderer, results: &SearchResults, json: bool) -> anyhow::Result<()> {
    if json {
        let out = serde_json::to_string_pretty(results).context("Failed to encode results")?;
        println!("{out}");
    } else {
        print!("{}", renderer.results(results));
    }
    Ok(())
}
