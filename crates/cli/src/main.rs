#![forbid(unsafe_code)]

use clap::Parser;
use config::Config;
use flume::bounded;
use std::io::{self, Write};
use steam_rs::{cli::Cli, commands, signals::wait_for_signal};
use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

#[cfg(feature = "jemalloc")]
#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.verbosity.tracing_level_filter())
        .with_writer(io::stderr)
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    debug!(config = ?cli.config, command = ?cli.command);

    let mut config = match &cli.config {
        Some(path) => Config::load(path)?,
        _ => Config::new()?,
    };
    if let Some(key) = cli.key {
        config.api.key = Some(key);
    }

    let (events_tx, events_rx) = bounded(8);
    let cancel = CancellationToken::new();

    let run = commands::run(cli.command, config, cancel.clone());
    tokio::pin!(run);
    let signals = wait_for_signal(&events_tx);
    tokio::pin!(signals);

    loop {
        tokio::select! {
            output = &mut run => {
                let output = output?;
                writeln!(io::stdout().lock(), "{output}")?;
                return Ok(());
            }
            err = &mut signals => {
                tracing::error!(error = ?err, "Error while waiting for signal");
                err?;
                anyhow::bail!("Signal handler stopped");
            }
            res = events_rx.recv_async() => {
                let event = res?;
                if cancel.is_cancelled() {
                    anyhow::bail!("Interrupted again, not waiting for requests in flight");
                }
                info!(?event, "Stopping, waiting for requests in flight");
                cancel.cancel();
            }
        }
    }
}
