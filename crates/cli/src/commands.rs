#![forbid(unsafe_code)]

use crate::cli::{Command, DetailsArgs, LatestArgs, ServersArgs};
use crate::error::Error;
use config::{Config, FetchMode};
use std::collections::BTreeMap;
use steam::appid::AppId;
use steam::fetch::FetchCoordinator;
use steam::filedetails::{FileDetails, Query};
use steam::notify::{Discord, Notifier, Telegram};
use steam::serverlist::{Filter, FilterKey, Server, ServerList, version_map};
use steam::version::Consensus;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

/// Run `command` and return what should be printed.
pub async fn run(
    command: Command,
    config: Config,
    cancel: CancellationToken,
) -> Result<String, Error> {
    match command {
        Command::Details(args) => details(args, &config, cancel).await,
        Command::Servers(args) => servers(args, &config).await,
        Command::Latest(args) => latest(args, &config).await,
        Command::Config => Ok(config.to_toml()?),
    }
}

fn key(config: &Config) -> Result<&str, Error> {
    config.api.key.as_deref().ok_or(Error::MissingKey)
}

async fn details(
    args: DetailsArgs,
    config: &Config,
    cancel: CancellationToken,
) -> Result<String, Error> {
    let coordinator = FetchCoordinator::new(args.concurrency.unwrap_or(config.fetch.concurrency))
        .with_cancellation(cancel);
    let query = Query {
        language: args.language.map(|l| l.to_string()).unwrap_or_default(),
        ..Query::default()
    }
    .with_app_id(args.app_id.unwrap_or_default());

    let client = steam::http_client(config.api.timeout)?;
    let api = FileDetails::new(client, key(config)?, query)
        .with_chunk_max(config.fetch.chunk_max)
        .with_coordinator(coordinator);

    let mode = args.mode.map(FetchMode::from).unwrap_or(config.fetch.mode);
    let outcome = match mode {
        FetchMode::Sequential => api.get(&args.ids).await?,
        FetchMode::Concurrent => api.get_concurrent(&args.ids).await?,
    };

    let records = match outcome.into_result() {
        Ok(records) => records,
        Err(partial) if args.strict => {
            return Err(Error::Incomplete {
                kept: partial.records.len(),
                source: partial.error,
            });
        }
        Err(partial) => {
            warn!(
                kept = partial.records.len(),
                failed_chunks = partial.failed_chunks,
                error = %partial.error,
                "fetch incomplete"
            );
            partial.records
        }
    };
    Ok(serde_json::to_string_pretty(&records)?)
}

async fn fetch_servers(
    app_id: u64,
    map: Option<&str>,
    limit: Option<u32>,
    config: &Config,
) -> Result<Vec<Server>, Error> {
    let mut filter = Filter::new();
    filter.add(FilterKey::AppId, app_id);
    if let Some(map) = map {
        filter.add(FilterKey::Map, map);
    }

    let client = steam::http_client(config.api.timeout)?;
    let api = ServerList::new(client, key(config)?)
        .with_limit(limit.unwrap_or(config.serverlist.limit));
    let servers = api.get(&filter).await?;
    info!(app = %AppId(app_id), servers = servers.len(), "servers listed");
    Ok(servers)
}

async fn servers(args: ServersArgs, config: &Config) -> Result<String, Error> {
    let servers = fetch_servers(args.app_id, args.map.as_deref(), args.limit, config).await?;
    if args.versions {
        let histogram: BTreeMap<_, _> = version_map(&servers).into_iter().collect();
        return Ok(serde_json::to_string_pretty(&histogram)?);
    }
    Ok(serde_json::to_string_pretty(&servers)?)
}

async fn latest(args: LatestArgs, config: &Config) -> Result<String, Error> {
    let threshold = args.threshold.unwrap_or(config.consensus.threshold);
    let fallback = args.fallback.unwrap_or_else(|| match args.threshold {
        // A threshold from the command line gets its own default fallback.
        Some(threshold) => config::Consensus {
            threshold,
            fallback: None,
        }
        .fallback(),
        None => config.consensus.fallback(),
    });
    let consensus = Consensus::new(threshold, fallback)?;

    let servers = fetch_servers(args.app_id, None, None, config).await?;
    let version = consensus.select(&version_map(&servers))?;

    if args.notify {
        let message = format!("{} version: `{version}`", AppId(args.app_id));
        announce(&message, config).await;
    }
    Ok(version)
}

/// Post `message` on every configured channel. Failures are logged only.
async fn announce(message: &str, config: &Config) {
    let client = match steam::http_client(config.api.timeout) {
        Ok(client) => client,
        Err(err) => {
            warn!(error = %err, "cannot build notification client");
            return;
        }
    };

    let mut notifiers: Vec<(&str, Box<dyn Notifier>)> = Vec::new();
    if let Some(discord) = &config.notify.discord {
        notifiers.push((
            "discord",
            Box::new(Discord::new(
                client.clone(),
                &discord.webhook_id,
                &discord.webhook_token,
            )),
        ));
    }
    if let Some(telegram) = &config.notify.telegram {
        notifiers.push((
            "telegram",
            Box::new(Telegram::new(client, &telegram.bot_token, &telegram.chat_id)),
        ));
    }
    if notifiers.is_empty() {
        warn!("no notification channel configured");
    }

    for (channel, notifier) in notifiers {
        match notifier.send(message).await {
            Ok(id) => info!(channel, id, "notification sent"),
            Err(err) => warn!(channel, error = %err, "notification failed"),
        }
    }
}
