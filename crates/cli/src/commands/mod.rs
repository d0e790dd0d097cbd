// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod event;
pub mod notify;
pub mod url;

#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use tracing::debug;

use cn_core::{
    EligibilityFilterChain, EventListener, NotificationDispatcher, NotificationResult,
    OutboundHttpClient, SettingsStore,
};

use crate::cli::OutputFormat;
use crate::clone;
use crate::config::{resolve_config_path, Config};
use crate::error::{Error, Result};
use crate::http::ReqwestClient;
use crate::store::FileSettingsStore;

/// Helper to load the config and build a listener with the real HTTP client.
pub fn open_listener(config_path: Option<&Path>) -> Result<EventListener> {
    let path = resolve_config_path(config_path);
    debug!(path = %path.display(), "loading config");
    let config = Config::load(&path)?;
    let client = ReqwestClient::new(Duration::from_secs(config.server.timeout_secs));
    Ok(build_listener(&config, Arc::new(client)))
}

/// Wire the store, clone URL providers and filter chain for `config`.
pub(crate) fn build_listener(
    config: &Config,
    client: Arc<dyn OutboundHttpClient>,
) -> EventListener {
    let store: Arc<dyn SettingsStore> = Arc::new(FileSettingsStore::new(&config.repos));
    let dispatcher =
        NotificationDispatcher::new(Arc::clone(&store), clone::resolver(&config.server), client);
    let chain = EligibilityFilterChain::with_defaults(Arc::clone(&store));
    EventListener::new(chain, dispatcher, store)
}

/// Print results and fail if any of them was unsuccessful.
pub(crate) fn report(results: &[NotificationResult], format: OutputFormat) -> Result<()> {
    for result in results {
        match format {
            OutputFormat::Text => println!("{}", format_result(result)),
            // One object per line
            OutputFormat::Json => println!("{}", serde_json::to_string(result)?),
        }
    }
    check_results(results)
}

pub(crate) fn check_results(results: &[NotificationResult]) -> Result<()> {
    let failed = results.iter().filter(|r| !r.successful).count();
    if failed > 0 {
        return Err(Error::NotificationFailed {
            failed,
            total: results.len(),
        });
    }
    Ok(())
}

/// Render one result as a text line.
pub(crate) fn format_result(result: &NotificationResult) -> String {
    let status = match (result.successful, &result.url) {
        (true, Some(_)) => "sent",
        (true, None) => "skipped",
        (false, _) => "failed",
    };
    let mut line = status.to_string();
    if let Some(url) = &result.url {
        line.push(' ');
        line.push_str(url);
    }
    if let Some(message) = &result.message {
        line.push_str(": ");
        line.push_str(message);
    }
    line
}
