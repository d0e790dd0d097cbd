// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use tracing::debug;

use cn_core::{EventListener, HostEvent, NotificationResult};

use crate::cli::OutputFormat;
use crate::error::Result;

use super::{open_listener, report};

pub fn run(config: Option<&Path>, file: Option<&Path>, output: OutputFormat) -> Result<()> {
    let json = read_event(file)?;
    let listener = open_listener(config)?;
    let results = run_impl(&listener, &json)?;
    report(&results, output)
}

/// Parse an event and run it through the listener.
pub(crate) fn run_impl(listener: &EventListener, json: &str) -> Result<Vec<NotificationResult>> {
    let event = HostEvent::from_json(json)?;
    debug!(event = event.name(), repository = %event.repository(), "handling event");
    Ok(listener.handle(event))
}

/// Read the event from `file`, or stdin when it is absent or "-".
fn read_event(file: Option<&Path>) -> Result<String> {
    match file {
        Some(path) if path != Path::new("-") => Ok(fs::read_to_string(path)?),
        _ => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
    }
}

#[cfg(test)]
#[path = "event_tests.rs"]
mod tests;
