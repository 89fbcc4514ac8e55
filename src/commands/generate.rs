//! JSON-LD generation command

use std::path::Path;

use chrono::Local;
use tracing::warn;

use ldgen::config::Config;
use ldgen::eeat::{add_eeat_signals, EeatSignals};
use ldgen::error::{LdgenError, Result};
use ldgen::schema::generate_from_content;

use crate::utils::{read_input, to_json};

/// Detect entities and print the JSON-LD document
pub fn cmd_generate(
    file: Option<&Path>,
    url: Option<&str>,
    eeat: Option<&Path>,
    modified_today: bool,
) -> Result<()> {
    let content = read_input(file)?;
    let config = Config::load()?;

    let page_url = url.map(|u| config.page_url(u)).transpose()?;
    let schema = generate_from_content(&content, page_url.as_deref());
    if schema.is_empty() {
        warn!("no entities detected; emitting an empty @graph");
    }

    let mut signals = match eeat {
        Some(path) => load_signals(path)?,
        None => EeatSignals::default(),
    };
    if modified_today {
        signals.date_modified = Some(Local::now().format("%Y-%m-%d").to_string());
    }
    let signals = config.apply_defaults(signals);

    let schema = if signals.is_empty() {
        schema
    } else {
        add_eeat_signals(&schema, &signals)
    };

    println!("{}", to_json(&schema, config.pretty)?);
    Ok(())
}

fn load_signals(path: &Path) -> Result<EeatSignals> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        LdgenError::InputError(format!("Could not read {}: {}", path.display(), e))
    })?;
    Ok(serde_json::from_str(&raw)?)
}
