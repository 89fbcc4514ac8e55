//! JSON-LD validation command

use std::path::Path;

use colored::Colorize;
use serde_json::json;

use ldgen::config::Config;
use ldgen::error::Result;
use ldgen::validate::{parse, validate_round_trip, validate_schema};

use crate::utils::{read_input, to_json, use_color};

/// Validate a JSON-LD document. Returns the exit code: 0 when valid, 1 otherwise.
pub fn cmd_validate(file: Option<&Path>, json: bool) -> Result<i32> {
    let content = read_input(file)?;
    let config = Config::load()?;

    let schema = parse(&content)?;
    let report = validate_schema(&schema);
    let round_trip = validate_round_trip(&schema);
    let ok = report.valid && round_trip;

    if json || !use_color() {
        let out = json!({
            "valid": report.valid,
            "roundTrip": round_trip,
            "errors": report.errors,
        });
        println!("{}", to_json(&out, config.pretty)?);
    } else {
        println!();
        if report.valid {
            println!("  {} {} entities, all required properties present", "✓".green(), schema.graph.len());
        } else {
            println!("  {} {} problem(s):", "✗".red(), report.errors.len());
            for error in &report.errors {
                println!("      {}", error);
            }
        }
        if round_trip {
            println!("  {} round trip preserved the document", "✓".green());
        } else {
            println!("  {} round trip changed the document", "✗".red());
        }
        println!();
    }

    Ok(if ok { 0 } else { 1 })
}
