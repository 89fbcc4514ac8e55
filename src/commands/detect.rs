//! Entity detection command

use std::path::Path;

use colored::Colorize;

use ldgen::config::Config;
use ldgen::detect::{detect_entities, score_entities, DetectedEntity, EntityScore};
use ldgen::error::Result;
use ldgen::signals::CONFIDENCE_THRESHOLD;

use crate::utils::{format_confidence, read_input, to_json, use_color};

/// Rank the entity types a page represents
pub fn cmd_detect(file: Option<&Path>, explain: bool, json: bool) -> Result<()> {
    let content = read_input(file)?;
    let config = Config::load()?;
    let human = !json && use_color();

    if explain {
        let scores = score_entities(&content);
        if !human {
            println!("{}", to_json(&scores, config.pretty)?);
        } else if scores.is_empty() {
            println!("Content is too short to score and has no unambiguous signals.");
        } else {
            print_scores(&scores);
        }
        return Ok(());
    }

    let entities = detect_entities(&content);
    if !human {
        println!("{}", to_json(&entities, config.pretty)?);
        return Ok(());
    }

    if entities.is_empty() {
        println!("No entities detected.");
        println!("  Run with --explain to see how each type scored.");
        return Ok(());
    }

    println!();
    for entity in &entities {
        print_entity(entity);
    }
    Ok(())
}

fn print_entity(entity: &DetectedEntity) {
    println!(
        "  {} {} {}",
        format_confidence(entity.confidence).green(),
        entity.entity_type.to_string().bold(),
        entity.name.dimmed()
    );
    for (key, value) in &entity.properties {
        let shown = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Array(items) => format!("{} items", items.len()),
            other => other.to_string(),
        };
        println!("       {:<14} {}", key, shown);
    }
    println!();
}

fn print_scores(scores: &[EntityScore]) {
    println!();
    for score in scores {
        let pct = format_confidence(score.confidence);
        let pct = if score.confidence >= CONFIDENCE_THRESHOLD {
            pct.green()
        } else {
            pct.dimmed()
        };
        println!(
            "  {} {:<15} raw {:>6.2} / {:<6.2} strong {} medium {} negative {}",
            pct,
            score.entity_type.to_string().bold(),
            score.raw_score,
            score.max_score,
            score.strong_matches,
            score.medium_matches,
            score.negative_matches,
        );
        for item in &score.evidence {
            let line = if item.starts_with("negated:")
                || item.starts_with("negative:")
                || item.starts_with("exclusion:")
                || item.starts_with("structure-mismatch:")
            {
                item.red()
            } else {
                item.normal()
            };
            println!("       {}", line);
        }
        println!();
    }
}
