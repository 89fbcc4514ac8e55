//! Miscellaneous commands: howto, person, hash, completions

use clap::CommandFactory;
use clap_complete::{generate, Shell};
use std::io;
use std::path::Path;

use ldgen::cli::{Cli, CompletionShell};
use ldgen::config::Config;
use ldgen::error::Result;
use ldgen::howto::{generate_howto_schema, HowToOptions};
use ldgen::normalize::content_hash;
use ldgen::schema::{create_person_schema, GeneratedSchema, PersonOptions};

use crate::utils::{read_input, to_json};

/// HowTo JSON-LD from a title and instruction text
pub fn cmd_howto(
    title: &str,
    file: Option<&Path>,
    total_time: Option<String>,
    url: Option<String>,
    supplies: Vec<String>,
    tools: Vec<String>,
) -> Result<()> {
    let content = read_input(file)?;
    let config = Config::load()?;

    let options = HowToOptions {
        total_time,
        supplies,
        tools,
        page_url: url.map(|u| config.page_url(&u)).transpose()?,
        ..Default::default()
    };
    let howto = generate_howto_schema(title, &content, &options);
    if howto.get("step").is_none() {
        tracing::warn!("no steps found in the instructions");
    }

    println!("{}", to_json(&GeneratedSchema::new(vec![howto]), config.pretty)?);
    Ok(())
}

/// Standalone Person JSON-LD
pub fn cmd_person(
    name: &str,
    job_title: Option<String>,
    linkedin: Option<String>,
    twitter: Option<String>,
    url: Option<String>,
    works_for: Option<String>,
) -> Result<()> {
    let config = Config::load()?;

    let options = PersonOptions {
        job_title,
        linkedin_url: linkedin,
        twitter_url: twitter,
        page_url: url.as_deref().map(|u| config.page_url(u)).transpose()?,
        url,
        works_for,
        ..Default::default()
    };
    let person = create_person_schema(name, &options);

    println!("{}", to_json(&GeneratedSchema::new(vec![person]), config.pretty)?);
    Ok(())
}

/// Print the cache key for some content
pub fn cmd_hash(file: Option<&Path>) -> Result<()> {
    let content = read_input(file)?;
    println!("{}", content_hash(&content));
    Ok(())
}

/// Generate shell completions
pub fn cmd_completions(shell: CompletionShell) -> Result<()> {
    let mut cmd = Cli::command();
    let shell = match shell {
        CompletionShell::Bash => Shell::Bash,
        CompletionShell::Zsh => Shell::Zsh,
        CompletionShell::Fish => Shell::Fish,
        CompletionShell::Powershell => Shell::PowerShell,
    };
    generate(shell, &mut cmd, "ldgen", &mut io::stdout());
    Ok(())
}
