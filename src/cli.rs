use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Shell types for completion generation
#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum CompletionShell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

#[derive(Parser)]
#[command(name = "ldgen")]
#[command(author, version, about = "Detect page entities and generate schema.org JSON-LD", long_about = None)]
#[command(after_help = r#"Examples:
  ldgen detect page.md                                 Rank entity types found in a page
  ldgen detect page.md --explain                       Show the score breakdown
  cat page.md | ldgen generate --url https://x.com/p   JSON-LD from stdin
  ldgen validate schema.json                           Check required properties
  ldgen howto --title "Brew Coffee" steps.md           HowTo schema from instructions

Logging goes to stderr; set RUST_LOG=ldgen=debug to see scoring details.
"#)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Detect the entity types a page represents
    #[command(after_help = r#"Examples:
  ldgen detect product.html
  ldgen detect post.md --explain     # every candidate with its evidence
  ldgen detect post.md --json        # machine-readable output
"#)]
    Detect {
        /// Content file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Show the score breakdown for every candidate type
        #[arg(long)]
        explain: bool,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate JSON-LD for a page
    #[command(after_help = r#"Examples:
  ldgen generate post.md --url https://example.com/blog/post
  ldgen generate post.md --url /blog/post          # joined onto base_url from config
  ldgen generate post.md --eeat signals.json --modified-today
"#)]
    Generate {
        /// Content file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Page URL used for @id values (absolute, or relative to base_url)
        #[arg(long)]
        url: Option<String>,

        /// JSON file with author/publisher/date/citation signals
        #[arg(long, value_name = "SIGNALS.json")]
        eeat: Option<PathBuf>,

        /// Stamp dateModified with today's date
        #[arg(long)]
        modified_today: bool,
    },

    /// Validate a JSON-LD document (exits non-zero when invalid)
    Validate {
        /// JSON-LD file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Generate a HowTo schema from step-by-step instructions
    Howto {
        /// Title of the guide
        #[arg(long)]
        title: String,

        /// Instructions file (reads stdin when omitted or "-")
        file: Option<PathBuf>,

        /// Total time as an ISO-8601 duration (e.g. PT30M)
        #[arg(long)]
        total_time: Option<String>,

        /// Page URL used for @id
        #[arg(long)]
        url: Option<String>,

        /// Supply needed (repeatable)
        #[arg(long = "supply")]
        supplies: Vec<String>,

        /// Tool needed (repeatable)
        #[arg(long = "tool")]
        tools: Vec<String>,
    },

    /// Generate a Person schema
    Person {
        /// Full name
        name: String,

        #[arg(long)]
        job_title: Option<String>,

        /// LinkedIn profile URL (always included in sameAs)
        #[arg(long)]
        linkedin: Option<String>,

        /// Twitter/X profile URL
        #[arg(long)]
        twitter: Option<String>,

        /// Personal or profile page URL
        #[arg(long)]
        url: Option<String>,

        /// Employer name
        #[arg(long)]
        works_for: Option<String>,
    },

    /// Print the content hash used as a cache key
    Hash {
        /// Content file (reads stdin when omitted or "-")
        file: Option<PathBuf>,
    },

    /// Generate shell completions
    #[command(after_help = r#"Examples:
  ldgen completions bash >> ~/.bashrc
  ldgen completions zsh >> ~/.zshrc
  ldgen completions fish > ~/.config/fish/completions/ldgen.fish
"#)]
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: CompletionShell,
    },
}
