use crate::config::Locale;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// `journey-drafter` - Email drafts for journey contacts, generated on demand.
#[derive(Parser, Debug)]
#[command(name = "journey-drafter")]
#[command(version)]
#[command(about = "Custom journey activity that drafts personalised emails.", long_about = None)]
pub struct Cli {
    /// Config file (default: ~/.journey-drafter/config.toml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the activity HTTP server
    Serve {
        /// Host to bind to (overrides gateway.host)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides gateway.port; 0 picks a free port)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Print the prompt a contact would receive, without calling the generation service
    RenderPrompt {
        /// Contact attribute as Key=Value (repeatable, in argument order)
        #[arg(long = "attr", value_name = "KEY=VALUE", value_parser = parse_attribute)]
        attributes: Vec<(String, String)>,

        /// Prompt language (overrides prompt.locale)
        #[arg(long)]
        locale: Option<Locale>,
    },
}

/// Split `Key=Value` at the first `=`. The value may be empty.
pub fn parse_attribute(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got {raw:?}"))?;
    let key = key.trim();
    if key.is_empty() {
        return Err(format!("attribute name is empty in {raw:?}"));
    }
    Ok((key.to_string(), value.to_string()))
}
