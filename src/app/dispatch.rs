use crate::activity::ContactAttributes;
use crate::cli::{Cli, Commands};
use crate::config::{Config, Locale};
use crate::prompt::PromptBuilder;
use anyhow::{Context, Result};
use serde_json::{Map, Value};
use std::sync::Arc;
use tracing::info;

/// Run the parsed command against the loaded configuration.
pub async fn dispatch(cli: Cli, mut config: Config) -> Result<()> {
    match cli.command {
        Commands::Serve { host, port } => {
            if let Some(host) = host {
                config.gateway.host = host;
            }
            if let Some(port) = port {
                config.gateway.port = port;
            }
            config.validate().context("invalid configuration")?;

            let (host, port) = (&config.gateway.host, config.gateway.port);
            if port == 0 {
                info!("Starting journey-drafter on {host} (random port)");
            } else {
                info!("Starting journey-drafter on {host}:{port}");
            }
            crate::gateway::run_gateway(Arc::new(config)).await
        }

        Commands::RenderPrompt { attributes, locale } => {
            let prompt = render_prompt(&config, &attributes, locale)?;
            println!("{prompt}");
            Ok(())
        }
    }
}

/// Render the prompt for `attributes` given in journey argument order.
pub fn render_prompt(
    config: &Config,
    attributes: &[(String, String)],
    locale: Option<Locale>,
) -> Result<String> {
    let arguments: Vec<Value> = attributes
        .iter()
        .map(|(key, value)| {
            let mut entry = Map::new();
            entry.insert(key.clone(), Value::String(value.clone()));
            Value::Object(entry)
        })
        .collect();
    let contact = ContactAttributes::from_arguments(&arguments);

    let builder = PromptBuilder::new(locale.unwrap_or(config.prompt.locale))
        .context("load prompt templates")?;
    let request = builder.build(&contact).context("render prompt")?;
    Ok(request.to_string())
}
