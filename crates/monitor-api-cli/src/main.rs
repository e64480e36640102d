//! monitor-api CLI entrypoint
//! Parses command-line arguments and runs payloads through the model codec.

// Internal imports (std, crate)
use std::path::{Path, PathBuf};

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use monitor_api_core::{Config, ModelCodec, ModelRegistry, SchemaType};
use tokio::io::AsyncReadExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "monitor-api")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// YAML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// List the known models and their fields
    Models {
        /// Path or URL to an OpenAPI document (YAML or JSON)
        ///
        /// Without it the models bundled with the client are listed
        #[arg(long)]
        schema: Option<String>,
    },
    /// Decode a payload and print it re-encoded
    Decode {
        /// Model name, e.g. LogsQueryFilter or logs_query_filter
        #[arg(long)]
        model: String,
        /// Path or URL to an OpenAPI document (YAML or JSON)
        #[arg(long)]
        schema: Option<String>,
        /// Payload file; stdin when omitted
        #[arg(long)]
        input: Option<PathBuf>,
        /// Pretty-print the re-encoded payload
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .await
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    match cli.command {
        Commands::Models { schema } => {
            if schema.is_some() {
                config.schema_source = schema;
            }
            let registry = load_registry(&config).await?;
            print!("{}", describe_models(&registry));
        }
        Commands::Decode {
            model,
            schema,
            input,
            pretty,
        } => {
            if schema.is_some() {
                config.schema_source = schema;
            }
            config.pretty |= pretty;
            let registry = load_registry(&config).await?;
            let payload = read_payload(input.as_deref()).await?;
            let output = decode_payload(&registry, &model, &payload, config.pretty)?;
            println!("{}", output);
        }
    }
    Ok(())
}

async fn load_registry(config: &Config) -> anyhow::Result<ModelRegistry> {
    let registry = ModelRegistry::load(config).await.with_context(|| {
        format!(
            "Failed to load models from {}",
            config.schema_source.as_deref().unwrap_or("built-in models")
        )
    })?;
    tracing::debug!(models = registry.len(), "Model registry ready");
    Ok(registry)
}

async fn read_payload(input: Option<&Path>) -> anyhow::Result<Vec<u8>> {
    match input {
        Some(path) => tokio::fs::read(path)
            .await
            .with_context(|| format!("Failed to read payload from {}", path.display())),
        None => {
            let mut buf = Vec::new();
            tokio::io::stdin()
                .read_to_end(&mut buf)
                .await
                .context("Failed to read payload from stdin")?;
            Ok(buf)
        }
    }
}

/// Decode `payload` as `model` and return the re-encoded JSON text.
fn decode_payload(
    registry: &ModelRegistry,
    model: &str,
    payload: &[u8],
    pretty: bool,
) -> anyhow::Result<String> {
    let codec = registry
        .get(model)
        .ok_or_else(|| anyhow::anyhow!("Unknown model '{model}'"))?;
    let name = &codec.schema().name;

    let record = codec
        .decode(payload)
        .with_context(|| format!("Failed to decode {name}"))?;
    if record.is_typed() {
        tracing::info!(model = %name, "Payload decoded as typed record");
    } else {
        tracing::info!(model = %name, "Payload does not match the declared shape; kept unparsed");
    }

    let value = codec.encode_value(&record)?;
    let text = if pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    Ok(text)
}

fn describe_models(registry: &ModelRegistry) -> String {
    let mut out = String::new();
    for schema in registry.schemas() {
        out.push_str(&schema.name);
        out.push('\n');
        for field in &schema.fields {
            let ty = match (field.ty, field.items) {
                (Some(SchemaType::Array), Some(items)) => format!("array<{items}>"),
                (Some(ty), _) => ty.to_string(),
                (None, _) => "any".to_string(),
            };
            let marker = if field.required { " (required)" } else { "" };
            out.push_str(&format!("  {}: {}{}\n", field.wire_name, ty, marker));
        }
    }
    out
}
