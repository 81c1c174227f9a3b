mod handlers;
mod server;

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use mediarights_core::client::RightsClient;
use mediarights_core::config::ClientConfig;
use mediarights_core::types::Image;

#[derive(Parser)]
#[command(
    name = "mediarights",
    about = "mediarights — search query rewriting and usage-rights leases for image libraries",
    version
)]
struct Cli {
    /// Client configuration file (field aliases and rights categories)
    #[arg(long, global = true, env = "MEDIARIGHTS_CONFIG")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Rewrite a search query into index syntax
    Query {
        /// The query as typed by a user
        query: String,
    },

    /// Derive the leases a rights category grants on an image
    Leases {
        /// Image JSON file, or "-" for stdin
        #[arg(long, default_value = "-")]
        image: String,

        /// Rights category key
        #[arg(long)]
        category: String,
    },

    /// Plan lease changes for moving an image to another rights category
    Plan {
        /// Image JSON file, or "-" for stdin
        #[arg(long, default_value = "-")]
        image: String,

        /// New rights category key
        #[arg(long)]
        category: String,

        /// Previous rights category key
        #[arg(long, default_value = "")]
        previous: String,
    },

    /// Start the HTTP service
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "3200")]
        port: u16,

        /// Host to bind to
        #[arg(long, default_value = "127.0.0.1")]
        host: String,
    },

    /// Print version information
    Version,
}

#[tokio::main]
async fn main() -> ExitCode {
    // Logs go to stderr so JSON output on stdout stays pipeable
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), String> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Query { query } => {
            let client = RightsClient::new(config);
            println!("{}", client.rewrite_query(&query));
        }
        Commands::Leases { image, category } => {
            let client = RightsClient::new(config);
            let image = read_image(&image)?;
            let leases = client
                .derive_leases(&category, &image)
                .ok_or_else(|| format!("Unknown rights category '{}'", category))?;
            print_json(&leases)?;
        }
        Commands::Plan {
            image,
            category,
            previous,
        } => {
            let client = RightsClient::new(config);
            let image = read_image(&image)?;
            let plan = client.plan_rights_change(&image, &category, &previous);
            if plan.is_empty() {
                tracing::info!(media_id = %plan.media_id, "No lease changes needed");
            }
            print_json(&plan)?;
        }
        Commands::Serve { port, host } => {
            server::run(&host, port, RightsClient::new(config)).await?;
        }
        Commands::Version => {
            println!("mediarights {}", env!("CARGO_PKG_VERSION"));
            println!("Search query rewriting and usage-rights lease derivation");
        }
    }

    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<ClientConfig, String> {
    match path {
        Some(path) => {
            let config = ClientConfig::load(path).map_err(|e| e.to_string())?;
            tracing::info!(
                path = %path.display(),
                aliases = config.field_aliases.len(),
                categories = config.usage_rights_categories.len(),
                "Loaded client configuration"
            );
            Ok(config)
        }
        None => {
            tracing::warn!("No --config given, running with no aliases and no rights categories");
            Ok(ClientConfig::default())
        }
    }
}

fn read_image(source: &str) -> Result<Image, String> {
    let json = if source == "-" {
        let mut input = String::new();
        std::io::Read::read_to_string(&mut std::io::stdin(), &mut input)
            .map_err(|e| format!("Failed to read stdin: {}", e))?;
        input
    } else {
        std::fs::read_to_string(source)
            .map_err(|e| format!("Failed to read image file '{}': {}", source, e))?
    };

    serde_json::from_str(&json).map_err(|e| format!("Invalid image JSON: {}", e))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), String> {
    let json = serde_json::to_string_pretty(value).map_err(|e| e.to_string())?;
    println!("{}", json);
    Ok(())
}
