use clap::Parser;
use clap::Subcommand;
use ragchat::api::serve_api;
use ragchat::config::AppConfig;
use ragchat::rag::ChatService;
use ragchat::Result;
use tracing::info;

#[derive(Parser)]
#[command(name = "ragchat")]
#[command(about = "Retrieval-augmented chat API server")]
#[command(version)]
struct Cli {
    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the API server
    Serve {
        /// Host to bind
        #[arg(long)]
        host: Option<String>,
        /// Port to bind
        #[arg(long)]
        port: Option<u16>,
        /// Enable permissive CORS (overrides config)
        #[arg(long)]
        cors: bool,
    },
    /// Run one chat query from the terminal and print the JSON response
    Ask {
        /// The question to answer
        query: String,
    },
    /// Show current configuration
    Config,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        ragchat::logging::init_logging_with_level("debug")?;
    } else {
        ragchat::logging::init_logging()?;
    }

    // Load configuration
    let config = AppConfig::load()?;
    info!("Configuration loaded successfully");

    match cli.command {
        Commands::Serve { host, port, cors } => {
            let host = host.unwrap_or_else(|| config.server.host.clone());
            let port = port.unwrap_or(config.server.port);
            let enable_cors = cors || config.server.enable_cors;

            println!("🚀 Starting ragchat API Server");
            println!("==============================\n");
            println!("📍 Host: {host}");
            println!("🔌 Port: {port}");
            println!(
                "🌐 CORS: {}",
                if enable_cors { "Enabled" } else { "Disabled" }
            );
            println!();

            serve_api(&config, host, port, enable_cors).await?;
        }
        Commands::Ask { query } => {
            handle_ask_command(&config, &query).await?;
        }
        Commands::Config => {
            handle_config_command(&config);
        }
    }

    Ok(())
}

async fn handle_ask_command(config: &AppConfig, query: &str) -> Result<()> {
    let service = ChatService::new(config)?;

    let body = serde_json::json!({ "query": query }).to_string();
    let response = service.handle(&body).await?;

    println!("{}", serde_json::to_string_pretty(&response)?);
    Ok(())
}

fn handle_config_command(config: &AppConfig) {
    println!("📋 ragchat Configuration:");
    println!();

    println!("🌐 Server:");
    println!("  Host: {}", config.server.host);
    println!("  Port: {}", config.server.port);
    println!("  CORS: {}", config.server.enable_cors);
    println!();

    println!("📝 Logging:");
    println!("  Level: {}", config.logging.level);
    println!("  Backtrace: {}", config.logging.backtrace);
    println!();

    println!("🔍 Search:");
    println!("  Endpoint: {}", mask_endpoint(config.search_endpoint()));
    println!("  Index: {}", config.search_index());
    println!("  Top-K: {}", config.top_k());
    println!("  Timeout: {}s", config.search.timeout_secs);
    println!();

    println!("🧠 Generation:");
    println!(
        "  Endpoint: {}",
        mask_endpoint(config.generation_endpoint())
    );
    println!("  Deployment: {}", config.deployment());
    println!("  Max tokens: {}", config.max_tokens());
    println!("  Temperature: {}", config.temperature());
    println!("  Timeout: {}s", config.generation.timeout_secs);
}

/// Mask an endpoint URL for display (scheme and host only)
fn mask_endpoint(endpoint: &str) -> String {
    if let Ok(parsed) = url::Url::parse(endpoint) {
        if let Some(host) = parsed.host_str() {
            format!("{}://{}", parsed.scheme(), host)
        } else {
            "***masked***".to_string()
        }
    } else {
        "***invalid***".to_string()
    }
}
