use kitreg::{KitClient, commands, config};

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "kitreg",
    about = "Registry service and CLI for reusable UI component kits",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Parser)]
enum Command {
    /// Run the registry HTTP server
    ///
    /// Port resolution (highest priority wins):
    ///   1. --port flag
    ///   2. PORT environment variable
    ///   3. [server] port in ~/.config/kitreg/config.toml
    ///   4. 3001
    Serve {
        /// Port to listen on
        #[arg(long, short = 'p')]
        port: Option<u16>,

        /// Address to bind (default: 127.0.0.1)
        #[arg(long)]
        host: Option<String>,

        /// Enable verbose logging
        #[arg(long, short = 'v')]
        verbose: bool,
    },

    /// List components for a specific kit
    List {
        /// Component kit name (e.g., shadcn)
        kit: String,

        /// Server URL (default: KITREG_SERVER or http://localhost:3001)
        #[arg(long, short = 's', value_name = "URL")]
        server: Option<String>,
    },

    /// Get a component's code from a kit
    Get {
        /// Component kit name (e.g., shadcn)
        kit: String,

        /// Component name (e.g., button)
        name: String,

        /// Write component to a file
        #[arg(long, short = 'o', value_name = "PATH")]
        out: Option<PathBuf>,

        /// Server URL (default: KITREG_SERVER or http://localhost:3001)
        #[arg(long, short = 's', value_name = "URL")]
        server: Option<String>,
    },

    /// Show the kits the server exposes
    Kits,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = config::load_config()?;

    match cli.command {
        Command::Serve {
            port,
            host,
            verbose,
        } => {
            let port = config::resolve_port(port, &config)?;
            let host = host.unwrap_or_else(|| config.server.host.clone());
            commands::serve::start_server(&config, &host, port, verbose).await
        }
        Command::List { kit, server } => {
            let client = KitClient::new(&config::resolve_server_url(server, &config))?;
            commands::list::list(&client, &kit).await
        }
        Command::Get {
            kit,
            name,
            out,
            server,
        } => {
            let client = KitClient::new(&config::resolve_server_url(server, &config))?;
            commands::get::get(&client, &kit, &name, out.as_deref()).await
        }
        Command::Kits => commands::kits::kits(&config),
    }
}
