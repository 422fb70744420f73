//! Secret santa entry point
//!
//! Launched by the host either to serve an appspace or to migrate its data.

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use shared::{AppspaceId, appspace_info, logging};

use secret_santa::config::bind_address;
use secret_santa::{AppConfig, FilePairingStore, FileSantaApp, Migrator};

#[derive(Parser, Debug)]
#[command(name = "secret-santa")]
#[command(about = "Secret santa pairings for an appspace")]
struct Args {
    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Appspace name used to tag log events
    #[arg(long, default_value = "appspace", global = true)]
    appspace_id: String,

    /// Appspace data directory (holds pairings.txt)
    #[arg(long, default_value = "./appspace", global = true)]
    appspace_dir: PathBuf,

    /// App directory (holds templates/ and static/)
    #[arg(long, default_value = ".", global = true)]
    app_dir: PathBuf,

    /// Host avatars directory (defaults to <appspace-dir>/avatars)
    #[arg(long, global = true)]
    avatars_dir: Option<PathBuf>,

    /// Roster exported by the host (defaults to <appspace-dir>/users.json)
    #[arg(long, global = true)]
    users_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve the app over HTTP
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        #[arg(long, default_value = "8080")]
        port: u16,
    },
    /// Move the appspace data between schema versions
    Migrate {
        #[arg(long)]
        from: u32,

        #[arg(long)]
        to: u32,
    },
}

impl Args {
    fn app_config(&self) -> AppConfig {
        let mut config = AppConfig::new(&self.app_dir, &self.appspace_dir);
        if let Some(dir) = &self.avatars_dir {
            config = config.with_avatars_dir(dir);
        }
        if let Some(path) = &self.users_file {
            config = config.with_users_file(path);
        }
        config
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let appspace = AppspaceId::init(args.appspace_id.clone());
    logging::init_tracing(Some(&args.log_level));

    let config = args.app_config();
    match args.command {
        Command::Serve { ref host, port } => {
            logging::log_startup(appspace, "secret santa server");
            let addr = bind_address(host, port)?;
            let app = FileSantaApp::from_config(config).context("Failed to set up app")?;
            app.run(addr).await.context("Server stopped with an error")?;
            logging::log_success(appspace, "Secret santa stopped gracefully");
        }
        Command::Migrate { from, to } => {
            let store = FilePairingStore::new(config.pairings_file());
            let reached = Migrator::for_store(store)
                .migrate(from, to)
                .await
                .with_context(|| format!("Migration from {from} to {to} failed"))?;
            appspace_info!(appspace, "✅ Appspace data at version {}", reached);
        }
    }

    Ok(())
}
