//! Atelier - Native entry point
//!
//! Opens the gallery in a desktop window, optionally with a custom catalog
//! and configuration.

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use anyhow::Result;
    use atelier_core::save_default_config;
    use atelier_viewer::app;
    use clap::Parser;
    use std::path::PathBuf;
    use tracing::{info, Level};
    use tracing_subscriber::FmtSubscriber;

    #[derive(Parser, Debug)]
    #[command(name = "atelier")]
    #[command(about = "Interactive 3D art gallery")]
    #[command(version)]
    struct Args {
        /// Path to configuration file
        #[arg(short, long, default_value = "atelier.toml")]
        config: PathBuf,

        /// Artwork catalog (TOML); the bundled collection when omitted
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Log level (trace, debug, info, warn, error)
        #[arg(short, long, default_value = "info")]
        log_level: String,

        /// Write the default configuration to the config path and exit
        #[arg(long)]
        init_config: bool,
    }

    pub fn main() -> Result<()> {
        let args = Args::parse();

        // Initialize logging
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder()
            .with_max_level(level)
            .with_target(true)
            .finish();

        tracing::subscriber::set_global_default(subscriber)?;

        info!("Atelier v{}", env!("CARGO_PKG_VERSION"));

        if args.init_config {
            save_default_config(&args.config)?;
            info!(path = %args.config.display(), "Wrote default configuration");
            return Ok(());
        }

        let gallery = app::load_gallery(Some(args.config.as_path()), args.catalog.as_deref())?;
        app::run(gallery);

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> anyhow::Result<()> {
    native::main()
}

// The browser build starts from the library's wasm_bindgen entry point
#[cfg(target_arch = "wasm32")]
fn main() {}
