use clap::{Parser, Subcommand};
use scopelog::document::Document;
use scopelog::{Config, OutputFormat, RenderOptions};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scopelog", about = "Render indentation-scoped log trees")]
struct Cli {
    /// Write debug logs to <tmp>/scopelog-debug.log (tail -f to inspect).
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build a log tree from a JSON document and print it.
    Render {
        /// Document path, or `-` for stdin.
        file: PathBuf,
        /// Prefix timestamps and align caller locations.
        #[arg(long)]
        verbose: bool,
        /// Column width reserved for messages in verbose output.
        #[arg(long)]
        width: Option<usize>,
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
        /// Config file (defaults to ~/.config/scopelog/config.toml).
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.debug {
        let path = std::env::temp_dir().join("scopelog-debug.log");
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)?;
        tracing_subscriber::fmt()
            .with_writer(std::sync::Mutex::new(file))
            .with_ansi(false)
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_env("RUST_LOG")
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("debug")),
            )
            .init();
        tracing::info!(path = %path.display(), "scopelog debug log started");
    }

    match cli.command {
        Command::Render {
            file,
            verbose,
            width,
            format,
            config,
        } => {
            let config = Config::load(config.as_deref())?;
            let renderer = config.render.renderer()?;
            let document = if file.as_os_str() == "-" {
                Document::from_reader(std::io::stdin().lock())?
            } else {
                Document::from_path(&file)?
            };

            // Entries without timestamps are stamped with the time of rendering.
            let tree = document.build(chrono::Utc::now());
            let options = RenderOptions {
                format,
                verbose,
                width,
            };
            println!("{}", scopelog::render(&tree, &options, &renderer)?);
        }
    }

    Ok(())
}
