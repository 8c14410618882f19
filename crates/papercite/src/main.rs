use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use papercite_processor::{transform_file, Config, OutputKind, Processor, SelectionSpec};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Expand every papercite directive in a document
    Transform {
        /// Document to read
        #[arg(index = 1)]
        input: PathBuf,

        /// Where to write the expanded document
        #[arg(index = 2)]
        output: PathBuf,

        /// Configuration file (YAML, or JSON with a .json extension)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format, overriding the configuration
        #[arg(short, long, value_enum)]
        format: Option<Format>,

        /// Number of parsed bibliographies to keep in memory
        #[arg(long)]
        cache_capacity: Option<usize>,
    },
    /// Render a single bibliography block to stdout
    Render {
        /// Bibliography file (BibTeX, YAML or JSON)
        #[arg(index = 1)]
        bibliography: PathBuf,

        /// Explicit citation keys, in output order (comma-separated)
        #[arg(short, long, value_delimiter = ',')]
        keys: Option<Vec<String>>,

        /// Entry types to include (comma-separated)
        #[arg(long, value_delimiter = ',')]
        allow: Option<Vec<String>>,

        /// Entry types to exclude (comma-separated)
        #[arg(long, value_delimiter = ',')]
        deny: Option<Vec<String>>,

        /// Emit a heading for each run of entries sharing a year
        #[arg(long)]
        year_group: bool,

        /// Configuration file (YAML, or JSON with a .json extension)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Output format, overriding the configuration
        #[arg(short, long, value_enum)]
        format: Option<Format>,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, ValueEnum, Debug)]
enum Format {
    Markdown,
    Djot,
    Plain,
}

impl From<Format> for OutputKind {
    fn from(format: Format) -> Self {
        match format {
            Format::Markdown => OutputKind::Markdown,
            Format::Djot => OutputKind::Djot,
            Format::Plain => OutputKind::Plain,
        }
    }
}

fn main() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "papercite=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Transform {
            input,
            output,
            config,
            format,
            cache_capacity,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(format) = format {
                config.format = format.into();
            }
            if let Some(capacity) = cache_capacity {
                config.cache_capacity = capacity;
            }

            let mut processor = Processor::new(config);
            transform_file(&mut processor, &input, &output).with_context(|| {
                format!(
                    "failed to transform {} into {}",
                    input.display(),
                    output.display()
                )
            })?;
            tracing::info!(
                bibliographies = processor.cache().len(),
                "transformed {}",
                input.display()
            );
        }
        Commands::Render {
            bibliography,
            keys,
            allow,
            deny,
            year_group,
            config,
            format,
        } => {
            let mut config = load_config(config.as_deref())?;
            if let Some(format) = format {
                config.format = format.into();
            }

            let spec = SelectionSpec {
                path: bibliography,
                keys,
                allow,
                deny,
                year_group,
            };
            let mut processor = Processor::new(config);
            let block = processor
                .select_and_render(&spec)
                .with_context(|| format!("failed to render {}", spec.path.display()))?;
            println!("{}", block);
        }
    }
    Ok(())
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load configuration {}", path.display())),
        None => Ok(Config::default()),
    }
}
