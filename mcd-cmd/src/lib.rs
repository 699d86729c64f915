//! Command implementations for the music catalog dashboard CLI.
//!
//! Renders the dashboard, or a single chart, to static files and prints the
//! aggregated pipeline output as JSON.

use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

pub mod page;
pub mod render;
pub mod settings;
pub mod summary;

/// Which chart pipeline to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ChartKind {
    Bar,
    Scatter,
    Parallel,
    Stream,
}

#[derive(Subcommand)]
pub enum Command {
    /// Render the dashboard (bar on top, scatter and parallel below) to HTML
    Render {
        /// Catalog CSV
        #[arg(short = 'd', long)]
        data: Option<PathBuf>,

        /// Output HTML file
        #[arg(short = 'o', long)]
        out: PathBuf,

        /// JSON settings file; flags override its values
        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        #[arg(long)]
        width: Option<f64>,

        #[arg(long)]
        height: Option<f64>,

        /// Scatter jitter seed
        #[arg(long)]
        seed: Option<u64>,
    },

    /// Render one chart to an SVG file
    Chart {
        #[arg(short = 'k', long, value_enum)]
        kind: ChartKind,

        #[arg(short = 'd', long)]
        data: Option<PathBuf>,

        /// Output SVG file
        #[arg(short = 'o', long)]
        out: PathBuf,

        #[arg(short = 'c', long)]
        config: Option<PathBuf>,

        #[arg(long)]
        width: Option<f64>,

        #[arg(long)]
        height: Option<f64>,

        #[arg(long)]
        seed: Option<u64>,
    },

    /// Print a pipeline's aggregated output as JSON
    Summary {
        #[arg(short = 'k', long, value_enum)]
        kind: ChartKind,

        #[arg(short = 'd', long)]
        data: Option<PathBuf>,

        #[arg(short = 'c', long)]
        config: Option<PathBuf>,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            data,
            out,
            config,
            width,
            height,
            seed,
        } => {
            let overrides = settings::Overrides {
                data,
                width,
                height,
                seed,
            };
            let config = settings::resolve(config.as_deref(), overrides)?;
            page::run_render(&config, &out)
        }
        Command::Chart {
            kind,
            data,
            out,
            config,
            width,
            height,
            seed,
        } => {
            let overrides = settings::Overrides {
                data,
                width,
                height,
                seed,
            };
            let config = settings::resolve(config.as_deref(), overrides)?;
            render::run_chart(kind, &config, &out)
        }
        Command::Summary { kind, data, config } => {
            let overrides = settings::Overrides {
                data,
                ..settings::Overrides::default()
            };
            let config = settings::resolve(config.as_deref(), overrides)?;
            println!("{}", summary::summary_json(kind, &config)?);
            Ok(())
        }
    }
}
