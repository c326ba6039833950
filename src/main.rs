use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use indicatif::{ProgressBar, ProgressStyle};
use tracing::info;
use tracing_subscriber::EnvFilter;

use pendant_families::{
    build_graph, canonicalize, count_rooted_with_progress, load_family, run_pipeline, save_family,
    PipelineConfig, Topology,
};

#[derive(Parser, Debug)]
#[command(name = "pendant-families")]
#[command(about = "Intersecting families of independent sets on pendant paths and cycles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Rank the pendant roots of a pendant path by rooted independent-set count
    Rooted {
        #[arg(short, long)]
        n: u32,
        #[arg(short, long)]
        r: usize,
    },
    /// Build a random intersecting family and canonicalize it
    Pipeline {
        #[command(flatten)]
        config: PipelineConfig,
        /// Write the report here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Canonicalize a family read from a JSON file
    Canonicalize {
        #[arg(short, long)]
        n: u32,
        #[arg(short, long, value_enum, default_value = "cycle")]
        topology: Topology,
        #[arg(short, long)]
        input: PathBuf,
        /// Write the compressed family here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    match Cli::parse().command {
        Command::Rooted { n, r } => {
            let pb = ProgressBar::new(0);
            pb.set_style(
                ProgressStyle::with_template("[rooted] {pos}/{len} {elapsed_precise}")?
                    .progress_chars("█▉▊▋▌▍▎▏  "),
            );
            for rc in count_rooted_with_progress(n, r, &pb)? {
                println!("{rc}");
            }
        }
        Command::Pipeline { config, output } => {
            let report = run_pipeline(&config)?;
            let json = serde_json::to_string_pretty(&report)?;
            match output {
                Some(path) => {
                    std::fs::write(&path, json)
                        .with_context(|| format!("writing {}", path.display()))?;
                    info!(path = %path.display(), "report saved");
                }
                None => println!("{json}"),
            }
        }
        Command::Canonicalize {
            n,
            topology,
            input,
            output,
        } => {
            let g = build_graph(n, topology)?;
            let family = load_family(&input)
                .with_context(|| format!("loading {}", input.display()))?;
            info!(sets = family.len(), "loaded family");
            let stages = canonicalize(&g, &family)?;
            match output {
                Some(path) => {
                    save_family(&path, &stages.compressed)?;
                    info!(path = %path.display(), "compressed family saved");
                }
                None => println!("{}", serde_json::to_string_pretty(&stages)?),
            }
        }
    }
    Ok(())
}
