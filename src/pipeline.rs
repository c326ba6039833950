//! End-to-end runs: graph, intersecting family, then shift, standardize and
//! compress. Also the JSON family file helpers.

use clap::Args;
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::info;

use crate::compress::compress;
use crate::error::Result;
use crate::graph::{build_graph, PendantGraph, Topology};
use crate::intersecting::build_intersecting_family;
use crate::shift::shift;
use crate::standardize::{anchor, standardize};
use crate::vertex::{Family, Vertex};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, Args)]
pub struct PipelineConfig {
    /// Number of internal vertices
    #[arg(short, long)]
    pub n: u32,

    /// Size of every member set
    #[arg(short, long)]
    pub r: usize,

    #[arg(short, long, value_enum, default_value = "cycle")]
    pub topology: Topology,

    /// Fixed seed; omit for a fresh random family
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl PipelineConfig {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(s) => StdRng::seed_from_u64(s),
            None => StdRng::from_entropy(),
        }
    }
}

/// The family after each canonicalization step.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Canonicalization {
    pub shifted: Family,
    pub anchor: Vertex,
    pub standardized: Family,
    pub compressed: Family,
}

#[derive(Clone, Debug, Serialize)]
pub struct PipelineReport {
    pub config: PipelineConfig,
    pub intersecting: Family,
    #[serde(flatten)]
    pub stages: Canonicalization,
}

/// Shift, then standardize, then compress. Every member vertex must belong
/// to `g`.
pub fn canonicalize(g: &PendantGraph, family: &Family) -> Result<Canonicalization> {
    g.require_family(family)?;
    let shifted = shift(g, family);
    let anchor = anchor(g, &shifted);
    let standardized = standardize(g, &shifted);
    let compressed = compress(&standardized);
    Ok(Canonicalization {
        shifted,
        anchor,
        standardized,
        compressed,
    })
}

pub fn run_pipeline(config: &PipelineConfig) -> Result<PipelineReport> {
    let g = build_graph(config.n, config.topology)?;
    let mut rng = config.rng();
    let intersecting = build_intersecting_family(&g, config.r, &mut rng)?;
    let stages = canonicalize(&g, &intersecting)?;

    info!(
        n = config.n,
        r = config.r,
        sets = intersecting.len(),
        anchor = %stages.anchor,
        "pipeline finished"
    );
    Ok(PipelineReport {
        config: config.clone(),
        intersecting,
        stages,
    })
}

pub fn load_family<P: AsRef<Path>>(path: P) -> Result<Family> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    Ok(serde_json::from_reader(reader)?)
}

pub fn save_family<P: AsRef<Path>>(path: P, family: &Family) -> Result<()> {
    let file = File::create(path)?;
    let writer = BufWriter::new(file);
    serde_json::to_writer_pretty(writer, family)?;
    Ok(())
}
