//! Intersecting families of independent sets on pendant paths and cycles.
//!
//! Build a pendant graph, enumerate its independent `r`-sets, grow a random
//! pairwise-intersecting family from them, and normalize it by shifting onto
//! pendants, rotating the busiest pendant to index 1, and compressing indices.
//!
//! ```
//! use pendant_families::{build_graph, build_intersecting_family, canonicalize, Topology};
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let g = build_graph(6, Topology::Cycle).unwrap();
//! let family = build_intersecting_family(&g, 3, &mut StdRng::seed_from_u64(42)).unwrap();
//! let stages = canonicalize(&g, &family).unwrap();
//! assert_eq!(stages.compressed.len(), family.len());
//! ```

pub mod compress;
pub mod error;
pub mod graph;
pub mod independent;
pub mod intersecting;
pub mod pipeline;
pub mod rooted;
pub mod shift;
pub mod standardize;
pub mod vertex;

pub use compress::{compress, compress_set};
pub use error::{Error, Result};
pub use graph::{build_graph, PendantGraph, Topology};
pub use independent::{enumerate_independent, enumerate_rooted, is_independent};
pub use intersecting::{
    build_intersecting_family, build_star_family, is_family_intersecting, is_intersecting,
    max_internals_per_set, pendant_family,
};
pub use pipeline::{
    canonicalize, load_family, run_pipeline, save_family, Canonicalization, PipelineConfig,
    PipelineReport,
};
pub use rooted::{count_rooted, count_rooted_with_progress, RootedCount};
pub use shift::shift;
pub use standardize::{anchor, rotate, standardize};
pub use vertex::{Family, Kind, Vertex, VertexSet};
