//! Ranking pendant roots of a pendant path by their rooted independent-set counts.

use indicatif::ProgressBar;
use serde::Serialize;
use std::fmt;
use tracing::debug;

use crate::error::Result;
use crate::graph::{build_graph, Topology};
use crate::independent::enumerate_rooted;
use crate::vertex::Vertex;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct RootedCount {
    pub root: Vertex,
    pub count: usize,
}

impl fmt::Display for RootedCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.root, self.count)
    }
}

/// Counts the independent `r`-sets through each of `P1..=P(ceil(n/2))` on the
/// pendant path of size `n`; by symmetry the remaining roots repeat these.
///
/// Sorted by count descending, then root index ascending.
pub fn count_rooted(n: u32, r: usize) -> Result<Vec<RootedCount>> {
    count_rooted_with_progress(n, r, &ProgressBar::hidden())
}

/// [`count_rooted`], ticking `pb` once per root.
pub fn count_rooted_with_progress(n: u32, r: usize, pb: &ProgressBar) -> Result<Vec<RootedCount>> {
    let g = build_graph(n, Topology::Path)?;
    let limit = n.div_ceil(2);
    pb.set_length(u64::from(limit));

    let mut results = Vec::with_capacity(limit as usize);
    for i in 1..=limit {
        let root = Vertex::pendant(i);
        let count = enumerate_rooted(&g, root, r)?.count();
        debug!(%root, count, "counted rooted sets");
        results.push(RootedCount { root, count });
        pb.inc(1);
    }
    pb.finish();

    results.sort_by(|a, b| b.count.cmp(&a.count).then(a.root.index.cmp(&b.root.index)));
    Ok(results)
}
