//! Index rotation that moves the busiest pendant to position 1.

use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::PendantGraph;
use crate::vertex::{Family, Vertex, VertexSet};

/// The Pendant vertex occurring in the most members. Ties go to the lowest
/// index, so a family without pendants anchors at `P1`.
pub fn anchor(g: &PendantGraph, family: &Family) -> Vertex {
    let mut counts = vec![0usize; g.n() as usize];
    for v in family.iter().flat_map(VertexSet::iter) {
        if v.is_pendant() && (1..=g.n()).contains(&v.index) {
            counts[v.index as usize - 1] += 1;
        }
    }

    let mut best = 0;
    for (i, &c) in counts.iter().enumerate() {
        if c > counts[best] {
            best = i;
        }
    }
    Vertex::pendant(best as u32 + 1)
}

/// Adds `offset` to every index modulo `n`, keeping labels in `1..=n`.
pub fn rotate(family: &Family, n: u32, offset: u32) -> Result<Family> {
    if n == 0 {
        return Err(Error::InvalidSize("cannot rotate modulo 0".to_string()));
    }
    Ok(rotate_by(family, n, offset))
}

fn rotate_by(family: &Family, n: u32, offset: u32) -> Family {
    let n = u64::from(n);
    let offset = u64::from(offset);
    family
        .iter()
        .map(|set| {
            set.iter()
                .map(|v| {
                    let idx = (u64::from(v.index) + offset + n - 1) % n + 1;
                    v.with_index(idx as u32)
                })
                .collect()
        })
        .collect()
}

/// Rotates every index by `n - anchor + 1` so the anchor pendant becomes `P1`.
pub fn standardize(g: &PendantGraph, family: &Family) -> Family {
    let n = g.n();
    let anchor = anchor(g, family);
    let offset = n - anchor.index + 1;
    debug!(%anchor, offset, "standardizing");
    rotate_by(family, n, offset)
}
