//! Index compression of families toward the low end.
//!
//! Each set is compacted against a running counter: members whose indices run
//! `1, 2, 3, ...` from the start are kept, and from the first gap on every
//! remaining member drops by one. Sets are processed in ascending
//! `(index, kind)` order, and a set whose compacted form is already present is
//! resolved by the collision rule in [`compress`].

use std::collections::HashSet;

use tracing::{debug, trace};

use crate::vertex::{Family, Vertex, VertexSet};

/// Compacts one set. Members are read in `(index, kind)` order.
pub fn compress_set(set: &VertexSet) -> VertexSet {
    let members: Vec<Vertex> = set.iter().copied().collect();
    let mut out = Vec::with_capacity(members.len());
    let mut counter = 1u32;

    for (pos, v) in members.iter().enumerate() {
        if v.index == counter {
            out.push(*v);
            counter += 1;
        } else {
            out.extend(
                members[pos..]
                    .iter()
                    .map(|v| v.with_index(v.index.saturating_sub(1))),
            );
            break;
        }
    }
    out.into_iter().collect()
}

/// Compresses every member of `family`.
///
/// On a collision the last vertex of the compacted set has its kind flipped
/// and its index raised by one; if that alternate is present too, the
/// compacted set is appended again. Nothing is dropped, so the output has
/// exactly as many sets as the input and may repeat a compacted set.
///
/// Independence and the intersecting property are not preserved in general.
pub fn compress(family: &Family) -> Family {
    let mut ordered: Vec<VertexSet> = family.sets().to_vec();
    ordered.sort();

    let mut seen: HashSet<VertexSet> = HashSet::with_capacity(ordered.len());
    let mut out = Family::new();
    let mut collisions = 0usize;

    for set in ordered {
        let compacted = compress_set(&set);
        if !seen.contains(&compacted) {
            seen.insert(compacted.clone());
            out.push(compacted);
            continue;
        }

        collisions += 1;
        let alternate = compacted.iter().next_back().map(|last| {
            let flipped = Vertex::new(last.kind.flip(), last.index + 1);
            compacted.replaced(last, flipped)
        });
        let chosen = match alternate {
            Some(alt) if !seen.contains(&alt) => alt,
            _ => compacted.clone(),
        };
        trace!(collided = %compacted, kept = %chosen, "compression collision");
        seen.insert(chosen.clone());
        out.push(chosen);
    }

    debug!(sets = out.len(), collisions, "compression complete");
    out
}
