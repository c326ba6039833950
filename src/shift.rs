//! Shift-out: push families from Internal vertices onto their pendants.

use tracing::{debug, trace};

use crate::graph::PendantGraph;
use crate::vertex::{Family, Vertex};

/// For `i = 1..=n` in order, every member containing `V_i` is replaced by the
/// same set with `P_i` in its place, unless that set is already a member.
///
/// Each pass checks against the family as it stood when the pass began and
/// later passes see earlier replacements. The input is left untouched.
pub fn shift(g: &PendantGraph, family: &Family) -> Family {
    let mut current = family.clone();
    let mut replaced = 0usize;

    for i in 1..=g.n() {
        let internal = Vertex::internal(i);
        let pendant = Vertex::pendant(i);
        let index = current.index();

        current = current
            .into_iter()
            .map(|set| {
                if !set.contains(&internal) {
                    return set;
                }
                let target = set.replaced(&internal, pendant);
                if index.contains(&target) {
                    set
                } else {
                    trace!(from = %set, to = %target, "shifted");
                    replaced += 1;
                    target
                }
            })
            .collect();
    }

    debug!(sets = current.len(), replaced, "shift complete");
    current
}
