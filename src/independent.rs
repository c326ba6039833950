//! Brute-force enumeration of independent vertex subsets.
//!
//! Every `r`-combination of the graph's vertices is generated and filtered by
//! the independence predicate, so cost grows with `C(2n, r)`. This is the
//! reference enumerator the canonicalization stages are checked against; it is
//! meant for small `n`.

use itertools::Itertools;

use crate::error::{Error, Result};
use crate::graph::PendantGraph;
use crate::vertex::{Vertex, VertexSet};

/// `true` iff no two of `vertices` are adjacent in `g`.
pub fn is_independent<'a, I>(g: &PendantGraph, vertices: I) -> bool
where
    I: IntoIterator<Item = &'a Vertex>,
    I::IntoIter: Clone,
{
    vertices
        .into_iter()
        .tuple_combinations()
        .all(|(a, b)| !g.is_adjacent(a, b))
}

/// Lazily yields every independent `r`-subset of `g`, in combination order
/// over the vertices sorted by `(index, kind)`.
///
/// Calling again restarts the enumeration.
pub fn enumerate_independent(g: &PendantGraph, r: usize) -> impl Iterator<Item = VertexSet> + '_ {
    g.vertices()
        .into_iter()
        .combinations(r)
        .filter(move |combo| is_independent(g, combo.iter()))
        .map(|combo| combo.into_iter().collect())
}

/// Lazily yields every independent `r`-subset of `g` that contains `root`.
pub fn enumerate_rooted(
    g: &PendantGraph,
    root: Vertex,
    r: usize,
) -> Result<impl Iterator<Item = VertexSet> + '_> {
    g.require(&root)?;
    if r == 0 {
        return Err(Error::InvalidSize(format!(
            "a rooted set must have at least one member, got r = {r}"
        )));
    }

    // neighbours of the root can never join it
    let rest: Vec<Vertex> = g
        .vertices()
        .into_iter()
        .filter(|v| *v != root && !g.is_adjacent(v, &root))
        .collect();

    Ok(rest
        .into_iter()
        .combinations(r - 1)
        .filter(move |combo| is_independent(g, combo.iter()))
        .map(move |combo| combo.into_iter().chain(std::iter::once(root)).collect()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{build_graph, Topology};

    fn brute_count(g: &PendantGraph, r: usize) -> usize {
        let vs = g.vertices();
        let mut count = 0;
        for combo in vs.iter().combinations(r) {
            let ok = combo
                .iter()
                .enumerate()
                .all(|(i, a)| combo[i + 1..].iter().all(|b| !g.is_adjacent(a, b)));
            if ok {
                count += 1;
            }
        }
        count
    }

    #[test]
    fn independence_rejects_adjacent_pairs() {
        let g = build_graph(4, Topology::Cycle).unwrap();
        let ok = [Vertex::internal(1), Vertex::pendant(2), Vertex::internal(3)];
        let bad = [Vertex::internal(1), Vertex::pendant(2), Vertex::internal(4)];
        assert!(is_independent(&g, ok.iter()));
        assert!(!is_independent(&g, bad.iter()));
    }

    #[test]
    fn independence_is_order_insensitive() {
        let g = build_graph(5, Topology::Path).unwrap();
        let vs = [Vertex::pendant(1), Vertex::internal(3), Vertex::pendant(5), Vertex::internal(2)];
        let expected = is_independent(&g, vs.iter());
        for perm in vs.iter().permutations(vs.len()) {
            assert_eq!(is_independent(&g, perm.into_iter()), expected);
        }
        assert!(!expected);
    }

    #[test]
    fn enumeration_matches_brute_force() {
        for topology in [Topology::Path, Topology::Cycle] {
            let g = build_graph(5, topology).unwrap();
            for r in 0..=6 {
                let sets: Vec<VertexSet> = enumerate_independent(&g, r).collect();
                assert_eq!(sets.len(), brute_count(&g, r), "{topology:?} r={r}");
                assert!(sets.iter().all(|s| s.len() == r));
                assert!(sets.iter().all(|s| is_independent(&g, s.iter())));
            }
        }
    }

    #[test]
    fn pendant_cycle_of_three_pairs() {
        // 15 pairs in total, minus 3 backbone edges and 3 pendant edges
        let g = build_graph(3, Topology::Cycle).unwrap();
        assert_eq!(enumerate_independent(&g, 2).count(), 9);
    }

    #[test]
    fn enumeration_is_restartable() {
        let g = build_graph(4, Topology::Cycle).unwrap();
        let first: Vec<_> = enumerate_independent(&g, 3).collect();
        let second: Vec<_> = enumerate_independent(&g, 3).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn rooted_sets_contain_root() {
        let g = build_graph(6, Topology::Path).unwrap();
        let root = Vertex::pendant(2);
        let rooted: Vec<_> = enumerate_rooted(&g, root, 3).unwrap().collect();
        let filtered: Vec<_> = enumerate_independent(&g, 3).filter(|s| s.contains(&root)).collect();
        assert_eq!(rooted.len(), filtered.len());
        for s in &rooted {
            assert!(s.contains(&root));
            assert!(filtered.contains(s));
        }
    }

    #[test]
    fn rooted_rejects_unknown_root() {
        let g = build_graph(3, Topology::Path).unwrap();
        let err = enumerate_rooted(&g, Vertex::pendant(7), 2).err().unwrap();
        assert!(matches!(err, Error::InvalidVertex(v) if v == Vertex::pendant(7)));
        assert!(matches!(
            enumerate_rooted(&g, Vertex::pendant(1), 0).err().unwrap(),
            Error::InvalidSize(_)
        ));
    }
}
