//! Pendant-path and pendant-cycle graphs.

use clap::ValueEnum;
use itertools::Itertools;
use petgraph::graphmap::UnGraphMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::vertex::{Family, Kind, Vertex};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Topology {
    Path,
    Cycle,
}

/// A backbone of `n` Internal vertices (path or cycle), each carrying one
/// Pendant leaf. Immutable once built.
#[derive(Clone, Debug)]
pub struct PendantGraph {
    graph: UnGraphMap<Vertex, ()>,
    n: u32,
    topology: Topology,
}

/// Builds the pendant graph of size `n`.
///
/// Paths need `n >= 1`; cycles need `n >= 3`.
pub fn build_graph(n: u32, topology: Topology) -> Result<PendantGraph> {
    let min = match topology {
        Topology::Path => 1,
        Topology::Cycle => 3,
    };
    if n < min {
        return Err(Error::InvalidSize(format!(
            "{topology:?} needs at least {min} internal vertices, got {n}"
        )));
    }

    let mut graph = UnGraphMap::<Vertex, ()>::with_capacity(2 * n as usize, 2 * n as usize);
    for i in 1..=n {
        graph.add_node(Vertex::internal(i));
        graph.add_node(Vertex::pendant(i));
    }
    for i in 1..n {
        graph.add_edge(Vertex::internal(i), Vertex::internal(i + 1), ());
    }
    if topology == Topology::Cycle {
        graph.add_edge(Vertex::internal(n), Vertex::internal(1), ());
    }
    for i in 1..=n {
        graph.add_edge(Vertex::internal(i), Vertex::pendant(i), ());
    }

    debug!(
        n,
        ?topology,
        vertices = graph.node_count(),
        edges = graph.edge_count(),
        "built pendant graph"
    );
    Ok(PendantGraph { graph, n, topology })
}

impl PendantGraph {
    /// Number of Internal vertices (equally, of Pendant vertices).
    pub fn n(&self) -> u32 {
        self.n
    }

    pub fn topology(&self) -> Topology {
        self.topology
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn contains(&self, v: &Vertex) -> bool {
        self.graph.contains_node(*v)
    }

    pub fn is_adjacent(&self, a: &Vertex, b: &Vertex) -> bool {
        self.graph.contains_edge(*a, *b)
    }

    pub fn degree(&self, v: &Vertex) -> usize {
        self.graph.neighbors(*v).count()
    }

    /// All vertices in `(index, kind)` order.
    pub fn vertices(&self) -> Vec<Vertex> {
        self.graph.nodes().sorted().collect()
    }

    pub fn pendants(&self) -> impl Iterator<Item = Vertex> + '_ {
        (1..=self.n).map(Vertex::pendant)
    }

    pub fn internals(&self) -> impl Iterator<Item = Vertex> + '_ {
        (1..=self.n).map(Vertex::internal)
    }

    pub fn kind_count(&self, kind: Kind) -> usize {
        self.graph.nodes().filter(|v| v.kind == kind).count()
    }

    pub(crate) fn require(&self, v: &Vertex) -> Result<()> {
        if self.contains(v) {
            Ok(())
        } else {
            Err(Error::InvalidVertex(*v))
        }
    }

    /// Fails on the first member vertex that is not in the graph.
    pub fn require_family(&self, family: &Family) -> Result<()> {
        family
            .iter()
            .flat_map(|set| set.iter())
            .try_for_each(|v| self.require(v))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vertex::VertexSet;

    #[test]
    fn cycle_counts_and_degrees() {
        for n in 3..9 {
            let g = build_graph(n, Topology::Cycle).unwrap();
            assert_eq!(g.node_count(), 2 * n as usize);
            assert_eq!(g.edge_count(), 2 * n as usize);
            assert!(g.pendants().all(|p| g.degree(&p) == 1));
            assert!(g.internals().all(|v| g.degree(&v) == 3));
        }
    }

    #[test]
    fn path_counts_and_degrees() {
        for n in 2..9 {
            let g = build_graph(n, Topology::Path).unwrap();
            assert_eq!(g.node_count(), 2 * n as usize);
            assert_eq!(g.edge_count(), 2 * n as usize - 1);
            assert!(g.pendants().all(|p| g.degree(&p) == 1));
            assert_eq!(g.degree(&Vertex::internal(1)), 2);
            assert_eq!(g.degree(&Vertex::internal(n)), 2);
            assert!((2..n).all(|i| g.degree(&Vertex::internal(i)) == 3));
        }
    }

    #[test]
    fn single_vertex_path() {
        let g = build_graph(1, Topology::Path).unwrap();
        assert_eq!(g.node_count(), 2);
        assert_eq!(g.edge_count(), 1);
        assert!(g.is_adjacent(&Vertex::internal(1), &Vertex::pendant(1)));
    }

    #[test]
    fn degenerate_sizes_rejected() {
        assert!(matches!(build_graph(0, Topology::Path), Err(Error::InvalidSize(_))));
        assert!(matches!(build_graph(2, Topology::Cycle), Err(Error::InvalidSize(_))));
        assert!(matches!(build_graph(1, Topology::Cycle), Err(Error::InvalidSize(_))));
    }

    #[test]
    fn cycle_closes_and_path_does_not() {
        let c = build_graph(5, Topology::Cycle).unwrap();
        let p = build_graph(5, Topology::Path).unwrap();
        assert!(c.is_adjacent(&Vertex::internal(5), &Vertex::internal(1)));
        assert!(!p.is_adjacent(&Vertex::internal(5), &Vertex::internal(1)));
        assert!(!c.is_adjacent(&Vertex::pendant(1), &Vertex::pendant(2)));
    }

    #[test]
    fn family_outside_graph_rejected() {
        let g = build_graph(4, Topology::Cycle).unwrap();
        let inside: Family = vec![VertexSet::from_labels(&["P1", "V3"]).unwrap()].into();
        let outside: Family = vec![VertexSet::from_labels(&["P1", "P9"]).unwrap()].into();
        assert!(g.require_family(&inside).is_ok());
        assert!(matches!(
            g.require_family(&outside),
            Err(Error::InvalidVertex(v)) if v == Vertex::pendant(9)
        ));
    }

    #[test]
    fn vertices_sorted_by_index_then_kind() {
        let g = build_graph(3, Topology::Cycle).unwrap();
        let labels: Vec<String> = g.vertices().iter().map(|v| v.to_string()).collect();
        assert_eq!(labels, ["P1", "V1", "P2", "V2", "P3", "V3"]);
        assert_eq!(g.kind_count(Kind::Pendant), 3);
    }
}
