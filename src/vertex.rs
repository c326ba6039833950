//! Vertices of pendant graphs, vertex sets, and families of vertex sets.
//!
//! A [`Vertex`] is either an Internal backbone vertex or the Pendant leaf hanging
//! off it, both carrying the same 1-based index. Labels follow the usual
//! notation: `V3` is Internal vertex 3, `P3` its pendant.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Which side of the backbone a vertex sits on.
///
/// `Pendant` orders before `Internal` so that sorting by `(index, kind)` puts
/// `P3` ahead of `V3`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Kind {
    Pendant,
    Internal,
}

impl Kind {
    pub fn flip(self) -> Kind {
        match self {
            Kind::Pendant => Kind::Internal,
            Kind::Internal => Kind::Pendant,
        }
    }

    fn tag(self) -> char {
        match self {
            Kind::Pendant => 'P',
            Kind::Internal => 'V',
        }
    }
}

/// A vertex `(kind, index)`. Ordering and hashing go through `(index, kind)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Vertex {
    pub index: u32,
    pub kind: Kind,
}

impl Vertex {
    pub const fn new(kind: Kind, index: u32) -> Self {
        Vertex { index, kind }
    }

    pub const fn internal(index: u32) -> Self {
        Vertex::new(Kind::Internal, index)
    }

    pub const fn pendant(index: u32) -> Self {
        Vertex::new(Kind::Pendant, index)
    }

    pub fn is_internal(&self) -> bool {
        self.kind == Kind::Internal
    }

    pub fn is_pendant(&self) -> bool {
        self.kind == Kind::Pendant
    }

    /// Same kind, different index.
    pub fn with_index(self, index: u32) -> Self {
        Vertex { index, ..self }
    }
}

impl fmt::Display for Vertex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.tag(), self.index)
    }
}

impl FromStr for Vertex {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let mut chars = s.chars();
        let kind = match chars.next() {
            Some('P') => Kind::Pendant,
            Some('V') => Kind::Internal,
            _ => return Err(Error::InvalidLabel(s.to_string())),
        };
        let index: u32 = chars
            .as_str()
            .parse()
            .map_err(|_| Error::InvalidLabel(s.to_string()))?;
        if index == 0 {
            return Err(Error::InvalidLabel(s.to_string()));
        }
        Ok(Vertex::new(kind, index))
    }
}

impl TryFrom<String> for Vertex {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<Vertex> for String {
    fn from(v: Vertex) -> String {
        v.to_string()
    }
}

/// An unordered set of distinct vertices. Iteration is in `(index, kind)` order.
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VertexSet(BTreeSet<Vertex>);

impl VertexSet {
    pub fn new() -> Self {
        VertexSet(BTreeSet::new())
    }

    /// Parses labels such as `["V1", "P3"]`.
    pub fn from_labels(labels: &[&str]) -> Result<Self> {
        labels.iter().map(|l| l.parse::<Vertex>()).collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, v: &Vertex) -> bool {
        self.0.contains(v)
    }

    pub fn insert(&mut self, v: Vertex) -> bool {
        self.0.insert(v)
    }

    pub fn iter(&self) -> std::collections::btree_set::Iter<'_, Vertex> {
        self.0.iter()
    }

    pub fn intersects(&self, other: &VertexSet) -> bool {
        // BTreeSet::intersection walks both sides in order
        self.0.intersection(&other.0).next().is_some()
    }

    /// Copy of this set with `old` swapped for `new`.
    pub fn replaced(&self, old: &Vertex, new: Vertex) -> VertexSet {
        let mut out = self.0.clone();
        out.remove(old);
        out.insert(new);
        VertexSet(out)
    }

    pub fn internal_count(&self) -> usize {
        self.0.iter().filter(|v| v.is_internal()).count()
    }

    pub fn is_all_pendant(&self) -> bool {
        self.0.iter().all(Vertex::is_pendant)
    }
}

impl FromIterator<Vertex> for VertexSet {
    fn from_iter<I: IntoIterator<Item = Vertex>>(iter: I) -> Self {
        VertexSet(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = &'a Vertex;
    type IntoIter = std::collections::btree_set::Iter<'a, Vertex>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for VertexSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{v}")?;
        }
        write!(f, "}}")
    }
}

/// An ordered sequence of vertex sets. Duplicates are allowed; whether a stage
/// keeps them is up to that stage.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Family(Vec<VertexSet>);

impl Family {
    pub fn new() -> Self {
        Family(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn push(&mut self, set: VertexSet) {
        self.0.push(set);
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VertexSet> {
        self.0.iter()
    }

    pub fn sets(&self) -> &[VertexSet] {
        &self.0
    }

    pub fn into_sets(self) -> Vec<VertexSet> {
        self.0
    }

    /// Membership index over the member sets.
    pub fn index(&self) -> HashSet<VertexSet> {
        self.0.iter().cloned().collect()
    }

    pub fn has_duplicates(&self) -> bool {
        let mut seen = HashSet::with_capacity(self.0.len());
        self.0.iter().any(|s| !seen.insert(s))
    }
}

impl FromIterator<VertexSet> for Family {
    fn from_iter<I: IntoIterator<Item = VertexSet>>(iter: I) -> Self {
        Family(iter.into_iter().collect())
    }
}

impl From<Vec<VertexSet>> for Family {
    fn from(sets: Vec<VertexSet>) -> Self {
        Family(sets)
    }
}

impl IntoIterator for Family {
    type Item = VertexSet;
    type IntoIter = std::vec::IntoIter<VertexSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Family {
    type Item = &'a VertexSet;
    type IntoIter = std::slice::Iter<'a, VertexSet>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
