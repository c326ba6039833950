//! Randomized greedy construction of pairwise-intersecting families, plus the
//! family-level predicates used to check every later stage.

use rand::seq::SliceRandom;
use rand::Rng;
use tracing::debug;

use crate::error::{Error, Result};
use crate::graph::PendantGraph;
use crate::independent::enumerate_independent;
use crate::vertex::{Family, Vertex, VertexSet};

pub fn is_intersecting(a: &VertexSet, b: &VertexSet) -> bool {
    a.intersects(b)
}

/// `true` iff every pair of member sets shares a vertex.
pub fn is_family_intersecting(family: &Family) -> bool {
    let sets = family.sets();
    sets.iter()
        .enumerate()
        .all(|(i, a)| sets[i + 1..].iter().all(|b| a.intersects(b)))
}

/// Members built from Pendant vertices only.
pub fn pendant_family(family: &Family) -> Family {
    family.iter().filter(|s| s.is_all_pendant()).cloned().collect()
}

/// Largest number of Internal vertices found in a single member.
pub fn max_internals_per_set(family: &Family) -> usize {
    family.iter().map(VertexSet::internal_count).max().unwrap_or(0)
}

fn shuffled_candidates<R: Rng + ?Sized>(
    g: &PendantGraph,
    r: usize,
    rng: &mut R,
) -> Result<Vec<VertexSet>> {
    if r == 0 {
        return Err(Error::InvalidSize(format!(
            "family members must have at least one vertex, got r = {r}"
        )));
    }
    let mut candidates: Vec<VertexSet> = enumerate_independent(g, r).collect();
    if candidates.is_empty() {
        return Err(Error::EmptyFamily { r });
    }
    candidates.shuffle(rng);
    Ok(candidates)
}

/// Picks a random independent `r`-set as the seed, then scans the remaining
/// independent `r`-sets in a random order, accepting each one that meets every
/// set accepted so far.
///
/// The result is maximal for the realized order, not necessarily maximum.
pub fn build_intersecting_family<R: Rng + ?Sized>(
    g: &PendantGraph,
    r: usize,
    rng: &mut R,
) -> Result<Family> {
    let mut candidates = shuffled_candidates(g, r, rng)?;
    let pool = candidates.len();

    let seed = candidates.remove(rng.gen_range(0..candidates.len()));
    candidates.shuffle(rng);

    // acceptance only gets stricter as the family grows, so one pass is enough
    let mut family = vec![seed];
    for candidate in candidates {
        if family.iter().all(|t| candidate.intersects(t)) {
            family.push(candidate);
        }
    }

    debug!(r, pool, accepted = family.len(), "built intersecting family");
    Ok(family.into())
}

/// Every independent `r`-set containing `center`, in a random order.
pub fn build_star_family<R: Rng + ?Sized>(
    g: &PendantGraph,
    r: usize,
    center: Vertex,
    rng: &mut R,
) -> Result<Family> {
    g.require(&center)?;
    let candidates = shuffled_candidates(g, r, rng)?;
    let pool = candidates.len();

    let family: Family = candidates.into_iter().filter(|s| s.contains(&center)).collect();
    debug!(r, %center, pool, accepted = family.len(), "built star family");
    Ok(family)
}
