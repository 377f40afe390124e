//! Member-list coordinate mapper
//!
//! Maps a query range in an aggregate ("global") coordinate space onto the
//! members laid out inside it, e.g. the contigs of an assembled scaffold,
//! each with its own local numbering. The caller learns which members the
//! query touches and what the query looks like in each member's own
//! coordinate space, without knowing the per-member offsets.
//!
//! The walk visits members in the order supplied and intersects the query
//! with each member's global span; a hit is the intersection re-expressed
//! in local coordinates by shifting it back by the member's global start.

use crate::core::interval::Interval;
use crate::core::ops;
use log::debug;

/// A named sub-range of the aggregate coordinate space.
///
/// The identifier is caller-defined: a contig name, a numeric id, anything
/// that names the member's own sequence store.
#[derive(Debug, Clone, PartialEq)]
pub struct Member<T> {
    /// Caller-defined identifier
    pub id: T,
    /// Where this member sits in the aggregate coordinate space
    pub span: Interval,
}

impl<T> Member<T> {
    pub fn new(id: T, span: Interval) -> Self {
        Member { id, span }
    }
}

/// One member touched by a query, with the query's extent re-expressed in
/// that member's local coordinate space.
#[derive(Debug, Clone, PartialEq)]
pub struct MemberHit<T> {
    /// The touched member's identifier
    pub id: T,
    /// The overlapping portion in the member's own coordinates
    /// (0-based half-open)
    pub local: Interval,
}

/// Identify the members a global query range touches and localize the
/// query into each.
///
/// For every member whose global span overlaps `query`, the hit carries
/// `intersection(span, query)` shifted down by the member's global start.
/// A zero-width query (an insertion point) cannot overlap anything, so
/// it resolves instead to the members it sits inside or borders: placed
/// exactly on the boundary between two touching members it yields a hit
/// for both neighbours. Members the query misses are silently omitted.
///
/// Output order matches member order, and each member appears at most
/// once. A query outside every span simply yields an empty list.
///
/// # Examples
/// ```
/// use coordspan::{identify_subintervals, CoordSystem, Interval, Member};
///
/// // A scaffold of two contigs laid end to end.
/// let contigs = vec![
///     Member::new("contigA", Interval::new(1, 100, CoordSystem::OneClosed)),
///     Member::new("contigB", Interval::new(101, 200, CoordSystem::OneClosed)),
/// ];
///
/// // A gene spanning the junction.
/// let gene = Interval::new(95, 105, CoordSystem::OneClosed);
/// let hits = identify_subintervals(&contigs, gene);
///
/// assert_eq!(hits.len(), 2);
/// assert_eq!(hits[0].id, "contigA");
/// // Bases 95..=100 of the scaffold are bases 95..=100 of contigA...
/// assert_eq!(hits[0].local.to_range(), 94..100);
/// // ...and bases 101..=105 are the first five bases of contigB.
/// assert_eq!(hits[1].local.to_range(), 0..5);
/// ```
pub fn identify_subintervals<T: Clone>(
    members: &[Member<T>],
    query: Interval,
) -> Vec<MemberHit<T>> {
    let mut hits = Vec::new();
    for member in members {
        let offset = member.span.norm_start();
        if query.is_empty() {
            // An insertion point resolves to the members it sits inside or
            // borders.
            if ops::contains(member.span, query) || ops::adjacent(member.span, query) {
                hits.push(MemberHit {
                    id: member.id.clone(),
                    local: ops::shift(query, -offset),
                });
            }
        } else if ops::overlap(member.span, query) {
            let slice = ops::intersection(member.span, query);
            hits.push(MemberHit {
                id: member.id.clone(),
                local: ops::shift(slice, -offset),
            });
        }
    }
    debug!(
        "query {} touched {} of {} members",
        query,
        hits.len(),
        members.len()
    );
    hits
}
