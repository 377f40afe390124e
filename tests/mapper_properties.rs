//! Property-based tests for the member-list coordinate mapper

use coordspan::{identify_subintervals, ops, CoordSystem, Interval, Member};
use proptest::prelude::*;

/// Lay members end to end from a list of lengths, starting at global
/// position 0, the way assembled contigs tile a scaffold.
fn contiguous_members(lengths: &[i64]) -> Vec<Member<usize>> {
    let mut members = Vec::with_capacity(lengths.len());
    let mut cursor = 0i64;
    for (idx, &len) in lengths.iter().enumerate() {
        members.push(Member::new(
            idx,
            Interval::new(cursor, cursor + len, CoordSystem::ZeroOpen),
        ));
        cursor += len;
    }
    members
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The local pieces of a query add up to exactly the portion of the
    /// query falling inside the scaffold: nothing lost, nothing counted
    /// twice at member junctions.
    #[test]
    fn prop_local_lengths_sum_to_clipped_query(
        lengths in prop::collection::vec(1i64..200, 1..8),
        query_start in -100i64..1500,
        query_len in 1i64..400,
    ) {
        let members = contiguous_members(&lengths);
        let total: i64 = lengths.iter().sum();
        let scaffold = Interval::new(0, total, CoordSystem::ZeroOpen);
        let query = Interval::new(query_start, query_start + query_len, CoordSystem::ZeroOpen);

        let hits = identify_subintervals(&members, query);
        let covered: i64 = hits.iter().map(|hit| hit.local.length()).sum();

        prop_assert_eq!(covered, ops::intersection(scaffold, query).length());
    }

    /// Hits come back in member order and no member appears twice.
    #[test]
    fn prop_hits_follow_member_order(
        lengths in prop::collection::vec(1i64..200, 1..8),
        query_start in -100i64..1500,
        query_len in 0i64..400,
    ) {
        let members = contiguous_members(&lengths);
        let query = Interval::new(query_start, query_start + query_len, CoordSystem::ZeroOpen);

        let hits = identify_subintervals(&members, query);
        for pair in hits.windows(2) {
            prop_assert!(pair[0].id < pair[1].id);
        }
    }

    /// Every local interval from a non-empty query fits inside its
    /// member's own coordinate space.
    #[test]
    fn prop_local_hits_fit_their_member(
        lengths in prop::collection::vec(1i64..200, 1..8),
        query_start in -100i64..1500,
        query_len in 1i64..400,
    ) {
        let members = contiguous_members(&lengths);
        let query = Interval::new(query_start, query_start + query_len, CoordSystem::ZeroOpen);

        for hit in identify_subintervals(&members, query) {
            prop_assert!(!hit.local.is_empty());
            prop_assert!(hit.local.norm_start() >= 0);
            prop_assert!(hit.local.norm_end() <= lengths[hit.id]);
        }
    }

    /// A zero-width query resolves to the members whose span it sits
    /// inside or borders: one member in the interior, both neighbours on a
    /// junction, none outside the scaffold.
    #[test]
    fn prop_insertion_point_resolution(
        lengths in prop::collection::vec(1i64..200, 1..8),
        position in -50i64..1500,
    ) {
        let members = contiguous_members(&lengths);
        let total: i64 = lengths.iter().sum();
        let query = Interval::new(position, position, CoordSystem::ZeroOpen);

        let hits = identify_subintervals(&members, query);

        let junctions: Vec<i64> = members
            .iter()
            .map(|m| m.span.norm_end())
            .take(members.len() - 1)
            .collect();
        let expected = if position < 0 || position > total {
            0
        } else if junctions.contains(&position) {
            2
        } else {
            1
        };
        prop_assert_eq!(hits.len(), expected);

        for hit in &hits {
            let span = members[hit.id].span;
            // The insertion point lies on or within the member's bounds and
            // is re-expressed relative to the member's start.
            prop_assert!(span.norm_start() <= position && position <= span.norm_end());
            prop_assert_eq!(
                hit.local,
                Interval::new(
                    position - span.norm_start(),
                    position - span.norm_start(),
                    CoordSystem::ZeroOpen,
                )
            );
        }
    }
}

#[test]
fn test_gene_spanning_contig_junction() {
    // The canonical use: a gene crossing from one contig of a scaffold
    // into the next, resolved into per-contig slices a sequence store can
    // serve directly.
    let contigs = vec![
        Member::new("contigA", Interval::new(1, 100, CoordSystem::OneClosed)),
        Member::new("contigB", Interval::new(101, 200, CoordSystem::OneClosed)),
    ];
    let gene = Interval::new(95, 105, CoordSystem::OneClosed);

    let hits = identify_subintervals(&contigs, gene);
    assert_eq!(hits.len(), 2);

    // Last six bases of contigA.
    assert_eq!(hits[0].id, "contigA");
    assert_eq!(hits[0].local.to_system(CoordSystem::OneClosed).start(), 95);
    assert_eq!(hits[0].local.to_system(CoordSystem::OneClosed).end(), 100);

    // First five bases of contigB.
    assert_eq!(hits[1].id, "contigB");
    assert_eq!(hits[1].local.to_system(CoordSystem::OneClosed).start(), 1);
    assert_eq!(hits[1].local.to_system(CoordSystem::OneClosed).end(), 5);

    let covered: i64 = hits.iter().map(|hit| hit.local.length()).sum();
    assert_eq!(covered, gene.length());
}

#[test]
fn test_insertion_point_on_scaffold_boundary() {
    let contigs = vec![
        Member::new("contigA", Interval::new(1, 100, CoordSystem::OneClosed)),
        Member::new("contigB", Interval::new(101, 200, CoordSystem::OneClosed)),
    ];
    // Between base 100 and base 101: the junction of the two contigs.
    let probe = Interval::new(100, 100, CoordSystem::ZeroOpen);

    let hits = identify_subintervals(&contigs, probe);
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].id, "contigA");
    assert_eq!(hits[1].id, "contigB");
}
