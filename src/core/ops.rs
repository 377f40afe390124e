//! Interval operations engine
//!
//! The relational algebra between pairs and lists of [`Interval`]s:
//! overlap/adjacency/containment predicates, signed boundary distance,
//! union/intersection/complement, bounding intervals, translation, and
//! strict ordering. Every function is pure and total except [`union`],
//! which rejects operands separated by a gap.
//!
//! All operations compute on the normalized 0-based half-open bounds.
//! Derived intervals come back in a fixed convention callers can rely on:
//! [`union`], [`intersection`] and [`complement`] report 1-based closed
//! bounds, [`enclose`] and [`shift`] report 0-based half-open bounds.

use crate::core::error::{IntervalError, IntervalResult};
use crate::core::interval::{CoordSystem, Interval};

/// True when both intervals are non-empty and share at least one position.
///
/// # Examples
/// ```
/// use coordspan::{ops, CoordSystem, Interval};
///
/// let a = Interval::new(0, 5, CoordSystem::ZeroOpen);
/// let b = Interval::new(4, 10, CoordSystem::ZeroOpen);
/// let c = Interval::new(5, 10, CoordSystem::ZeroOpen);
/// assert!(ops::overlap(a, b));
/// assert!(!ops::overlap(a, c)); // touching is not sharing
/// ```
#[inline]
pub fn overlap(a: Interval, b: Interval) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    let (first, second) = if a.norm_start() <= b.norm_start() {
        (a, b)
    } else {
        (b, a)
    };
    // Last position of the earlier interval reaches the later one's start.
    first.norm_end() - 1 >= second.norm_start()
}

/// True when the intervals do not overlap and their nearest boundaries
/// touch with zero gap.
///
/// A zero-width interval sitting exactly on another interval's boundary is
/// adjacent to it; the member mapper leans on this to resolve insertion
/// points.
#[inline]
pub fn adjacent(a: Interval, b: Interval) -> bool {
    !overlap(a, b) && distance(a, b) == 0
}

/// True when the intervals overlap or touch.
#[inline]
pub fn overlap_or_adjacent(a: Interval, b: Interval) -> bool {
    overlap(a, b) || adjacent(a, b)
}

/// The signed minimal shift aligning a boundary of `a` with a boundary of
/// `b`.
///
/// Of the four boundary differences start-start, end-end, start-end and
/// end-start, the one with the smallest absolute magnitude wins; ties
/// resolve to the earliest candidate in that order, so the sign of the
/// result is stable.
pub fn distance(a: Interval, b: Interval) -> i64 {
    let candidates = [
        a.norm_start() - b.norm_start(),
        a.norm_end() - b.norm_end(),
        a.norm_start() - b.norm_end(),
        a.norm_end() - b.norm_start(),
    ];
    let mut best = candidates[0];
    for &candidate in &candidates[1..] {
        if candidate.abs() < best.abs() {
            best = candidate;
        }
    }
    best
}

/// The single interval spanning both operands, as 1-based closed bounds.
///
/// Defined only for operands that overlap or touch; anything else would
/// silently bridge a gap, so it is rejected instead.
///
/// # Examples
/// ```
/// use coordspan::{ops, CoordSystem, Interval};
///
/// let a = Interval::new(0, 5, CoordSystem::ZeroOpen);
/// let b = Interval::new(5, 10, CoordSystem::ZeroOpen);
/// let merged = ops::union(a, b).unwrap();
/// assert_eq!(merged, Interval::new(1, 10, CoordSystem::OneClosed));
///
/// let far = Interval::new(100, 200, CoordSystem::ZeroOpen);
/// assert!(ops::union(a, far).is_err());
/// ```
pub fn union(a: Interval, b: Interval) -> IntervalResult<Interval> {
    if !overlap_or_adjacent(a, b) {
        return Err(IntervalError::DisjointUnion { left: a, right: b });
    }
    let a1 = a.to_system(CoordSystem::OneClosed);
    let b1 = b.to_system(CoordSystem::OneClosed);
    Ok(Interval::new(
        a1.start().min(b1.start()),
        a1.end().max(b1.end()),
        CoordSystem::OneClosed,
    ))
}

/// The positions covered by both operands, as 1-based closed bounds.
///
/// [`Interval::EMPTY`] when the operands do not overlap.
pub fn intersection(a: Interval, b: Interval) -> Interval {
    if !overlap(a, b) {
        return Interval::EMPTY;
    }
    let a1 = a.to_system(CoordSystem::OneClosed);
    let b1 = b.to_system(CoordSystem::OneClosed);
    Interval::new(
        a1.start().max(b1.start()),
        a1.end().min(b1.end()),
        CoordSystem::OneClosed,
    )
}

/// The leading remainder of `a` before `b` begins, as 1-based closed
/// bounds.
///
/// This is not a symmetric set complement: only the prefix of `a` strictly
/// before `b`'s start is reported. `a` comes back unchanged when the
/// operands do not overlap, and [`Interval::EMPTY`] when they are equal.
/// When `b` starts at or before `a` there is no prefix and the result is
/// degenerate (negative length); callers treat that as empty.
pub fn complement(a: Interval, b: Interval) -> Interval {
    if !overlap(a, b) {
        return a;
    }
    if a == b {
        return Interval::EMPTY;
    }
    let a1 = a.to_system(CoordSystem::OneClosed);
    let b1 = b.to_system(CoordSystem::OneClosed);
    Interval::new(a1.start(), b1.start() - 1, CoordSystem::OneClosed)
}

/// The gaps in `reference` left uncovered by `parts`, in ascending order,
/// as 1-based closed bounds.
///
/// `parts` must arrive sorted by start position; the scan trusts the
/// caller's ordering and never sorts. Parts may overlap each other and may
/// overhang the reference; each is clipped to the reference before the gap
/// in front of it is measured. Returns an empty list as soon as any single
/// part covers the whole reference. Parts that miss the reference entirely
/// contribute nothing.
pub fn complement_all(reference: Interval, parts: &[Interval]) -> Vec<Interval> {
    let r1 = reference.to_system(CoordSystem::OneClosed);
    let mut gaps = Vec::new();
    // Next position of the reference not yet accounted for, 1-based closed.
    let mut cursor = r1.start();

    for &part in parts {
        if contains(part, reference) {
            return Vec::new();
        }
        let clipped = intersection(part, reference);
        if clipped.is_empty() {
            continue;
        }
        let gap_end = clipped.start() - 1;
        if cursor <= gap_end {
            gaps.push(Interval::new(cursor, gap_end, CoordSystem::OneClosed));
        }
        cursor = clipped.end() + 1;
    }

    if cursor <= r1.end() {
        gaps.push(Interval::new(cursor, r1.end(), CoordSystem::OneClosed));
    }
    gaps
}

/// The smallest interval covering every input, as 0-based half-open
/// bounds. [`Interval::EMPTY`] for an empty input.
pub fn enclose(intervals: &[Interval]) -> Interval {
    let mut iter = intervals.iter();
    let first = match iter.next() {
        Some(iv) => iv,
        None => return Interval::EMPTY,
    };
    let mut start = first.norm_start();
    let mut end = first.norm_end();
    for iv in iter {
        start = start.min(iv.norm_start());
        end = end.max(iv.norm_end());
    }
    Interval::new(start, end, CoordSystem::ZeroOpen)
}

/// Translate both bounds by `delta`, as 0-based half-open bounds.
pub fn shift(interval: Interval, delta: i64) -> Interval {
    Interval::new(
        interval.norm_start() + delta,
        interval.norm_end() + delta,
        CoordSystem::ZeroOpen,
    )
}

/// True when the normalized starts coincide.
#[inline]
pub fn begins_with(a: Interval, b: Interval) -> bool {
    a.norm_start() == b.norm_start()
}

/// True when the normalized ends coincide.
#[inline]
pub fn ends_with(a: Interval, b: Interval) -> bool {
    a.norm_end() == b.norm_end()
}

/// True when `a` covers all of `b`.
///
/// A zero-width `b` sitting exactly on `a`'s end boundary is not
/// contained; the `b.start < a.end` condition keeps the exclusive end out.
#[inline]
pub fn contains(a: Interval, b: Interval) -> bool {
    a.norm_start() <= b.norm_start()
        && a.norm_end() >= b.norm_end()
        && b.norm_start() < a.norm_end()
}

/// True when `a` ends strictly before `b` begins (1-based closed
/// comparison). False whenever the two overlap.
#[inline]
pub fn left_of(a: Interval, b: Interval) -> bool {
    let a1 = a.to_system(CoordSystem::OneClosed);
    let b1 = b.to_system(CoordSystem::OneClosed);
    a1.end() < b1.start()
}

/// True when `b` ends strictly before `a` begins (1-based closed
/// comparison). False whenever the two overlap.
#[inline]
pub fn right_of(a: Interval, b: Interval) -> bool {
    let a1 = a.to_system(CoordSystem::OneClosed);
    let b1 = b.to_system(CoordSystem::OneClosed);
    b1.end() < a1.start()
}
