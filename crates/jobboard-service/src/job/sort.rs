//! Ordering of fetched job lists.

use std::cmp::Ordering;

use jobboard_entity::JobPosting;

/// Sort by descending post date. Stable; undated jobs go last.
pub fn sort_newest_first(jobs: &mut [JobPosting]) {
    jobs.sort_by(|a, b| match (a.posted_at, b.posted_at) {
        (Some(a), Some(b)) => b.cmp(&a),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });
}
