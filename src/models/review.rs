//! Review Scheduling
//!
//! Fixed spaced-repetition interval table and the next-review-date
//! computation. Not adaptive: a lookup indexed by review count.

use chrono::{DateTime, Duration, Utc};

/// Review intervals in days, indexed by review count.
/// Counts beyond the table clamp to the last interval.
pub const REVIEW_INTERVAL_DAYS: [i64; 7] = [1, 3, 7, 14, 30, 60, 90];

/// Compute the next review date for a page with the given review count.
///
/// Pure function of the count and the supplied clock; monotonically
/// non-decreasing in `review_count`.
pub fn next_review_date(review_count: u32, now: DateTime<Utc>) -> DateTime<Utc> {
    let index = (review_count as usize).min(REVIEW_INTERVAL_DAYS.len() - 1);
    now + Duration::days(REVIEW_INTERVAL_DAYS[index])
}
