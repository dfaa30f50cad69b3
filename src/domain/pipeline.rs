//! Derived-view pipeline: filter, aggregate, sort and paginate.
//!
//! Every function here is pure over its inputs. [`AppState`](crate::app::AppState)
//! calls them in the order the interaction requires and stores the results, so
//! each step can be tested without any state container.

use super::fields::{SortDirection, SortField};
use super::user::{AggregateCount, UserRecord};
use icu_collator::{Collator, CollatorOptions};
use std::cmp::Ordering;
use std::collections::HashMap;

/// Returns true when `user` matches an already lower-cased search key.
///
/// A user matches when the key is a substring of its lower-cased name, profile
/// name or role name. The empty key matches every user.
#[must_use]
pub fn matches_search(user: &UserRecord, key: &str) -> bool {
    [user.name(), user.profile_name(), user.role_name()]
        .iter()
        .any(|value| value.to_lowercase().contains(key))
}

/// Filters `all` by `key`, preserving relative order.
///
/// The key is lower-cased before matching. The result always derives from `all`,
/// never from a previous filter result.
#[must_use]
pub fn filter_records(all: &[UserRecord], key: &str) -> Vec<UserRecord> {
    let key = key.to_lowercase();
    let _span = tracing::debug_span!("filter_records", total = all.len(), key = %key).entered();

    let filtered: Vec<UserRecord> = all
        .iter()
        .filter(|user| matches_search(user, &key))
        .cloned()
        .collect();

    tracing::debug!(matched = filtered.len(), "records filtered");
    filtered
}

/// Counts users per distinct key, in first-seen order.
fn tally<'a>(keys: impl Iterator<Item = &'a str>) -> Vec<AggregateCount> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<AggregateCount> = Vec::new();

    for key in keys {
        if let Some(&idx) = positions.get(key) {
            counts[idx].count += 1;
        } else {
            positions.insert(key, counts.len());
            counts.push(AggregateCount {
                key: key.to_string(),
                count: 1,
            });
        }
    }

    counts
}

/// Computes profile and role tallies over `records`.
///
/// Returns `(profile_counts, role_counts)`. Rows appear in the order their key is
/// first seen; absent names are counted under the empty string.
#[must_use]
pub fn aggregate_counts(records: &[UserRecord]) -> (Vec<AggregateCount>, Vec<AggregateCount>) {
    let _span = tracing::debug_span!("aggregate_counts", records = records.len()).entered();

    let profiles = tally(records.iter().map(UserRecord::profile_name));
    let roles = tally(records.iter().map(UserRecord::role_name));

    tracing::debug!(
        distinct_profiles = profiles.len(),
        distinct_roles = roles.len(),
        "aggregates recomputed"
    );
    (profiles, roles)
}

thread_local! {
    /// Root-locale collator. `None` only if the compiled collation data is unusable.
    static COLLATOR: Option<Collator> =
        Collator::try_new(&Default::default(), CollatorOptions::new()).ok();
}

/// Case-insensitive, locale-aware comparison used for column sorting.
///
/// Both values are lower-cased and then compared with the root-locale collator,
/// so accented letters sort next to their base letters.
#[must_use]
pub fn collate(a: &str, b: &str) -> Ordering {
    let (a, b) = (a.to_lowercase(), b.to_lowercase());
    COLLATOR.with(|collator| match collator {
        Some(collator) => collator.compare(&a, &b),
        None => a.cmp(&b),
    })
}

/// Sorts `records` in place by `field` in `direction`.
///
/// The sort is stable, so users with equal keys keep their relative order.
pub fn sort_records(records: &mut [UserRecord], field: SortField, direction: SortDirection) {
    let _span = tracing::debug_span!("sort_records",
        records = records.len(),
        field = %field,
        direction = %direction
    ).entered();

    records.sort_by(|a, b| {
        let ordering = collate(a.field(field), b.field(field));
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

/// Number of pages needed for `total_count` records; zero when there are none.
#[must_use]
pub const fn total_pages(total_count: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_count.div_ceil(page_size)
    }
}

/// Returns the records shown on 1-indexed `page`.
///
/// The slice is clamped to the end of `records`; a page past the end yields an
/// empty slice rather than panicking. Page `0` is treated as page `1`.
#[must_use]
pub fn page_slice(records: &[UserRecord], page: usize, page_size: usize) -> &[UserRecord] {
    let start = page.saturating_sub(1).saturating_mul(page_size).min(records.len());
    let end = start.saturating_add(page_size).min(records.len());
    &records[start..end]
}
