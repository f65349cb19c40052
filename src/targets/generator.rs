//! Subset-sum enumeration and random target selection.

use rustc_hash::FxHashMap;

use crate::core::{GameError, RandomSource};

/// Collect the sum of every admissible non-empty subset of `pool`.
///
/// Subsets are grown element by element from the empty subset. A subset is
/// kept (and may be extended further) only while its running sum stays at or
/// below `bound`. The empty subset seeds the growth but its sum is not
/// reported. Duplicate sums are kept, one per admitted subset, in
/// enumeration order.
///
/// Sums that overflow `i64` are not admissible.
#[must_use]
pub fn admissible_sums(pool: &[i64], bound: i64) -> Vec<i64> {
    let mut frontier = vec![0i64];

    for &number in pool {
        // Only extend subsets built before this number
        for j in 0..frontier.len() {
            if let Some(sum) = frontier[j].checked_add(number) {
                if sum <= bound {
                    frontier.push(sum);
                }
            }
        }
    }

    frontier.split_off(1)
}

/// Pick a target uniformly from the admissible sums of `pool`.
///
/// Every admitted subset is equally likely, so sums reachable in more ways
/// come up more often.
///
/// # Errors
///
/// Returns `GameError::Unsolvable` if no non-empty subset of `pool` sums to
/// at most `bound` (always the case for an empty pool).
pub fn pick_target<R: RandomSource>(
    pool: &[i64],
    bound: i64,
    rng: &mut R,
) -> Result<i64, GameError> {
    let sums = admissible_sums(pool, bound);
    if sums.is_empty() {
        return Err(GameError::Unsolvable {
            pool_size: pool.len(),
            bound,
        });
    }

    let index = rng.pick_index(sums.len());
    Ok(sums[index])
}

/// Find a non-empty subset of `pool` summing exactly to `target`.
///
/// Returns the subset in ascending order, or `None` if the target cannot be
/// reached. The result is deterministic for a given pool.
#[must_use]
pub fn find_subset(pool: &[i64], target: i64) -> Option<Vec<i64>> {
    // sum -> (last number added, sum before it)
    let mut reached: FxHashMap<i64, (i64, Option<i64>)> = FxHashMap::default();

    for &number in pool {
        let mut next: Vec<(i64, (i64, Option<i64>))> = reached
            .keys()
            .filter_map(|&sum| sum.checked_add(number).map(|s| (s, (number, Some(sum)))))
            .filter(|(s, _)| !reached.contains_key(s))
            .collect();
        if !reached.contains_key(&number) {
            next.push((number, (number, None)));
        }

        next.sort_unstable();
        for (sum, step) in next {
            reached.entry(sum).or_insert(step);
        }
    }

    let mut subset = Vec::new();
    let mut cursor = Some(target);
    while let Some(sum) = cursor {
        let &(number, prev) = reached.get(&sum)?;
        subset.push(number);
        cursor = prev;
    }

    subset.sort_unstable();
    Some(subset)
}

/// Check if some non-empty subset of `pool` sums exactly to `target`.
#[must_use]
pub fn is_achievable(pool: &[i64], target: i64) -> bool {
    find_subset(pool, target).is_some()
}
