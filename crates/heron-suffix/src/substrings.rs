//! Repeated, unique and common substring search over [`LongestCommonPrefix`].

use crate::error::{Error, Result};
use crate::lcp::LongestCommonPrefix;
use crate::sentinel::Sentinel;
use std::collections::{BTreeSet, VecDeque};

fn to_strings(parts: Vec<Vec<char>>) -> Vec<String> {
    parts.into_iter().map(|p| p.into_iter().collect()).collect()
}

/// Slice counterpart of [`longest_repeated_substrings`]; results are deduplicated the same way.
pub fn longest_repeated_subarrays<T: Ord + Clone>(text: &[T]) -> Result<Vec<Vec<T>>> {
    Ok(LongestCommonPrefix::new(text)?.longest_repeated())
}

/// Longest substrings occurring at least twice (overlaps allowed). Empty when nothing repeats.
///
/// Results are deduplicated: a substring that occurs three or more times is still reported once,
/// e.g. `"ABXABYAB"` gives `["AB"]`.
pub fn longest_repeated_substrings(text: &str) -> Result<Vec<String>> {
    let lcp: LongestCommonPrefix<char> = text.parse()?;
    Ok(to_strings(lcp.longest_repeated()))
}

pub fn unique_subarrays<T: Ord + Clone>(text: &[T]) -> Result<Vec<Vec<T>>> {
    Ok(LongestCommonPrefix::new(text)?.unique())
}

/// Every distinct substring of `text`, each reported once.
pub fn unique_substrings(text: &str) -> Result<Vec<String>> {
    let lcp: LongestCommonPrefix<char> = text.parse()?;
    Ok(to_strings(lcp.unique()))
}

/// Longest substrings shared by at least `k` of the `inputs`.
pub fn longest_common_substrings(k: usize, inputs: &[&str]) -> Result<BTreeSet<String>> {
    let chars: Vec<Vec<char>> = inputs.iter().map(|s| s.chars().collect()).collect();
    let slices: Vec<&[char]> = chars.iter().map(Vec::as_slice).collect();
    let found = longest_common_subarrays(k, &slices)?;
    Ok(found.into_iter().map(|p| p.into_iter().collect()).collect())
}

/// Longest runs shared by at least `k` of the `inputs`.
///
/// The inputs are concatenated, each followed by its own sentinel, and a window slides over the
/// sorted suffixes. The window grows until its suffixes come from `k` distinct inputs (colors);
/// the smallest LCP strictly inside the window is then a prefix length all of them share. The
/// window is shrunk from the left until fewer than `k` colors remain, and the process repeats.
pub fn longest_common_subarrays<T: Sentinel>(
    k: usize,
    inputs: &[&[T]],
) -> Result<BTreeSet<Vec<T>>> {
    if inputs.is_empty() {
        return Err(Error::InvalidInput {
            message: "no inputs given".to_string(),
        });
    }
    if k == 0 || k > inputs.len() {
        return Err(Error::InvalidInput {
            message: format!("k = {k} must be between 1 and {}", inputs.len()),
        });
    }

    let max = inputs.iter().flat_map(|s| s.iter()).max();
    let sentinels = T::sentinels(max, inputs.len()).ok_or(Error::TooManyInputs {
        inputs: inputs.len(),
    })?;

    let total: usize = inputs.iter().map(|s| s.len() + 1).sum();
    let mut text: Vec<T> = Vec::with_capacity(total);
    // `ends[c]` is where input `c`'s sentinel sits.
    let mut ends: Vec<usize> = Vec::with_capacity(inputs.len());
    for (input, sentinel) in inputs.iter().zip(sentinels) {
        text.extend_from_slice(input);
        ends.push(text.len());
        text.push(sentinel);
    }
    let color = |pos: usize| ends.partition_point(|&end| end < pos);

    let lcp = LongestCommonPrefix::from_vec(text)?;
    let entries = lcp.entries();
    let text = lcp.text();

    let mut counts = vec![0usize; inputs.len()];
    let mut distinct = 0usize;
    // Positions in `(lo, hi]` with increasing LCP values; the front is the window minimum.
    let mut window_min: VecDeque<usize> = VecDeque::new();
    let mut best = 0usize;
    let mut found: BTreeSet<Vec<T>> = BTreeSet::new();
    let mut lo = 0usize;

    for hi in 0..entries.len() {
        let c = color(entries[hi].suffix);
        if counts[c] == 0 {
            distinct += 1;
        }
        counts[c] += 1;
        if hi > lo {
            while window_min
                .back()
                .is_some_and(|&b| entries[b].lcp >= entries[hi].lcp)
            {
                window_min.pop_back();
            }
            window_min.push_back(hi);
        }

        while distinct >= k {
            let start = entries[lo].suffix;
            let shared = match window_min.front() {
                Some(&m) => entries[m].lcp,
                // A single suffix shares all of its own input with itself (only when k == 1).
                None => ends[color(start)] - start,
            };
            if shared > 0 && shared >= best {
                if shared > best {
                    best = shared;
                    found.clear();
                }
                found.insert(text[start..start + shared].to_vec());
            }

            let c = color(start);
            counts[c] -= 1;
            if counts[c] == 0 {
                distinct -= 1;
            }
            lo += 1;
            while window_min.front().is_some_and(|&f| f <= lo) {
                window_min.pop_front();
            }
        }
    }

    tracing::debug!(
        inputs = inputs.len(),
        k,
        best,
        found = found.len(),
        "common substring search"
    );
    Ok(found)
}
