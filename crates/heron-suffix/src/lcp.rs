//! Suffix array plus adjacent longest-common-prefix lengths.
//!
//! Suffixes are sorted by prefix doubling: each round sorts by `(rank[i], rank[i + k])`, doubling
//! `k` until all ranks are distinct. With a comparison sort per round that is O(n log² n) rather
//! than the linear bound of SA-IS style constructions. The LCP pass is Kasai's, O(n).

use crate::error::{Error, Result};
use std::str::FromStr;

/// One suffix in sorted order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LcpEntry {
    /// Start index of the suffix in the text.
    pub suffix: usize,
    /// Length of the common prefix with the previous entry; 0 for the first one.
    pub lcp: usize,
}

#[derive(Debug, Clone)]
pub struct LongestCommonPrefix<T> {
    text: Vec<T>,
    entries: Vec<LcpEntry>,
}

impl<T: Ord + Clone> LongestCommonPrefix<T> {
    pub fn new(text: &[T]) -> Result<Self> {
        Self::from_vec(text.to_vec())
    }

    pub fn from_vec(text: Vec<T>) -> Result<Self> {
        if text.is_empty() {
            return Err(Error::InvalidInput {
                message: "cannot build a suffix structure from an empty input".to_string(),
            });
        }
        let order = suffix_array(&text);
        let lcp = kasai(&text, &order);
        let entries = order
            .into_iter()
            .zip(lcp)
            .map(|(suffix, lcp)| LcpEntry { suffix, lcp })
            .collect();
        tracing::debug!(len = text.len(), "built lcp array");
        Ok(Self { text, entries })
    }

    pub fn text(&self) -> &[T] {
        &self.text
    }

    pub fn entries(&self) -> &[LcpEntry] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, LcpEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The suffix at sorted position `rank`.
    pub fn suffix(&self, rank: usize) -> Option<&[T]> {
        let entry = self.entries.get(rank)?;
        Some(&self.text[entry.suffix..])
    }

    /// Every substring of maximal repeat length, in LCP-array order without duplicates. Empty if
    /// no element repeats.
    pub fn longest_repeated(&self) -> Vec<Vec<T>> {
        let max = self.entries.iter().map(|e| e.lcp).max().unwrap_or(0);
        if max == 0 {
            return Vec::new();
        }
        let mut out: Vec<Vec<T>> = Vec::new();
        for e in self.entries.iter().filter(|e| e.lcp == max) {
            let repeat = self.text[e.suffix..e.suffix + max].to_vec();
            if !out.contains(&repeat) {
                out.push(repeat);
            }
        }
        out
    }

    /// Every distinct substring exactly once.
    ///
    /// Each sorted suffix contributes its prefixes longer than the prefix it shares with its
    /// predecessor, longest first.
    pub fn unique(&self) -> Vec<Vec<T>> {
        let mut out = Vec::with_capacity(self.distinct_count());
        for e in &self.entries {
            let suffix = &self.text[e.suffix..];
            for len in (e.lcp + 1..=suffix.len()).rev() {
                out.push(suffix[..len].to_vec());
            }
        }
        out
    }

    /// Number of distinct non-empty substrings: `n(n + 1)/2` minus the sum of LCP values.
    pub fn distinct_count(&self) -> usize {
        let n = self.text.len();
        let shared: usize = self.entries.iter().map(|e| e.lcp).sum();
        n * (n + 1) / 2 - shared
    }
}

impl FromStr for LongestCommonPrefix<char> {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_vec(s.chars().collect())
    }
}

fn suffix_array<T: Ord>(text: &[T]) -> Vec<usize> {
    let n = text.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| text[a].cmp(&text[b]));

    let mut rank = vec![0usize; n];
    for i in 1..n {
        let step = usize::from(text[order[i - 1]] != text[order[i]]);
        rank[order[i]] = rank[order[i - 1]] + step;
    }

    let mut next = vec![0usize; n];
    let mut k = 1;
    while k < n && rank[order[n - 1]] < n - 1 {
        // A suffix that ends before `i + k` sorts ahead of every longer one.
        let key = |i: usize| (rank[i], if i + k < n { rank[i + k] + 1 } else { 0 });
        order.sort_by_key(|&i| key(i));
        next[order[0]] = 0;
        for i in 1..n {
            let step = usize::from(key(order[i - 1]) != key(order[i]));
            next[order[i]] = next[order[i - 1]] + step;
        }
        std::mem::swap(&mut rank, &mut next);
        k *= 2;
    }
    order
}

fn kasai<T: Eq>(text: &[T], order: &[usize]) -> Vec<usize> {
    let n = text.len();
    let mut rank = vec![0usize; n];
    for (r, &i) in order.iter().enumerate() {
        rank[i] = r;
    }

    let mut lcp = vec![0usize; n];
    let mut h = 0usize;
    for i in 0..n {
        if rank[i] == 0 {
            h = 0;
            continue;
        }
        let j = order[rank[i] - 1];
        while i + h < n && j + h < n && text[i + h] == text[j + h] {
            h += 1;
        }
        lcp[rank[i]] = h;
        h = h.saturating_sub(1);
    }
    lcp
}
