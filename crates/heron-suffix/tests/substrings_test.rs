use heron_suffix::{
    Error, longest_common_subarrays, longest_common_substrings, longest_repeated_subarrays,
    longest_repeated_substrings, unique_subarrays, unique_substrings,
};
use std::collections::BTreeSet;

fn set<const N: usize>(items: [&str; N]) -> BTreeSet<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn longest_repeated_substring_of_abracadabra() {
    assert_eq!(longest_repeated_substrings("ABRACADABRA").unwrap(), vec!["ABRA"]);
}

#[test]
fn no_repeats_yields_nothing() {
    assert!(longest_repeated_substrings("ABCD").unwrap().is_empty());
    assert!(longest_repeated_subarrays(&[1u8, 2, 3]).unwrap().is_empty());
}

#[test]
fn repeats_may_overlap_and_are_reported_once() {
    assert_eq!(longest_repeated_substrings("AAAA").unwrap(), vec!["AAA"]);
    let mut found = longest_repeated_substrings("ABXAB CDXCD").unwrap();
    found.sort();
    assert_eq!(found, vec!["AB", "CD"]);
}

#[test]
fn unique_substrings_of_azaza() {
    let found = unique_substrings("AZAZA").unwrap();
    assert_eq!(found.len(), 9);
    let distinct: BTreeSet<String> = found.into_iter().collect();
    assert_eq!(
        distinct,
        set(["A", "AZ", "AZA", "AZAZ", "AZAZA", "Z", "ZA", "ZAZ", "ZAZA"])
    );
}

#[test]
fn unique_subarrays_have_no_duplicates() {
    let found = unique_subarrays(&[1, 1, 1]).unwrap();
    assert_eq!(found, vec![vec![1], vec![1, 1], vec![1, 1, 1]]);
}

#[test]
fn common_substrings_shared_by_two_of_four() {
    let found = longest_common_substrings(2, &["AABC", "BCDE", "BCDC", "CDED"]).unwrap();
    assert_eq!(found, set(["BCD", "CDE"]));
}

#[test]
fn common_substrings_shared_by_all() {
    let found = longest_common_substrings(4, &["AABC", "BCDE", "BCDC", "CDED"]).unwrap();
    assert_eq!(found, set(["C"]));
    let none = longest_common_substrings(2, &["abc", "xyz"]).unwrap();
    assert!(none.is_empty());
}

#[test]
fn common_subarrays_over_integers() {
    let inputs: [&[u32]; 3] = [&[1, 2, 3, 4], &[0, 2, 3, 4, 5], &[2, 3, 9]];
    let all = longest_common_subarrays(3, &inputs).unwrap();
    assert_eq!(all, BTreeSet::from([vec![2, 3]]));
    let two = longest_common_subarrays(2, &inputs).unwrap();
    assert_eq!(two, BTreeSet::from([vec![2, 3, 4]]));
}

#[test]
fn k_of_one_picks_the_longest_inputs() {
    let found = longest_common_substrings(1, &["ab", "xyz", "pqr"]).unwrap();
    assert_eq!(found, set(["pqr", "xyz"]));
}

#[test]
fn k_outside_the_input_count_is_rejected() {
    for k in [0, 3] {
        assert!(matches!(
            longest_common_substrings(k, &["ab", "bc"]),
            Err(Error::InvalidInput { .. })
        ));
    }
    assert!(matches!(
        longest_common_substrings(1, &[]),
        Err(Error::InvalidInput { .. })
    ));
}

#[test]
fn running_out_of_sentinels_is_reported() {
    let inputs: [&[u8]; 2] = [&[1, 254], &[254]];
    assert_eq!(
        longest_common_subarrays(1, &inputs),
        Err(Error::TooManyInputs { inputs: 2 })
    );
    let max = char::MAX.to_string();
    assert_eq!(
        longest_common_substrings(1, &[max.as_str()]),
        Err(Error::TooManyInputs { inputs: 1 })
    );
}

fn naive_common(k: usize, inputs: &[&str]) -> BTreeSet<String> {
    let longest = inputs.iter().map(|s| s.len()).max().unwrap_or(0);
    for len in (1..=longest).rev() {
        let mut found = BTreeSet::new();
        let windows: Vec<BTreeSet<&str>> = inputs
            .iter()
            .map(|s| (0..s.len().saturating_sub(len - 1)).map(|i| &s[i..i + len]).collect())
            .collect();
        for w in windows.iter().flatten() {
            if windows.iter().filter(|seen| seen.contains(w)).count() >= k {
                found.insert(w.to_string());
            }
        }
        if !found.is_empty() {
            return found;
        }
    }
    BTreeSet::new()
}

#[test]
fn common_substrings_agree_with_brute_force() {
    let mut state = 0x2545_f491_u64;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (state >> 33) as usize
    };
    for _ in 0..200 {
        let count = 1 + next() % 4;
        let words: Vec<String> = (0..count)
            .map(|_| {
                let len = 1 + next() % 8;
                (0..len).map(|_| (b'a' + (next() % 3) as u8) as char).collect()
            })
            .collect();
        let inputs: Vec<&str> = words.iter().map(String::as_str).collect();
        let k = 1 + next() % count;
        assert_eq!(
            longest_common_substrings(k, &inputs).unwrap(),
            naive_common(k, &inputs),
            "k = {k}, inputs = {inputs:?}"
        );
    }
}

#[test]
fn a_repeat_seen_many_times_is_reported_once() {
    assert_eq!(longest_repeated_substrings("ABXABYAB").unwrap(), vec!["AB"]);
    assert_eq!(
        longest_repeated_subarrays(&[7, 7, 0, 7, 7, 1, 7, 7]).unwrap(),
        vec![vec![7, 7]]
    );
}
