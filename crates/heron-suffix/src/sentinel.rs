//! Separator values for concatenating several inputs into one suffix structure.

/// Element types that can produce separator values ordered after all content.
pub trait Sentinel: Ord + Clone {
    /// Returns `count` distinct values, each strictly greater than `max` (unconstrained when there
    /// is no content), or `None` when the type runs out of larger values.
    fn sentinels(max: Option<&Self>, count: usize) -> Option<Vec<Self>>;
}

macro_rules! impl_sentinel_for_int {
    ($($t:ty),* $(,)?) => {
        $(
            impl Sentinel for $t {
                fn sentinels(max: Option<&Self>, count: usize) -> Option<Vec<Self>> {
                    let start = match max {
                        Some(&m) => m.checked_add(1)?,
                        None => <$t>::MIN,
                    };
                    (0..count)
                        .map(|i| start.checked_add(<$t>::try_from(i).ok()?))
                        .collect()
                }
            }
        )*
    };
}

impl_sentinel_for_int!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize);

impl Sentinel for char {
    fn sentinels(max: Option<&Self>, count: usize) -> Option<Vec<Self>> {
        let start = max.map_or(0, |&c| c as u32 + 1);
        let out: Vec<char> = (start..=char::MAX as u32)
            .filter_map(char::from_u32)
            .take(count)
            .collect();
        (out.len() == count).then_some(out)
    }
}

#[cfg(test)]
mod tests {
    use super::Sentinel;

    #[test]
    fn integer_sentinels_follow_the_maximum() {
        assert_eq!(u8::sentinels(Some(&10), 3), Some(vec![11, 12, 13]));
        assert_eq!(i32::sentinels(None, 2), Some(vec![i32::MIN, i32::MIN + 1]));
        assert_eq!(u8::sentinels(Some(&254), 2), None);
        assert_eq!(u8::sentinels(Some(&255), 1), None);
    }

    #[test]
    fn char_sentinels_skip_surrogates() {
        let s = char::sentinels(Some(&'\u{D7FF}'), 2).unwrap();
        assert_eq!(s, vec!['\u{E000}', '\u{E001}']);
        assert_eq!(char::sentinels(Some(&char::MAX), 1), None);
        assert_eq!(char::sentinels(Some(&'Z'), 0), Some(Vec::new()));
    }
}
