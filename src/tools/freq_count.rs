use std::hash::Hash;

use rustc_hash::FxHashMap;

/// Returns a frequency count of the symbols in a message. Pairs come back
/// in first-occurrence order, so the alphabet derived from a message is
/// the same on every run.
pub fn symbol_freqs<S>(tokens: &[S]) -> Vec<(S, u32)>
where
    S: Clone + Eq + Hash,
{
    let mut index: FxHashMap<&S, usize> = FxHashMap::default();
    let mut counts: Vec<(S, u32)> = Vec::new();
    for token in tokens {
        match index.get(token) {
            Some(&i) => counts[i].1 += 1,
            None => {
                index.insert(token, counts.len());
                counts.push((token.clone(), 1));
            }
        }
    }
    counts
}

#[cfg(test)]
mod test {
    use super::symbol_freqs;

    #[test]
    fn symbol_freqs_test() {
        let message = ["b", "a", "b", "c", "b", "a"];
        assert_eq!(
            symbol_freqs(&message),
            vec![("b", 3), ("a", 2), ("c", 1)]
        );
    }

    #[test]
    fn symbol_freqs_empty_test() {
        let message: [&str; 0] = [];
        assert_eq!(symbol_freqs(&message), vec![]);
    }
}
