use strsim::levenshtein;

/// Levenshtein distance between two tokens, ignoring case.
///
/// Unit cost for insertion, deletion and substitution, no transpositions.
/// Counts Unicode scalar values.
pub fn edit_distance(a: &str, b: &str) -> usize {
    levenshtein(&a.to_lowercase(), &b.to_lowercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_tokens() {
        assert_eq!(edit_distance("kitten", "kitten"), 0);
        assert_eq!(edit_distance("", ""), 0);
    }

    #[test]
    fn classic_pairs() {
        assert_eq!(edit_distance("kitten", "sitting"), 3);
        assert_eq!(edit_distance("flaw", "lawn"), 2);
        assert_eq!(edit_distance("color", "colour"), 1);
    }

    #[test]
    fn empty_side() {
        assert_eq!(edit_distance("", "abc"), 3);
        assert_eq!(edit_distance("abcd", ""), 4);
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(edit_distance("Hello", "hELLO"), 0);
        assert_eq!(edit_distance("Colour", "color"), 1);
    }

    #[test]
    fn transposition_costs_two() {
        assert_eq!(edit_distance("ab", "ba"), 2);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(edit_distance("東京", "東都"), 1);
        assert_eq!(edit_distance("行きます", "行きました"), 2);
    }

    #[test]
    fn matches_reference_levenshtein() {
        let words = [
            "", "a", "run", "running", "quick", "quickly", "colour", "color", "organise",
            "organize", "明日", "明後日", "テスト", "テキスト",
        ];
        for a in words {
            for b in words {
                assert_eq!(
                    edit_distance(a, b),
                    strsim::levenshtein(&a.to_lowercase(), &b.to_lowercase()),
                    "distance mismatch for {:?} / {:?}",
                    a,
                    b
                );
            }
        }
    }
}
