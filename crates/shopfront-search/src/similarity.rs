//! String closeness scoring

/// Score returned when one normalized string contains the other
pub const CONTAINS_SCORE: f64 = 0.9;

/// Similarity of two strings in `[0, 1]`
///
/// Both sides are trimmed and lowercased. Identical strings score 1.0,
/// containment in either direction scores [`CONTAINS_SCORE`], and
/// everything else scores `1 - distance / longest`, never below 0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = normalize(a);
    let b = normalize(b);

    if a == b {
        return 1.0;
    }
    if a.contains(b.as_str()) || b.contains(a.as_str()) {
        return CONTAINS_SCORE;
    }

    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let longest = a.len().max(b.len());
    if longest == 0 {
        return 1.0;
    }

    let distance = edit_distance(&a, &b);
    (1.0 - distance as f64 / longest as f64).max(0.0)
}

/// Levenshtein distance between two strings, counted in chars
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    edit_distance(&a, &b)
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Full `(len(b)+1) x (len(a)+1)` table, unit costs
fn edit_distance(a: &[char], b: &[char]) -> usize {
    let width = a.len() + 1;
    let mut table = vec![0usize; (b.len() + 1) * width];

    for j in 0..=a.len() {
        table[j] = j;
    }
    for i in 0..=b.len() {
        table[i * width] = i;
    }

    for i in 1..=b.len() {
        for j in 1..=a.len() {
            let cost = usize::from(b[i - 1] != a[j - 1]);
            let diagonal = table[(i - 1) * width + (j - 1)] + cost;
            let left = table[i * width + (j - 1)] + 1;
            let up = table[(i - 1) * width + j] + 1;
            table[i * width + j] = diagonal.min(left).min(up);
        }
    }

    table[b.len() * width + a.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_identical_is_perfect() {
        for s in ["", "kettle", "  Steel Kettle ", "ÉCLAIR"] {
            assert_eq!(similarity(s, s), 1.0);
        }
        assert_eq!(similarity("Kettle", " kettle "), 1.0);
    }

    #[test]
    fn test_both_empty() {
        assert_eq!(similarity("", ""), 1.0);
        assert_eq!(similarity("   ", ""), 1.0);
    }

    #[test]
    fn test_containment_bump() {
        assert_eq!(similarity("fan", "Mini Rechargeable Fan"), CONTAINS_SCORE);
        assert_eq!(similarity("Mini Rechargeable Fan", "FAN"), CONTAINS_SCORE);
        // The empty string is contained in everything
        assert_eq!(similarity("", "chips"), CONTAINS_SCORE);
    }

    #[test]
    fn test_kitten_sitting_below_threshold() {
        assert_eq!(levenshtein("kitten", "sitting"), 3);
        let score = similarity("kitten", "sitting");
        assert!(close(score, 1.0 - 3.0 / 7.0));
        assert!(score < 0.6);
    }

    #[test]
    fn test_typo_scores_high() {
        // one substitution over seven chars
        let score = similarity("chopper", "chapper");
        assert!(close(score, 1.0 - 1.0 / 7.0));
    }

    #[test]
    fn test_floor_at_zero_and_range() {
        let score = similarity("abc", "xyz");
        assert_eq!(score, 0.0);
        let score = similarity("ab", "wxyz");
        assert!((0.0..=1.0).contains(&score));
    }

    #[test]
    fn test_symmetric() {
        let pairs = [
            ("kitten", "sitting"),
            ("fan", "mini fan"),
            ("Chopper", "chapati"),
            ("", "x"),
            ("naïve", "naive"),
        ];
        for (a, b) in pairs {
            assert_eq!(similarity(a, b), similarity(b, a), "{a:?} vs {b:?}");
            assert_eq!(levenshtein(a, b), levenshtein(b, a));
        }
    }

    #[test]
    fn test_levenshtein_counts_chars_not_bytes() {
        assert_eq!(levenshtein("naïve", "naive"), 1);
        assert_eq!(levenshtein("", "abc"), 3);
        assert_eq!(levenshtein("flaw", "lawn"), 2);
    }
}
