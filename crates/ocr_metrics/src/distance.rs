//! Unit-cost Levenshtein distance over arbitrary token sequences.

/// Minimum number of insertions, deletions and substitutions turning `a`
/// into `b`.
///
/// Runs in O(|a|·|b|) time and keeps two rows sized by the shorter input.
pub fn edit_distance<T: PartialEq>(a: &[T], b: &[T]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }
    // The distance is symmetric, so the shorter side can index the rows.
    let (short, long) = if a.len() <= b.len() { (a, b) } else { (b, a) };
    let m = short.len();
    let mut prev: Vec<usize> = (0..=m).collect();
    let mut curr = vec![0usize; m + 1];

    for (i, lt) in long.iter().enumerate() {
        curr[0] = i + 1;
        for (j, st) in short.iter().enumerate() {
            let cost = usize::from(lt != st);
            let del = prev[j + 1] + 1;
            let ins = curr[j] + 1;
            let sub = prev[j] + cost;
            curr[j + 1] = del.min(ins).min(sub);
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[m]
}

/// Full `(|a|+1) x (|b|+1)` distance table.
///
/// `matrix[i][j]` is the distance between the first `i` tokens of `a` and the
/// first `j` tokens of `b`; the bottom-right cell equals [`edit_distance`].
pub fn distance_matrix<T: PartialEq>(a: &[T], b: &[T]) -> Vec<Vec<usize>> {
    let (m, n) = (a.len(), b.len());
    let mut dp = vec![vec![0usize; n + 1]; m + 1];
    for (i, row) in dp.iter_mut().enumerate() {
        row[0] = i;
    }
    for (j, cell) in dp[0].iter_mut().enumerate() {
        *cell = j;
    }
    for i in 1..=m {
        for j in 1..=n {
            dp[i][j] = if a[i - 1] == b[j - 1] {
                dp[i - 1][j - 1]
            } else {
                1 + dp[i - 1][j].min(dp[i][j - 1]).min(dp[i - 1][j - 1])
            };
        }
    }
    dp
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn test_empty_inputs() {
        let empty: [char; 0] = [];
        assert_eq!(edit_distance(&empty, &empty), 0);
        assert_eq!(edit_distance(&empty, &chars("abc")), 3);
        assert_eq!(edit_distance(&chars("abcd"), &empty), 4);
    }

    #[test]
    fn test_single_edits() {
        assert_eq!(edit_distance(&chars("hello"), &chars("hallo")), 1);
        assert_eq!(edit_distance(&chars("hello"), &chars("helllo")), 1);
        assert_eq!(edit_distance(&chars("hello"), &chars("helo")), 1);
        assert_eq!(edit_distance(&chars("abc"), &chars("xyz")), 3);
        assert_eq!(edit_distance(&chars("kitten"), &chars("sitting")), 3);
    }

    #[test]
    fn test_words() {
        // OCR misread one word of the line.
        let r = ["saya", "membaca", "buku", "itu"];
        let h = ["saya", "membaca", "huku", "itu"];
        assert_eq!(edit_distance(&r, &h), 1);
        // A dropped word and a split word.
        let h = ["saya", "mem", "baca", "itu"];
        assert_eq!(edit_distance(&r, &h), 2);
        assert_eq!(edit_distance(&["hello", "world"], &["hello", "beautiful", "world"]), 1);
    }

    #[test]
    fn test_symmetric() {
        let pairs = [("flaw", "lawn"), ("سلام", "سلم"), ("", "x"), ("intention", "execution")];
        for (a, b) in pairs {
            assert_eq!(edit_distance(&chars(a), &chars(b)), edit_distance(&chars(b), &chars(a)));
        }
    }

    #[test]
    fn test_matrix_boundaries_and_agreement() {
        let a = chars("kitten");
        let b = chars("sitting");
        let dp = distance_matrix(&a, &b);
        assert_eq!(dp.len(), a.len() + 1);
        assert_eq!(dp[0].len(), b.len() + 1);
        for (j, cell) in dp[0].iter().enumerate() {
            assert_eq!(*cell, j);
        }
        for (i, row) in dp.iter().enumerate() {
            assert_eq!(row[0], i);
        }
        assert_eq!(dp[a.len()][b.len()], edit_distance(&a, &b));
        // Prefix "kit" vs "sit".
        assert_eq!(dp[3][3], 1);
    }
}
