//! Lexicographic k-combinations of `0..n`

/// Iterator over every k-element index set of `0..n`, in lexicographic order
///
/// `[0, 1, 2]`, `[0, 1, 3]`, ..., `[n-3, n-2, n-1]`. Yields nothing when
/// `k == 0` or `k > n`.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    indexes: Vec<usize>,
    exhausted: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            n,
            indexes: (0..k).collect(),
            exhausted: k == 0 || k > n,
        }
    }

    /// Move to the next index vector; false once the last one was produced
    fn advance(&mut self) -> bool {
        let k = self.indexes.len();
        // rightmost position that can still move right
        let Some(pos) = (0..k)
            .rev()
            .find(|&i| self.indexes[i] != self.n - k + i)
        else {
            return false;
        };
        self.indexes[pos] += 1;
        for i in pos + 1..k {
            self.indexes[i] = self.indexes[i - 1] + 1;
        }
        true
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Vec<usize>> {
        if self.exhausted {
            return None;
        }
        let current = self.indexes.clone();
        self.exhausted = !self.advance();
        Some(current)
    }
}
