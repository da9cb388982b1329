//! Dense transition matrix.
//!
//! Grids in this workspace are interactively sized (tens of cells), so the
//! matrix is stored densely as one row-major `Vec<f64>` of length `n * n`.
//! Row `i` is the distribution of where mass in cell `i` goes after one
//! step.

use std::fmt;

/// `n × n` row-stochastic matrix over the column-major cell index.
#[derive(Clone, Debug, PartialEq)]
pub struct TransitionMatrix {
    n:       usize,
    entries: Vec<f64>,
}

impl TransitionMatrix {
    /// The `n × n` identity: every cell absorbing.
    pub fn identity(n: usize) -> Self {
        let mut entries = vec![0.0; n * n];
        for i in 0..n {
            entries[i * n + i] = 1.0;
        }
        Self { n, entries }
    }

    /// Number of rows (= columns = cells).
    #[inline]
    pub fn dim(&self) -> usize {
        self.n
    }

    /// Probability of moving from cell `row` to cell `col` in one step.
    ///
    /// # Panics
    /// Panics if either index is `>= dim()`.
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> f64 {
        assert!(col < self.n, "column {col} out of range for dimension {}", self.n);
        self.entries[row * self.n + col]
    }

    /// Row `i` as a slice of length `dim()`.
    ///
    /// # Panics
    /// Panics if `i >= dim()`.
    #[inline]
    pub fn row(&self, i: usize) -> &[f64] {
        &self.entries[i * self.n..(i + 1) * self.n]
    }

    /// All rows in index order.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        // `chunks_exact(0)` panics; an empty matrix simply has no rows.
        self.entries.chunks_exact(self.n.max(1))
    }

    pub fn row_sum(&self, i: usize) -> f64 {
        self.row(i).iter().sum()
    }

    /// `true` if row `i` keeps all mass in place.
    pub fn is_absorbing(&self, i: usize) -> bool {
        self.get(i, i) == 1.0
    }

    /// Every row sums to 1 within `tol` and no entry is negative.
    pub fn is_row_stochastic(&self, tol: f64) -> bool {
        (0..self.n).all(|i| {
            self.row(i).iter().all(|&p| p >= 0.0) && (self.row_sum(i) - 1.0).abs() <= tol
        })
    }

    /// Mutable row access for the generator.
    #[inline]
    pub(crate) fn row_mut(&mut self, i: usize) -> &mut [f64] {
        let n = self.n;
        &mut self.entries[i * n..(i + 1) * n]
    }

    /// All-zero matrix; only the generator builds one, filling every row.
    pub(crate) fn zeros(n: usize) -> Self {
        Self { n, entries: vec![0.0; n * n] }
    }
}

impl fmt::Display for TransitionMatrix {
    /// One row per line, entries to three decimals.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            let cells: Vec<String> = row.iter().map(|p| format!("{p:.3}")).collect();
            writeln!(f, "[{}]", cells.join(", "))?;
        }
        Ok(())
    }
}
