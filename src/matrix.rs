use crate::Position;

/// Dense DP table stored as one row-major buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoringMatrix {
    data: Vec<i32>,
    rows: usize,
    cols: usize,
}

impl ScoringMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![0; rows * cols],
            rows,
            cols,
        }
    }

    /// Matrix for aligning sequences of the given lengths.
    pub fn for_lengths(len1: usize, len2: usize) -> Self {
        Self::new(len1 + 1, len2 + 1)
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: i32) {
        self.data[row * self.cols + col] = value;
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.data[row * self.cols + col]
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn row(&self, row: usize) -> &[i32] {
        let start = row * self.cols;
        &self.data[start..start + self.cols]
    }

    pub fn as_slice(&self) -> &[i32] {
        &self.data
    }

    /// Bottom-right cell, `(0, 0)` for a degenerate matrix.
    pub fn last(&self) -> i32 {
        self.data.last().copied().unwrap_or(0)
    }

    /// First strictly-greater maximum in row-major order, seeded with 0 at
    /// `(0, 0)`. A matrix with no positive cell reports `((0, 0), 0)`.
    pub fn max_cell(&self) -> (Position, i32) {
        let mut best = (Position::default(), 0);
        for (idx, &value) in self.data.iter().enumerate() {
            if value > best.1 {
                best = (Position::new(idx / self.cols, idx % self.cols), value);
            }
        }
        best
    }
}
