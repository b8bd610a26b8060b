//! Smith-Waterman local alignment.
//!
//! Same recurrence as the global variant with every cell floored at 0 and a
//! zero boundary, so an alignment may start and end anywhere:
//!
//! ```text
//! H(i,j) = max(
//!     H(i-1, j-1) + score(seq1[i-1], seq2[j-1]),
//!     H(i-1, j) + gap,
//!     H(i, j-1) + gap,
//!     0,
//! )
//! ```
//!
//! Traceback starts at the first maximum in row-major order and stops on the
//! boundary or at the first zero cell.

use log::{trace, warn};

use crate::alignment_mode::AlignmentStrategy;
use crate::traceback::{choose_move, PathBuilder, TracebackPath};
use crate::{ScoreParams, ScoringMatrix};

#[derive(Debug, Clone, Copy, Default)]
pub struct SmithWaterman;

impl AlignmentStrategy for SmithWaterman {
    fn fill(&self, seq1: &[char], seq2: &[char], scoring: &ScoreParams) -> ScoringMatrix {
        // Row 0 and column 0 stay at zero.
        let mut matrix = ScoringMatrix::for_lengths(seq1.len(), seq2.len());

        for i in 1..=seq1.len() {
            for j in 1..=seq2.len() {
                let diagonal = matrix.get(i - 1, j - 1) + scoring.score(seq1[i - 1], seq2[j - 1]);
                let up = matrix.get(i - 1, j) + scoring.gap;
                let left = matrix.get(i, j - 1) + scoring.gap;
                matrix.set(i, j, diagonal.max(up).max(left).max(0));
            }
        }

        matrix
    }

    fn traceback(
        &self,
        matrix: &ScoringMatrix,
        seq1: &[char],
        seq2: &[char],
        scoring: &ScoreParams,
    ) -> TracebackPath {
        let (start, best) = matrix.max_cell();
        if best == 0 {
            warn!("no positive-scoring local alignment, returning an empty one");
        }
        trace!("local traceback from ({}, {}) score {}", start.i, start.j, best);

        let mut path = PathBuilder::new(seq1, seq2, start);
        loop {
            let current = path.current();
            if current.i == 0 || current.j == 0 || matrix.get(current.i, current.j) == 0 {
                break;
            }
            let mv = choose_move(matrix, seq1, seq2, scoring, current.i, current.j);
            path.step(mv);
        }

        path.finish()
    }

    fn final_score(&self, matrix: &ScoringMatrix) -> i32 {
        matrix.max_cell().1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Position;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn align(seq1: &[char], seq2: &[char]) -> (TracebackPath, i32, ScoringMatrix) {
        let scoring = ScoreParams::default();
        let matrix = SmithWaterman.fill(seq1, seq2, &scoring);
        let path = SmithWaterman.traceback(&matrix, seq1, seq2, &scoring);
        let score = SmithWaterman.final_score(&matrix);
        (path, score, matrix)
    }

    #[test]
    fn matrix_is_floored_at_zero() {
        let (_, _, matrix) = align(&chars("AGRCTAR"), &chars("AACTA"));
        assert!(matrix.as_slice().iter().all(|&v| v >= 0));
        assert!(matrix.row(0).iter().all(|&v| v == 0));
        assert!((0..matrix.rows()).all(|i| matrix.get(i, 0) == 0));
        assert_eq!(matrix.row(6), &[0, 1, 1, 0, 0, 3]);
    }

    #[test]
    fn reference_alignment() {
        let (path, score, _) = align(&chars("AGRCTAR"), &chars("AACTA"));
        assert_eq!(score, 3);
        assert_eq!(path.aligned_seq1, chars("CTA"));
        assert_eq!(path.aligned_seq2, chars("CTA"));
        assert_eq!(path.end, Position::new(6, 5));
        assert_eq!(path.start, Position::new(3, 2));
    }

    #[test]
    fn recovers_embedded_substring() {
        let (path, score, _) = align(&chars("ACGTACGTACGT"), &chars("TACGT"));
        assert_eq!(score, 5);
        assert_eq!(path.aligned_seq1, chars("TACGT"));
        assert_eq!(path.aligned_seq2, chars("TACGT"));
        // The first of the two equal maxima wins.
        assert_eq!(path.end, Position::new(8, 5));
    }

    #[test]
    fn no_positive_region_is_empty() {
        let (path, score, _) = align(&chars("AAAA"), &chars("TTTT"));
        assert_eq!(score, 0);
        assert!(path.aligned_seq1.is_empty());
        assert!(path.aligned_seq2.is_empty());
        assert_eq!(path.end, Position::new(0, 0));
    }

    #[test]
    fn walk_crosses_a_gap() {
        let scoring = ScoreParams::new(2, -1, -1);
        let matrix = SmithWaterman.fill(&chars("ACGGT"), &chars("ACGT"), &scoring);
        let path = SmithWaterman.traceback(&matrix, &chars("ACGGT"), &chars("ACGT"), &scoring);
        assert_eq!(SmithWaterman.final_score(&matrix), 7);
        assert_eq!(path.aligned_seq1, chars("ACGGT"));
        // Diagonal is taken at (4,3), pushing the gap onto the first G.
        assert_eq!(path.aligned_seq2, chars("AC-GT"));
    }
}
