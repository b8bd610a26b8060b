//! Needleman-Wunsch global alignment.
//!
//! ```text
//! M(i,0) = gap * i
//! M(0,j) = gap * j
//! M(i,j) = max(
//!     M(i-1, j-1) + score(seq1[i-1], seq2[j-1]),
//!     M(i-1, j) + gap,
//!     M(i, j-1) + gap,
//! )
//! ```
//!
//! The score is `M(n, m)`. Traceback walks from `(n, m)` back to `(0, 0)`;
//! once it reaches row or column 0 the rest of the other sequence is
//! emitted against gaps.

use crate::alignment_mode::AlignmentStrategy;
use crate::traceback::{choose_move, Move, PathBuilder, TracebackPath};
use crate::{Position, ScoreParams, ScoringMatrix};

#[derive(Debug, Clone, Copy, Default)]
pub struct NeedlemanWunsch;

impl AlignmentStrategy for NeedlemanWunsch {
    fn fill(&self, seq1: &[char], seq2: &[char], scoring: &ScoreParams) -> ScoringMatrix {
        let mut matrix = ScoringMatrix::for_lengths(seq1.len(), seq2.len());

        // Boundaries accumulate one gap per step; the aligner has already
        // checked that `gap * (n + m)` fits in an i32.
        for i in 1..matrix.rows() {
            matrix.set(i, 0, matrix.get(i - 1, 0) + scoring.gap);
        }
        for j in 1..matrix.cols() {
            matrix.set(0, j, matrix.get(0, j - 1) + scoring.gap);
        }

        for i in 1..=seq1.len() {
            for j in 1..=seq2.len() {
                let diagonal = matrix.get(i - 1, j - 1) + scoring.score(seq1[i - 1], seq2[j - 1]);
                let up = matrix.get(i - 1, j) + scoring.gap;
                let left = matrix.get(i, j - 1) + scoring.gap;
                matrix.set(i, j, diagonal.max(up).max(left));
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
        let mut path = PathBuilder::new(seq1, seq2, Position::new(seq1.len(), seq2.len()));

        loop {
            let Position { i, j } = path.current();
            let mv = match (i, j) {
                (0, 0) => break,
                (_, 0) => Move::Up,
                (0, _) => Move::Left,
                _ => choose_move(matrix, seq1, seq2, scoring, i, j),
            };
            path.step(mv);
        }

        path.finish()
    }

    fn final_score(&self, matrix: &ScoringMatrix) -> i32 {
        matrix.last()
    }
}
