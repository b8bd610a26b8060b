use std::fmt;

use crate::needleman_wunsch::NeedlemanWunsch;
use crate::smith_waterman::SmithWaterman;
use crate::traceback::TracebackPath;
use crate::{ScoreParams, ScoringMatrix};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AlignmentMode {
    #[default]
    Global, // Needleman-Wunsch
    Local, // Smith-Waterman
}

impl fmt::Display for AlignmentMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignmentMode::Global => f.write_str("Needleman-Wunsch (global)"),
            AlignmentMode::Local => f.write_str("Smith-Waterman (local)"),
        }
    }
}

/// The three phases every alignment variant provides.
pub trait AlignmentStrategy {
    fn fill(&self, seq1: &[char], seq2: &[char], scoring: &ScoreParams) -> ScoringMatrix;

    fn traceback(
        &self,
        matrix: &ScoringMatrix,
        seq1: &[char],
        seq2: &[char],
        scoring: &ScoreParams,
    ) -> TracebackPath;

    fn final_score(&self, matrix: &ScoringMatrix) -> i32;
}

impl AlignmentStrategy for AlignmentMode {
    fn fill(&self, seq1: &[char], seq2: &[char], scoring: &ScoreParams) -> ScoringMatrix {
        match self {
            AlignmentMode::Global => NeedlemanWunsch.fill(seq1, seq2, scoring),
            AlignmentMode::Local => SmithWaterman.fill(seq1, seq2, scoring),
        }
    }

    fn traceback(
        &self,
        matrix: &ScoringMatrix,
        seq1: &[char],
        seq2: &[char],
        scoring: &ScoreParams,
    ) -> TracebackPath {
        match self {
            AlignmentMode::Global => NeedlemanWunsch.traceback(matrix, seq1, seq2, scoring),
            AlignmentMode::Local => SmithWaterman.traceback(matrix, seq1, seq2, scoring),
        }
    }

    fn final_score(&self, matrix: &ScoringMatrix) -> i32 {
        match self {
            AlignmentMode::Global => NeedlemanWunsch.final_score(matrix),
            AlignmentMode::Local => SmithWaterman.final_score(matrix),
        }
    }
}
