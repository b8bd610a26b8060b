use std::path::PathBuf;
use std::time::Instant;

use log::debug;
use thiserror::Error;

pub mod alignment_mode;
pub mod config;
pub mod matrix;
pub mod needleman_wunsch;
pub mod render;
pub mod scoring;
pub mod sequence;
pub mod smith_waterman;
pub mod traceback;

pub use alignment_mode::{AlignmentMode, AlignmentStrategy};
pub use config::AlignerConfig;
pub use matrix::ScoringMatrix;
pub use needleman_wunsch::NeedlemanWunsch;
pub use scoring::{AlignmentStats, Position, ScoreParams};
pub use sequence::{Alphabet, Sequence, SequenceSlot};
pub use smith_waterman::SmithWaterman;
pub use traceback::{AlignmentResult, TracebackOperation, TracebackPath};

// Reference scoring
pub const DEFAULT_MATCH: i32 = 1;
pub const DEFAULT_MISMATCH: i32 = -1;
pub const DEFAULT_GAP: i32 = -2;

pub const GAP_SYMBOL: char = '-';

/// 2^28 cells of `i32`, about 1 GiB of matrix.
pub const MAX_MATRIX_CELLS: usize = 1 << 28;

#[derive(Debug, Error)]
pub enum AlignerError {
    #[error("sequences cannot be empty")]
    EmptyInput,
    #[error("{which} is not a valid {alphabet} sequence: symbol '{symbol}' at position {position}")]
    InvalidAlphabet {
        which: SequenceSlot,
        alphabet: Alphabet,
        symbol: char,
        position: usize,
    },
    #[error("aligned sequences must have the same length ({left} != {right})")]
    LengthMismatch { left: usize, right: usize },
    #[error("scoring matrix of {rows} x {cols} cells exceeds the configured limit")]
    SequenceTooLarge { rows: usize, cols: usize },
    #[error("scores of magnitude {magnitude} over {steps} steps overflow the i32 score range")]
    ScoreOverflow { magnitude: u32, steps: usize },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("cannot read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no sequence found in {}", path.display())]
    EmptyFile { path: PathBuf },
}

/// Pairwise aligner running one of the two dynamic-programming variants.
#[derive(Debug, Clone, Default)]
pub struct Aligner {
    config: AlignerConfig,
}

impl Aligner {
    pub fn new(config: AlignerConfig) -> Self {
        Self { config }
    }

    pub fn with_alignment_mode(mut self, mode: AlignmentMode) -> Self {
        self.config.mode = mode;
        self
    }

    pub fn with_scoring(mut self, scoring: ScoreParams) -> Self {
        self.config.scoring = scoring;
        self
    }

    pub fn with_alphabet(mut self, alphabet: Option<Alphabet>) -> Self {
        self.config.alphabet = alphabet;
        self
    }

    pub fn with_max_cells(mut self, max_cells: usize) -> Result<Self, AlignerError> {
        if max_cells == 0 {
            return Err(AlignerError::InvalidConfig(
                "max_cells must be greater than 0".to_string(),
            ));
        }
        self.config.max_cells = max_cells;
        Ok(self)
    }

    pub fn config(&self) -> &AlignerConfig {
        &self.config
    }

    pub fn mode(&self) -> AlignmentMode {
        self.config.mode
    }

    /// Aligns `seq1` against `seq2` symbol by symbol (Unicode scalar values).
    ///
    /// Validation runs first; on failure no matrix is allocated. The score
    /// is the bottom-right cell for global alignment and the matrix maximum
    /// for local alignment.
    pub fn align(
        &self,
        seq1: impl Into<Sequence>,
        seq2: impl Into<Sequence>,
    ) -> Result<AlignmentResult, AlignerError> {
        let (first, second): (Sequence, Sequence) = (seq1.into(), seq2.into());
        let (seq1, seq2) = (first.data(), second.data());
        sequence::validate_pair(seq1, seq2, self.config.alphabet)?;
        self.check_size(seq1.len(), seq2.len())?;
        self.check_score_range(seq1.len(), seq2.len())?;

        let mode = self.config.mode;
        let scoring = &self.config.scoring;
        debug!(
            "{} alignment of {} x {} symbols",
            mode,
            seq1.len(),
            seq2.len()
        );

        let start_time = Instant::now();
        let matrix = mode.fill(seq1, seq2, scoring);
        let fill_time = start_time.elapsed();

        let path = mode.traceback(&matrix, seq1, seq2, scoring);
        let score = mode.final_score(&matrix);
        debug!(
            "score {} over {} columns (fill {:?}, total {:?})",
            score,
            path.aligned_seq1.len(),
            fill_time,
            start_time.elapsed()
        );

        Ok(AlignmentResult::new(mode, score, path, matrix))
    }

    fn check_size(&self, len1: usize, len2: usize) -> Result<(), AlignerError> {
        let (rows, cols) = (len1 + 1, len2 + 1);
        match rows.checked_mul(cols) {
            Some(cells) if cells <= self.config.max_cells => Ok(()),
            _ => Err(AlignerError::SequenceTooLarge { rows, cols }),
        }
    }

    /// Every cell and traceback candidate lies on a path of at most
    /// `len1 + len2` steps, each adding at most the largest score magnitude.
    fn check_score_range(&self, len1: usize, len2: usize) -> Result<(), AlignerError> {
        let scoring = &self.config.scoring;
        let magnitude = scoring
            .match_score
            .unsigned_abs()
            .max(scoring.mismatch.unsigned_abs())
            .max(scoring.gap.unsigned_abs());
        let steps = len1.saturating_add(len2);

        let bound = u64::from(magnitude).checked_mul(steps as u64);
        match bound {
            Some(bound) if bound <= i32::MAX as u64 => Ok(()),
            _ => Err(AlignerError::ScoreOverflow { magnitude, steps }),
        }
    }
}
