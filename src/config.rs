use crate::{AlignmentMode, Alphabet, ScoreParams, MAX_MATRIX_CELLS};

#[derive(Debug, Clone)]
pub struct AlignerConfig {
    pub mode: AlignmentMode,
    pub scoring: ScoreParams,
    /// `None` aligns untyped sequences without an alphabet check.
    pub alphabet: Option<Alphabet>,
    /// Upper bound on `(len1 + 1) * (len2 + 1)`.
    pub max_cells: usize,
}

impl Default for AlignerConfig {
    fn default() -> Self {
        Self {
            mode: AlignmentMode::Global,
            scoring: ScoreParams::default(),
            alphabet: None,
            max_cells: MAX_MATRIX_CELLS,
        }
    }
}
