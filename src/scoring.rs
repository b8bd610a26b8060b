use crate::{AlignerError, DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH, GAP_SYMBOL};

/// Flat match/mismatch/linear-gap scoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreParams {
    pub match_score: i32,
    pub mismatch: i32,
    pub gap: i32,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            match_score: DEFAULT_MATCH,
            mismatch: DEFAULT_MISMATCH,
            gap: DEFAULT_GAP,
        }
    }
}

impl ScoreParams {
    pub fn new(match_score: i32, mismatch: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch,
            gap,
        }
    }

    /// Case-sensitive: callers normalise case before aligning.
    #[inline]
    pub fn score(&self, a: char, b: char) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch
        }
    }
}

/// Matrix coordinates, `i` indexing the first sequence and `j` the second.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position {
    pub i: usize,
    pub j: usize,
}

impl Position {
    pub fn new(i: usize, j: usize) -> Self {
        Self { i, j }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AlignmentStats {
    pub matches: usize,
    pub mismatches: usize,
    /// Gap symbols counted over both aligned sequences.
    pub gaps: usize,
    pub length: usize,
    pub identity: f64,
}

impl AlignmentStats {
    pub fn from_aligned(aligned1: &[char], aligned2: &[char]) -> Result<Self, AlignerError> {
        check_lengths(aligned1, aligned2)?;

        let matches = count_matches(aligned1, aligned2)?;
        let mismatches = count_mismatches(aligned1, aligned2)?;
        let gaps = count_gaps(aligned1) + count_gaps(aligned2);

        Ok(Self {
            matches,
            mismatches,
            gaps,
            length: aligned1.len(),
            identity: identity_percent(matches, aligned1.len()),
        })
    }
}

fn check_lengths(aligned1: &[char], aligned2: &[char]) -> Result<(), AlignerError> {
    if aligned1.len() != aligned2.len() {
        return Err(AlignerError::LengthMismatch {
            left: aligned1.len(),
            right: aligned2.len(),
        });
    }
    Ok(())
}

fn identity_percent(matches: usize, length: usize) -> f64 {
    if length == 0 {
        0.0
    } else {
        matches as f64 / length as f64 * 100.0
    }
}

pub fn count_gaps(aligned: &[char]) -> usize {
    aligned.iter().filter(|&&c| c == GAP_SYMBOL).count()
}

pub fn count_matches(aligned1: &[char], aligned2: &[char]) -> Result<usize, AlignerError> {
    check_lengths(aligned1, aligned2)?;
    Ok(aligned1
        .iter()
        .zip(aligned2)
        .filter(|(&a, &b)| a == b && a != GAP_SYMBOL)
        .count())
}

pub fn count_mismatches(aligned1: &[char], aligned2: &[char]) -> Result<usize, AlignerError> {
    check_lengths(aligned1, aligned2)?;
    Ok(aligned1
        .iter()
        .zip(aligned2)
        .filter(|(&a, &b)| a != b && a != GAP_SYMBOL && b != GAP_SYMBOL)
        .count())
}

/// Percentage of alignment columns holding identical non-gap symbols.
/// Gap columns count towards the length.
pub fn calculate_identity(aligned1: &[char], aligned2: &[char]) -> Result<f64, AlignerError> {
    let matches = count_matches(aligned1, aligned2)?;
    Ok(identity_percent(matches, aligned1.len()))
}
