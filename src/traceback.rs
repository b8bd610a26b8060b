use crate::scoring::AlignmentStats;
use crate::{AlignerError, AlignmentMode, Position, ScoreParams, ScoringMatrix, GAP_SYMBOL};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracebackOperation {
    Match,
    Mismatch,
    /// Gap in the first sequence.
    Insertion,
    /// Gap in the second sequence.
    Deletion,
}

/// One backward step through the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Move {
    Diagonal,
    Up,
    Left,
}

/// Recomputes the three predecessors of an interior cell `(i, j)` and picks
/// the first one that reproduces its value, in the order diagonal, up, left.
pub(crate) fn choose_move(
    matrix: &ScoringMatrix,
    seq1: &[char],
    seq2: &[char],
    scoring: &ScoreParams,
    i: usize,
    j: usize,
) -> Move {
    let current = matrix.get(i, j);
    let diagonal = matrix.get(i - 1, j - 1) + scoring.score(seq1[i - 1], seq2[j - 1]);
    let up = matrix.get(i - 1, j) + scoring.gap;

    if current == diagonal {
        Move::Diagonal
    } else if current == up {
        Move::Up
    } else {
        Move::Left
    }
}

/// Aligned pair produced by a traceback, in left-to-right order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TracebackPath {
    pub aligned_seq1: Vec<char>,
    pub aligned_seq2: Vec<char>,
    pub operations: Vec<TracebackOperation>,
    /// Cell where the walk stopped.
    pub start: Position,
    /// Cell where the walk began.
    pub end: Position,
}

/// Accumulates emitted columns while walking backwards.
pub(crate) struct PathBuilder<'a> {
    seq1: &'a [char],
    seq2: &'a [char],
    aligned_seq1: Vec<char>,
    aligned_seq2: Vec<char>,
    operations: Vec<TracebackOperation>,
    current: Position,
    end: Position,
}

impl<'a> PathBuilder<'a> {
    pub(crate) fn new(seq1: &'a [char], seq2: &'a [char], end: Position) -> Self {
        let capacity = end.i + end.j;
        Self {
            seq1,
            seq2,
            aligned_seq1: Vec::with_capacity(capacity),
            aligned_seq2: Vec::with_capacity(capacity),
            operations: Vec::with_capacity(capacity),
            current: end,
            end,
        }
    }

    pub(crate) fn current(&self) -> Position {
        self.current
    }

    pub(crate) fn step(&mut self, mv: Move) {
        let Position { i, j } = self.current;
        match mv {
            Move::Diagonal => {
                let (a, b) = (self.seq1[i - 1], self.seq2[j - 1]);
                self.aligned_seq1.push(a);
                self.aligned_seq2.push(b);
                self.operations.push(if a == b {
                    TracebackOperation::Match
                } else {
                    TracebackOperation::Mismatch
                });
                self.current = Position::new(i - 1, j - 1);
            }
            Move::Up => {
                self.aligned_seq1.push(self.seq1[i - 1]);
                self.aligned_seq2.push(GAP_SYMBOL);
                self.operations.push(TracebackOperation::Deletion);
                self.current = Position::new(i - 1, j);
            }
            Move::Left => {
                self.aligned_seq1.push(GAP_SYMBOL);
                self.aligned_seq2.push(self.seq2[j - 1]);
                self.operations.push(TracebackOperation::Insertion);
                self.current = Position::new(i, j - 1);
            }
        }
    }

    pub(crate) fn finish(mut self) -> TracebackPath {
        // Columns were collected end to start.
        self.aligned_seq1.reverse();
        self.aligned_seq2.reverse();
        self.operations.reverse();

        TracebackPath {
            aligned_seq1: self.aligned_seq1,
            aligned_seq2: self.aligned_seq2,
            operations: self.operations,
            start: self.current,
            end: self.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlignmentResult {
    pub mode: AlignmentMode,
    pub score: i32,
    pub aligned_seq1: Vec<char>,
    pub aligned_seq2: Vec<char>,
    pub operations: Vec<TracebackOperation>,
    pub start_position: Position,
    pub end_position: Position,
    pub matrix: ScoringMatrix,
}

impl AlignmentResult {
    pub(crate) fn new(
        mode: AlignmentMode,
        score: i32,
        path: TracebackPath,
        matrix: ScoringMatrix,
    ) -> Self {
        Self {
            mode,
            score,
            aligned_seq1: path.aligned_seq1,
            aligned_seq2: path.aligned_seq2,
            operations: path.operations,
            start_position: path.start,
            end_position: path.end,
            matrix,
        }
    }

    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.aligned_seq1.len()
    }

    pub fn is_empty(&self) -> bool {
        self.aligned_seq1.is_empty()
    }

    pub fn aligned_strings(&self) -> (String, String) {
        (
            self.aligned_seq1.iter().collect(),
            self.aligned_seq2.iter().collect(),
        )
    }

    pub fn stats(&self) -> Result<AlignmentStats, AlignerError> {
        AlignmentStats::from_aligned(&self.aligned_seq1, &self.aligned_seq2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn filled(rows: &[&[i32]]) -> ScoringMatrix {
        let mut m = ScoringMatrix::new(rows.len(), rows[0].len());
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                m.set(i, j, v);
            }
        }
        m
    }

    #[test]
    fn diagonal_wins_ties() {
        // Cell (1,1) = 1 is reachable from the diagonal (0 + 1) and,
        // with gap = 0 here, from above and the left as well.
        let m = filled(&[&[0, 1], &[1, 1]]);
        let scoring = ScoreParams::new(1, -1, 0);
        assert_eq!(choose_move(&m, &chars("A"), &chars("A"), &scoring, 1, 1), Move::Diagonal);
    }

    #[test]
    fn up_is_preferred_over_left() {
        let m = filled(&[&[0, -2], &[-2, -4]]);
        let scoring = ScoreParams::new(1, -5, -2);
        // Diagonal gives -5; up and left both give -4.
        assert_eq!(choose_move(&m, &chars("A"), &chars("C"), &scoring, 1, 1), Move::Up);
    }

    #[test]
    fn left_is_the_fallback() {
        let m = filled(&[&[0, -9], &[0, -2]]);
        let scoring = ScoreParams::new(1, -5, -2);
        assert_eq!(choose_move(&m, &chars("A"), &chars("C"), &scoring, 1, 1), Move::Left);
    }

    #[test]
    fn builder_reverses_and_labels_columns() {
        let (seq1, seq2) = (chars("AC"), chars("G"));
        let mut path = PathBuilder::new(&seq1, &seq2, Position::new(2, 1));
        path.step(Move::Up);
        path.step(Move::Diagonal);
        assert_eq!(path.current(), Position::new(0, 0));

        let path = path.finish();
        assert_eq!(path.aligned_seq1, chars("AC"));
        assert_eq!(path.aligned_seq2, chars("G-"));
        assert_eq!(
            path.operations,
            vec![TracebackOperation::Mismatch, TracebackOperation::Deletion]
        );
        assert_eq!(path.start, Position::new(0, 0));
        assert_eq!(path.end, Position::new(2, 1));
    }
}
