use std::fmt;
use std::fs;
use std::path::Path;

use crate::AlignerError;

const DNA_SYMBOLS: &str = "ACGT";
const PROTEIN_SYMBOLS: &str = "ACDEFGHIKLMNPQRSTVWY";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Alphabet {
    Dna,
    Protein,
}

impl Alphabet {
    pub fn symbols(self) -> &'static str {
        match self {
            Alphabet::Dna => DNA_SYMBOLS,
            Alphabet::Protein => PROTEIN_SYMBOLS,
        }
    }

    /// Membership ignores case.
    pub fn contains(self, symbol: char) -> bool {
        symbol.is_ascii_alphabetic() && self.symbols().contains(symbol.to_ascii_uppercase())
    }

    /// Index and value of the first symbol outside the alphabet.
    pub fn first_invalid(self, data: &[char]) -> Option<(usize, char)> {
        data.iter()
            .copied()
            .enumerate()
            .find(|&(_, c)| !self.contains(c))
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Alphabet::Dna => f.write_str("DNA"),
            Alphabet::Protein => f.write_str("protein"),
        }
    }
}

/// Which of the two aligned sequences an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceSlot {
    First,
    Second,
}

impl fmt::Display for SequenceSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceSlot::First => f.write_str("sequence 1"),
            SequenceSlot::Second => f.write_str("sequence 2"),
        }
    }
}

/// Ordered symbols of one input, one `char` per symbol.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Sequence {
    id: Option<String>,
    data: Vec<char>,
}

impl Sequence {
    pub fn new(data: &str) -> Self {
        Self {
            id: None,
            data: data.chars().collect(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Reads a sequence from a plain text or single-record FASTA file.
    ///
    /// Lines are trimmed and joined, then upper-cased. Lines starting with
    /// `>` are headers; the first word of the first header becomes the id.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, AlignerError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| AlignerError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let mut id = None;
        let mut data = Vec::new();
        for line in text.lines() {
            let line = line.trim();
            if let Some(header) = line.strip_prefix('>') {
                if id.is_none() {
                    id = header.split_whitespace().next().map(str::to_string);
                }
                continue;
            }
            data.extend(
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .flat_map(char::to_uppercase),
            );
        }

        if data.is_empty() {
            return Err(AlignerError::EmptyFile {
                path: path.to_path_buf(),
            });
        }

        let sequence = Self { id: None, data };
        Ok(match id {
            Some(id) => sequence.with_id(id),
            None => sequence,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn data(&self) -> &[char] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn as_string(&self) -> String {
        self.data.iter().collect()
    }
}

impl From<&str> for Sequence {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Sequence {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl From<&String> for Sequence {
    fn from(s: &String) -> Self {
        Self::new(s)
    }
}

impl From<&[char]> for Sequence {
    fn from(data: &[char]) -> Self {
        Self {
            id: None,
            data: data.to_vec(),
        }
    }
}

impl From<Vec<char>> for Sequence {
    fn from(data: Vec<char>) -> Self {
        Self { id: None, data }
    }
}

impl From<&Sequence> for Sequence {
    fn from(seq: &Sequence) -> Self {
        seq.clone()
    }
}

impl AsRef<[char]> for Sequence {
    fn as_ref(&self) -> &[char] {
        &self.data
    }
}

/// Checks a pair of sequences before alignment: both non-empty and, when an
/// alphabet is given, drawn from it.
pub fn validate_pair(
    seq1: &[char],
    seq2: &[char],
    alphabet: Option<Alphabet>,
) -> Result<(), AlignerError> {
    if seq1.is_empty() || seq2.is_empty() {
        return Err(AlignerError::EmptyInput);
    }

    if let Some(alphabet) = alphabet {
        for (which, data) in [(SequenceSlot::First, seq1), (SequenceSlot::Second, seq2)] {
            if let Some((position, symbol)) = alphabet.first_invalid(data) {
                return Err(AlignerError::InvalidAlphabet {
                    which,
                    alphabet,
                    symbol,
                    position,
                });
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    #[test]
    fn alphabet_membership_ignores_case() {
        assert!(Alphabet::Dna.contains('a'));
        assert!(Alphabet::Dna.contains('T'));
        assert!(!Alphabet::Dna.contains('U'));
        assert!(Alphabet::Protein.contains('w'));
        assert!(!Alphabet::Protein.contains('B'));
        assert_eq!(Alphabet::Dna.first_invalid(&symbols("ACNGT")), Some((2, 'N')));
    }

    #[test]
    fn non_ascii_symbols_are_reported_whole() {
        assert!(!Alphabet::Protein.contains('é'));
        // Position counts symbols, not bytes.
        assert_eq!(Alphabet::Dna.first_invalid(&symbols("AéCÅ")), Some((1, 'é')));

        let err = validate_pair(&symbols("ACGT"), &symbols("ACÅT"), Some(Alphabet::Dna)).unwrap_err();
        assert_eq!(
            err.to_string(),
            "sequence 2 is not a valid DNA sequence: symbol 'Å' at position 2"
        );
    }

    #[test]
    fn empty_input_is_rejected_first() {
        let err = validate_pair(&[], &symbols("XYZ"), Some(Alphabet::Dna)).unwrap_err();
        assert!(matches!(err, AlignerError::EmptyInput));
        assert!(validate_pair(&symbols("ACGT"), &[], None).is_err());
    }

    #[test]
    fn invalid_symbol_names_the_sequence() {
        let err = validate_pair(&symbols("ACGT"), &symbols("ACXT"), Some(Alphabet::Dna)).unwrap_err();
        match err {
            AlignerError::InvalidAlphabet {
                which,
                alphabet,
                symbol,
                position,
            } => {
                assert_eq!(which, SequenceSlot::Second);
                assert_eq!(alphabet, Alphabet::Dna);
                assert_eq!(symbol, 'X');
                assert_eq!(position, 2);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn untyped_sequences_accept_anything() {
        assert!(validate_pair(&symbols("AGRCTAR"), &symbols("a-#1é"), None).is_ok());
        assert!(validate_pair(&symbols("MKWVTF"), &symbols("MKWVTF"), Some(Alphabet::Protein)).is_ok());
    }

    #[test]
    fn sequence_keeps_one_char_per_symbol() {
        let seq = Sequence::new("ñandú").with_id("bird");
        assert_eq!(seq.len(), 5);
        assert_eq!(seq.id(), Some("bird"));
        assert_eq!(seq.as_string(), "ñandú");
        assert_eq!(Sequence::from(&seq), seq);
    }
}
