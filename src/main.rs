use std::error::Error;
use std::path::PathBuf;
use std::slice;

use clap::{Parser, ValueEnum};
use log::info;
use pairwise_aligner::render::{format_alignment, format_comparison, format_matrix};
use pairwise_aligner::{
    Aligner, AlignerConfig, AlignmentMode, AlignmentResult, Alphabet, ScoreParams, Sequence,
    DEFAULT_GAP, DEFAULT_MATCH, DEFAULT_MISMATCH,
};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum ModeArg {
    Global,
    Local,
    Both,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum AlphabetArg {
    Dna,
    Protein,
}

impl From<AlphabetArg> for Alphabet {
    fn from(arg: AlphabetArg) -> Self {
        match arg {
            AlphabetArg::Dna => Alphabet::Dna,
            AlphabetArg::Protein => Alphabet::Protein,
        }
    }
}

#[derive(Parser, Debug)]
#[command(
    name = "pairalign",
    version,
    about = "Global (Needleman-Wunsch) and local (Smith-Waterman) pairwise alignment"
)]
struct Args {
    /// Sequences given inline, filling whichever of --file1/--file2 is absent
    #[arg(value_name = "SEQ", num_args = 0..=2)]
    sequences: Vec<String>,

    /// Read the first sequence from a text or FASTA file
    #[arg(long)]
    file1: Option<PathBuf>,

    /// Read the second sequence from a text or FASTA file
    #[arg(long)]
    file2: Option<PathBuf>,

    #[arg(short, long, value_enum, default_value = "both")]
    mode: ModeArg,

    #[arg(long = "match-score", default_value_t = DEFAULT_MATCH, allow_hyphen_values = true)]
    match_score: i32,

    #[arg(long, default_value_t = DEFAULT_MISMATCH, allow_hyphen_values = true)]
    mismatch: i32,

    #[arg(long, default_value_t = DEFAULT_GAP, allow_hyphen_values = true)]
    gap: i32,

    /// Reject symbols outside this alphabet
    #[arg(short, long, value_enum)]
    alphabet: Option<AlphabetArg>,

    /// Print the scoring matrix of each alignment
    #[arg(long)]
    show_matrix: bool,
}

fn load(
    file: Option<&PathBuf>,
    inline: &mut slice::Iter<'_, String>,
) -> Result<Sequence, Box<dyn Error>> {
    match file {
        Some(path) => Ok(Sequence::from_file(path)?),
        None => inline
            .next()
            .map(Sequence::from)
            .ok_or_else(|| "two sequences are required, inline or via --file1/--file2".into()),
    }
}

fn load_inputs(args: &Args) -> Result<(Sequence, Sequence), Box<dyn Error>> {
    let mut inline = args.sequences.iter();
    let seq1 = load(args.file1.as_ref(), &mut inline)?;
    let seq2 = load(args.file2.as_ref(), &mut inline)?;
    if inline.next().is_some() {
        return Err("too many sequences: expected two in total across SEQ, --file1 and --file2".into());
    }
    Ok((seq1, seq2))
}

fn report(
    out: &mut String,
    seq1: &Sequence,
    seq2: &Sequence,
    result: &AlignmentResult,
    show_matrix: bool,
) -> Result<(), Box<dyn Error>> {
    let title = result.mode.to_string();
    if show_matrix {
        out.push_str(&format_matrix(&result.matrix, seq1.data(), seq2.data(), &title));
    }
    out.push_str(&format_alignment(seq1.data(), seq2.data(), result, &title)?);
    Ok(())
}

/// Loads the inputs, runs the requested alignments and returns the report.
fn run(args: Args) -> Result<String, Box<dyn Error>> {
    let (seq1, seq2) = load_inputs(&args)?;
    info!(
        "aligning {} ({} symbols) against {} ({} symbols)",
        seq1.id().unwrap_or("sequence 1"),
        seq1.len(),
        seq2.id().unwrap_or("sequence 2"),
        seq2.len()
    );

    let config = AlignerConfig {
        scoring: ScoreParams::new(args.match_score, args.mismatch, args.gap),
        alphabet: args.alphabet.map(Alphabet::from),
        ..AlignerConfig::default()
    };
    let aligner = Aligner::new(config);

    let modes: &[AlignmentMode] = match args.mode {
        ModeArg::Global => &[AlignmentMode::Global],
        ModeArg::Local => &[AlignmentMode::Local],
        ModeArg::Both => &[AlignmentMode::Global, AlignmentMode::Local],
    };

    let mut out = String::new();
    let mut results = Vec::with_capacity(modes.len());
    for &mode in modes {
        let result = aligner.clone().with_alignment_mode(mode).align(&seq1, &seq2)?;
        report(&mut out, &seq1, &seq2, &result, args.show_matrix)?;
        results.push(result);
    }

    if let [global, local] = results.as_slice() {
        out.push_str(&format_comparison(seq1.data(), seq2.data(), global, local)?);
    }

    Ok(out)
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    let args = Args::parse();
    print!("{}", run(args)?);

    Ok(())
}
