//! Plain-text rendering of matrices and alignments.

use crate::{AlignerError, AlignmentResult, AlignmentStats, ScoringMatrix, GAP_SYMBOL};

const RULE_WIDTH: usize = 60;
const COMPARISON_WIDTH: usize = 80;

fn banner(out: &mut String, title: &str, width: usize) {
    let rule = "=".repeat(width);
    out.push_str(&format!("\n{rule}\n{title:^width$}\n{rule}\n\n"));
}

/// `|` for a match, ` ` for a gap column, `.` for a mismatch.
pub fn match_line(aligned1: &[char], aligned2: &[char]) -> Result<String, AlignerError> {
    if aligned1.len() != aligned2.len() {
        return Err(AlignerError::LengthMismatch {
            left: aligned1.len(),
            right: aligned2.len(),
        });
    }

    Ok(aligned1
        .iter()
        .zip(aligned2)
        .map(|(&a, &b)| {
            if a == b {
                '|'
            } else if a == GAP_SYMBOL || b == GAP_SYMBOL {
                ' '
            } else {
                '.'
            }
        })
        .collect())
}

/// Matrix as a table with `-` for the empty prefix on both axes.
pub fn format_matrix(matrix: &ScoringMatrix, seq1: &[char], seq2: &[char], title: &str) -> String {
    let mut out = String::new();
    banner(&mut out, title, RULE_WIDTH);

    out.push_str("      ");
    out.push_str("  -  ");
    for c in seq2 {
        out.push_str(&format!("  {c}  "));
    }
    out.push('\n');

    for i in 0..matrix.rows() {
        let label = if i == 0 { GAP_SYMBOL } else { seq1[i - 1] };
        out.push_str(&format!("  {label}  "));
        for value in matrix.row(i) {
            out.push_str(&format!("{value:4} "));
        }
        out.push('\n');
    }

    out
}

pub fn format_alignment(
    seq1: &[char],
    seq2: &[char],
    result: &AlignmentResult,
    title: &str,
) -> Result<String, AlignerError> {
    let stats = result.stats()?;
    let line = match_line(&result.aligned_seq1, &result.aligned_seq2)?;
    let (aligned1, aligned2) = result.aligned_strings();

    let mut out = String::new();
    banner(&mut out, title, RULE_WIDTH);

    write_sequences(&mut out, seq1, seq2);
    out.push_str(&format!("Alignment 1: {aligned1}\n"));
    out.push_str(&format!("             {line}\n"));
    out.push_str(&format!("Alignment 2: {aligned2}\n\n"));
    out.push_str(&format!("Score: {}\n", result.score));
    write_stats(&mut out, &stats);
    out.push_str(&format!("{}\n", "=".repeat(RULE_WIDTH)));

    Ok(out)
}

fn write_sequences(out: &mut String, seq1: &[char], seq2: &[char]) {
    let seq1: String = seq1.iter().collect();
    let seq2: String = seq2.iter().collect();
    out.push_str(&format!("Sequence 1: {seq1}\nSequence 2: {seq2}\n\n"));
}

fn write_stats(out: &mut String, stats: &AlignmentStats) {
    out.push_str("\nStatistics:\n");
    out.push_str(&format!("  - Matches:    {}\n", stats.matches));
    out.push_str(&format!("  - Mismatches: {}\n", stats.mismatches));
    out.push_str(&format!("  - Gaps:       {}\n", stats.gaps));
    out.push_str(&format!("  - Identity:   {:.1}%\n", stats.identity));
}

fn side_by_side(out: &mut String, left: &str, right: &str) {
    out.push_str(&format!("{left:^40} | {right:^40}\n"));
}

/// Global and local results side by side.
pub fn format_comparison(
    seq1: &[char],
    seq2: &[char],
    global: &AlignmentResult,
    local: &AlignmentResult,
) -> Result<String, AlignerError> {
    let global_stats = global.stats()?;
    let local_stats = local.stats()?;
    let (g1, g2) = global.aligned_strings();
    let (l1, l2) = local.aligned_strings();

    let mut out = String::new();
    banner(
        &mut out,
        "COMPARISON: NEEDLEMAN-WUNSCH vs SMITH-WATERMAN",
        COMPARISON_WIDTH,
    );

    write_sequences(&mut out, seq1, seq2);

    let divider = "-".repeat(40);
    side_by_side(&mut out, "NEEDLEMAN-WUNSCH (Global)", "SMITH-WATERMAN (Local)");
    side_by_side(&mut out, &divider, &divider);
    side_by_side(&mut out, &g1, &l1);
    side_by_side(&mut out, &g2, &l2);
    side_by_side(
        &mut out,
        &format!("Score: {}", global.score),
        &format!("Score: {}", local.score),
    );
    side_by_side(
        &mut out,
        &format!("Length: {}", global.len()),
        &format!("Length: {}", local.len()),
    );
    side_by_side(
        &mut out,
        &format!("Identity: {:.1}%", global_stats.identity),
        &format!("Identity: {:.1}%", local_stats.identity),
    );

    out.push_str(&format!("{}\n", "=".repeat(COMPARISON_WIDTH)));
    Ok(out)
}
