use crate::core::model::{Nucleotide, Stats, round_to};

pub fn count_bases(seq: &[u8]) -> [u64; 4] {
    let mut counts = [0u64; 4];
    for &b in seq {
        if let Some(nuc) = Nucleotide::from_byte(b) {
            counts[nuc.index()] += 1;
        }
    }
    counts
}

/// Nucleotide composition of `sequence`.
///
/// `length` is the full character count, so symbols outside `ACGT` lower the
/// percentages without being tallied. `cg_percent` is derived from the
/// rounded C and G percentages and rounded again.
pub fn calc_statistics(sequence: &str) -> Stats {
    let length = sequence.chars().count();
    let counts = count_bases(sequence.as_bytes());

    let mut percentages = [0.0f64; 4];
    if length > 0 {
        for nuc in Nucleotide::ALL {
            let pct = counts[nuc.index()] as f64 / length as f64 * 100.0;
            percentages[nuc.index()] = round_to(pct, 2);
        }
    }

    let cg_percent = round_to(
        percentages[Nucleotide::C.index()] + percentages[Nucleotide::G.index()],
        2,
    );

    let at_sum = counts[Nucleotide::A.index()] + counts[Nucleotide::T.index()];
    let cg_sum = counts[Nucleotide::C.index()] + counts[Nucleotide::G.index()];
    let cg_at_ratio = if at_sum == 0 {
        None
    } else {
        Some(round_to(cg_sum as f64 / at_sum as f64, 3))
    };

    Stats {
        length,
        counts,
        percentages,
        cg_at_ratio,
        cg_percent,
    }
}
