use crate::core::model::{Layout, Nucleotide, Stats, fmt_float};
use anyhow::Result;
use std::io::Write;
use std::path::Path;

pub fn write(
    w: &mut dyn Write,
    stats: &Stats,
    layout: Layout,
    fasta_path: &Path,
    csv_path: &Path,
) -> Result<()> {
    writeln!(w)?;
    writeln!(w, "FASTA file written to: {}", fasta_path.display())?;
    writeln!(w, "CSV file written to:   {}", csv_path.display())?;
    writeln!(w)?;
    writeln!(w, "Sequence statistics:")?;
    for nuc in Nucleotide::ALL {
        writeln!(
            w,
            "  {}: {}% ({} nt)",
            nuc.as_char(),
            fmt_float(stats.percentage(nuc)),
            stats.count(nuc)
        )?;
    }
    if layout == Layout::Extended {
        writeln!(w, "  %CG: {}", fmt_float(stats.cg_percent))?;
    }
    match stats.cg_at_ratio {
        Some(ratio) => writeln!(w, "  (C+G)/(A+T) ratio: {}", fmt_float(ratio))?,
        None => writeln!(
            w,
            "  (C+G)/(A+T) ratio cannot be computed: no A or T in the sequence."
        )?,
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::stats::calc_statistics;

    fn render(seq: &str, layout: Layout) -> String {
        let mut buf = Vec::new();
        write(
            &mut buf,
            &calc_statistics(seq),
            layout,
            Path::new("s.fasta"),
            Path::new("s_stats.csv"),
        )
        .unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn lists_every_nucleotide() {
        let text = render("AACGT", Layout::Basic);
        assert!(text.contains("FASTA file written to: s.fasta"));
        assert!(text.contains("  A: 40.0% (2 nt)"));
        assert!(text.contains("  C: 20.0% (1 nt)"));
        assert!(text.contains("  G: 20.0% (1 nt)"));
        assert!(text.contains("  T: 20.0% (1 nt)"));
        assert!(text.contains("(C+G)/(A+T) ratio: 0.667"));
        assert!(!text.contains("%CG"));
    }

    #[test]
    fn missing_ratio_notice() {
        let text = render("GCGC", Layout::Extended);
        assert!(text.contains("cannot be computed"));
        assert!(text.contains("  %CG: 100.0"));
    }
}
