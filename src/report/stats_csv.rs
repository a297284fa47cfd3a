use crate::core::model::{Layout, Nucleotide, Stats, fmt_float};
use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::path::Path;

pub const NA: &str = "NA";

const COUNT_COLUMNS: [&str; 6] = ["ID", "Length", "A", "C", "G", "T"];
const PERCENT_COLUMNS: [&str; 4] = ["%A", "%C", "%G", "%T"];
const CG_PERCENT_COLUMN: &str = "%CG";
const RATIO_COLUMN: &str = "(C+G)/(A+T)";

pub fn header(layout: Layout) -> Vec<&'static str> {
    let mut cols = COUNT_COLUMNS.to_vec();
    if layout == Layout::Extended {
        cols.push(CG_PERCENT_COLUMN);
    }
    cols.extend_from_slice(&PERCENT_COLUMNS);
    cols.push(RATIO_COLUMN);
    cols
}

pub fn row(stats: &Stats, seq_id: &str, layout: Layout) -> Vec<String> {
    let mut fields = Vec::with_capacity(12);
    fields.push(seq_id.to_string());
    fields.push(stats.length.to_string());
    for nuc in Nucleotide::ALL {
        fields.push(stats.count(nuc).to_string());
    }
    if layout == Layout::Extended {
        fields.push(fmt_float(stats.cg_percent));
    }
    for nuc in Nucleotide::ALL {
        fields.push(fmt_float(stats.percentage(nuc)));
    }
    fields.push(match stats.cg_at_ratio {
        Some(r) => fmt_float(r),
        None => NA.to_string(),
    });
    fields
}

/// Appends one row for `seq_id`, preceded by the header when `path` is new.
pub fn append(path: &Path, stats: &Stats, seq_id: &str, layout: Layout) -> Result<()> {
    let is_new = !path.exists();
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open {}", path.display()))?;
    let mut w = csv::Writer::from_writer(file);

    if is_new {
        w.write_record(header(layout))
            .with_context(|| format!("failed to write header to {}", path.display()))?;
    }
    w.write_record(row(stats, seq_id, layout))
        .with_context(|| format!("failed to append row to {}", path.display()))?;
    w.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}
