use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

pub const DEFAULT_LINE_WIDTH: usize = 80;

/// Overwrites `path` with a single FASTA record. `width == 0` keeps the
/// sequence on one line.
pub fn write(path: &Path, header: &str, sequence: &str, width: usize) -> Result<()> {
    let file =
        File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    let mut w = BufWriter::new(file);
    write_record(&mut w, header, sequence, width)?;
    w.flush()
        .with_context(|| format!("failed to flush {}", path.display()))?;
    Ok(())
}

pub fn write_record(w: &mut dyn Write, header: &str, sequence: &str, width: usize) -> Result<()> {
    writeln!(w, ">{}", header)?;
    for line in wrap(sequence, width) {
        writeln!(w, "{}", line)?;
    }
    Ok(())
}

/// Splits on character boundaries into chunks of `width` characters.
pub fn wrap(sequence: &str, width: usize) -> Vec<&str> {
    if width == 0 {
        return vec![sequence];
    }
    let mut lines = Vec::with_capacity(sequence.len() / width + 1);
    let mut start = 0usize;
    let mut n = 0usize;
    for (pos, _) in sequence.char_indices() {
        if n == width {
            lines.push(&sequence[start..pos]);
            start = pos;
            n = 0;
        }
        n += 1;
    }
    if n > 0 {
        lines.push(&sequence[start..]);
    }
    lines
}
