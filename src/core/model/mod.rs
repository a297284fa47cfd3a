#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Nucleotide {
    A,
    C,
    G,
    T,
}

impl Nucleotide {
    pub const ALL: [Nucleotide; 4] = [Nucleotide::A, Nucleotide::C, Nucleotide::G, Nucleotide::T];

    pub fn as_char(self) -> char {
        match self {
            Nucleotide::A => 'A',
            Nucleotide::C => 'C',
            Nucleotide::G => 'G',
            Nucleotide::T => 'T',
        }
    }

    pub fn from_byte(b: u8) -> Option<Self> {
        match b {
            b'A' => Some(Nucleotide::A),
            b'C' => Some(Nucleotide::C),
            b'G' => Some(Nucleotide::G),
            b'T' => Some(Nucleotide::T),
            _ => None,
        }
    }

    pub fn index(self) -> usize {
        self as usize
    }
}

/// Symbols the generator samples from, in column order.
pub const DNA_ALPHABET: [char; 4] = ['A', 'C', 'G', 'T'];

/// Signature embedded by the basic layout when none is given.
pub const DEFAULT_SIGNATURE: &str = "Maksymilian";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Layout {
    /// Counts, percentages and the CG/AT ratio.
    Basic,
    /// Basic columns plus the CG percent between counts and percentages.
    Extended,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Stats {
    pub length: usize,
    pub counts: [u64; 4],
    pub percentages: [f64; 4],
    pub cg_at_ratio: Option<f64>,
    pub cg_percent: f64,
}

impl Stats {
    pub fn count(&self, nuc: Nucleotide) -> u64 {
        self.counts[nuc.index()]
    }

    pub fn percentage(&self, nuc: Nucleotide) -> f64 {
        self.percentages[nuc.index()]
    }
}

/// Rounds half-to-even on the exact binary value, matching how the float
/// formatter renders a fixed number of decimals.
pub fn round_to(value: f64, decimals: usize) -> f64 {
    format!("{:.*}", decimals, value)
        .parse()
        .unwrap_or(value)
}

/// Shortest round-trip rendering that keeps a fractional part (`100.0`).
pub fn fmt_float(value: f64) -> String {
    format!("{:?}", value)
}
