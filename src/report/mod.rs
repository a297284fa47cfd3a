pub mod fasta;
pub mod stats_csv;
pub mod summary_txt;
