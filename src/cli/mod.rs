pub mod args;
pub mod input;
pub mod run;
