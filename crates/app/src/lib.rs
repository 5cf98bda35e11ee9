pub mod cli;
pub mod input;
pub mod probe;
pub mod writer;
