pub mod interpret;
pub mod lexicon;
pub mod matcher;

#[cfg(test)]
mod interpreter_tests;

pub use interpret::*;
pub use lexicon::*;
