pub mod check;
pub mod events;
pub mod input;
pub mod loops;
pub mod reformat;
pub mod tokens;
pub mod write;

#[cfg(test)]
mod reformat_tests;
