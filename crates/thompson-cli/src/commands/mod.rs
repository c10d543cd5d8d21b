pub mod check;
pub mod common;
pub mod dot;
pub mod dump;
pub mod matching;
pub mod shell;
pub mod trace;

#[cfg(test)]
mod dot_tests;
#[cfg(test)]
mod shell_tests;
