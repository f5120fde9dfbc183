pub mod cli;
pub mod config;
pub mod download;
pub mod error;
pub mod manifest;
pub mod media;
pub mod verification;

#[cfg(test)]
mod test_utils;

pub use config::Config;
pub use error::QuizDumpError;
