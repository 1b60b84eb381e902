pub mod badge;
pub mod cli;
pub mod error;
pub mod format;
pub mod generate;
pub mod lcov;
pub mod model;
pub mod output;
pub mod threshold;
