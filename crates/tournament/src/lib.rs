//! Tournament Runner for reversi-lab
//!
//! This crate provides infrastructure for:
//! - Running matches between different engines
//! - Tracking Elo ratings across versions
//! - Generating reports for engine comparisons
//!
//! # Usage
//!
//! ```bash
//! # Run a match between the search engine and the greedy baseline
//! cargo run -p tournament -- match minimax greedy --games 20 --depth 4
//!
//! # Run a gauntlet (one engine vs all baselines)
//! cargo run -p tournament -- gauntlet minimax --games 10
//! ```

mod elo;
mod match_runner;
mod results;

pub use elo::*;
pub use match_runner::*;
pub use results::*;
