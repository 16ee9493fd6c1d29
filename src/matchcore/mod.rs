pub mod token;
pub mod doc;
pub mod vector;
pub mod ranking;
pub mod utils;
pub mod config;
pub mod error;
pub mod engine;

pub type TermId = u32;

pub const CFG_NAME: &str = ".rmatch.yml";
pub const JOB_ID: &str = "job";
