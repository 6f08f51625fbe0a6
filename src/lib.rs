//! Random filler strings drawn from alphabetic, numeric or alphanumeric pools.
//!
//! Nothing here is suitable for secrets or unique identifiers.

pub mod cli;
pub mod config;
mod error;
pub mod pool;
pub mod rhai;
pub mod sampler;

pub use error::Error;
pub use pool::{CaseMode, Kind};
pub use sampler::{
    random_alpha, random_alpha_numeric, random_numeric_string, IndexSource, StringSampler,
};
