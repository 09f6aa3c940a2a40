pub mod config;
pub mod error;
pub mod listing;

// School domain records served by the remote API
pub mod school;

pub use config::*;
pub use error::*;
pub use listing::*;
pub use school::*;
