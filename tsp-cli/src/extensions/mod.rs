//! Contains command line specific extensions of the core functionality.

pub mod generate;
pub mod problem;
pub mod session;
pub mod solve;
