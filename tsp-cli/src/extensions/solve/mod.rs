//! Contains logic to configure solvers and write their results.

pub mod config;
pub mod writer;
