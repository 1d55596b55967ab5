//! Paths to test data files, relative to the package root.

#![allow(dead_code)]

pub const TRIANGLE_PROBLEM_PATH: &str = "tests/data/triangle.problem.json";
pub const GREEDY_PROBLEM_PATH: &str = "tests/data/greedy.problem.json";
pub const RING_PROBLEM_PATH: &str = "tests/data/ring.problem.json";
pub const INVALID_PROBLEM_PATH: &str = "tests/data/invalid.problem.json";
pub const FULL_CONFIG_PATH: &str = "tests/data/config.full.json";
pub const SESSION_COMMANDS_PATH: &str = "tests/data/session.commands.txt";
