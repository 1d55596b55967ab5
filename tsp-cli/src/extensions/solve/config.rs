//! Solver configuration.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/config_test.rs"]
mod config_test;

use serde::Deserialize;
use std::io::{BufReader, Read};
use std::sync::Arc;
use tsp_core::prelude::*;

/// A solve configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Specifies solver configuration.
    pub solver: Option<SolverConfig>,
    /// Specifies telemetry configuration.
    pub telemetry: Option<TelemetryConfig>,
    /// Specifies output configuration.
    pub output: Option<OutputConfig>,
}

/// A solver configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct SolverConfig {
    /// Which solvers to run. Default is both.
    pub method: Option<MethodType>,
    /// A start node for heuristic. Default is the first graph node.
    pub start: Option<String>,
    /// How exact search treats permutations with missing edges. Default is fail.
    pub infeasible: Option<InfeasibleType>,
}

/// Specifies which solvers to run.
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum MethodType {
    /// Only nearest neighbor heuristic.
    Heuristic,
    /// Only exact search.
    Exact,
    /// Heuristic, then exact search.
    #[default]
    Both,
}

/// Specifies infeasible permutation policy.
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum InfeasibleType {
    /// Fail the whole search.
    #[default]
    Fail,
    /// Skip permutation.
    Skip,
}

/// A telemetry configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryConfig {
    /// Specifies logging configuration.
    pub logging: Option<LoggingConfig>,
}

/// A logging configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct LoggingConfig {
    /// Specifies whether logging is enabled.
    pub enabled: bool,
}

/// An output configuration.
#[derive(Clone, Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OutputConfig {
    /// Result format. Default is text.
    pub format: Option<OutputFormat>,
}

/// Specifies result format.
#[derive(Clone, Copy, Deserialize, Debug, Default, Eq, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum OutputFormat {
    /// Human readable text.
    #[default]
    Text,
    /// Json.
    Json,
}

/// Settings resolved from config and command line.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct SolveSettings {
    /// Which solvers to run.
    pub method: MethodType,
    /// A start node for heuristic.
    pub start: Option<String>,
    /// Infeasible permutation policy.
    pub policy: InfeasiblePolicy,
    /// Whether logging is enabled.
    pub is_logging: bool,
    /// Result format.
    pub format: OutputFormat,
}

impl SolveSettings {
    /// Creates settings from config, missing values are set to defaults.
    pub fn from_config(config: &Config) -> Self {
        let solver = config.solver.clone().unwrap_or_default();

        Self {
            method: solver.method.unwrap_or_default(),
            start: solver.start,
            policy: match solver.infeasible.unwrap_or_default() {
                InfeasibleType::Fail => InfeasiblePolicy::Fail,
                InfeasibleType::Skip => InfeasiblePolicy::Skip,
            },
            is_logging: config
                .telemetry
                .as_ref()
                .and_then(|telemetry| telemetry.logging.as_ref())
                .is_some_and(|logging| logging.enabled),
            format: config.output.as_ref().and_then(|output| output.format).unwrap_or_default(),
        }
    }

    /// Creates an environment with logger enabled or not.
    pub fn create_environment(&self) -> Arc<Environment> {
        Arc::new(if self.is_logging { Environment::new_with_stdout_logger() } else { Environment::default() })
    }

    /// Returns solver kinds to run in order on the given graph.
    pub fn create_solver_kinds(&self, graph: &Graph) -> GenericResult<Vec<SolverKind>> {
        let exact = SolverKind::Exact { policy: self.policy };

        match (self.method, self.start.as_ref()) {
            (MethodType::Exact, _) => Ok(vec![exact]),
            (MethodType::Heuristic, Some(start)) => Ok(vec![SolverKind::NearestNeighbor { start: start.clone() }]),
            (MethodType::Heuristic, None) => Err("heuristic method requires start node".into()),
            (MethodType::Both, start) => {
                let start = start.or_else(|| graph.nodes().first()).cloned().ok_or(TspError::EmptyGraph)?;

                Ok(vec![SolverKind::NearestNeighbor { start }, exact])
            }
        }
    }
}

/// Reads config from json.
pub fn read_config<R: Read>(reader: BufReader<R>) -> GenericResult<Config> {
    serde_json::from_reader(reader).map_err(|err| format!("cannot deserialize config: '{err}'").into())
}
