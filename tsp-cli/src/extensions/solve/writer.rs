//! Writes tours in text or json format.

#[cfg(test)]
#[path = "../../../tests/unit/extensions/solve/writer_test.rs"]
mod writer_test;

use super::config::OutputFormat;
use serde::Serialize;
use std::io::{BufWriter, Write};
use tsp_core::prelude::*;

/// A serializable representation of a tour.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TourDto {
    /// A solver method name.
    pub method: String,
    /// Visited nodes.
    pub tour: Vec<String>,
    /// Whether start node is repeated at the end.
    pub closed: bool,
    /// A total cost.
    pub cost: Cost,
    /// Search duration in seconds.
    pub elapsed_secs: f64,
}

impl From<&Tour> for TourDto {
    fn from(tour: &Tour) -> Self {
        Self {
            method: tour.method.to_string(),
            tour: tour.nodes.clone(),
            closed: tour.is_closed(),
            cost: tour.cost,
            elapsed_secs: tour.elapsed_secs(),
        }
    }
}

/// Formats tour as human readable text.
pub fn format_tour(tour: &Tour) -> String {
    let title = match tour.method {
        SolverMethod::NearestNeighbor => match tour.nodes.first() {
            Some(start) => format!("Heuristic TSP Solution (starting from {start})"),
            None => "Heuristic TSP Solution".to_string(),
        },
        SolverMethod::Exact => "Exact TSP Solution".to_string(),
    };

    format!(
        "{title}: [{}]\nTotal Cost: {}\nExecution Time: {:.6} seconds",
        tour.nodes.join(", "),
        tour.cost,
        tour.elapsed_secs()
    )
}

/// Writes tours using the given format.
pub fn write_tours<W: Write>(mut writer: BufWriter<W>, tours: &[Tour], format: OutputFormat) -> GenericResult<()> {
    match format {
        OutputFormat::Text => {
            let text = tours.iter().map(format_tour).collect::<Vec<_>>().join("\n\n");
            writeln!(writer, "{text}")?;
        }
        OutputFormat::Json => {
            let dtos = tours.iter().map(TourDto::from).collect::<Vec<_>>();
            let result = match dtos.as_slice() {
                [single] => serde_json::to_writer_pretty(&mut writer, single),
                _ => serde_json::to_writer_pretty(&mut writer, &dtos),
            };
            result.map_err(|err| format!("cannot serialize tours: '{err}'"))?;
            writeln!(writer)?;
        }
    }

    writer.flush()?;

    Ok(())
}
