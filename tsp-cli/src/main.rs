//! A command line interface to TSP engine.

mod commands;

#[cfg(test)]
#[path = "../tests/helpers/data.rs"]
mod data;

use clap::Command;
use std::process;

use crate::commands::cost::{get_cost_app, run_cost};
use crate::commands::create_write_buffer;
use crate::commands::generate::{get_generate_app, run_generate};
use crate::commands::interactive::{get_interactive_app, run_interactive};
use crate::commands::solve::{get_solve_app, run_solve};

fn main() {
    let matches = Command::new("TSP Engine")
        .version(env!("CARGO_PKG_VERSION"))
        .about("A command line interface to Traveling Salesman Problem solvers")
        .subcommand(get_solve_app())
        .subcommand(get_cost_app())
        .subcommand(get_generate_app())
        .subcommand(get_interactive_app())
        .get_matches();

    let result = match matches.subcommand() {
        Some(("solve", solve_matches)) => run_solve(solve_matches, create_write_buffer),
        Some(("cost", cost_matches)) => run_cost(cost_matches, create_write_buffer),
        Some(("generate", generate_matches)) => run_generate(generate_matches, create_write_buffer),
        Some(("interactive", interactive_matches)) => run_interactive(interactive_matches, create_write_buffer),
        Some((name, _)) => Err(format!("unknown subcommand: '{name}'")),
        None => Err("no subcommand was used, use -h to print help information".to_string()),
    };

    if let Err(err) = result {
        eprintln!("{err}");
        process::exit(1);
    }
}
