use clap::{Arg, ArgAction, ArgMatches, Command};

pub mod cost;
pub mod generate;
pub mod interactive;
pub mod solve;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write, stdout};
use std::str::FromStr;
use tsp_cli::extensions::problem::{ProblemDefinition, read_problem};

pub(crate) const PROBLEM_ARG_NAME: &str = "problem";
pub(crate) const NODES_ARG_NAME: &str = "nodes";
pub(crate) const EDGES_ARG_NAME: &str = "edges";
pub(crate) const COSTS_ARG_NAME: &str = "costs";
pub(crate) const OUT_RESULT_ARG_NAME: &str = "out-result";
pub(crate) const SKIP_INFEASIBLE_ARG_NAME: &str = "skip-infeasible";
pub(crate) const LOG_ARG_NAME: &str = "log";

pub(crate) fn create_write_buffer(out_file: Option<File>) -> BufWriter<Box<dyn Write>> {
    if let Some(out_file) = out_file {
        BufWriter::new(Box::new(out_file))
    } else {
        BufWriter::new(Box::new(stdout()))
    }
}

fn open_file(path: &str, description: &str) -> Result<File, String> {
    File::open(path).map_err(|err| format!("cannot open {description} file '{path}': '{err}'"))
}

fn create_file(path: &str, description: &str) -> Result<File, String> {
    File::create(path).map_err(|err| format!("cannot create {description} file '{path}': '{err}'"))
}

fn parse_int_value<T: FromStr<Err = std::num::ParseIntError>>(
    matches: &ArgMatches,
    arg_name: &str,
    arg_desc: &str,
) -> Result<Option<T>, String> {
    matches
        .get_one::<String>(arg_name)
        .map(|arg| {
            arg.parse::<T>().map_err(|err| format!("cannot get integer value, error: '{err}': '{arg_desc}'")).map(Some)
        })
        .unwrap_or(Ok(None))
}

fn create_out_file(matches: &ArgMatches) -> Result<Option<File>, String> {
    matches.get_one::<String>(OUT_RESULT_ARG_NAME).map(|path| create_file(path, "out result")).transpose()
}

fn add_problem_args(command: Command) -> Command {
    command
        .arg(
            Arg::new(PROBLEM_ARG_NAME)
                .help("Sets path to json file with problem definition")
                .short('p')
                .long(PROBLEM_ARG_NAME)
                .required(false)
                .conflicts_with_all([NODES_ARG_NAME, EDGES_ARG_NAME, COSTS_ARG_NAME]),
        )
        .arg(
            Arg::new(NODES_ARG_NAME)
                .help("Specifies whitespace separated node labels")
                .long(NODES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(EDGES_ARG_NAME)
                .help("Specifies whitespace separated edge endpoints taken in pairs")
                .long(EDGES_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(COSTS_ARG_NAME)
                .help("Specifies whitespace separated edge costs")
                .long(COSTS_ARG_NAME)
                .required(false),
        )
}

fn read_problem_from_args(matches: &ArgMatches) -> Result<ProblemDefinition, String> {
    if let Some(path) = matches.get_one::<String>(PROBLEM_ARG_NAME) {
        return read_problem(BufReader::new(open_file(path, "problem")?)).map_err(|err| err.to_string());
    }

    let get_value = |arg_name: &str| matches.get_one::<String>(arg_name).map(String::as_str);

    match (get_value(NODES_ARG_NAME), get_value(EDGES_ARG_NAME), get_value(COSTS_ARG_NAME)) {
        (nodes, Some(edges), Some(costs)) => Ok(ProblemDefinition::new(nodes.unwrap_or_default(), edges, costs)),
        _ => Err("either problem file or edges and costs should be specified".to_string()),
    }
}
