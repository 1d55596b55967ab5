#[cfg(test)]
#[path = "../../tests/unit/commands/cost_test.rs"]
mod cost_test;

use super::*;
use tsp_cli::core::prelude::tour_cost;

const TOUR_ARG_NAME: &str = "tour";

pub fn get_cost_app() -> Command {
    add_problem_args(Command::new("cost").about("Evaluates the cost of a closed tour"))
        .arg(
            Arg::new(TOUR_ARG_NAME)
                .help("Specifies whitespace separated nodes of the tour, closing edge is added implicitly")
                .short('t')
                .long(TOUR_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_cost<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let problem = read_problem_from_args(matches)?;
    let graph = problem.read_graph().map_err(|err| format!("cannot build graph: {err}"))?;

    let tour = matches.get_one::<String>(TOUR_ARG_NAME).map(String::as_str).unwrap_or_default();
    let nodes = tour.split_whitespace().collect::<Vec<_>>();

    let cost = tour_cost(&graph, &nodes).map_err(|err| format!("cannot evaluate tour: {err}"))?;

    let mut out_buffer = out_writer_func(create_out_file(matches)?);

    writeln!(out_buffer, "{cost}")
        .and_then(|_| out_buffer.flush())
        .map_err(|err| format!("cannot write result: '{err}'"))
}
