#[cfg(test)]
#[path = "../../tests/unit/commands/solve_test.rs"]
mod solve_test;

use super::*;
use tsp_cli::core::prelude::*;
use tsp_cli::extensions::solve::config::*;
use tsp_cli::extensions::solve::writer::write_tours;

const METHOD_ARG_NAME: &str = "method";
const START_ARG_NAME: &str = "start";
const CONFIG_ARG_NAME: &str = "config";
const FORMAT_ARG_NAME: &str = "format";

pub fn get_solve_app() -> Command {
    add_problem_args(Command::new("solve").about("Solves traveling salesman problem using heuristic or exact search"))
        .arg(
            Arg::new(METHOD_ARG_NAME)
                .help("Specifies which solvers to run")
                .short('m')
                .long(METHOD_ARG_NAME)
                .required(false)
                .value_parser(["heuristic", "exact", "both"]),
        )
        .arg(
            Arg::new(START_ARG_NAME)
                .help("Specifies start node for heuristic, default is the first graph node")
                .short('s')
                .long(START_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SKIP_INFEASIBLE_ARG_NAME)
                .help("Skips permutations with missing edges in exact search instead of failing")
                .long(SKIP_INFEASIBLE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(CONFIG_ARG_NAME)
                .help("Specifies path to json config file")
                .short('c')
                .long(CONFIG_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(FORMAT_ARG_NAME)
                .help("Specifies result format")
                .short('f')
                .long(FORMAT_ARG_NAME)
                .required(false)
                .value_parser(["text", "json"]),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(LOG_ARG_NAME)
                .help("Specifies whether solver progress should be logged to stdout")
                .short('l')
                .long(LOG_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
}

pub fn run_solve<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let problem = read_problem_from_args(matches)?;
    let settings = get_settings(matches)?;

    let graph = problem.read_graph().map_err(|err| format!("cannot build graph: {err}"))?;
    let kinds = settings.create_solver_kinds(&graph).map_err(|err| format!("cannot create solvers: {err}"))?;

    let solver = Solver::new(settings.create_environment());
    let tours = kinds
        .iter()
        .map(|kind| solver.solve(&graph, kind))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|err| format!("cannot solve problem: {err}"))?;

    let out_buffer = out_writer_func(create_out_file(matches)?);

    write_tours(out_buffer, &tours, settings.format).map_err(|err| format!("cannot write result: {err}"))
}

fn get_settings(matches: &ArgMatches) -> Result<SolveSettings, String> {
    let config = matches
        .get_one::<String>(CONFIG_ARG_NAME)
        .map(|path| read_config(BufReader::new(open_file(path, "config")?)).map_err(|err| err.to_string()))
        .transpose()?
        .unwrap_or_default();

    let mut settings = SolveSettings::from_config(&config);

    if let Some(method) = matches.get_one::<String>(METHOD_ARG_NAME) {
        settings.method = match method.as_str() {
            "heuristic" => MethodType::Heuristic,
            "exact" => MethodType::Exact,
            "both" => MethodType::Both,
            _ => return Err(format!("unknown method: '{method}'")),
        };
    }

    if let Some(start) = matches.get_one::<String>(START_ARG_NAME) {
        settings.start = Some(start.clone());
    }

    if matches.get_flag(SKIP_INFEASIBLE_ARG_NAME) {
        settings.policy = InfeasiblePolicy::Skip;
    }

    if let Some(format) = matches.get_one::<String>(FORMAT_ARG_NAME) {
        settings.format = match format.as_str() {
            "text" => OutputFormat::Text,
            "json" => OutputFormat::Json,
            _ => return Err(format!("unknown format: '{format}'")),
        };
    }

    if matches.get_flag(LOG_ARG_NAME) {
        settings.is_logging = true;
    }

    Ok(settings)
}
