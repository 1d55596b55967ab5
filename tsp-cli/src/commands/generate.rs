#[cfg(test)]
#[path = "../../tests/unit/commands/generate_test.rs"]
mod generate_test;

use super::*;
use tsp_cli::extensions::generate::generate_problem;
use tsp_cli::extensions::problem::write_problem;

const NODES_SIZE_ARG_NAME: &str = "nodes-size";
const MIN_COST_ARG_NAME: &str = "min-cost";
const MAX_COST_ARG_NAME: &str = "max-cost";
const SEED_ARG_NAME: &str = "seed";

pub fn get_generate_app() -> Command {
    Command::new("generate")
        .about("Generates random complete graph problem for testing")
        .arg(
            Arg::new(NODES_SIZE_ARG_NAME)
                .help("Amount of nodes in generated problem")
                .short('n')
                .long(NODES_SIZE_ARG_NAME)
                .required(true),
        )
        .arg(
            Arg::new(MIN_COST_ARG_NAME)
                .help("Minimum edge cost, default is 1")
                .long(MIN_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(MAX_COST_ARG_NAME)
                .help("Maximum edge cost, default is 100")
                .long(MAX_COST_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SEED_ARG_NAME)
                .help("Specifies random seed for reproducible generation")
                .long(SEED_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for result output")
                .short('o')
                .long(OUT_RESULT_ARG_NAME)
                .required(false),
        )
}

pub fn run_generate<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let nodes_size = parse_int_value::<usize>(matches, NODES_SIZE_ARG_NAME, "nodes size")?
        .ok_or_else(|| "nodes size is required".to_string())?;
    let min_cost = parse_int_value::<u64>(matches, MIN_COST_ARG_NAME, "min cost")?.unwrap_or(1);
    let max_cost = parse_int_value::<u64>(matches, MAX_COST_ARG_NAME, "max cost")?.unwrap_or(100);
    let seed = parse_int_value::<u64>(matches, SEED_ARG_NAME, "seed")?;

    let problem = generate_problem(nodes_size, min_cost, max_cost, seed)
        .map_err(|err| format!("cannot generate problem: '{err}'"))?;

    let out_buffer = out_writer_func(create_out_file(matches)?);

    write_problem(out_buffer, &problem).map_err(|err| err.to_string())
}
