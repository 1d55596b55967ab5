#[cfg(test)]
#[path = "../../tests/unit/commands/interactive_test.rs"]
mod interactive_test;

use super::*;
use std::io::{BufRead, stdin};
use std::sync::Arc;
use tsp_cli::core::prelude::{Environment, InfeasiblePolicy};
use tsp_cli::extensions::session::{Session, run_session};

const SCRIPT_ARG_NAME: &str = "script";

pub fn get_interactive_app() -> Command {
    Command::new("interactive")
        .about("Starts a session which reads commands line by line, type 'help' to see them")
        .arg(
            Arg::new(SCRIPT_ARG_NAME)
                .help("Specifies path to a file with commands to run instead of stdin")
                .long(SCRIPT_ARG_NAME)
                .required(false),
        )
        .arg(
            Arg::new(SKIP_INFEASIBLE_ARG_NAME)
                .help("Skips permutations with missing edges in exact search instead of failing")
                .long(SKIP_INFEASIBLE_ARG_NAME)
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new(OUT_RESULT_ARG_NAME)
                .help("Specifies path to the file for session output")
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

pub fn run_interactive<F>(matches: &ArgMatches, out_writer_func: F) -> Result<(), String>
where
    F: Fn(Option<File>) -> BufWriter<Box<dyn Write>>,
{
    let environment = if matches.get_flag(LOG_ARG_NAME) {
        Environment::new_with_stdout_logger()
    } else {
        Environment::default()
    };
    let policy =
        if matches.get_flag(SKIP_INFEASIBLE_ARG_NAME) { InfeasiblePolicy::Skip } else { InfeasiblePolicy::Fail };

    let session = Session::new(Arc::new(environment), policy);

    let reader: Box<dyn BufRead> = match matches.get_one::<String>(SCRIPT_ARG_NAME) {
        Some(path) => Box::new(BufReader::new(open_file(path, "script")?)),
        None => Box::new(stdin().lock()),
    };

    let out_buffer = out_writer_func(create_out_file(matches)?);

    run_session(session, reader, out_buffer).map_err(|err| format!("session failed: {err}"))
}
