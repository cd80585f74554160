//! # Console Layer
//!
//! The interactive console is **one possible UI client** for the roster
//! library. It is the only place that reads stdin, writes stdout, installs
//! the log subscriber and decides exit codes.
//!
//! Each line is tokenized into a [`ConsoleCommand`], dispatched to
//! [`SchoolApi`] and the resulting `CmdResult` printed, followed by the time
//! the command took. Errors from a single command are printed and the loop
//! carries on; only startup failures (bad config, malformed roster) end the
//! process.

use super::console::ConsoleCommand;
use super::print::{print_elapsed, print_error, print_messages, print_rows};
use super::setup::Cli;
use super::timing::{format_elapsed, timed};
use clap::Parser;
use schoolsearch::api::{CmdResult, SchoolApi};
use schoolsearch::error::Result;
use schoolsearch::init::initialize;
use schoolsearch::store::DataStore;
use std::io::{self, BufRead, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

const BANNER: &str = "Schoolsearch system ready. Type a command (S, SB, T, C, CT, B, G, GT, D, U, A, COUNTS, SAVE JSON, SAVE XML, Q).";
const PROMPT: &str = ">>> ";
const FAREWELL: &str = "Quit bye!";

pub fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut ctx = initialize(&cli.init_options())?;
    debug!(
        students = ctx.api.roster().students().len(),
        teachers = ctx.api.roster().teachers().len(),
        "console starting"
    );
    print_messages(&ctx.api.load_messages());
    println!("{}", BANNER);

    let stdin = io::stdin();
    console_loop(&mut ctx.api, stdin.lock())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        "schoolsearch=debug"
    } else {
        "schoolsearch=warn"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn console_loop<S: DataStore, R: BufRead>(api: &mut SchoolApi<S>, mut input: R) -> Result<()> {
    let mut line = String::new();
    loop {
        print!("{}", PROMPT);
        io::stdout().flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            println!();
            println!("{}", FAREWELL);
            return Ok(());
        }

        match ConsoleCommand::parse(&line) {
            Ok(None) => continue,
            Ok(Some(ConsoleCommand::Quit)) => {
                println!("{}", FAREWELL);
                return Ok(());
            }
            Ok(Some(command)) => execute(api, command),
            Err(e) => print_error(&e),
        }
    }
}

fn execute<S: DataStore>(api: &mut SchoolApi<S>, command: ConsoleCommand) {
    let label = command.label();
    let (outcome, elapsed_ms) = timed(label, || dispatch(api, command));
    match outcome {
        Ok(result) => {
            print_rows(&result.rows);
            print_messages(&result.messages);
        }
        Err(e) => print_error(&e),
    }
    print_elapsed(&format_elapsed(elapsed_ms));
}

fn dispatch<S: DataStore>(api: &mut SchoolApi<S>, command: ConsoleCommand) -> Result<CmdResult> {
    match command {
        ConsoleCommand::Query(query) => api.query(&query),
        ConsoleCommand::Delete(last_name) => api.delete_students(&last_name),
        ConsoleCommand::Update {
            last_name,
            field,
            value,
        } => api.update_students(&last_name, &field, &value),
        ConsoleCommand::Add(new) => api.add_student(new),
        ConsoleCommand::Counts => api.counts(),
        ConsoleCommand::Export(format) => api.export(format),
        ConsoleCommand::Quit => Ok(CmdResult::default()),
    }
}
