use colored::Colorize;
use schoolsearch::api::{CmdMessage, MessageLevel};
use schoolsearch::error::SchoolError;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

/// Query rows go out uncolored so they stay greppable.
pub(super) fn print_rows(rows: &[String]) {
    for row in rows {
        println!("{}", row);
    }
}

/// Command errors are reported inline; the console keeps running.
pub(super) fn print_error(error: &SchoolError) {
    match error {
        SchoolError::Usage(_) => println!("{}", error.to_string().yellow()),
        _ => println!("{}", error.to_string().red()),
    }
}

pub(super) fn print_elapsed(elapsed: &str) {
    println!("{}", elapsed.dimmed());
}
