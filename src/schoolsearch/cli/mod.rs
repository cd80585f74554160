mod commands;
mod console;
mod print;
mod setup;
mod timing;

pub use commands::run;
