//! CLI module - argument parsing, prompts and the interactive menu

pub mod args;
pub mod commands;
pub mod helpers;
pub mod menu;
pub mod prompt;
pub mod shell;

pub use args::{Cli, GlobalOpts};
pub use prompt::{LinePrompter, Prompter, TermPrompter};
pub use shell::Shell;
