//! Line input and output for the interactive shell
//!
//! [`LinePrompter`] works over any reader/writer pair and is used whenever
//! stdin is not a terminal (pipes, scripts, tests). [`TermPrompter`] uses
//! dialoguer for a proper terminal experience.

use dialoguer::{theme::ColorfulTheme, Input, Password};
use std::io::{self, BufRead, Write};

use crate::core::error::{AerocodeError, Result};

/// Source of user answers and sink for shell output
pub trait Prompter {
    /// Ask a question and return the answer without the line terminator
    fn ask(&mut self, prompt: &str) -> Result<String>;

    /// Ask for a value that should not be echoed
    fn ask_secret(&mut self, prompt: &str) -> Result<String> {
        self.ask(prompt)
    }

    /// Print one line of output
    fn say(&mut self, line: &str) -> Result<()>;
}

/// Plain line-based prompter
pub struct LinePrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        &self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }
}

impl LinePrompter<io::StdinLock<'static>, io::Stdout> {
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input ends mid-prompt
            writeln!(self.output)?;
            return Err(AerocodeError::InputClosed);
        }

        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(answer)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }
}

/// Terminal prompter backed by dialoguer
pub struct TermPrompter {
    theme: ColorfulTheme,
}

impl TermPrompter {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }

    /// Check if both stdin and stdout are attached to a terminal
    pub fn is_available() -> bool {
        use std::io::IsTerminal;
        io::stdin().is_terminal() && console::user_attended()
    }
}

impl Default for TermPrompter {
    fn default() -> Self {
        Self::new()
    }
}

/// dialoguer adds its own separator after the prompt
fn bare(prompt: &str) -> &str {
    prompt.trim_end().trim_end_matches(':')
}

/// Ctrl-C and Ctrl-D at a terminal prompt end the session like EOF on a pipe
fn from_dialoguer(err: dialoguer::Error) -> AerocodeError {
    match err {
        dialoguer::Error::IO(err) => match err.kind() {
            io::ErrorKind::UnexpectedEof | io::ErrorKind::Interrupted => {
                AerocodeError::InputClosed
            }
            _ => AerocodeError::Io(err),
        },
    }
}

impl Prompter for TermPrompter {
    fn ask(&mut self, prompt: &str) -> Result<String> {
        Input::<String>::with_theme(&self.theme)
            .with_prompt(bare(prompt))
            .allow_empty(true)
            .interact_text()
            .map_err(from_dialoguer)
    }

    fn ask_secret(&mut self, prompt: &str) -> Result<String> {
        Password::with_theme(&self.theme)
            .with_prompt(bare(prompt))
            .allow_empty_password(true)
            .interact()
            .map_err(from_dialoguer)
    }

    fn say(&mut self, line: &str) -> Result<()> {
        println!("{}", line);
        Ok(())
    }
}
