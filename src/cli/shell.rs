//! Interactive menu loop
//!
//! The shell owns the repository, the login session and the prompter. Each
//! menu choice runs one command; a failed command prints its error and the
//! loop carries on.

use console::style;
use tracing::{debug, warn};

use crate::cli::commands;
use crate::cli::menu::MenuChoice;
use crate::cli::prompt::Prompter;
use crate::core::entity::Choice;
use crate::core::error::{AerocodeError, Result};
use crate::core::repository::Repository;
use crate::core::session::Session;

const TITLE: &str = "=== Sistema de Produção de Aeronaves (Aerocode) ===";

pub struct Shell<P: Prompter> {
    pub(crate) repo: Repository,
    pub(crate) session: Session,
    pub(crate) io: P,
}

impl<P: Prompter> Shell<P> {
    pub fn new(repo: Repository, io: P) -> Self {
        Self {
            repo,
            session: Session::new(),
            io,
        }
    }

    pub fn repo(&self) -> &Repository {
        &self.repo
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Run the menu until the user exits or input ends
    ///
    /// Only failures to write output end the loop with an error.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.show_menu()?;

            let input = match self.io.ask("Escolha: ") {
                Ok(input) => input,
                Err(err) if err.is_input_closed() => break,
                Err(err) => return Err(err),
            };

            let Some(choice) = MenuChoice::parse(&input) else {
                self.failure("Opção inválida.")?;
                continue;
            };

            if choice == MenuChoice::Exit {
                break;
            }

            debug!(choice = choice.number(), label = choice.label(), "menu dispatch");
            match self.dispatch(choice) {
                Ok(()) => {}
                Err(err) if err.is_input_closed() => break,
                Err(err) => {
                    warn!(choice = choice.number(), error = %err, "operation failed");
                    self.failure(&err.to_string())?;
                }
            }
        }

        self.say("Saindo...")
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<()> {
        match choice {
            MenuChoice::Login => commands::auth::login(self),
            MenuChoice::RegisterEmployee => commands::auth::register_employee(self),
            MenuChoice::RegisterAircraft => commands::aircraft::register(self),
            MenuChoice::ListAircraft => commands::aircraft::list(self),
            MenuChoice::RegisterPart => commands::part::register(self),
            MenuChoice::UpdatePartStatus => commands::part::update_status(self),
            MenuChoice::RegisterStage => commands::stage::register(self),
            MenuChoice::ListStages => commands::stage::list(self),
            MenuChoice::AssignEmployee => commands::stage::assign(self),
            MenuChoice::StartStage => commands::stage::start(self),
            MenuChoice::FinishStage => commands::stage::finish(self),
            MenuChoice::RegisterTest => commands::test::register(self),
            MenuChoice::GenerateReport => commands::report::generate(self),
            MenuChoice::SaveAll => {
                self.repo.save_all()?;
                self.success("Dados salvos.")
            }
            MenuChoice::Exit => Ok(()),
        }
    }

    fn show_menu(&mut self) -> Result<()> {
        let user = match self.session.current_user() {
            Some(e) => format!("{} ({}) [{}]", e.name, e.username, e.permission_level),
            None => "Nenhum".to_string(),
        };

        self.say("")?;
        self.say(&style(TITLE).bold().to_string())?;
        self.say(&format!("Usuário atual: {}", user))?;
        for choice in MenuChoice::ALL {
            self.say(&choice.to_string())?;
        }
        Ok(())
    }

    pub(crate) fn say(&mut self, line: &str) -> Result<()> {
        self.io.say(line)
    }

    /// Ask for a line, trimmed of surrounding whitespace
    pub(crate) fn ask(&mut self, prompt: &str) -> Result<String> {
        Ok(self.io.ask(prompt)?.trim().to_string())
    }

    /// Ask for a value that may not be blank
    pub(crate) fn ask_required(&mut self, prompt: &str, field: &str) -> Result<String> {
        let value = self.ask(prompt)?;
        if value.is_empty() {
            return Err(AerocodeError::invalid_input(format!(
                "{} não pode ser vazio",
                field
            )));
        }
        Ok(value)
    }

    /// Ask for a password; the answer is taken verbatim
    pub(crate) fn ask_secret(&mut self, prompt: &str) -> Result<String> {
        self.io.ask_secret(prompt)
    }

    /// Offer the variants of `C` as a numbered list
    pub(crate) fn choose<C: Choice>(&mut self, label: &str) -> Result<Option<C>> {
        let answer = self.ask(&format!("{} ({}): ", label, C::menu_line()))?;
        Ok(C::from_choice(&answer))
    }

    pub(crate) fn heading(&mut self, title: &str) -> Result<()> {
        self.say(&format!("\n--- {} ---", style(title).cyan()))
    }

    pub(crate) fn success(&mut self, message: &str) -> Result<()> {
        self.say(&format!("{} {}", style("✅").green(), message))
    }

    pub(crate) fn notice(&mut self, message: &str) -> Result<()> {
        self.say(&format!("{} {}", style("ℹ").yellow(), message))
    }

    fn failure(&mut self, message: &str) -> Result<()> {
        self.say(&format!("{} {}", style("❌").red(), message))
    }
}
