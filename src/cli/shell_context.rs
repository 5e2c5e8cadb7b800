//! Shell state: the open store, loaded preferences, and prompt plumbing.

use std::io::{self, BufRead};

use dialoguer::theme::ColorfulTheme;

use crate::cli::{io as cli_io, output};
use crate::config::{Config, ConfigManager};
use crate::core::LedgerStore;
use crate::errors::CliError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

/// Owns everything the menu loop needs between commands.
pub struct ShellContext {
    pub mode: CliMode,
    pub running: bool,
    store: LedgerStore,
    config: Config,
    theme: ColorfulTheme,
    script_input: Option<io::Lines<io::StdinLock<'static>>>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config = match ConfigManager::from_env().and_then(|manager| manager.load()) {
            Ok(config) => config,
            Err(err) => {
                output::warning(format!("Using default configuration: {err}"));
                Config::default()
            }
        };

        output::set_color_enabled(config.ui_color_enabled && mode == CliMode::Interactive);

        let store = LedgerStore::open(config.resolve_data_file());
        let script_input = match mode {
            CliMode::Interactive => None,
            CliMode::Script => Some(io::stdin().lock().lines()),
        };

        Ok(Self {
            mode,
            running: true,
            store,
            config,
            theme: ColorfulTheme::default(),
            script_input,
        })
    }

    pub fn store(&self) -> &LedgerStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut LedgerStore {
        &mut self.store
    }

    pub fn currency_symbol(&self) -> &str {
        &self.config.currency_symbol
    }

    /// Reads one trimmed input line for `prompt`.
    ///
    /// Returns `None` on end of input (script mode EOF), which callers treat
    /// as a request to exit.
    pub fn read_input(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        match self.mode {
            CliMode::Interactive => {
                let raw = cli_io::prompt_text(&self.theme, prompt, true)?;
                Ok(Some(raw.trim().to_string()))
            }
            CliMode::Script => {
                let Some(lines) = self.script_input.as_mut() else {
                    return Ok(None);
                };
                match lines.next() {
                    Some(line) => Ok(Some(line?.trim().to_string())),
                    None => Ok(None),
                }
            }
        }
    }

    /// Prompts until a strictly positive number is entered.
    ///
    /// Rejections explain themselves and re-prompt indefinitely; only end of
    /// input stops the loop early.
    pub fn prompt_amount(&mut self) -> Result<Option<f64>, CliError> {
        loop {
            let Some(raw) = self.read_input("Amount")? else {
                return Ok(None);
            };
            match raw.parse::<f64>() {
                Ok(value) if value > 0.0 => return Ok(Some(value)),
                Ok(_) => cli_io::print_warning("Amount must be greater than zero."),
                Err(_) => cli_io::print_warning("Please enter a valid number."),
            }
        }
    }
}
