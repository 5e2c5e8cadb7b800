//! The interactive menu loop and its command handlers.

use crate::cli::{formatters, io as cli_io, output};
use crate::domain::TransactionKind;
use crate::errors::CliError;

pub use crate::cli::shell_context::{CliMode, ShellContext};

const SCRIPT_MODE_ENV: &str = "LEDGER_CORE_CLI_SCRIPT";

const MENU_ITEMS: [(&str, &str); 6] = [
    ("1", "Add income"),
    ("2", "Add expense"),
    ("3", "List all transactions"),
    ("4", "Balance summary"),
    ("5", "Clear all data"),
    ("6", "Exit"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MenuChoice {
    AddIncome,
    AddExpense,
    List,
    Summary,
    Clear,
    Exit,
}

impl MenuChoice {
    fn parse(raw: &str) -> Option<Self> {
        match raw {
            "1" => Some(MenuChoice::AddIncome),
            "2" => Some(MenuChoice::AddExpense),
            "3" => Some(MenuChoice::List),
            "4" => Some(MenuChoice::Summary),
            "5" => Some(MenuChoice::Clear),
            "6" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    output::section("Personal Finance Ledger");
    cli_io::print_info(format!(
        "Recording to {}.",
        context.store().path().display()
    ));

    loop {
        if !context.running {
            break;
        }
        show_menu();
        let Some(choice) = context.read_input("Choose an option (1-6)")? else {
            cli_io::print_info("Exiting shell.");
            break;
        };
        if choice.is_empty() {
            continue;
        }
        match dispatch(&mut context, &choice)? {
            LoopControl::Continue => {}
            LoopControl::Exit => {
                context.running = false;
            }
        }
    }

    Ok(())
}

fn show_menu() {
    output::section("Main Menu");
    for (key, label) in MENU_ITEMS {
        output::plain(format!("  {key}. {label}"));
    }
}

fn dispatch(context: &mut ShellContext, choice: &str) -> Result<LoopControl, CliError> {
    match MenuChoice::parse(choice) {
        Some(MenuChoice::AddIncome) => handle_add(context, TransactionKind::Income),
        Some(MenuChoice::AddExpense) => handle_add(context, TransactionKind::Expense),
        Some(MenuChoice::List) => handle_list(context),
        Some(MenuChoice::Summary) => handle_summary(context),
        Some(MenuChoice::Clear) => handle_clear(context),
        Some(MenuChoice::Exit) => {
            cli_io::print_info("Goodbye. Your ledger is already saved.");
            Ok(LoopControl::Exit)
        }
        None => {
            cli_io::print_warning(format!("Unrecognized option `{choice}`. Choose 1-6."));
            Ok(LoopControl::Continue)
        }
    }
}

fn handle_add(context: &mut ShellContext, kind: TransactionKind) -> Result<LoopControl, CliError> {
    output::section(match kind {
        TransactionKind::Income => "Add Income",
        TransactionKind::Expense => "Add Expense",
    });

    let Some(amount) = context.prompt_amount()? else {
        return Ok(LoopControl::Exit);
    };
    let Some(description) = context.read_input("Description")? else {
        return Ok(LoopControl::Exit);
    };

    match kind {
        TransactionKind::Income => context.store_mut().add_income(amount, description)?,
        TransactionKind::Expense => context.store_mut().add_expense(amount, description)?,
    }

    let formatted = formatters::format_amount(amount, context.currency_symbol());
    cli_io::print_success(format!("{kind} of {formatted} recorded."));
    Ok(LoopControl::Continue)
}

fn handle_list(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    if context.store().is_empty() {
        cli_io::print_info("No transactions recorded.");
        return Ok(LoopControl::Continue);
    }

    output::section("All Transactions");
    output::plain(formatters::table_header());
    output::plain("-".repeat(60));
    let symbol = context.currency_symbol().to_string();
    for row in formatters::table_rows(context.store().transactions(), &symbol) {
        output::plain(row);
    }
    Ok(LoopControl::Continue)
}

fn handle_summary(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    let summary = context.store().summary();

    output::section("Financial Summary");
    for line in formatters::summary_lines(&summary, context.currency_symbol()) {
        output::plain(line);
    }
    output::plain(format!("Status: {}", summary.status()));
    Ok(LoopControl::Continue)
}

fn handle_clear(context: &mut ShellContext) -> Result<LoopControl, CliError> {
    output::section("Clear All Data");
    cli_io::print_warning("This permanently deletes every recorded transaction.");

    let Some(answer) = context.read_input("Type 'yes' to confirm")? else {
        return Ok(LoopControl::Exit);
    };

    if answer.eq_ignore_ascii_case("yes") {
        context.store_mut().clear_all()?;
        cli_io::print_success("All transactions cleared.");
    } else {
        cli_io::print_info("Clear cancelled; nothing was changed.");
    }
    Ok(LoopControl::Continue)
}
