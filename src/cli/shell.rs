use std::io::{self, BufRead};

use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use wedplan_domain::Category;

use super::context::{CliMode, LoopControl, ShellContext};
use super::output;
use crate::errors::CliError;

/// Set to run commands from stdin without prompts or confirmations.
pub const SCRIPT_ENV: &str = "WEDDING_BUDGET_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    match mode {
        CliMode::Interactive => run_interactive(&mut context)?,
        CliMode::Script => run_script(&mut context)?,
    }
    context.shutdown()
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    editor.set_helper(Some(CommandHelper::new(context.command_names())));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    output::section("Wedding Budget Planner");
    output::info("Type `help` to list commands or `summary` for the current totals.");

    while context.running {
        match editor.readline(&context.prompt()) {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                editor.add_history_entry(trimmed).ok();

                match context.process_line(trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err),
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting planner.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        match context.process_line(&line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err),
        }
        if !context.running {
            break;
        }
    }
    Ok(())
}

/// Splits a line into shell-style words, honouring quotes.
pub(crate) fn parse_command_line(line: &str) -> Result<Vec<String>, shell_words::ParseError> {
    shell_words::split(line.trim())
}

/// Completes command names first, then category names for the second word.
struct CommandHelper {
    commands: Vec<String>,
    categories: Vec<&'static str>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names.into_iter().map(str::to_string).collect();
        commands.sort();
        commands.dedup();
        let categories = Category::ALL
            .iter()
            .flat_map(|category| [category.alias(), category.tag()])
            .collect();
        Self {
            commands,
            categories,
        }
    }

    fn candidates<'a>(
        &'a self,
        word_index: usize,
        needle: &'a str,
    ) -> impl Iterator<Item = &'a str> + 'a {
        let pool: Box<dyn Iterator<Item = &'a str> + 'a> = match word_index {
            0 => Box::new(self.commands.iter().map(String::as_str)),
            1 => Box::new(self.categories.iter().copied()),
            _ => Box::new(std::iter::empty()),
        };
        pool.filter(move |candidate| candidate.starts_with(needle))
    }
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let prefix = &line[..pos];
        let start = prefix
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let word_index = prefix[..start].split_whitespace().count();
        let needle = prefix[start..].to_ascii_lowercase();

        let matches = self
            .candidates(word_index, &needle)
            .map(|candidate| Pair {
                display: candidate.to_string(),
                replacement: candidate.to_string(),
            })
            .collect();
        Ok((start, matches))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;
}

impl Highlighter for CommandHelper {}

impl Validator for CommandHelper {}
