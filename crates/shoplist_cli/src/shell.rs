//! Line-oriented shell over the shopping list store.
//!
//! # Responsibility
//! - Parse one text line into a shell action.
//! - Translate actions into store commands and re-render after each change.
//!
//! # Invariants
//! - A failed line never aborts the shell; it prints `error: ...` and continues.
//! - Input lines that are not UTF-8 are reported like any other bad line.
//! - Only I/O failures (read or write) end the loop early.

use log::{info, warn};
use shoplist_core::{render_view, RenderOptions, Store, StoreCommand, StoreResult};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::{self, BufRead, Write};

const HELP_TEXT: &str = "\
commands:
  add <name>            add an item
  rename <id> <name>    rename an item
  check <id>            toggle checked
  edit <id>             toggle edit mode
  save <id> <name>      rename and leave edit mode
  delete <id>           remove an item
  hide-checked          toggle hiding checked items
  show-checked on|off   show or hide checked items
  filter [text]         only show names containing text (empty clears)
  list                  print the current list
  help                  print this help
  quit                  exit
<id> may be any unique prefix of an item id.
";

/// One parsed shell line. Ids are still raw text at this point.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellAction {
    Add { name: String },
    Rename { id: String, name: String },
    Check { id: String },
    Edit { id: String },
    Save { id: String, name: String },
    Delete { id: String },
    HideChecked,
    ShowChecked(bool),
    Filter { text: String },
    List,
    Help,
    Quit,
    Blank,
}

/// Shell line parse error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    UnknownVerb(String),
    MissingArgument {
        verb: &'static str,
        argument: &'static str,
    },
    InvalidValue { verb: &'static str, value: String },
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVerb(verb) => write!(f, "unknown command `{verb}` (try `help`)"),
            Self::MissingArgument { verb, argument } => {
                write!(f, "`{verb}` needs <{argument}>")
            }
            Self::InvalidValue { verb, value } => {
                write!(f, "`{verb}` does not accept `{value}`")
            }
        }
    }
}

impl Error for ParseError {}

/// Parses one input line.
///
/// The first space separates the verb from its argument text; names and the
/// filter text are taken verbatim from there on.
pub fn parse_command_line(line: &str) -> Result<ShellAction, ParseError> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(ShellAction::Blank);
    }
    let line = line.trim_start();
    let (verb, rest) = line.split_once(' ').unwrap_or((line, ""));

    match verb {
        "add" => Ok(ShellAction::Add {
            name: rest.to_string(),
        }),
        "rename" => {
            let (id, name) = id_and_name("rename", rest)?;
            Ok(ShellAction::Rename { id, name })
        }
        "save" => {
            let (id, name) = id_and_name("save", rest)?;
            Ok(ShellAction::Save { id, name })
        }
        "check" => Ok(ShellAction::Check {
            id: required_id("check", rest)?,
        }),
        "edit" => Ok(ShellAction::Edit {
            id: required_id("edit", rest)?,
        }),
        "delete" => Ok(ShellAction::Delete {
            id: required_id("delete", rest)?,
        }),
        "hide-checked" => Ok(ShellAction::HideChecked),
        "show-checked" => match rest.trim() {
            "on" => Ok(ShellAction::ShowChecked(true)),
            "off" => Ok(ShellAction::ShowChecked(false)),
            "" => Err(ParseError::MissingArgument {
                verb: "show-checked",
                argument: "on|off",
            }),
            other => Err(ParseError::InvalidValue {
                verb: "show-checked",
                value: other.to_string(),
            }),
        },
        "filter" => Ok(ShellAction::Filter {
            text: rest.to_string(),
        }),
        "list" => Ok(ShellAction::List),
        "help" => Ok(ShellAction::Help),
        "quit" | "exit" => Ok(ShellAction::Quit),
        other => Err(ParseError::UnknownVerb(other.to_string())),
    }
}

fn required_id(verb: &'static str, rest: &str) -> Result<String, ParseError> {
    let id = rest.trim();
    if id.is_empty() {
        return Err(ParseError::MissingArgument {
            verb,
            argument: "id",
        });
    }
    Ok(id.to_string())
}

fn id_and_name(verb: &'static str, rest: &str) -> Result<(String, String), ParseError> {
    let rest = rest.trim_start();
    let (id, name) = rest.split_once(' ').unwrap_or((rest, ""));
    Ok((required_id(verb, id)?, name.to_string()))
}

impl ShellAction {
    /// Resolves ids against `store` and builds the matching store command.
    ///
    /// Returns `None` for actions that do not touch the store.
    pub fn to_command(&self, store: &Store) -> StoreResult<Option<StoreCommand>> {
        let command = match self {
            Self::Add { name } => StoreCommand::Add { name: name.clone() },
            Self::Rename { id, name } => StoreCommand::Rename {
                id: store.resolve_id(id)?,
                name: name.clone(),
            },
            Self::Check { id } => StoreCommand::ToggleChecked {
                id: store.resolve_id(id)?,
            },
            Self::Edit { id } => StoreCommand::ToggleEditing {
                id: store.resolve_id(id)?,
            },
            Self::Save { id, name } => StoreCommand::CommitEdit {
                id: store.resolve_id(id)?,
                name: name.clone(),
            },
            Self::Delete { id } => StoreCommand::Remove {
                id: store.resolve_id(id)?,
            },
            Self::HideChecked => StoreCommand::ToggleShowChecked,
            Self::ShowChecked(value) => StoreCommand::SetShowChecked { value: *value },
            Self::Filter { text } => StoreCommand::SetFilterText { text: text.clone() },
            Self::List | Self::Help | Self::Quit | Self::Blank => return Ok(None),
        };
        Ok(Some(command))
    }
}

/// Runs the shell until `quit` or end of input.
///
/// Prints the view once at start and again after every successful command.
pub fn run_shell<R: BufRead, W: Write>(
    store: &mut Store,
    mut input: R,
    mut output: W,
    options: RenderOptions,
) -> io::Result<()> {
    write!(output, "{}", render_view(store, options))?;

    let mut buffer = Vec::new();
    loop {
        buffer.clear();
        if input.read_until(b'\n', &mut buffer)? == 0 {
            break;
        }
        let Ok(line) = std::str::from_utf8(&buffer) else {
            warn!("event=shell_command module=cli status=error error_code=invalid_utf8");
            writeln!(output, "error: input line is not valid UTF-8")?;
            continue;
        };
        let action = match parse_command_line(line) {
            Ok(action) => action,
            Err(err) => {
                writeln!(output, "error: {err}")?;
                continue;
            }
        };

        match action {
            ShellAction::Quit => break,
            ShellAction::Blank => continue,
            ShellAction::Help => {
                write!(output, "{HELP_TEXT}")?;
                continue;
            }
            ShellAction::List => {
                write!(output, "{}", render_view(store, options))?;
                continue;
            }
            _ => {}
        }

        let result = action
            .to_command(store)
            .and_then(|command| match command {
                Some(command) => {
                    let kind = command.kind();
                    store.apply(command).map(|_| kind)
                }
                None => Ok("noop"),
            });
        match result {
            Ok(kind) => {
                info!("event=shell_command module=cli status=ok command={kind}");
                write!(output, "{}", render_view(store, options))?;
            }
            Err(err) => {
                warn!(
                    "event=shell_command module=cli status=error error_code={}",
                    err.code()
                );
                writeln!(output, "error: {err}")?;
            }
        }
    }

    output.flush()
}
