use std::str::FromStr;

use domain::DraftField;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  lookup <patient-id>            fetch a patient
  show                           show the current patient
  add                            add a medication entry
  set <n> <field> <value...>     edit entry n; fields: name, dosage, quantity,
                                 startDate, endDate, instructions
  remove <n>                     remove entry n
  drafts                         list medication entries
  save                           submit the prescription
  reset                          search a new patient
  help                           this text
  quit                           leave";

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Lookup {
        patient_id: String,
    },
    Show,
    /// Append an empty medication entry
    Add,
    /// Edit one field of a medication entry (index is zero-based)
    Set {
        index: usize,
        field: DraftField,
        value: String,
    },
    Remove {
        index: usize,
    },
    Drafts,
    Save,
    Reset,
    Help,
    Quit,
}

#[derive(Error, Debug, Eq, PartialEq)]
pub enum CommandError {
    #[error("Unknown command: {0}")]
    Unknown(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("Entry numbers start at 1, got '{0}'")]
    BadIndex(String),

    #[error(transparent)]
    Field(#[from] domain::Error),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (verb, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
        let rest = rest.trim();

        match verb {
            "lookup" | "search" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("lookup <patient-id>"));
                }
                Ok(Command::Lookup {
                    patient_id: rest.to_string(),
                })
            }
            "show" => Ok(Command::Show),
            "add" => Ok(Command::Add),
            "set" => {
                let (index, rest) = rest
                    .split_once(char::is_whitespace)
                    .ok_or(CommandError::Usage("set <n> <field> <value...>"))?;
                let rest = rest.trim_start();
                let (field, value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(CommandError::Usage("set <n> <field> <value...>"));
                }
                Ok(Command::Set {
                    index: parse_index(index)?,
                    field: field.parse()?,
                    value: value.trim().to_string(),
                })
            }
            "remove" | "rm" => {
                if rest.is_empty() {
                    return Err(CommandError::Usage("remove <n>"));
                }
                Ok(Command::Remove {
                    index: parse_index(rest)?,
                })
            }
            "drafts" | "list" => Ok(Command::Drafts),
            "save" => Ok(Command::Save),
            "reset" => Ok(Command::Reset),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }
}

/// One-based entry number to zero-based index.
fn parse_index(raw: &str) -> Result<usize, CommandError> {
    match raw.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n - 1),
        _ => Err(CommandError::BadIndex(raw.trim().to_string())),
    }
}
