use talent_core::{JobId, Msg, RecordId};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Dispatch(Vec<Msg>),
    Show,
    Help,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CommandError {
    #[error("unknown command {0:?}, try `help`")]
    Unknown(String),
    #[error("`{0}` needs an argument")]
    MissingArgument(&'static str),
}

pub const HELP: &str = "\
commands:
  search <text>   type and submit a search (empty text clears the box)
  type <text>     edit the search box without submitting
  clear           clear the search and reload
  more            load the next page
  select <id>     tick a record        unselect <id>  untick a record
  all             tick every record    none           untick everything
  preview         open every ticked record
  archive <id>    open the archive dialog for a record
  submit <job>    archive under a job  cancel         close the dialog
  dismiss         hide the current notice
  show            print the list       quit           leave";

/// Parses one input line.
pub fn parse(line: &str) -> Result<Command, CommandError> {
    let line = line.trim();
    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };

    let msgs = match word {
        "" | "show" | "ls" => return Ok(Command::Show),
        "help" | "?" => return Ok(Command::Help),
        "quit" | "exit" | "q" => return Ok(Command::Quit),
        // Typing then submitting, like enter in the search box.
        "search" | "s" => vec![
            Msg::DraftSearchChanged(rest.to_owned()),
            Msg::SearchCommitted(rest.to_owned()),
        ],
        "type" => vec![Msg::DraftSearchChanged(rest.to_owned())],
        "clear" => vec![Msg::SearchCleared],
        "more" | "m" => vec![Msg::LoadMoreRequested],
        "select" => vec![Msg::SelectionToggled {
            id: RecordId::new(required(rest, "select")?),
            selected: true,
        }],
        "unselect" => vec![Msg::SelectionToggled {
            id: RecordId::new(required(rest, "unselect")?),
            selected: false,
        }],
        "all" => vec![Msg::SelectAllToggled(true)],
        "none" => vec![Msg::SelectAllToggled(false)],
        "preview" | "p" => vec![Msg::PreviewRequested],
        "archive" => vec![Msg::ArchiveOpened(RecordId::new(required(rest, "archive")?))],
        "submit" => vec![Msg::ArchiveSubmitted(JobId::new(required(rest, "submit")?))],
        "cancel" => vec![Msg::ArchiveCancelled],
        "dismiss" => vec![Msg::NoticeDismissed],
        other => return Err(CommandError::Unknown(other.to_owned())),
    };
    Ok(Command::Dispatch(msgs))
}

fn required<'a>(rest: &'a str, command: &'static str) -> Result<&'a str, CommandError> {
    if rest.is_empty() {
        Err(CommandError::MissingArgument(command))
    } else {
        Ok(rest)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn search_types_then_commits() {
        assert_eq!(
            parse("search  rust dev ").unwrap(),
            Command::Dispatch(vec![
                Msg::DraftSearchChanged("rust dev".to_string()),
                Msg::SearchCommitted("rust dev".to_string()),
            ])
        );
    }

    #[test]
    fn bare_search_clears_the_box() {
        assert_eq!(
            parse("search").unwrap(),
            Command::Dispatch(vec![
                Msg::DraftSearchChanged(String::new()),
                Msg::SearchCommitted(String::new()),
            ])
        );
    }

    #[test]
    fn selection_commands_carry_ids() {
        assert_eq!(
            parse("unselect 42").unwrap(),
            Command::Dispatch(vec![Msg::SelectionToggled {
                id: RecordId::from("42"),
                selected: false,
            }])
        );
        assert_eq!(
            parse("select").unwrap_err(),
            CommandError::MissingArgument("select")
        );
    }

    #[test]
    fn archive_flow_commands() {
        assert_eq!(
            parse("archive 7").unwrap(),
            Command::Dispatch(vec![Msg::ArchiveOpened(RecordId::from("7"))])
        );
        assert_eq!(
            parse("submit j1").unwrap(),
            Command::Dispatch(vec![Msg::ArchiveSubmitted(JobId::from("j1"))])
        );
    }

    #[test]
    fn blank_line_shows_and_unknown_is_rejected() {
        assert_eq!(parse("   ").unwrap(), Command::Show);
        assert_eq!(parse("quit").unwrap(), Command::Quit);
        assert_eq!(
            parse("frobnicate").unwrap_err(),
            CommandError::Unknown("frobnicate".to_string())
        );
    }
}
