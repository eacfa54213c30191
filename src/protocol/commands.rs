//! Module `commands`
//!
//! Defines the console command set, the structures describing a command's
//! outcome, and the parser turning an input line into a `Command`.

/// How a command names an item in the current listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// `#n`: position in the listing, folders first.
    Index(usize),
    /// Exact item name; the first match wins.
    Name(String),
}

impl Target {
    pub fn parse(raw: &str) -> Self {
        match raw.strip_prefix('#').map(str::parse::<usize>) {
            Some(Ok(index)) => Target::Index(index),
            _ => Target::Name(raw.to_string()),
        }
    }
}

/// A console command parsed from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ls,
    Pwd,
    Mkdir(String),
    Cd(Target),
    Up,
    Home,
    Jump(String),
    /// Set the search query; empty clears it.
    Find(String),
    Select(Target),
    Clear,
    Del,
    Upload {
        name: String,
        mime_type: String,
        content: String,
    },
    Get(Target),
    View(Target),
    Stat,
    Help,
    Quit,
    Unknown(String),
}

/// Represents the outcome status of executing a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseSession,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug, Clone)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: String) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message),
        }
    }

    pub fn failure(reason: impl Into<String>, message: String) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            message: Some(message),
        }
    }
}

/// Parses a raw input line into the `Command` enum.
///
/// Known commands missing a required argument parse as `Unknown`.
pub fn parse_command(raw: &str) -> Command {
    let trimmed = raw.trim();
    let mut parts = trimmed.splitn(2, char::is_whitespace);
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let arg = parts.next().unwrap_or("").trim();

    match cmd.as_str() {
        "LS" | "LIST" => Command::Ls,
        "PWD" => Command::Pwd,
        "MKDIR" if !arg.is_empty() => Command::Mkdir(arg.to_string()),
        "CD" if arg == ".." => Command::Up,
        "CD" if !arg.is_empty() => Command::Cd(Target::parse(arg)),
        "UP" => Command::Up,
        "HOME" => Command::Home,
        "JUMP" if !arg.is_empty() => Command::Jump(arg.to_string()),
        "FIND" => Command::Find(arg.to_string()),
        "SELECT" | "SEL" if !arg.is_empty() => Command::Select(Target::parse(arg)),
        "CLEAR" => Command::Clear,
        "DEL" | "RM" => Command::Del,
        "UPLOAD" => parse_upload(arg).unwrap_or_else(|| Command::Unknown(trimmed.to_string())),
        "GET" if !arg.is_empty() => Command::Get(Target::parse(arg)),
        "VIEW" if !arg.is_empty() => Command::View(Target::parse(arg)),
        "STAT" => Command::Stat,
        "HELP" | "?" => Command::Help,
        "QUIT" | "Q" | "EXIT" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// `UPLOAD <name> <mime|-> [content]`
fn parse_upload(arg: &str) -> Option<Command> {
    let mut parts = arg.splitn(3, char::is_whitespace);
    let name = parts.next().filter(|n| !n.is_empty())?;
    let mime = parts.next().filter(|m| !m.is_empty())?;
    let content = parts.next().unwrap_or("");

    Some(Command::Upload {
        name: name.to_string(),
        mime_type: if mime == "-" { String::new() } else { mime.to_string() },
        content: content.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("LS"), Command::Ls);
        assert_eq!(parse_command("ls"), Command::Ls);
        assert_eq!(parse_command("PWD"), Command::Pwd);
        assert_eq!(parse_command("UP"), Command::Up);
        assert_eq!(parse_command("HOME"), Command::Home);
        assert_eq!(parse_command("DEL"), Command::Del);
        assert_eq!(parse_command("Q"), Command::Quit);
        assert_eq!(parse_command("  quit  "), Command::Quit);
    }

    #[test]
    fn test_parse_commands_with_args() {
        assert_eq!(
            parse_command("MKDIR Work Projects"),
            Command::Mkdir("Work Projects".into())
        );
        assert_eq!(parse_command("CD #2"), Command::Cd(Target::Index(2)));
        assert_eq!(
            parse_command("CD Docs"),
            Command::Cd(Target::Name("Docs".into()))
        );
        assert_eq!(parse_command("CD .."), Command::Up);
        assert_eq!(parse_command("JUMP 0"), Command::Jump("0".into()));
        assert_eq!(
            parse_command("SELECT #x"),
            Command::Select(Target::Name("#x".into()))
        );
    }

    #[test]
    fn test_find_without_query_clears() {
        assert_eq!(parse_command("FIND"), Command::Find(String::new()));
        assert_eq!(parse_command("find Rep"), Command::Find("Rep".into()));
    }

    #[test]
    fn test_parse_upload() {
        assert_eq!(
            parse_command("UPLOAD x.png image/png some bytes here"),
            Command::Upload {
                name: "x.png".into(),
                mime_type: "image/png".into(),
                content: "some bytes here".into(),
            }
        );
        assert_eq!(
            parse_command("UPLOAD blob -"),
            Command::Upload {
                name: "blob".into(),
                mime_type: String::new(),
                content: String::new(),
            }
        );
        assert_eq!(
            parse_command("UPLOAD onlyname"),
            Command::Unknown("UPLOAD onlyname".into())
        );
    }

    #[test]
    fn test_missing_arguments_are_unknown() {
        assert_eq!(parse_command("MKDIR"), Command::Unknown("MKDIR".into()));
        assert_eq!(parse_command("CD"), Command::Unknown("CD".into()));
        assert_eq!(parse_command("GET  "), Command::Unknown("GET".into()));
        assert_eq!(parse_command("FOO bar"), Command::Unknown("FOO bar".into()));
    }
}
