//! # Command Parsing
//!
//! Input lines are matched against a fixed alias table by **prefix**, not by token:
//! `add John 1234567890` and `addJohn 1234567890` both select [`Command::Add`]. Commands
//! are tried in table order, and each command's aliases in their listed order; the
//! first alias that is a case-insensitive prefix of the input wins. Whatever follows
//! the alias is split on whitespace into positional arguments, with case preserved.
//!
//! Because matching is by prefix, a longer alias must come before any shorter alias
//! that is its prefix (`delete` before `del`), otherwise the short one swallows the
//! input and leaves the rest of the word as a bogus argument.
//!
//! Input that matches nothing becomes [`Command::Unknown`] with no arguments.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Add,
    Change,
    Exit,
    Delete,
    Find,
    ShowAll,
    Hello,
    Edit,
    Page,
    Help,
    Unknown,
}

/// Commands and their aliases, in matching order.
pub const COMMANDS: &[(Command, &[&str])] = &[
    (Command::Add, &["add", "+", "2"]),
    (Command::Change, &["change", "зміни", "3"]),
    (Command::Exit, &["bye", "exit", "end", "0"]),
    (Command::Delete, &["delete", "del", "8"]),
    (Command::Find, &["find", "4"]),
    (Command::ShowAll, &["show all", "5"]),
    (Command::Hello, &["hello", "1"]),
    (Command::Edit, &["edit", "7"]),
    (Command::Page, &["page", "**", "6"]),
    (Command::Help, &["help", "?", "9"]),
];

impl Command {
    pub fn aliases(&self) -> &'static [&'static str] {
        COMMANDS
            .iter()
            .find(|(cmd, _)| cmd == self)
            .map(|(_, aliases)| *aliases)
            .unwrap_or(&[])
    }

    /// Argument synopsis shown in help output.
    pub fn usage(&self) -> &'static str {
        match self {
            Command::Add => "<name> <phone> [dd-mm-yyyy]",
            Command::Change => "<name> <old phone> <new phone>",
            Command::Edit => "<name> <new name>",
            Command::Delete => "<name>",
            Command::Find => "<text>",
            _ => "",
        }
    }

    pub fn summary(&self) -> &'static str {
        match self {
            Command::Add => "Add a contact, or another phone to an existing one",
            Command::Change => "Replace one of a contact's phones",
            Command::Exit => "Leave the address book",
            Command::Delete => "Delete a contact",
            Command::Find => "Find contacts by name or phone",
            Command::ShowAll => "Show every contact",
            Command::Hello => "Say hello",
            Command::Edit => "Rename a contact",
            Command::Page => "Show contacts page by page",
            Command::Help => "List the available commands",
            Command::Unknown => "",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.aliases().first() {
            Some(alias) => f.write_str(alias),
            None => f.write_str("unknown"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

impl ParsedInput {
    fn unknown() -> Self {
        Self {
            command: Command::Unknown,
            args: Vec::new(),
        }
    }
}

pub fn parse(input: &str) -> ParsedInput {
    let input = input.trim_start();
    for (command, aliases) in COMMANDS {
        for alias in *aliases {
            if let Some(rest) = strip_prefix_ignore_case(input, alias) {
                return ParsedInput {
                    command: *command,
                    args: rest.split_whitespace().map(str::to_string).collect(),
                };
            }
        }
    }
    ParsedInput::unknown()
}

/// Strips `prefix` from `text` comparing lowercased characters.
fn strip_prefix_ignore_case<'a>(text: &'a str, prefix: &str) -> Option<&'a str> {
    let mut chars = text.char_indices();
    for expected in prefix.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    let offset = chars.next().map(|(i, _)| i).unwrap_or(text.len());
    Some(&text[offset..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(input: &str) -> Vec<String> {
        parse(input).args
    }

    #[test]
    fn splits_remaining_words_into_args() {
        let parsed = parse("add John 1234567890 15-03-1990");
        assert_eq!(parsed.command, Command::Add);
        assert_eq!(parsed.args, vec!["John", "1234567890", "15-03-1990"]);
    }

    #[test]
    fn matching_is_case_insensitive_but_args_keep_case() {
        let parsed = parse("ADD McDonald 1234567890");
        assert_eq!(parsed.command, Command::Add);
        assert_eq!(parsed.args, vec!["McDonald", "1234567890"]);
    }

    #[test]
    fn numeric_shortcuts() {
        let cases = [
            ("1", Command::Hello),
            ("2 John 1234567890", Command::Add),
            ("3 John 1234567890 1112223333", Command::Change),
            ("4 John", Command::Find),
            ("5", Command::ShowAll),
            ("6", Command::Page),
            ("7 John Johnny", Command::Edit),
            ("8 John", Command::Delete),
            ("9", Command::Help),
            ("0", Command::Exit),
        ];
        for (input, expected) in cases {
            assert_eq!(parse(input).command, expected, "input {input:?}");
        }
    }

    #[test]
    fn exit_aliases() {
        for input in ["bye", "exit", "end", "Good bye", "END"] {
            let expected = if input == "Good bye" {
                Command::Unknown
            } else {
                Command::Exit
            };
            assert_eq!(parse(input).command, expected, "input {input:?}");
        }
    }

    #[test]
    fn symbolic_and_cyrillic_aliases() {
        assert_eq!(parse("+ John 1234567890").command, Command::Add);
        assert_eq!(parse("**").command, Command::Page);
        assert_eq!(parse("?").command, Command::Help);

        let parsed = parse("ЗМІНИ John 1234567890 1112223333");
        assert_eq!(parsed.command, Command::Change);
        assert_eq!(parsed.args, vec!["John", "1234567890", "1112223333"]);
    }

    #[test]
    fn multi_word_alias() {
        let parsed = parse("show all");
        assert_eq!(parsed.command, Command::ShowAll);
        assert!(parsed.args.is_empty());
        assert_eq!(parse("show").command, Command::Unknown);
    }

    #[test]
    fn longer_alias_wins_over_its_prefix() {
        assert_eq!(parse("delete Jane").command, Command::Delete);
        assert_eq!(args("delete Jane"), vec!["Jane"]);
        assert_eq!(args("del Jane"), vec!["Jane"]);
    }

    #[test]
    fn prefix_matching_does_not_require_a_word_boundary() {
        let parsed = parse("addJohn 1234567890");
        assert_eq!(parsed.command, Command::Add);
        assert_eq!(parsed.args, vec!["John", "1234567890"]);
    }

    #[test]
    fn earlier_commands_shadow_later_ones() {
        // "end" is an exit alias, so anything starting with it exits
        assert_eq!(parse("endless").command, Command::Exit);
        // "2" is the add shortcut, "20" still selects add
        assert_eq!(parse("20").command, Command::Add);
    }

    #[test]
    fn leading_whitespace_is_ignored() {
        assert_eq!(parse("   hello").command, Command::Hello);
    }

    #[test]
    fn unknown_input_has_no_args() {
        for input in ["", "   ", "what now", "show me"] {
            let parsed = parse(input);
            assert_eq!(parsed.command, Command::Unknown);
            assert!(parsed.args.is_empty());
        }
    }

    #[test]
    fn every_command_has_a_numeric_shortcut() {
        for (command, aliases) in COMMANDS {
            assert!(
                aliases.iter().any(|a| a.chars().all(|c| c.is_ascii_digit())),
                "{command:?} lacks a numeric alias"
            );
        }
    }

    #[test]
    fn no_alias_is_shadowed_by_an_earlier_one() {
        let mut seen: Vec<&str> = Vec::new();
        for (command, aliases) in COMMANDS {
            for alias in *aliases {
                assert_eq!(parse(alias).command, *command, "alias {alias:?}");
                assert!(!seen.iter().any(|s| alias.starts_with(s)), "alias {alias:?}");
                seen.push(alias);
            }
        }
    }

    #[test]
    fn display_uses_first_alias() {
        assert_eq!(Command::ShowAll.to_string(), "show all");
        assert_eq!(Command::Unknown.to_string(), "unknown");
    }
}
