//! Command registry
//!
//! The command set is closed: one enum variant per command. Lookup by name
//! is case-insensitive, and listing order is declaration order.

/// Width the command name is padded to in `help` listings
const HELP_NAME_WIDTH: usize = 12;

/// A terminal command
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    Help,
    Ls,
    Pwd,
    Cd,
    Cat,
    Whoami,
    Date,
    Echo,
    Clear,
    History,
    About,
    Projects,
    Skills,
    Contact,
    Resume,
}

impl Command {
    /// Every command, in listing order
    pub const ALL: [Command; 15] = [
        Command::Help,
        Command::Ls,
        Command::Pwd,
        Command::Cd,
        Command::Cat,
        Command::Whoami,
        Command::Date,
        Command::Echo,
        Command::Clear,
        Command::History,
        Command::About,
        Command::Projects,
        Command::Skills,
        Command::Contact,
        Command::Resume,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Ls => "ls",
            Command::Pwd => "pwd",
            Command::Cd => "cd",
            Command::Cat => "cat",
            Command::Whoami => "whoami",
            Command::Date => "date",
            Command::Echo => "echo",
            Command::Clear => "clear",
            Command::History => "history",
            Command::About => "about",
            Command::Projects => "projects",
            Command::Skills => "skills",
            Command::Contact => "contact",
            Command::Resume => "resume",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Command::Help => "Show available commands",
            Command::Ls => "List directory contents",
            Command::Pwd => "Print working directory",
            Command::Cd => "Change directory",
            Command::Cat => "Display file contents",
            Command::Whoami => "Display current user",
            Command::Date => "Display current date and time",
            Command::Echo => "Display text",
            Command::Clear => "Clear terminal screen",
            Command::History => "Show command history",
            Command::About => "About the developer",
            Command::Projects => "List featured projects",
            Command::Skills => "Display technical skills",
            Command::Contact => "Contact information",
            Command::Resume => "Download resume",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Command::Help => "help [command]",
            Command::Ls => "ls [-la] [directory]",
            Command::Pwd => "pwd",
            Command::Cd => "cd [directory]",
            Command::Cat => "cat [file]",
            Command::Whoami => "whoami",
            Command::Date => "date",
            Command::Echo => "echo [text]",
            Command::Clear => "clear",
            Command::History => "history",
            Command::About => "about",
            Command::Projects => "projects",
            Command::Skills => "skills",
            Command::Contact => "contact",
            Command::Resume => "resume",
        }
    }

    /// Find a command by name, ignoring case
    pub fn lookup(name: &str) -> Option<Command> {
        Self::ALL
            .iter()
            .copied()
            .find(|cmd| cmd.name().eq_ignore_ascii_case(name))
    }

    /// Commands whose name starts with `prefix`, ignoring case
    pub fn completions(prefix: &str) -> Vec<&'static str> {
        let prefix = prefix.to_lowercase();
        Self::ALL
            .iter()
            .map(|cmd| cmd.name())
            .filter(|name| name.starts_with(&prefix))
            .collect()
    }
}

/// Full `help` listing
pub fn help_listing() -> String {
    let list: Vec<String> = Command::ALL
        .iter()
        .map(|cmd| {
            format!(
                "  {:<width$} - {}",
                cmd.name(),
                cmd.description(),
                width = HELP_NAME_WIDTH
            )
        })
        .collect();

    format!(
        "Available commands:\n{}\n\nType 'help [command]' for more info about a specific command.",
        list.join("\n")
    )
}

/// `help <name>` text
pub fn help_for(name: &str) -> String {
    match Command::lookup(name) {
        Some(cmd) => format!("{}: {}\nUsage: {}", name, cmd.description(), cmd.usage()),
        None => format!("Command '{}' not found.", name),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_exact() {
        for cmd in Command::ALL {
            assert_eq!(Command::lookup(cmd.name()), Some(cmd));
        }
    }

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(Command::lookup("LS"), Some(Command::Ls));
        assert_eq!(Command::lookup("Help"), Some(Command::Help));
        assert_eq!(Command::lookup("wHoAmI"), Some(Command::Whoami));
    }

    #[test]
    fn test_lookup_unknown() {
        assert_eq!(Command::lookup("rm"), None);
        assert_eq!(Command::lookup(""), None);
    }

    #[test]
    fn test_names_unique() {
        let mut names: Vec<_> = Command::ALL.iter().map(|c| c.name()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), Command::ALL.len());
    }

    #[test]
    fn test_completions() {
        assert_eq!(Command::completions("wh"), vec!["whoami"]);
        assert_eq!(Command::completions("c"), vec!["cd", "cat", "clear", "contact"]);
        assert_eq!(Command::completions("HIS"), vec!["history"]);
        assert!(Command::completions("zz").is_empty());
    }

    #[test]
    fn test_help_listing_padded() {
        let help = help_listing();
        assert!(help.starts_with("Available commands:\n"));
        assert!(help.contains("  ls           - List directory contents"));
        assert!(help.contains("  history      - Show command history"));
        assert!(help.ends_with("more info about a specific command."));
    }

    #[test]
    fn test_help_for_known() {
        assert_eq!(
            help_for("cd"),
            "cd: Change directory\nUsage: cd [directory]"
        );
    }

    #[test]
    fn test_help_for_echoes_name_as_typed() {
        let expected = format!(
            "LS: {}\nUsage: {}",
            Command::Ls.description(),
            Command::Ls.usage()
        );
        assert_eq!(help_for("LS"), expected);
    }

    #[test]
    fn test_help_for_unknown() {
        assert_eq!(help_for("rm"), "Command 'rm' not found.");
    }
}
