//! Static command table, order-sensitive matching, and autocomplete.

/// Every command the terminal understands.
///
/// Dispatch is a single exhaustive match in the executor; this enum is the
/// whole command surface. No command is added or removed at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommandKind {
    Help,
    About,
    Skills,
    Projects,
    Contact,
    Clear,
    Github,
    Linkedin,
    Whoami,
    Date,
    Echo,
    CatResume,
    LsProjects,
    Open,
    Neofetch,
    Banner,
    History,
    SudoHireMe,
    Matrix,
}

/// One row of the command table.
#[derive(Debug, Clone, Copy)]
pub struct CommandDef {
    /// Canonical invocation string; may contain a space.
    pub name: &'static str,
    /// One-line description for `help`.
    pub summary: &'static str,
    /// Usage string shown in the `help` left column.
    pub usage: &'static str,
    pub kind: CommandKind,
}

/// Result of resolving a submitted line against the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// `echo <text>`: the remainder after the command token, original case.
    Echo(String),
    /// `open <key>`: the raw key text (possibly empty).
    Open(String),
    /// Exact match on a registered command.
    Exact(CommandKind),
    /// Non-empty input matching nothing; carries the trimmed original input.
    Unknown(String),
    /// Empty after trim.
    Empty,
}

/// Declaration order doubles as the autocomplete enumeration order, so it
/// must stay stable.
const COMMANDS: &[CommandDef] = &[
    CommandDef {
        name: "help",
        summary: "Show this help message",
        usage: "help",
        kind: CommandKind::Help,
    },
    CommandDef {
        name: "about",
        summary: "About me",
        usage: "about",
        kind: CommandKind::About,
    },
    CommandDef {
        name: "skills",
        summary: "List my technical skills",
        usage: "skills",
        kind: CommandKind::Skills,
    },
    CommandDef {
        name: "projects",
        summary: "List my projects",
        usage: "projects",
        kind: CommandKind::Projects,
    },
    CommandDef {
        name: "contact",
        summary: "Contact information",
        usage: "contact",
        kind: CommandKind::Contact,
    },
    CommandDef {
        name: "clear",
        summary: "Clear the terminal",
        usage: "clear",
        kind: CommandKind::Clear,
    },
    CommandDef {
        name: "github",
        summary: "Open GitHub profile",
        usage: "github",
        kind: CommandKind::Github,
    },
    CommandDef {
        name: "linkedin",
        summary: "Open LinkedIn profile",
        usage: "linkedin",
        kind: CommandKind::Linkedin,
    },
    CommandDef {
        name: "whoami",
        summary: "Display current user",
        usage: "whoami",
        kind: CommandKind::Whoami,
    },
    CommandDef {
        name: "date",
        summary: "Show current date",
        usage: "date",
        kind: CommandKind::Date,
    },
    CommandDef {
        name: "echo",
        summary: "Echo back text",
        usage: "echo <text>",
        kind: CommandKind::Echo,
    },
    CommandDef {
        name: "cat resume.pdf",
        summary: "Download my resume",
        usage: "cat resume.pdf",
        kind: CommandKind::CatResume,
    },
    CommandDef {
        name: "ls projects/",
        summary: "List the projects directory",
        usage: "ls projects/",
        kind: CommandKind::LsProjects,
    },
    CommandDef {
        name: "open",
        summary: "Open a project by name",
        usage: "open <project>",
        kind: CommandKind::Open,
    },
    CommandDef {
        name: "neofetch",
        summary: "System info, terminal style",
        usage: "neofetch",
        kind: CommandKind::Neofetch,
    },
    CommandDef {
        name: "banner",
        summary: "Print the portfolio banner",
        usage: "banner",
        kind: CommandKind::Banner,
    },
    CommandDef {
        name: "history",
        summary: "Show command history",
        usage: "history",
        kind: CommandKind::History,
    },
    CommandDef {
        name: "sudo hire-me",
        summary: "Run with elevated enthusiasm",
        usage: "sudo hire-me",
        kind: CommandKind::SudoHireMe,
    },
    CommandDef {
        name: "matrix",
        summary: "There is no spoon",
        usage: "matrix",
        kind: CommandKind::Matrix,
    },
];

/// Shorthand forms resolved to a canonical name before exact matching.
const ALIASES: &[(&str, &str)] = &[("ls projects", "ls projects/")];

/// Static registry of available commands.
///
/// Matching is case-insensitive over trimmed input and strictly ordered:
/// `echo `-prefix first, then the fixed multi-word commands, then
/// `open <key>`, then exact single-token lookup, then the fallback.
#[derive(Debug, Default)]
pub struct CommandRegistry;

impl CommandRegistry {
    pub fn new() -> Self {
        Self
    }

    /// The command table in declaration order.
    pub fn defs(&self) -> &'static [CommandDef] {
        COMMANDS
    }

    /// Canonical names in declaration order (the autocomplete key set).
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        COMMANDS.iter().map(|def| def.name)
    }

    /// Resolve a raw input line (original case) to a dispatch decision.
    pub fn resolve(&self, input: &str) -> Dispatch {
        let input = input.trim();
        if input.is_empty() {
            return Dispatch::Empty;
        }

        // Echo-prefix takes priority over everything, including exact
        // lookup: `echo help` echoes, it does not run help.
        if let Some(head) = input.get(..5)
            && head.eq_ignore_ascii_case("echo ")
        {
            return Dispatch::Echo(input[5..].to_string());
        }

        let lower = input.to_lowercase();
        let lower = ALIASES
            .iter()
            .find(|(alias, _)| *alias == lower)
            .map_or(lower.as_str(), |(_, canonical)| canonical);

        // Fixed multi-word commands before the open-key prefix.
        for def in COMMANDS {
            if def.name.contains(' ') && def.name == lower {
                return Dispatch::Exact(def.kind);
            }
        }

        // `open` with or without a key; a missing key falls through to the
        // not-found hint path in the executor.
        if lower == "open" {
            return Dispatch::Open(String::new());
        }
        if let Some(key) = lower.strip_prefix("open ") {
            return Dispatch::Open(key.to_string());
        }

        // Exact single-token lookup. `echo` without a trailing space is not
        // a valid invocation, so it stays out of exact matching.
        for def in COMMANDS {
            if def.name == lower && !matches!(def.kind, CommandKind::Echo | CommandKind::Open) {
                return Dispatch::Exact(def.kind);
            }
        }

        Dispatch::Unknown(input.to_string())
    }

    /// Compute the ghost-text completion for a partial input.
    ///
    /// Returns the remainder of the first canonical name (in declaration
    /// order) that starts with the lowercased partial without equalling it,
    /// or an empty string when nothing matches.
    pub fn suggest(&self, partial: &str) -> String {
        let p = partial.to_lowercase();
        if p.is_empty() {
            return String::new();
        }
        for def in COMMANDS {
            if def.name.starts_with(p.as_str()) && def.name != p {
                return def.name[p.len()..].to_string();
            }
        }
        String::new()
    }
}
