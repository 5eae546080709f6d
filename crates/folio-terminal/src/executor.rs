//! Command executor: interprets a raw input line and runs its behavior.

use folio_host::{Clock, HostActions, Timestamp};
use folio_types::config::FolioConfig;

use crate::catalog::ProjectCatalog;
use crate::log::LogKind;
use crate::registry::{CommandKind, CommandRegistry, Dispatch};
use crate::session::TerminalSession;

const ABOUT: &str = "Final Year Student & Aspiring Backend Developer passionate about \
                     building scalable systems.";

const SKILLS: [&str; 4] = [
    "→ Languages: JavaScript, TypeScript, Python, Java",
    "→ Frontend: React, Angular, Ionic, React Native",
    "→ Backend: Node.js, Express, MongoDB, AWS",
    "→ DevOps: Docker, Kubernetes, CI/CD",
];

const PROJECT_LINES: [&str; 3] = [
    "1. Smart Parking Finder - Ionic, Angular, Node.js",
    "2. HPCL Dealer App - React Native",
    "3. Bookstore Auth System - Node.js, Express",
];

const PROJECTS_HINT: &str = "Type \"open <project>\" to view one in a new tab.";

const CONTACT: [&str; 3] = [
    "📧 Email: hello@developer.com",
    "🔗 GitHub: github.com/developer",
    "💼 LinkedIn: linkedin.com/in/developer",
];

const NEOFETCH: &str = "\
        .---.        developer@portfolio
       /     \\       -------------------
       \\.@-@./       OS:        Portfolio Terminal
       /`\\_/`\\       Host:      code-editor-sim
      //  _  \\\\      Shell:     folio 0.1.0
     | \\     )|_     Languages: JS / TS / Python / Java
    /`\\_`>  <_/ \\    Stack:     React + Node + MongoDB
    \\__/'---'\\__/    Uptime:    always online";

const BANNER: &str = "\
 ____   ___  ____ _____ _____ ___  _     ___ ___
|  _ \\ / _ \\|  _ \\_   _|  ___/ _ \\| |   |_ _/ _ \\
| |_) | | | | |_) || | | |_ | | | | |    | | | | |
|  __/| |_| |  _ < | | |  _|| |_| | |___ | | |_| |
|_|    \\___/|_| \\_\\|_| |_|   \\___/|_____|___\\___/";

const HIRE_ME_BOX: [&str; 12] = [
    "╔══════════════════════════════════════╗",
    "║                                      ║",
    "║   ACCESS GRANTED                     ║",
    "║                                      ║",
    "║   Full-stack developer available     ║",
    "║   for hire: scalable backends,       ║",
    "║   clean frontends, shipped fast.     ║",
    "║                                      ║",
    "║   > hello@developer.com              ║",
    "║   > github.com/developer             ║",
    "║                                      ║",
    "╚══════════════════════════════════════╝",
];

/// Host services bundled for one `execute` call.
///
/// The executor never awaits or inspects side-effect outcomes; a failed
/// link open or download is logged at debug and dropped.
pub struct Host<'a> {
    pub clock: &'a dyn Clock,
    pub actions: &'a mut dyn HostActions,
}

/// Interprets raw input lines against the registry and the session.
///
/// The executor is the single writer of the log store and history buffer.
/// All dispatch happens synchronously within one call; unrecognized input
/// resolves to the fallback error-entry path rather than an error return.
pub struct CommandExecutor {
    session: TerminalSession,
    registry: CommandRegistry,
    catalog: ProjectCatalog,
    config: FolioConfig,
}

impl CommandExecutor {
    pub fn new(session: TerminalSession, config: FolioConfig) -> Self {
        Self {
            session,
            registry: CommandRegistry::new(),
            catalog: ProjectCatalog::builtin(),
            config,
        }
    }

    /// Swap in a non-default project catalog.
    pub fn with_catalog(mut self, catalog: ProjectCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    /// Read access for the rendering layer.
    pub fn session(&self) -> &TerminalSession {
        &self.session
    }

    /// Mutable access for the input layer (history navigation, overlay).
    pub fn session_mut(&mut self) -> &mut TerminalSession {
        &mut self.session
    }

    /// Ghost-text completion for the current partial input.
    pub fn suggest(&self, partial: &str) -> String {
        self.registry.suggest(partial)
    }

    /// Execute one submitted line.
    ///
    /// An active overlay is dismissed before anything else, even for an
    /// empty submission. Empty-after-trim input is otherwise a full no-op:
    /// no echo entry, no history push. Everything else is echoed verbatim,
    /// recorded in history, then dispatched case-insensitively.
    pub fn execute(&mut self, raw: &str, host: &mut Host<'_>) {
        if self.session.overlay.is_active() {
            self.session.overlay.deactivate();
        }

        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return;
        }

        let now = host.clock.now().unwrap_or_default();
        let echo = format!("{} {raw}", self.config.prompt);
        self.session.logs.append(LogKind::Command, echo, now);
        self.session.history.push(raw);
        self.session.history.reset_cursor();

        match self.registry.resolve(raw) {
            Dispatch::Echo(text) => {
                self.session.logs.append(LogKind::Output, text, now);
            },
            Dispatch::Open(key) => self.run_open(&key, now, host),
            Dispatch::Exact(kind) => self.run(kind, now, host),
            Dispatch::Unknown(input) => {
                self.session.logs.append(
                    LogKind::Error,
                    format!("Command not found: {input}. Type \"help\" for available commands."),
                    now,
                );
            },
            // Unreachable: empty input returned above.
            Dispatch::Empty => {},
        }
    }

    fn run(&mut self, kind: CommandKind, now: Timestamp, host: &mut Host<'_>) {
        let logs = &mut self.session.logs;
        match kind {
            CommandKind::Help => {
                let mut out = String::from("Available commands:");
                for def in self.registry.defs() {
                    out.push_str(&format!("\n  {:<16}- {}", def.usage, def.summary));
                }
                logs.append(LogKind::Output, out, now);
            },
            CommandKind::About => {
                logs.append(LogKind::Output, ABOUT, now);
            },
            CommandKind::Skills => {
                for line in SKILLS {
                    logs.append(LogKind::Output, line, now);
                }
            },
            CommandKind::Projects => {
                for line in PROJECT_LINES {
                    logs.append(LogKind::Output, line, now);
                }
                logs.append(LogKind::Output, PROJECTS_HINT, now);
            },
            CommandKind::Contact => {
                for line in CONTACT {
                    logs.append(LogKind::Output, line, now);
                }
            },
            CommandKind::Clear => {
                logs.clear();
            },
            CommandKind::Github => {
                logs.append(LogKind::Success, "Opening GitHub profile...", now);
                fire_open_url(host, &self.config.github_url);
            },
            CommandKind::Linkedin => {
                logs.append(LogKind::Success, "Opening LinkedIn profile...", now);
                fire_open_url(host, &self.config.linkedin_url);
            },
            CommandKind::Whoami => {
                logs.append(LogKind::Output, self.config.identity.clone(), now);
            },
            CommandKind::Date => {
                logs.append(LogKind::Output, now.to_string(), now);
            },
            CommandKind::CatResume => {
                logs.append(
                    LogKind::Success,
                    format!("Fetching {}...", self.config.resume_file),
                    now,
                );
                if let Err(e) = host.actions.download(&self.config.resume_file) {
                    log::debug!("download failed: {e}");
                }
                logs.append(
                    LogKind::Output,
                    format!("Download started: {}", self.config.resume_file),
                    now,
                );
            },
            CommandKind::LsProjects => {
                let mut out = String::from("projects/");
                let count = self.catalog.len();
                for (i, slug) in self.catalog.slugs().enumerate() {
                    let branch = if i + 1 == count { "└──" } else { "├──" };
                    out.push_str(&format!("\n{branch} {slug}/"));
                }
                logs.append(LogKind::Output, out, now);
            },
            CommandKind::Neofetch => {
                logs.append(LogKind::Ascii, NEOFETCH, now);
            },
            CommandKind::Banner => {
                logs.append(LogKind::Ascii, BANNER, now);
            },
            CommandKind::History => {
                let mut out = String::new();
                for (i, entry) in self.session.history.entries().iter().enumerate() {
                    if i > 0 {
                        out.push('\n');
                    }
                    out.push_str(&format!("  {:>4}  {entry}", i + 1));
                }
                self.session.logs.append(LogKind::Output, out, now);
            },
            CommandKind::SudoHireMe => {
                for line in HIRE_ME_BOX {
                    logs.append(LogKind::Success, line, now);
                }
            },
            CommandKind::Matrix => {
                logs.append(LogKind::Success, "Wake up, Neo...", now);
                logs.append(
                    LogKind::Info,
                    "The Matrix has you. Press any key to exit.",
                    now,
                );
                self.session.overlay.activate();
            },
            // Dispatched through their own registry paths.
            CommandKind::Echo | CommandKind::Open => {},
        }
    }

    fn run_open(&mut self, raw_key: &str, now: Timestamp, host: &mut Host<'_>) {
        let key = ProjectCatalog::normalize_key(raw_key);
        let logs = &mut self.session.logs;
        match self.catalog.get(&key) {
            Some(entry) => {
                logs.append(LogKind::Success, format!("Opening {}...", entry.name), now);
                logs.append(LogKind::Output, format!("  Tech: {}", entry.tech), now);
                logs.append(LogKind::Output, format!("  About: {}", entry.blurb), now);
                logs.append(LogKind::Output, format!("  Link: {}", entry.link), now);
                logs.append(LogKind::Info, "Opening in a new tab...", now);
                let link = entry.link.clone();
                fire_open_url(host, &link);
            },
            None => {
                logs.append(LogKind::Error, format!("Project not found: {key}"), now);
                logs.append(LogKind::Output, "Available projects:", now);
                let listing = self
                    .catalog
                    .slugs()
                    .collect::<Vec<_>>()
                    .join(", ");
                logs.append(LogKind::Output, format!("  {listing}"), now);
            },
        }
    }
}

fn fire_open_url(host: &mut Host<'_>, url: &str) {
    if let Err(e) = host.actions.open_url(url) {
        log::debug!("open_url failed: {e}");
    }
}
