//! Line-driven interactive inspector
//!
//! The screen is an explicit [`ViewState`]; every key goes through
//! [`dispatch`], which returns the next state and what the session should
//! do about it. Rendering reads the current report and never mutates it.

use std::io::{BufRead, Write};

use crate::core::Inspector;
use crate::error::{try_with_recovery, InspectError, Result};
use crate::models::analysis::InspectionReport;
use crate::output::formatters::{
    format_deps_text, format_files_text, format_order_text, format_packages_text, format_tree_text,
};
use ansi_term::Colour::{Blue, Yellow};

/// What is on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewState {
    Menu,
    Packages,
    Files,
    /// Dependency index with one highlighted entry
    Deps { selected: usize },
    Tree,
    Order,
}

/// A parsed line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Key {
    Packages,
    Files,
    Deps,
    Tree,
    Order,
    Down,
    Up,
    Refresh,
    Back,
    Quit,
    Unknown(String),
}

impl Key {
    /// Parse one input line; surrounding whitespace and case are ignored
    pub fn parse(line: &str) -> Self {
        match line.trim().to_lowercase().as_str() {
            "1" => Key::Packages,
            "2" => Key::Files,
            "3" => Key::Deps,
            "4" => Key::Tree,
            "5" => Key::Order,
            "j" => Key::Down,
            "k" => Key::Up,
            "r" => Key::Refresh,
            "0" | "b" => Key::Back,
            "q" => Key::Quit,
            other => Key::Unknown(other.to_string()),
        }
    }
}

/// What the session does after a key
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Render,
    Refresh,
    Quit,
}

/// The single transition function of the interactive session.
///
/// `entries` is the length of the dependency index, used to keep the
/// selection in range.
pub fn dispatch(state: ViewState, key: &Key, entries: usize) -> (ViewState, Action) {
    match key {
        Key::Quit => (state, Action::Quit),
        Key::Refresh => (state, Action::Refresh),
        Key::Back => (ViewState::Menu, Action::Render),
        Key::Packages => (ViewState::Packages, Action::Render),
        Key::Files => (ViewState::Files, Action::Render),
        Key::Deps => (ViewState::Deps { selected: 0 }, Action::Render),
        Key::Tree => (ViewState::Tree, Action::Render),
        Key::Order => (ViewState::Order, Action::Render),
        Key::Down => match state {
            ViewState::Deps { selected } => {
                let last = entries.saturating_sub(1);
                (ViewState::Deps { selected: (selected + 1).min(last) }, Action::Render)
            }
            other => (other, Action::Render),
        },
        Key::Up => match state {
            ViewState::Deps { selected } => (
                ViewState::Deps {
                    selected: selected.saturating_sub(1),
                },
                Action::Render,
            ),
            other => (other, Action::Render),
        },
        Key::Unknown(_) => (state, Action::Render),
    }
}

/// Interactive session over one inspector
pub struct Session<'a> {
    inspector: &'a Inspector,
    report: InspectionReport,
    state: ViewState,
    use_colors: bool,
    verbose: bool,
}

impl<'a> Session<'a> {
    /// Start a session with a fresh report
    pub fn new(inspector: &'a Inspector) -> Result<Self> {
        let report = inspector.inspect()?;
        let settings = inspector.settings();
        Ok(Self {
            inspector,
            report,
            state: ViewState::Menu,
            use_colors: settings.use_colors,
            verbose: settings.verbose,
        })
    }

    pub fn state(&self) -> ViewState {
        self.state
    }

    pub fn report(&self) -> &InspectionReport {
        &self.report
    }

    /// Apply one key. Returns `false` once the session should end.
    pub fn handle(&mut self, key: &Key) -> Result<bool> {
        let (next, action) = dispatch(self.state, key, self.report.dependencies.len());
        self.state = next;

        match action {
            Action::Quit => return Ok(false),
            Action::Refresh => self.refresh()?,
            Action::Render => {}
        }
        Ok(true)
    }

    /// Rebuild the report from disk.
    ///
    /// A failed pass keeps the previous report unless the failure is critical.
    fn refresh(&mut self) -> Result<()> {
        if let Some(report) = try_with_recovery(|| self.inspector.inspect())? {
            self.report = report;
        }

        if let ViewState::Deps { selected } = self.state {
            let last = self.report.dependencies.len().saturating_sub(1);
            self.state = ViewState::Deps {
                selected: selected.min(last),
            };
        }
        Ok(())
    }

    /// Text for the current state
    pub fn render(&self) -> String {
        let report = &self.report;
        let colors = self.use_colors;

        let body = match self.state {
            ViewState::Menu => self.render_menu(),
            ViewState::Packages => format_packages_text(&report.packages, colors),
            ViewState::Files => format_files_text(&report.file_tree, colors),
            ViewState::Deps { selected } => {
                format_deps_text(&report.dependencies, colors, self.verbose, Some(selected))
            }
            ViewState::Tree => format_tree_text(report.import_tree.as_ref(), colors, self.verbose),
            ViewState::Order => format_order_text(report, colors),
        };

        let hint = match self.state {
            ViewState::Menu => "[1-5] view  [r] refresh  [q] quit",
            ViewState::Deps { .. } => "[j/k] move  [r] refresh  [b] back  [q] quit",
            _ => "[r] refresh  [b] back  [q] quit",
        };
        let hint = if colors {
            Yellow.dimmed().paint(hint).to_string()
        } else {
            hint.to_string()
        };

        format!("{}\n{}\n> ", body, hint)
    }

    fn render_menu(&self) -> String {
        let title = format!("nixme - {}", self.report.hostname);
        let mut output = if self.use_colors {
            format!("{}\n", Blue.bold().paint(title))
        } else {
            format!("{}\n", title)
        };
        output.push_str(&format!("{}\n\n", self.report.project_root.display()));

        let summary = &self.report.summary;
        for (key, label) in [
            ("1", format!("Packages ({})", self.report.packages.len())),
            ("2", format!("Configuration files ({})", summary.config_files)),
            ("3", format!("Dependencies ({} imports)", summary.total_imports)),
            ("4", format!("Import tree ({} nodes)", summary.tree_nodes)),
            ("5", format!("Module order ({} roots)", self.report.module_order.len())),
        ] {
            output.push_str(&format!("  {}  {}\n", key, label));
        }
        output
    }

    /// Drive the session from `input` until `q` or end of input
    pub fn run<R: BufRead, W: Write>(&mut self, mut input: R, mut output: W) -> Result<()> {
        let write_err = |source| InspectError::StdoutWrite { source };

        loop {
            output.write_all(self.render().as_bytes()).map_err(write_err)?;
            output.flush().map_err(write_err)?;

            let mut line = String::new();
            if input.read_line(&mut line).map_err(InspectError::io_error)? == 0 {
                break;
            }

            if !self.handle(&Key::parse(&line))? {
                break;
            }
        }

        output.write_all(b"\n").map_err(write_err)
    }
}
