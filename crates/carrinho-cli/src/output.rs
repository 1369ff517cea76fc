//! Shared output layer for pretty/text/JSON parity across CLI commands.
//!
//! Every command handler receives an [`OutputMode`] and formats its output
//! accordingly: pretty output for humans, compact text for pipes, or stable
//! JSON.
//!
//! # Output mode resolution
//!
//! Precedence (highest wins):
//! 1. Explicit `--format` value / `--json` flag
//! 2. `FORMAT` env var → `"pretty"` | `"text"` | `"json"`
//! 3. Default: [`OutputMode::Pretty`] if stdout is a TTY; [`OutputMode::Text`] if piped.

use clap::ValueEnum;
use std::io::{self, IsTerminal, Write};

/// Shared width for human pretty separators.
pub const PRETTY_RULE_WIDTH: usize = 48;

/// Write a horizontal separator used by pretty human output.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn pretty_rule(w: &mut dyn Write) -> io::Result<()> {
    writeln!(w, "{:-<width$}", "", width = PRETTY_RULE_WIDTH)
}

/// Write a section heading followed by a separator.
///
/// # Errors
///
/// Returns an error if the write fails.
pub fn pretty_section(w: &mut dyn Write, heading: &str) -> io::Result<()> {
    writeln!(w, "{heading}")?;
    pretty_rule(w)
}

/// The three output modes supported by the CLI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    /// Human-optimized output (aligned columns, section headings).
    Pretty,
    /// Tab-separated plain text for pipes and scripts.
    Text,
    /// Machine-readable JSON.
    Json,
}

impl OutputMode {
    /// Returns `true` if JSON output was requested.
    pub fn is_json(self) -> bool {
        matches!(self, Self::Json)
    }

    /// Returns `true` if pretty output was requested.
    pub fn is_pretty(self) -> bool {
        matches!(self, Self::Pretty)
    }

    /// Returns `true` if text output was requested.
    #[allow(dead_code)]
    pub fn is_text(self) -> bool {
        matches!(self, Self::Text)
    }
}

/// Core resolution logic, separated from I/O for testability.
fn resolve_output_mode_inner(
    format_flag: Option<OutputMode>,
    json_flag: bool,
    format_env: Option<&str>,
    is_tty: bool,
) -> OutputMode {
    if let Some(mode) = format_flag {
        return mode;
    }

    if json_flag {
        return OutputMode::Json;
    }

    if let Some(val) = format_env {
        match val.to_lowercase().as_str() {
            "json" => return OutputMode::Json,
            "text" => return OutputMode::Text,
            "pretty" => return OutputMode::Pretty,
            _ => {} // unknown value — fall through to TTY detection
        }
    }

    if is_tty {
        OutputMode::Pretty
    } else {
        OutputMode::Text
    }
}

/// Resolve the output mode from CLI flags, environment, and TTY defaults.
pub fn resolve_output_mode(format_flag: Option<OutputMode>, json_flag: bool) -> OutputMode {
    let env_val = std::env::var("FORMAT").ok();
    let is_tty = io::stdout().is_terminal();
    resolve_output_mode_inner(format_flag, json_flag, env_val.as_deref(), is_tty)
}

/// Trait implemented by any CLI result type that can be rendered in all modes.
///
/// The [`render_item`] and [`render_list`] free functions dispatch to the
/// appropriate method based on [`OutputMode`]. All render methods return an
/// error only when the underlying write fails.
#[allow(clippy::missing_errors_doc)]
pub trait Renderable {
    /// Render for human consumption.
    fn render_human(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Render as a self-contained JSON object (no trailing newline).
    fn render_json(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Render as a single tab-separated text row (no header; see
    /// [`table_headers`]).
    ///
    /// [`table_headers`]: Renderable::table_headers
    fn render_table(&self, w: &mut dyn Write) -> io::Result<()>;

    /// Column headers for text mode, in the same order as [`render_table`]
    /// fields. Default: empty (no header printed).
    ///
    /// [`render_table`]: Renderable::render_table
    fn table_headers() -> &'static [&'static str]
    where
        Self: Sized,
    {
        &[]
    }
}

/// Render a single [`Renderable`] item to stdout using the given output mode.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn render_item<R: Renderable>(item: &R, mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Pretty => item.render_human(&mut out),
        OutputMode::Text => item.render_table(&mut out),
        OutputMode::Json => {
            item.render_json(&mut out)?;
            writeln!(out)
        }
    }
}

/// Render a slice of [`Renderable`] items to stdout.
///
/// JSON mode emits one array; text mode prints the header row first.
///
/// # Errors
///
/// Returns an error if writing to stdout fails.
pub fn render_list<R: Renderable>(items: &[R], mode: OutputMode) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match mode {
        OutputMode::Pretty => {
            for item in items {
                item.render_human(&mut out)?;
            }
            Ok(())
        }
        OutputMode::Text => {
            let headers = R::table_headers();
            if !headers.is_empty() {
                writeln!(out, "{}", headers.join("\t"))?;
            }
            for item in items {
                item.render_table(&mut out)?;
            }
            Ok(())
        }
        OutputMode::Json => {
            writeln!(out, "[")?;
            for (i, item) in items.iter().enumerate() {
                item.render_json(&mut out)?;
                if i + 1 < items.len() {
                    writeln!(out, ",")?;
                } else {
                    writeln!(out)?;
                }
            }
            writeln!(out, "]")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{OutputMode, resolve_output_mode_inner};

    #[test]
    fn explicit_flag_wins_over_everything() {
        let mode = resolve_output_mode_inner(Some(OutputMode::Text), true, Some("json"), true);
        assert!(mode.is_text());
    }

    #[test]
    fn json_flag_beats_env_and_tty() {
        let mode = resolve_output_mode_inner(None, true, Some("pretty"), true);
        assert!(mode.is_json());
    }

    #[test]
    fn env_var_beats_tty_detection() {
        assert!(resolve_output_mode_inner(None, false, Some("json"), true).is_json());
        assert!(resolve_output_mode_inner(None, false, Some("text"), true).is_text());
        assert!(resolve_output_mode_inner(None, false, Some("PRETTY"), false).is_pretty());
    }

    #[test]
    fn unknown_env_value_falls_through_to_tty() {
        assert!(resolve_output_mode_inner(None, false, Some("fancy"), true).is_pretty());
        assert!(resolve_output_mode_inner(None, false, Some("fancy"), false).is_text());
    }

    #[test]
    fn default_is_pretty_on_tty_text_when_piped() {
        assert!(resolve_output_mode_inner(None, false, None, true).is_pretty());
        assert!(resolve_output_mode_inner(None, false, None, false).is_text());
    }
}
