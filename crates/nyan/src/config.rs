use crossterm::terminal;
use std::io::IsTerminal;

/// Terminal capabilities, sampled once at startup.
///
/// Rendering code never queries the environment directly; production code
/// calls [`RenderConfig::detect`] and tests construct fixed values. Width is
/// not re-sampled on resize.
#[derive(Debug, Clone, Copy)]
pub struct RenderConfig {
    /// Both stdout and stderr are terminals.
    pub is_interactive: bool,
    /// Emit ANSI color sequences.
    pub supports_color: bool,
    /// Terminal width in columns.
    pub width: u16,
    /// Use the fallback glyph set for consoles with unreliable Unicode.
    pub ascii_glyphs: bool,
}

impl RenderConfig {
    pub fn detect() -> Self {
        let is_interactive = std::io::stdout().is_terminal() && std::io::stderr().is_terminal();
        let supports_color = is_interactive && std::env::var_os("NO_COLOR").is_none();
        let width = terminal::size().map(|(w, _)| w).unwrap_or(80);
        Self {
            is_interactive,
            supports_color,
            width,
            ascii_glyphs: cfg!(windows),
        }
    }
}
