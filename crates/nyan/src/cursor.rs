use crate::config::RenderConfig;
use std::io::{self, Write};

/// Cursor control for the in-place animation.
///
/// Hide/show/erase/line-start only make sense on an interactive terminal and
/// become no-ops otherwise; `cr` degrades to a plain `\r`. Relative moves are
/// always written since the redraw logic depends on them. Write errors
/// propagate untouched.
pub struct Cursor {
    interactive: bool,
}

impl Cursor {
    pub fn new(config: &RenderConfig) -> Self {
        Self {
            interactive: config.is_interactive,
        }
    }

    pub fn hide(&self, w: &mut dyn Write) -> io::Result<()> {
        if self.interactive {
            write!(w, "\x1b[?25l")?;
        }
        Ok(())
    }

    pub fn show(&self, w: &mut dyn Write) -> io::Result<()> {
        if self.interactive {
            write!(w, "\x1b[?25h")?;
        }
        Ok(())
    }

    pub fn erase_line(&self, w: &mut dyn Write) -> io::Result<()> {
        if self.interactive {
            write!(w, "\x1b[2K")?;
        }
        Ok(())
    }

    pub fn line_start(&self, w: &mut dyn Write) -> io::Result<()> {
        if self.interactive {
            write!(w, "\x1b[0G")?;
        }
        Ok(())
    }

    /// Erase the current line and return to column zero, or just `\r` when
    /// output is piped.
    pub fn cr(&self, w: &mut dyn Write) -> io::Result<()> {
        if self.interactive {
            self.erase_line(w)?;
            self.line_start(w)
        } else {
            write!(w, "\r")
        }
    }

    pub fn up(&self, n: usize, w: &mut dyn Write) -> io::Result<()> {
        write!(w, "\x1b[{n}A")
    }

    pub fn down(&self, n: usize, w: &mut dyn Write) -> io::Result<()> {
        write!(w, "\x1b[{n}B")
    }
}
