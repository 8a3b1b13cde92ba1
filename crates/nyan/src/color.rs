use crate::config::RenderConfig;
use std::fmt::Display;

/// Semantic color labels, each bound to a fixed ANSI foreground code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLabel {
    TotalTests,
    Pass,
    Fail,
    BrightPass,
    BrightFail,
    BrightYellow,
    Pending,
    Suite,
    ErrorTitle,
    ErrorMessage,
    ErrorStack,
    Checkmark,
    Fast,
    Medium,
    Slow,
    Green,
    Light,
    DiffGutter,
    DiffAdded,
    DiffRemoved,
}

impl ColorLabel {
    pub fn code(self) -> u8 {
        match self {
            Self::TotalTests => 93,
            Self::Pass => 90,
            Self::Fail => 31,
            Self::BrightPass => 92,
            Self::BrightFail => 91,
            Self::BrightYellow => 93,
            Self::Pending => 36,
            Self::Suite => 0,
            Self::ErrorTitle => 0,
            Self::ErrorMessage => 31,
            Self::ErrorStack => 90,
            Self::Checkmark => 32,
            Self::Fast => 90,
            Self::Medium => 33,
            Self::Slow => 31,
            Self::Green => 32,
            Self::Light => 90,
            Self::DiffGutter => 90,
            Self::DiffAdded => 32,
            Self::DiffRemoved => 31,
        }
    }
}

/// Wrap `value` in the label's color, or pass it through unchanged when
/// color output is unsupported. Total: never fails.
pub fn colorize(config: &RenderConfig, label: ColorLabel, value: impl Display) -> String {
    if !config.supports_color {
        return value.to_string();
    }
    format!("\x1b[{}m{}\x1b[0m", label.code(), value)
}

/// Status glyphs. The fallback set avoids characters some consoles
/// (notably legacy Windows) render badly.
#[derive(Debug, Clone, Copy)]
pub struct Symbols {
    pub ok: &'static str,
    pub err: &'static str,
    pub dot: &'static str,
    pub comma: &'static str,
    pub bang: &'static str,
}

impl Symbols {
    pub fn select(ascii_glyphs: bool) -> Self {
        if ascii_glyphs {
            Self {
                ok: "\u{221a}",
                err: "\u{d7}",
                dot: ".",
                comma: ",",
                bang: "!",
            }
        } else {
            Self {
                ok: "✓",
                err: "✖",
                dot: "․",
                comma: ",",
                bang: "!",
            }
        }
    }
}
