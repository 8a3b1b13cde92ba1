use std::f64::consts::TAU;

/// Six-step hue cycle repeated seven times. The repetition keeps consecutive
/// segments from ever sharing a color while the trail scrolls.
pub const PALETTE_LEN: usize = 42;

/// Cyclic ANSI-256 rainbow palette with a wrapping cursor.
pub struct Rainbow {
    palette: [u8; PALETTE_LEN],
    index: usize,
    enabled: bool,
}

impl Rainbow {
    pub fn new(enabled: bool) -> Self {
        Self {
            palette: generate_palette(),
            index: 0,
            enabled,
        }
    }

    /// Wrap `segment` in the next palette color. The index advances even
    /// when color is disabled so frame counts stay deterministic.
    pub fn rainbowify(&mut self, segment: &str) -> String {
        let code = self.palette[self.index];
        self.index = (self.index + 1) % PALETTE_LEN;
        if !self.enabled {
            return segment.to_string();
        }
        format!("\x1b[38;5;{code}m{segment}\x1b[0m")
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn palette(&self) -> &[u8; PALETTE_LEN] {
        &self.palette
    }
}

/// Quantize three sine waves a third of a turn apart onto the 6x6x6
/// ANSI color cube: `36r + 6g + b + 16` with channels in 0..=5.
fn generate_palette() -> [u8; PALETTE_LEN] {
    let mut palette = [0u8; PALETTE_LEN];
    for (i, slot) in palette.iter_mut().enumerate() {
        let n = i as f64 / 6.0;
        let r = channel(n);
        let g = channel(n + TAU / 3.0);
        let b = channel(n + 2.0 * TAU / 3.0);
        *slot = 36 * r + 6 * g + b + 16;
    }
    palette
}

fn channel(phase: f64) -> u8 {
    (3.0 * phase.sin() + 3.0).floor() as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_42_codes_in_the_256_color_cube() {
        let rainbow = Rainbow::new(true);
        let palette = rainbow.palette();
        assert_eq!(palette.len(), PALETTE_LEN);
        for &code in palette {
            assert!((16..=231).contains(&code), "code {code} outside the cube");
        }
    }

    #[test]
    fn palette_is_deterministic() {
        assert_eq!(Rainbow::new(true).palette(), Rainbow::new(false).palette());
        assert_eq!(generate_palette(), generate_palette());
    }

    #[test]
    fn index_advances_once_per_call_and_wraps() {
        let mut rainbow = Rainbow::new(true);
        for expected in 1..=PALETTE_LEN {
            rainbow.rainbowify("-");
            assert_eq!(rainbow.index(), expected % PALETTE_LEN);
        }
        assert_eq!(rainbow.index(), 0);
        for _ in 0..5 {
            rainbow.rainbowify("-");
        }
        assert_eq!(rainbow.index(), 5);
    }

    #[test]
    fn rainbowify_wraps_segment_in_256_color_escape() {
        let mut rainbow = Rainbow::new(true);
        let first = rainbow.palette()[0];
        assert_eq!(rainbow.rainbowify("-"), format!("\x1b[38;5;{first}m-\x1b[0m"));
    }

    #[test]
    fn disabled_rainbow_passes_segment_through_but_still_advances() {
        let mut rainbow = Rainbow::new(false);
        assert_eq!(rainbow.rainbowify("_"), "_");
        assert_eq!(rainbow.rainbowify("-"), "-");
        assert_eq!(rainbow.index(), 2);
    }
}
