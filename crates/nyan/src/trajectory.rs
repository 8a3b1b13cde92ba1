use std::collections::VecDeque;

/// Animation rows shared by the scoreboard, rainbow, and cat blocks.
pub const ROWS: usize = 4;

/// Columns the cat occupies at the leading edge of the trail.
const CAT_WIDTH: usize = 11;

/// Fixed-width rolling trail of colored segments, one row per animation
/// line. All rows scroll in lockstep: every append pushes the identical
/// segment to each of them.
pub struct Trajectory {
    rows: [VecDeque<String>; ROWS],
    capacity: usize,
}

impl Trajectory {
    /// Capacity reserves a quarter of the terminal for margin and
    /// `CAT_WIDTH` columns for the cat. A very narrow terminal saturates to
    /// zero, degrading to a near-empty trail rather than an error.
    pub fn new(width: u16) -> Self {
        let capacity = (f64::from(width) * 0.75) as usize;
        Self {
            rows: std::array::from_fn(|_| VecDeque::new()),
            capacity: capacity.saturating_sub(CAT_WIDTH),
        }
    }

    /// Append one segment to every row, evicting the oldest first when a
    /// row is at capacity.
    pub fn append(&mut self, segment: &str) {
        for row in &mut self.rows {
            if row.len() >= self.capacity {
                row.pop_front();
            }
            row.push_back(segment.to_string());
        }
    }

    /// Current trail length; rows never diverge.
    pub fn len(&self) -> usize {
        self.rows[0].len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows[0].is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn rows(&self) -> impl Iterator<Item = &VecDeque<String>> {
        self.rows.iter()
    }
}
