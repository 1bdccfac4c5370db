use glam::DVec2;

/// Rounding onto the integer grid, ties toward +∞ (`2.5 → 3`, `-2.5 → -2`).
pub trait GridRound {
    fn round_half_up(self) -> Self;
}

impl GridRound for f64 {
    fn round_half_up(self) -> Self {
        (self + 0.5).floor()
    }
}

impl GridRound for DVec2 {
    fn round_half_up(self) -> Self {
        DVec2::new(self.x.round_half_up(), self.y.round_half_up())
    }
}
