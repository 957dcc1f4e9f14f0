use macroquad::prelude::Color;

use crate::domain::CellState;

/// Fixed mapping from a cell's age classification to how it is drawn
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub background: Color,
    pub born_alive: Color,
    pub still_alive: Color,
    pub born_dead: Color,
    pub still_dead: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Color::from_rgba(255, 255, 255, 255),
            born_alive: Color::from_rgba(0, 0, 0, 255),     // Black
            still_alive: Color::from_rgba(50, 200, 70, 255), // Green
            born_dead: Color::from_rgba(255, 0, 0, 255),     // Red
            still_dead: Color::from_rgba(255, 255, 255, 255), // Blends into the background
        }
    }
}

impl Palette {
    pub fn color(&self, state: CellState) -> Color {
        match state {
            CellState::BornAlive => self.born_alive,
            CellState::StillAlive => self.still_alive,
            CellState::BornDead => self.born_dead,
            CellState::StillDead => self.still_dead,
        }
    }
}

/// Glyph for a cell: alive cells are `o`, dead ones `.`
pub const fn glyph(state: CellState) -> &'static str {
    if state.is_alive() { "o" } else { "." }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_still_dead_is_invisible() {
        let palette = Palette::default();
        assert_eq!(palette.color(CellState::StillDead), palette.background);
    }

    #[test]
    fn test_other_states_are_visible() {
        let palette = Palette::default();
        for state in [CellState::BornAlive, CellState::StillAlive, CellState::BornDead] {
            assert_ne!(palette.color(state), palette.background, "{state:?}");
        }
    }

    #[test]
    fn test_states_have_distinct_colors() {
        let palette = Palette::default();
        let colors: Vec<_> = CellState::ALL.iter().map(|&s| palette.color(s)).collect();
        for (i, a) in colors.iter().enumerate() {
            for b in &colors[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_glyphs_follow_liveness() {
        assert_eq!(glyph(CellState::BornAlive), "o");
        assert_eq!(glyph(CellState::StillAlive), "o");
        assert_eq!(glyph(CellState::BornDead), ".");
        assert_eq!(glyph(CellState::StillDead), ".");
    }
}
