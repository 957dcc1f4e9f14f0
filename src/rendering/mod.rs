mod palette;

pub use palette::{Palette, glyph};

use macroquad::prelude::*;
use crate::domain::Grid;

/// Everything the renderer needs, created once at startup
pub struct RenderContext {
    pub cell_size: f32,
    pub font_size: u16,
    pub palette: Palette,
}

impl RenderContext {
    pub fn new(cell_size: u32) -> Self {
        Self {
            cell_size: cell_size as f32,
            // 24pt glyphs on 16px cells
            font_size: (cell_size * 3 / 2).max(1).min(u32::from(u16::MAX)) as u16,
            palette: Palette::default(),
        }
    }

    /// Top-left pixel of the cell at `(x, y)`
    pub fn cell_origin(&self, x: usize, y: usize) -> (f32, f32) {
        (x as f32 * self.cell_size, y as f32 * self.cell_size)
    }
}

/// Draw every cell of `grid` as a colored glyph
pub fn draw_grid(ctx: &RenderContext, grid: &Grid) {
    clear_background(ctx.palette.background);

    let params = TextParams {
        font_size: ctx.font_size,
        ..Default::default()
    };

    for (x, y, cell) in grid.iter_cells() {
        let (screen_x, screen_y) = ctx.cell_origin(x, y);
        // Text is positioned by its baseline
        draw_text_ex(
            glyph(cell.state),
            screen_x,
            screen_y + ctx.cell_size,
            TextParams {
                color: ctx.palette.color(cell.state),
                ..params.clone()
            },
        );
    }
}
