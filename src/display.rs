//! Terminal rendering of grids and move lists.
//!
//! Structurally follows the teacher's `display.rs` (one `render_*`
//! function per concern, a `print_*` wrapper that writes it to stdout),
//! replacing the plain-text card glyphs with `colored`-backed colored
//! blocks, the idiomatic substitute for chroma-oracle's `sty`-based
//! rendering in `colour.py`/`item.py`.

use colored::Colorize;

use crate::color::Color;
use crate::grid::RawGrid;
use crate::moves::Move;

/// Render a single color as a colored terminal glyph, or `"?"` for
/// `Unknown`.
pub fn format_color(color: Color) -> String {
    if color.is_unknown() {
        return "?".to_string();
    }
    let (r, g, b) = color.rgb();
    "##".truecolor(r, g, b).to_string()
}

/// Render one container's contents, bottom to top, left to right.
pub fn render_row(row: &[Color]) -> String {
    row.iter().copied().map(format_color).collect::<Vec<_>>().join(" ")
}

/// Render a full grid, one line per container.
pub fn render_grid(grid: &RawGrid) -> String {
    grid.rows()
        .iter()
        .enumerate()
        .map(|(i, row)| format!("{i:>2}: {}", render_row(row)))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_grid(grid: &RawGrid) {
    println!("{}", render_grid(grid));
}

/// Render a numbered move list, matching
/// `chroma_oracle.cli.printing.print_moves`'s `"i. Container S -> D"`
/// format (1-based).
pub fn render_moves(moves: &[Move]) -> String {
    moves
        .iter()
        .enumerate()
        .map(|(i, mv)| format!("{}. {mv}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_moves(moves: &[Move]) {
    println!("{}", render_moves(moves));
}
