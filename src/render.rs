//! Textual board snapshots.

use core::fmt::Write as _;

use crate::board::Board;
use crate::common::CellView;
use crate::config::GRID_SIZE;

const GLYPH_WATER: char = '~';
const GLYPH_INTACT: char = '\u{25A1}';
const GLYPH_DAMAGED: char = '*';
const GLYPH_SUNK: char = '\u{2715}';

/// Render the board as a column-headed grid, one glyph per cell: water,
/// intact vessel cell, destroyed cell of a floating vessel, or sunk vessel.
pub fn render(board: &Board) -> String {
    let mut out = String::new();
    out.push_str("  ");
    for column in 0..GRID_SIZE {
        let _ = write!(out, " {} ", column);
    }
    out.push('\n');
    for row in 0..GRID_SIZE {
        let _ = write!(out, "{} ", row);
        for column in 0..GRID_SIZE {
            let glyph = match board.cell_view(row, column) {
                CellView::Water => GLYPH_WATER,
                CellView::Intact => GLYPH_INTACT,
                CellView::Damaged => GLYPH_DAMAGED,
                CellView::Sunk => GLYPH_SUNK,
            };
            let _ = write!(out, " {} ", glyph);
        }
        out.push('\n');
    }
    out.push_str("----------------------------------\n");
    out
}

/// Write the rendered board to stdout.
pub fn print_board(board: &Board) {
    print!("{}", render(board));
}
