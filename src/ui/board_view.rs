//! Board rendering for the Tic-Tac-Toe window

use egui::{Align2, Button, CornerRadius, FontId, Grid, Response, Stroke, Vec2};

use crate::{Board, Cell, Pos};

use super::theme::*;

/// Board view renders one square button per cell
pub struct BoardView {
    /// Cached cell size, recomputed every frame from the available space
    cell_size: f32,
}

impl Default for BoardView {
    fn default() -> Self {
        Self {
            cell_size: MAX_CELL_SIZE,
        }
    }
}

impl BoardView {
    /// Render the board and return click position if any
    pub fn show(
        &mut self,
        ui: &mut egui::Ui,
        board: &Board,
        last_move: Option<Pos>,
        winning_line: Option<&[Pos]>,
        locked: bool,
    ) -> Option<Pos> {
        self.fit(ui.available_size(), board);

        let mut clicked_pos = None;
        Grid::new("board_grid")
            .spacing(Vec2::splat(CELL_SPACING))
            .show(ui, |ui| {
                for (row, cells) in board.cells().enumerate() {
                    for (col, &cell) in cells.iter().enumerate() {
                        let pos = Pos::new(row, col);
                        let highlight = if winning_line.is_some_and(|line| line.contains(&pos)) {
                            Stroke::new(WIN_STROKE_WIDTH, WIN_HIGHLIGHT)
                        } else if last_move == Some(pos) {
                            Stroke::new(2.0, LAST_MOVE_MARKER)
                        } else {
                            Stroke::NONE
                        };

                        let response = self.cell_button(ui, cell, highlight, !locked);
                        if response.clicked() {
                            clicked_pos = Some(pos);
                        }
                    }
                    ui.end_row();
                }
            });

        clicked_pos
    }

    /// Size cells so the whole grid fits the available area
    fn fit(&mut self, available: Vec2, board: &Board) {
        let rows = board.rows() as f32;
        let cols = board.cols() as f32;
        let width = (available.x - CELL_SPACING * (cols - 1.0)) / cols;
        let height = (available.y - CELL_SPACING * (rows - 1.0)) / rows;
        self.cell_size = width.min(height).clamp(24.0, MAX_CELL_SIZE);
    }

    /// Draw a single cell; taken cells are disabled
    fn cell_button(
        &self,
        ui: &mut egui::Ui,
        cell: Cell,
        highlight: Stroke,
        accepting: bool,
    ) -> Response {
        let (fill, symbol) = match cell {
            Cell::Empty => (CELL_BG, None),
            Cell::Taken(symbol) => (CELL_BG_TAKEN, Some(symbol)),
        };

        let button = Button::new("")
            .min_size(Vec2::splat(self.cell_size))
            .fill(fill)
            .stroke(highlight)
            .corner_radius(CornerRadius::same(4));
        let response = ui.add_enabled(accepting && cell.is_empty(), button);

        // Symbol on top of the button, unfaded when disabled
        if let Some(symbol) = symbol {
            ui.painter().text(
                response.rect.center(),
                Align2::CENTER_CENTER,
                symbol.to_string(),
                FontId::proportional(self.cell_size * SYMBOL_SIZE_RATIO),
                CELL_SYMBOL,
            );
        }

        response
    }
}
