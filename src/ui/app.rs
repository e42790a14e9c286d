//! Main application for the Tic-Tac-Toe window

use std::time::Instant;

use eframe::egui;
use egui::{
    Align2, CentralPanel, Context, CornerRadius, Frame, RichText, SidePanel, TopBottomPanel, Vec2,
    ViewportCommand, Window,
};

use super::board_view::BoardView;
use super::game_state::{AiState, GameState};
use super::theme::*;

/// Main Tic-Tac-Toe application
pub struct TicTacToeApp {
    state: GameState,
    board_view: BoardView,
    show_debug: bool,
}

impl TicTacToeApp {
    pub fn new(_cc: &eframe::CreationContext<'_>, state: GameState) -> Self {
        Self {
            state,
            board_view: BoardView::default(),
            show_debug: false,
        }
    }

    /// Render the top bar with the mode switch
    fn render_menu_bar(&mut self, ctx: &Context) {
        TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new("TIC-TAC-TOE").size(18.0).strong().color(TEXT_PRIMARY));

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let label = if self.state.is_vs_ai() {
                        "Switch to Human vs Human"
                    } else {
                        "Switch to Human vs AI"
                    };
                    if ui.button(label).clicked() {
                        self.state.toggle_mode();
                    }
                    ui.checkbox(&mut self.show_debug, "Debug (D)");
                });
            });
        });
    }

    /// Render the side panel with status, scores and debug
    fn render_side_panel(&mut self, ctx: &Context) {
        SidePanel::right("info_panel")
            .min_width(220.0)
            .max_width(260.0)
            .frame(Frame::new().fill(PANEL_BG).inner_margin(10.0))
            .show(ctx, |ui| {
                ui.add_space(12.0);
                self.render_status_card(ui);
                ui.add_space(10.0);
                self.render_score_card(ui);

                if self.show_debug {
                    ui.add_space(10.0);
                    self.render_debug_card(ui);
                }

                if let Some(msg) = &self.state.message {
                    ui.add_space(10.0);
                    Self::render_message_card(ui, msg);
                }
            });
    }

    /// Helper to create a card frame
    fn card_frame() -> Frame {
        Frame::new()
            .fill(CARD_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(12.0)
    }

    fn render_status_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            let mode = if self.state.is_vs_ai() { "HUMAN VS AI" } else { "HUMAN VS HUMAN" };
            ui.label(RichText::new(mode).size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            let color = if self.state.is_game_over() {
                WIN_HIGHLIGHT
            } else if self.state.is_ai_busy() {
                STATUS_WAITING
            } else {
                STATUS_NORMAL
            };
            ui.label(RichText::new(self.state.status_text()).size(18.0).strong().color(color));

            if matches!(self.state.ai_state, AiState::Thinking { .. }) {
                ui.label(RichText::new("AI thinking...").size(11.0).color(TEXT_SECONDARY));
            }
        });
    }

    fn render_score_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("SCORES").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);
            ui.label(RichText::new(self.state.score_text()).size(14.0).color(TEXT_PRIMARY));
        });
    }

    fn render_debug_card(&self, ui: &mut egui::Ui) {
        Self::card_frame().show(ui, |ui| {
            ui.label(RichText::new("AI DEBUG").size(10.0).color(TEXT_MUTED));
            ui.add_space(6.0);

            match &self.state.last_ai_result {
                Some(result) => {
                    ui.label(
                        RichText::new(format!("{:?} depth {}", result.search_type, result.depth))
                            .size(11.0)
                            .strong()
                            .color(STATUS_NORMAL),
                    );
                    ui.label(
                        RichText::new(format!("Score: {}", result.score))
                            .size(10.0)
                            .color(TEXT_SECONDARY),
                    );
                    ui.label(
                        RichText::new(format!("{} nodes, {}ms", result.nodes, result.time_ms))
                            .size(10.0)
                            .color(TEXT_MUTED),
                    );
                    if let Some(pos) = result.best_move {
                        ui.label(
                            RichText::new(format!("-> {pos}"))
                                .size(12.0)
                                .strong()
                                .color(WIN_HIGHLIGHT),
                        );
                    }
                }
                None => {
                    ui.label(RichText::new("No AI move yet").size(10.0).color(TEXT_MUTED));
                }
            }
        });
    }

    fn render_message_card(ui: &mut egui::Ui, msg: &str) {
        Frame::new()
            .fill(MESSAGE_BG)
            .corner_radius(CornerRadius::same(8))
            .inner_margin(10.0)
            .show(ui, |ui| {
                ui.label(RichText::new(msg).size(11.0).color(TEXT_PRIMARY));
            });
    }

    /// Render the main board
    fn render_board(&mut self, ctx: &Context) {
        CentralPanel::default()
            .frame(Frame::new().fill(BOARD_AREA_BG).inner_margin(20.0))
            .show(ctx, |ui| {
                let winning_line = self.state.round.winning_line();
                let locked = self.state.is_game_over()
                    || self.state.is_ai_busy()
                    || self.state.round.is_ai_turn();

                let clicked = self.board_view.show(
                    ui,
                    self.state.round.board(),
                    self.state.round.last_move(),
                    winning_line.as_deref(),
                    locked,
                );

                if let Some(pos) = clicked {
                    if let Err(msg) = self.state.try_place(pos) {
                        self.state.message = Some(msg);
                    }
                }
            });
    }

    /// Modal shown once the round has ended
    fn render_game_over(&mut self, ctx: &Context) {
        if !self.state.is_game_over() {
            return;
        }

        Window::new("Game Over")
            .collapsible(false)
            .resizable(false)
            .anchor(Align2::CENTER_CENTER, Vec2::ZERO)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.label(
                        RichText::new(self.state.status_text())
                            .size(20.0)
                            .strong()
                            .color(WIN_HIGHLIGHT),
                    );
                    ui.add_space(8.0);
                    ui.label(RichText::new("Scores:").size(12.0).color(TEXT_SECONDARY));
                    ui.label(RichText::new(self.state.score_text()).size(14.0).color(TEXT_PRIMARY));
                    ui.add_space(8.0);
                    ui.label("Do you want to play again?");
                    ui.add_space(8.0);

                    ui.horizontal(|ui| {
                        if ui.button("Play again").clicked() {
                            self.state.play_again();
                        }
                        if ui.button("Quit").clicked() {
                            ctx.send_viewport_cmd(ViewportCommand::Close);
                        }
                    });
                });
            });
    }

    /// Handle keyboard shortcuts
    fn handle_input(&mut self, ctx: &Context) {
        ctx.input(|i| {
            // D - Toggle debug panel
            if i.key_pressed(egui::Key::D) {
                self.show_debug = !self.show_debug;
            }

            // M - Switch mode
            if i.key_pressed(egui::Key::M) {
                self.state.toggle_mode();
            }

            // N - New round
            if i.key_pressed(egui::Key::N) {
                self.state.play_again();
            }
        });
    }
}

impl eframe::App for TicTacToeApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.handle_input(ctx);

        let now = Instant::now();
        self.state.poll_ai(now);

        self.render_menu_bar(ctx);
        self.render_side_panel(ctx);
        self.render_board(ctx);
        self.render_game_over(ctx);

        // Wake up for the scheduled AI move or its reply
        match self.state.ai_wait_remaining(now) {
            Some(remaining) => ctx.request_repaint_after(remaining),
            None if self.state.is_ai_busy() => ctx.request_repaint(),
            None => {}
        }
    }
}
