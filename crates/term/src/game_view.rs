//! GameView: maps a [`GameSnapshot`] into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{shape_cells, GameSnapshot};
use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};
use crate::types::{GamePhase, OrderKind, PieceKind, GRID_COLS, GRID_ROWS};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// A lightweight terminal renderer for the party game.
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w,
            cell_h,
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a snapshot into an existing framebuffer.
    ///
    /// This is the allocation-free hot path. Callers can reuse a framebuffer
    /// across frames and only resize when the terminal size changes.
    pub fn render_into(&self, snap: &GameSnapshot, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Cell {
            ch: ' ',
            style: CellStyle::default(),
        });

        let board_px_w = (GRID_COLS as u16) * self.cell_w;
        let board_px_h = (GRID_ROWS as u16) * self.cell_h;
        let frame_w = board_px_w + 2;
        let frame_h = board_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
            AnchorY::Top => 0,
        };

        let bg = CellStyle {
            fg: Rgb::new(80, 80, 90),
            bg: Rgb::new(24, 26, 34),
            bold: false,
            dim: false,
        };
        let border = if snap.fever_active {
            // Fever tints the frame gold.
            CellStyle {
                fg: Rgb::new(250, 210, 90),
                bg: Rgb::new(0, 0, 0),
                bold: true,
                dim: false,
            }
        } else {
            CellStyle {
                fg: Rgb::new(200, 200, 200),
                bg: Rgb::new(0, 0, 0),
                bold: false,
                dim: false,
            }
        };

        // Background for play area.
        fb.fill_rect(start_x + 1, start_y + 1, board_px_w, board_px_h, ' ', bg);

        // Border.
        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Locked board cells.
        for y in 0..GRID_ROWS as u16 {
            for x in 0..GRID_COLS as u16 {
                let cell = snap.board[y as usize][x as usize];
                if let Some(kind) = piece_from_cell(cell) {
                    self.draw_board_cell(fb, start_x, start_y, x, y, kind);
                } else {
                    self.draw_empty_cell(fb, start_x, start_y, x, y);
                }
            }
        }

        // Ghost piece.
        let active = snap.active;
        let ghost_style = CellStyle {
            fg: Rgb::new(140, 140, 140),
            bg: Rgb::new(24, 26, 34),
            bold: false,
            dim: true,
        };
        for &(dx, dy) in shape_cells(active.kind, active.rotation).iter() {
            let x = active.x + dx;
            let y = snap.ghost_y + dy;
            if x >= 0 && x < GRID_COLS && y >= 0 && y < GRID_ROWS {
                self.fill_cell_rect(fb, start_x, start_y, x as u16, y as u16, '░', ghost_style);
            }
        }

        // Active piece (drawn over its ghost).
        for &(dx, dy) in shape_cells(active.kind, active.rotation).iter() {
            let x = active.x + dx;
            let y = active.y + dy;
            if x >= 0 && x < GRID_COLS && y >= 0 && y < GRID_ROWS {
                self.draw_board_cell(fb, start_x, start_y, x as u16, y as u16, active.kind);
            }
        }

        // Side panel (score / order / fever / next / help).
        self.draw_side_panel(fb, snap, viewport, start_x, start_y, frame_w);

        // Overlays.
        match snap.phase {
            GamePhase::Paused => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "PAUSED");
            }
            GamePhase::GameOver => {
                self.draw_overlay_text(fb, start_x, start_y, frame_w, frame_h, "GAME OVER");
            }
            GamePhase::Playing => {}
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &GameSnapshot, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, viewport, &mut fb);
        fb
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put_char(x, y, '┌', style);
        fb.put_char(x + w - 1, y, '┐', style);
        fb.put_char(x, y + h - 1, '└', style);
        fb.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put_char(x + dx, y, '─', style);
            fb.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put_char(x, y + dy, '│', style);
            fb.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_empty_cell(&self, fb: &mut FrameBuffer, start_x: u16, start_y: u16, x: u16, y: u16) {
        let style = CellStyle {
            fg: Rgb::new(90, 90, 100),
            bg: Rgb::new(24, 26, 34),
            bold: false,
            dim: true,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '·', style);
    }

    fn draw_board_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        x: u16,
        y: u16,
        kind: PieceKind,
    ) {
        let style = CellStyle {
            fg: piece_color(kind),
            bg: Rgb::new(24, 26, 34),
            bold: true,
            dim: false,
        };
        self.fill_cell_rect(fb, start_x, start_y, x, y, '█', style);
    }

    fn fill_cell_rect(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: CellStyle,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        snap: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        let panel_w = viewport.width - panel_x;
        if panel_w < 14 {
            return;
        }

        let label = CellStyle {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let value = CellStyle {
            fg: Rgb::new(200, 200, 200),
            bg: Rgb::new(0, 0, 0),
            bold: false,
            dim: false,
        };
        let fever = CellStyle {
            fg: Rgb::new(250, 210, 90),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        let dim = CellStyle { dim: true, ..value };

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        fb.put_u32(panel_x + 6, y, snap.score, value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "BEST", label);
        fb.put_u32(panel_x + 6, y, snap.best_score, value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "LEVEL", label);
        fb.put_u32(panel_x + 6, y, snap.level, value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "LINES", label);
        fb.put_u32(panel_x + 6, y, snap.lines, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ORDER", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, order_label(snap.order_kind), value);
        fb.put_str(panel_x + 7, y, "x", dim);
        fb.put_u32(panel_x + 8, y, snap.order_remaining, value);
        y = y.saturating_add(2);

        if snap.fever_active {
            fb.put_str(panel_x, y, "FEVER", fever);
            // Remaining time to one decimal, e.g. "4.3s".
            let tenths = (snap.fever_time_left * 10.0).max(0.0) as u32;
            fb.put_u32(panel_x + 6, y, tenths / 10, fever);
            fb.put_char(panel_x + 7, y, '.', fever);
            fb.put_u32(panel_x + 8, y, tenths % 10, fever);
            fb.put_char(panel_x + 9, y, 's', fever);
            y = y.saturating_add(1);
            if snap.bomb_available {
                fb.put_str(panel_x, y, "BOMB READY [x]", fever);
            } else {
                fb.put_str(panel_x, y, "BOMB USED", dim);
            }
            y = y.saturating_add(2);
        } else {
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, panel_x, y, snap.next_kind);
        y = y.saturating_add(3);

        for line in [
            "←/→ move",
            "↑   rotate",
            "↓   soft drop",
            "spc hard drop",
            "x   bomb",
            "p   pause",
            "r   restart",
            "q   quit",
        ] {
            if y >= viewport.height {
                break;
            }
            fb.put_str(panel_x, y, line, dim);
            y = y.saturating_add(1);
        }
    }

    /// Draw the next piece as a 4x2 mini grid from its base shape.
    fn draw_preview(&self, fb: &mut FrameBuffer, x: u16, y: u16, kind: PieceKind) {
        let style = CellStyle {
            fg: piece_color(kind),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        for &(dx, dy) in shape_cells(kind, 0).iter() {
            // Base shapes span dx in -1..=2 and dy in 0..=1.
            let px = x + ((dx + 1) as u16) * 2;
            let py = y + dy as u16;
            fb.put_str(px, py, "██", style);
        }
    }

    fn draw_overlay_text(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        text: &str,
    ) {
        let mid_y = start_y.saturating_add(frame_h / 2);
        let text_w = text.chars().count() as u16;
        let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
        let style = CellStyle {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
            dim: false,
        };
        fb.put_str(x, mid_y, text, style);
    }
}

fn piece_from_cell(v: u8) -> Option<PieceKind> {
    match v {
        1 => Some(PieceKind::I),
        2 => Some(PieceKind::O),
        3 => Some(PieceKind::T),
        4 => Some(PieceKind::S),
        5 => Some(PieceKind::Z),
        6 => Some(PieceKind::J),
        7 => Some(PieceKind::L),
        _ => None,
    }
}

fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 240),
        PieceKind::O => Rgb::new(240, 220, 90),
        PieceKind::T => Rgb::new(190, 120, 255),
        PieceKind::S => Rgb::new(120, 240, 160),
        PieceKind::Z => Rgb::new(255, 110, 120),
        PieceKind::J => Rgb::new(110, 160, 255),
        PieceKind::L => Rgb::new(255, 170, 90),
    }
}

fn order_label(kind: OrderKind) -> &'static str {
    match kind {
        OrderKind::Single => "SINGLE",
        OrderKind::Double => "DOUBLE",
        OrderKind::Triple => "TRIPLE",
        OrderKind::Tetris => "TETRIS",
    }
}
