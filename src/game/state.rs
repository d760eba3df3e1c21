use std::time::Duration;

use bevy::prelude::*;

use super::game_logic::board::Board;
use super::game_logic::{Mark, Outcome};
use super::grid::Cell;

// Seconds between visibility flips of the preview mark
pub const BLINK_INTERVAL: f32 = 0.5;

pub struct PreviewBlink {
    visible: bool,
    timer: Timer,
}

impl Default for PreviewBlink {
    fn default() -> Self {
        PreviewBlink {
            visible: true,
            timer: Timer::from_seconds(BLINK_INTERVAL, TimerMode::Repeating),
        }
    }
}

impl PreviewBlink {
    pub fn visible(&self) -> bool {
        self.visible
    }

    // flips visibility each time the countdown runs out, at most once per frame
    pub fn advance(&mut self, delta: Duration) {
        self.timer.tick(delta);
        if self.timer.just_finished() {
            self.visible = !self.visible;
        }
    }

    // a fresh hover target is shown immediately, with the full delay ahead of it
    pub fn restart(&mut self) {
        self.visible = true;
        self.timer.reset();
    }
}

/// All mutable state of one round. Input systems translate pointer events
/// into calls on this resource; a fresh round is a fresh `Session::default()`.
#[derive(Resource, Default)]
pub struct Session {
    board: Board,
    active_mark: ActiveMark,
    hovered: Option<Cell>,
    armed: Option<Cell>,
    preview: PreviewBlink,
}

// newtype so the starting player can default to a random pick
pub struct ActiveMark(Mark);

impl Default for ActiveMark {
    fn default() -> Self {
        ActiveMark(Mark::random())
    }
}

impl Session {
    #[cfg(test)]
    fn starting(mark: Mark) -> Self {
        Session {
            active_mark: ActiveMark(mark),
            ..default()
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active_mark(&self) -> Mark {
        self.active_mark.0
    }

    pub fn hovered(&self) -> Option<Cell> {
        self.hovered
    }

    // hovering a new cell restarts the blink cycle; staying on the same cell
    // leaves it running
    pub fn pointer_moved(&mut self, cell: Cell) {
        if self.hovered != Some(cell) {
            self.hovered = Some(cell);
            self.preview.restart();
        }
    }

    // a placement only commits on the armed cell, so dragging off a cell
    // before releasing cancels the click
    pub fn press(&mut self) {
        self.armed = self.hovered;
    }

    /// Commits a placement if the pointer is still on the armed cell. On
    /// success the active mark toggles and the placed cell and mark are handed
    /// back for the renderer; every rejection is a silent no-op that consumes
    /// no turn.
    pub fn release(&mut self) -> Option<(Cell, Mark)> {
        let armed = self.armed.take();
        let cell = self.hovered?;
        if armed != Some(cell) {
            return None;
        }

        let mark = self.active_mark.0;
        if !self.board.place(cell, mark) {
            warn!("cell {:?} is already occupied", cell);
            return None;
        }
        self.active_mark = ActiveMark(mark.opponent());
        Some((cell, mark))
    }

    pub fn advance_blink(&mut self, delta: Duration) {
        self.preview.advance(delta);
    }

    // where the preview mark should be drawn this frame: the hovered cell, as
    // long as it is empty and the blink phase is on
    pub fn preview_cell(&self) -> Option<Cell> {
        let cell = self.hovered?;
        if self.preview.visible() && self.board.cell(cell).is_none() {
            Some(cell)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn click(session: &mut Session, cell: Cell) -> Option<(Cell, Mark)> {
        session.pointer_moved(cell);
        session.press();
        session.release()
    }

    #[test]
    fn fresh_session_is_an_empty_round() {
        let session = Session::default();
        assert_eq!(session.board().placed(), 0);
        assert_eq!(session.board().outcome(), Outcome::InProgress);
        assert_eq!(session.hovered(), None);
        assert_eq!(session.preview_cell(), None);
    }

    #[test]
    fn marks_alternate_from_the_starting_player() {
        let mut session = Session::starting(Mark::O);
        assert_eq!(session.active_mark(), Mark::O);

        assert_eq!(
            click(&mut session, Cell::TopLeft),
            Some((Cell::TopLeft, Mark::O))
        );
        assert_eq!(session.active_mark(), Mark::X);

        assert_eq!(
            click(&mut session, Cell::MiddleMiddle),
            Some((Cell::MiddleMiddle, Mark::X))
        );
        assert_eq!(session.active_mark(), Mark::O);
    }

    #[test]
    fn occupied_cells_consume_no_turn() {
        let mut session = Session::starting(Mark::X);
        assert!(click(&mut session, Cell::TopLeft).is_some());
        assert_eq!(click(&mut session, Cell::TopLeft), None);
        assert_eq!(session.active_mark(), Mark::O);
        assert_eq!(session.board().placed(), 1);
        assert_eq!(session.board().cell(Cell::TopLeft), Some(Mark::X));
    }

    #[test]
    fn dragging_off_the_pressed_cell_cancels_the_click() {
        let mut session = Session::starting(Mark::X);
        session.pointer_moved(Cell::MiddleLeft);
        session.press();
        session.pointer_moved(Cell::BottomLeft);
        assert_eq!(session.release(), None);
        assert_eq!(session.board().cell(Cell::MiddleLeft), None);
        assert_eq!(session.board().cell(Cell::BottomLeft), None);
        assert_eq!(session.board().placed(), 0);
    }

    #[test]
    fn a_release_without_a_press_does_not_place() {
        let mut session = Session::starting(Mark::X);
        session.pointer_moved(Cell::TopRight);
        assert_eq!(session.release(), None);
        assert_eq!(session.board().placed(), 0);
    }

    #[test]
    fn filling_the_top_row_ends_the_round() {
        let mut session = Session::starting(Mark::X);
        for cell in [
            Cell::TopLeft,
            Cell::MiddleMiddle,
            Cell::TopMiddle,
            Cell::MiddleRight,
        ] {
            assert!(click(&mut session, cell).is_some());
            assert_eq!(session.board().outcome(), Outcome::InProgress);
        }
        assert_eq!(
            click(&mut session, Cell::TopRight),
            Some((Cell::TopRight, Mark::X))
        );
        assert_eq!(session.board().outcome(), Outcome::Won(Mark::X));
    }

    #[test]
    fn preview_follows_the_hover_and_skips_occupied_cells() {
        let mut session = Session::starting(Mark::X);
        session.pointer_moved(Cell::MiddleMiddle);
        assert_eq!(session.preview_cell(), Some(Cell::MiddleMiddle));

        assert!(click(&mut session, Cell::MiddleMiddle).is_some());
        assert_eq!(session.preview_cell(), None);

        session.pointer_moved(Cell::TopLeft);
        assert_eq!(session.preview_cell(), Some(Cell::TopLeft));
    }

    #[test]
    fn blink_flips_visibility_every_interval() {
        let mut blink = PreviewBlink::default();
        let interval = Duration::from_secs_f32(BLINK_INTERVAL);

        assert!(blink.visible());
        blink.advance(interval);
        assert!(!blink.visible());
        blink.advance(interval);
        assert!(blink.visible());
    }

    #[test]
    fn blink_holds_steady_between_intervals() {
        let mut blink = PreviewBlink::default();
        blink.advance(Duration::from_secs_f32(BLINK_INTERVAL * 0.4));
        assert!(blink.visible());
        blink.advance(Duration::from_secs_f32(BLINK_INTERVAL * 0.4));
        assert!(blink.visible());
        blink.advance(Duration::from_secs_f32(BLINK_INTERVAL * 0.4));
        assert!(!blink.visible());
    }

    #[test]
    fn hover_change_restarts_the_blink_cycle() {
        let mut session = Session::starting(Mark::X);
        session.pointer_moved(Cell::TopLeft);
        session.advance_blink(Duration::from_secs_f32(BLINK_INTERVAL));
        assert_eq!(session.preview_cell(), None);

        // moving to a new cell makes the preview visible again immediately
        session.pointer_moved(Cell::TopMiddle);
        assert_eq!(session.preview_cell(), Some(Cell::TopMiddle));

        // staying on the same cell does not restart the countdown
        session.pointer_moved(Cell::TopMiddle);
        session.advance_blink(Duration::from_secs_f32(BLINK_INTERVAL));
        assert_eq!(session.preview_cell(), None);
    }
}
