//! Notification sink.
//!
//! The handlers report outcomes through the `Presenter` trait and never
//! render anything themselves. Two implementations are provided: one that
//! records notifications in memory and one that writes protocol lines.

use std::io::Write;

use serde::Serialize;
use tracing::error;

use crate::board::{Direction, UnitId};

/// Receives movement and turn outcomes.
pub trait Presenter {
    /// Called once per successful walk.
    fn notify_walk(&mut self, unit_id: UnitId, direction: Direction);

    /// Called once per turn advance with the new turn value.
    fn notify_turn(&mut self, turn: u32);

    /// Called once per failure caught at a handler boundary.
    fn notify_error(&mut self, message: &str);
}

impl<P: Presenter + ?Sized> Presenter for &mut P {
    fn notify_walk(&mut self, unit_id: UnitId, direction: Direction) {
        (**self).notify_walk(unit_id, direction);
    }

    fn notify_turn(&mut self, turn: u32) {
        (**self).notify_turn(turn);
    }

    fn notify_error(&mut self, message: &str) {
        (**self).notify_error(message);
    }
}

/// A single recorded notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Notification {
    Walk { unit_id: UnitId, direction: Direction },
    Turn { turn: u32 },
    Error { message: String },
}

/// Stores every notification in arrival order.
#[derive(Debug, Clone, Default)]
pub struct RecordingPresenter {
    pub notifications: Vec<Notification>,
}

impl RecordingPresenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(unit_id, direction)` of every walk notification.
    pub fn walks(&self) -> Vec<(UnitId, Direction)> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::Walk { unit_id, direction } => Some((*unit_id, *direction)),
                _ => None,
            })
            .collect()
    }

    pub fn turns(&self) -> Vec<u32> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::Turn { turn } => Some(*turn),
                _ => None,
            })
            .collect()
    }

    pub fn errors(&self) -> Vec<&str> {
        self.notifications
            .iter()
            .filter_map(|n| match n {
                Notification::Error { message } => Some(message.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }
}

impl Presenter for RecordingPresenter {
    fn notify_walk(&mut self, unit_id: UnitId, direction: Direction) {
        self.notifications.push(Notification::Walk { unit_id, direction });
    }

    fn notify_turn(&mut self, turn: u32) {
        self.notifications.push(Notification::Turn { turn });
    }

    fn notify_error(&mut self, message: &str) {
        self.notifications.push(Notification::Error {
            message: message.to_string(),
        });
    }
}

/// Writes one protocol line per notification and flushes after each.
///
/// Lines: `walk <id> <dx> <dy>`, `turn <n>`, `error <message>`.
pub struct TextPresenter<W: Write> {
    out: W,
}

impl<W: Write> TextPresenter<W> {
    pub fn new(out: W) -> Self {
        TextPresenter { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn emit(&mut self, line: std::fmt::Arguments<'_>) {
        let result = self
            .out
            .write_fmt(line)
            .and_then(|()| self.out.write_all(b"\n"))
            .and_then(|()| self.out.flush());
        if let Err(e) = result {
            error!(error = %e, "failed to write notification");
        }
    }
}

impl<W: Write> Presenter for TextPresenter<W> {
    fn notify_walk(&mut self, unit_id: UnitId, direction: Direction) {
        self.emit(format_args!(
            "walk {} {} {}",
            unit_id,
            direction.dx(),
            direction.dy()
        ));
    }

    fn notify_turn(&mut self, turn: u32) {
        self.emit(format_args!("turn {}", turn));
    }

    fn notify_error(&mut self, message: &str) {
        self.emit(format_args!("error {}", message));
    }
}
