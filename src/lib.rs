//! Tilewalk rules library.
//!
//! Exposes the board model, the movement and turn handlers, the presenter
//! interface, and the protocol and simulation modules used by the binaries
//! and integration tests.

pub mod board;
pub mod handler;
pub mod logging;
pub mod presenter;
pub mod protocol;
pub mod session;
pub mod wander;
