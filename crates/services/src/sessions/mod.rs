mod controller;

// Public API of the session subsystem.
pub use crate::error::ControllerError;
pub use controller::{Dispatched, SessionController};
