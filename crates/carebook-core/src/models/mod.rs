//! Domain models for the carebook system.

mod doctor;
mod patient;
mod receipt;
mod schedule;
mod session;
mod slot;

pub use doctor::*;
pub use patient::*;
pub use receipt::*;
pub use schedule::*;
pub use session::*;
pub use slot::*;
