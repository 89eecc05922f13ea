//! mindwell-support
//!
//! Everything around the screening flow: the scripted chat companion, the
//! self-help resource library, the anonymous forum and counselor booking.
//! All of it runs over fixed in-memory tables; nothing here performs I/O or
//! keeps what a user submits.

pub mod companion;
pub mod counseling;
pub mod error;
pub mod forum;
pub mod language;
pub mod resources;

mod search;
