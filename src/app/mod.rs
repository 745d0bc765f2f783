//! Application layer.
//!
//! - `deck/` - the slide-deck state machine (no FLTK dependency)
//! - `deck_file.rs` - Markdown deck parsing and plain-text rendering
//! - `catalog.rs` - remote deck-catalog client
//! - `state.rs` - main application coordinator

pub mod catalog;
pub mod deck;
pub mod deck_file;
pub mod error;
pub mod messages;
pub mod platform;
pub mod settings;
pub mod state;
