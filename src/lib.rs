//! SlidePad - a minimalist Markdown slide-deck presenter.
//!
//! The `app::deck` module is the windowing-free core: slide registry, active
//! slide tracking, fragment synchronization and keyboard dispatch. The `ui`
//! module binds that core to FLTK widgets. `app::state` ties both together
//! behind the message channel drained by the dispatch loop in `main`.

pub mod app;
pub mod ui;

// Re-exports for convenient external access
pub use app::deck::fragment::{FragmentStore, parse_fragment};
pub use app::deck::keys::{KeyCommand, KeyContext, NavKey};
pub use app::deck::navigation::{NavOutcome, NavigationController};
pub use app::deck::registrar::SlideRegistrar;
pub use app::deck::registry::{SlideId, SlideRegistry};
pub use app::deck::surface::PresentationSurface;
pub use app::error::{AppError, DeckError};
pub use app::messages::Message;
pub use app::settings::{AppSettings, ThemeMode};
