use super::deck::keys::KeyCommand;

/// All messages that can be sent through the FLTK channel.
/// Menu callbacks and the window key hook send these; the dispatch loop in
/// main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // File
    DeckOpen,
    DeckReload,
    Quit,

    // Navigation
    Nav(KeyCommand),
    ShowGoToSlide,

    // View
    ToggleDarkMode,
    ToggleAddressBar,
    ToggleCatalog,

    // Catalog panel
    CatalogRefresh,
    CatalogPublish,
    CatalogDelete,

    // Help
    ShowAbout,
}
