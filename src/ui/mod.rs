pub mod catalog_panel;
pub mod dialogs;
pub mod file_dialogs;
pub mod fragment_bar;
pub mod main_window;
pub mod menu;
pub mod slide_strip;
pub mod theme;
