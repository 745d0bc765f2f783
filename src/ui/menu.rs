use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::deck::keys::KeyCommand;
use crate::app::messages::Message;
use crate::app::settings::AppSettings;

pub fn build_menu(
    menu: &mut MenuBar,
    sender: &Sender<Message>,
    settings: &AppSettings,
    initial_dark_mode: bool,
) {
    let s = sender;

    // File
    menu.add("File/Open Deck...", Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::DeckOpen) });
    menu.add("File/Reload", Shortcut::Ctrl | 'r', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::DeckReload) });
    menu.add("File/Quit", Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Navigate - the bare keys are handled by the window hook so they stay
    // suppressible; the menu entries mirror them without shortcuts.
    menu.add("Navigate/Next Slide", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Nav(KeyCommand::Next)) });
    menu.add("Navigate/Previous Slide", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Nav(KeyCommand::Prev)) });
    menu.add("Navigate/First Slide", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Nav(KeyCommand::First)) });
    menu.add("Navigate/Last Slide", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Nav(KeyCommand::Last)) });
    menu.add("Navigate/Go To Slide...", Shortcut::Ctrl | 'g', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowGoToSlide) });

    // View
    let dm_flag = if initial_dark_mode { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Dark Mode", Shortcut::None, dm_flag, { let s = *s; move |_| s.send(Message::ToggleDarkMode) });
    let ab_flag = if settings.show_address_bar { MenuFlag::Toggle | MenuFlag::Value } else { MenuFlag::Toggle };
    menu.add("View/Toggle Address Bar", Shortcut::None, ab_flag, { let s = *s; move |_| s.send(Message::ToggleAddressBar) });
    menu.add("View/Toggle Catalog Panel", Shortcut::Ctrl | 'l', MenuFlag::Toggle, { let s = *s; move |_| s.send(Message::ToggleCatalog) });

    // Help
    menu.add("Help/About SlidePad", Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
