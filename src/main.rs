use fltk::{
    app,
    enums::{Event, Key, Shortcut},
    input::Input,
    prelude::*,
};

use slide_pad::app::deck::keys::{self, KeyContext, NavKey};
use slide_pad::app::messages::Message;
use slide_pad::app::platform::detect_system_dark_mode;
use slide_pad::app::settings::{AppSettings, ThemeMode};
use slide_pad::app::state::AppState;
use slide_pad::ui::dialogs::about::show_about_dialog;
use slide_pad::ui::main_window::build_main_window;
use slide_pad::ui::menu::build_menu;

fn main() {
    let settings = AppSettings::load();
    let dark_mode = match settings.theme_mode {
        ThemeMode::Light => false,
        ThemeMode::Dark => true,
        ThemeMode::SystemDefault => detect_system_dark_mode(),
    };

    let app = app::App::default();
    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(&sender);
    build_menu(&mut widgets.menu, &sender, &settings, dark_mode);

    // Global key hook: the sole driver of navigation once the deck loads.
    // Consuming a handled event is what keeps e.g. Space from scrolling.
    {
        let s = sender;
        let catalog_input = widgets.catalog.input_handle();
        widgets.wind.handle(move |_, event| {
            if event != Event::KeyDown {
                return false;
            }
            let Some(key) = translate_key(app::event_key()) else {
                return false;
            };
            match keys::dispatch(key, key_context(&catalog_input)) {
                Some(command) => {
                    s.send(Message::Nav(command));
                    true
                }
                None => false,
            }
        });
    }

    let mut state = AppState::new(widgets, settings, dark_mode);

    let (deck_path, pending_fragment) = parse_cli_arg(std::env::args().nth(1));
    match deck_path {
        Some(path) => state.open_deck_path(&path, pending_fragment),
        None => state.load_welcome_deck(),
    }

    state.window.show();

    while app.wait() {
        if let Some(msg) = receiver.recv() {
            match msg {
                Message::DeckOpen => state.open_deck(),
                Message::DeckReload => state.reload_deck(),
                Message::Quit => app.quit(),
                Message::Nav(command) => state.handle_nav(command),
                Message::ShowGoToSlide => state.show_goto_slide(),
                Message::ToggleDarkMode => state.toggle_dark_mode(),
                Message::ToggleAddressBar => state.toggle_address_bar(),
                Message::ToggleCatalog => state.toggle_catalog(),
                Message::CatalogRefresh => state.catalog_refresh(),
                Message::CatalogPublish => state.catalog_publish(),
                Message::CatalogDelete => state.catalog_delete(),
                Message::ShowAbout => show_about_dialog(),
            }
        }
    }
}

/// `deck.md#2` deep-links position 2. Everything after the last `#` is the
/// fragment, kept as a raw string for the explicit parse at registration.
fn parse_cli_arg(arg: Option<String>) -> (Option<String>, Option<String>) {
    match arg {
        None => (None, None),
        Some(raw) => match raw.rsplit_once('#') {
            Some((path, fragment)) => (Some(path.to_string()), Some(fragment.to_string())),
            None => (Some(raw), None),
        },
    }
}

fn translate_key(key: Key) -> Option<NavKey> {
    let nav = match key {
        k if k == Key::Home => NavKey::Home,
        k if k == Key::End => NavKey::End,
        k if k == Key::Left => NavKey::Left,
        k if k == Key::Right => NavKey::Right,
        k if k == Key::Up => NavKey::Up,
        k if k == Key::Down => NavKey::Down,
        k if k == Key::PageUp => NavKey::PageUp,
        k if k == Key::PageDown => NavKey::PageDown,
        k if k == Key::BackSpace => NavKey::Backspace,
        k if k == Key::from_char(' ') => NavKey::Space,
        _ => return None,
    };
    Some(nav)
}

fn key_context(catalog_input: &Input) -> KeyContext {
    let modifiers = app::event_state();
    KeyContext {
        editable_focus: app::focus()
            .is_some_and(|f| f.as_widget_ptr() == catalog_input.as_widget_ptr()),
        alt: modifiers.contains(Shortcut::Alt),
        ctrl: modifiers.contains(Shortcut::Ctrl),
        shift: modifiers.contains(Shortcut::Shift),
        meta: modifiers.contains(Shortcut::Meta),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_cli_arg;

    #[test]
    fn test_parse_cli_arg_with_fragment() {
        let (path, fragment) = parse_cli_arg(Some("deck.md#2".to_string()));
        assert_eq!(path.as_deref(), Some("deck.md"));
        assert_eq!(fragment.as_deref(), Some("2"));
    }

    #[test]
    fn test_parse_cli_arg_plain_path() {
        let (path, fragment) = parse_cli_arg(Some("deck.md".to_string()));
        assert_eq!(path.as_deref(), Some("deck.md"));
        assert_eq!(fragment, None);
    }

    #[test]
    fn test_parse_cli_arg_absent() {
        assert_eq!(parse_cli_arg(None), (None, None));
    }
}
