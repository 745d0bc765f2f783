use std::cell::Cell;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::rc::Rc;

use fltk::{dialog, group::Flex, menu::MenuBar, prelude::*, text::TextDisplay, window::Window};

use super::catalog::CatalogClient;
use super::deck::fragment::FragmentStore;
use super::deck::keys::KeyCommand;
use super::deck::navigation::{NavOutcome, NavigationController};
use super::deck::registrar::SlideRegistrar;
use super::deck::registry::{SlideId, SlideRegistry};
use super::deck_file::{self, SlideSection, parse_deck, render_plain};
use super::error::{DeckError, Result};
use super::settings::{AppSettings, ThemeMode};
use crate::ui::catalog_panel::{CATALOG_PANEL_WIDTH, CatalogPanel};
use crate::ui::dialogs::goto_slide::show_goto_slide_dialog;
use crate::ui::file_dialogs::native_open_dialog;
use crate::ui::fragment_bar::{ADDRESS_BAR_HEIGHT, FragmentBar};
use crate::ui::main_window::MainWidgets;
use crate::ui::slide_strip::{SlideStrip, SlideSurface};
use crate::ui::theme::apply_theme;

pub struct AppState {
    pub registry: SlideRegistry,
    pub controller: NavigationController,
    registrar: SlideRegistrar,
    pub fragment: FragmentBar,
    pub strip: SlideStrip,
    pub display: TextDisplay,
    pub window: Window,
    pub menu: MenuBar,
    pub flex: Flex,
    pub content_row: Flex,
    pub catalog: CatalogPanel,
    pub settings: AppSettings,
    pub dark_mode: bool,
    /// Shared with every slide surface so recoloring stays in step with the
    /// current theme.
    dark_flag: Rc<Cell<bool>>,
    deck_title: String,
    deck_path: Option<String>,
    catalog_visible: bool,
}

impl AppState {
    pub fn new(widgets: MainWidgets, settings: AppSettings, dark_mode: bool) -> Self {
        let MainWidgets {
            wind,
            flex,
            menu,
            strip,
            content_row,
            display,
            address_frame,
            catalog,
        } = widgets;

        let fragment = FragmentBar::new(address_frame, None);
        let registrar = SlideRegistrar::new(&fragment);

        let mut state = Self {
            registry: SlideRegistry::new(),
            controller: NavigationController::new(),
            registrar,
            fragment,
            strip,
            display,
            window: wind,
            menu,
            flex,
            content_row,
            catalog,
            settings,
            dark_mode,
            dark_flag: Rc::new(Cell::new(dark_mode)),
            deck_title: String::new(),
            deck_path: None,
            catalog_visible: false,
        };
        state.apply_view_settings();
        state
    }

    fn apply_view_settings(&mut self) {
        self.display.set_text_size(self.settings.font_size as i32);
        apply_theme(
            &mut self.display,
            &mut self.window,
            &mut self.menu,
            self.fragment.frame_mut(),
            self.dark_mode,
        );
        self.strip.apply_theme(self.dark_mode);
        if !self.settings.show_address_bar {
            self.flex.fixed(self.fragment.frame(), 0);
            self.fragment.frame_mut().hide();
            self.flex.recalc();
        }
    }

    // --- Deck loading ---

    pub fn load_welcome_deck(&mut self) {
        if let Err(e) = self.load_deck("Welcome".to_string(), None, deck_file::WELCOME_DECK, None) {
            dialog::alert_default(&format!("Error loading built-in deck: {}", e));
        }
    }

    pub fn open_deck(&mut self) {
        if let Some(path) = native_open_dialog() {
            self.open_deck_path(&path, None);
        }
    }

    pub fn open_deck_path(&mut self, path: &str, pending_fragment: Option<String>) {
        match fs::read_to_string(path) {
            Ok(source) => {
                let title = deck_display_name(path);
                if let Err(e) =
                    self.load_deck(title, Some(path.to_string()), &source, pending_fragment)
                {
                    dialog::alert_default(&format!("Error loading deck: {}", e));
                }
            }
            Err(e) => dialog::alert_default(&format!("Error opening deck: {}", e)),
        }
    }

    /// Re-read the current deck from disk. The current fragment is handed
    /// back in as the pending value, so the position survives the reload the
    /// same way a deep link would.
    pub fn reload_deck(&mut self) {
        let Some(path) = self.deck_path.clone() else {
            return;
        };
        let pending = self.fragment.read();
        self.open_deck_path(&path, pending);
    }

    fn load_deck(
        &mut self,
        title: String,
        path: Option<String>,
        source: &str,
        pending_fragment: Option<String>,
    ) -> Result<()> {
        let sections = parse_deck(source);
        if sections.is_empty() {
            return Err(DeckError::EmptyDeck.into());
        }
        check_assigned_ids(&sections)?;

        // Drop the old deck's surfaces before their strip cells go away.
        self.registry = SlideRegistry::new();
        self.controller = NavigationController::new();
        self.strip.clear();

        // Order matters: the registrar snapshots the pending fragment at
        // construction.
        self.fragment.reset(pending_fragment);
        self.registrar = SlideRegistrar::new(&self.fragment);

        for (position, section) in sections.iter().enumerate() {
            let mut cell = self.strip.add_cell(position + 1, self.dark_mode);
            let surface = SlideSurface::new(
                cell.clone(),
                self.display.clone(),
                render_plain(&section.body),
                self.dark_flag.clone(),
            );
            let id = self.registrar.register(
                &mut self.registry,
                &mut self.controller,
                &mut self.fragment,
                section.id.as_deref(),
                Box::new(surface),
            )?;
            cell.set_tooltip(id.as_str());
        }

        self.deck_title = title;
        self.deck_path = path;
        self.update_window_title();
        Ok(())
    }

    // --- Navigation ---

    pub fn handle_nav(&mut self, command: KeyCommand) {
        let outcome = match command {
            KeyCommand::Next => self
                .controller
                .next_slide(&mut self.registry, &mut self.fragment),
            KeyCommand::Prev => self
                .controller
                .prev_slide(&mut self.registry, &mut self.fragment),
            KeyCommand::First => self
                .controller
                .first_slide(&mut self.registry, &mut self.fragment),
            KeyCommand::Last => self
                .controller
                .last_slide(&mut self.registry, &mut self.fragment),
        };
        if let NavOutcome::Shown { .. } = outcome {
            self.update_window_title();
        }
    }

    pub fn show_goto_slide(&mut self) {
        if let Some(position) = show_goto_slide_dialog(self.registry.len()) {
            self.show_at(position);
        }
    }

    fn show_at(&mut self, position: usize) {
        if let Some(id) = self.registry.id_at(position).cloned() {
            self.controller
                .show_slide(&mut self.registry, &mut self.fragment, &id);
            self.update_window_title();
        }
    }

    pub fn update_window_title(&mut self) {
        let label = match self.controller.active_position(&self.registry) {
            Some(position) => format!(
                "{} ({}/{}) - SlidePad",
                self.deck_title,
                position + 1,
                self.registry.len()
            ),
            None => format!("{} - SlidePad", self.deck_title),
        };
        self.window.set_label(&label);
    }

    // --- View toggles ---

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
        self.dark_flag.set(self.dark_mode);
        apply_theme(
            &mut self.display,
            &mut self.window,
            &mut self.menu,
            self.fragment.frame_mut(),
            self.dark_mode,
        );
        self.strip.apply_theme(self.dark_mode);
        // The recolor flattened the active cell; re-activate to restore it.
        if let Some(position) = self.controller.active_position(&self.registry)
            && let Some(surface) = self.registry.surface_mut_at(position)
        {
            surface.activate();
        }

        self.settings.theme_mode = if self.dark_mode {
            ThemeMode::Dark
        } else {
            ThemeMode::Light
        };
        let _ = self.settings.save();
    }

    pub fn toggle_address_bar(&mut self) {
        self.settings.show_address_bar = !self.settings.show_address_bar;
        if self.settings.show_address_bar {
            self.fragment.frame_mut().show();
            self.flex.fixed(self.fragment.frame(), ADDRESS_BAR_HEIGHT);
        } else {
            self.fragment.frame_mut().hide();
            self.flex.fixed(self.fragment.frame(), 0);
        }
        self.flex.recalc();
        self.window.redraw();
        let _ = self.settings.save();
    }

    pub fn toggle_catalog(&mut self) {
        if self.settings.catalog_url.is_none() {
            dialog::message_default(
                "Set catalog_url in settings.json to enable the catalog panel.",
            );
            self.set_menu_checked("View/Toggle Catalog Panel", false);
            return;
        }
        self.catalog_visible = !self.catalog_visible;
        if self.catalog_visible {
            self.catalog.widget_mut().show();
            self.content_row.fixed(self.catalog.widget(), CATALOG_PANEL_WIDTH);
        } else {
            self.catalog.widget_mut().hide();
            self.content_row.fixed(self.catalog.widget(), 0);
        }
        self.content_row.recalc();
        self.window.redraw();
        if self.catalog_visible {
            self.catalog_refresh();
        }
    }

    fn set_menu_checked(&self, path: &str, checked: bool) {
        let idx = self.menu.find_index(path);
        if idx >= 0
            && let Some(mut item) = self.menu.at(idx)
        {
            if checked {
                item.set();
            } else {
                item.clear();
            }
        }
    }

    // --- Catalog ---

    fn catalog_client(&self) -> Option<CatalogClient> {
        self.settings.catalog_url.as_deref().map(CatalogClient::new)
    }

    pub fn catalog_refresh(&mut self) {
        let Some(client) = self.catalog_client() else {
            return;
        };
        match client.list() {
            Ok(entries) => self.catalog.set_entries(entries),
            Err(e) => dialog::alert_default(&format!("Catalog refresh failed: {}", e)),
        }
    }

    pub fn catalog_publish(&mut self) {
        let Some(client) = self.catalog_client() else {
            return;
        };
        let title = self.catalog.title_input();
        if title.is_empty() {
            dialog::message_default("Enter a title to publish");
            return;
        }
        match client.create(&title) {
            Ok(()) => {
                self.catalog.clear_title_input();
                // Always re-fetch the collection after a mutation.
                self.catalog_refresh();
            }
            Err(e) => dialog::alert_default(&format!("Publish failed: {}", e)),
        }
    }

    pub fn catalog_delete(&mut self) {
        let Some(client) = self.catalog_client() else {
            return;
        };
        let Some(entry) = self.catalog.selected() else {
            dialog::message_default("Select a catalog entry to delete");
            return;
        };
        match client.delete(&entry.id) {
            Ok(()) => self.catalog_refresh(),
            Err(e) => dialog::alert_default(&format!("Delete failed: {}", e)),
        }
    }
}

fn deck_display_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}

/// Assign identifiers the way the registrar will (explicit names verbatim,
/// `slide-N` for unnamed sections) and fail on a clash, so a bad deck file
/// is rejected before the current deck is torn down.
fn check_assigned_ids(sections: &[SlideSection]) -> std::result::Result<(), DeckError> {
    let mut seen = HashSet::new();
    let mut generated = 0u64;
    for section in sections {
        let id = match &section.id {
            Some(name) => name.clone(),
            None => {
                generated += 1;
                format!("slide-{generated}")
            }
        };
        if !seen.insert(id.clone()) {
            return Err(DeckError::DuplicateSlide(SlideId::from(id)));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(id: Option<&str>) -> SlideSection {
        SlideSection {
            id: id.map(str::to_string),
            body: String::new(),
        }
    }

    #[test]
    fn test_check_assigned_ids_accepts_unique() {
        let sections = vec![section(Some("a")), section(None), section(Some("b"))];
        assert!(check_assigned_ids(&sections).is_ok());
    }

    #[test]
    fn test_check_assigned_ids_rejects_explicit_duplicate() {
        let sections = vec![section(Some("a")), section(Some("a"))];
        assert_eq!(
            check_assigned_ids(&sections).unwrap_err(),
            DeckError::DuplicateSlide(SlideId::from("a"))
        );
    }

    #[test]
    fn test_check_assigned_ids_rejects_generated_clash() {
        // An unnamed section takes "slide-1"; an explicit "slide-1" clashes.
        let sections = vec![section(None), section(Some("slide-1"))];
        assert!(check_assigned_ids(&sections).is_err());
    }

    #[test]
    fn test_deck_display_name() {
        assert_eq!(deck_display_name("/tmp/talks/demo.md"), "demo.md");
        assert_eq!(deck_display_name("demo.md"), "demo.md");
    }
}
