use fltk::{
    app::Sender,
    browser::HoldBrowser,
    button::Button,
    frame::Frame,
    group::{Flex, FlexType},
    input::Input,
    prelude::*,
};

use crate::app::catalog::CatalogEntry;
use crate::app::messages::Message;

pub const CATALOG_PANEL_WIDTH: i32 = 230;

/// Side panel for the remote deck catalog: entry list, publish input and
/// the mutation buttons. Its input field is the app's editable-focus target
/// for the keyboard suppression rule.
pub struct CatalogPanel {
    flex: Flex,
    browser: HoldBrowser,
    input: Input,
    entries: Vec<CatalogEntry>,
}

impl CatalogPanel {
    pub fn new(sender: &Sender<Message>) -> Self {
        let mut flex = Flex::new(0, 0, CATALOG_PANEL_WIDTH, 0, None);
        flex.set_type(FlexType::Column);
        flex.set_spacing(6);

        let mut title = Frame::default().with_label("Deck Catalog");
        title.set_label_size(13);
        flex.fixed(&title, 22);

        let browser = HoldBrowser::default();

        let mut input = Input::default();
        input.set_tooltip("Title to publish");
        flex.fixed(&input, 26);

        let mut buttons = Flex::default();
        buttons.set_type(FlexType::Row);
        buttons.set_spacing(4);
        let mut publish_btn = Button::default().with_label("Publish");
        let mut delete_btn = Button::default().with_label("Delete");
        let mut refresh_btn = Button::default().with_label("Refresh");
        buttons.end();
        flex.fixed(&buttons, 28);

        flex.end();

        let s = sender;
        publish_btn.set_callback({
            let s = *s;
            move |_| s.send(Message::CatalogPublish)
        });
        delete_btn.set_callback({
            let s = *s;
            move |_| s.send(Message::CatalogDelete)
        });
        refresh_btn.set_callback({
            let s = *s;
            move |_| s.send(Message::CatalogRefresh)
        });

        Self {
            flex,
            browser,
            input,
            entries: Vec::new(),
        }
    }

    pub fn widget(&self) -> &Flex {
        &self.flex
    }

    pub fn widget_mut(&mut self) -> &mut Flex {
        &mut self.flex
    }

    /// Handle for the key hook's focus comparison.
    pub fn input_handle(&self) -> Input {
        self.input.clone()
    }

    /// Replace the displayed collection. The caller always passes a freshly
    /// fetched full list.
    pub fn set_entries(&mut self, entries: Vec<CatalogEntry>) {
        self.browser.clear();
        for entry in &entries {
            self.browser.add(&entry.title);
        }
        self.entries = entries;
    }

    pub fn selected(&self) -> Option<CatalogEntry> {
        let line = self.browser.value();
        if line < 1 {
            return None;
        }
        self.entries.get(line as usize - 1).cloned()
    }

    pub fn title_input(&self) -> String {
        self.input.value().trim().to_string()
    }

    pub fn clear_title_input(&mut self) {
        self.input.set_value("");
    }
}
