use fltk::{
    app::Sender,
    enums::{Align, FrameType},
    frame::Frame,
    group::{Flex, FlexType},
    menu::MenuBar,
    prelude::*,
    text::{TextBuffer, TextDisplay},
    window::Window,
};

use crate::app::messages::Message;

use super::catalog_panel::CatalogPanel;
use super::fragment_bar::ADDRESS_BAR_HEIGHT;
use super::slide_strip::{SLIDE_STRIP_HEIGHT, SlideStrip};

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub strip: SlideStrip,
    pub content_row: Flex,
    pub display: TextDisplay,
    pub address_frame: Frame,
    pub catalog: CatalogPanel,
}

pub fn build_main_window(sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 800, 600, "SlidePad");
    wind.set_xclass("SlidePad");

    let mut flex = Flex::new(0, 0, 800, 600, None);
    flex.set_type(FlexType::Column);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    let strip = SlideStrip::new();
    flex.fixed(strip.widget(), SLIDE_STRIP_HEIGHT);

    let mut content_row = Flex::new(0, 0, 0, 0, None);
    content_row.set_type(FlexType::Row);

    let mut display = TextDisplay::new(0, 0, 0, 0, "");
    display.set_buffer(TextBuffer::default());
    // Keep keyboard focus off the display so navigation keys reach the
    // window hook instead of scrolling the widget.
    display.clear_visible_focus();

    let mut catalog = CatalogPanel::new(sender);
    content_row.fixed(catalog.widget(), 0);
    catalog.widget_mut().hide();

    content_row.end();

    let mut address_frame = Frame::default();
    address_frame.set_frame(FrameType::FlatBox);
    address_frame.set_align(Align::Inside | Align::Left);
    address_frame.set_label_size(12);
    flex.fixed(&address_frame, ADDRESS_BAR_HEIGHT);

    flex.end();
    wind.resizable(&flex);
    wind.end();

    MainWidgets {
        wind,
        flex,
        menu,
        strip,
        content_row,
        display,
        address_frame,
        catalog,
    }
}
