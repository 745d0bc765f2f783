use fltk::{
    enums::Color,
    frame::Frame,
    menu::MenuBar,
    prelude::*,
    text::TextDisplay,
    window::Window,
};

pub fn apply_theme(
    display: &mut TextDisplay,
    window: &mut Window,
    menu: &mut MenuBar,
    address_bar: &mut Frame,
    is_dark: bool,
) {
    if is_dark {
        display.set_color(Color::from_rgb(30, 30, 30));
        display.set_text_color(Color::from_rgb(220, 220, 220));
        window.set_color(Color::from_rgb(25, 25, 25));
        menu.set_color(Color::from_rgb(35, 35, 35));
        menu.set_text_color(Color::from_rgb(220, 220, 220));
        menu.set_selection_color(Color::from_rgb(60, 60, 60)); // Hover color
        address_bar.set_color(Color::from_rgb(35, 35, 35));
        address_bar.set_label_color(Color::from_rgb(150, 150, 150));
    } else {
        display.set_color(Color::White);
        display.set_text_color(Color::Black);
        window.set_color(Color::from_rgb(240, 240, 240));
        menu.set_color(Color::from_rgb(240, 240, 240));
        menu.set_text_color(Color::Black);
        menu.set_selection_color(Color::from_rgb(200, 200, 200)); // Hover color
        address_bar.set_color(Color::from_rgb(232, 232, 232));
        address_bar.set_label_color(Color::from_rgb(90, 90, 90));
    }

    display.redraw();
    window.redraw();
    menu.redraw();
    address_bar.redraw();
}
