use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    app,
    button::Button,
    dialog,
    enums::CallbackTrigger,
    frame::Frame,
    input::IntInput,
    prelude::*,
    window::Window,
};

/// Show Go To Slide dialog. Takes 1-based input, returns the zero-based
/// position of the chosen slide.
pub fn show_goto_slide_dialog(slide_count: usize) -> Option<usize> {
    if slide_count == 0 {
        dialog::message_default("No slides are loaded");
        return None;
    }

    let mut dialog_win = Window::default()
        .with_size(260, 120)
        .with_label("Go To Slide")
        .center_screen();
    dialog_win.make_modal(true);
    Frame::default()
        .with_pos(20, 20)
        .with_size(100, 30)
        .with_label("Slide number:");
    let mut slide_input = IntInput::default().with_pos(130, 20).with_size(100, 30);

    let mut go_btn = Button::default()
        .with_pos(60, 70)
        .with_size(80, 30)
        .with_label("Go");
    let mut cancel_btn = Button::default()
        .with_pos(150, 70)
        .with_size(80, 30)
        .with_label("Cancel");

    dialog_win.end();
    dialog_win.make_resizable(false);
    dialog_win.show();

    let chosen: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));

    let chosen_go = chosen.clone();
    let input_go = slide_input.clone();
    let dialog_go = dialog_win.clone();
    go_btn.set_callback(move |_| {
        let number: usize = match input_go.value().trim().parse() {
            Ok(n) => n,
            Err(_) => {
                dialog::message_default("Please enter a valid slide number");
                return;
            }
        };

        if (1..=slide_count).contains(&number) {
            chosen_go.set(Some(number - 1));
            dialog_go.clone().hide();
        } else {
            dialog::message_default(&format!(
                "Slide number must be between 1 and {}",
                slide_count
            ));
        }
    });

    // Enter key on input triggers Go
    let mut go_btn2 = go_btn.clone();
    slide_input.set_trigger(CallbackTrigger::EnterKey);
    slide_input.set_callback(move |_| {
        go_btn2.do_callback();
    });

    let dialog_close = dialog_win.clone();
    cancel_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    let dialog_x = dialog_win.clone();
    dialog_win.set_callback(move |_| {
        dialog_x.clone().hide();
    });

    while dialog_win.shown() {
        app::wait();
    }
    chosen.get()
}
