use fltk::{frame::Frame, prelude::*};

use crate::app::deck::fragment::FragmentStore;

pub const ADDRESS_BAR_HEIGHT: i32 = 24;

/// The address bar: holds the fragment value and mirrors it into a label.
/// The held value, not the label, is the source of truth for `read`, and it
/// is only re-read when a deck loads (one-way sync after startup).
pub struct FragmentBar {
    frame: Frame,
    value: Option<String>,
}

impl FragmentBar {
    pub fn new(frame: Frame, initial: Option<String>) -> Self {
        let mut bar = Self {
            frame,
            value: initial,
        };
        bar.refresh_label();
        bar
    }

    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    pub fn frame_mut(&mut self) -> &mut Frame {
        &mut self.frame
    }

    /// Replace the held fragment, e.g. with a deep-link value when a new
    /// deck is loaded.
    pub fn reset(&mut self, value: Option<String>) {
        self.value = value;
        self.refresh_label();
    }

    fn refresh_label(&mut self) {
        match &self.value {
            Some(v) => self.frame.set_label(&format!("#{v}")),
            None => self.frame.set_label(""),
        }
        self.frame.redraw();
    }
}

impl FragmentStore for FragmentBar {
    fn read(&self) -> Option<String> {
        self.value.clone()
    }

    fn write(&mut self, fragment: &str) {
        self.value = Some(fragment.to_string());
        self.refresh_label();
    }
}
