use std::cell::Cell;
use std::rc::Rc;

use fltk::{
    enums::{Color, FrameType},
    frame::Frame,
    group::{Pack, PackType},
    prelude::*,
    text::TextDisplay,
};

use crate::app::deck::surface::PresentationSurface;

pub const SLIDE_STRIP_HEIGHT: i32 = 26;
const CELL_WIDTH: i32 = 30;

pub fn cell_colors(dark: bool) -> (Color, Color) {
    if dark {
        (Color::from_rgb(45, 45, 45), Color::from_rgb(190, 190, 190))
    } else {
        (Color::from_rgb(225, 225, 225), Color::Black)
    }
}

pub fn active_cell_colors(dark: bool) -> (Color, Color) {
    if dark {
        (Color::from_rgb(50, 100, 180), Color::White)
    } else {
        (Color::from_rgb(60, 120, 220), Color::White)
    }
}

/// Horizontal strip of numbered cells, one per registered slide. The cell
/// carrying the active colors is the deck's single visual active marker.
pub struct SlideStrip {
    pack: Pack,
}

impl SlideStrip {
    pub fn new() -> Self {
        let mut pack = Pack::default().with_type(PackType::Horizontal);
        pack.set_spacing(4);
        pack.end();
        Self { pack }
    }

    pub fn widget(&self) -> &Pack {
        &self.pack
    }

    /// Remove all cells. Call only after the surfaces holding cell handles
    /// have been dropped with the old deck.
    pub fn clear(&mut self) {
        self.pack.clear();
        self.pack.redraw();
    }

    pub fn add_cell(&mut self, number: usize, dark: bool) -> Frame {
        self.pack.begin();
        let mut cell = Frame::default()
            .with_size(CELL_WIDTH, SLIDE_STRIP_HEIGHT)
            .with_label(&number.to_string());
        cell.set_frame(FrameType::FlatBox);
        cell.set_label_size(12);
        let (bg, fg) = cell_colors(dark);
        cell.set_color(bg);
        cell.set_label_color(fg);
        self.pack.end();
        self.pack.redraw();
        cell
    }

    /// Recolor every cell for the given theme. The caller re-activates the
    /// active slide's surface afterwards to restore its highlight.
    pub fn apply_theme(&mut self, dark: bool) {
        let (bg, fg) = cell_colors(dark);
        for i in 0..self.pack.children() {
            if let Some(mut child) = self.pack.child(i) {
                child.set_color(bg);
                child.set_label_color(fg);
            }
        }
        self.pack.redraw();
    }
}

/// The binding-layer realization of one slide's presentation surface: a
/// strip cell plus the shared content display.
pub struct SlideSurface {
    cell: Frame,
    display: TextDisplay,
    content: String,
    dark: Rc<Cell<bool>>,
}

impl SlideSurface {
    pub fn new(cell: Frame, display: TextDisplay, content: String, dark: Rc<Cell<bool>>) -> Self {
        Self {
            cell,
            display,
            content,
            dark,
        }
    }
}

impl PresentationSurface for SlideSurface {
    fn activate(&mut self) {
        let (bg, fg) = active_cell_colors(self.dark.get());
        self.cell.set_color(bg);
        self.cell.set_label_color(fg);
        self.cell.redraw();

        if let Some(mut buffer) = self.display.buffer() {
            buffer.set_text(&self.content);
        }
        self.display.scroll(0, 0);
    }

    fn deactivate(&mut self) {
        let (bg, fg) = cell_colors(self.dark.get());
        self.cell.set_color(bg);
        self.cell.set_label_color(fg);
        self.cell.redraw();
    }
}
