use fltk::dialog::{FileDialogType, NativeFileChooser};

pub fn native_open_dialog() -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_filter("Markdown decks\t*.{md,markdown}");
    nfc.show(); // blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}
