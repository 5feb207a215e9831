// =============================================================================
// Next Frame Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. File Input Utilities
// 3. Format Utilities
// =============================================================================

use wasm_bindgen::JsValue;
use web_sys::{DataTransfer, File, FileList, HtmlInputElement, ScrollBehavior, ScrollToOptions, Window};

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// Get the browser window object, if there is one.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Jump to the top of the page without smooth scrolling.
pub fn scroll_to_top() {
    let Some(win) = window() else {
        return;
    };

    let options = ScrollToOptions::new();
    options.set_top(0.0);
    options.set_left(0.0);
    options.set_behavior(ScrollBehavior::Instant);
    win.scroll_to_with_scroll_to_options(&options);

    // Some layouts scroll the root or body element instead of the viewport.
    if let Some(document) = win.document() {
        if let Some(root) = document.document_element() {
            root.set_scroll_top(0);
        }
        if let Some(body) = document.body() {
            body.set_scroll_top(0);
        }
    }
}

// -----------------------------------------------------------------------------
// 2. File Input Utilities
// -----------------------------------------------------------------------------

/// Copy a `FileList` into owned handles.
pub fn files_from_list(list: Option<FileList>) -> Vec<File> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length()).filter_map(|i| list.get(i)).collect()
}

/// Replace a file input's selection with exactly `files`.
///
/// The input keeps its own list otherwise, and would go on showing (and
/// natively submitting) files that were dropped or removed.
pub fn sync_file_input(input: &HtmlInputElement, files: &[File]) -> Result<(), JsValue> {
    let transfer = DataTransfer::new()?;
    let items = transfer.items();
    for file in files {
        items.add_with_file(file)?;
    }
    input.set_files(transfer.files().as_ref());
    Ok(())
}

// -----------------------------------------------------------------------------
// 3. Format Utilities
// -----------------------------------------------------------------------------

/// Format a file size in bytes to human-readable string.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.0} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
