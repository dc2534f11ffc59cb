//! Plain-text rendering of the visible view.
//!
//! Output shape, one line per visible item followed by a status line:
//!
//! ```text
//! [ ] apples  (3f2a9c1e)
//! [x] oranges  (77b0d4aa)
//! [~] pears  (c01d5e92) editing
//! 3 of 3 shown (1 checked, showing checked)
//! ```

use crate::model::item::Item;
use crate::store::list_store::Store;
use crate::view::projector::{summarize, visible_items};
use std::borrow::Cow;

const SHORT_ID_LEN: usize = 8;
const EMPTY_VIEW_LINE: &str = "(no items)";

/// Rendering switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderOptions {
    /// Print full hyphenated ids instead of the 8-char short form.
    pub full_ids: bool,
}

/// Renders one item line (without trailing newline).
pub fn render_item(item: &Item, options: RenderOptions) -> String {
    let id = item.id.to_string();
    let id = if options.full_ids {
        id.as_str()
    } else {
        &id[..SHORT_ID_LEN]
    };

    let name = escape_name(&item.name);
    if item.editing {
        return format!("[~] {name}  ({id}) editing");
    }
    let marker = if item.checked { 'x' } else { ' ' };
    format!("[{marker}] {name}  ({id})")
}

/// Escapes control characters so a name always stays on its own line.
fn escape_name(name: &str) -> Cow<'_, str> {
    if !name.chars().any(char::is_control) {
        return Cow::Borrowed(name);
    }
    let mut escaped = String::with_capacity(name.len());
    for ch in name.chars() {
        if ch.is_control() {
            escaped.extend(ch.escape_default());
        } else {
            escaped.push(ch);
        }
    }
    Cow::Owned(escaped)
}

/// Renders the visible items and a status line.
///
/// Equal store states always produce equal output.
pub fn render_view(store: &Store, options: RenderOptions) -> String {
    let mut out = String::new();
    let visible = visible_items(store);
    if visible.is_empty() {
        out.push_str(EMPTY_VIEW_LINE);
        out.push('\n');
    }
    for item in visible {
        out.push_str(&render_item(item, options));
        out.push('\n');
    }

    let summary = summarize(store);
    let mode = if store.show_checked() {
        "showing checked"
    } else {
        "hiding checked"
    };
    out.push_str(&format!(
        "{} of {} shown ({} checked, {mode}",
        summary.visible, summary.total, summary.checked
    ));
    if !store.filter_text().is_empty() {
        out.push_str(&format!(", filter {:?}", store.filter_text()));
    }
    out.push_str(")\n");
    out
}
