//! Typeahead (autocomplete) input component.
//!
//! A single-line text input with a suggestion menu. Typing filters the
//! candidates by case-insensitive prefix; the matched prefix of every
//! suggestion is rendered bold. Suggestions are navigated with the arrow keys
//! (or ctrl+n / ctrl+p), committed with enter or a click, and the menu closes
//! on esc, on blur, or on a pointer press outside the widget.
//!
//! # Static candidates
//!
//! ```rust
//! use bubbletea_typeahead::typeahead::{new, with_candidates};
//! use bubbletea_rs::KeyMsg;
//! use crossterm::event::{KeyCode, KeyModifiers};
//!
//! let mut input = new(&[with_candidates(vec![
//!     "Paris".to_string(),
//!     "Parma".to_string(),
//!     "London".to_string(),
//! ])]);
//! input.focus();
//! for ch in "par".chars() {
//!     input.update(Box::new(KeyMsg { key: KeyCode::Char(ch), modifiers: KeyModifiers::NONE }));
//! }
//! input.update(Box::new(KeyMsg { key: KeyCode::Down, modifiers: KeyModifiers::NONE }));
//! input.update(Box::new(KeyMsg { key: KeyCode::Enter, modifiers: KeyModifiers::NONE }));
//! assert_eq!(input.value(), "Paris");
//! assert!(!input.is_open());
//! ```
//!
//! # Remote candidates
//!
//! With a fetcher configured, edits arm a debounce timer. When it elapses the
//! widget issues a request and shows a spinner; only the response to the most
//! recent request is applied, so slow responses for older queries never
//! overwrite newer results.
//!
//! ```rust,no_run
//! use bubbletea_typeahead::source::HttpSource;
//! use bubbletea_typeahead::typeahead::{new, with_fetcher, with_placeholder};
//!
//! // The endpoint answers `[{"name": "France"}, ...]`.
//! let source = HttpSource::new("https://api.example.com/countries?prefix={query}");
//! let input = new(&[with_placeholder("Country"), with_fetcher(source.fetcher())]);
//! # let _ = input;
//! ```
//!
//! # Pointer input
//!
//! Terminal mouse events ([`bubbletea_rs::MouseMsg`]) are handled by
//! `update` once the program enables mouse reporting. The widget maps them
//! relative to the screen cell set with [`Model::set_origin`]: a left press
//! becomes a [`PointerDownMsg`], releasing it over the same region a
//! [`PointerClickMsg`]. Hosts with their own hit testing can send those
//! messages directly, using [`Model::region_at`]. A press inside the menu
//! does not close it, so the click that follows can still select an item.

pub mod editor;
pub mod keymap;
pub mod menu;
pub mod methods;
pub mod model;
pub mod types;
pub mod view;

#[cfg(test)]
mod tests;

pub use editor::Editor;
pub use keymap::{default_key_map, KeyMap};
pub use menu::Menu;
pub use model::{
    default_styles, new, paste, with_candidates, with_debounce, with_disabled,
    with_empty_query_policy, with_fetcher, with_lock_while_loading, with_menu_height,
    with_placeholder, with_prompt, with_width, Model, Styles, TypeaheadOption, ACCENT, NO_OPTIONS,
};
pub use types::{
    CandidatesMsg, PasteErrMsg, PasteMsg, Phase, PointerClickMsg, PointerDownMsg, Region,
};
