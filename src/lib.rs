#![warn(missing_docs)]
#![doc(html_root_url = "https://docs.rs/bubbletea-typeahead/")]

//! # bubbletea-typeahead
//!
//! An autocomplete (typeahead) input for [bubbletea-rs](https://github.com/joshka/bubbletea-rs)
//! applications: a single-line text input that shows a menu of suggestions
//! whose names start with what has been typed so far.
//!
//! ## Overview
//!
//! The crate is split into a pure matching core and an interactive component:
//!
//! - [`matcher`] filters candidates by case-insensitive prefix and splits every
//!   hit into a highlighted prefix and the remaining text.
//! - [`typeahead`] is the component itself. It follows the Elm Architecture
//!   with `update()` and `view()` methods and owns the query, the suggestion
//!   list, the active suggestion and the open/closed state of the menu.
//! - [`debounce`] and [`request`] drive remote lookups: edits arm a quiet
//!   period, and only the answer to the latest request is applied.
//! - [`source`] defines the asynchronous fetcher type and, with the `http`
//!   feature, a JSON-over-HTTP source.
//! - [`spinner`] is the loading indicator shown while a lookup is in flight.
//! - [`key`] provides the key binding types the component's key map is built from.
//!
//! ## Features
//!
//! - `clipboard-support` (default): ctrl+v pastes from the system clipboard.
//! - `http` (default): [`source::HttpSource`], backed by `reqwest`.
//!
//! ## Focus Management
//!
//! The typeahead implements the [`Component`] trait:
//!
//! ```rust
//! use bubbletea_typeahead::prelude::*;
//! use bubbletea_rs::Cmd;
//!
//! fn handle_focus<T: Component>(component: &mut T) {
//!     let _cmd: Option<Cmd> = component.focus();
//!     assert!(component.focused());
//!     component.blur();
//!     assert!(!component.focused());
//! }
//!
//! let mut input = typeahead_new(&[]);
//! handle_focus(&mut input);
//! ```
//!
//! ## Integration with bubbletea-rs
//!
//! ```rust
//! use bubbletea_typeahead::prelude::*;
//! use bubbletea_rs::{Cmd, Model, Msg};
//!
//! struct App {
//!     city: Typeahead,
//! }
//!
//! impl Model for App {
//!     fn init() -> (Self, Option<Cmd>) {
//!         let mut city = typeahead_new(&[
//!             with_placeholder("City"),
//!             with_candidates(vec!["Paris".into(), "Parma".into(), "London".into()]),
//!         ]);
//!         city.focus();
//!         (Self { city }, None)
//!     }
//!
//!     fn update(&mut self, msg: Msg) -> Option<Cmd> {
//!         self.city.update(msg)
//!     }
//!
//!     fn view(&self) -> String {
//!         format!("Where to?\n{}", self.city.view())
//!     }
//! }
//! ```

pub mod debounce;
pub mod key;
pub mod matcher;
pub mod request;
pub mod source;
pub mod spinner;
pub mod typeahead;

use bubbletea_rs::Cmd;

/// Core trait for components that support focus management.
///
/// - `focus()` sets the focused state and may return a command for
///   initialization.
/// - `blur()` unsets it and drops any focus-related state (for the typeahead,
///   the open menu).
/// - `focused()` reports the current state.
///
/// ```rust
/// use bubbletea_typeahead::prelude::*;
///
/// let mut input = typeahead_new(&[]);
/// assert!(!Component::focused(&input));
///
/// Component::focus(&mut input);
/// assert!(Component::focused(&input));
///
/// Component::blur(&mut input);
/// assert!(!Component::focused(&input));
/// ```
pub trait Component {
    /// Sets the component to focused state.
    fn focus(&mut self) -> Option<Cmd>;

    /// Sets the component to blurred (unfocused) state.
    fn blur(&mut self);

    /// Returns the current focus state of the component.
    fn focused(&self) -> bool;
}

pub use debounce::{DebounceMsg, Debouncer};
pub use key::{matches, matches_binding, new_binding, Binding, Help as KeyHelp, KeyMap, KeyPress};
pub use matcher::{filter, is_match, EmptyQueryPolicy, Match};
pub use request::{RequestSlot, Seq};
#[cfg(feature = "http")]
pub use source::HttpSource;
pub use source::{fetcher_fn, FetchFn, SourceError};
pub use spinner::{
    new as spinner_new, with_spinner, with_style, Model as Spinner, SpinnerOption,
    TickMsg as SpinnerTickMsg, DOT, ELLIPSIS, LINE, MINI_DOT,
};
pub use typeahead::{
    new as typeahead_new, CandidatesMsg, KeyMap as TypeaheadKeyMap, Model as Typeahead, PasteErrMsg,
    PasteMsg, Phase, PointerClickMsg, PointerDownMsg, Region,
};

/// Prelude module for convenient imports.
///
/// ```rust
/// use bubbletea_typeahead::prelude::*;
///
/// let mut input = typeahead_new(&[with_candidates(vec!["Oslo".into()])]);
/// input.set_value("os");
/// assert_eq!(input.matches(), &[Match::new("Os", "lo")]);
/// ```
pub mod prelude {
    pub use crate::typeahead::{
        with_candidates, with_debounce, with_disabled, with_empty_query_policy, with_fetcher,
        with_lock_while_loading, with_menu_height, with_placeholder, with_prompt, with_width,
    };
    pub use crate::Component;
    pub use crate::{
        fetcher_fn, typeahead_new, Binding, EmptyQueryPolicy, FetchFn, KeyMap, Match, Phase,
        PointerClickMsg, PointerDownMsg, Region, SourceError, Typeahead,
    };
    #[cfg(feature = "http")]
    pub use crate::HttpSource;
}
