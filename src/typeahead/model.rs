//! Core model for the typeahead component.

use super::editor::Editor;
use super::keymap::{default_key_map, KeyMap};
use super::menu::{Menu, DEFAULT_HEIGHT};
#[cfg(feature = "clipboard-support")]
use super::types::PasteMsg;
use super::types::{PasteErrMsg, Region};
use crate::debounce::{Debouncer, DEFAULT_DELAY};
use crate::matcher::{EmptyQueryPolicy, Match};
use crate::request::RequestSlot;
use crate::source::FetchFn;
use crate::spinner;
use bubbletea_rs::{Cmd, Model as BubbleTeaModel, Msg};
use lipgloss_extras::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

static LAST_ID: AtomicUsize = AtomicUsize::new(0);

fn next_id() -> usize {
    LAST_ID.fetch_add(1, Ordering::Relaxed) + 1
}

/// Background of the highlighted suggestion row.
pub const ACCENT: &str = "#ED6A5A";

/// Text shown when a typed query has no match.
pub const NO_OPTIONS: &str = "No options";

/// Styles used by [`Model::view`].
#[derive(Debug, Clone)]
pub struct Styles {
    /// Prompt before the input.
    pub prompt: Style,
    /// Typed text.
    pub text: Style,
    /// Placeholder text.
    pub placeholder: Style,
    /// Character under the cursor.
    pub cursor: Style,
    /// Matched prefix of a suggestion.
    pub highlight: Style,
    /// Rest of a suggestion.
    pub item: Style,
    /// Matched prefix of the active suggestion.
    pub active_highlight: Style,
    /// Rest of the active suggestion.
    pub active_item: Style,
    /// The "No options" line.
    pub no_options: Style,
}

/// Default styles: bold prefixes, accent background on the active row, dim
/// placeholder and empty state.
pub fn default_styles() -> Styles {
    let accent = Style::new().background(Color::from(ACCENT));
    Styles {
        prompt: Style::new(),
        text: Style::new(),
        placeholder: Style::new().foreground(Color::from("240")),
        cursor: Style::new().reverse(true),
        highlight: Style::new().bold(true),
        item: Style::new(),
        active_highlight: accent.clone().bold(true),
        active_item: accent,
        no_options: Style::new().foreground(Color::from("240")),
    }
}

impl Default for Styles {
    fn default() -> Self {
        default_styles()
    }
}

/// A text input that suggests completions from a list of candidates.
///
/// Candidates are either set directly with [`Model::set_candidates`] or
/// fetched by a [`FetchFn`] after a debounce delay. Matches are always derived
/// from the current query and the current candidate list.
///
/// # Examples
///
/// ```rust
/// use bubbletea_typeahead::typeahead::{new, with_candidates, with_placeholder};
///
/// let mut input = new(&[
///     with_placeholder("City"),
///     with_candidates(vec!["Paris".into(), "Parma".into(), "London".into()]),
/// ]);
/// input.focus();
/// input.set_value("par");
/// assert_eq!(input.matches().len(), 2);
/// ```
pub struct Model {
    /// Last clipboard error, if any.
    pub err: Option<String>,
    /// Prompt shown before the input.
    pub prompt: String,
    /// Placeholder shown while the input is empty.
    pub placeholder: String,
    /// Column width of the input and menu rows; 0 sizes them to content.
    pub width: usize,
    /// Text of the empty-result state.
    pub no_options_text: String,
    /// Rendering styles.
    pub styles: Styles,
    /// Key bindings.
    pub key_map: KeyMap,

    pub(super) id: usize,
    pub(super) editor: Editor,
    pub(super) candidates: Vec<String>,
    pub(super) matches: Vec<Match>,
    pub(super) active: Option<usize>,
    pub(super) focus: bool,
    pub(super) menu: Menu,
    pub(super) loading: bool,
    pub(super) disabled: bool,
    pub(super) lock_while_loading: bool,
    pub(super) policy: EmptyQueryPolicy,
    pub(super) debouncer: Debouncer,
    pub(super) requests: RequestSlot,
    pub(super) fetcher: Option<FetchFn>,
    pub(super) spinner: spinner::Model,
    pub(super) origin: (u16, u16),
    pub(super) pressed: Option<Region>,
}

/// Configuration option for [`new`].
pub enum TypeaheadOption {
    /// Placeholder text.
    Placeholder(String),
    /// Prompt text.
    Prompt(String),
    /// Column width.
    Width(usize),
    /// Start disabled.
    Disabled(bool),
    /// Empty query behaviour.
    EmptyQuery(EmptyQueryPolicy),
    /// Maximum menu rows.
    MenuHeight(usize),
    /// Debounce delay for remote lookups.
    Debounce(Duration),
    /// Refuse edits while loading.
    LockWhileLoading(bool),
    /// Static candidate list.
    Candidates(Vec<String>),
    /// Remote candidate lookup.
    Fetcher(FetchFn),
}

impl TypeaheadOption {
    fn apply(&self, m: &mut Model) {
        match self {
            TypeaheadOption::Placeholder(s) => m.placeholder = s.clone(),
            TypeaheadOption::Prompt(s) => m.prompt = s.clone(),
            TypeaheadOption::Width(w) => m.width = *w,
            TypeaheadOption::Disabled(d) => m.set_disabled(*d),
            TypeaheadOption::EmptyQuery(p) => m.set_empty_query_policy(*p),
            TypeaheadOption::MenuHeight(h) => m.menu.set_height(*h),
            TypeaheadOption::Debounce(d) => m.debouncer.set_delay(*d),
            TypeaheadOption::LockWhileLoading(l) => m.lock_while_loading = *l,
            TypeaheadOption::Candidates(c) => m.set_candidates(c.clone()),
            TypeaheadOption::Fetcher(f) => m.set_fetcher(Some(f.clone())),
        }
    }
}

/// Option setting the placeholder.
pub fn with_placeholder(placeholder: &str) -> TypeaheadOption {
    TypeaheadOption::Placeholder(placeholder.to_string())
}

/// Option setting the prompt.
pub fn with_prompt(prompt: &str) -> TypeaheadOption {
    TypeaheadOption::Prompt(prompt.to_string())
}

/// Option setting the column width.
pub fn with_width(width: usize) -> TypeaheadOption {
    TypeaheadOption::Width(width)
}

/// Option disabling the input.
pub fn with_disabled(disabled: bool) -> TypeaheadOption {
    TypeaheadOption::Disabled(disabled)
}

/// Option choosing what an empty query shows.
pub fn with_empty_query_policy(policy: EmptyQueryPolicy) -> TypeaheadOption {
    TypeaheadOption::EmptyQuery(policy)
}

/// Option setting the maximum number of menu rows.
pub fn with_menu_height(height: usize) -> TypeaheadOption {
    TypeaheadOption::MenuHeight(height)
}

/// Option setting the debounce delay for remote lookups.
pub fn with_debounce(delay: Duration) -> TypeaheadOption {
    TypeaheadOption::Debounce(delay)
}

/// Option refusing text edits while candidates are loading.
pub fn with_lock_while_loading(lock: bool) -> TypeaheadOption {
    TypeaheadOption::LockWhileLoading(lock)
}

/// Option setting a static candidate list.
pub fn with_candidates(candidates: Vec<String>) -> TypeaheadOption {
    TypeaheadOption::Candidates(candidates)
}

/// Option fetching candidates remotely.
pub fn with_fetcher(fetcher: FetchFn) -> TypeaheadOption {
    TypeaheadOption::Fetcher(fetcher)
}

/// Creates a typeahead with options applied in order.
///
/// The returned model is not focused. Call `focus()` to accept keys.
pub fn new(opts: &[TypeaheadOption]) -> Model {
    let mut m = Model {
        err: None,
        prompt: "> ".to_string(),
        placeholder: String::new(),
        width: 0,
        no_options_text: NO_OPTIONS.to_string(),
        styles: default_styles(),
        key_map: default_key_map(),
        id: next_id(),
        editor: Editor::new(),
        candidates: Vec::new(),
        matches: Vec::new(),
        active: None,
        focus: false,
        menu: Menu::new(DEFAULT_HEIGHT),
        loading: false,
        disabled: false,
        lock_while_loading: false,
        policy: EmptyQueryPolicy::default(),
        debouncer: Debouncer::new(DEFAULT_DELAY),
        requests: RequestSlot::new(),
        fetcher: None,
        spinner: spinner::Model::default(),
        origin: (0, 0),
        pressed: None,
    };
    for opt in opts {
        opt.apply(&mut m);
    }
    m
}

impl Default for Model {
    fn default() -> Self {
        new(&[])
    }
}

/// Creates a command that reads the system clipboard.
///
/// Resolves to [`PasteMsg`](super::types::PasteMsg) with the clipboard text or
/// [`PasteErrMsg`] describing why it could not be read.
pub fn paste() -> Cmd {
    use bubbletea_rs::tick as bubbletea_tick;
    bubbletea_tick(Duration::from_nanos(1), |_| {
        #[cfg(feature = "clipboard-support")]
        {
            use clipboard::{ClipboardContext, ClipboardProvider};
            let res: Result<String, String> = (|| {
                let mut ctx: ClipboardContext = ClipboardProvider::new()
                    .map_err(|e| format!("Failed to create clipboard context: {}", e))?;
                ctx.get_contents()
                    .map_err(|e| format!("Failed to read clipboard: {}", e))
            })();
            match res {
                Ok(s) => Box::new(PasteMsg(s)) as Msg,
                Err(e) => Box::new(PasteErrMsg(e)) as Msg,
            }
        }
        #[cfg(not(feature = "clipboard-support"))]
        {
            Box::new(PasteErrMsg("Clipboard support not enabled".to_string())) as Msg
        }
    })
}

impl BubbleTeaModel for Model {
    fn init() -> (Self, Option<Cmd>) {
        (new(&[]), None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        self.update(msg)
    }

    fn view(&self) -> String {
        self.view()
    }
}
