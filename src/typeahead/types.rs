//! Messages and small value types for the typeahead component.

use crate::request::Seq;
use crate::source::SourceError;
use bubbletea_rs::Msg;

/// Clipboard paste message carrying raw text.
#[derive(Debug, Clone)]
pub struct PasteMsg(pub String);

/// Clipboard paste error message.
#[derive(Debug, Clone)]
pub struct PasteErrMsg(pub String);

/// Result of a candidate fetch, routed back by widget id and request sequence.
#[derive(Debug)]
pub struct CandidatesMsg {
    /// Id of the typeahead that issued the request.
    pub id: usize,
    /// Sequence number handed out when the request was issued.
    pub seq: Seq,
    /// Query the request was made for.
    pub query: String,
    /// Fetched candidates or the failure.
    pub result: Result<Vec<String>, SourceError>,
}

/// Part of the widget a pointer event landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    /// The text input line.
    Input,
    /// The menu container outside any item (e.g. the "No options" line).
    Menu,
    /// A suggestion, by index into the current matches.
    Item(usize),
    /// Anywhere else.
    Outside,
}

impl Region {
    /// Whether the region belongs to the widget.
    pub fn is_inside(self) -> bool {
        !matches!(self, Region::Outside)
    }
}

/// Pointer pressed. Pressing inside the menu never closes it, so the
/// following click can still select an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDownMsg {
    /// Where the press landed.
    pub region: Region,
}

/// Pointer released on the same region it was pressed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerClickMsg {
    /// Where the click landed.
    pub region: Region,
}

/// Observable interaction state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Menu closed.
    Idle,
    /// Menu open, nothing typed and nothing to browse.
    FocusedEmpty,
    /// Menu open with at least one match.
    FocusedWithMatches,
    /// Menu open, query typed, no match.
    FocusedNoMatches,
    /// Menu open while candidates are being fetched or an edit waits for
    /// its debounced lookup.
    Loading,
}

impl From<PasteMsg> for Msg {
    fn from(msg: PasteMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PasteErrMsg> for Msg {
    fn from(msg: PasteErrMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PointerDownMsg> for Msg {
    fn from(msg: PointerDownMsg) -> Self {
        Box::new(msg) as Msg
    }
}

impl From<PointerClickMsg> for Msg {
    fn from(msg: PointerClickMsg) -> Self {
        Box::new(msg) as Msg
    }
}
