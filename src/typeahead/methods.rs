//! Event handling and state transitions for the typeahead model.

use super::model::{paste, Model};
use super::types::{
    CandidatesMsg, PasteErrMsg, PasteMsg, Phase, PointerClickMsg, PointerDownMsg, Region,
};
use crate::debounce::{DebounceMsg, FlushFunc};
use crate::key::matches_binding;
use crate::matcher::{filter, EmptyQueryPolicy, Match};
use crate::source::{FetchFn, FetchFuture};
use crate::spinner;
use crate::Component;
use bubbletea_rs::{batch, Cmd, KeyMsg, MouseMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use std::ops::Range;
use std::time::Duration;

impl Model {
    /// Unique id used to route fetch results back to this widget.
    pub fn id(&self) -> usize {
        self.id
    }

    /// Current text.
    pub fn value(&self) -> String {
        self.editor.value()
    }

    /// Cursor position in characters.
    pub fn position(&self) -> usize {
        self.editor.position()
    }

    /// Replaces the text and recomputes matches.
    ///
    /// This is a programmatic change: no remote lookup is scheduled. Call
    /// [`Model::refresh`] to fetch for the new text.
    pub fn set_value(&mut self, s: &str) {
        self.editor.set_value(s);
        self.recompute();
    }

    /// Clears the text.
    pub fn reset(&mut self) {
        self.set_value("");
    }

    /// Candidates currently matched against.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Replaces the candidate list and recomputes matches.
    pub fn set_candidates(&mut self, candidates: Vec<String>) {
        self.candidates = candidates;
        self.recompute();
    }

    /// Current matches, in candidate order.
    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    /// Index of the highlighted suggestion.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The highlighted suggestion.
    pub fn active_match(&self) -> Option<&Match> {
        self.active.and_then(|i| self.matches.get(i))
    }

    /// Highlights a suggestion. Out-of-range indices clear the highlight.
    pub fn set_active_index(&mut self, index: Option<usize>) {
        self.set_active(index.filter(|&i| i < self.matches.len()));
    }

    /// Whether the menu is open (it may still have nothing to show).
    pub fn is_open(&self) -> bool {
        self.menu.is_open()
    }

    /// Whether the suggestion list is shown.
    pub fn menu_visible(&self) -> bool {
        self.menu.is_open() && !self.matches.is_empty()
    }

    /// Whether the "No options" state is shown.
    ///
    /// A query still waiting for its debounced lookup counts as loading.
    pub fn shows_no_options(&self) -> bool {
        !self.editor.is_empty() && !self.awaiting_candidates() && self.matches.is_empty()
    }

    /// Whether an edit is waiting for its debounce window to elapse.
    pub fn lookup_pending(&self) -> bool {
        self.fetcher.is_some() && self.debouncer.is_pending()
    }

    fn awaiting_candidates(&self) -> bool {
        self.loading || self.lookup_pending()
    }

    /// Indices of the suggestions currently in view.
    pub fn visible_range(&self) -> Range<usize> {
        self.menu.visible_range(self.matches.len())
    }

    /// Observable interaction state.
    pub fn phase(&self) -> Phase {
        if !self.menu.is_open() {
            Phase::Idle
        } else if self.awaiting_candidates() {
            Phase::Loading
        } else if !self.matches.is_empty() {
            Phase::FocusedWithMatches
        } else if self.editor.is_empty() {
            Phase::FocusedEmpty
        } else {
            Phase::FocusedNoMatches
        }
    }

    /// Whether the loading indicator is shown.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Shows or hides the loading indicator.
    ///
    /// Returns the command that animates the spinner when loading starts.
    pub fn set_loading(&mut self, loading: bool) -> Option<Cmd> {
        self.loading = loading;
        loading.then(|| self.spinner.start())
    }

    /// Whether input is disabled.
    pub fn is_disabled(&self) -> bool {
        self.disabled
    }

    /// Disables or enables the input. Disabling also blurs it.
    pub fn set_disabled(&mut self, disabled: bool) {
        self.disabled = disabled;
        if disabled {
            self.blur();
        }
    }

    /// Refuse text edits while loading.
    pub fn set_lock_while_loading(&mut self, lock: bool) {
        self.lock_while_loading = lock;
    }

    /// What an empty query shows.
    pub fn empty_query_policy(&self) -> EmptyQueryPolicy {
        self.policy
    }

    /// Changes the empty query behaviour and recomputes matches.
    pub fn set_empty_query_policy(&mut self, policy: EmptyQueryPolicy) {
        self.policy = policy;
        self.recompute();
    }

    /// Sets the placeholder.
    pub fn set_placeholder(&mut self, placeholder: &str) {
        self.placeholder = placeholder.to_string();
    }

    /// Sets the prompt.
    pub fn set_prompt(&mut self, prompt: &str) {
        self.prompt = prompt.to_string();
    }

    /// Sets the column width; 0 sizes to content.
    pub fn set_width(&mut self, width: usize) {
        self.width = width;
    }

    /// Maximum number of menu rows shown at once.
    pub fn set_menu_height(&mut self, height: usize) {
        self.menu.set_height(height);
        if let Some(i) = self.active {
            self.menu.scroll_to(i, self.matches.len());
        }
    }

    /// Debounce delay for remote lookups.
    pub fn set_debounce(&mut self, delay: Duration) {
        self.debouncer.set_delay(delay);
    }

    /// Runs `f` whenever a debounce window elapses without a newer edit.
    pub fn set_on_flush(&mut self, f: FlushFunc) {
        self.debouncer.set_on_flush(f);
    }

    /// Sets or clears the remote lookup.
    ///
    /// Clearing it makes any outstanding request stale.
    pub fn set_fetcher(&mut self, fetcher: Option<FetchFn>) {
        if fetcher.is_none() {
            self.debouncer.cancel();
            self.requests.invalidate();
            self.loading = false;
        }
        self.fetcher = fetcher;
    }

    /// Whether candidates come from a remote lookup.
    pub fn is_remote(&self) -> bool {
        self.fetcher.is_some()
    }

    /// Fetches candidates for the current text right away, skipping the
    /// debounce delay. Returns `None` without a remote lookup.
    pub fn refresh(&mut self) -> Option<Cmd> {
        self.debouncer.cancel();
        self.fetch_current()
    }

    /// Focuses the input and opens the menu. Ignored while disabled.
    pub fn focus(&mut self) {
        if self.disabled {
            return;
        }
        self.focus = true;
        self.menu.open();
    }

    /// Blurs the input and closes the menu. The text is kept.
    pub fn blur(&mut self) {
        self.focus = false;
        self.close_menu();
    }

    /// Whether the input accepts keys.
    pub fn focused(&self) -> bool {
        self.focus
    }

    /// Closes the menu without touching the text.
    pub fn close_menu(&mut self) {
        self.menu.close();
        self.active = None;
    }

    /// Highlights the next suggestion, wrapping to the first.
    pub fn next_suggestion(&mut self) {
        let n = self.matches.len();
        if n == 0 {
            return;
        }
        let next = match self.active {
            Some(i) => (i + 1) % n,
            None => 0,
        };
        self.set_active(Some(next));
    }

    /// Highlights the previous suggestion, wrapping to the last.
    pub fn prev_suggestion(&mut self) {
        let n = self.matches.len();
        if n == 0 {
            return;
        }
        let prev = match self.active {
            Some(i) => (i + n - 1) % n,
            None => n - 1,
        };
        self.set_active(Some(prev));
    }

    /// Commits the highlighted suggestion, if any, then closes the menu.
    pub fn select_active(&mut self) {
        if let Some(i) = self.active {
            self.commit(i);
        }
        self.close_menu();
    }

    /// Commits the suggestion at `index` as the text and closes the menu.
    ///
    /// Returns `false` when there is no such suggestion.
    pub fn commit(&mut self, index: usize) -> bool {
        let Some(text) = self.matches.get(index).map(Match::text) else {
            return false;
        };
        log::debug!("typeahead {}: committed {text:?}", self.id);
        self.editor.set_value(&text);
        if self.fetcher.is_some() {
            self.debouncer.cancel();
            self.requests.invalidate();
            self.loading = false;
        }
        self.recompute();
        self.close_menu();
        true
    }

    /// Handles a pointer press classified by region.
    pub fn pointer_down(&mut self, region: Region) {
        if self.disabled {
            return;
        }
        match region {
            Region::Input => self.focus(),
            // Pressing inside the menu must not close it or the click is lost.
            Region::Menu | Region::Item(_) => {}
            Region::Outside => self.blur(),
        }
    }

    /// Handles a pointer click classified by region.
    pub fn click(&mut self, region: Region) {
        if self.disabled {
            return;
        }
        if let Region::Item(i) = region {
            if self.commit(i) {
                self.focus = true;
            }
        }
    }

    /// Screen cell of the widget's top-left corner, used to map mouse events.
    pub fn set_origin(&mut self, col: u16, row: u16) {
        self.origin = (col, row);
    }

    /// Screen cell of the widget's top-left corner.
    pub fn origin(&self) -> (u16, u16) {
        self.origin
    }

    /// Translates a terminal mouse event into pointer presses and clicks.
    ///
    /// A left press is a [`PointerDownMsg`]; releasing it over the region it
    /// was pressed on is a [`PointerClickMsg`]. Other mouse events are ignored.
    pub fn handle_mouse(&mut self, mouse: &MouseMsg) {
        let region = self.screen_region(mouse.x, mouse.y);
        match mouse.button {
            MouseEventKind::Down(MouseButton::Left) => {
                self.pressed = Some(region);
                self.pointer_down(region);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if self.pressed.take() == Some(region) {
                    self.click(region);
                }
            }
            _ => {}
        }
    }

    fn screen_region(&self, x: u16, y: u16) -> Region {
        let (col, row) = self.origin;
        if x < col || y < row {
            return Region::Outside;
        }
        self.region_at(usize::from(x - col), usize::from(y - row))
    }

    /// Update handles every message the typeahead understands: keys, pointer
    /// and mouse events, debounce ticks, fetch results, spinner ticks and
    /// paste results.
    pub fn update(&mut self, msg: Msg) -> Option<Cmd> {
        let msg = match msg.downcast::<CandidatesMsg>() {
            Ok(candidates) => return self.on_candidates(*candidates),
            Err(msg) => msg,
        };

        if let Some(tick) = msg.downcast_ref::<DebounceMsg>() {
            return self.on_debounce(tick);
        }

        if msg.downcast_ref::<spinner::TickMsg>().is_some() {
            if !self.loading {
                return None;
            }
            return self.spinner.update(&msg);
        }

        if let Some(down) = msg.downcast_ref::<PointerDownMsg>() {
            self.pointer_down(down.region);
            return None;
        }

        if let Some(click) = msg.downcast_ref::<PointerClickMsg>() {
            self.click(click.region);
            return None;
        }

        if let Some(mouse) = msg.downcast_ref::<MouseMsg>() {
            self.handle_mouse(mouse);
            return None;
        }

        if !self.focus || self.disabled {
            return None;
        }

        if let Some(key_msg) = msg.downcast_ref::<KeyMsg>() {
            return self.handle_key(key_msg);
        }

        if let Some(paste_msg) = msg.downcast_ref::<PasteMsg>() {
            if self.edits_locked() {
                return None;
            }
            if self.editor.insert(&paste_msg.0) {
                return self.on_text_changed();
            }
            return None;
        }

        if let Some(paste_err) = msg.downcast_ref::<PasteErrMsg>() {
            self.err = Some(paste_err.0.clone());
        }

        None
    }

    fn handle_key(&mut self, key_msg: &KeyMsg) -> Option<Cmd> {
        // Any key while focused brings the menu back.
        self.menu.open();

        if matches_binding(key_msg, &self.key_map.next_suggestion) {
            self.next_suggestion();
            return None;
        }
        if matches_binding(key_msg, &self.key_map.prev_suggestion) {
            self.prev_suggestion();
            return None;
        }
        if matches_binding(key_msg, &self.key_map.select) {
            self.select_active();
            return None;
        }
        if matches_binding(key_msg, &self.key_map.close) {
            self.close_menu();
            return None;
        }

        if self.handle_movement_keys(key_msg) {
            return None;
        }

        if self.edits_locked() {
            return None;
        }

        if matches_binding(key_msg, &self.key_map.paste) {
            return Some(paste());
        }

        if self.handle_deletion_keys(key_msg) || self.handle_character_input(key_msg) {
            return self.on_text_changed();
        }

        None
    }

    fn handle_movement_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        if matches_binding(key_msg, &km.character_backward) {
            self.editor.move_left();
        } else if matches_binding(key_msg, &km.character_forward) {
            self.editor.move_right();
        } else if matches_binding(key_msg, &km.line_start) {
            self.editor.move_to_start();
        } else if matches_binding(key_msg, &km.line_end) {
            self.editor.move_to_end();
        } else {
            return false;
        }
        true
    }

    fn handle_deletion_keys(&mut self, key_msg: &KeyMsg) -> bool {
        let km = &self.key_map;
        if matches_binding(key_msg, &km.delete_word_backward) {
            self.editor.delete_word_backward()
        } else if matches_binding(key_msg, &km.delete_character_backward) {
            self.editor.delete_backward()
        } else if matches_binding(key_msg, &km.delete_character_forward) {
            self.editor.delete_forward()
        } else if matches_binding(key_msg, &km.delete_before_cursor) {
            self.editor.delete_before_cursor()
        } else if matches_binding(key_msg, &km.delete_after_cursor) {
            self.editor.delete_after_cursor()
        } else {
            false
        }
    }

    fn handle_character_input(&mut self, key_msg: &KeyMsg) -> bool {
        // Shift is folded into the character's case; ctrl/alt chords are not text.
        match key_msg.key {
            KeyCode::Char(ch)
                if !key_msg.modifiers.contains(KeyModifiers::CONTROL)
                    && !key_msg.modifiers.contains(KeyModifiers::ALT) =>
            {
                self.editor.insert_char(ch)
            }
            _ => false,
        }
    }

    fn edits_locked(&self) -> bool {
        self.loading && self.lock_while_loading
    }

    fn on_text_changed(&mut self) -> Option<Cmd> {
        self.recompute();
        self.menu.open();
        if self.fetcher.is_some() {
            return Some(self.debouncer.trigger());
        }
        None
    }

    fn on_debounce(&mut self, tick: &DebounceMsg) -> Option<Cmd> {
        if !self.debouncer.settle(tick) {
            return None;
        }
        self.fetch_current()
    }

    fn fetch_current(&mut self) -> Option<Cmd> {
        let fetcher = self.fetcher.clone()?;
        let query = self.editor.value();

        if query.is_empty() && self.policy == EmptyQueryPolicy::Closed {
            self.requests.invalidate();
            self.loading = false;
            self.candidates.clear();
            self.recompute();
            return None;
        }

        let seq = self.requests.issue();
        self.loading = true;
        log::debug!("typeahead {}: request {seq} for {query:?}", self.id);

        let id = self.id;
        let pending: FetchFuture = fetcher(query.clone());
        let fetch: Cmd = Box::pin(async move {
            let result = pending.await;
            Some(Box::new(CandidatesMsg {
                id,
                seq,
                query,
                result,
            }) as Msg)
        });
        Some(batch(vec![fetch, self.spinner.start()]))
    }

    fn on_candidates(&mut self, msg: CandidatesMsg) -> Option<Cmd> {
        if msg.id != self.id {
            return None;
        }
        if !self.requests.accept(msg.seq) {
            log::debug!(
                "typeahead {}: dropping stale response {} for {:?}",
                self.id,
                msg.seq,
                msg.query
            );
            return None;
        }

        self.loading = false;
        match msg.result {
            Ok(candidates) => {
                self.candidates = candidates;
                self.recompute();
            }
            Err(e) => {
                log::warn!("typeahead {}: fetch for {:?} failed: {e}", self.id, msg.query);
                self.candidates.clear();
                self.recompute();
                self.close_menu();
            }
        }
        None
    }

    fn set_active(&mut self, index: Option<usize>) {
        self.active = index;
        if let Some(i) = index {
            self.menu.scroll_to(i, self.matches.len());
        }
    }

    pub(super) fn recompute(&mut self) {
        self.matches = filter(&self.candidates, &self.editor.value(), self.policy);
        self.active = None;
        self.menu.reset_scroll();
    }
}

impl Component for Model {
    fn focus(&mut self) -> Option<Cmd> {
        self.focus();
        None
    }

    fn blur(&mut self) {
        self.blur()
    }

    fn focused(&self) -> bool {
        self.focused()
    }
}
