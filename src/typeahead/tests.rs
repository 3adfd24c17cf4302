//! Tests for the typeahead component.

use super::*;
use crate::debounce::DebounceMsg;
use crate::matcher::{EmptyQueryPolicy, Match};
use crate::source::{fetcher_fn, SourceError};
use crate::Component;
use bubbletea_rs::{KeyMsg, MouseMsg, Msg};
use crossterm::event::{KeyCode, KeyModifiers, MouseButton, MouseEventKind};
use std::sync::{Arc, Mutex};
use std::time::Duration;

fn key(code: KeyCode) -> Msg {
    Box::new(KeyMsg {
        key: code,
        modifiers: KeyModifiers::NONE,
    })
}

fn ctrl(ch: char) -> Msg {
    Box::new(KeyMsg {
        key: KeyCode::Char(ch),
        modifiers: KeyModifiers::CONTROL,
    })
}

fn mouse(button: MouseEventKind, x: u16, y: u16) -> Msg {
    Box::new(MouseMsg {
        x,
        y,
        button,
        modifiers: KeyModifiers::NONE,
    })
}

fn press(x: u16, y: u16) -> Msg {
    mouse(MouseEventKind::Down(MouseButton::Left), x, y)
}

fn release(x: u16, y: u16) -> Msg {
    mouse(MouseEventKind::Up(MouseButton::Left), x, y)
}

fn cities() -> Vec<String> {
    vec!["Paris".into(), "Parma".into(), "London".into()]
}

fn type_str(m: &mut Model, s: &str) {
    for ch in s.chars() {
        let _ = m.update(key(KeyCode::Char(ch)));
    }
}

fn focused_with(candidates: Vec<String>) -> Model {
    let mut m = new(&[with_candidates(candidates)]);
    m.focus();
    m
}

fn plain(s: &str) -> String {
    lipgloss_extras::lipgloss::strip_ansi(s)
}

#[test]
fn test_new_default_values() {
    let m = new(&[]);
    assert_eq!(m.prompt, "> ");
    assert_eq!(m.value(), "");
    assert!(m.matches().is_empty());
    assert_eq!(m.active_index(), None);
    assert!(!m.focused());
    assert!(!m.is_open());
    assert!(!m.is_loading());
    assert!(!m.is_remote());
    assert_eq!(m.empty_query_policy(), EmptyQueryPolicy::Closed);
    assert_eq!(m.phase(), Phase::Idle);
}

#[test]
fn test_options_apply() {
    let m = new(&[
        with_placeholder("City"),
        with_prompt("? "),
        with_width(12),
        with_menu_height(3),
        with_empty_query_policy(EmptyQueryPolicy::BrowseAll),
        with_candidates(cities()),
    ]);
    assert_eq!(m.placeholder, "City");
    assert_eq!(m.prompt, "? ");
    assert_eq!(m.width, 12);
    assert_eq!(m.menu.height(), 3);
    assert_eq!(m.matches().len(), 3);
}

#[test]
fn test_typing_filters() {
    let mut m = focused_with(cities());
    type_str(&mut m, "Par");
    assert_eq!(
        m.matches(),
        &[Match::new("Par", "is"), Match::new("Par", "ma")]
    );
    assert_eq!(m.phase(), Phase::FocusedWithMatches);
    assert!(m.menu_visible());
}

#[test]
fn test_browse_all_on_empty_query() {
    let mut m = new(&[
        with_empty_query_policy(EmptyQueryPolicy::BrowseAll),
        with_candidates(cities()),
    ]);
    m.focus();
    assert_eq!(
        m.matches(),
        &[
            Match::new("", "Paris"),
            Match::new("", "Parma"),
            Match::new("", "London"),
        ]
    );
    assert!(m.menu_visible());
}

#[test]
fn test_closed_policy_on_empty_query() {
    let mut m = focused_with(cities());
    assert!(m.matches().is_empty());
    assert_eq!(m.phase(), Phase::FocusedEmpty);
    type_str(&mut m, "L");
    let _ = m.update(key(KeyCode::Backspace));
    assert!(m.matches().is_empty());
    assert!(!m.shows_no_options());
}

#[test]
fn test_edit_resets_active_index() {
    let mut m = focused_with(cities());
    type_str(&mut m, "Pa");
    let _ = m.update(key(KeyCode::Down));
    assert_eq!(m.active_index(), Some(0));
    type_str(&mut m, "r");
    assert_eq!(m.active_index(), None);
}

#[test]
fn test_arrow_down_wraps_to_first() {
    let mut m = focused_with(vec!["Aa".into(), "Ab".into(), "Ac".into()]);
    type_str(&mut m, "a");
    m.set_active_index(Some(2));
    let _ = m.update(key(KeyCode::Down));
    assert_eq!(m.active_index(), Some(0));
}

#[test]
fn test_arrow_up_wraps_to_last() {
    let mut m = focused_with(vec!["Aa".into(), "Ab".into(), "Ac".into()]);
    type_str(&mut m, "a");
    let _ = m.update(key(KeyCode::Down));
    assert_eq!(m.active_index(), Some(0));
    let _ = m.update(key(KeyCode::Up));
    assert_eq!(m.active_index(), Some(2));
}

#[test]
fn test_arrow_up_from_none_selects_last() {
    let mut m = focused_with(cities());
    type_str(&mut m, "p");
    let _ = m.update(ctrl('p'));
    assert_eq!(m.active_index(), Some(1));
}

#[test]
fn test_navigation_stays_in_bounds() {
    let mut m = focused_with(vec!["Ka".into(), "Kb".into(), "Kc".into(), "Kd".into()]);
    type_str(&mut m, "k");
    let n = m.matches().len();
    for step in 0..3 * n {
        let msg = if step % 3 == 0 {
            key(KeyCode::Up)
        } else {
            key(KeyCode::Down)
        };
        let _ = m.update(msg);
        let i = m.active_index().expect("an item is active");
        assert!(i < n);
    }
}

#[test]
fn test_arrows_without_matches_are_noops() {
    let mut m = focused_with(cities());
    type_str(&mut m, "xyz");
    let _ = m.update(key(KeyCode::Down));
    let _ = m.update(key(KeyCode::Up));
    assert_eq!(m.active_index(), None);
    assert_eq!(m.phase(), Phase::FocusedNoMatches);
    assert!(m.shows_no_options());
}

#[test]
fn test_enter_without_active_only_closes() {
    let mut m = focused_with(cities());
    type_str(&mut m, "Lo");
    assert!(m.is_open());
    let _ = m.update(key(KeyCode::Enter));
    assert_eq!(m.value(), "Lo");
    assert!(!m.is_open());
    assert_eq!(m.phase(), Phase::Idle);
}

#[test]
fn test_enter_commits_active() {
    let mut m = focused_with(cities());
    type_str(&mut m, "par");
    let _ = m.update(key(KeyCode::Down));
    let _ = m.update(key(KeyCode::Down));
    let _ = m.update(key(KeyCode::Enter));
    assert_eq!(m.value(), "Parma");
    assert_eq!(m.active_index(), None);
    assert!(!m.is_open());
    assert!(m.focused());
}

#[test]
fn test_commit_round_trip() {
    let mut m = focused_with(cities());
    type_str(&mut m, "lon");
    let _ = m.update(key(KeyCode::Down));
    let _ = m.update(key(KeyCode::Enter));
    // Any key reopens the menu on the committed text.
    let _ = m.update(key(KeyCode::End));
    assert!(m.is_open());
    assert_eq!(m.matches(), &[Match::new("London", "")]);
}

#[test]
fn test_click_commits_and_refocuses() {
    let mut m = focused_with(cities());
    type_str(&mut m, "Par");
    let _ = m.update(PointerDownMsg {
        region: Region::Item(1),
    }
    .into());
    // The press inside the menu must not close it.
    assert!(m.is_open());
    let _ = m.update(PointerClickMsg {
        region: Region::Item(1),
    }
    .into());
    assert_eq!(m.value(), "Parma");
    assert!(!m.is_open());
    assert!(m.focused());
}

#[test]
fn test_outside_press_closes_and_keeps_text() {
    let mut m = focused_with(cities());
    type_str(&mut m, "Par");
    let _ = m.update(PointerDownMsg {
        region: Region::Outside,
    }
    .into());
    assert!(!m.is_open());
    assert!(!m.focused());
    assert_eq!(m.value(), "Par");
}

#[test]
fn test_press_on_input_focuses() {
    let mut m = new(&[with_candidates(cities())]);
    m.set_value("Lon");
    m.pointer_down(Region::Input);
    assert!(m.focused());
    assert!(m.menu_visible());
}

#[test]
fn test_blur_keeps_text() {
    let mut m = focused_with(cities());
    type_str(&mut m, "Lon");
    Component::blur(&mut m);
    assert!(!m.is_open());
    assert!(!Component::focused(&m));
    assert_eq!(m.value(), "Lon");
}

#[test]
fn test_esc_closes_menu() {
    let mut m = focused_with(cities());
    type_str(&mut m, "P");
    let _ = m.update(key(KeyCode::Down));
    let _ = m.update(key(KeyCode::Esc));
    assert!(!m.is_open());
    assert_eq!(m.active_index(), None);
    assert_eq!(m.value(), "P");
}

#[test]
fn test_unfocused_ignores_keys() {
    let mut m = new(&[with_candidates(cities())]);
    type_str(&mut m, "Par");
    assert_eq!(m.value(), "");
}

#[test]
fn test_disabled_ignores_focus_and_pointer() {
    let mut m = new(&[with_disabled(true), with_candidates(cities())]);
    m.focus();
    assert!(!m.focused());
    m.pointer_down(Region::Input);
    assert!(!m.focused());
}

#[test]
fn test_lock_while_loading_refuses_edits() {
    let mut m = new(&[with_lock_while_loading(true), with_candidates(cities())]);
    m.focus();
    type_str(&mut m, "P");
    let _ = m.set_loading(true);
    type_str(&mut m, "a");
    let _ = m.update(key(KeyCode::Backspace));
    assert_eq!(m.value(), "P");
    // Navigation still works.
    let _ = m.update(key(KeyCode::Down));
    assert_eq!(m.active_index(), Some(0));
}

#[test]
fn test_loading_suppresses_no_options() {
    let mut m = focused_with(Vec::new());
    type_str(&mut m, "Zz");
    assert!(m.shows_no_options());
    let _ = m.set_loading(true);
    assert!(!m.shows_no_options());
    assert_eq!(m.phase(), Phase::Loading);
}

#[test]
fn test_editing_keys() {
    let mut m = focused_with(cities());
    type_str(&mut m, "New York");
    let _ = m.update(ctrl('w'));
    assert_eq!(m.value(), "New ");
    let _ = m.update(key(KeyCode::Home));
    let _ = m.update(key(KeyCode::Delete));
    assert_eq!(m.value(), "ew ");
    let _ = m.update(ctrl('k'));
    assert_eq!(m.value(), "");
}

#[test]
fn test_paste_inserts_text() {
    let mut m = focused_with(cities());
    let _ = m.update(PasteMsg("Lon".to_string()).into());
    assert_eq!(m.value(), "Lon");
    assert_eq!(m.matches().len(), 1);
    let _ = m.update(PasteErrMsg("no clipboard".to_string()).into());
    assert_eq!(m.err.as_deref(), Some("no clipboard"));
    assert_eq!(m.value(), "Lon");
}

#[test]
fn test_active_item_scrolled_into_view() {
    let many: Vec<String> = (0..10).map(|i| format!("Item {i}")).collect();
    let mut m = new(&[with_menu_height(3), with_candidates(many)]);
    m.focus();
    type_str(&mut m, "item");
    assert_eq!(m.visible_range(), 0..3);
    for _ in 0..5 {
        let _ = m.update(key(KeyCode::Down));
    }
    assert_eq!(m.active_index(), Some(4));
    assert_eq!(m.visible_range(), 2..5);
    let _ = m.update(key(KeyCode::Up));
    let _ = m.update(key(KeyCode::Up));
    let _ = m.update(key(KeyCode::Up));
    assert_eq!(m.active_index(), Some(1));
    assert_eq!(m.visible_range(), 1..4);
    let _ = m.update(key(KeyCode::Up));
    let _ = m.update(key(KeyCode::Up));
    assert_eq!(m.active_index(), Some(9));
    assert_eq!(m.visible_range(), 7..10);
}

#[test]
fn test_region_at_follows_layout() {
    let many: Vec<String> = (0..6).map(|i| format!("Row {i}")).collect();
    let mut m = new(&[with_menu_height(2), with_candidates(many)]);
    m.focus();
    type_str(&mut m, "row");
    assert_eq!(m.region_at(0, 0), Region::Input);
    assert_eq!(m.region_at(3, 1), Region::Item(0));
    assert_eq!(m.region_at(3, 2), Region::Item(1));
    assert_eq!(m.region_at(3, 3), Region::Outside);
    m.set_active_index(Some(5));
    assert_eq!(m.region_at(3, 1), Region::Item(4));

    m.set_width(10);
    assert_eq!(m.region_at(40, 0), Region::Outside);
}

#[test]
fn test_region_no_options_is_menu() {
    let mut m = focused_with(cities());
    type_str(&mut m, "qq");
    assert_eq!(m.region_at(2, 1), Region::Menu);
    m.pointer_down(Region::Menu);
    assert!(m.is_open());
}

#[test]
fn test_view_lists_suggestions() {
    let mut m = focused_with(cities());
    type_str(&mut m, "Par");
    let _ = m.update(key(KeyCode::Down));
    let view = plain(&m.view());
    let lines: Vec<&str> = view.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("> Par"));
    assert_eq!(lines[1], "  Paris");
    assert_eq!(lines[2], "  Parma");
}

#[test]
fn test_view_no_options_and_placeholder() {
    let mut m = new(&[with_placeholder("Search cities"), with_candidates(cities())]);
    assert_eq!(plain(&m.view()), "> Search cities");
    m.focus();
    type_str(&mut m, "qq");
    let view = plain(&m.view());
    assert_eq!(view.lines().nth(1), Some("  No options"));
}

#[test]
fn test_view_pads_rows_to_width() {
    let mut m = new(&[with_width(8), with_candidates(cities())]);
    m.focus();
    type_str(&mut m, "lon");
    let view = plain(&m.view());
    assert_eq!(view.lines().nth(1), Some("  London  "));
}

fn remote(delay: Duration) -> (Model, Arc<Mutex<Vec<String>>>) {
    let asked = Arc::new(Mutex::new(Vec::new()));
    let log = Arc::clone(&asked);
    let fetch = fetcher_fn(move |query: String| {
        let log = Arc::clone(&log);
        async move {
            log.lock().expect("lock").push(query.clone());
            let all = ["Paris", "Parma", "London", "Lonavala"];
            Ok::<_, SourceError>(
                all.iter()
                    .filter(|c| crate::matcher::is_match(c, &query))
                    .map(|c| (*c).to_string())
                    .collect::<Vec<_>>(),
            )
        }
    });
    let mut m = new(&[with_debounce(delay), with_fetcher(fetch)]);
    m.focus();
    (m, asked)
}

#[test]
fn test_remote_edit_arms_debounce() {
    let (mut m, _) = remote(Duration::from_millis(5));
    let cmd = m.update(key(KeyCode::Char('P')));
    assert!(cmd.is_some());
    assert!(m.debouncer.is_pending());
    assert!(!m.is_loading());
}

#[test]
fn test_superseded_debounce_does_not_fetch() {
    let (mut m, _) = remote(Duration::from_millis(5));
    type_str(&mut m, "Pa");
    let id = m.debouncer.id();
    let stale = m.update(Box::new(DebounceMsg { id, tag: 1 }));
    assert!(stale.is_none());
    assert!(!m.is_loading());
    let current = m.update(Box::new(DebounceMsg { id, tag: 2 }));
    assert!(current.is_some());
    assert!(m.is_loading());
}

#[test]
fn test_flush_callback_runs_when_window_settles() {
    let (mut m, _) = remote(Duration::from_millis(5));
    let flushed = Arc::new(Mutex::new(0));
    let f = Arc::clone(&flushed);
    m.set_on_flush(Box::new(move || *f.lock().expect("lock") += 1));
    type_str(&mut m, "L");
    let id = m.debouncer.id();
    let _ = m.update(Box::new(DebounceMsg { id, tag: 1 }));
    assert_eq!(*flushed.lock().expect("lock"), 1);
}

#[test]
fn test_stale_response_is_discarded() {
    let (mut m, _) = remote(Duration::from_millis(5));
    let debounce_id = m.debouncer.id();

    // "Lon" settles and is requested first.
    type_str(&mut m, "Lon");
    assert!(m.update(Box::new(DebounceMsg { id: debounce_id, tag: 3 })).is_some());
    let lon = m.requests.latest();

    // Then the text is replaced by "Par", which settles and is requested too.
    let _ = m.update(ctrl('u'));
    type_str(&mut m, "Par");
    assert!(m.update(Box::new(DebounceMsg { id: debounce_id, tag: 7 })).is_some());
    let par = m.requests.latest();
    assert_ne!(lon, par);
    assert!(m.is_loading());

    // The "Par" response wins the race.
    let _ = m.update(Box::new(CandidatesMsg {
        id: m.id(),
        seq: par,
        query: "Par".into(),
        result: Ok(vec!["Paris".into(), "Parma".into()]),
    }));
    assert!(!m.is_loading());
    assert_eq!(
        m.matches(),
        &[Match::new("Par", "is"), Match::new("Par", "ma")]
    );

    // The slow "Lon" response arrives last and is dropped.
    let _ = m.update(Box::new(CandidatesMsg {
        id: m.id(),
        seq: lon,
        query: "Lon".into(),
        result: Ok(vec!["London".into()]),
    }));
    assert_eq!(m.candidates(), &["Paris".to_string(), "Parma".to_string()]);
    assert_eq!(m.matches().len(), 2);
    assert_eq!(m.value(), "Par");
}

#[test]
fn test_no_options_waits_for_debounced_lookup() {
    let (mut m, _) = remote(Duration::from_millis(5));
    type_str(&mut m, "P");
    assert!(m.lookup_pending());
    assert!(!m.is_loading());
    assert!(m.matches().is_empty());
    assert!(!m.shows_no_options());
    assert_eq!(m.phase(), Phase::Loading);
    assert!(!plain(&m.view()).contains(NO_OPTIONS));

    let id = m.debouncer.id();
    let _ = m.update(Box::new(DebounceMsg { id, tag: 1 }));
    assert!(!m.lookup_pending());
    assert!(!m.shows_no_options());

    let seq = m.requests.latest();
    let _ = m.update(Box::new(CandidatesMsg {
        id: m.id(),
        seq,
        query: "P".into(),
        result: Ok(Vec::new()),
    }));
    assert!(m.shows_no_options());
    assert_eq!(m.phase(), Phase::FocusedNoMatches);
    assert!(plain(&m.view()).contains(NO_OPTIONS));
}

#[test]
fn test_static_mode_has_no_pending_lookup() {
    let mut m = focused_with(cities());
    type_str(&mut m, "Q");
    assert!(!m.lookup_pending());
    assert!(m.shows_no_options());
}

#[test]
fn test_foreign_response_is_ignored() {
    let (mut m, _) = remote(Duration::from_millis(5));
    let seq = m.requests.issue();
    let _ = m.update(Box::new(CandidatesMsg {
        id: m.id() + 1000,
        seq,
        query: "x".into(),
        result: Ok(vec!["x".into()]),
    }));
    assert!(m.candidates().is_empty());
    assert!(m.requests.in_flight());
}

#[test]
fn test_failed_fetch_yields_no_suggestions() {
    let (mut m, _) = remote(Duration::from_millis(5));
    m.set_candidates(vec!["Paris".into()]);
    type_str(&mut m, "P");
    let seq = m.requests.issue();
    let _ = m.set_loading(true);
    let _ = m.update(Box::new(CandidatesMsg {
        id: m.id(),
        seq,
        query: "P".into(),
        result: Err(SourceError::Status(503)),
    }));
    assert!(!m.is_loading());
    assert!(m.matches().is_empty());
    assert!(!m.is_open());
}

#[test]
fn test_commit_invalidates_in_flight_request() {
    let (mut m, _) = remote(Duration::from_millis(5));
    m.set_candidates(vec!["Paris".into(), "Parma".into()]);
    type_str(&mut m, "Par");
    let seq = m.requests.issue();
    let _ = m.update(key(KeyCode::Down));
    let _ = m.update(key(KeyCode::Enter));
    assert_eq!(m.value(), "Paris");
    assert!(!m.debouncer.is_pending());

    let _ = m.update(Box::new(CandidatesMsg {
        id: m.id(),
        seq,
        query: "Par".into(),
        result: Ok(Vec::new()),
    }));
    assert_eq!(m.matches(), &[Match::new("Paris", "")]);
}

#[test]
fn test_empty_query_closed_skips_fetch() {
    let (mut m, asked) = remote(Duration::from_millis(5));
    m.set_candidates(vec!["Paris".into()]);
    type_str(&mut m, "P");
    let _ = m.update(key(KeyCode::Backspace));
    let id = m.debouncer.id();
    let cmd = m.update(Box::new(DebounceMsg { id, tag: 2 }));
    assert!(cmd.is_none());
    assert!(m.candidates().is_empty());
    assert!(asked.lock().expect("lock").is_empty());
}

#[tokio::test]
async fn test_remote_pipeline_end_to_end() {
    let (mut m, asked) = remote(Duration::from_millis(5));
    type_str(&mut m, "L");
    let _ = m.update(key(KeyCode::Char('o')));

    // Settle the debounce for the latest edit.
    let id = m.debouncer.id();
    let cmd = m.update(Box::new(DebounceMsg { id, tag: 2 }));
    assert!(cmd.is_some());
    assert!(m.is_loading());
    assert_eq!(m.phase(), Phase::Loading);

    // Run the fetch directly instead of going through the batch.
    let fetcher = m.fetcher.clone().expect("remote");
    let result = fetcher(m.value()).await;
    let seq = m.requests.latest();
    let _ = m.update(Box::new(CandidatesMsg {
        id: m.id(),
        seq,
        query: m.value(),
        result,
    }));

    assert!(!m.is_loading());
    assert_eq!(
        m.matches(),
        &[Match::new("Lo", "ndon"), Match::new("Lo", "navala")]
    );
    assert_eq!(asked.lock().expect("lock").as_slice(), &["Lo".to_string()]);
}

#[tokio::test]
async fn test_refresh_fetches_immediately() {
    let (mut m, _) = remote(Duration::from_secs(60));
    m.set_value("Par");
    let cmd = m.refresh();
    assert!(cmd.is_some());
    assert!(m.is_loading());
    assert!(m.requests.in_flight());
}

#[test]
fn test_static_refresh_is_noop() {
    let mut m = focused_with(cities());
    assert!(m.refresh().is_none());
}

#[test]
fn test_spinner_ticks_only_while_loading() {
    let mut m = focused_with(cities());
    let idle = m.spinner.tick_msg();
    assert!(m.update(Box::new(idle)).is_none());

    assert!(m.set_loading(true).is_some());
    let tick = m.spinner.tick_msg();
    assert!(m.update(Box::new(tick)).is_some());
    assert_eq!(m.spinner.frame(), 1);

    assert!(m.set_loading(false).is_none());
}

#[test]
fn test_mouse_click_on_item_commits() {
    let mut m = focused_with(cities());
    m.set_origin(4, 2);
    type_str(&mut m, "Par");
    // Row 0 is the input; "Parma" is the second menu row.
    let _ = m.update(press(6, 4));
    assert!(m.is_open());
    let _ = m.update(release(6, 4));
    assert_eq!(m.value(), "Parma");
    assert!(!m.is_open());
    assert!(m.focused());
}

#[test]
fn test_mouse_release_elsewhere_does_not_commit() {
    let mut m = focused_with(cities());
    m.set_origin(4, 2);
    type_str(&mut m, "Par");
    let _ = m.update(press(6, 3));
    let _ = m.update(release(6, 4));
    assert_eq!(m.value(), "Par");
    assert!(m.is_open());
}

#[test]
fn test_mouse_press_outside_blurs() {
    let mut m = focused_with(cities());
    m.set_origin(4, 2);
    type_str(&mut m, "Par");
    let _ = m.update(press(6, 0));
    assert!(!m.focused());
    assert!(!m.is_open());
    assert_eq!(m.value(), "Par");
}

#[test]
fn test_mouse_press_on_input_focuses() {
    let mut m = new(&[with_candidates(cities())]);
    m.set_origin(0, 1);
    m.set_value("Lon");
    let _ = m.update(press(3, 1));
    assert!(m.focused());
    assert!(m.menu_visible());
}

#[test]
fn test_mouse_motion_is_ignored() {
    let mut m = focused_with(cities());
    type_str(&mut m, "Par");
    let _ = m.update(mouse(MouseEventKind::Moved, 3, 1));
    let _ = m.update(release(3, 1));
    assert_eq!(m.value(), "Par");
    assert!(m.is_open());
}
