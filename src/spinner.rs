//! Loading spinner.
//!
//! The typeahead shows a spinner next to the input while a candidate fetch is
//! in flight. The spinner animates by scheduling its own [`TickMsg`]s; each
//! message carries the spinner's id and a tag, so ticks from an older
//! animation chain (or from another spinner) are ignored.
//!
//! ```rust
//! use bubbletea_typeahead::spinner::{new, with_spinner, LINE};
//!
//! let spinner = new(&[with_spinner(LINE.clone())]);
//! assert_eq!(spinner.view(), "|");
//! ```

use bubbletea_rs::{tick, Cmd, Msg};
use lipgloss_extras::prelude::*;
use once_cell::sync::Lazy;
use std::sync::atomic::{AtomicI64, Ordering};
use std::time::Duration;

static LAST_ID: AtomicI64 = AtomicI64::new(0);

fn next_id() -> i64 {
    LAST_ID.fetch_add(1, Ordering::SeqCst) + 1
}

/// Animation frames and their rate.
#[derive(Debug, Clone)]
pub struct Spinner {
    /// Frames cycled through in order.
    pub frames: Vec<String>,
    /// Delay between frames.
    pub fps: Duration,
}

impl Spinner {
    /// Creates a spinner from frames and frame delay.
    pub fn new(frames: Vec<String>, fps: Duration) -> Self {
        Self { frames, fps }
    }
}

fn frames(fs: &[&str]) -> Vec<String> {
    fs.iter().map(|f| (*f).to_string()).collect()
}

/// `| / - \`
pub static LINE: Lazy<Spinner> =
    Lazy::new(|| Spinner::new(frames(&["|", "/", "-", "\\"]), Duration::from_millis(100)));

/// Braille dots, the default for the typeahead.
pub static MINI_DOT: Lazy<Spinner> = Lazy::new(|| {
    Spinner::new(
        frames(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"]),
        Duration::from_millis(83),
    )
});

/// Wide braille dots.
pub static DOT: Lazy<Spinner> = Lazy::new(|| {
    Spinner::new(
        frames(&["⣾ ", "⣽ ", "⣻ ", "⢿ ", "⡿ ", "⣟ ", "⣯ ", "⣷ "]),
        Duration::from_millis(100),
    )
});

/// `...` growing and shrinking.
pub static ELLIPSIS: Lazy<Spinner> =
    Lazy::new(|| Spinner::new(frames(&["", ".", "..", "..."]), Duration::from_millis(333)));

/// Advances the spinner with the same id and tag.
#[derive(Debug, Clone)]
pub struct TickMsg {
    /// Id of the target spinner.
    pub id: i64,
    tag: i64,
}

/// Configuration option for [`new`].
pub enum SpinnerOption {
    /// Use these frames.
    WithSpinner(Spinner),
    /// Render frames with this style.
    WithStyle(Box<Style>),
}

impl SpinnerOption {
    fn apply(&self, m: &mut Model) {
        match self {
            SpinnerOption::WithSpinner(spinner) => m.spinner = spinner.clone(),
            SpinnerOption::WithStyle(style) => m.style = style.as_ref().clone(),
        }
    }
}

/// Option setting the frames.
pub fn with_spinner(spinner: Spinner) -> SpinnerOption {
    SpinnerOption::WithSpinner(spinner)
}

/// Option setting the style.
pub fn with_style(style: Style) -> SpinnerOption {
    SpinnerOption::WithStyle(Box::new(style))
}

/// Spinner state.
#[derive(Debug)]
pub struct Model {
    /// Frames in use.
    pub spinner: Spinner,
    /// Style applied to the current frame.
    pub style: Style,
    frame: usize,
    id: i64,
    tag: i64,
}

/// Creates a spinner with options applied in order.
pub fn new(opts: &[SpinnerOption]) -> Model {
    let mut m = Model {
        spinner: MINI_DOT.clone(),
        style: Style::new(),
        frame: 0,
        id: next_id(),
        tag: 0,
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

impl Model {
    /// Unique id for message routing.
    pub fn id(&self) -> i64 {
        self.id
    }

    /// Index of the frame currently shown.
    pub fn frame(&self) -> usize {
        self.frame
    }

    /// A tick for the current animation chain.
    pub fn tick_msg(&self) -> TickMsg {
        TickMsg {
            id: self.id,
            tag: self.tag,
        }
    }

    /// Starts a fresh animation chain from the first frame.
    ///
    /// Ticks belonging to a previous chain are rejected afterwards.
    pub fn start(&mut self) -> Cmd {
        self.frame = 0;
        self.tag += 1;
        self.tick()
    }

    fn tick(&self) -> Cmd {
        let id = self.id;
        let tag = self.tag;
        tick(self.spinner.fps, move |_| Box::new(TickMsg { id, tag }) as Msg)
    }

    /// Advances on a matching [`TickMsg`] and schedules the next one.
    pub fn update(&mut self, msg: &Msg) -> Option<Cmd> {
        let tick_msg = msg.downcast_ref::<TickMsg>()?;
        if tick_msg.id != self.id || tick_msg.tag != self.tag {
            return None;
        }

        self.frame += 1;
        if self.frame >= self.spinner.frames.len() {
            self.frame = 0;
        }
        self.tag += 1;
        Some(self.tick())
    }

    /// Current frame, styled.
    pub fn view(&self) -> String {
        match self.spinner.frames.get(self.frame) {
            Some(frame) => self.style.render(frame),
            None => String::new(),
        }
    }
}
