//! A city picker over a static list. With `--remote <url>` candidates come
//! from an endpoint answering `[{"name": ..}, ..]`; `{query}` in the URL is
//! replaced by the typed text. Logs go to `cities.log`.

use std::fs::File;

use bubbletea_rs::{quit, Cmd, KeyMsg, Model, MouseMotion, Msg, Program};
use bubbletea_typeahead::prelude::*;
use crossterm::event::{KeyCode, KeyModifiers};
use lipgloss_extras::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

const CITIES: &[&str] = &[
    "Amsterdam", "Athens", "Barcelona", "Berlin", "Bern", "Bologna", "Bordeaux", "Bratislava",
    "Brussels", "Bucharest", "Budapest", "Copenhagen", "Dublin", "Florence", "Geneva", "Hamburg",
    "Helsinki", "Lisbon", "Ljubljana", "London", "Lyon", "Madrid", "Milan", "Munich", "Naples",
    "Oslo", "Paris", "Parma", "Porto", "Prague", "Riga", "Rome", "Seville", "Stockholm",
    "Tallinn", "Turin", "Valencia", "Venice", "Vienna", "Vilnius", "Warsaw", "Zagreb", "Zurich",
];

struct App {
    input: Typeahead,
    chosen: Option<String>,
}

fn remote() -> Option<String> {
    let mut args = std::env::args().skip_while(|a| a != "--remote");
    args.next()?;
    args.next()
}

impl Model for App {
    fn init() -> (Self, Option<Cmd>) {
        let mut input = if let Some(url) = remote() {
            let fetch = HttpSource::new(url).fetcher();
            typeahead_new(&[
                with_placeholder("City"),
                with_width(30),
                with_fetcher(fetcher_fn(move |q| {
                    let fetch = fetch.clone();
                    async move {
                        log::info!("looking up {q:?}");
                        fetch(q).await
                    }
                })),
            ])
        } else {
            typeahead_new(&[
                with_placeholder("City"),
                with_width(30),
                with_menu_height(6),
                with_candidates(CITIES.iter().map(|c| c.to_string()).collect()),
            ])
        };
        // Title and a blank line sit above the input.
        input.set_origin(0, 2);
        input.focus();
        (Self { input, chosen: None }, None)
    }

    fn update(&mut self, msg: Msg) -> Option<Cmd> {
        if let Some(key) = msg.downcast_ref::<KeyMsg>() {
            match key.key {
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                    return Some(quit());
                }
                KeyCode::Esc if !self.input.is_open() => return Some(quit()),
                KeyCode::Enter if !self.input.is_open() && !self.input.value().is_empty() => {
                    self.chosen = Some(self.input.value());
                    log::info!("chose {:?}", self.chosen);
                }
                _ => {}
            }
        }
        self.input.update(msg)
    }

    fn view(&self) -> String {
        let title = Style::new().bold(true).render("Where to?");
        let hint = Style::new()
            .foreground(Color::from("240"))
            .render("↑/↓ choose • enter or click select • esc close/quit");
        let mut v = format!("{}\n\n{}\n\n{}", title, self.input.view(), hint);
        if let Some(chosen) = &self.chosen {
            v.push_str(&format!("\n\nChosen: {chosen}"));
        }
        v
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create("cities.log")?;
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)?;

    let program = Program::<App>::builder()
        .alt_screen(true)
        .mouse_motion(MouseMotion::Cell)
        .build()?;
    program.run().await?;
    Ok(())
}
