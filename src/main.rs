//! Volley headless runner
//!
//! Reads one JSON input object per stdin line, runs one tick per line, and
//! writes one JSON frame per line to stdout:
//!
//! ```text
//! in:  {"left":"up","right":"none","toggle_pause":false,"restart":false}
//! out: {"frame":1,"events":[...],"snapshot":{...}}
//! ```

use std::io::{self, BufRead, BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use volley::Settings;
use volley::sim::{GameEvent, MatchState, Snapshot, TickInput, tick};

/// One output line
#[derive(Serialize)]
struct Frame<'a> {
    /// Input lines consumed so far (paused or idle frames count too)
    frame: u64,
    events: &'a [GameEvent],
    snapshot: Snapshot,
}

fn main() -> io::Result<()> {
    env_logger::init();

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => Settings::default(),
    };

    let mut state = MatchState::with_settings(&settings);
    log::info!(
        "Volley starting (seed {}, first to {})",
        state.seed(),
        settings.effective_winning_score()
    );
    state.full_reset();
    state.start();

    let stdin = io::stdin();
    let mut out = BufWriter::new(io::stdout().lock());
    let mut frames: u64 = 0;

    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let input = match serde_json::from_str::<TickInput>(&line) {
            Ok(input) => input,
            Err(err) => {
                log::warn!("Bad input line {}: {}", frames + 1, err);
                TickInput::default()
            }
        };

        let events = tick(&mut state, &input);
        frames += 1;

        let frame = Frame {
            frame: frames,
            events: &events,
            snapshot: state.view().snapshot(),
        };
        serde_json::to_writer(&mut out, &frame).map_err(io::Error::other)?;
        out.write_all(b"\n")?;
    }
    out.flush()?;

    let view = state.view();
    let score = view.score();
    log::info!(
        "Input closed after {} frames ({} simulated): {} - {}, winner {:?}",
        frames,
        view.ticks(),
        score.left,
        score.right,
        view.winner()
    );
    Ok(())
}
