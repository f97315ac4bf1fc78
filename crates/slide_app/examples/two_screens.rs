//! Two Screens Demo
//!
//! Replays a scripted session against the demo app:
//! - tap the red screen to present the blue one
//! - pan the blue screen right, but not far enough, so it springs back
//! - pan it right past half way to dismiss it
//! - pan the red screen left to present the blue one interactively
//!
//! Run with: cargo run -p slide_app --example two_screens [-- path/to/slide.toml]
//! Set RUST_LOG=debug to see every state change.

use std::path::PathBuf;

use slide_app::prelude::*;

const WIDTH: f32 = 390.0;
const HEIGHT: f32 = 844.0;
const FRAME_MS: f32 = 1000.0 / 60.0;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("slide.toml"));
    let config = SlideConfig::load_or_default(&config_path)?;
    tracing::info!(path = %config_path.display(), ?config, "loaded configuration");

    let mut app = SlideApp::new(&config, Rect::new(0.0, 0.0, WIDTH, HEIGHT))?;

    let mut touch_id = 0;
    let mut next_id = || {
        touch_id += 1;
        touch_id
    };

    let steps: Vec<(&str, Vec<Event>)> = vec![
        ("tap red screen", tap(next_id(), WIDTH / 2.0)),
        ("short pan right on blue screen", pan(next_id(), 20.0, 140.0)),
        ("long pan right on blue screen", pan(next_id(), 20.0, 320.0)),
        ("long pan left on red screen", pan(next_id(), 370.0, 40.0)),
    ];

    for (label, events) in steps {
        tracing::info!("--- {label}");
        for event in events {
            app.handle(event)?;
            report(&app);
        }
        settle(&mut app)?;
    }

    app.handle(Event::CloseRequested)?;
    Ok(())
}

fn touch(id: u64, x: f32, phase: u8) -> Event {
    let y = HEIGHT / 2.0;
    Event::Touch(match phase {
        0 => TouchEvent::Started {
            id,
            x,
            y,
            pressure: 1.0,
        },
        1 => TouchEvent::Moved {
            id,
            x,
            y,
            pressure: 1.0,
        },
        _ => TouchEvent::Ended { id, x, y },
    })
}

fn tap(id: u64, x: f32) -> Vec<Event> {
    vec![touch(id, x, 0), touch(id, x, 2)]
}

/// A drag from `from` to `to` in 20 moves, with a frame between each
fn pan(id: u64, from: f32, to: f32) -> Vec<Event> {
    let mut events = vec![touch(id, from, 0)];
    for i in 1..=20 {
        let x = from + (to - from) * i as f32 / 20.0;
        events.push(touch(id, x, 1));
        events.push(Event::Frame { dt_ms: FRAME_MS });
    }
    events.push(touch(id, to, 2));
    events
}

/// Tick frames until no transition needs them
fn settle(app: &mut SlideApp) -> Result<()> {
    while app.needs_frames() {
        app.handle(Event::Frame { dt_ms: FRAME_MS })?;
    }
    report(app);
    Ok(())
}

fn report(app: &SlideApp) {
    let snapshot = app.snapshot();
    tracing::debug!(
        presentation = ?snapshot.presentation,
        detail_x = snapshot.detail_origin.map(|p| p.x),
        interactive = snapshot.interactive,
        "frame"
    );
}
