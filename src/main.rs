//! Lava Leap headless runner
//!
//! Plays a campaign with a scripted input pattern and logs how each level
//! ends. Usage: `lava-leap [settings.json]` (set `RUST_LOG=info` for logs).

use lava_leap::display::{Renderer, TextDisplay};
use lava_leap::sim::{Campaign, TickInput};
use lava_leap::{CampaignError, Session, SessionEvent, Settings};

/// Scripted input: run right, hop every half second, and turn back
/// for a second out of every five
fn demo_input(time: f32) -> TickInput {
    let backtrack = time % 5.0 > 4.0;
    TickInput {
        left: backtrack,
        right: !backtrack,
        up: time % 0.5 < 0.1,
    }
}

fn run(settings: &Settings) -> Result<(), CampaignError> {
    let campaign = match &settings.levels_path {
        Some(path) => Campaign::load(path)?,
        None => Campaign::builtin(),
    };

    let mut session = Session::new(&campaign, settings)?;
    let mut display = TextDisplay::new();
    let frame_secs = settings.clamp_frame(settings.frame_secs);
    let mut time = 0.0f32;

    for frame in 0..settings.max_frames {
        let input = demo_input(time);
        let event = session.frame(frame_secs, &input);
        time += frame_secs;

        match event {
            SessionEvent::Playing => display.draw_frame(session.level()),
            SessionEvent::Restarted { level } | SessionEvent::Advanced { level } => {
                log::debug!("Frame {}: now on level {}", frame, level + 1);
                display.clear();
                display.draw_frame(session.level());
            }
            SessionEvent::Completed => {
                log::info!("Campaign completed after {} frames", frame + 1);
                break;
            }
        }
    }

    if !session.is_completed() {
        log::info!(
            "Stopped after {} frames on level {} (attempt {})",
            settings.max_frames,
            session.level_index() + 1,
            session.attempts()
        );
    }

    if settings.show_final_frame {
        println!("{}", display.frame());
    }
    Ok(())
}

fn main() {
    env_logger::init();
    log::info!("Lava Leap (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load(path),
        None => Settings::default(),
    };

    if let Err(err) = run(&settings) {
        log::error!("{}", err);
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}
