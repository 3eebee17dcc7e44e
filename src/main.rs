//! Hour Tower entry point
//!
//! No windowing backend ships with the crate; the native binary plays one
//! scripted game headlessly and logs what a canvas front end would draw.
//! Pass a seed as the first argument to replay a deal.

use glam::Vec2;
use rand::Rng;

use hour_tower::Settings;
use hour_tower::feedback::Feedback;
use hour_tower::sim::tower::block_color;
use hour_tower::sim::{GameEvent, GameSession, PlacementResult};

/// Simulated time between pointer gestures (ms)
const GESTURE_MS: u64 = 700;

fn main() {
    env_logger::init();

    let seed = std::env::args()
        .nth(1)
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or_else(|| rand::rng().random());
    log::info!("Hour Tower (headless) starting, seed {}", seed);

    let settings = Settings::default();
    let mut session = match GameSession::new(settings.clone(), seed) {
        Ok(session) => session,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    let mut feedback = Feedback::new(&settings);
    let mut now_ms = 0u64;
    present(&mut session, &mut feedback, now_ms);

    // Every third hour is first dropped on the clock center to show a miss
    let center = session.board().center;
    let mut misses = 0;
    while let Some(number) = session.tiles().first().map(|t| t.number) {
        let Some(target) = session.board().find_slot(number).map(|s| s.pos) else {
            break;
        };
        if number % 3 == 0 && misses < number {
            misses = number;
            drag_and_drop(&mut session, number, center);
        } else {
            drag_and_drop(&mut session, number, target);
        }
        now_ms += GESTURE_MS;
        feedback.tick(now_ms);
        present(&mut session, &mut feedback, now_ms);
    }

    now_ms += settings.victory_message_ms as u64;
    feedback.tick(now_ms);
    log::info!(
        "Final score {}, tower blocks {}",
        session.score(),
        session.tower().tiers_built
    );
}

/// One pointer gesture: grab the tile, move it in a few frames, let go
fn drag_and_drop(session: &mut GameSession, number: u8, to: Vec2) -> Option<PlacementResult> {
    let from = session.tile(number)?.pos;
    if !session.begin_drag(number, from) {
        return None;
    }
    for step in 1..=4 {
        let p = from.lerp(to, step as f32 / 4.0);
        session.drag_tile(number, p.x, p.y);
    }
    let result = session.release_drag();
    log::debug!("Dropped {} -> {:?}", number, result);
    result
}

/// Stand-in for the canvas: log the notifications a renderer would act on
fn present(session: &mut GameSession, feedback: &mut Feedback, now_ms: u64) {
    for event in session.drain_events() {
        feedback.on_event(&event, now_ms);
        match &event {
            GameEvent::TileMoved { .. } => {}
            GameEvent::TileCreated { number, pos, color } => {
                log::debug!("tile {} at ({:.0}, {:.0}) {}", number, pos.x, pos.y, color.to_hex());
            }
            GameEvent::ScoreChanged { score } => log::info!("Score: {}", score),
            GameEvent::TierProgress { count, tier_size } => {
                log::info!("{}/{} Numbers Placed", count, tier_size)
            }
            GameEvent::TierComplete { tiers_built } => {
                let color = block_color(tiers_built - 1);
                log::info!("Tower block added ({} total) {}", tiers_built, color.to_hex())
            }
            GameEvent::PlaySound(effect) => log::info!("♪ {}", effect.as_str()),
            other => log::debug!("{:?}", other),
        }
    }
    if let Some(msg) = feedback.message() {
        log::info!("[{}] {}", msg.kind.color().to_hex(), msg.kind.text());
    }
}
