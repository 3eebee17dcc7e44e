//! Timed player feedback: banner messages and the hand-wiggle animation
//!
//! Both are driven by timers the presentation layer fires through
//! [`Feedback::tick`]. Every timer carries the generation it was scheduled
//! under; when a newer message or wiggle replaces the old one, the old
//! timers still fire but do nothing.

use glam::Vec2;

use crate::Settings;
use crate::palette::{self, Color};
use crate::sim::GameEvent;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
    Victory,
}

impl MessageKind {
    pub fn text(&self) -> &'static str {
        match self {
            MessageKind::Success => "Great Job!",
            MessageKind::Error => "Try Again!",
            MessageKind::Victory => "AMAZING! Clock Complete!",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            MessageKind::Success | MessageKind::Victory => palette::LIME_GREEN,
            MessageKind::Error => palette::HOT_MAGENTA,
        }
    }
}

/// The banner currently on screen
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    pub kind: MessageKind,
    pub shown_at_ms: u64,
    pub expires_at_ms: u64,
}

/// A pending timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Task {
    ClearMessage { generation: u64 },
    WiggleStep { generation: u64 },
}

#[derive(Debug, Clone, Copy)]
struct Timer {
    due_ms: u64,
    task: Task,
}

#[derive(Debug, Clone)]
pub struct Feedback {
    message: Option<Message>,
    message_generation: u64,
    message_ms: u64,
    victory_message_ms: u64,

    /// Current wiggle step, `None` when the hands are at rest
    wiggle_step: Option<u32>,
    wiggle_generation: u64,
    wiggle_steps: u32,
    wiggle_step_ms: u64,
    wiggle_amplitude_deg: f32,

    timers: Vec<Timer>,
}

impl Feedback {
    pub fn new(settings: &Settings) -> Self {
        Self {
            message: None,
            message_generation: 0,
            message_ms: settings.message_ms as u64,
            victory_message_ms: settings.victory_message_ms as u64,
            wiggle_step: None,
            wiggle_generation: 0,
            wiggle_steps: settings.wiggle_steps,
            wiggle_step_ms: settings.wiggle_step_ms as u64,
            wiggle_amplitude_deg: settings.wiggle_amplitude_deg,
            timers: Vec::new(),
        }
    }

    /// React to a session event at time `now_ms`
    pub fn on_event(&mut self, event: &GameEvent, now_ms: u64) {
        match event {
            GameEvent::SlotOccupied { .. } => self.show(MessageKind::Success, now_ms),
            GameEvent::PlacementIncorrect { .. } => {
                self.show(MessageKind::Error, now_ms);
                self.start_wiggle(now_ms);
            }
            GameEvent::GameComplete { .. } => self.show(MessageKind::Victory, now_ms),
            GameEvent::GameReset | GameEvent::BoardCleared => {
                self.clear_message();
                self.stop_wiggle();
            }
            _ => {}
        }
    }

    /// Replace whatever banner is up
    pub fn show(&mut self, kind: MessageKind, now_ms: u64) {
        self.message_generation += 1;
        let duration = match kind {
            MessageKind::Victory => self.victory_message_ms,
            _ => self.message_ms,
        };
        let due_ms = now_ms + duration;
        self.message = Some(Message {
            kind,
            shown_at_ms: now_ms,
            expires_at_ms: due_ms,
        });
        self.timers.push(Timer {
            due_ms,
            task: Task::ClearMessage {
                generation: self.message_generation,
            },
        });
    }

    pub fn clear_message(&mut self) {
        // Bump so any pending clear for the old banner is ignored
        self.message_generation += 1;
        self.message = None;
    }

    pub fn message(&self) -> Option<&Message> {
        self.message.as_ref()
    }

    /// Restart the wiggle from step 0
    pub fn start_wiggle(&mut self, now_ms: u64) {
        self.wiggle_generation += 1;
        if self.wiggle_steps == 0 {
            self.wiggle_step = None;
            return;
        }
        self.wiggle_step = Some(0);
        self.timers.push(Timer {
            due_ms: now_ms + self.wiggle_step_ms,
            task: Task::WiggleStep {
                generation: self.wiggle_generation,
            },
        });
    }

    /// Put the hands back at rest; pending steps become no-ops
    pub fn stop_wiggle(&mut self) {
        self.wiggle_generation += 1;
        self.wiggle_step = None;
    }

    pub fn is_wiggling(&self) -> bool {
        self.wiggle_step.is_some()
    }

    /// Current hand deflection in degrees (0 at rest)
    pub fn hand_angle_deg(&self) -> f32 {
        match self.wiggle_step {
            Some(step) => (step as f32 * 0.5).sin() * self.wiggle_amplitude_deg,
            None => 0.0,
        }
    }

    /// Tip of a clock hand of `length` pointing at 12, deflected by the wiggle
    pub fn hand_tip(&self, center: Vec2, length: f32) -> Vec2 {
        let a = self.hand_angle_deg().to_radians();
        center + Vec2::new(length * a.sin(), -length * a.cos())
    }

    /// Fire every timer due at or before `now_ms`
    pub fn tick(&mut self, now_ms: u64) {
        loop {
            let Some(i) = self
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| t.due_ms <= now_ms)
                .min_by_key(|(_, t)| t.due_ms)
                .map(|(i, _)| i)
            else {
                break;
            };
            let timer = self.timers.swap_remove(i);
            self.fire(timer);
        }
    }

    fn fire(&mut self, timer: Timer) {
        match timer.task {
            Task::ClearMessage { generation } => {
                if generation == self.message_generation {
                    self.message = None;
                }
            }
            Task::WiggleStep { generation } => {
                if generation != self.wiggle_generation {
                    return;
                }
                let Some(step) = self.wiggle_step else {
                    return;
                };
                let next = step + 1;
                if next < self.wiggle_steps {
                    self.wiggle_step = Some(next);
                    self.timers.push(Timer {
                        due_ms: timer.due_ms + self.wiggle_step_ms,
                        task: timer.task,
                    });
                } else {
                    self.wiggle_step = None;
                }
            }
        }
    }

    /// Timers still waiting to fire, superseded ones included
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}
