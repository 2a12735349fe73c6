/// Floating hearts
/// Decorative background effect, independent of everything else
use iced::widget::canvas::{self, Program};
use iced::widget::text::Shaping;
use iced::{mouse, Color, Pixels, Point, Rectangle, Renderer, Theme};
use rand::Rng;
use std::time::{Duration, Instant};

use crate::Message;

/// A new heart appears this often
pub const SPAWN_INTERVAL: Duration = Duration::from_secs(1);
/// Hearts are removed this long after spawning, whatever their animation
pub const HEART_LIFETIME: Duration = Duration::from_secs(6);

pub const HEART_EMOJIS: [&str; 5] = ["💖", "💕", "💗", "💝", "💘"];

const HEART_SIZE: f32 = 28.0;

/// One floating heart
#[derive(Debug, Clone, PartialEq)]
pub struct Heart {
    /// Horizontal position, percent of the width in [0, 100)
    pub left_percent: f32,
    /// Time to float from bottom to top, in [3, 6) s
    pub duration: Duration,
    /// Wait before starting to float, in [0, 2) s
    pub delay: Duration,
    pub emoji: &'static str,
    pub born: Instant,
}

impl Heart {
    pub fn random<R: Rng + ?Sized>(rng: &mut R, born: Instant) -> Self {
        Self {
            left_percent: rng.gen_range(0.0..100.0),
            duration: Duration::from_secs_f32(rng.gen_range(3.0..6.0)),
            delay: Duration::from_secs_f32(rng.gen_range(0.0..2.0)),
            emoji: HEART_EMOJIS[rng.gen_range(0..HEART_EMOJIS.len())],
            born,
        }
    }

    /// Animation progress in [0, 1), or None before the delay or after the end
    pub fn progress(&self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.born);
        let moving = elapsed.checked_sub(self.delay)?;
        let progress = moving.as_secs_f32() / self.duration.as_secs_f32();
        (progress < 1.0).then_some(progress)
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.born) >= HEART_LIFETIME
    }
}

/// All hearts currently alive, plus the clock used to draw them
#[derive(Debug, Default)]
pub struct Hearts {
    hearts: Vec<Heart>,
    now: Option<Instant>,
}

impl Hearts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one random heart and drop the expired ones
    pub fn spawn<R: Rng + ?Sized>(&mut self, rng: &mut R, now: Instant) {
        self.advance(now);
        self.hearts.push(Heart::random(rng, now));
    }

    /// Move the clock forward and drop expired hearts
    pub fn advance(&mut self, now: Instant) -> usize {
        self.now = Some(now);
        self.prune(now)
    }

    /// Remove hearts past their lifetime. Returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.hearts.len();
        self.hearts.retain(|heart| !heart.is_expired(now));
        before - self.hearts.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Heart> {
        self.hearts.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }
}

impl Program<Message> for Hearts {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let Some(now) = self.now else {
            return vec![frame.into_geometry()];
        };

        // Float from just below the bottom edge to just above the top edge
        let travel = bounds.height + HEART_SIZE * 2.0;

        for heart in self.iter() {
            let Some(progress) = heart.progress(now) else {
                continue;
            };

            let x = bounds.width * heart.left_percent / 100.0;
            let y = bounds.height + HEART_SIZE - travel * progress;

            frame.fill_text(canvas::Text {
                content: heart.emoji.to_string(),
                position: Point::new(x, y),
                size: Pixels(HEART_SIZE),
                color: Color {
                    a: 0.8 * (1.0 - progress),
                    ..Color::from_rgb(1.0, 0.41, 0.71)
                },
                shaping: Shaping::Advanced,
                ..canvas::Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_hearts_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let now = Instant::now();

        for _ in 0..500 {
            let heart = Heart::random(&mut rng, now);
            assert!((0.0..100.0).contains(&heart.left_percent));
            assert!(heart.duration >= Duration::from_secs(3));
            assert!(heart.duration < Duration::from_secs(6));
            assert!(heart.delay < Duration::from_secs(2));
            assert!(HEART_EMOJIS.contains(&heart.emoji));
        }
    }

    #[test]
    fn test_progress_waits_for_delay() {
        let born = Instant::now();
        let heart = Heart {
            left_percent: 50.0,
            duration: Duration::from_secs(4),
            delay: Duration::from_secs(1),
            emoji: HEART_EMOJIS[0],
            born,
        };

        assert_eq!(heart.progress(born), None);
        assert_eq!(heart.progress(born + Duration::from_secs(1)), Some(0.0));
        assert_eq!(heart.progress(born + Duration::from_secs(3)), Some(0.5));
        assert_eq!(heart.progress(born + Duration::from_secs(5)), None);
    }

    #[test]
    fn test_hearts_removed_after_lifetime() {
        let mut rng = StdRng::seed_from_u64(1);
        let start = Instant::now();
        let mut hearts = Hearts::new();

        for second in 0..6 {
            hearts.spawn(&mut rng, start + Duration::from_secs(second));
        }
        assert_eq!(hearts.iter().count(), 6);

        // The first heart hits its lifetime at exactly 6 s
        hearts.spawn(&mut rng, start + Duration::from_secs(6));
        assert_eq!(hearts.iter().count(), 6);
        assert!(hearts.iter().all(|h| h.born > start));

        assert_eq!(hearts.advance(start + Duration::from_secs(20)), 6);
        assert!(hearts.is_empty());
    }
}
