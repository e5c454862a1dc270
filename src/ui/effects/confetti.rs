//! Confetti particle field
//!
//! Receives `Burst` requests through `ConfettiPort`, simulates paper particles
//! and draws them with a canvas overlay that never captures input.
//!
//! # Physics
//!
//! Tuned in "frames at 60 fps": each particle launches inside the burst cone
//! with a random speed, loses 10% of it per frame, falls under constant
//! gravity, wobbles sideways and fades out over `LIFETIME_FRAMES`.

use std::f32::consts::PI;
use std::time::Instant;

use iced::widget::canvas::{self, Frame, Geometry, Program};
use iced::widget::Canvas;
use iced::{Color, Element, Fill, Point, Rectangle, Renderer, Size, Theme, Vector, mouse};
use rand::Rng;

use crate::features::{Burst, ConfettiPort, Rgb};

const START_VELOCITY: f32 = 45.0;
const DECAY: f32 = 0.9;
const GRAVITY: f32 = 3.0;
const LIFETIME_FRAMES: f32 = 200.0;
/// Oldest particles are dropped past this count
const MAX_PARTICLES: usize = 2500;
/// Avoid huge jumps after the window was hidden
const MAX_FRAME_STEP: f32 = 4.0;

/// Convert a feature color into an iced color
pub fn to_color(rgb: Rgb) -> Color {
    Color::from_rgb8(rgb.r, rgb.g, rgb.b)
}

#[derive(Debug, Clone)]
struct Particle {
    position: Point,
    /// Direction of travel in radians, screen coordinates (y down)
    heading: f32,
    velocity: f32,
    wobble: f32,
    wobble_speed: f32,
    tilt: f32,
    scalar: f32,
    color: Color,
    age: f32,
}

impl Particle {
    fn spawn(burst: &Burst, viewport: Size, rng: &mut impl Rng) -> Self {
        let spread = burst.spread.to_radians();
        let heading = -burst.angle.to_radians() + (0.5 * spread - rng.random::<f32>() * spread);
        let color = if burst.colors.is_empty() {
            Color::WHITE
        } else {
            to_color(burst.colors[rng.random_range(0..burst.colors.len())])
        };

        Self {
            position: Point::new(
                burst.origin.x * viewport.width,
                burst.origin.y * viewport.height,
            ),
            heading,
            velocity: START_VELOCITY * 0.5 + rng.random::<f32>() * START_VELOCITY,
            wobble: rng.random::<f32>() * 10.0,
            wobble_speed: (rng.random::<f32>() * 0.1 + 0.05).min(0.11),
            tilt: (rng.random::<f32>() * 0.5 + 0.25) * PI,
            scalar: burst.scalar.unwrap_or(1.0),
            color,
            age: 0.0,
        }
    }

    /// Advance by `frames` 60 fps frames; returns false once faded out
    fn step(&mut self, frames: f32) -> bool {
        self.position.x += self.heading.cos() * self.velocity * frames;
        self.position.y += (self.heading.sin() * self.velocity + GRAVITY) * frames;
        self.velocity *= DECAY.powf(frames);
        self.wobble += self.wobble_speed * frames;
        self.tilt += 0.1 * frames;
        self.age += frames;
        self.age < LIFETIME_FRAMES
    }

    fn opacity(&self) -> f32 {
        (1.0 - self.age / LIFETIME_FRAMES).clamp(0.0, 1.0)
    }

    fn draw_position(&self) -> Point {
        Point::new(
            self.position.x + 10.0 * self.scalar * self.wobble.cos(),
            self.position.y + 10.0 * self.scalar * self.wobble.sin(),
        )
    }
}

/// All live confetti
#[derive(Debug)]
pub struct ConfettiField {
    particles: Vec<Particle>,
    viewport: Size,
    last_tick: Option<Instant>,
    enabled: bool,
}

impl Default for ConfettiField {
    fn default() -> Self {
        Self::new(Size::new(1200.0, 820.0))
    }
}

impl ConfettiField {
    pub fn new(viewport: Size) -> Self {
        Self {
            particles: Vec::new(),
            viewport,
            last_tick: None,
            enabled: true,
        }
    }

    /// Disabled fields accept bursts and drop them
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled {
            self.particles.clear();
        }
    }

    pub fn set_viewport(&mut self, viewport: Size) {
        self.viewport = viewport;
    }

    pub fn is_active(&self) -> bool {
        self.particle_count() > 0
    }

    pub fn particle_count(&self) -> usize {
        self.particles.len()
    }

    /// Advance the simulation to `now`
    pub fn tick(&mut self, now: Instant) {
        let frames = match self.last_tick {
            Some(last) => (now.saturating_duration_since(last).as_secs_f32() * 60.0)
                .min(MAX_FRAME_STEP),
            None => 1.0,
        };
        self.last_tick = Some(now);

        if frames > 0.0 {
            self.particles.retain_mut(|particle| particle.step(frames));
        }
        if self.particles.is_empty() {
            self.last_tick = None;
        }
    }

    /// Canvas overlay drawing the current particles
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        Canvas::new(ConfettiLayer {
            particles: &self.particles,
        })
        .width(Fill)
        .height(Fill)
        .into()
    }
}

impl ConfettiPort for ConfettiField {
    fn fire(&mut self, burst: Burst) {
        if !self.enabled {
            return;
        }
        let mut rng = rand::rng();
        self.particles.extend(
            (0..burst.particle_count).map(|_| Particle::spawn(&burst, self.viewport, &mut rng)),
        );

        if self.particles.len() > MAX_PARTICLES {
            let excess = self.particles.len() - MAX_PARTICLES;
            self.particles.drain(..excess);
        }
    }
}

struct ConfettiLayer<'a> {
    particles: &'a [Particle],
}

impl<'a, Message> Program<Message> for ConfettiLayer<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for particle in self.particles {
            let center = particle.draw_position();
            let size = Size::new(10.0 * particle.scalar, 6.0 * particle.scalar);
            let color = Color {
                a: particle.opacity(),
                ..particle.color
            };

            frame.with_save(|frame| {
                frame.translate(Vector::new(center.x, center.y));
                frame.rotate(particle.tilt);
                frame.fill_rectangle(
                    Point::new(-size.width / 2.0, -size.height / 2.0),
                    size,
                    canvas::Fill::from(color),
                );
            });
        }

        vec![frame.into_geometry()]
    }
}
