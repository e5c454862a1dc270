//! Burst requests handed to the particle subsystem

/// Plain sRGB color, kept free of any renderer type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// Build from a `0xRRGGBB` literal
    pub const fn hex(value: u32) -> Self {
        Self {
            r: ((value >> 16) & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: (value & 0xff) as u8,
        }
    }
}

/// Burst origin in normalized viewport coordinates (0.0 - 1.0)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Origin {
    pub x: f32,
    pub y: f32,
}

impl Origin {
    pub const LEFT_EDGE: Origin = Origin { x: 0.0, y: 0.5 };
    pub const RIGHT_EDGE: Origin = Origin { x: 1.0, y: 0.5 };
}

/// One request to the particle subsystem
#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    pub particle_count: u32,
    /// Launch direction in degrees, 90 = straight up
    pub angle: f32,
    /// Cone width in degrees
    pub spread: f32,
    pub origin: Origin,
    pub colors: Vec<Rgb>,
    /// Stacking order relative to other overlays
    pub layer: u32,
    /// Particle size multiplier, `None` = 1.0
    pub scalar: Option<f32>,
}

/// Layer that sits above every modal
pub const CELEBRATION_LAYER: u32 = 101;

/// Particles per side per frame before intensity scaling
const FRAME_PARTICLES: f32 = 5.0;

impl Burst {
    /// Per-frame particle count for a given intensity multiplier
    pub fn frame_particle_count(intensity: f32) -> u32 {
        (FRAME_PARTICLES * intensity).floor().max(0.0) as u32
    }

    /// The two mirrored bursts emitted on every frame of a celebration loop
    pub fn frame_pair(colors: &[Rgb], intensity: f32) -> [Burst; 2] {
        let particle_count = Self::frame_particle_count(intensity);
        let side = |angle: f32, origin: Origin| Burst {
            particle_count,
            angle,
            spread: 55.0,
            origin,
            colors: colors.to_vec(),
            layer: CELEBRATION_LAYER,
            scalar: None,
        };
        [side(60.0, Origin::LEFT_EDGE), side(120.0, Origin::RIGHT_EDGE)]
    }

    /// Larger centered heart-colored burst fired once after a romantic confirmation
    pub fn encore() -> Burst {
        Burst {
            particle_count: 100,
            angle: 90.0,
            spread: 100.0,
            origin: Origin { x: 0.5, y: 0.6 },
            colors: vec![Rgb::hex(0xec4899), Rgb::hex(0xffc0cb)],
            layer: CELEBRATION_LAYER,
            scalar: Some(1.2),
        }
    }
}

/// Capability: something that can render confetti bursts
pub trait ConfettiPort {
    fn fire(&mut self, burst: Burst);
}

/// Collects bursts instead of drawing them
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingConfetti {
    pub bursts: Vec<Burst>,
}

#[cfg(test)]
impl ConfettiPort for RecordingConfetti {
    fn fire(&mut self, burst: Burst) {
        self.bursts.push(burst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(Rgb::hex(0x10b981), Rgb { r: 0x10, g: 0xb9, b: 0x81 });
        assert_eq!(Rgb::hex(0xffffff), Rgb { r: 255, g: 255, b: 255 });
    }

    #[test]
    fn test_frame_particle_count_floors() {
        assert_eq!(Burst::frame_particle_count(1.0), 5);
        assert_eq!(Burst::frame_particle_count(1.5), 7);
        assert_eq!(Burst::frame_particle_count(2.0), 10);
        assert_eq!(Burst::frame_particle_count(3.0), 15);
    }

    #[test]
    fn test_frame_pair_is_mirrored() {
        let colors = [Rgb::hex(0xff0000)];
        let [left, right] = Burst::frame_pair(&colors, 1.0);

        assert_eq!(left.origin.x, 0.0);
        assert_eq!(right.origin.x, 1.0);
        assert_eq!(left.angle + right.angle, 180.0);
        assert_eq!(left.spread, right.spread);
        assert_eq!(left.particle_count, right.particle_count);
        assert_eq!(left.layer, CELEBRATION_LAYER);
        assert!(left.scalar.is_none());
    }

    #[test]
    fn test_encore_shape() {
        let burst = Burst::encore();
        assert_eq!(burst.particle_count, 100);
        assert_eq!(burst.spread, 100.0);
        assert_eq!(burst.origin.y, 0.6);
        assert_eq!(burst.scalar, Some(1.2));
    }
}
