//! Package tiers and their celebration profiles

use super::burst::Rgb;

/// Donation tier derived from the free-text package name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackageTier {
    Prosperity,
    Playful,
    Romantic,
    HighRoller,
    Investor,
    Maximal,
    Default,
}

/// Ordered substring patterns; the first match wins
const PATTERNS: [(&str, PackageTier); 6] = [
    ("Lộc Phát", PackageTier::Prosperity),
    ("Vui Vẻ", PackageTier::Playful),
    ("Người Yêu", PackageTier::Romantic),
    ("Dân Chơi", PackageTier::HighRoller),
    ("Shark Tank", PackageTier::Investor),
    ("Vô Cực", PackageTier::Maximal),
];

// Palettes
/// Green & gold
const PROSPERITY_COLORS: &[Rgb] = &[Rgb::hex(0x10b981), Rgb::hex(0xfbbf24), Rgb::hex(0xf59e0b)];
const PLAYFUL_COLORS: &[Rgb] = &[
    Rgb::hex(0xf97316),
    Rgb::hex(0xef4444),
    Rgb::hex(0xeab308),
    Rgb::hex(0x3b82f6),
];
const ROMANTIC_COLORS: &[Rgb] = &[
    Rgb::hex(0xec4899),
    Rgb::hex(0xdb2777),
    Rgb::hex(0xbe185d),
    Rgb::hex(0xffffff),
];
/// Purple / neon
const HIGH_ROLLER_COLORS: &[Rgb] = &[Rgb::hex(0xa855f7), Rgb::hex(0x6366f1), Rgb::hex(0xec4899)];
const INVESTOR_COLORS: &[Rgb] = &[Rgb::hex(0xfbbf24), Rgb::hex(0xd97706), Rgb::hex(0xffffff)];
/// Grayscale plus accents
const MAXIMAL_COLORS: &[Rgb] = &[
    Rgb::hex(0xffffff),
    Rgb::hex(0x000000),
    Rgb::hex(0xef4444),
    Rgb::hex(0x3b82f6),
];
const DEFAULT_COLORS: &[Rgb] = &[Rgb::hex(0xff0000), Rgb::hex(0x00ff00), Rgb::hex(0x0000ff)];

/// Colors, particle intensity and thank-you message for a tier
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CelebrationProfile {
    pub colors: &'static [Rgb],
    /// Multiplier applied to the per-frame particle count
    pub intensity: f32,
    pub message: &'static str,
}

impl PackageTier {
    /// Classify a package name (case-sensitive substring match)
    pub fn classify(package_name: &str) -> Self {
        PATTERNS
            .iter()
            .find(|(pattern, _)| package_name.contains(pattern))
            .map(|(_, tier)| *tier)
            .unwrap_or(PackageTier::Default)
    }

    /// All tiers in match priority order, `Default` last
    #[cfg(test)]
    pub fn all() -> &'static [PackageTier] {
        &[
            PackageTier::Prosperity,
            PackageTier::Playful,
            PackageTier::Romantic,
            PackageTier::HighRoller,
            PackageTier::Investor,
            PackageTier::Maximal,
            PackageTier::Default,
        ]
    }

    /// Whether this tier gets the delayed centered burst
    pub fn has_encore(&self) -> bool {
        matches!(self, PackageTier::Romantic)
    }

    pub fn profile(&self) -> CelebrationProfile {
        match self {
            PackageTier::Prosperity => CelebrationProfile {
                colors: PROSPERITY_COLORS,
                intensity: 1.0,
                message: "Tuyệt vời! +68 điểm may mắn đã được cộng vào đời bạn!",
            },
            PackageTier::Playful => CelebrationProfile {
                colors: PLAYFUL_COLORS,
                intensity: 1.0,
                message: "Đã nhận! Tối nay tui có trà sữa uống rồi, cảm ơn bồ tèo!",
            },
            PackageTier::Romantic => CelebrationProfile {
                colors: ROMANTIC_COLORS,
                intensity: 1.0,
                message: "Yêu anh/em nhất trên đời! Chụt chụt 😘",
            },
            PackageTier::HighRoller => CelebrationProfile {
                colors: HIGH_ROLLER_COLORS,
                intensity: 1.5,
                message: "U là trời! Đẳng cấp dân chơi là đây. Respect 🙏",
            },
            PackageTier::Investor => CelebrationProfile {
                colors: INVESTOR_COLORS,
                intensity: 2.0,
                message: "Shark đã chốt deal! Em hứa sẽ sinh lời (bằng cân nặng)!",
            },
            PackageTier::Maximal => CelebrationProfile {
                colors: MAXIMAL_COLORS,
                intensity: 3.0,
                message: "ĐÃ NHẬN ĐƯỢC LINH HỒN CỦA BẠN. CHỦ NHÂN!!! 🙇‍♂️",
            },
            PackageTier::Default => CelebrationProfile {
                colors: DEFAULT_COLORS,
                intensity: 1.0,
                message: "Cảm ơn bạn đã donate!",
            },
        }
    }
}

impl std::fmt::Display for PackageTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PackageTier::Prosperity => write!(f, "prosperity"),
            PackageTier::Playful => write!(f, "playful"),
            PackageTier::Romantic => write!(f, "romantic"),
            PackageTier::HighRoller => write!(f, "high-roller"),
            PackageTier::Investor => write!(f, "investor"),
            PackageTier::Maximal => write!(f, "maximal"),
            PackageTier::Default => write!(f, "default"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_labels_classify() {
        assert_eq!(PackageTier::classify("Gói Lộc Phát"), PackageTier::Prosperity);
        assert_eq!(PackageTier::classify("Gói Vui Vẻ"), PackageTier::Playful);
        assert_eq!(PackageTier::classify("Gói Người Yêu"), PackageTier::Romantic);
        assert_eq!(PackageTier::classify("Gói Dân Chơi"), PackageTier::HighRoller);
        assert_eq!(PackageTier::classify("Gói Shark Tank"), PackageTier::Investor);
        assert_eq!(PackageTier::classify("Gói Vô Cực"), PackageTier::Maximal);
    }

    #[test]
    fn test_unknown_label_falls_back_to_default() {
        assert_eq!(PackageTier::classify("Gói Bí Ẩn"), PackageTier::Default);
        assert_eq!(PackageTier::classify(""), PackageTier::Default);
        assert_eq!(PackageTier::classify("Tùy tâm"), PackageTier::Default);
    }

    #[test]
    fn test_first_match_wins() {
        // Both "Vui Vẻ" and "Vô Cực" appear; "Vui Vẻ" is earlier in priority order
        assert_eq!(
            PackageTier::classify("Vô Cực Vui Vẻ"),
            PackageTier::Playful
        );
        assert_eq!(
            PackageTier::classify("Shark Tank x Lộc Phát"),
            PackageTier::Prosperity
        );
    }

    #[test]
    fn test_match_is_case_sensitive() {
        assert_eq!(PackageTier::classify("gói vui vẻ"), PackageTier::Default);
        assert_eq!(PackageTier::classify("SHARK TANK"), PackageTier::Default);
    }

    #[test]
    fn test_profiles() {
        let maximal = PackageTier::Maximal.profile();
        assert_eq!(maximal.intensity, 3.0);
        assert_eq!(maximal.colors[1], Rgb::hex(0x000000));

        assert_eq!(PackageTier::HighRoller.profile().intensity, 1.5);
        assert_eq!(PackageTier::Investor.profile().intensity, 2.0);

        let fallback = PackageTier::Default.profile();
        assert_eq!(fallback.intensity, 1.0);
        assert_eq!(fallback.colors.len(), 3);
        assert_eq!(fallback.message, "Cảm ơn bạn đã donate!");
    }

    #[test]
    fn test_messages_are_distinct() {
        let mut messages: Vec<_> = PackageTier::all()
            .iter()
            .map(|tier| tier.profile().message)
            .collect();
        messages.sort();
        messages.dedup();
        assert_eq!(messages.len(), PackageTier::all().len());
    }

    #[test]
    fn test_only_romantic_has_encore() {
        for tier in PackageTier::all() {
            assert_eq!(tier.has_encore(), *tier == PackageTier::Romantic);
        }
    }
}
