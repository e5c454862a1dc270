//! Packages offered on the landing page
//!
//! The labels are matched verbatim by `PackageTier::classify`, so renaming one
//! here changes which celebration it gets.

/// Package chosen by the donor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationPackage {
    /// Display-formatted amount, e.g. "100.000đ"
    pub amount: String,
    pub name: String,
}

impl DonationPackage {
    pub fn new(amount: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            amount: amount.into(),
            name: name.into(),
        }
    }
}

impl Default for DonationPackage {
    fn default() -> Self {
        Self::new("0đ", "Tùy tâm")
    }
}

/// A card on the landing page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PackageListing {
    pub name: &'static str,
    pub amount: &'static str,
    pub emoji: &'static str,
    pub tagline: &'static str,
}

impl PackageListing {
    pub fn to_package(&self) -> DonationPackage {
        DonationPackage::new(self.amount, self.name)
    }
}

pub const CATALOG: &[PackageListing] = &[
    PackageListing {
        name: "Gói Lộc Phát",
        amount: "68.000đ",
        emoji: "🧧",
        tagline: "Lấy hên đầu năm, tiền vô như nước",
    },
    PackageListing {
        name: "Gói Vui Vẻ",
        amount: "100.000đ",
        emoji: "🧋",
        tagline: "Một ly trà sữa full topping cho tui",
    },
    PackageListing {
        name: "Gói Người Yêu",
        amount: "1.000.000đ",
        emoji: "💘",
        tagline: "Thương thì nói, chuyển khoản là thương",
    },
    PackageListing {
        name: "Gói Dân Chơi",
        amount: "2.000.000đ",
        emoji: "😎",
        tagline: "Chơi là phải chất, chất là phải chơi",
    },
    PackageListing {
        name: "Gói Shark Tank",
        amount: "10.000.000đ",
        emoji: "🦈",
        tagline: "Rót vốn cho dự án ăn ngủ nghỉ",
    },
    PackageListing {
        name: "Gói Vô Cực",
        amount: "∞đ",
        emoji: "♾️",
        tagline: "Không giới hạn, như tình cảm của bạn",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::celebration::PackageTier;

    #[test]
    fn test_every_listing_has_its_own_tier() {
        let mut tiers: Vec<PackageTier> = CATALOG
            .iter()
            .map(|listing| PackageTier::classify(listing.name))
            .collect();

        assert!(!tiers.contains(&PackageTier::Default));

        let count = tiers.len();
        tiers.dedup();
        assert_eq!(tiers.len(), count);
    }

    #[test]
    fn test_default_package() {
        let package = DonationPackage::default();
        assert_eq!(package.amount, "0đ");
        assert_eq!(package.name, "Tùy tâm");
    }
}
