//! Short memo code the donor types into the transfer description

use rand::Rng;

/// `NT-` followed by a four digit number in 1000..=9999
///
/// Not unique and not a secret, it only helps match an incoming transfer
/// to a session by eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SupportCode(u16);

impl SupportCode {
    pub const PREFIX: &'static str = "NT-";

    /// Draw a fresh code; callers pass `rand::rng()` outside tests
    pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self(rng.random_range(1000..=9999))
    }

    pub fn number(&self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for SupportCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", Self::PREFIX, self.number())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_format_and_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let code = SupportCode::generate_with(&mut rng);
            assert!((1000..=9999).contains(&code.number()));

            let text = code.to_string();
            assert_eq!(text.len(), 7);
            assert!(text.starts_with("NT-"));
            assert!(text[3..].chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_thread_rng_generation() {
        let code = SupportCode::generate_with(&mut rand::rng());
        assert!((1000..=9999).contains(&code.number()));
    }

    #[test]
    fn test_same_seed_same_code() {
        let a = SupportCode::generate_with(&mut StdRng::seed_from_u64(42));
        let b = SupportCode::generate_with(&mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }
}
