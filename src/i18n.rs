//! Internationalization (i18n) support
//!
//! Structure:
//! - i18n.rs: Core types (Language, Key, Locale) and translation lookup
//! - vi.rs: Vietnamese translations
//! - en.rs: English translations
//!
//! Only interface chrome lives here. Package labels and celebration messages
//! are data and stay Vietnamese in every locale.

mod en;
mod vi;

use std::collections::HashMap;

/// Supported languages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Language {
    #[default]
    Vietnamese,
    English,
}

impl Language {
    /// Get language code
    pub fn code(&self) -> &'static str {
        match self {
            Language::Vietnamese => "vi",
            Language::English => "en",
        }
    }

    /// Parse a settings language code, defaulting to Vietnamese
    pub fn from_code(code: &str) -> Self {
        Self::all()
            .iter()
            .copied()
            .find(|lang| lang.code() == code)
            .unwrap_or_default()
    }

    /// All available languages
    pub fn all() -> &'static [Language] {
        &[Language::Vietnamese, Language::English]
    }
}

/// Translation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    // App
    AppName,

    // Landing page
    HeroEyebrow,
    HeroTitle,
    HeroSubtitle,
    PackagesTitle,
    PackagesSubtitle,
    PickPackage,
    Footer,

    // Donation modal
    ModalEyebrow,
    ModalTitle,
    SelectedPackage,
    BankLabel,
    AccountLabel,
    HolderLabel,
    MemoLabel,
    MemoWarning,
    Copy,
    Copied,
    TransferNote,
    ConfirmTransfer,
    Close,

    // Success banner
    BannerTitle,
    BannerDismiss,
}

/// Get translation for a key in the specified language
pub fn t(lang: Language, key: Key) -> &'static str {
    let translations: &HashMap<Key, &'static str> = match lang {
        Language::Vietnamese => vi::translations(),
        Language::English => en::translations(),
    };

    translations.get(&key).copied().unwrap_or("???")
}

/// Localization context that can be passed around
#[derive(Debug, Clone, Copy, Default)]
pub struct Locale {
    pub language: Language,
}

impl Locale {
    pub fn new(language: Language) -> Self {
        Self { language }
    }

    /// Get translation for a key
    pub fn get(&self, key: Key) -> &'static str {
        t(self.language, key)
    }
}
