//! English translations

use super::Key;
use once_cell::sync::Lazy;
use std::collections::HashMap;

static TRANSLATIONS: Lazy<HashMap<Key, &'static str>> = Lazy::new(|| {
    let mut m = HashMap::new();

    // App
    m.insert(Key::AppName, "Nha Tai Tro");

    // Landing page
    m.insert(Key::HeroEyebrow, "Support the author");
    m.insert(Key::HeroTitle, "Buy me a meal, get a sky full of joy");
    m.insert(
        Key::HeroSubtitle,
        "Pick a package, make the transfer, watch the confetti. No refunds, only feelings.",
    );
    m.insert(Key::PackagesTitle, "Sponsorship packages");
    m.insert(Key::PackagesSubtitle, "Every package has its own effect, go find out");
    m.insert(Key::PickPackage, "Choose");
    m.insert(Key::Footer, "Made with Rust, milk tea and a lot of love");

    // Donation modal
    m.insert(Key::ModalEyebrow, "Confirm investment");
    m.insert(Key::ModalTitle, "Gateway of Trust");
    m.insert(Key::SelectedPackage, "Selected package");
    m.insert(Key::BankLabel, "Bank");
    m.insert(Key::AccountLabel, "Account (tap to copy)");
    m.insert(Key::HolderLabel, "Account holder");
    m.insert(Key::MemoLabel, "Transfer memo (important!!)");
    m.insert(Key::MemoWarning, "Type it exactly");
    m.insert(Key::Copy, "Copy");
    m.insert(Key::Copied, "Copied");
    m.insert(
        Key::TransferNote,
        "*Note: after transferring, breathe deeply and wait for a sign from the universe (or check my story).",
    );
    m.insert(Key::ConfirmTransfer, "I've transferred (promise)");
    m.insert(Key::Close, "Close");

    // Success banner
    m.insert(Key::BannerTitle, "Your kindness has arrived!");
    m.insert(Key::BannerDismiss, "Awesome");

    m
});

pub fn translations() -> &'static HashMap<Key, &'static str> {
    &TRANSLATIONS
}
