//! Donation session state
//!
//! `DonationDesk` is the root container of a session: the selected package,
//! the modal (closed → open → confirmed → closed), the success banner and the
//! running celebrations. It never touches a window; clipboard and confetti go
//! through the ports passed in, and timers are scheduled by the caller using
//! the returned `Expiry` tokens and durations.

use std::time::{Duration, Instant};

use rand::Rng;

use super::catalog::DonationPackage;
use super::memo::{ClipboardPort, transfer_memo};
use super::support_code::SupportCode;
use super::timed::{Expiry, TimedSlot};
use crate::features::celebration::{
    Burst, CelebrationHandle, CelebrationScheduler, ConfettiPort, ENCORE_DELAY, PackageTier,
};
use crate::features::settings::{BankAccount, OverlapPolicy};

/// How long the success banner stays up
pub const BANNER_DURATION: Duration = Duration::from_millis(5000);

/// How long the "copied" indicator stays on
pub const COPIED_DURATION: Duration = Duration::from_millis(2000);

/// Side effects of `confirm`, in the order they happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ConfirmStep {
    ModalClosed,
    MessageShown,
    LoopLaunched,
}

/// Modal state owned by the desk
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modal {
    Closed,
    Open { support_code: SupportCode },
}

/// A burst to fire once after a delay
#[derive(Debug, Clone, PartialEq)]
pub struct Encore {
    pub delay: Duration,
    pub burst: Burst,
}

/// What a confirmation set in motion
#[derive(Debug, Clone, PartialEq)]
pub struct Confirmation {
    pub tier: PackageTier,
    pub message: &'static str,
    /// Pass back to `expire_success` after `BANNER_DURATION`
    pub banner_expiry: Expiry,
    pub celebration: CelebrationHandle,
    pub encore: Option<Encore>,
}

impl Confirmation {
    /// Delay and token for the `expire_success` call
    pub fn banner_timer(&self) -> (Duration, Expiry) {
        (BANNER_DURATION, self.banner_expiry)
    }
}

#[derive(Debug)]
pub struct DonationDesk {
    package: DonationPackage,
    modal: Modal,
    copied: TimedSlot<()>,
    success: TimedSlot<String>,
    celebrations: CelebrationScheduler,
    #[cfg(test)]
    steps: Vec<ConfirmStep>,
}

impl Default for DonationDesk {
    fn default() -> Self {
        Self::new(OverlapPolicy::default())
    }
}

impl DonationDesk {
    pub fn new(overlap: OverlapPolicy) -> Self {
        Self {
            package: DonationPackage::default(),
            modal: Modal::Closed,
            copied: TimedSlot::default(),
            success: TimedSlot::default(),
            celebrations: CelebrationScheduler::new(overlap),
            #[cfg(test)]
            steps: Vec::new(),
        }
    }

    // ============ Package & modal ============

    /// Remember the package and open the modal with a fresh support code
    pub fn open_donation<R: Rng + ?Sized>(&mut self, package: DonationPackage, rng: &mut R) {
        let support_code = SupportCode::generate_with(rng);
        tracing::info!(
            "Opening donation for {} ({}), code {}",
            package.name,
            package.amount,
            support_code
        );
        self.package = package;
        self.modal = Modal::Open { support_code };
        self.copied.clear();
    }

    /// Hide the modal; the package stays until the next selection
    pub fn close_donation(&mut self) {
        self.modal = Modal::Closed;
    }

    pub fn is_modal_open(&self) -> bool {
        matches!(self.modal, Modal::Open { .. })
    }

    pub fn package(&self) -> &DonationPackage {
        &self.package
    }

    pub fn support_code(&self) -> Option<SupportCode> {
        match self.modal {
            Modal::Open { support_code } => Some(support_code),
            Modal::Closed => None,
        }
    }

    // ============ Clipboard ============

    /// Write the transfer memo; `None` when the modal is closed
    ///
    /// Returns the delay and token for the matching `expire_copied` call.
    pub fn copy_to_clipboard(
        &mut self,
        bank: &BankAccount,
        clipboard: &mut impl ClipboardPort,
    ) -> Option<(Duration, Expiry)> {
        let support_code = self.support_code()?;
        clipboard.write_text(transfer_memo(bank, &self.package.amount, &support_code));
        Some((COPIED_DURATION, self.copied.set(())))
    }

    pub fn expire_copied(&mut self, expiry: Expiry) {
        self.copied.expire(expiry);
    }

    pub fn is_copied(&self) -> bool {
        self.copied.is_set()
    }

    // ============ Success banner ============

    /// Show `message`, replacing any current one; expire after `BANNER_DURATION`
    pub fn on_donation_success(&mut self, message: impl Into<String>) -> Expiry {
        self.success.set(message.into())
    }

    pub fn expire_success(&mut self, expiry: Expiry) {
        if self.success.expire(expiry) {
            tracing::debug!("Success banner expired");
        }
    }

    pub fn dismiss_success(&mut self) {
        self.success.clear();
    }

    pub fn success_message(&self) -> Option<&str> {
        self.success.get().map(String::as_str)
    }

    // ============ Confirmation ============

    /// Close the modal, then report success and start the celebration
    ///
    /// Returns `None` if the modal was not open.
    pub fn confirm(&mut self, now: Instant, sink: &mut impl ConfettiPort) -> Option<Confirmation> {
        if !self.is_modal_open() {
            return None;
        }
        self.close_donation();
        self.note(ConfirmStep::ModalClosed);

        let tier = PackageTier::classify(&self.package.name);
        let profile = tier.profile();
        tracing::info!("Donation confirmed: {} → {} profile", self.package.name, tier);

        let banner_expiry = self.on_donation_success(profile.message);
        self.note(ConfirmStep::MessageShown);
        let celebration = self.celebrations.launch(&profile, now, sink);
        self.note(ConfirmStep::LoopLaunched);
        let encore = tier.has_encore().then(|| Encore {
            delay: ENCORE_DELAY,
            burst: Burst::encore(),
        });

        Some(Confirmation {
            tier,
            message: profile.message,
            banner_expiry,
            celebration,
            encore,
        })
    }

    /// Advance running celebrations by one frame
    pub fn tick(&mut self, now: Instant, sink: &mut impl ConfettiPort) {
        self.celebrations.tick(now, sink);
    }

    pub fn is_celebrating(&self) -> bool {
        self.celebrations.is_running()
    }

    pub fn cancel_celebration(&mut self, handle: CelebrationHandle) -> bool {
        self.celebrations.cancel(handle)
    }

    /// Encore bursts only fire while their loop is live
    pub fn is_celebration_live(&self, handle: CelebrationHandle) -> bool {
        self.celebrations.is_live(handle)
    }

    pub fn overlap_policy(&self) -> OverlapPolicy {
        self.celebrations.policy()
    }

    fn note(&mut self, step: ConfirmStep) {
        tracing::trace!("Confirm step: {:?}", step);
        #[cfg(test)]
        self.steps.push(step);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::celebration::{LOOP_DURATION, RecordingConfetti};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[derive(Default)]
    struct RecordingClipboard {
        writes: Vec<String>,
    }

    impl ClipboardPort for RecordingClipboard {
        fn write_text(&mut self, text: String) {
            self.writes.push(text);
        }
    }

    fn rng() -> StdRng {
        StdRng::seed_from_u64(2024)
    }

    #[test]
    fn test_open_and_close() {
        let mut desk = DonationDesk::default();
        assert!(!desk.is_modal_open());
        assert!(desk.support_code().is_none());

        desk.open_donation(DonationPackage::new("100.000đ", "Gói Vui Vẻ"), &mut rng());
        assert!(desk.is_modal_open());
        let code = desk.support_code().unwrap();
        assert!((1000..=9999).contains(&code.number()));

        desk.close_donation();
        assert!(!desk.is_modal_open());
        // Package is retained after closing
        assert_eq!(desk.package().name, "Gói Vui Vẻ");
    }

    #[test]
    fn test_reopen_regenerates_code() {
        let mut desk = DonationDesk::default();
        let mut rng = rng();
        let mut codes = Vec::new();
        for _ in 0..20 {
            desk.open_donation(DonationPackage::new("68.000đ", "Gói Lộc Phát"), &mut rng);
            codes.push(desk.support_code().unwrap());
            desk.close_donation();
        }
        codes.sort_by_key(|c| c.number());
        codes.dedup();
        assert!(codes.len() > 1);
    }

    #[test]
    fn test_opening_resets_copied() {
        let mut desk = DonationDesk::default();
        let mut clipboard = RecordingClipboard::default();
        let bank = BankAccount::default();

        desk.open_donation(DonationPackage::new("100.000đ", "Gói Vui Vẻ"), &mut rng());
        desk.copy_to_clipboard(&bank, &mut clipboard).unwrap();
        assert!(desk.is_copied());

        desk.close_donation();
        desk.open_donation(DonationPackage::new("100.000đ", "Gói Vui Vẻ"), &mut rng());
        assert!(!desk.is_copied());
    }

    #[test]
    fn test_copy_writes_memo_and_reverts() {
        let mut desk = DonationDesk::default();
        let mut clipboard = RecordingClipboard::default();
        let bank = BankAccount::default();

        desk.open_donation(DonationPackage::new("1.000.000đ", "Gói Người Yêu"), &mut rng());
        let code = desk.support_code().unwrap();
        let (_, expiry) = desk.copy_to_clipboard(&bank, &mut clipboard).unwrap();

        assert_eq!(clipboard.writes.len(), 1);
        assert!(clipboard.writes[0].ends_with(&format!("1.000.000đ\n{}", code)));
        assert!(desk.is_copied());

        desk.expire_copied(expiry);
        assert!(!desk.is_copied());
    }

    #[test]
    fn test_second_copy_extends_indicator() {
        let mut desk = DonationDesk::default();
        let mut clipboard = RecordingClipboard::default();
        let bank = BankAccount::default();

        desk.open_donation(DonationPackage::new("100.000đ", "Gói Vui Vẻ"), &mut rng());
        let (_, first) = desk.copy_to_clipboard(&bank, &mut clipboard).unwrap();
        let (_, second) = desk.copy_to_clipboard(&bank, &mut clipboard).unwrap();

        desk.expire_copied(first);
        assert!(desk.is_copied());
        desk.expire_copied(second);
        assert!(!desk.is_copied());
    }

    #[test]
    fn test_copy_requires_open_modal() {
        let mut desk = DonationDesk::default();
        let mut clipboard = RecordingClipboard::default();
        assert!(
            desk.copy_to_clipboard(&BankAccount::default(), &mut clipboard)
                .is_none()
        );
        assert!(clipboard.writes.is_empty());
    }

    #[test]
    fn test_success_banner_lifecycle() {
        let mut desk = DonationDesk::default();
        let expiry = desk.on_donation_success("X");
        assert_eq!(desk.success_message(), Some("X"));

        desk.expire_success(expiry);
        assert_eq!(desk.success_message(), None);
    }

    #[test]
    fn test_newer_message_survives_older_timer() {
        let mut desk = DonationDesk::default();
        let first = desk.on_donation_success("first");
        let second = desk.on_donation_success("second");
        assert_eq!(desk.success_message(), Some("second"));

        desk.expire_success(first);
        assert_eq!(desk.success_message(), Some("second"));

        desk.expire_success(second);
        assert_eq!(desk.success_message(), None);
    }

    #[test]
    fn test_dismiss_is_idempotent() {
        let mut desk = DonationDesk::default();
        let expiry = desk.on_donation_success("X");
        desk.dismiss_success();
        desk.dismiss_success();
        assert_eq!(desk.success_message(), None);

        // Timer firing after dismissal does nothing
        desk.expire_success(expiry);
        assert_eq!(desk.success_message(), None);
    }

    #[test]
    fn test_confirm_requires_open_modal() {
        let mut desk = DonationDesk::default();
        let mut sink = RecordingConfetti::default();
        assert!(desk.confirm(Instant::now(), &mut sink).is_none());
        assert!(sink.bursts.is_empty());
        assert_eq!(desk.success_message(), None);
    }

    #[test]
    fn test_playful_scenario() {
        let mut desk = DonationDesk::default();
        let mut sink = RecordingConfetti::default();

        desk.open_donation(DonationPackage::new("100.000đ", "Gói Vui Vẻ"), &mut rng());
        let confirmation = desk.confirm(Instant::now(), &mut sink).unwrap();

        assert!(!desk.is_modal_open());
        assert_eq!(confirmation.tier, PackageTier::Playful);
        assert_eq!(
            desk.success_message(),
            Some(PackageTier::Playful.profile().message)
        );
        assert!(confirmation.encore.is_none());
        assert_eq!(sink.bursts.len(), 2);
        assert!(desk.is_celebrating());
    }

    #[test]
    fn test_confirm_closes_before_effects() {
        let mut desk = DonationDesk::default();
        let mut sink = RecordingConfetti::default();

        desk.open_donation(DonationPackage::new("100.000đ", "Gói Vui Vẻ"), &mut rng());
        desk.confirm(Instant::now(), &mut sink).unwrap();

        assert_eq!(
            desk.steps,
            vec![
                ConfirmStep::ModalClosed,
                ConfirmStep::MessageShown,
                ConfirmStep::LoopLaunched,
            ]
        );
        // The loop's first frame fired inside the launch step
        assert_eq!(sink.bursts.len(), 2);
    }

    #[test]
    fn test_failed_confirm_records_nothing() {
        let mut desk = DonationDesk::default();
        let mut sink = RecordingConfetti::default();
        assert!(desk.confirm(Instant::now(), &mut sink).is_none());
        assert!(desk.steps.is_empty());
    }

    #[test]
    fn test_timer_durations() {
        assert_eq!(BANNER_DURATION, Duration::from_millis(5000));
        assert_eq!(COPIED_DURATION, Duration::from_millis(2000));
        assert_eq!(ENCORE_DELAY, Duration::from_millis(500));
        assert_eq!(LOOP_DURATION, Duration::from_millis(3000));
    }

    #[test]
    fn test_banner_timer_uses_banner_duration() {
        let mut desk = DonationDesk::default();
        let mut sink = RecordingConfetti::default();

        desk.open_donation(DonationPackage::new("68.000đ", "Gói Lộc Phát"), &mut rng());
        let confirmation = desk.confirm(Instant::now(), &mut sink).unwrap();
        let (delay, expiry) = confirmation.banner_timer();

        assert_eq!(delay, Duration::from_millis(5000));
        assert_eq!(expiry, confirmation.banner_expiry);
        desk.expire_success(expiry);
        assert_eq!(desk.success_message(), None);
    }

    #[test]
    fn test_copy_timer_uses_copied_duration() {
        let mut desk = DonationDesk::default();
        let mut clipboard = RecordingClipboard::default();

        desk.open_donation(DonationPackage::new("100.000đ", "Gói Vui Vẻ"), &mut rng());
        let (delay, expiry) = desk
            .copy_to_clipboard(&BankAccount::default(), &mut clipboard)
            .unwrap();

        assert_eq!(delay, Duration::from_millis(2000));
        desk.expire_copied(expiry);
        assert!(!desk.is_copied());
    }

    #[test]
    fn test_romantic_scenario_schedules_encore() {
        let mut desk = DonationDesk::default();
        let mut sink = RecordingConfetti::default();

        desk.open_donation(DonationPackage::new("1.000.000đ", "Gói Người Yêu"), &mut rng());
        let confirmation = desk.confirm(Instant::now(), &mut sink).unwrap();

        assert_eq!(confirmation.tier, PackageTier::Romantic);
        let encore = confirmation.encore.unwrap();
        assert_eq!(encore.delay, Duration::from_millis(500));
        assert_eq!(encore.burst, Burst::encore());
    }

    #[test]
    fn test_unknown_package_uses_default_profile() {
        let mut desk = DonationDesk::default();
        let mut sink = RecordingConfetti::default();

        desk.open_donation(DonationPackage::new("50.000đ", "Gói Bí Ẩn"), &mut rng());
        let confirmation = desk.confirm(Instant::now(), &mut sink).unwrap();

        let fallback = PackageTier::Default.profile();
        assert_eq!(confirmation.tier, PackageTier::Default);
        assert_eq!(confirmation.message, fallback.message);
        assert!(sink.bursts.iter().all(|b| b.colors == fallback.colors));
    }

    #[test]
    fn test_confirm_twice_needs_reopen() {
        let mut desk = DonationDesk::default();
        let mut sink = RecordingConfetti::default();

        desk.open_donation(DonationPackage::new("100.000đ", "Gói Vui Vẻ"), &mut rng());
        assert!(desk.confirm(Instant::now(), &mut sink).is_some());
        assert!(desk.confirm(Instant::now(), &mut sink).is_none());
    }

    #[test]
    fn test_celebration_runs_out() {
        let mut desk = DonationDesk::default();
        let mut sink = RecordingConfetti::default();
        let start = Instant::now();

        desk.open_donation(DonationPackage::new("2.000.000đ", "Gói Dân Chơi"), &mut rng());
        desk.confirm(start, &mut sink).unwrap();
        desk.tick(start + Duration::from_millis(1500), &mut sink);
        assert!(desk.is_celebrating());

        desk.tick(start + LOOP_DURATION + Duration::from_millis(1), &mut sink);
        assert!(!desk.is_celebrating());
        assert!(sink.bursts.iter().all(|b| b.particle_count == 7));
    }

    #[test]
    fn test_cancel_celebration() {
        let mut desk = DonationDesk::default();
        let mut sink = RecordingConfetti::default();

        desk.open_donation(DonationPackage::new("10.000.000đ", "Gói Shark Tank"), &mut rng());
        let confirmation = desk.confirm(Instant::now(), &mut sink).unwrap();

        assert!(desk.is_celebration_live(confirmation.celebration));
        assert!(desk.cancel_celebration(confirmation.celebration));
        assert!(!desk.is_celebration_live(confirmation.celebration));
        assert!(!desk.is_celebrating());
        // Banner is independent of the animation
        assert!(desk.success_message().is_some());
    }
}
