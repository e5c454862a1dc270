//! Confetti loop scheduling
//!
//! A celebration loop emits a mirrored pair of bursts on every animation frame
//! until its deadline passes. Loops are owned by the scheduler and addressed by
//! handle, so a new confirmation can either run alongside older loops or
//! replace them depending on the configured `OverlapPolicy`.

use std::time::{Duration, Instant};

use super::burst::{Burst, ConfettiPort, Rgb};
use super::tier::CelebrationProfile;
use crate::features::settings::OverlapPolicy;

/// How long a celebration keeps emitting bursts
pub const LOOP_DURATION: Duration = Duration::from_millis(3000);

/// Delay before the encore burst of a romantic confirmation
pub const ENCORE_DELAY: Duration = Duration::from_millis(500);

/// Owned cancellation handle for a running loop
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CelebrationHandle(u64);

/// One running confetti loop
#[derive(Debug, Clone)]
pub struct CelebrationLoop {
    handle: CelebrationHandle,
    colors: &'static [Rgb],
    intensity: f32,
    deadline: Instant,
}

impl CelebrationLoop {
    fn new(handle: CelebrationHandle, profile: &CelebrationProfile, now: Instant) -> Self {
        Self {
            handle,
            colors: profile.colors,
            intensity: profile.intensity,
            deadline: now + LOOP_DURATION,
        }
    }

    pub fn handle(&self) -> CelebrationHandle {
        self.handle
    }

    /// Emit this frame's bursts; returns whether the loop wants another frame
    pub fn frame(&self, now: Instant, sink: &mut impl ConfettiPort) -> bool {
        for burst in Burst::frame_pair(self.colors, self.intensity) {
            sink.fire(burst);
        }
        now < self.deadline
    }
}

/// Owns every live celebration loop
#[derive(Debug)]
pub struct CelebrationScheduler {
    policy: OverlapPolicy,
    loops: Vec<CelebrationLoop>,
    next_id: u64,
}

impl Default for CelebrationScheduler {
    fn default() -> Self {
        Self::new(OverlapPolicy::default())
    }
}

impl CelebrationScheduler {
    pub fn new(policy: OverlapPolicy) -> Self {
        Self {
            policy,
            loops: Vec::new(),
            next_id: 0,
        }
    }

    pub fn policy(&self) -> OverlapPolicy {
        self.policy
    }

    /// Start a loop for `profile`; the first frame fires immediately
    pub fn launch(
        &mut self,
        profile: &CelebrationProfile,
        now: Instant,
        sink: &mut impl ConfettiPort,
    ) -> CelebrationHandle {
        if self.policy == OverlapPolicy::Supersede && !self.loops.is_empty() {
            tracing::debug!("Superseding {} running celebration loop(s)", self.active_count());
            self.loops.clear();
        }

        let handle = CelebrationHandle(self.next_id);
        self.next_id += 1;

        let celebration = CelebrationLoop::new(handle, profile, now);
        if celebration.frame(now, sink) {
            self.loops.push(celebration);
        }
        handle
    }

    /// Advance every loop by one animation frame
    pub fn tick(&mut self, now: Instant, sink: &mut impl ConfettiPort) {
        self.loops.retain(|celebration| {
            let keep = celebration.frame(now, sink);
            if !keep {
                tracing::debug!("Celebration loop {:?} finished", celebration.handle());
            }
            keep
        });
    }

    /// Stop a loop early; returns false if it already finished
    pub fn cancel(&mut self, handle: CelebrationHandle) -> bool {
        let before = self.loops.len();
        self.loops.retain(|celebration| celebration.handle() != handle);
        self.loops.len() != before
    }

    pub fn is_running(&self) -> bool {
        !self.loops.is_empty()
    }

    /// Whether the loop behind `handle` is still emitting
    pub fn is_live(&self, handle: CelebrationHandle) -> bool {
        self.loops.iter().any(|celebration| celebration.handle() == handle)
    }

    pub fn active_count(&self) -> usize {
        self.loops.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::celebration::{PackageTier, RecordingConfetti};

    #[test]
    fn test_launch_fires_first_frame_immediately() {
        let mut scheduler = CelebrationScheduler::default();
        let mut sink = RecordingConfetti::default();
        let now = Instant::now();

        scheduler.launch(&PackageTier::Playful.profile(), now, &mut sink);

        assert_eq!(sink.bursts.len(), 2);
        assert!(scheduler.is_running());
    }

    #[test]
    fn test_loop_stops_after_deadline() {
        let mut scheduler = CelebrationScheduler::default();
        let mut sink = RecordingConfetti::default();
        let start = Instant::now();

        scheduler.launch(&PackageTier::Default.profile(), start, &mut sink);
        scheduler.tick(start + Duration::from_millis(16), &mut sink);
        scheduler.tick(start + Duration::from_millis(2999), &mut sink);
        assert!(scheduler.is_running());

        // The frame at the deadline still fires, then the loop ends
        scheduler.tick(start + LOOP_DURATION, &mut sink);
        assert!(!scheduler.is_running());
        assert_eq!(sink.bursts.len(), 8);

        scheduler.tick(start + Duration::from_millis(3100), &mut sink);
        assert_eq!(sink.bursts.len(), 8);
    }

    #[test]
    fn test_bursts_follow_profile() {
        let mut scheduler = CelebrationScheduler::default();
        let mut sink = RecordingConfetti::default();
        let profile = PackageTier::Maximal.profile();

        scheduler.launch(&profile, Instant::now(), &mut sink);

        for burst in &sink.bursts {
            assert_eq!(burst.colors, profile.colors);
            assert_eq!(burst.particle_count, 15);
        }
    }

    #[test]
    fn test_concurrent_policy_overlaps() {
        let mut scheduler = CelebrationScheduler::new(OverlapPolicy::Concurrent);
        let mut sink = RecordingConfetti::default();
        let now = Instant::now();

        scheduler.launch(&PackageTier::Playful.profile(), now, &mut sink);
        scheduler.launch(
            &PackageTier::Investor.profile(),
            now + Duration::from_millis(100),
            &mut sink,
        );
        assert_eq!(scheduler.active_count(), 2);

        sink.bursts.clear();
        scheduler.tick(now + Duration::from_millis(200), &mut sink);
        assert_eq!(sink.bursts.len(), 4);
    }

    #[test]
    fn test_supersede_policy_replaces() {
        let mut scheduler = CelebrationScheduler::new(OverlapPolicy::Supersede);
        let mut sink = RecordingConfetti::default();
        let now = Instant::now();

        let first = scheduler.launch(&PackageTier::Playful.profile(), now, &mut sink);
        let second = scheduler.launch(&PackageTier::Investor.profile(), now, &mut sink);

        assert_ne!(first, second);
        assert_eq!(scheduler.active_count(), 1);
        assert!(!scheduler.cancel(first));
        assert!(scheduler.cancel(second));
        assert!(!scheduler.is_running());
    }

    #[test]
    fn test_cancel_stops_single_loop() {
        let mut scheduler = CelebrationScheduler::default();
        let mut sink = RecordingConfetti::default();
        let now = Instant::now();

        let a = scheduler.launch(&PackageTier::Playful.profile(), now, &mut sink);
        let b = scheduler.launch(&PackageTier::Romantic.profile(), now, &mut sink);

        assert!(scheduler.cancel(a));
        assert_eq!(scheduler.active_count(), 1);
        assert!(!scheduler.is_live(a));
        assert!(scheduler.is_live(b));
    }
}
