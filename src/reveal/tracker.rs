/// Where an observed element is in its one-way reveal.
///
/// Phases only ever move forward: `Watching -> Scheduled -> Revealed`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum RevealPhase {
    /// Registered with the observer, not yet seen.
    Watching,
    /// Crossed the threshold and was unobserved; its delay timer is pending.
    Scheduled,
    /// Visible classes applied.
    Revealed,
}

/// One intersection entry, reduced to what the tracker needs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sighting {
    pub index: usize,
    pub is_intersecting: bool,
    pub ratio: f64,
}

/// Reveal latches for a fixed set of elements, addressed by index.
#[derive(Debug)]
pub struct RevealTracker {
    phases: Vec<RevealPhase>,
    delays: Vec<u32>,
    threshold: f64,
}

impl RevealTracker {
    /// Elements that reveal as soon as they are seen.
    pub fn new(len: usize, threshold: f64) -> Self {
        Self::with_delays(vec![0; len], threshold)
    }

    /// One delay per element, in milliseconds.
    pub fn with_delays(delays: Vec<u32>, threshold: f64) -> Self {
        Self {
            phases: vec![RevealPhase::Watching; delays.len()],
            delays,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    #[cfg(test)]
    pub fn phase(&self, index: usize) -> Option<RevealPhase> {
        self.phases.get(index).copied()
    }

    pub fn watching(&self) -> usize {
        self.count(RevealPhase::Watching)
    }

    pub fn revealed(&self) -> usize {
        self.count(RevealPhase::Revealed)
    }

    fn count(&self, phase: RevealPhase) -> usize {
        self.phases.iter().filter(|p| **p == phase).count()
    }

    /// Decides whether anything needs observing. Under reduced motion every
    /// element is revealed on the spot and `false` comes back: no observer,
    /// no timers.
    pub fn begin(&mut self, reduced_motion: bool) -> bool {
        if reduced_motion {
            self.phases.fill(RevealPhase::Revealed);
        }
        self.watching() > 0
    }

    /// Feeds one intersection entry. `Some(delay)` means the element just
    /// crossed the threshold: stop observing it now, then call `reveal`
    /// once `delay` milliseconds have passed. Every element yields `Some`
    /// at most once.
    pub fn sight(&mut self, sighting: Sighting) -> Option<u32> {
        let phase = self.phases.get_mut(sighting.index)?;
        let crossed = sighting.is_intersecting && sighting.ratio >= self.threshold;
        if *phase != RevealPhase::Watching || !crossed {
            return None;
        }
        *phase = RevealPhase::Scheduled;
        self.delays.get(sighting.index).copied()
    }

    /// Completes a scheduled reveal. Returns true the one time it happens.
    pub fn reveal(&mut self, index: usize) -> bool {
        match self.phases.get_mut(index) {
            Some(phase) if *phase == RevealPhase::Scheduled => {
                *phase = RevealPhase::Revealed;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seen(index: usize, ratio: f64) -> Sighting {
        Sighting {
            index,
            is_intersecting: ratio > 0.0,
            ratio,
        }
    }

    /// Pending timers keyed by due time, driven by a fake clock.
    #[derive(Default)]
    struct Timers {
        pending: Vec<(u32, usize)>,
    }

    impl Timers {
        fn schedule(&mut self, now: u32, delay: u32, index: usize) {
            self.pending.push((now + delay, index));
        }

        fn advance(&mut self, now: u32, tracker: &mut RevealTracker) {
            let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
                .into_iter()
                .partition(|(at, _)| *at <= now);
            self.pending = waiting;
            for (_, index) in due {
                tracker.reveal(index);
            }
        }
    }

    #[test]
    fn below_threshold_keeps_watching() {
        let mut tracker = RevealTracker::new(1, 0.15);
        assert_eq!(tracker.sight(seen(0, 0.05)), None);
        assert_eq!(tracker.phase(0), Some(RevealPhase::Watching));
        assert_eq!(tracker.sight(seen(0, 0.15)), Some(0));
        assert_eq!(tracker.phase(0), Some(RevealPhase::Scheduled));
    }

    #[test]
    fn non_intersecting_entry_is_ignored() {
        let mut tracker = RevealTracker::new(1, 0.0);
        let exit = Sighting {
            index: 0,
            is_intersecting: false,
            ratio: 0.0,
        };
        assert_eq!(tracker.sight(exit), None);
        assert_eq!(tracker.watching(), 1);
    }

    #[test]
    fn sighting_hands_back_the_element_delay() {
        let mut tracker = RevealTracker::with_delays(vec![0, 150, 300], 0.15);
        assert_eq!(tracker.sight(seen(2, 0.5)), Some(300));
        assert_eq!(tracker.sight(seen(1, 0.5)), Some(150));
        assert_eq!(tracker.sight(seen(0, 0.5)), Some(0));
    }

    #[test]
    fn delayed_element_appears_between_100_and_200ms() {
        let mut tracker = RevealTracker::with_delays(vec![150], 0.15);
        let mut timers = Timers::default();
        let entered_at = 1_000;

        let delay = tracker.sight(seen(0, 0.6));
        assert_eq!(delay, Some(150));
        // Unobserved right away, long before the timer runs.
        assert_eq!(tracker.watching(), 0);
        if let Some(delay) = delay {
            timers.schedule(entered_at, delay, 0);
        }

        timers.advance(entered_at + 100, &mut tracker);
        assert_eq!(tracker.phase(0), Some(RevealPhase::Scheduled));
        timers.advance(entered_at + 200, &mut tracker);
        assert_eq!(tracker.phase(0), Some(RevealPhase::Revealed));
    }

    #[test]
    fn reentry_during_the_delay_schedules_nothing_new() {
        let mut tracker = RevealTracker::with_delays(vec![150], 0.15);
        let mut timers = Timers::default();

        if let Some(delay) = tracker.sight(seen(0, 0.6)) {
            timers.schedule(0, delay, 0);
        }
        // Scrolls away and back before the 150ms are up.
        for (now, ratio) in [(50, 0.0), (80, 0.9)] {
            if let Some(delay) = tracker.sight(seen(0, ratio)) {
                timers.schedule(now, delay, 0);
            }
        }
        assert_eq!(timers.pending.len(), 1);

        timers.advance(150, &mut tracker);
        assert_eq!(tracker.phase(0), Some(RevealPhase::Revealed));
        assert_eq!(tracker.sight(seen(0, 1.0)), None);
    }

    #[test]
    fn element_reveals_at_most_once() {
        let mut tracker = RevealTracker::new(2, 0.15);
        assert!(tracker.sight(seen(1, 0.5)).is_some());
        assert!(tracker.reveal(1));
        assert!(!tracker.reveal(1));
        assert_eq!(tracker.phase(1), Some(RevealPhase::Revealed));
        assert_eq!(tracker.phase(0), Some(RevealPhase::Watching));
    }

    #[test]
    fn reveal_requires_a_sighting() {
        let mut tracker = RevealTracker::new(1, 0.15);
        assert!(!tracker.reveal(0));
        assert_eq!(tracker.phase(0), Some(RevealPhase::Watching));
    }

    #[test]
    fn phases_never_go_backwards() {
        let mut tracker = RevealTracker::new(1, 0.15);
        let ratios = [0.0, 0.1, 0.2, 0.0, 0.3, 0.0];
        let mut last = tracker.phase(0);
        for (step, ratio) in ratios.iter().enumerate() {
            tracker.sight(seen(0, *ratio));
            if step == 3 {
                tracker.reveal(0);
            }
            let now = tracker.phase(0);
            assert!(now >= last);
            last = now;
        }
        assert_eq!(last, Some(RevealPhase::Revealed));
    }

    #[test]
    fn reduced_motion_reveals_everything_without_timers() {
        let mut tracker = RevealTracker::with_delays(vec![0, 150, 300, 450], 0.15);
        assert!(!tracker.begin(true));
        assert_eq!(tracker.revealed(), 4);
        assert_eq!(tracker.watching(), 0);
        for index in 0..4 {
            assert_eq!(tracker.sight(seen(index, 1.0)), None);
        }
    }

    #[test]
    fn normal_motion_starts_watching() {
        let mut tracker = RevealTracker::new(3, 0.15);
        assert!(tracker.begin(false));
        assert_eq!(tracker.watching(), 3);
        assert!(!RevealTracker::new(0, 0.15).begin(false));
    }

    #[test]
    fn out_of_range_index_is_a_no_op() {
        let mut tracker = RevealTracker::new(1, 0.15);
        assert_eq!(tracker.sight(seen(7, 1.0)), None);
        assert!(!tracker.reveal(7));
        assert_eq!(tracker.phase(7), None);
    }
}
