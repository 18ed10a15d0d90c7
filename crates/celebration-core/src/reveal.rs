//! Reveal tracking for the reasons constellation and photo envelopes.
//!
//! A [`RevealTracker`] owns a fixed universe of ids and the subset that has
//! been opened. "Reveal all" is a timed sequence: the tracker hands out a
//! [`RevealRun`] tagged with its current generation and only accepts steps
//! from the latest run. [`RevealTracker::reset`] bumps the generation, so a
//! sequence still in flight cannot re-open anything after a reset.

use std::collections::BTreeSet;
use std::time::Duration;

/// Delay between two steps of a reveal-all sequence
pub const DEFAULT_REVEAL_STEP: Duration = Duration::from_millis(200);

/// Handle for one reveal-all sequence
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealRun {
    generation: u64,
    ids: Vec<u32>,
}

impl RevealRun {
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Ids to reveal, ascending
    pub fn ids(&self) -> &[u32] {
        &self.ids
    }
}

/// Set of revealed ids out of a fixed universe
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RevealTracker {
    universe: Vec<u32>,
    revealed: BTreeSet<u32>,
    auto_revealing: bool,
    generation: u64,
}

impl RevealTracker {
    /// Tracker over ids `1..=size`
    pub fn new(size: u32) -> Self {
        Self::with_ids(1..=size)
    }

    /// Tracker over an arbitrary id set (sorted, duplicates dropped)
    pub fn with_ids(ids: impl IntoIterator<Item = u32>) -> Self {
        let universe: BTreeSet<u32> = ids.into_iter().collect();
        Self {
            universe: universe.into_iter().collect(),
            ..Self::default()
        }
    }

    pub fn universe(&self) -> &[u32] {
        &self.universe
    }

    /// Size of the universe
    pub fn total(&self) -> usize {
        self.universe.len()
    }

    /// Number of revealed ids
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    pub fn is_revealed(&self, id: u32) -> bool {
        self.revealed.contains(&id)
    }

    /// Revealed ids, ascending
    pub fn revealed(&self) -> impl Iterator<Item = u32> + '_ {
        self.revealed.iter().copied()
    }

    pub fn is_auto_revealing(&self) -> bool {
        self.auto_revealing
    }

    /// Fraction of the universe revealed, in `[0, 1]`
    pub fn progress(&self) -> f64 {
        if self.universe.is_empty() {
            return 0.0;
        }
        let inside = self
            .revealed
            .iter()
            .filter(|id| self.universe.binary_search(*id).is_ok())
            .count();
        inside as f64 / self.universe.len() as f64
    }

    /// Reveal one id. Ids outside the universe are accepted as well.
    ///
    /// Returns `true` if the id was not revealed before.
    pub fn reveal(&mut self, id: u32) -> bool {
        let inserted = self.revealed.insert(id);
        if inserted {
            tracing::debug!(id, revealed = self.revealed.len(), "revealed");
        }
        inserted
    }

    /// Start a reveal-all sequence over the whole universe.
    ///
    /// Any earlier run is superseded.
    pub fn begin_reveal_all(&mut self) -> RevealRun {
        self.generation += 1;
        self.auto_revealing = true;
        tracing::info!(
            generation = self.generation,
            total = self.universe.len(),
            "reveal all started"
        );
        RevealRun {
            generation: self.generation,
            ids: self.universe.clone(),
        }
    }

    /// Apply one step of `run`. Returns `false` when the run is stale and
    /// should stop.
    pub fn apply(&mut self, run: &RevealRun, id: u32) -> bool {
        if run.generation != self.generation {
            tracing::debug!(
                run = run.generation,
                current = self.generation,
                id,
                "dropping stale reveal step"
            );
            return false;
        }
        self.reveal(id);
        true
    }

    /// Mark `run` as done. Has no effect if a newer run or a reset happened.
    pub fn complete(&mut self, run: &RevealRun) {
        if run.generation == self.generation {
            self.auto_revealing = false;
        }
    }

    /// Clear every revealed id and cancel any running sequence
    pub fn reset(&mut self) {
        self.revealed.clear();
        self.auto_revealing = false;
        self.generation += 1;
        tracing::info!(generation = self.generation, "reveal tracker reset");
    }
}

/// Drive a reveal-all run: wait `step`, apply the next id, repeat.
///
/// `apply` is usually a closure over [`RevealTracker::apply`]. The loop stops
/// early once it returns `false`. Returns the number of steps applied.
pub async fn drive_reveal_all<F>(run: &RevealRun, step: Duration, mut apply: F) -> usize
where
    F: FnMut(&RevealRun, u32) -> bool,
{
    let mut applied = 0;
    for &id in run.ids() {
        tokio::time::sleep(step).await;
        if !apply(run, id) {
            break;
        }
        applied += 1;
    }
    applied
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reveal_is_idempotent() {
        let mut tracker = RevealTracker::new(26);
        assert!(tracker.reveal(4));
        assert!(!tracker.reveal(4));
        assert_eq!(tracker.len(), 1);
        assert!(tracker.is_revealed(4));
    }

    #[test]
    fn test_reveal_accepts_out_of_range_ids() {
        let mut tracker = RevealTracker::new(3);
        assert!(tracker.reveal(99));
        assert!(tracker.is_revealed(99));
        // Progress only counts the universe
        assert_eq!(tracker.progress(), 0.0);
    }

    #[test]
    fn test_reset_clears_everything() {
        let mut tracker = RevealTracker::new(26);
        tracker.reveal(1);
        tracker.reveal(2);
        let _run = tracker.begin_reveal_all();
        assert!(tracker.is_auto_revealing());

        tracker.reset();
        assert!(tracker.is_empty());
        assert!(!tracker.is_auto_revealing());
    }

    #[test]
    fn test_stale_run_is_rejected_after_reset() {
        let mut tracker = RevealTracker::new(5);
        let run = tracker.begin_reveal_all();
        assert!(tracker.apply(&run, 1));

        tracker.reset();
        assert!(!tracker.apply(&run, 2));
        assert!(tracker.is_empty());
    }

    #[test]
    fn test_new_run_supersedes_old_one() {
        let mut tracker = RevealTracker::new(5);
        let first = tracker.begin_reveal_all();
        let second = tracker.begin_reveal_all();

        assert!(!tracker.apply(&first, 1));
        assert!(tracker.apply(&second, 1));

        tracker.complete(&first);
        assert!(tracker.is_auto_revealing());
        tracker.complete(&second);
        assert!(!tracker.is_auto_revealing());
    }

    #[test]
    fn test_with_ids_sorts_and_dedups() {
        let tracker = RevealTracker::with_ids([7, 3, 3, 5]);
        assert_eq!(tracker.universe(), &[3, 5, 7]);
        assert_eq!(tracker.total(), 3);
    }

    #[test]
    fn test_progress() {
        let mut tracker = RevealTracker::new(4);
        tracker.reveal(1);
        assert_eq!(tracker.progress(), 0.25);
        assert_eq!(RevealTracker::new(0).progress(), 0.0);
    }
}
