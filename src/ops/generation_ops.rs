use std::cell::{Cell, RefCell};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{debug, info, warn};

use crate::db::{SlotStorage, SnapshotStore};
use crate::model::{Member, SnapshotData};
use crate::ops::{schedule_ops, team_ops};

/// A finished draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub snapshot: SnapshotData,
    pub dropped: Vec<Member>,
    /// False when the snapshot could not be written; the draw still stands.
    pub persisted: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// Another generation was still pending.
    Busy,
    /// A previous result exists and the user chose to keep it.
    Declined,
    Completed(Generation),
}

/// Runs shuffle, partition, scheduling and persistence after a pacing delay,
/// one generation at a time.
pub struct Generator<S> {
    store: SnapshotStore<S>,
    delay: Duration,
    rng: RefCell<StdRng>,
    busy: Cell<bool>,
}

/// Holds the busy flag for the duration of one generation.
struct BusyGuard<'a>(&'a Cell<bool>);

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a Cell<bool>) -> Option<Self> {
        if flag.replace(true) {
            None
        } else {
            Some(Self(flag))
        }
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.set(false);
    }
}

impl<S: SlotStorage> Generator<S> {
    pub fn new(store: SnapshotStore<S>, delay: Duration) -> Self {
        Self {
            store,
            delay,
            rng: RefCell::new(StdRng::from_os_rng()),
            busy: Cell::new(false),
        }
    }

    /// Makes every draw reproducible.
    pub fn with_seed(mut self, seed: u64) -> Self {
        *self.rng.get_mut() = StdRng::seed_from_u64(seed);
        self
    }

    pub fn store(&self) -> &SnapshotStore<S> {
        &self.store
    }

    pub fn is_busy(&self) -> bool {
        self.busy.get()
    }

    pub fn has_results(&self) -> bool {
        self.store.exists()
    }

    /// Draws new teams and a schedule for `members`.
    ///
    /// `confirm` is asked only when a previous result is stored; refusing
    /// leaves everything as it was. A call made while another is pending
    /// returns `Busy` immediately.
    pub async fn generate<F>(&self, members: &[Member], group_size: usize, confirm: F) -> GenerationOutcome
    where
        F: FnOnce() -> bool,
    {
        let Some(_guard) = BusyGuard::acquire(&self.busy) else {
            debug!("generation already pending");
            return GenerationOutcome::Busy;
        };

        if self.store.exists() && !confirm() {
            debug!("regeneration declined");
            return GenerationOutcome::Declined;
        }

        debug!(members = members.len(), group_size, delay_ms = self.delay.as_millis() as u64, "generation pending");
        tokio::time::sleep(self.delay).await;

        GenerationOutcome::Completed(self.run(members, group_size))
    }

    /// The undelayed pipeline: partition, schedule, save.
    pub fn run(&self, members: &[Member], group_size: usize) -> Generation {
        let partition = {
            let mut rng = self.rng.borrow_mut();
            team_ops::partition(members, group_size, &mut *rng)
        };
        let rounds = schedule_ops::schedule_for(&partition.teams);

        let snapshot = SnapshotData {
            members: members.to_vec(),
            teams: partition.teams,
            rounds,
        };

        let persisted = match self.store.save(&snapshot) {
            Ok(()) => true,
            Err(e) => {
                warn!(error = %e, "could not save generation result");
                false
            }
        };

        info!(
            teams = snapshot.teams.len(),
            rounds = snapshot.rounds.len(),
            dropped = partition.dropped.len(),
            persisted,
            "teams generated"
        );

        Generation {
            snapshot,
            dropped: partition.dropped,
            persisted,
        }
    }
}
