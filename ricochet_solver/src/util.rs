use fxhash::FxHashMap;
use ricochet_board::Fingerprint;

use crate::robot_move::BackPointer;

/// Maps fingerprints to back-pointers. The starting state is recorded with
/// `None` as a sentinel so reconstruction knows where to stop walking.
pub struct VisitedStates {
    states: FxHashMap<Fingerprint, Option<BackPointer>>,
}

impl VisitedStates {
    pub fn with_capacity(capacity: usize) -> Self {
        VisitedStates {
            states: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    pub fn contains(&self, fingerprint: Fingerprint) -> bool {
        self.states.contains_key(&fingerprint)
    }

    pub fn insert_start(&mut self, fingerprint: Fingerprint) {
        self.states.insert(fingerprint, None);
    }

    pub fn insert(&mut self, fingerprint: Fingerprint, back_pointer: BackPointer) {
        self.states.insert(fingerprint, Some(back_pointer));
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    /// Walks back-pointers from `terminal` to the sentinel, collecting one
    /// `BackPointer` per hop, then reverses so the result runs
    /// start-to-goal. The caller re-stamps each hop's color in a second
    /// pass by replaying from the original robot positions.
    pub fn reconstruct(&self, terminal: Fingerprint) -> Vec<BackPointer> {
        let mut hops = Vec::new();
        let mut fingerprint = terminal;
        while let Some(Some(back_pointer)) = self.states.get(&fingerprint) {
            hops.push(*back_pointer);
            fingerprint = back_pointer.previous();
        }
        hops.reverse();
        hops
    }
}
