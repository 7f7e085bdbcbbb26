use std::collections::{BTreeSet, HashMap};
use std::sync::{Mutex, MutexGuard, PoisonError};

use super::RosterStore;

/// An in-progress reconciliation sweep.
///
/// Begin a sweep with [`RosterStore::begin_sweep`] before fetching live members and
/// pass it to [`RosterStore::reconcile`]. Members removed from the roster while the
/// sweep is open are left out of that reconcile, since the live member list was
/// taken before they left. Dropping the sweep closes it.
pub struct RosterSweep<'a> {
    store: &'a RosterStore,
    id: u64,
}

impl<'a> RosterSweep<'a> {
    pub(super) fn begin(store: &'a RosterStore) -> Self {
        let id = store.departures.open_sweep();

        Self { store, id }
    }

    /// Ids removed from the roster since this sweep began.
    pub(super) fn departed(&self) -> BTreeSet<u64> {
        self.store.departures.departed_since(self.id)
    }
}

impl Drop for RosterSweep<'_> {
    fn drop(&mut self) {
        self.store.departures.close_sweep(self.id);
    }
}

/// Departures seen by each open sweep.
///
/// Never held across an await, so a blocking mutex is enough.
#[derive(Default)]
pub(super) struct Departures {
    inner: Mutex<DeparturesInner>,
}

#[derive(Default)]
struct DeparturesInner {
    next_sweep: u64,
    open: HashMap<u64, BTreeSet<u64>>,
}

impl Departures {
    fn open_sweep(&self) -> u64 {
        let mut inner = self.lock();
        let id = inner.next_sweep;
        inner.next_sweep += 1;
        inner.open.insert(id, BTreeSet::new());
        id
    }

    fn close_sweep(&self, sweep: u64) {
        self.lock().open.remove(&sweep);
    }

    fn departed_since(&self, sweep: u64) -> BTreeSet<u64> {
        self.lock().open.get(&sweep).cloned().unwrap_or_default()
    }

    /// Notes a departure in every open sweep. Nothing is kept when no sweep is open.
    pub(super) fn record(&self, member_id: u64) {
        for departed in self.lock().open.values_mut() {
            departed.insert(member_id);
        }
    }

    fn lock(&self) -> MutexGuard<'_, DeparturesInner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
