use std::collections::HashMap;
use std::sync::{Arc, Mutex as StdMutex};

use chrono::NaiveDate;
use tokio::sync::{Mutex, OwnedMutexGuard};

/// Registry of per-date mutexes serializing the check-then-insert sequence
/// of appointment creation.
///
/// Two concurrent creates for the same date take the same mutex, so conflict
/// detection is atomic with respect to other writers on that date; creates
/// for different dates proceed in parallel. Reads and deletes take no lock.
#[derive(Default)]
pub struct DateLocks {
    inner: StdMutex<HashMap<NaiveDate, Arc<Mutex<()>>>>,
}

impl DateLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquires the mutex for `date`, creating it on first use. The guard is
    /// owned so it can be held across awaits in a handler.
    pub async fn acquire(&self, date: NaiveDate) -> OwnedMutexGuard<()> {
        let lock = {
            let mut map = self
                .inner
                .lock()
                .expect("date lock registry mutex poisoned");
            Arc::clone(map.entry(date).or_default())
        };
        lock.lock_owned().await
    }
}
