//! Process-wide access to the current argument store.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::store::ArgStore;

/// Cloneable handle to the argument store a program is currently using.
///
/// Readers take an `Arc` snapshot with [`current`](Self::current) and query it
/// without holding any lock. [`replace`](Self::replace) and
/// [`reparse`](Self::reparse) swap in a whole new store at once, so a reader
/// sees either the old arguments or the new ones, never a mix.
#[derive(Debug, Clone, Default)]
pub struct SharedArgs {
    inner: Arc<RwLock<Arc<ArgStore>>>,
}

impl SharedArgs {
    pub fn new(store: ArgStore) -> Self {
        Self {
            inner: Arc::new(RwLock::new(Arc::new(store))),
        }
    }

    /// Snapshot of the current store.
    pub fn current(&self) -> Arc<ArgStore> {
        self.inner.read().clone()
    }

    /// Install `store`, returning the one it replaced.
    pub fn replace(&self, store: ArgStore) -> Arc<ArgStore> {
        let next = Arc::new(store);
        std::mem::replace(&mut *self.inner.write(), next)
    }

    /// Parse `argv` from scratch and install the result.
    pub fn reparse<I, S>(&self, argv: I) -> Arc<ArgStore>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        // Parse outside the lock; readers keep the old store until the swap.
        let store = ArgStore::parse(argv);
        tracing::debug!(flags = store.len(), "replacing shared arguments");
        self.replace(store)
    }
}
