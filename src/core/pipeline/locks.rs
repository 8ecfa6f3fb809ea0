use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use tokio::sync::{Mutex, MutexGuard};

const LOCK_STRIPES: usize = 64;

/// Striped async locks keyed by user id
///
/// Two users may share a stripe; that only costs some parallelism.
pub(super) struct UserLocks {
    stripes: Vec<Mutex<()>>,
}

impl UserLocks {
    pub(super) fn new() -> Self {
        Self {
            stripes: (0..LOCK_STRIPES).map(|_| Mutex::new(())).collect(),
        }
    }

    pub(super) async fn lock(&self, user_id: &str) -> MutexGuard<'_, ()> {
        let mut hasher = DefaultHasher::new();
        user_id.hash(&mut hasher);
        let stripe = (hasher.finish() as usize) % self.stripes.len();
        self.stripes[stripe].lock().await
    }
}
