//! crates/logging/src/lock.rs
//! Host-supplied mutual exclusion around the format-and-write section.
//!
//! The logger owns no lock of its own. A host that shares one sink between
//! threads installs a [`LockCallback`]; the entry point calls it with
//! `acquire = true` after a record passes the filter and with
//! `acquire = false` once the write has finished. Release is tied to a guard
//! so it also runs when the sink panics.

use std::any::Any;
use std::fmt;
use std::sync::Arc;

/// Opaque host data handed back to the lock callback on every call.
pub type UserData = Arc<dyn Any + Send + Sync>;

/// Acquire/release primitive supplied by the host.
///
/// Any `Fn(Option<&UserData>, bool)` closure implements this trait, so a host
/// can wrap a native mutex, a no-op, or any other primitive that suits its
/// threading model.
pub trait LockCallback: Send + Sync {
    /// Acquires (`acquire == true`) or releases (`acquire == false`) the lock.
    fn call(&self, udata: Option<&UserData>, acquire: bool);
}

impl<F> LockCallback for F
where
    F: Fn(Option<&UserData>, bool) + Send + Sync,
{
    fn call(&self, udata: Option<&UserData>, acquire: bool) {
        self(udata, acquire);
    }
}

/// Holds an acquired host lock and releases it on drop.
#[must_use = "dropping the guard immediately releases the host lock"]
pub(crate) struct LockGuard<'a> {
    callback: &'a dyn LockCallback,
    udata: Option<&'a UserData>,
}

impl<'a> LockGuard<'a> {
    pub(crate) fn acquire(callback: &'a dyn LockCallback, udata: Option<&'a UserData>) -> Self {
        callback.call(udata, true);
        Self { callback, udata }
    }
}

impl Drop for LockGuard<'_> {
    fn drop(&mut self) {
        self.callback.call(self.udata, false);
    }
}

impl fmt::Debug for LockGuard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LockGuard")
            .field("has_udata", &self.udata.is_some())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::panic::{self, AssertUnwindSafe};
    use std::sync::Mutex;

    fn recorder() -> (Arc<Mutex<Vec<bool>>>, impl LockCallback) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        let callback = move |_: Option<&UserData>, acquire: bool| {
            sink.lock().expect("calls mutex").push(acquire);
        };
        (calls, callback)
    }

    #[test]
    fn guard_pairs_acquire_with_release() {
        let (calls, callback) = recorder();
        {
            let _guard = LockGuard::acquire(&callback, None);
            assert_eq!(*calls.lock().expect("calls mutex"), vec![true]);
        }
        assert_eq!(*calls.lock().expect("calls mutex"), vec![true, false]);
    }

    #[test]
    fn guard_releases_during_unwind() {
        let (calls, callback) = recorder();
        let result = panic::catch_unwind(AssertUnwindSafe(|| {
            let _guard = LockGuard::acquire(&callback, None);
            panic!("sink exploded");
        }));
        assert!(result.is_err());
        assert_eq!(*calls.lock().expect("calls mutex"), vec![true, false]);
    }

    #[test]
    fn udata_is_passed_through() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let record = Arc::clone(&seen);
        let callback = move |udata: Option<&UserData>, _acquire: bool| {
            let tag = udata
                .and_then(|data| data.downcast_ref::<&'static str>())
                .copied();
            record.lock().expect("seen mutex").push(tag);
        };
        let udata: UserData = Arc::new("host");

        drop(LockGuard::acquire(&callback, Some(&udata)));

        assert_eq!(*seen.lock().expect("seen mutex"), vec![Some("host"), Some("host")]);
    }
}
