//! Small helpers shared across modules.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};
use std::hash::BuildHasher;
use std::time::Duration;

/// Values that may be considered empty.
///
/// `Option` values count as empty when they are `None` or wrap an empty value.
///
/// # Examples
/// ```
/// use commons::util::NullOrEmpty;
///
/// assert!("".is_null_or_empty());
/// assert!(!"  ".is_null_or_empty());
/// assert!(None::<String>.is_null_or_empty());
/// assert!(!Some(vec![1]).is_null_or_empty());
/// ```
pub trait NullOrEmpty {
    fn is_null_or_empty(&self) -> bool;

    fn is_present(&self) -> bool {
        !self.is_null_or_empty()
    }
}

/// Strings are empty only when they have no characters; whitespace counts.
impl NullOrEmpty for str {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }
}

impl NullOrEmpty for String {
    fn is_null_or_empty(&self) -> bool {
        self.as_str().is_null_or_empty()
    }
}

impl<T> NullOrEmpty for [T] {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> NullOrEmpty for Vec<T> {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V, S: BuildHasher> NullOrEmpty for HashMap<K, V, S> {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T, S: BuildHasher> NullOrEmpty for HashSet<T, S> {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<K, V> NullOrEmpty for BTreeMap<K, V> {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T> NullOrEmpty for BTreeSet<T> {
    fn is_null_or_empty(&self) -> bool {
        self.is_empty()
    }
}

impl<T: NullOrEmpty> NullOrEmpty for Option<T> {
    fn is_null_or_empty(&self) -> bool {
        self.as_ref().is_none_or(NullOrEmpty::is_null_or_empty)
    }
}

/// Suspend the current task for `duration`.
pub async fn delay(duration: Duration) {
    tokio::time::sleep(duration).await;
}
