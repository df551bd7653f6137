/// A value that may not have loaded yet.
///
/// `Pending` is its own variant rather than a reuse of `None`, so a
/// resolved payload that is itself a legitimate null (`Option::None`)
/// stays distinguishable from "not loaded yet". The wrapper is a one-shot
/// classification of a snapshot, not a subscription; re-wrapping a newly
/// arrived value produces a fresh wrapper.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lazy<T> {
    /// No snapshot has arrived yet
    Pending,
    /// The value is loaded and ready to read
    Resolved(T),
}

impl<T> Lazy<T> {
    /// Wrap a concrete value as resolved.
    pub fn resolved(value: T) -> Self {
        Lazy::Resolved(value)
    }

    /// Classify a snapshot from a nullish source: `None` means the data
    /// has not arrived yet.
    pub fn from_option(value: Option<T>) -> Self {
        match value {
            Some(value) => Lazy::Resolved(value),
            None => Lazy::Pending,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Lazy::Resolved(_))
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, Lazy::Pending)
    }

    /// The resolved value, if any.
    pub fn value(&self) -> Option<&T> {
        match self {
            Lazy::Resolved(value) => Some(value),
            Lazy::Pending => None,
        }
    }

    /// Unwrap into the resolved value, if any.
    pub fn into_value(self) -> Option<T> {
        match self {
            Lazy::Resolved(value) => Some(value),
            Lazy::Pending => None,
        }
    }

    /// Map the resolved value, leaving `Pending` as-is.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Lazy<U> {
        match self {
            Lazy::Resolved(value) => Lazy::Resolved(f(value)),
            Lazy::Pending => Lazy::Pending,
        }
    }

    /// The resolved value, or `default` while pending.
    pub fn unwrap_or(self, default: T) -> T {
        match self {
            Lazy::Resolved(value) => value,
            Lazy::Pending => default,
        }
    }
}

impl<T> From<Option<T>> for Lazy<T> {
    fn from(value: Option<T>) -> Self {
        Lazy::from_option(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_nullish_source_is_pending() {
        let wrapped: Lazy<u64> = Lazy::from_option(None);
        assert!(wrapped.is_pending());
        assert!(!wrapped.is_resolved());
        assert_eq!(wrapped.value(), None);
    }

    #[test]
    fn test_present_source_is_resolved() {
        let wrapped = Lazy::from_option(Some(42u64));
        assert!(wrapped.is_resolved());
        assert_eq!(wrapped.value(), Some(&42));
        assert_eq!(wrapped.into_value(), Some(42));
    }

    #[test]
    fn test_resolved_null_payload_is_not_pending() {
        // A directly wrapped None payload is a loaded null, not "loading"
        let wrapped: Lazy<Option<u64>> = Lazy::resolved(None);
        assert!(wrapped.is_resolved());
        assert_eq!(wrapped.value(), Some(&None));

        let pending: Lazy<Option<u64>> = Lazy::from_option(None);
        assert!(pending.is_pending());
        assert_ne!(wrapped, pending);
    }

    #[test]
    fn test_map_and_unwrap_or() {
        let wrapped = Lazy::resolved(10u64).map(|v| v * 2);
        assert_eq!(wrapped, Lazy::Resolved(20));

        let pending: Lazy<u64> = Lazy::Pending;
        assert_eq!(pending.map(|v| v * 2), Lazy::Pending);
        assert_eq!(pending.unwrap_or(7), 7);
        assert_eq!(Lazy::resolved(3u64).unwrap_or(7), 3);
    }

    #[test]
    fn test_from_impl() {
        let wrapped: Lazy<&str> = Some("ready").into();
        assert_eq!(wrapped.value(), Some(&"ready"));
    }
}
