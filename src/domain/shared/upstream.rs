/// Why an outbound dependency produced a fallback instead of real data
#[derive(Debug, Clone, PartialEq)]
pub enum DegradedReason {
    /// No API key configured; the call was never attempted
    NotConfigured,
    /// The call was attempted and failed
    Unavailable(String),
}

impl std::fmt::Display for DegradedReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DegradedReason::NotConfigured => write!(f, "not configured"),
            DegradedReason::Unavailable(msg) => write!(f, "unavailable: {}", msg),
        }
    }
}

/// Result of a call to a third-party API.
///
/// Upstream failures never propagate as errors. They resolve to a
/// `Degraded` value that still carries a usable fallback, so callers can
/// tell "empty because nothing matched" from "empty because the provider
/// failed".
#[derive(Debug, Clone, PartialEq)]
pub enum Upstream<T> {
    Fresh(T),
    Degraded { value: T, reason: DegradedReason },
}

impl<T> Upstream<T> {
    pub fn degraded(value: T, reason: DegradedReason) -> Self {
        Upstream::Degraded { value, reason }
    }

    pub fn value(&self) -> &T {
        match self {
            Upstream::Fresh(value) | Upstream::Degraded { value, .. } => value,
        }
    }

    pub fn into_value(self) -> T {
        match self {
            Upstream::Fresh(value) | Upstream::Degraded { value, .. } => value,
        }
    }

    pub fn is_degraded(&self) -> bool {
        matches!(self, Upstream::Degraded { .. })
    }

    pub fn reason(&self) -> Option<&DegradedReason> {
        match self {
            Upstream::Fresh(_) => None,
            Upstream::Degraded { reason, .. } => Some(reason),
        }
    }
}
