use chrono::{DateTime, Utc};

/// Source of "now" for rules that depend on the decision timeline.
///
/// Injected so that analyses can be reproduced for a fixed point in time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}
