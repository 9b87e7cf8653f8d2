//! Port resolving who is responsible for the current change.

/// Supplies the auditor recorded in [`AuditMetadata`](crate::domain::AuditMetadata).
pub trait AuditorAware<U>: Send + Sync {
    /// Current auditor, or `None` when the change is anonymous.
    fn current_auditor(&self) -> Option<U>;
}

/// Auditor that always reports the same identity.
///
/// Suitable for batch jobs and the demo server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedAuditor<U>(U);

impl<U> FixedAuditor<U> {
    pub fn new(auditor: U) -> Self {
        Self(auditor)
    }
}

impl<U: Clone + Send + Sync> AuditorAware<U> for FixedAuditor<U> {
    fn current_auditor(&self) -> Option<U> {
        Some(self.0.clone())
    }
}

/// Auditor for changes nobody is accountable for.
#[derive(Debug, Default, Clone, Copy)]
pub struct AnonymousAuditor;

impl<U> AuditorAware<U> for AnonymousAuditor {
    fn current_auditor(&self) -> Option<U> {
        None
    }
}
