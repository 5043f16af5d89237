use crate::entities::*;

/// Outbound notifications triggered by the workflow.
///
/// Implementations must not fail the calling request: delivery problems
/// are logged, never propagated.
pub trait NotificationGateway {
    fn member_invited(&self, profile: &Profile, invite_link: &str);
}
