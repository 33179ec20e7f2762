//! Notification helpers

use shared::error::PortalResult;
use shared::models::Notification;

use crate::api::DirectoryApi;

/// IDs of the notifications still unread
pub fn unread_ids(notifications: &[Notification]) -> Vec<i64> {
    notifications
        .iter()
        .filter(|n| !n.read)
        .map(|n| n.id)
        .collect()
}

/// Mark every unread notification as read, both at the collaborator and
/// locally. Returns how many were marked; makes no collaborator call when
/// everything is already read.
pub async fn mark_all_read(
    api: &dyn DirectoryApi,
    notifications: &mut [Notification],
) -> PortalResult<usize> {
    let ids = unread_ids(notifications);
    if ids.is_empty() {
        return Ok(0);
    }

    api.mark_notifications_read(&ids).await?;
    for notification in notifications.iter_mut() {
        notification.read = true;
    }
    Ok(ids.len())
}
