//! Request facades for `solutions/backupRestore`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::adapter::RequestAdapter;
use crate::errors::GraphError;
use crate::models::{
    BackupRestoreRoot, DriveProtectionUnit, MailboxProtectionUnit, ProtectionUnit, RestoreSession,
    SiteProtectionUnit,
};
use crate::requests::RequestConfiguration;
use crate::resource::{CollectionRequest, ItemRequest, SingletonRequest};

use super::routes;

/// Requests against the backup and restore service root.
pub struct BackupRestoreRequest {
    inner: SingletonRequest<BackupRestoreRoot>,
}

impl BackupRestoreRequest {
    pub(crate) fn new(
        adapter: Arc<dyn RequestAdapter>,
        parameters: HashMap<String, String>,
    ) -> Self {
        Self {
            inner: SingletonRequest::new(adapter, routes::BACKUP_RESTORE, parameters),
        }
    }

    /// Read the service root, including its enablement status.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<BackupRestoreRoot>, GraphError> {
        self.inner.get(config).await
    }

    /// Update service-level settings.
    pub async fn patch(
        &self,
        body: &BackupRestoreRoot,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<BackupRestoreRoot>, GraphError> {
        self.inner.update(body, config).await
    }

    /// Restore sessions of the tenant. Polymorphic: Exchange, OneDrive,
    /// and SharePoint sessions come back mixed.
    pub fn restore_sessions(&self) -> RestoreSessionsRequest {
        self.inner.collection(routes::RESTORE_SESSIONS)
    }

    /// All protection units regardless of kind.
    pub fn protection_units(&self) -> ProtectionUnitsRequest {
        self.inner.collection(routes::PROTECTION_UNITS)
    }

    /// Protection units covering OneDrive drives.
    pub fn drive_protection_units(&self) -> DriveProtectionUnitsRequest {
        self.inner.collection(routes::DRIVE_PROTECTION_UNITS)
    }

    /// Protection units covering Exchange mailboxes.
    pub fn mailbox_protection_units(&self) -> MailboxProtectionUnitsRequest {
        self.inner.collection(routes::MAILBOX_PROTECTION_UNITS)
    }

    /// Protection units covering SharePoint sites.
    pub fn site_protection_units(&self) -> SiteProtectionUnitsRequest {
        self.inner.collection(routes::SITE_PROTECTION_UNITS)
    }
}

/// Collection of restore sessions.
pub type RestoreSessionsRequest = CollectionRequest<RestoreSession>;
/// One restore session.
pub type RestoreSessionRequest = ItemRequest<RestoreSession>;

impl RestoreSessionsRequest {
    /// Create a draft restore session.
    pub async fn post(
        &self,
        body: &RestoreSession,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<RestoreSession>, GraphError> {
        self.create(body, config).await
    }
}

impl RestoreSessionRequest {
    /// Apply changes to a draft restore session.
    pub async fn patch(
        &self,
        body: &RestoreSession,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<RestoreSession>, GraphError> {
        self.update(body, config).await
    }

    /// Delete a draft restore session.
    pub async fn delete(&self, config: Option<&RequestConfiguration>) -> Result<(), GraphError> {
        self.remove(config).await
    }
}

/// Collection of protection units of any kind (read-only).
pub type ProtectionUnitsRequest = CollectionRequest<ProtectionUnit>;
/// One protection unit of any kind (read-only).
pub type ProtectionUnitRequest = ItemRequest<ProtectionUnit>;

/// Collection of drive protection units (read-only).
pub type DriveProtectionUnitsRequest = CollectionRequest<DriveProtectionUnit>;
/// One drive protection unit (read-only).
pub type DriveProtectionUnitRequest = ItemRequest<DriveProtectionUnit>;

/// Collection of mailbox protection units (read-only).
pub type MailboxProtectionUnitsRequest = CollectionRequest<MailboxProtectionUnit>;
/// One mailbox protection unit (read-only).
pub type MailboxProtectionUnitRequest = ItemRequest<MailboxProtectionUnit>;

/// Collection of site protection units (read-only).
pub type SiteProtectionUnitsRequest = CollectionRequest<SiteProtectionUnit>;
/// One site protection unit (read-only).
pub type SiteProtectionUnitRequest = ItemRequest<SiteProtectionUnit>;
