use std::collections::HashMap;
use std::sync::Arc;

use crate::adapter::RequestAdapter;
use crate::types::GraphBaseUrl;

use super::{BackupRestoreRequest, VirtualEventsRequest};

/// Client for the Microsoft Graph solutions namespace.
///
/// The client is a thin entry point: every call descends from here through
/// cheap, freshly constructed request builders, all sharing one adapter.
pub struct SolutionsClient {
    adapter: Arc<dyn RequestAdapter>,
}

impl SolutionsClient {
    /// Wrap a ready adapter, e.g. a built [crate::HttpAdapter].
    pub fn new(adapter: impl RequestAdapter + 'static) -> Self {
        Self {
            adapter: Arc::new(adapter),
        }
    }

    /// Wrap a shared adapter.
    pub fn from_arc(adapter: Arc<dyn RequestAdapter>) -> Self {
        Self { adapter }
    }

    /// Base URL of the Graph deployment this client talks to.
    pub fn base_url(&self) -> &GraphBaseUrl {
        self.adapter.base_url()
    }

    /// The backup and restore service.
    pub fn backup_restore(&self) -> BackupRestoreRequest {
        BackupRestoreRequest::new(self.adapter.clone(), self.root_parameters())
    }

    /// The virtual events service.
    pub fn virtual_events(&self) -> VirtualEventsRequest {
        VirtualEventsRequest::new(self.adapter.clone(), self.root_parameters())
    }

    fn root_parameters(&self) -> HashMap<String, String> {
        HashMap::from([(
            "baseurl".to_string(),
            self.adapter.base_url().to_string(),
        )])
    }
}
