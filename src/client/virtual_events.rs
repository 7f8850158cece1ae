//! Request facades for `solutions/virtualEvents`.

use std::collections::HashMap;
use std::sync::Arc;

use crate::adapter::RequestAdapter;
use crate::errors::GraphError;
use crate::models::{VirtualEvent, VirtualEventSession, VirtualEventWebinar, VirtualEventsRoot};
use crate::requests::RequestConfiguration;
use crate::resource::{CollectionRequest, ItemRequest, SingletonRequest};

use super::routes;

/// Requests against the virtual events service root.
pub struct VirtualEventsRequest {
    inner: SingletonRequest<VirtualEventsRoot>,
}

impl VirtualEventsRequest {
    pub(crate) fn new(
        adapter: Arc<dyn RequestAdapter>,
        parameters: HashMap<String, String>,
    ) -> Self {
        Self {
            inner: SingletonRequest::new(adapter, routes::VIRTUAL_EVENTS, parameters),
        }
    }

    /// Read the service root.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<VirtualEventsRoot>, GraphError> {
        self.inner.get(config).await
    }

    /// Virtual events of any kind.
    pub fn events(&self) -> EventsRequest {
        self.inner.collection(routes::EVENTS)
    }

    /// Webinars only.
    pub fn webinars(&self) -> WebinarsRequest {
        self.inner.collection(routes::WEBINARS)
    }
}

/// Collection of virtual events.
pub type EventsRequest = CollectionRequest<VirtualEvent>;
/// One virtual event.
pub type EventRequest = ItemRequest<VirtualEvent>;

impl EventsRequest {
    /// Create a virtual event.
    pub async fn post(
        &self,
        body: &VirtualEvent,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<VirtualEvent>, GraphError> {
        self.create(body, config).await
    }
}

impl EventRequest {
    /// Apply changes to a virtual event.
    pub async fn patch(
        &self,
        body: &VirtualEvent,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<VirtualEvent>, GraphError> {
        self.update(body, config).await
    }

    /// Delete a virtual event.
    pub async fn delete(&self, config: Option<&RequestConfiguration>) -> Result<(), GraphError> {
        self.remove(config).await
    }
}

/// Collection of webinars.
pub type WebinarsRequest = CollectionRequest<VirtualEventWebinar>;
/// One webinar.
pub type WebinarRequest = ItemRequest<VirtualEventWebinar>;

impl WebinarRequest {
    /// Apply changes to a webinar.
    pub async fn patch(
        &self,
        body: &VirtualEventWebinar,
        config: Option<&RequestConfiguration>,
    ) -> Result<Option<VirtualEventWebinar>, GraphError> {
        self.update(body, config).await
    }

    /// Sessions on this webinar's agenda.
    pub fn sessions(&self) -> WebinarSessionsRequest {
        self.collection(routes::WEBINAR_SESSIONS)
    }
}

/// Collection of webinar sessions (read-only).
pub type WebinarSessionsRequest = CollectionRequest<VirtualEventSession>;
/// One webinar session (read-only).
pub type WebinarSessionRequest = ItemRequest<VirtualEventSession>;
