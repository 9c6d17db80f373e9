use std::path::PathBuf;
use std::sync::Arc;

use actix_web::web;

use crate::contact::application::service::contact_service::ContactService;
use crate::content::application::service::content_service::ContentService;
use crate::tests::support::fixtures::sample_content;
use crate::AppState;

/// Builds an `AppState` for route tests. Defaults: fixture content with an
/// asset root that holds no files, and an unconfigured contact service.
pub struct TestAppStateBuilder {
    content: Option<ContentService>,
    contact: Option<ContactService>,
    dev_mode: bool,
}

impl TestAppStateBuilder {
    pub fn new() -> Self {
        Self {
            content: None,
            contact: None,
            dev_mode: false,
        }
    }

    pub fn with_content(mut self, content: ContentService) -> Self {
        self.content = Some(content);
        self
    }

    pub fn with_contact(mut self, contact: ContactService) -> Self {
        self.contact = Some(contact);
        self
    }

    pub fn dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        let content = self.content.unwrap_or_else(|| {
            ContentService::new(
                Arc::new(sample_content()),
                PathBuf::from("/nonexistent-asset-root"),
            )
        });
        let contact = self.contact.unwrap_or_else(ContactService::unconfigured);

        web::Data::new(AppState {
            content: Arc::new(content),
            contact: Arc::new(contact),
            dev_mode: self.dev_mode,
        })
    }
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self::new()
    }
}
