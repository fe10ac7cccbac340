mod colors;
mod relational;
mod workspaces;

use std::sync::Arc;

use crate::config::ContentServerConfig;
use crate::content_server::fallback::FallbackStore;
use crate::content_server::ContentServerClient;
use crate::database::Database;

/// Single seam through which all persistence happens. Callers cannot tell
/// whether a record lives in the relational store, on the remote content
/// server, or in the local fallback file.
///
/// Built once at startup and handed to request handlers through
/// `web::Data`; there is no module-level instance.
pub struct Storage {
    db: Arc<Database>,
    remote: ContentServerClient,
    fallback: FallbackStore,
}

impl Storage {
    pub fn new(db: Arc<Database>, content_config: &ContentServerConfig) -> Self {
        Self {
            db,
            remote: ContentServerClient::new(content_config),
            fallback: FallbackStore::new(&content_config.data_dir),
        }
    }

    pub fn database(&self) -> &Database {
        &self.db
    }
}
