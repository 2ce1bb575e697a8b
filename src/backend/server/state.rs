/**
 * Application State Management
 *
 * `AppState` holds the two things every request shares: the store handle
 * and the credential service. Both are immutable after startup.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers take only what they use,
 * `State<StoreHandle>` or `State<Arc<CredentialService>>`, and let the
 * `AuthUser` extractor find the credential service.
 */

use std::sync::Arc;

use axum::extract::FromRef;

use crate::backend::auth::credentials::CredentialService;
use crate::backend::store::StoreHandle;

#[derive(Clone)]
pub struct AppState {
    pub store: StoreHandle,
    pub credentials: Arc<CredentialService>,
}

impl AppState {
    pub fn new(store: StoreHandle, credentials: CredentialService) -> Self {
        Self {
            store,
            credentials: Arc::new(credentials),
        }
    }
}

impl FromRef<AppState> for StoreHandle {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.store.clone()
    }
}

impl FromRef<AppState> for Arc<CredentialService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.credentials.clone()
    }
}
