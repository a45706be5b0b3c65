use super::error::{AppError, AppResult};
use shelfapp::api::ShelfApi;
use shelfapp::config::ServerConfig;
use shelfapp::store::fs::FileStore;
use std::sync::{Arc, Mutex, PoisonError};

/// Admin login settings taken from the server config.
#[derive(Debug, Clone, Default)]
pub struct AuthSettings {
    pub credentials: Option<(String, String)>,
    pub secure_cookies: bool,
}

impl AuthSettings {
    pub fn from_config(config: &ServerConfig) -> Self {
        Self {
            credentials: config
                .admin_credentials()
                .map(|(user, pass)| (user.to_string(), pass.to_string())),
            secure_cookies: config.secure_cookies,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    /// Every request runs its whole load-mutate-persist sequence under this lock.
    api: Arc<Mutex<ShelfApi<FileStore>>>,
    pub auth: Arc<AuthSettings>,
}

impl AppState {
    pub fn new(api: ShelfApi<FileStore>, auth: AuthSettings) -> Self {
        Self {
            api: Arc::new(Mutex::new(api)),
            auth: Arc::new(auth),
        }
    }

    /// Run `f` with exclusive access to the API on the blocking thread pool.
    pub async fn with_api<F, R>(&self, f: F) -> AppResult<R>
    where
        F: FnOnce(&mut ShelfApi<FileStore>) -> R + Send + 'static,
        R: Send + 'static,
    {
        let api = Arc::clone(&self.api);
        tokio::task::spawn_blocking(move || {
            // Every call reloads the document, so a poisoned guard holds no partial state
            let mut api = api.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut api)
        })
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "catalog task failed");
            AppError::Internal("Catalog is unavailable".to_string())
        })
    }
}
