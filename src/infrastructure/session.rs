// Session store - holds the bearer credential for the lifetime of the app
use std::sync::{PoisonError, RwLock};

/// Owned by the application root and shared with the transport layer.
/// The credential is stored exactly as the backend returned it; set on
/// login success, cleared on logout and on a 401 response.
#[derive(Debug, Default)]
pub struct SessionStore {
    credential: RwLock<Option<String>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self) -> Option<String> {
        self.credential
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn set(&self, credential: String) {
        *self
            .credential
            .write()
            .unwrap_or_else(PoisonError::into_inner) = Some(credential);
    }

    pub fn clear(&self) {
        *self
            .credential
            .write()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}
