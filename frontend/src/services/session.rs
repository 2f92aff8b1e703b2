use super::error::ServiceError;

const USER_ID_KEY: &str = "userId";
const USER_TOKEN_KEY: &str = "userToken";

/// Identity of the logged-in user, as left in local storage by the login page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub user_id: Option<String>,
    pub token: Option<String>,
}

impl Session {
    pub fn new(user_id: Option<String>, token: Option<String>) -> Self {
        Self {
            user_id: user_id.filter(|id| !id.is_empty()),
            token: token.filter(|token| !token.is_empty()),
        }
    }

    /// Reads `userId` and `userToken` from `window.localStorage`. Any failure
    /// to reach the storage counts as "not logged in".
    pub fn load() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        match storage {
            Some(storage) => Self::new(
                storage.get_item(USER_ID_KEY).ok().flatten(),
                storage.get_item(USER_TOKEN_KEY).ok().flatten(),
            ),
            None => Self::default(),
        }
    }

    pub fn is_logged_in(&self) -> bool {
        self.user_id.is_some()
    }

    pub fn require_user_id(&self) -> Result<&str, ServiceError> {
        self.user_id.as_deref().ok_or(ServiceError::NotLoggedIn)
    }

    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }
}
