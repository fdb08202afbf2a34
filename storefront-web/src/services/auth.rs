//! # Login and Registration Flows
//!
//! What the login and register forms do on submit, independent of the view
//! layer: call the API, persist the token on login, and decide what to show
//! and where to go next.

use shared::dto::RegisterRequest;

use crate::error::Operation;
use crate::routes::AppRoute;
use crate::services::api::StorefrontApi;
use crate::services::storage::{TokenStorage, TokenStore};
use crate::state::Notice;
use crate::utils::constants::REGISTER_REDIRECT_DELAY_MS;

pub const LOGIN_SUCCESS: &str = "Login successful! Redirecting to the home page...";
pub const REGISTER_SUCCESS: &str = "Registration successful! Please log in.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Redirect {
    pub route: AppRoute,
    pub delay_ms: u32,
}

/// Result of a form submission
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormOutcome {
    pub notice: Notice,
    pub redirect: Option<Redirect>,
}

impl FormOutcome {
    fn failure(message: String) -> Self {
        Self {
            notice: Notice::Error(message),
            redirect: None,
        }
    }
}

pub async fn login<A, S>(
    api: &A,
    store: &TokenStore<S>,
    username: &str,
    password: &str,
) -> FormOutcome
where
    A: StorefrontApi + ?Sized,
    S: TokenStorage,
{
    log::info!("Attempting login for {}", username);

    let token = match api.authenticate(username, password).await {
        Ok(token) => token,
        Err(err) => {
            log::warn!("Login failed: {}", err);
            return FormOutcome::failure(err.user_message(Operation::Login));
        }
    };

    if let Err(err) = store.set(&token) {
        log::error!("Could not persist session token: {}", err);
        return FormOutcome::failure(format!("Error: {}", err));
    }

    log::info!("Login successful");
    FormOutcome {
        notice: Notice::Success(LOGIN_SUCCESS.to_string()),
        redirect: Some(Redirect {
            route: AppRoute::Home,
            delay_ms: 0,
        }),
    }
}

pub async fn register<A>(api: &A, request: &RegisterRequest) -> FormOutcome
where
    A: StorefrontApi + ?Sized,
{
    log::info!("Registering {}", request.username);

    match api.register(request).await {
        Ok(response) => {
            if let Some(message) = response.message {
                log::info!("{}", message);
            }
            FormOutcome {
                notice: Notice::Success(REGISTER_SUCCESS.to_string()),
                redirect: Some(Redirect {
                    route: AppRoute::Login,
                    delay_ms: REGISTER_REDIRECT_DELAY_MS,
                }),
            }
        }
        Err(err) => {
            log::warn!("Registration failed: {}", err);
            FormOutcome::failure(err.user_message(Operation::Register))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::services::api::fake::FakeApi;
    use crate::services::storage::MemoryStorage;
    use futures::executor::block_on;
    use shared::dto::RegisterResponse;

    fn store() -> TokenStore<MemoryStorage> {
        TokenStore::new(MemoryStorage::new(), "token")
    }

    fn bob() -> RegisterRequest {
        RegisterRequest {
            username: "bob".to_string(),
            password: "secret".to_string(),
            email: "bob@example.com".to_string(),
        }
    }

    #[test]
    fn test_login_stores_token_and_goes_home() {
        let api = FakeApi {
            login: Ok("x.y.z".to_string()),
            ..Default::default()
        };
        let store = store();

        let outcome = block_on(login(&api, &store, "bob", "secret"));

        assert_eq!(store.get().as_deref(), Some("x.y.z"));
        assert_eq!(outcome.notice, Notice::Success(LOGIN_SUCCESS.to_string()));
        assert_eq!(
            outcome.redirect,
            Some(Redirect { route: AppRoute::Home, delay_ms: 0 })
        );
        assert_eq!(outcome.redirect.map(|r| r.route.path()), Some("/"));
    }

    #[test]
    fn test_login_rejected_keeps_form() {
        let api = FakeApi {
            login: Err(ApiError::Rejected {
                status: 401,
                detail: Some("Incorrect username or password.".to_string()),
            }),
            ..Default::default()
        };
        let store = store();

        let outcome = block_on(login(&api, &store, "bob", "wrong"));

        assert_eq!(store.get(), None);
        assert_eq!(outcome.redirect, None);
        assert_eq!(
            outcome.notice,
            Notice::Error("Error: Incorrect username or password.".to_string())
        );
    }

    #[test]
    fn test_login_unreachable_leaves_existing_session() {
        let api = FakeApi::default();
        let store = store();
        store.set("old.session.token").unwrap();

        let outcome = block_on(login(&api, &store, "bob", "secret"));

        assert_eq!(
            outcome.notice.text(),
            "Error: No response from server. Check your connection or the backend server."
        );
        assert_eq!(store.get().as_deref(), Some("old.session.token"));
    }

    #[test]
    fn test_login_storage_failure_is_reported() {
        let api = FakeApi {
            login: Ok("x.y.z".to_string()),
            ..Default::default()
        };
        let storage = MemoryStorage::new();
        storage.set_read_only(true);
        let store = TokenStore::new(storage, "token");

        let outcome = block_on(login(&api, &store, "bob", "secret"));

        assert!(outcome.notice.is_error());
        assert_eq!(outcome.redirect, None);
    }

    #[test]
    fn test_register_redirects_to_login_after_delay() {
        let api = FakeApi {
            register: Ok(RegisterResponse::default()),
            ..Default::default()
        };

        let outcome = block_on(register(&api, &bob()));

        assert_eq!(outcome.notice, Notice::Success(REGISTER_SUCCESS.to_string()));
        assert_eq!(
            outcome.redirect,
            Some(Redirect { route: AppRoute::Login, delay_ms: 2000 })
        );
    }

    #[test]
    fn test_register_detail_is_shown() {
        let api = FakeApi {
            register: Err(ApiError::Rejected {
                status: 400,
                detail: Some("Username already registered.".to_string()),
            }),
            ..Default::default()
        };

        let outcome = block_on(register(&api, &bob()));

        assert_eq!(
            outcome.notice,
            Notice::Error("Error: Username already registered.".to_string())
        );
        assert_eq!(outcome.redirect, None);
    }

    #[test]
    fn test_register_unreachable_message_is_verbatim() {
        let outcome = block_on(register(&FakeApi::default(), &bob()));
        assert_eq!(
            outcome.notice.text(),
            "Error: No response from server. Check your connection or the backend server."
        );
    }
}
