//! Session state management
//!
//! One [`TokenStore`] over `localStorage` serves the whole app through
//! [`token_store`]. [`SessionContext`] mirrors it into a signal so the
//! navigation shell re-renders on login and logout, and on writes from other
//! tabs (the browser's `storage` event).

use leptos::prelude::*;

use crate::services::storage::{BrowserStorage, TokenStore};
use crate::utils::constants::TOKEN_STORAGE_KEY;

thread_local! {
    static TOKEN_STORE: TokenStore<BrowserStorage> =
        TokenStore::new(BrowserStorage, TOKEN_STORAGE_KEY);
}

/// The process-wide session token store.
pub fn token_store() -> TokenStore<BrowserStorage> {
    TOKEN_STORE.with(Clone::clone)
}

/// Reactive view of the session token
#[derive(Clone, Copy)]
pub struct SessionContext {
    token: RwSignal<Option<String>>,
}

impl SessionContext {
    pub fn is_logged_in(&self) -> bool {
        self.token.with(Option::is_some)
    }

    pub fn token(&self) -> Option<String> {
        self.token.get()
    }

    /// Clear the stored token. The signal follows through the store's notification.
    pub fn logout(&self) {
        log::info!("Logging out");
        token_store().clear();
    }
}

pub fn provide_session_context() -> SessionContext {
    let store = token_store();
    let token = RwSignal::new(store.get());

    let listener = store.subscribe(move |current| {
        // Ignored once the owning scope is gone.
        let _ = token.try_set(current.map(str::to_string));
    });

    let storage_events = window_event_listener(leptos::ev::storage, move |_| {
        token_store().refresh();
    });

    on_cleanup(move || {
        token_store().unsubscribe(listener);
        storage_events.remove();
    });

    let context = SessionContext { token };
    provide_context(context);
    context
}

pub fn use_session_context() -> SessionContext {
    expect_context::<SessionContext>()
}
