//! Page modules - one per route

pub mod home;
pub mod login;
pub mod products;
pub mod register;

pub use home::HomePage;
pub use login::LoginPage;
pub use products::ProductsPage;
pub use register::RegisterPage;

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::services::auth::Redirect;
use crate::state::Notice;

/// Message line under a form or list
#[component]
pub fn NoticeView(#[prop(into)] notice: Signal<Option<Notice>>) -> impl IntoView {
    move || {
        notice.get().map(|notice| {
            view! { <p class=notice.class()>{notice.text().to_string()}</p> }
        })
    }
}

/// Wait out the redirect delay, then navigate.
pub(crate) async fn follow_redirect(redirect: Redirect, navigate: impl Fn(&str, NavigateOptions)) {
    if redirect.delay_ms > 0 {
        TimeoutFuture::new(redirect.delay_ms).await;
    }
    navigate(redirect.route.path(), NavigateOptions::default());
}

/// Modal browser alert for notices the user must acknowledge.
pub(crate) fn blocking_notice(message: &str) {
    if let Some(window) = web_sys::window() {
        if let Err(e) = window.alert_with_message(message) {
            log::warn!("Could not show alert: {:?}", e);
        }
    }
}
