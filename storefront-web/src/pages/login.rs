//! Login page
//!
//! On success the token is stored and the user is sent home; on failure the
//! form stays as it was with the error below it.

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::pages::{follow_redirect, NoticeView};
use crate::services::api::use_api;
use crate::services::auth;
use crate::state::session::token_store;
use crate::state::Notice;

#[component]
pub fn LoginPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (notice, set_notice) = signal(None::<Notice>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_notice.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        let username = username.get_untracked();
        let password = password.get_untracked();

        leptos::task::spawn_local(async move {
            let outcome = auth::login(&api, &token_store(), &username, &password).await;
            let _ = set_notice.try_set(Some(outcome.notice));
            if let Some(redirect) = outcome.redirect {
                follow_redirect(redirect, navigate).await;
            }
        });
    };

    view! {
        <div class="card">
            <h2>"User Login"</h2>
            <form on:submit=on_submit>
                <div class="field">
                    <label for="username">"Username:"</label>
                    <input
                        type="text"
                        id="username"
                        required=true
                        prop:value=username
                        on:input=move |ev| set_username.set(event_target_value(&ev))
                    />
                </div>
                <div class="field">
                    <label for="password">"Password:"</label>
                    <input
                        type="password"
                        id="password"
                        required=true
                        prop:value=password
                        on:input=move |ev| set_password.set(event_target_value(&ev))
                    />
                </div>
                <button type="submit" class="btn">"Login"</button>
            </form>
            <NoticeView notice=notice/>
        </div>
    }
}
