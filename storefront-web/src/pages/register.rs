//! Registration page

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use shared::dto::RegisterRequest;

use crate::pages::{follow_redirect, NoticeView};
use crate::services::api::use_api;
use crate::services::auth;
use crate::state::Notice;

#[component]
pub fn RegisterPage() -> impl IntoView {
    let api = use_api();
    let navigate = use_navigate();

    let (username, set_username) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (notice, set_notice) = signal(None::<Notice>);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        set_notice.set(None);

        let api = api.clone();
        let navigate = navigate.clone();
        let request = RegisterRequest {
            username: username.get_untracked(),
            password: password.get_untracked(),
            email: email.get_untracked(),
        };

        leptos::task::spawn_local(async move {
            let outcome = auth::register(&api, &request).await;
            let _ = set_notice.try_set(Some(outcome.notice));
            if let Some(redirect) = outcome.redirect {
                follow_redirect(redirect, navigate).await;
            }
        });
    };

    view! {
        <div class="card">
            <h2>"Register a New User"</h2>
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
                    <label for="email">"Email:"</label>
                    <input
                        type="email"
                        id="email"
                        required=true
                        prop:value=email
                        on:input=move |ev| set_email.set(event_target_value(&ev))
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
                <button type="submit" class="btn">"Register"</button>
            </form>
            <NoticeView notice=notice/>
        </div>
    }
}
