//! Home page

use leptos::prelude::*;
use leptos_router::components::A;

use crate::routes::AppRoute;
use crate::state::session::use_session_context;

#[component]
pub fn HomePage() -> impl IntoView {
    let session = use_session_context();

    view! {
        <div class="card">
            <h2>"Welcome to the Storefront!"</h2>
            <p class="subtitle">
                {move || if session.is_logged_in() {
                    "Browse the catalog and place an order."
                } else {
                    "Log in or register to place orders."
                }}
            </p>
            <A href=AppRoute::Products.path()>
                <span class="btn">"Browse products"</span>
            </A>
        </div>
    }
}
