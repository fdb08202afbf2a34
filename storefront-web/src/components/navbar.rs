//! Navigation Bar Component
//!
//! Links depend on the session: Login and Register while logged out, a
//! Logout button while logged in.

use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;

use crate::routes::AppRoute;
use crate::state::session::use_session_context;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = use_session_context();

    view! {
        <nav>
            <ul class="nav-links">
                <li><A href=AppRoute::Home.path()>"Home"</A></li>
                {move || if session.is_logged_in() {
                    view! { <li><LogoutButton/></li> }.into_any()
                } else {
                    view! {
                        <li><A href=AppRoute::Login.path()>"Login"</A></li>
                        <li><A href=AppRoute::Register.path()>"Register"</A></li>
                    }.into_any()
                }}
                <li><A href=AppRoute::Products.path()>"Products"</A></li>
            </ul>
        </nav>
    }
}

#[component]
fn LogoutButton() -> impl IntoView {
    let session = use_session_context();
    let navigate = use_navigate();

    let logout = move |_| {
        session.logout();
        navigate(AppRoute::Login.path(), Default::default());
    };

    view! {
        <button class="btn nav-button" on:click=logout>"Logout"</button>
    }
}
