//! Storefront Web App - Leptos Frontend
//!
//! Router, navigation shell and the app-wide contexts (session, API client).

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes, A},
    path,
};

use crate::components::Navbar;
use crate::config::ApiConfig;
use crate::pages::{HomePage, LoginPage, ProductsPage, RegisterPage};
use crate::routes::AppRoute;
use crate::services::api::HttpApi;
use crate::state::session::provide_session_context;

#[component]
pub fn App() -> impl IntoView {
    provide_session_context();
    provide_context(HttpApi::new(ApiConfig::from_build_env()));

    view! {
        <Router>
            <div class="app-container">
                <Navbar/>
                <hr/>
                <main class="content">
                    <Routes fallback=|| view! { <NotFound/> }>
                        <Route path=path!("/") view=HomePage/>
                        <Route path=path!("/login") view=LoginPage/>
                        <Route path=path!("/register") view=RegisterPage/>
                        <Route path=path!("/products") view=ProductsPage/>
                    </Routes>
                </main>
            </div>
        </Router>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="card" style="text-align: center;">
            <h1>"404 - Page Not Found"</h1>
            <p class="subtitle">"The page you're looking for doesn't exist."</p>
            <A href=AppRoute::Home.path()>
                <span class="btn">"Go to Home"</span>
            </A>
        </div>
    }
}
