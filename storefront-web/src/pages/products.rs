//! Products page
//!
//! Loads the catalog once on mount and lets the user order any listed
//! product. Order results only change the notice line; the list and the
//! entered quantities stay as they are.

use leptos::prelude::*;
use shared::dto::ResourceId;
use shared::utils::format_price;

use crate::pages::{blocking_notice, NoticeView};
use crate::services::api::{use_api, StorefrontApi};
use crate::services::orders;
use crate::state::products::{CatalogView, ProductsState};
use crate::state::session::token_store;
use crate::state::Notice;
use crate::utils::constants::CURRENCY_LABEL;

#[component]
pub fn ProductsPage() -> impl IntoView {
    let api = use_api();

    let state = RwSignal::new(ProductsState::Loading);
    let (notice, set_notice) = signal(None::<Notice>);
    let catalog = Memo::new(move |_| state.with(ProductsState::catalog_view));

    let loader = api.clone();
    leptos::task::spawn_local(async move {
        let result = loader.list_products().await;
        match &result {
            Ok(products) => log::info!("Loaded {} products", products.len()),
            Err(err) => log::warn!("Failed to load products: {}", err),
        }
        // Dropped if the page was left before the catalog arrived.
        let _ = state.try_set(ProductsState::from_result(result));
    });

    let order = move |product_id: ResourceId| {
        set_notice.set(None);
        let quantity = state
            .with_untracked(|s| s.quantity(&product_id))
            .unwrap_or(1);
        let api = api.clone();

        leptos::task::spawn_local(async move {
            let notice = match orders::place_order(&api, &token_store(), &product_id, quantity).await {
                Ok(placed) => {
                    blocking_notice(&placed.alert_text());
                    Notice::Success(placed.message())
                }
                Err(err) => {
                    let message = err.user_message();
                    if err.is_blocking() {
                        blocking_notice(&message);
                    }
                    Notice::Error(message)
                }
            };
            let _ = set_notice.try_set(Some(notice));
        });
    };

    view! {
        <div class="card">
            {move || match catalog.get() {
                CatalogView::Loading => view! { <p>"Loading products..."</p> }.into_any(),
                CatalogView::Failed(message) => view! { <p class="error">{message}</p> }.into_any(),
                CatalogView::Empty => {
                    view! { <p>"No products are available right now."</p> }.into_any()
                }
                CatalogView::Listed(products) => {
                    let order = order.clone();
                    view! {
                        <div>
                            <h2>"Products"</h2>
                            <NoticeView notice=notice/>
                            <ul class="product-list">
                                {products.into_iter().map(|product| {
                                    let order = order.clone();
                                    let input_id = format!("quantity-{}", product.id);
                                    let shown_id = product.id.clone();
                                    let edited_id = product.id.clone();
                                    let ordered_id = product.id;

                                    view! {
                                        <li class="product">
                                            <h3>{product.name}</h3>
                                            <p>{format!("Price: {} {}", CURRENCY_LABEL, format_price(product.price))}</p>
                                            <div class="order-row">
                                                <label for=input_id.clone()>"Quantity: "</label>
                                                <input
                                                    type="number"
                                                    id=input_id
                                                    min="1"
                                                    prop:value=move || {
                                                        state
                                                            .with(|s| s.quantity(&shown_id))
                                                            .unwrap_or(1)
                                                            .to_string()
                                                    }
                                                    on:input=move |ev| {
                                                        let input = event_target_value(&ev);
                                                        state.update(|s| {
                                                            s.set_quantity(&edited_id, &input);
                                                        });
                                                    }
                                                />
                                                <button class="btn" on:click=move |_| order(ordered_id.clone())>
                                                    "Order Now"
                                                </button>
                                            </div>
                                        </li>
                                    }
                                }).collect::<Vec<_>>()}
                            </ul>
                        </div>
                    }.into_any()
                }
            }}
        </div>
    }
}
