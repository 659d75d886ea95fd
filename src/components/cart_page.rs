use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use crate::backend::cart::{cart_total_cents, format_price};
use crate::backend::AppCmd;
use crate::components::AppState;
use crate::Route;

#[component]
pub fn CartComponent() -> Element {
    let app_state = use_context::<AppState>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();

    let items = app_state.cart_items.read().clone();
    let total = format_price(cart_total_cents(&items));

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header",
                h1 { class: "page-title", "Your cart" }
            }

            if items.is_empty() {
                div { class: "empty-state",
                    p { class: "empty-state-title", "Your cart is empty" }
                    Link { to: Route::HomeComponent {}, class: "btn btn-secondary mt-4", "Browse dishes" }
                }
            } else {
                div { class: "panel",
                    for item in items.iter().cloned() {
                        {
                            let cmd_tx = cmd_tx.clone();
                            let id = item.id;
                            rsx! {
                                div { key: "{item.id}", class: "cart-line",
                                    div {
                                        p { class: "font-medium", "{item.food_name}" }
                                        p { class: "text-muted text-sm", "{item.quantity} × {format_price(item.unit_price_cents)}" }
                                    }
                                    div { class: "flex items-center gap-3",
                                        span { class: "font-bold", "{format_price(item.total_cents())}" }
                                        button {
                                            class: "btn btn-secondary",
                                            onclick: move |_| {
                                                if cmd_tx.send(AppCmd::RemoveFromCart { id }).is_err() {
                                                    tracing::error!("backend is gone, dropping command");
                                                }
                                            },
                                            "Remove"
                                        }
                                    }
                                }
                            }
                        }
                    }
                    div { class: "cart-line font-bold",
                        span { "Total" }
                        span { "{total}" }
                    }
                }
            }
        }
    }
}
