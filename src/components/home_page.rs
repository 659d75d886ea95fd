use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use crate::backend::cart::format_price;
use crate::backend::AppCmd;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dish {
    pub name: &'static str,
    pub restaurant: &'static str,
    pub price_cents: u64,
    pub vegetarian: bool,
}

pub const MENU: &[Dish] = &[
    Dish { name: "Paneer Butter Masala", restaurant: "Spice Route", price_cents: 28000, vegetarian: true },
    Dish { name: "Chicken Biryani", restaurant: "Spice Route", price_cents: 32000, vegetarian: false },
    Dish { name: "Masala Dosa", restaurant: "Udupi Corner", price_cents: 12000, vegetarian: true },
    Dish { name: "Filter Coffee", restaurant: "Udupi Corner", price_cents: 4000, vegetarian: true },
    Dish { name: "Margherita Pizza", restaurant: "Forno Rosso", price_cents: 34900, vegetarian: true },
    Dish { name: "Pepperoni Pizza", restaurant: "Forno Rosso", price_cents: 42900, vegetarian: false },
];

#[component]
pub fn HomeComponent() -> Element {
    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header",
                h1 { class: "page-title", "Order from the best kitchens in town" }
                p { class: "text-muted mt-1", "Fresh food, delivered fast." }
            }
            DishGrid { dishes: MENU.to_vec() }
        }
    }
}

/// `/account/:action` shows the home page underneath the auth modal.
#[component]
pub fn AccountComponent(action: String) -> Element {
    tracing::trace!(%action, "account route");
    rsx! { HomeComponent {} }
}

#[component]
pub fn DishGrid(dishes: Vec<Dish>) -> Element {
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();

    rsx! {
        div { class: "dish-grid",
            for dish in dishes.into_iter() {
                {
                    let cmd_tx = cmd_tx.clone();
                    rsx! {
                        div { key: "{dish.name}", class: "panel dish-card",
                            div { class: "flex justify-between items-center",
                                h3 { class: "font-bold", "{dish.name}" }
                                span { class: if dish.vegetarian { "veg-dot veg" } else { "veg-dot non-veg" } }
                            }
                            p { class: "text-muted text-sm", "{dish.restaurant}" }
                            div { class: "flex justify-between items-center mt-3",
                                span { class: "font-medium", "{format_price(dish.price_cents)}" }
                                button {
                                    class: "btn btn-primary",
                                    onclick: move |_| {
                                        let cmd = AppCmd::AddToCart {
                                            food_name: dish.name.to_string(),
                                            unit_price_cents: dish.price_cents,
                                        };
                                        if cmd_tx.send(cmd).is_err() {
                                            tracing::error!("backend is gone, dropping command");
                                        }
                                    },
                                    "Add to cart"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
