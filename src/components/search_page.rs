use dioxus::prelude::*;
use crate::components::home_page::{Dish, DishGrid, MENU};

/// Dishes whose name or restaurant contains `query`, ignoring case.
pub fn search_dishes(query: &str) -> Vec<Dish> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return MENU.to_vec();
    }
    MENU.iter()
        .filter(|d| d.name.to_lowercase().contains(&query) || d.restaurant.to_lowercase().contains(&query))
        .copied()
        .collect()
}

#[component]
pub fn SearchComponent() -> Element {
    let mut query = use_signal(String::new);
    let results = search_dishes(&query.read());

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header",
                h1 { class: "page-title", "Search" }
            }
            input {
                class: "input mb-6",
                placeholder: "Search dishes or restaurants",
                value: "{query}",
                oninput: move |e| query.set(e.value()),
            }
            if results.is_empty() {
                div { class: "empty-state",
                    p { class: "empty-state-title", "Nothing matches \"{query}\"" }
                }
            } else {
                DishGrid { dishes: results.clone() }
            }
        }
    }
}
