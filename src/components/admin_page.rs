use dioxus::prelude::*;
use crate::backend::session::Role;
use crate::components::AppState;

/// Placeholder dashboards behind the admin links. Access checks belong to the
/// services that back them; these only say whose dashboard it is.
#[component]
fn Dashboard(title: &'static str, allowed: Vec<Role>) -> Element {
    let app_state = use_context::<AppState>();
    let session = app_state.session.read().clone();
    let permitted = session.as_ref().is_some_and(|s| s.is_signed_in() && allowed.contains(&s.role));
    let name = session.map(|s| s.full_name).unwrap_or_default();

    rsx! {
        div { class: "page-container py-8 animate-fade-in",
            div { class: "page-header",
                h1 { class: "page-title", "{title}" }
            }
            if permitted {
                div { class: "panel",
                    p { "Welcome back, {name}." }
                }
            } else {
                div { class: "empty-state",
                    p { class: "empty-state-title", "This area is for staff accounts." }
                }
            }
        }
    }
}

#[component]
pub fn RestaurantAdminComponent() -> Element {
    rsx! { Dashboard { title: "Restaurant dashboard", allowed: vec![Role::Admin, Role::RestaurantOwner] } }
}

#[component]
pub fn AdminComponent() -> Element {
    rsx! { Dashboard { title: "Admin", allowed: vec![Role::Admin] } }
}

#[component]
pub fn SuperAdminComponent() -> Element {
    rsx! { Dashboard { title: "Super admin", allowed: vec![Role::Admin] } }
}
