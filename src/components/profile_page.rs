use dioxus::prelude::*;
use crate::components::AppState;
use crate::components::nav_state::PLACEHOLDER_INITIAL;
use crate::Route;

#[component]
pub fn ProfileComponent() -> Element {
    let app_state = use_context::<AppState>();
    let session = app_state.session.read().clone().filter(|s| s.is_signed_in());

    let body = match session {
        Some(session) => {
            let initial = session.initial().unwrap_or_else(|| PLACEHOLDER_INITIAL.to_string());
            let since = session.signed_in_at.format("%d %b %Y, %H:%M").to_string();
            rsx! {
                div { class: "panel profile-card",
                    span { class: "avatar avatar-lg", "{initial}" }
                    div {
                        h1 { class: "page-title", "{session.full_name}" }
                        if !session.email.is_empty() {
                            p { class: "text-muted", "{session.email}" }
                        }
                        p { class: "text-sm mt-2", "{session.role.label()} · signed in {since} UTC" }
                    }
                }
            }
        }
        None => rsx! {
            div { class: "empty-state",
                p { class: "empty-state-title", "You are not signed in" }
                Link {
                    to: Route::AccountComponent { action: "login".to_string() },
                    class: "btn btn-primary mt-4",
                    "Login"
                }
            }
        },
    };

    rsx! {
        div { class: "page-container py-8 animate-fade-in", {body} }
    }
}
