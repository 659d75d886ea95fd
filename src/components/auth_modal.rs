use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use crate::backend::session::Role;
use crate::backend::AppCmd;
use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Register,
}

impl AuthMode {
    /// The modal is open exactly on `/account/login` and `/account/register`.
    pub fn from_route(route: &Route) -> Option<Self> {
        match route {
            Route::AccountComponent { action } if action == "login" => Some(AuthMode::Login),
            Route::AccountComponent { action } if action == "register" => Some(AuthMode::Register),
            _ => None,
        }
    }
}

/// Sign-in / sign-up dialog. Mounted by the nav bar on every page and shown
/// only on the account routes.
#[component]
pub fn AuthModal(on_close: EventHandler<()>) -> Element {
    let route = use_route::<Route>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();

    let mut full_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut role = use_signal(|| Role::Customer);

    let Some(mode) = AuthMode::from_route(&route) else {
        return rsx! {};
    };

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        if full_name.read().trim().is_empty() {
            return;
        }
        let selected_role = if mode == AuthMode::Register { role() } else { Role::Customer };
        if cmd_tx
            .send(AppCmd::SignIn { full_name: full_name(), email: email(), role: selected_role })
            .is_err()
        {
            tracing::error!("backend is gone, sign-in dropped");
        }
        full_name.set(String::new());
        email.set(String::new());
        on_close.call(());
    };

    let title = match mode {
        AuthMode::Login => "Login",
        AuthMode::Register => "Register",
    };

    rsx! {
        div { class: "modal-backdrop", onclick: move |_| on_close.call(()),
            div { class: "modal panel", onclick: move |e| e.stop_propagation(),
                h2 { class: "panel-title mb-4", "{title}" }
                form { class: "flex flex-col gap-3", onsubmit: on_submit,
                    input {
                        class: "input",
                        placeholder: "Full name",
                        value: "{full_name}",
                        oninput: move |e| full_name.set(e.value()),
                    }
                    input {
                        class: "input",
                        r#type: "email",
                        placeholder: "Email",
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                    if mode == AuthMode::Register {
                        select {
                            class: "input",
                            onchange: move |e| role.set(Role::from(e.value())),
                            option { value: Role::Customer.tag(), "Customer" }
                            option { value: Role::RestaurantOwner.tag(), "Restaurant owner" }
                        }
                    }
                    button { class: "btn btn-primary", r#type: "submit", "{title}" }
                }
                div { class: "text-sm text-muted mt-4",
                    match mode {
                        AuthMode::Login => rsx! {
                            span { "No account yet? " }
                            Link { to: Route::AccountComponent { action: "register".to_string() }, "Register" }
                        },
                        AuthMode::Register => rsx! {
                            span { "Already registered? " }
                            Link { to: Route::AccountComponent { action: "login".to_string() }, "Login" }
                        },
                    }
                }
            }
        }
    }
}
