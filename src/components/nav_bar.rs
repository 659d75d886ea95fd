use dioxus::prelude::*;
use tokio::sync::mpsc::UnboundedSender;
use crate::backend::AppCmd;
use crate::components::auth_modal::AuthModal;
use crate::components::nav_state::{NavEffect, NavIntent, NavLayout, NavUi, NavView};
use crate::components::viewport::use_viewport_width;
use crate::components::AppState;
use crate::config::{AppConfig, BRAND_NAME};
use crate::Route;

/// Site navigation bar. Wraps every page as the router layout.
#[component]
pub fn NavComponent() -> Element {
    let app_state = use_context::<AppState>();
    let config = use_context::<AppConfig>();
    let cmd_tx = use_context::<UnboundedSender<AppCmd>>();
    let nav = navigator();
    let width = use_viewport_width();
    let mut ui = use_signal(NavUi::default);

    let view = NavView::derive(app_state.session.read().as_ref(), &app_state.cart_items.read());
    let layout = NavLayout::for_width(width(), config.medium_breakpoint);

    let on_intent = use_callback(move |intent: NavIntent| {
        let view = NavView::derive(app_state.session.peek().as_ref(), &app_state.cart_items.peek());
        match ui.write().handle(intent, &view) {
            NavEffect::None => {}
            NavEffect::Push(route) => {
                tracing::debug!(%route, "navigating");
                nav.push(route);
            }
            NavEffect::Dispatch(cmd) => {
                if cmd_tx.send(cmd).is_err() {
                    tracing::error!("backend is gone, dropping command");
                }
            }
        }
    });

    let state = ui();

    rsx! {
        div { class: "min-h-screen flex flex-col",
            nav { class: "nav-bar",
                div { class: "page-container nav-inner",
                    // Logo section
                    div {
                        class: "nav-logo",
                        onclick: move |_| on_intent.call(NavIntent::Go(Route::HomeComponent {})),
                        span { class: "logo-text", "{BRAND_NAME}" }
                    }

                    match layout {
                        NavLayout::Drawer => rsx! {
                            button {
                                class: "icon-btn",
                                "aria-label": "Open navigation",
                                onclick: move |_| on_intent.call(NavIntent::SetDrawer(true)),
                                {icon_menu()}
                            }
                        },
                        NavLayout::Toolbar => rsx! {
                            ToolbarActions { view: view.clone(), on_intent }
                        },
                    }

                    if state.is_menu_open() && layout == NavLayout::Toolbar {
                        div {
                            class: "nav-backdrop",
                            onclick: move |_| on_intent.call(NavIntent::DismissMenu),
                        }
                        UserMenu { view: view.clone(), on_intent }
                    }
                }
            }

            NavDrawer { view: view.clone(), open: state.drawer_open, on_intent }

            AuthModal { on_close: move |_| on_intent.call(NavIntent::CloseAuthModal) }

            div { class: "flex-1",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn ToolbarActions(view: NavView, on_intent: EventHandler<NavIntent>) -> Element {
    rsx! {
        div { class: "nav-actions",
            button {
                class: "icon-btn",
                title: "Search",
                onclick: move |_| on_intent.call(NavIntent::Go(Route::SearchComponent {})),
                {icon_search()}
            }

            if view.is_authenticated() {
                button {
                    class: "avatar-btn",
                    title: view.avatar_tooltip(),
                    onclick: move |_| on_intent.call(NavIntent::AvatarClick),
                    span { class: "avatar avatar-light", "{view.initial}" }
                }
            } else {
                button {
                    class: "icon-btn",
                    title: "Login",
                    onclick: move |_| on_intent.call(NavIntent::Go(Route::AccountComponent { action: "login".to_string() })),
                    {icon_person()}
                }
            }

            button {
                class: "icon-btn",
                title: "Cart",
                onclick: move |_| on_intent.call(NavIntent::Go(Route::CartComponent {})),
                CartBadge { count: view.cart_count, light: true }
            }
        }
    }
}

#[component]
fn UserMenu(view: NavView, on_intent: EventHandler<NavIntent>) -> Element {
    let full_name = view.full_name.clone().unwrap_or_default();

    rsx! {
        div { class: "user-menu", role: "menu",
            div { class: "user-menu-header",
                p { class: "text-muted text-sm", "Signed in as" }
                p { class: "font-medium", "{full_name}" }
            }
            button {
                class: "user-menu-item",
                onclick: move |_| on_intent.call(NavIntent::MenuProfile),
                {icon_account()}
                span { "Profile" }
            }
            div { class: "divider" }
            button {
                class: "user-menu-item danger",
                onclick: move |_| on_intent.call(NavIntent::Logout),
                {icon_logout()}
                span { "Logout" }
            }
        }
    }
}

#[component]
fn NavDrawer(view: NavView, open: bool, on_intent: EventHandler<NavIntent>) -> Element {
    if !open {
        return rsx! {};
    }

    rsx! {
        div {
            class: "drawer-backdrop",
            onclick: move |_| on_intent.call(NavIntent::SetDrawer(false)),
        }
        aside { class: "drawer", role: "presentation",
            div { class: "drawer-header",
                h2 { class: "font-bold", "{BRAND_NAME}" }
                button {
                    class: "icon-btn",
                    "aria-label": "Close navigation",
                    onclick: move |_| on_intent.call(NavIntent::SetDrawer(false)),
                    "✕"
                }
            }

            if let Some(full_name) = view.full_name.clone() {
                div { class: "drawer-user",
                    span { class: "avatar", "{view.initial}" }
                    span { class: "font-bold", "{full_name}" }
                }
            }

            ul { class: "drawer-list",
                DrawerItem {
                    label: "Home",
                    onclick: move |_| on_intent.call(NavIntent::Go(Route::HomeComponent {})),
                    {icon_home()}
                }
                DrawerItem {
                    label: "Search",
                    onclick: move |_| on_intent.call(NavIntent::Go(Route::SearchComponent {})),
                    {icon_search()}
                }
                DrawerItem {
                    label: "Cart",
                    onclick: move |_| on_intent.call(NavIntent::Go(Route::CartComponent {})),
                    CartBadge { count: view.cart_count, light: false }
                }

                if view.is_authenticated() {
                    DrawerItem {
                        label: "Profile",
                        onclick: move |_| on_intent.call(NavIntent::Profile),
                        {icon_account()}
                    }
                    li { class: "divider" }
                    DrawerItem {
                        label: "Logout",
                        danger: true,
                        onclick: move |_| on_intent.call(NavIntent::Logout),
                        {icon_logout()}
                    }
                } else {
                    DrawerItem {
                        label: "Login",
                        onclick: move |_| on_intent.call(NavIntent::Go(Route::AccountComponent { action: "login".to_string() })),
                        {icon_person()}
                    }
                }
            }
        }
    }
}

#[component]
fn DrawerItem(
    label: &'static str,
    #[props(default)] danger: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = if danger { "drawer-item danger" } else { "drawer-item" };

    rsx! {
        li {
            button { class: "{class}", onclick: move |e| onclick.call(e),
                span { class: "drawer-icon", {children} }
                span { "{label}" }
            }
        }
    }
}

#[component]
fn CartBadge(count: usize, light: bool) -> Element {
    let class = if light { "badge badge-light" } else { "badge" };

    rsx! {
        span { class: "badge-anchor",
            {icon_cart()}
            if count > 0 {
                span { class: "{class}", "{count}" }
            }
        }
    }
}

fn svg_icon(paths: &[&'static str]) -> Element {
    rsx! {
        svg {
            xmlns: "http://www.w3.org/2000/svg",
            width: "24",
            height: "24",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            for d in paths.iter() {
                path { d: "{d}" }
            }
        }
    }
}

fn icon_menu() -> Element {
    svg_icon(&["M4 6h16", "M4 12h16", "M4 18h16"])
}

fn icon_search() -> Element {
    svg_icon(&["M11 19a8 8 0 1 0 0-16 8 8 0 0 0 0 16z", "m21 21-4.3-4.3"])
}

fn icon_person() -> Element {
    svg_icon(&["M12 13a5 5 0 1 0 0-10 5 5 0 0 0 0 10z", "M20 21a8 8 0 0 0-16 0"])
}

fn icon_account() -> Element {
    svg_icon(&[
        "M12 22a10 10 0 1 0 0-20 10 10 0 0 0 0 20z",
        "M12 13a3 3 0 1 0 0-6 3 3 0 0 0 0 6z",
        "M7 20.7v-1.7a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v1.7",
    ])
}

fn icon_cart() -> Element {
    svg_icon(&[
        "M8 22a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
        "M19 22a1 1 0 1 0 0-2 1 1 0 0 0 0 2z",
        "M2 2h3l2.7 12.4a2 2 0 0 0 2 1.6h9.7a2 2 0 0 0 2-1.6L23 6H6",
    ])
}

fn icon_home() -> Element {
    svg_icon(&["m3 9 9-7 9 7v11a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M9 22V12h6v10"])
}

fn icon_logout() -> Element {
    svg_icon(&["M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4", "m16 17 5-5-5-5", "M21 12H9"])
}
