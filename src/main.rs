mod backend;
mod components;
mod config;

use components::admin_page::{AdminComponent, RestaurantAdminComponent, SuperAdminComponent};
use components::cart_page::CartComponent;
use components::home_page::{AccountComponent, HomeComponent};
use components::nav_bar::NavComponent;
use components::profile_page::ProfileComponent;
use components::search_page::SearchComponent;
use components::AppState;

use backend::store::Store;
use backend::{AppCmd, Backend};
use config::AppConfig;
use dioxus::prelude::*;
use tokio::sync::mpsc;

#[derive(Routable, Clone, PartialEq, Debug)]
#[rustfmt::skip]
pub enum Route {
    #[layout(NavComponent)]
        #[route("/")]
        HomeComponent {},
        #[route("/search")]
        SearchComponent {},
        #[route("/cart")]
        CartComponent {},
        #[route("/my-profile")]
        ProfileComponent {},
        #[route("/admin/restaurant")]
        RestaurantAdminComponent {},
        #[route("/admin")]
        AdminComponent {},
        #[route("/super-admin")]
        SuperAdminComponent {},
        #[route("/account/:action")]
        AccountComponent { action: String },
    #[end_layout]
    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

fn main() {
    let (config, warnings) = AppConfig::from_env();
    if let Err(e) = dioxus::logger::init(config.log_level) {
        eprintln!("logger already initialised: {}", e);
    }
    for warning in &warnings {
        tracing::warn!("{}", warning);
    }
    tracing::info!(store = %config.store_path.display(), "starting MunchMate");

    dioxus::launch(App);
}

fn open_store(config: &AppConfig) -> Result<Store, Box<dyn std::error::Error>> {
    Store::new(&config.store_path).or_else(|e| {
        tracing::error!("failed to open {}: {}, keeping state in memory", config.store_path.display(), e);
        Store::new_in_memory()
    })
}

#[component]
fn App() -> Element {
    let config = use_context_provider(|| AppConfig::from_env().0);
    let app_state = AppState::new();
    use_context_provider(|| app_state);

    let cmd_tx = use_hook(move || {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel::<AppCmd>();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();

        match open_store(&config) {
            Ok(store) => {
                let mut backend = Backend::new(store, cmd_rx, event_tx);
                spawn(async move {
                    backend.run().await;
                });
            }
            Err(e) => tracing::error!("no store available, running without a backend: {}", e),
        }

        let mut app_state = app_state;
        spawn(async move {
            while let Some(event) = event_rx.recv().await {
                app_state.apply(event);
            }
        });

        if cmd_tx.send(AppCmd::Init).is_err() {
            tracing::error!("backend is gone, session not restored");
        }
        cmd_tx
    });
    use_context_provider(move || cmd_tx.clone());

    rsx! {
        document::Stylesheet { href: asset!("/assets/main.css") }
        Router::<Route> {}
    }
}

#[component]
fn NotFound(segments: Vec<String>) -> Element {
    let path = segments.join("/");
    rsx! {
        div { class: "page-container py-8 empty-state",
            p { class: "empty-state-title", "Nothing lives at /{path}" }
            Link { to: Route::HomeComponent {}, class: "btn btn-primary mt-4", "Back home" }
        }
    }
}
