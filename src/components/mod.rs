pub mod admin_page;
pub mod auth_modal;
pub mod cart_page;
pub mod home_page;
pub mod nav_bar;
pub mod nav_state;
pub mod profile_page;
pub mod search_page;
pub mod viewport;

use dioxus::prelude::*;
use crate::backend::cart::CartItem;
use crate::backend::session::Session;
use crate::backend::AppEvent;

/// Shared client state. Written only by the backend event pump; components read it.
#[derive(Clone, Copy)]
pub struct AppState {
    pub session: Signal<Option<Session>>,
    pub cart_items: Signal<Vec<CartItem>>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            session: use_signal(|| None),
            cart_items: use_signal(Vec::new),
        }
    }

    pub fn apply(&mut self, event: AppEvent) {
        match event {
            AppEvent::SessionChanged(session) => self.session.set(session),
            AppEvent::CartChanged(items) => self.cart_items.set(items),
        }
    }
}
