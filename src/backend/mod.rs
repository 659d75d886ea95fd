pub mod cart;
pub mod session;
pub mod store;

use cart::CartItem;
use session::{Role, Session};
use store::Store;
use tokio::sync::mpsc;

/// Requests the UI dispatches to the backend.
#[derive(Debug, Clone, PartialEq)]
pub enum AppCmd {
    /// Load whatever session and cart survived the last launch.
    Init,
    SignIn { full_name: String, email: String, role: Role },
    Logout,
    AddToCart { food_name: String, unit_price_cents: u64 },
    RemoveFromCart { id: u64 },
}

#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    SessionChanged(Option<Session>),
    CartChanged(Vec<CartItem>),
}

pub struct Backend {
    store: Store,
    cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
    event_tx: mpsc::UnboundedSender<AppEvent>,
}

impl Backend {
    pub fn new(
        store: Store,
        cmd_rx: mpsc::UnboundedReceiver<AppCmd>,
        event_tx: mpsc::UnboundedSender<AppEvent>,
    ) -> Self {
        Self { store, cmd_rx, event_tx }
    }

    /// Serves commands until every sender is dropped.
    pub async fn run(&mut self) {
        while let Some(cmd) = self.cmd_rx.recv().await {
            self.handle_command(cmd);
        }
        tracing::debug!("command channel closed, backend stopping");
    }

    fn handle_command(&mut self, cmd: AppCmd) {
        match cmd {
            AppCmd::Init => {
                match self.store.load_session() {
                    Ok(session) => {
                        if let Some(s) = &session {
                            tracing::info!(user = %s.full_name, role = s.role.tag(), "restored session");
                        }
                        self.emit(AppEvent::SessionChanged(session));
                    }
                    Err(e) => {
                        tracing::warn!("discarding unreadable session: {}", e);
                        if let Err(e) = self.store.clear_session() {
                            tracing::error!("failed to clear session: {}", e);
                        }
                        self.emit(AppEvent::SessionChanged(None));
                    }
                }
                self.emit_cart();
            }
            AppCmd::SignIn { full_name, email, role } => {
                let full_name = full_name.trim().to_string();
                if full_name.is_empty() {
                    tracing::warn!("ignoring sign-in without a name");
                    return;
                }
                let session = Session::new(full_name, email.trim(), role);
                if let Err(e) = self.store.save_session(&session) {
                    tracing::error!("failed to persist session: {}", e);
                }
                tracing::info!(user = %session.full_name, role = session.role.tag(), "signed in");
                self.emit(AppEvent::SessionChanged(Some(session)));
            }
            AppCmd::Logout => {
                if let Err(e) = self.store.clear_session() {
                    tracing::error!("failed to clear session: {}", e);
                }
                if let Err(e) = self.store.clear_cart() {
                    tracing::error!("failed to clear cart: {}", e);
                }
                tracing::info!("logged out");
                self.emit(AppEvent::SessionChanged(None));
                self.emit(AppEvent::CartChanged(Vec::new()));
            }
            AppCmd::AddToCart { food_name, unit_price_cents } => {
                let mut items = match self.store.get_cart_items() {
                    Ok(items) => items,
                    Err(e) => {
                        tracing::error!("failed to read cart: {}", e);
                        return;
                    }
                };
                let item = cart::add_food(&mut items, &food_name, unit_price_cents);
                match self.store.put_cart_item(&item) {
                    Ok(()) => {
                        tracing::debug!(food = %item.food_name, quantity = item.quantity, "cart line updated");
                        self.emit(AppEvent::CartChanged(items));
                    }
                    Err(e) => tracing::error!("failed to store cart line: {}", e),
                }
            }
            AppCmd::RemoveFromCart { id } => {
                match self.store.remove_cart_item(id) {
                    Ok(true) => self.emit_cart(),
                    Ok(false) => tracing::warn!(id, "no such cart line"),
                    Err(e) => tracing::error!("failed to remove cart line: {}", e),
                }
            }
        }
    }

    fn emit_cart(&self) {
        match self.store.get_cart_items() {
            Ok(items) => self.emit(AppEvent::CartChanged(items)),
            Err(e) => tracing::error!("failed to read cart: {}", e),
        }
    }

    fn emit(&self, event: AppEvent) {
        if self.event_tx.send(event).is_err() {
            tracing::debug!("event receiver dropped");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Runs the backend over `cmds` until the channel drains and returns every event it emitted.
    async fn run_commands(store: Store, cmds: Vec<AppCmd>) -> Vec<AppEvent> {
        let (cmd_tx, cmd_rx) = mpsc::unbounded_channel();
        let (event_tx, mut event_rx) = mpsc::unbounded_channel();
        let mut backend = Backend::new(store, cmd_rx, event_tx);

        for cmd in cmds {
            cmd_tx.send(cmd).unwrap();
        }
        drop(cmd_tx);
        backend.run().await;
        drop(backend);

        let mut events = Vec::new();
        while let Some(event) = event_rx.recv().await {
            events.push(event);
        }
        events
    }

    fn add(food: &str) -> AppCmd {
        AppCmd::AddToCart { food_name: food.to_string(), unit_price_cents: 15000 }
    }

    #[tokio::test]
    async fn test_sign_in_persists_session() {
        let store = Store::new_in_memory().unwrap();
        let events = run_commands(
            store.clone(),
            vec![AppCmd::SignIn {
                full_name: "  Ravi Kumar ".to_string(),
                email: "ravi@example.com".to_string(),
                role: Role::RestaurantOwner,
            }],
        )
        .await;

        match events.as_slice() {
            [AppEvent::SessionChanged(Some(session))] => {
                assert_eq!(session.full_name, "Ravi Kumar");
                assert_eq!(session.role, Role::RestaurantOwner);
            }
            other => panic!("unexpected events: {:?}", other),
        }
        assert_eq!(store.load_session().unwrap().map(|s| s.full_name), Some("Ravi Kumar".to_string()));
    }

    #[tokio::test]
    async fn test_blank_sign_in_is_ignored() {
        let store = Store::new_in_memory().unwrap();
        let events = run_commands(
            store.clone(),
            vec![AppCmd::SignIn { full_name: "   ".to_string(), email: String::new(), role: Role::Admin }],
        )
        .await;

        assert!(events.is_empty());
        assert!(store.load_session().unwrap().is_none());
    }

    #[tokio::test]
    async fn test_init_restores_session_and_cart() {
        let store = Store::new_in_memory().unwrap();
        store.save_session(&Session::new("Meera", "", Role::Admin)).unwrap();
        run_commands(store.clone(), vec![add("Idli"), add("Vada")]).await;

        let events = run_commands(store, vec![AppCmd::Init]).await;
        assert_eq!(events.len(), 2);
        assert!(matches!(&events[0], AppEvent::SessionChanged(Some(s)) if s.role == Role::Admin));
        match &events[1] {
            AppEvent::CartChanged(items) => assert_eq!(items.len(), 2),
            other => panic!("expected cart, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_cart_count_tracks_lines() {
        let store = Store::new_in_memory().unwrap();
        let events = run_commands(store.clone(), vec![add("Idli"), add("Vada"), add("Idli")]).await;

        let counts: Vec<usize> = events
            .iter()
            .map(|e| match e {
                AppEvent::CartChanged(items) => items.len(),
                other => panic!("unexpected event {:?}", other),
            })
            .collect();
        assert_eq!(counts, vec![1, 2, 2]);

        let items = store.get_cart_items().unwrap();
        assert_eq!(items[0].quantity, 2);

        let events = run_commands(store.clone(), vec![AppCmd::RemoveFromCart { id: items[0].id }, AppCmd::RemoveFromCart { id: 99 }]).await;
        assert_eq!(events.len(), 1);
        assert_eq!(store.get_cart_items().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_logout_clears_session_and_cart() {
        let store = Store::new_in_memory().unwrap();
        store.save_session(&Session::new("Meera", "", Role::Customer)).unwrap();
        run_commands(store.clone(), vec![add("Idli")]).await;

        let events = run_commands(store.clone(), vec![AppCmd::Logout]).await;
        assert_eq!(events, vec![AppEvent::SessionChanged(None), AppEvent::CartChanged(Vec::new())]);
        assert!(store.load_session().unwrap().is_none());
        assert!(store.get_cart_items().unwrap().is_empty());
    }
}
