#[cfg(not(target_arch = "wasm32"))]
use rusqlite::{params, Connection, OptionalExtension};
#[cfg(target_arch = "wasm32")]
use std::collections::BTreeMap;
use std::error::Error;
use std::path::Path;
use std::sync::{Arc, Mutex};
use crate::backend::cart::CartItem;
use crate::backend::session::Session;

/// Persists the signed-in session and the cart lines between launches.
#[derive(Clone)]
pub struct Store {
    #[cfg(not(target_arch = "wasm32"))]
    conn: Arc<Mutex<Connection>>,
    #[cfg(target_arch = "wasm32")]
    session: Arc<Mutex<Option<Vec<u8>>>>,
    #[cfg(target_arch = "wasm32")]
    cart: Arc<Mutex<BTreeMap<u64, Vec<u8>>>>,
}

#[cfg(not(target_arch = "wasm32"))]
fn init_schema(conn: &Connection) -> Result<(), Box<dyn Error>> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS session (
            slot INTEGER PRIMARY KEY CHECK (slot = 0),
            data BLOB
        )",
        [],
    )?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS cart_items (
            id INTEGER PRIMARY KEY,
            data BLOB
        )",
        [],
    )?;

    Ok(())
}

fn poisoned<T>(_: T) -> Box<dyn Error> {
    "store lock poisoned".into()
}

impl Store {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let conn = Connection::open(path)?;
        init_schema(&conn)?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new<P: AsRef<Path>>(_path: P) -> Result<Self, Box<dyn Error>> {
        Self::new_in_memory()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn new_in_memory() -> Result<Self, Box<dyn Error>> {
        let conn = Connection::open_in_memory()?;
        init_schema(&conn)?;
        Ok(Self { conn: Arc::new(Mutex::new(conn)) })
    }

    #[cfg(target_arch = "wasm32")]
    pub fn new_in_memory() -> Result<Self, Box<dyn Error>> {
        Ok(Self {
            session: Arc::new(Mutex::new(None)),
            cart: Arc::new(Mutex::new(BTreeMap::new())),
        })
    }

    pub fn save_session(&self, session: &Session) -> Result<(), Box<dyn Error>> {
        let data = serde_json::to_vec(session)?;

        #[cfg(not(target_arch = "wasm32"))]
        {
            let conn = self.conn.lock().map_err(poisoned)?;
            conn.execute(
                "INSERT OR REPLACE INTO session (slot, data) VALUES (0, ?1)",
                params![data],
            )?;
        }

        #[cfg(target_arch = "wasm32")]
        {
            *self.session.lock().map_err(poisoned)? = Some(data);
        }

        Ok(())
    }

    pub fn load_session(&self) -> Result<Option<Session>, Box<dyn Error>> {
        #[cfg(not(target_arch = "wasm32"))]
        let data: Option<Vec<u8>> = {
            let conn = self.conn.lock().map_err(poisoned)?;
            let data = conn
                .query_row("SELECT data FROM session WHERE slot = 0", [], |row| row.get(0))
                .optional()?;
            data
        };

        #[cfg(target_arch = "wasm32")]
        let data = self.session.lock().map_err(poisoned)?.clone();

        match data {
            Some(bytes) => Ok(Some(serde_json::from_slice(&bytes)?)),
            None => Ok(None),
        }
    }

    pub fn clear_session(&self) -> Result<(), Box<dyn Error>> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let conn = self.conn.lock().map_err(poisoned)?;
            conn.execute("DELETE FROM session", [])?;
        }

        #[cfg(target_arch = "wasm32")]
        {
            *self.session.lock().map_err(poisoned)? = None;
        }

        Ok(())
    }

    pub fn put_cart_item(&self, item: &CartItem) -> Result<(), Box<dyn Error>> {
        let data = serde_json::to_vec(item)?;

        #[cfg(not(target_arch = "wasm32"))]
        {
            let conn = self.conn.lock().map_err(poisoned)?;
            conn.execute(
                "INSERT OR REPLACE INTO cart_items (id, data) VALUES (?1, ?2)",
                params![item.id as i64, data],
            )?;
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.cart.lock().map_err(poisoned)?.insert(item.id, data);
        }

        Ok(())
    }

    pub fn remove_cart_item(&self, id: u64) -> Result<bool, Box<dyn Error>> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let conn = self.conn.lock().map_err(poisoned)?;
            let removed = conn.execute("DELETE FROM cart_items WHERE id = ?1", params![id as i64])?;
            Ok(removed > 0)
        }

        #[cfg(target_arch = "wasm32")]
        {
            Ok(self.cart.lock().map_err(poisoned)?.remove(&id).is_some())
        }
    }

    /// Cart lines ordered by line id, which is the order they were first added.
    pub fn get_cart_items(&self) -> Result<Vec<CartItem>, Box<dyn Error>> {
        let mut items = Vec::new();

        #[cfg(not(target_arch = "wasm32"))]
        {
            let conn = self.conn.lock().map_err(poisoned)?;
            let mut stmt = conn.prepare("SELECT data FROM cart_items ORDER BY id")?;
            let rows = stmt.query_map([], |row| row.get::<_, Vec<u8>>(0))?;
            for row in rows {
                items.push(serde_json::from_slice(&row?)?);
            }
        }

        #[cfg(target_arch = "wasm32")]
        {
            let cart = self.cart.lock().map_err(poisoned)?;
            for data in cart.values() {
                items.push(serde_json::from_slice(data)?);
            }
        }

        Ok(items)
    }

    pub fn clear_cart(&self) -> Result<(), Box<dyn Error>> {
        #[cfg(not(target_arch = "wasm32"))]
        {
            let conn = self.conn.lock().map_err(poisoned)?;
            conn.execute("DELETE FROM cart_items", [])?;
        }

        #[cfg(target_arch = "wasm32")]
        {
            self.cart.lock().map_err(poisoned)?.clear();
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::session::Role;
    use tempfile::tempdir;

    fn item(id: u64, name: &str) -> CartItem {
        CartItem { id, food_name: name.to_string(), quantity: 1, unit_price_cents: 9900 }
    }

    #[test]
    fn test_session_survives_reopen() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("munchmate.db");

        let session = Session::new("Grace Hopper", "grace@example.com", Role::RestaurantOwner);
        {
            let store = Store::new(&path).unwrap();
            assert!(store.load_session().unwrap().is_none());
            store.save_session(&session).unwrap();
        }

        let store = Store::new(&path).unwrap();
        assert_eq!(store.load_session().unwrap(), Some(session));

        store.clear_session().unwrap();
        assert!(store.load_session().unwrap().is_none());
    }

    #[test]
    fn test_cart_items_ordered_by_line_id() {
        let store = Store::new_in_memory().unwrap();
        store.put_cart_item(&item(2, "Biryani")).unwrap();
        store.put_cart_item(&item(1, "Samosa")).unwrap();
        store.put_cart_item(&item(3, "Lassi")).unwrap();

        let mut bumped = item(1, "Samosa");
        bumped.quantity = 4;
        store.put_cart_item(&bumped).unwrap();

        let items = store.get_cart_items().unwrap();
        let names: Vec<_> = items.iter().map(|i| i.food_name.as_str()).collect();
        assert_eq!(names, vec!["Samosa", "Biryani", "Lassi"]);
        assert_eq!(items[0].quantity, 4);

        assert!(store.remove_cart_item(2).unwrap());
        assert!(!store.remove_cart_item(2).unwrap());
        assert_eq!(store.get_cart_items().unwrap().len(), 2);

        store.clear_cart().unwrap();
        assert!(store.get_cart_items().unwrap().is_empty());
    }
}
