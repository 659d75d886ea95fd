use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: u64,
    pub food_name: String,
    pub quantity: u32,
    pub unit_price_cents: u64,
}

impl CartItem {
    pub fn total_cents(&self) -> u64 {
        self.unit_price_cents * u64::from(self.quantity)
    }
}

/// Adds one unit of `food_name` to the cart.
///
/// An existing line for the same food is bumped instead of adding a second
/// line, so the line count only grows for new foods. Returns the touched line.
pub fn add_food(items: &mut Vec<CartItem>, food_name: &str, unit_price_cents: u64) -> CartItem {
    if let Some(item) = items.iter_mut().find(|i| i.food_name == food_name) {
        item.quantity += 1;
        return item.clone();
    }

    let id = items.iter().map(|i| i.id).max().map_or(1, |max| max + 1);
    let item = CartItem {
        id,
        food_name: food_name.to_string(),
        quantity: 1,
        unit_price_cents,
    };
    items.push(item.clone());
    item
}

pub fn cart_total_cents(items: &[CartItem]) -> u64 {
    items.iter().map(CartItem::total_cents).sum()
}

/// Formats cents as a rupee amount, e.g. `₹12.50`.
pub fn format_price(cents: u64) -> String {
    format!("₹{}.{:02}", cents / 100, cents % 100)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_food_merges_lines() {
        let mut items = Vec::new();
        add_food(&mut items, "Paneer Tikka", 24000);
        add_food(&mut items, "Masala Dosa", 12000);
        let bumped = add_food(&mut items, "Paneer Tikka", 24000);

        assert_eq!(items.len(), 2);
        assert_eq!(bumped.id, 1);
        assert_eq!(bumped.quantity, 2);
        assert_eq!(items[1].id, 2);
        assert_eq!(cart_total_cents(&items), 24000 * 2 + 12000);
    }

    #[test]
    fn test_ids_keep_growing_after_removal() {
        let mut items = Vec::new();
        add_food(&mut items, "a", 100);
        add_food(&mut items, "b", 100);
        items.retain(|i| i.id != 1);
        let c = add_food(&mut items, "c", 100);
        assert_eq!(c.id, 3);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(1250), "₹12.50");
        assert_eq!(format_price(5), "₹0.05");
    }
}
