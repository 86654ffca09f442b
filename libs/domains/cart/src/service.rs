use crate::models::{CART_ITEMS, CartItem, CartQuantity, StaticCartItem};

/// Read-only view over a fixed list of cart lines
#[derive(Debug, Clone, Copy)]
pub struct CartService {
    items: &'static [StaticCartItem],
}

impl CartService {
    pub fn new(items: &'static [StaticCartItem]) -> Self {
        Self { items }
    }

    pub fn items(&self) -> Vec<CartItem> {
        self.items.iter().map(CartItem::from).collect()
    }

    /// Sum of quantities over lines for `product_id`; 0 when there are none.
    pub fn total_quantity(&self, product_id: i32) -> CartQuantity {
        let total_quantity = self
            .items
            .iter()
            .filter(|item| item.id == product_id)
            .map(|item| item.quantity)
            .sum();

        CartQuantity {
            product: product_id,
            total_quantity,
        }
    }
}

impl Default for CartService {
    fn default() -> Self {
        Self::new(&CART_ITEMS)
    }
}
