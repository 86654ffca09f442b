use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One cart line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CartItem {
    /// Product id this line refers to
    #[schema(example = 1)]
    pub id: i32,
    #[schema(example = "Product 1")]
    pub name: String,
    #[schema(example = 1)]
    pub quantity: u32,
    #[schema(example = 100.0)]
    pub price: f64,
}

/// Quantity of one product across the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct CartQuantity {
    #[schema(example = 2)]
    pub product: i32,
    #[schema(example = 2)]
    pub total_quantity: u32,
}

/// Static definition of a cart line, borrowed from the binary.
#[derive(Debug, Clone, Copy)]
pub struct StaticCartItem {
    pub id: i32,
    pub name: &'static str,
    pub quantity: u32,
    pub price: f64,
}

impl From<&StaticCartItem> for CartItem {
    fn from(item: &StaticCartItem) -> Self {
        Self {
            id: item.id,
            name: item.name.to_string(),
            quantity: item.quantity,
            price: item.price,
        }
    }
}

pub static CART_ITEMS: [StaticCartItem; 3] = [
    StaticCartItem {
        id: 1,
        name: "Product 1",
        quantity: 1,
        price: 100.0,
    },
    StaticCartItem {
        id: 2,
        name: "Product 2",
        quantity: 2,
        price: 200.0,
    },
    StaticCartItem {
        id: 3,
        name: "Product 3",
        quantity: 3,
        price: 300.0,
    },
];
