//! Client-side cart
//!
//! [`Cart`] owns an ordered list of [`CartLine`]s and rebuilds it through
//! [`reduce`] on every mutation. It never touches the network; checkout
//! turns it into a [`CreateOrderRequest`] with [`Cart::order_request`].

mod reducer;

pub use reducer::{CartAction, normalize, reduce};

use crate::error::{AppError, AppResult, ErrorCode};
use crate::models::{CreateOrderRequest, FoodItem, OrderLineInput, PaymentMethod};
use serde::{Deserialize, Serialize};

/// A food item snapshot and how many of it are in the cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub item: FoodItem,
    /// Always ≥ 1
    pub quantity: i64,
}

impl CartLine {
    /// Effective unit price × quantity
    pub fn subtotal(&self) -> i64 {
        self.item.effective_price().saturating_mul(self.quantity)
    }
}

/// Contact and payment details entered at checkout
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutForm {
    pub customer_phone: String,
    #[serde(default)]
    pub payment_method: PaymentMethod,
    #[serde(default)]
    pub customer_name: Option<String>,
    #[serde(default)]
    pub customer_address: Option<String>,
}

/// Saved carts deserialize through [`Cart::from_lines`]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<CartLine>", into = "Vec<CartLine>")]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl From<Vec<CartLine>> for Cart {
    fn from(lines: Vec<CartLine>) -> Self {
        Self::from_lines(lines)
    }
}

impl From<Cart> for Vec<CartLine> {
    fn from(cart: Cart) -> Self {
        cart.lines
    }
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Restore a saved cart, repairing duplicates and bad quantities
    pub fn from_lines(lines: Vec<CartLine>) -> Self {
        Self {
            lines: normalize(lines),
        }
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn dispatch(&mut self, action: CartAction) {
        let lines = std::mem::take(&mut self.lines);
        self.lines = reduce(lines, action);
    }

    pub fn add_item(&mut self, item: FoodItem) {
        self.dispatch(CartAction::Add(item));
    }

    pub fn change_quantity(&mut self, item_id: i64, delta: i64) {
        self.dispatch(CartAction::ChangeQuantity { item_id, delta });
    }

    pub fn remove_item(&mut self, item_id: i64) {
        self.dispatch(CartAction::Remove { item_id });
    }

    pub fn clear(&mut self) {
        self.dispatch(CartAction::Clear);
    }

    /// Σ effective price × quantity
    pub fn total(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.subtotal()))
    }

    /// Σ quantities (badge count)
    pub fn item_count(&self) -> i64 {
        self.lines
            .iter()
            .fold(0i64, |acc, line| acc.saturating_add(line.quantity))
    }

    /// Number of distinct items
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Build the order submission for this cart
    ///
    /// Fails with `OrderEmpty` for an empty cart and `RequiredField` for a
    /// blank phone. Each line carries the effective unit price, so
    /// `total_price` always equals [`Cart::total`].
    pub fn order_request(&self, form: &CheckoutForm) -> AppResult<CreateOrderRequest> {
        if self.lines.is_empty() {
            return Err(AppError::new(ErrorCode::OrderEmpty));
        }
        let phone = form.customer_phone.trim();
        if phone.is_empty() {
            return Err(AppError::required("customer_phone"));
        }

        let items = self
            .lines
            .iter()
            .map(|line| OrderLineInput {
                item_id: line.item.id,
                quantity: line.quantity,
                price: line.item.effective_price(),
            })
            .collect();

        Ok(CreateOrderRequest {
            items,
            total_price: self.total(),
            payment_method: form.payment_method,
            customer_name: non_blank(form.customer_name.as_deref()),
            customer_phone: phone.to_string(),
            customer_address: non_blank(form.customer_address.as_deref()),
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}
