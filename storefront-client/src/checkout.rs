//! Checkout flow
//!
//! Turns the cart into an order submission, sends it, and clears the cart
//! only when the server accepted the order.

use shared::Cart;
use shared::cart::CheckoutForm;
use shared::models::Order;

use crate::{ClientError, ClientResult, HttpClient};

/// Submit the cart as an order
///
/// An empty cart or a blank phone is rejected with
/// [`ClientError::Validation`] before any request is made. On any failure
/// the cart is left as it was so the customer can retry.
pub async fn submit_order(
    client: &HttpClient,
    cart: &mut Cart,
    form: &CheckoutForm,
) -> ClientResult<Order> {
    let request = cart.order_request(form).map_err(ClientError::Validation)?;

    match client.place_order(&request).await {
        Ok(order) => {
            tracing::info!(order_id = order.id, total = order.total_price, "Order placed");
            cart.clear();
            Ok(order)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Order submission failed, cart kept");
            Err(e)
        }
    }
}
