//! End-to-end: real HTTP server, storefront-client, fake Telegram Bot API

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::post;
use axum::{Json, Router};
use chrono::FixedOffset;
use serde_json::{Value, json};
use shared::Lang;
use shared::models::{CategoryCreate, FoodItemCreate, FoodItemQuery};
use storefront_client::{Cart, CheckoutForm, ClientConfig, ClientError, HttpClient, submit_order};
use storefront_server::auth::bootstrap_admin;
use storefront_server::db::DbService;
use storefront_server::notify::{NotificationRelay, TelegramNotifier};
use storefront_server::{Config, Server, ServerState};
use tokio::net::TcpListener;

#[derive(Clone, Default)]
struct FakeTelegram {
    calls: Arc<Mutex<Vec<(String, Value)>>>,
    fail: bool,
}

impl FakeTelegram {
    fn calls(&self) -> Vec<(String, Value)> {
        self.calls.lock().unwrap().clone()
    }

    async fn wait_for_calls(&self, n: usize) -> Vec<(String, Value)> {
        for _ in 0..100 {
            if self.calls.lock().unwrap().len() >= n {
                break;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        self.calls()
    }
}

async fn send_message(
    State(bot): State<FakeTelegram>,
    Path(segment): Path<String>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    bot.calls.lock().unwrap().push((segment, body));
    if bot.fail {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"ok": false, "error_code": 500, "description": "Internal Server Error"})),
        )
    } else {
        (
            StatusCode::OK,
            Json(json!({"ok": true, "result": {"message_id": 1}})),
        )
    }
}

async fn spawn_telegram(bot: FakeTelegram) -> String {
    let app = Router::new()
        .route("/{segment}/sendMessage", post(send_message))
        .with_state(bot);
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Storefront server on a random port, notifying the given Bot API base
async fn spawn_server(telegram_base: &str) -> String {
    let db = DbService::in_memory().await.unwrap();
    bootstrap_admin(&db.pool, "admin", "s3cret").await.unwrap();

    let notifier = TelegramNotifier::new(telegram_base, "T0KEN", "42", Duration::from_secs(5)).unwrap();
    let relay = NotificationRelay::new(
        Arc::new(notifier),
        Lang::Uz,
        FixedOffset::east_opt(5 * 3600).unwrap(),
    );
    let config = Config::default();
    let state = ServerState::new(config.clone(), db, relay);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        Server::with_state(config, state)
            .serve(listener, std::future::pending())
            .await
            .unwrap();
    });
    format!("http://{addr}")
}

fn item(name: &str, price: i64, discounted_price: Option<i64>, category_id: i64) -> FoodItemCreate {
    FoodItemCreate {
        name: name.into(),
        name_uz: name.into(),
        name_ru: format!("{name} ru"),
        price,
        discounted_price,
        category_id,
        image: None,
        description: None,
        is_available: None,
        is_special: None,
    }
}

/// Admin client with a category holding A (8000) and B (15000, discounted 12000)
async fn seeded_admin(base: &str) -> (HttpClient, i64) {
    let mut admin = HttpClient::new(&ClientConfig::new(base)).unwrap();
    admin.login("admin", "s3cret").await.unwrap();

    let category = admin
        .create_category(&CategoryCreate {
            name: "Hotdogs".into(),
            name_uz: "Hot-doglar".into(),
            name_ru: "Хот-доги".into(),
            description: None,
        })
        .await
        .unwrap();
    admin
        .create_food_item(&item("A", 8000, None, category.id))
        .await
        .unwrap();
    admin
        .create_food_item(&item("B", 15000, Some(12000), category.id))
        .await
        .unwrap();
    (admin, category.id)
}

fn checkout_form() -> CheckoutForm {
    CheckoutForm {
        customer_phone: "+998901234567".into(),
        customer_name: Some("Aziz".into()),
        ..Default::default()
    }
}

#[tokio::test]
async fn order_flow_end_to_end() {
    let telegram = FakeTelegram::default();
    let telegram_base = spawn_telegram(telegram.clone()).await;
    let base = spawn_server(&telegram_base).await;
    let (admin, category_id) = seeded_admin(&base).await;

    // customer side
    let customer = HttpClient::new(&ClientConfig::new(&base)).unwrap();
    let menu = customer
        .list_food_items(&FoodItemQuery {
            category_id: Some(category_id),
        })
        .await
        .unwrap();
    let a = menu.iter().find(|i| i.name == "A").unwrap().clone();
    let b = menu.iter().find(|i| i.name == "B").unwrap().clone();

    let mut cart = Cart::new();
    cart.add_item(a.clone());
    cart.add_item(a.clone());
    cart.add_item(b.clone());
    assert_eq!(cart.total(), 28000);
    assert_eq!(cart.item_count(), 3);

    let order = submit_order(&customer, &mut cart, &checkout_form())
        .await
        .unwrap();
    assert!(cart.is_empty());
    assert_eq!(order.total_price, 28000);
    assert_eq!(order.items.len(), 2);
    assert_eq!(order.items[0].price, 8000);
    assert_eq!(order.items[1].price, 12000);

    // a later price edit does not touch the order history
    admin
        .update_food_item(a.id, &item("A", 9000, None, category_id))
        .await
        .unwrap();
    let orders = admin.list_orders().await.unwrap();
    assert_eq!(orders.len(), 1);
    assert_eq!(orders[0].total_price, 28000);
    assert_eq!(orders[0].items[0].price, 8000);
    assert_eq!(orders[0].items[0].item.as_ref().map(|i| i.price), Some(9000));

    let calls = telegram.wait_for_calls(1).await;
    assert_eq!(calls.len(), 1);
    let (segment, body) = &calls[0];
    assert_eq!(segment, "botT0KEN");
    assert_eq!(body["chat_id"], "42");
    assert_eq!(body["parse_mode"], "HTML");
    let text = body["text"].as_str().unwrap();
    assert!(text.contains("<code>+998901234567</code>"));
    assert!(text.contains("<b>28 000 so'm</b>"));
    assert!(text.contains("• A (A ru) - 2 x 8 000 so'm = 16 000 so'm"));
}

#[tokio::test]
async fn notification_failure_still_places_order() {
    let telegram = FakeTelegram {
        fail: true,
        ..Default::default()
    };
    let telegram_base = spawn_telegram(telegram.clone()).await;
    let base = spawn_server(&telegram_base).await;
    let (admin, _) = seeded_admin(&base).await;

    let customer = HttpClient::new(&ClientConfig::new(&base)).unwrap();
    let menu = customer
        .list_food_items(&FoodItemQuery::default())
        .await
        .unwrap();
    let mut cart = Cart::new();
    for food in menu {
        cart.add_item(food);
    }

    let order = submit_order(&customer, &mut cart, &checkout_form())
        .await
        .unwrap();
    assert_eq!(order.total_price, 20000);
    assert!(cart.is_empty());

    assert_eq!(telegram.wait_for_calls(1).await.len(), 1);
    assert_eq!(admin.list_orders().await.unwrap().len(), 1);
}

#[tokio::test]
async fn empty_cart_never_reaches_the_server() {
    let telegram = FakeTelegram::default();
    let telegram_base = spawn_telegram(telegram.clone()).await;
    let base = spawn_server(&telegram_base).await;
    let (admin, _) = seeded_admin(&base).await;

    let customer = HttpClient::new(&ClientConfig::new(&base)).unwrap();
    let mut cart = Cart::new();
    let err = submit_order(&customer, &mut cart, &checkout_form())
        .await
        .unwrap_err();
    assert!(matches!(err, ClientError::Validation(_)));

    assert!(admin.list_orders().await.unwrap().is_empty());
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(telegram.calls().is_empty());
}

#[tokio::test]
async fn stale_prices_are_rejected_by_the_server() {
    let telegram = FakeTelegram::default();
    let telegram_base = spawn_telegram(telegram.clone()).await;
    let base = spawn_server(&telegram_base).await;
    let (admin, _) = seeded_admin(&base).await;

    let customer = HttpClient::new(&ClientConfig::new(&base)).unwrap();
    let menu = customer
        .list_food_items(&FoodItemQuery::default())
        .await
        .unwrap();
    let mut cart = Cart::new();
    cart.add_item(menu[0].clone());
    let mut request = cart.order_request(&checkout_form()).unwrap();
    request.total_price += 1;

    let err = customer.place_order(&request).await.unwrap_err();
    assert_eq!(err.code(), Some(shared::ErrorCode::OrderTotalMismatch));
    assert!(admin.list_orders().await.unwrap().is_empty());

    // admin surface without a token
    let err = customer.list_orders().await.unwrap_err();
    assert_eq!(err.code(), Some(shared::ErrorCode::NotAuthenticated));
}
