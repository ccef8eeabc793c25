// crates/cart-client/tests/common/mod.rs
//
// In-process fake of the ordering API, bound to an ephemeral port.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post, put},
    Json, Router,
};
use chrono::NaiveDate;

use cart_client::ApiClient;
use cart_core::{Category, Menu, MenuItem, Money, OrderSubmission, Totals, TAX_RATE};
use cart_protocol::{
    AdminStats, ErrorBody, MenuItemDraft, MenuItemPatch, MenuItemResponse, OrderItemRecord,
    OrderRecord, OrderStatus, OrdersPage, OrdersQuery, PopularItem, StatusUpdate,
    StatusUpdateResponse, SubmitOrderResponse, SuccessResponse,
};

#[derive(Default)]
pub struct FakeApi {
    pub menu: Vec<MenuItem>,
    pub orders: Vec<OrderRecord>,
    pub submissions: Vec<OrderSubmission>,
    pub order_queries: Vec<OrdersQuery>,
    pub requests: usize,
    pub fail_submit: bool,
    pub fail_menu: bool,
}

pub type Shared = Arc<Mutex<FakeApi>>;

pub fn price(units: f64) -> Money {
    Money::from_units(units).expect("valid price")
}

pub fn sample_menu() -> Vec<MenuItem> {
    vec![
        MenuItem::new(1, "Coffee", "Fresh brewed coffee", price(3.50), Category::Beverages),
        MenuItem::new(2, "Tea", "Herbal tea selection", price(2.50), Category::Beverages),
        MenuItem::new(5, "Margherita Pizza", "Classic tomato and mozzarella", price(12.99), Category::MainCourse),
        MenuItem::new(10, "Chocolate Cake", "Rich chocolate layer cake", price(6.99), Category::Desserts),
    ]
}

pub fn sample_order(id: u32, status: OrderStatus) -> OrderRecord {
    let created = NaiveDate::from_ymd_opt(2024, 3, 1)
        .and_then(|d| d.and_hms_opt(12, 30, 0))
        .expect("valid timestamp");
    OrderRecord {
        id,
        customer_name: format!("Customer {id}"),
        customer_email: None,
        customer_phone: None,
        notes: None,
        subtotal: price(10.00),
        tax: price(0.80),
        total: price(10.80),
        status,
        created_at: created,
        updated_at: created,
        items: vec![OrderItemRecord {
            id,
            menu_item_id: 1,
            name: "Coffee".into(),
            quantity: 2,
            price: price(5.00),
            total: price(10.00),
        }],
    }
}

/// Start the fake API and return a client pointed at it.
pub async fn spawn(state: FakeApi) -> (ApiClient, Shared) {
    let shared: Shared = Arc::new(Mutex::new(state));

    let app = Router::new()
        .route("/api/menu", get(get_menu))
        .route("/api/menu/{id}", get(get_menu_item))
        .route("/api/submit-order", post(submit_order))
        .route("/api/orders", get(list_orders))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders/{id}/status", put(update_status))
        .route("/api/admin/menu", get(admin_menu).post(create_item))
        .route("/api/admin/menu/{id}", put(update_item).delete(delete_item))
        .route("/api/admin/stats", get(stats))
        .with_state(shared.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind to address");
    let addr = listener.local_addr().expect("local addr");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Server error");
    });

    let client = ApiClient::new(&format!("http://{addr}"), Duration::from_secs(5))
        .expect("client for fake api");
    (client, shared)
}

/// A client pointed at a port nothing listens on.
pub fn unreachable_client() -> ApiClient {
    ApiClient::new("http://127.0.0.1:9", Duration::from_millis(500)).expect("client")
}

fn error(status: StatusCode, message: &str) -> Response {
    (status, Json(ErrorBody { error: message.to_string() })).into_response()
}

async fn get_menu(State(state): State<Shared>) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    if api.fail_menu {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "database unavailable");
    }
    let menu = Menu::from_items(api.menu.iter().filter(|i| i.available).cloned());
    Json(menu).into_response()
}

async fn get_menu_item(State(state): State<Shared>, Path(id): Path<u32>) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    match api.menu.iter().find(|i| i.id == id) {
        Some(item) => Json(item.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Menu item not found"),
    }
}

async fn submit_order(State(state): State<Shared>, Json(order): Json<OrderSubmission>) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    if api.fail_submit {
        return error(StatusCode::INTERNAL_SERVER_ERROR, "Failed to submit order");
    }
    if order.items.is_empty() {
        return error(StatusCode::BAD_REQUEST, "No items in order");
    }

    let id = api.orders.len() as u32 + 1;
    let totals = Totals::compute(&order.items, TAX_RATE);
    let mut record = sample_order(id, OrderStatus::Pending);
    record.customer_name = order.customer_name.clone();
    record.notes = Some(order.notes.clone());
    record.customer_email = order.customer_email.clone();
    record.customer_phone = order.customer_phone.clone();
    record.subtotal = totals.subtotal;
    record.tax = totals.tax;
    record.total = totals.total;
    record.items = order
        .items
        .iter()
        .enumerate()
        .map(|(i, line)| OrderItemRecord {
            id: i as u32 + 1,
            menu_item_id: line.id,
            name: line.name.clone(),
            quantity: line.quantity,
            price: line.unit_price,
            total: line.line_total(),
        })
        .collect();

    api.orders.push(record.clone());
    api.submissions.push(order);
    Json(SubmitOrderResponse {
        success: true,
        order_id: id,
        order: record,
    })
    .into_response()
}

async fn list_orders(State(state): State<Shared>, Query(query): Query<OrdersQuery>) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    api.order_queries.push(query);

    let matching: Vec<OrderRecord> = api
        .orders
        .iter()
        .filter(|o| query.status.map_or(true, |s| o.status == s))
        .cloned()
        .collect();
    let per_page = query.per_page.max(1) as usize;
    let total = matching.len();
    let pages = total.div_ceil(per_page);
    let start = (query.page.max(1) as usize - 1) * per_page;
    let orders = matching.into_iter().skip(start).take(per_page).collect();

    Json(OrdersPage {
        orders,
        total: total as u32,
        pages: pages as u32,
        current_page: query.page,
    })
    .into_response()
}

async fn get_order(State(state): State<Shared>, Path(id): Path<u32>) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    match api.orders.iter().find(|o| o.id == id) {
        Some(order) => Json(order.clone()).into_response(),
        None => error(StatusCode::NOT_FOUND, "Order not found"),
    }
}

async fn update_status(
    State(state): State<Shared>,
    Path(id): Path<u32>,
    Json(update): Json<StatusUpdate>,
) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    match api.orders.iter_mut().find(|o| o.id == id) {
        Some(order) => {
            order.status = update.status;
            Json(StatusUpdateResponse {
                success: true,
                order: order.clone(),
            })
            .into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Order not found"),
    }
}

async fn admin_menu(State(state): State<Shared>) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    Json(api.menu.clone()).into_response()
}

async fn create_item(State(state): State<Shared>, Json(draft): Json<MenuItemDraft>) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    let id = api.menu.iter().map(|i| i.id).max().unwrap_or(0) + 1;
    let mut item = MenuItem::new(id, &draft.name, &draft.description, draft.price, draft.category);
    item.available = draft.available;
    item.image_url = draft.image_url;
    api.menu.push(item.clone());
    (
        StatusCode::CREATED,
        Json(MenuItemResponse { success: true, item }),
    )
        .into_response()
}

async fn update_item(
    State(state): State<Shared>,
    Path(id): Path<u32>,
    Json(patch): Json<MenuItemPatch>,
) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    match api.menu.iter_mut().find(|i| i.id == id) {
        Some(item) => {
            patch.apply_to(item);
            Json(MenuItemResponse {
                success: true,
                item: item.clone(),
            })
            .into_response()
        }
        None => error(StatusCode::NOT_FOUND, "Menu item not found"),
    }
}

async fn delete_item(State(state): State<Shared>, Path(id): Path<u32>) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    let before = api.menu.len();
    api.menu.retain(|i| i.id != id);
    if api.menu.len() == before {
        return error(StatusCode::NOT_FOUND, "Menu item not found");
    }
    Json(SuccessResponse { success: true }).into_response()
}

async fn stats(State(state): State<Shared>) -> Response {
    let mut api = state.lock().expect("state lock");
    api.requests += 1;
    let total_revenue = api.orders.iter().map(|o| o.total).sum();
    let pending_orders = api
        .orders
        .iter()
        .filter(|o| o.status == OrderStatus::Pending)
        .count() as u64;
    Json(AdminStats {
        total_orders: api.orders.len() as u64,
        pending_orders,
        total_revenue,
        popular_items: vec![PopularItem {
            name: "Coffee".into(),
            total_ordered: 12,
        }],
    })
    .into_response()
}
