#![allow(dead_code)]

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{
    body::Body,
    extract::{Query, State},
    http::{header, Method, Request, StatusCode},
    response::IntoResponse,
    routing::get,
    Router,
};
use serde::Serialize;
use tower::ServiceExt;

use mealplanner::config::UsdaConfig;
use mealplanner::foods::{FoodLookup, UsdaClient};
use mealplanner::meals::{MealEntry, MealStore, MemoryMealStore, NewMeal};
use mealplanner::state::AppState;

pub const API_KEY: &str = "test-key";

/// Canned FoodData Central response for "chicken breast".
pub fn chicken_body() -> serde_json::Value {
    serde_json::json!({
        "totalHits": 1,
        "currentPage": 1,
        "foods": [{
            "fdcId": 171077,
            "description": "Chicken breast",
            "dataType": "SR Legacy",
            "foodNutrients": [
                { "nutrientId": 1008, "nutrientName": "Energy", "unitName": "KCAL", "value": 165 },
                { "nutrientId": 1003, "nutrientName": "Protein", "unitName": "G", "value": 31 },
                { "nutrientId": 1005, "nutrientName": "Carbohydrate, by difference", "unitName": "G", "value": 0 },
                { "nutrientId": 1004, "nutrientName": "Total lipid (fat)", "unitName": "G", "value": 3.6 }
            ]
        }]
    })
}

#[derive(Clone)]
struct Upstream {
    status: StatusCode,
    body: String,
    seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

async fn upstream_search(
    State(up): State<Upstream>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    up.seen.lock().unwrap().push(params);
    (
        up.status,
        [(header::CONTENT_TYPE, "application/json")],
        up.body.clone(),
    )
}

/// Throwaway nutrition API answering every search with a fixed response.
pub struct FakeUsda {
    pub addr: SocketAddr,
    pub seen: Arc<Mutex<Vec<HashMap<String, String>>>>,
}

impl FakeUsda {
    pub async fn start(status: StatusCode, body: impl Into<String>) -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/foods/search", get(upstream_search))
            .with_state(Upstream {
                status,
                body: body.into(),
                seen: seen.clone(),
            });
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        Self { addr, seen }
    }

    pub async fn chicken() -> Self {
        Self::start(StatusCode::OK, chicken_body().to_string()).await
    }

    pub fn client(&self) -> UsdaClient {
        UsdaClient::new(&UsdaConfig {
            api_key: API_KEY.into(),
            endpoint: format!("http://{}/", self.addr),
        })
    }

    pub fn requests(&self) -> Vec<HashMap<String, String>> {
        self.seen.lock().unwrap().clone()
    }
}

/// Store whose every call fails, as if the database were down.
pub struct BrokenStore;

#[async_trait]
impl MealStore for BrokenStore {
    async fn append(&self, _meal: NewMeal) -> anyhow::Result<MealEntry> {
        anyhow::bail!("connection refused")
    }
    async fn list_all(&self) -> anyhow::Result<Vec<MealEntry>> {
        anyhow::bail!("connection refused")
    }
}

/// Saves meals but cannot read them back.
#[derive(Default)]
pub struct WriteOnlyStore {
    inner: MemoryMealStore,
}

#[async_trait]
impl MealStore for WriteOnlyStore {
    async fn append(&self, meal: NewMeal) -> anyhow::Result<MealEntry> {
        self.inner.append(meal).await
    }
    async fn list_all(&self) -> anyhow::Result<Vec<MealEntry>> {
        anyhow::bail!("read replica unavailable")
    }
}

pub fn state_with(foods: Arc<dyn FoodLookup>, meals: Arc<dyn MealStore>) -> AppState {
    AppState::from_parts(foods, meals)
}

pub fn memory_store() -> Arc<dyn MealStore> {
    Arc::new(MemoryMealStore::new())
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: serde_json::Value,
}

pub async fn send(app: Router, method: Method, uri: &str, json: Option<&impl Serialize>) -> TestResponse {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match json {
        Some(data) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            Body::from(serde_json::to_string(data).unwrap())
        }
        None => Body::empty(),
    };
    let response = app
        .oneshot(builder.body(body).unwrap())
        .await
        .expect("request failed");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes)
            .unwrap_or_else(|_| serde_json::Value::String(String::from_utf8_lossy(&bytes).into()))
    };
    TestResponse { status, body }
}

pub async fn get_json(app: Router, uri: &str) -> TestResponse {
    send(app, Method::GET, uri, None::<&()>).await
}

pub async fn post_json(app: Router, uri: &str, data: &impl Serialize) -> TestResponse {
    send(app, Method::POST, uri, Some(data)).await
}
