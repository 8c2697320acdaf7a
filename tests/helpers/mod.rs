//! Stub recipe API and session setup shared by the integration tests.

#![allow(dead_code)]

use std::{collections::HashMap, time::Duration};

use axum::{
    Json, Router,
    extract::{Path, Query},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use larder::Session;
use larder_spoonacular::{Client, ClientConfig};
use larder_store::JsonStore;
use serde_json::{Value, json};
use temp_dir::TempDir;

pub const API_KEY: &str = "stub-key";

/// Recipe payload for id `id`. Every recipe lists salt; the rest of the
/// ingredients depend on the id.
pub fn recipe(id: u64) -> Value {
    json!({
        "id": id,
        "title": format!("Recipe {id}"),
        "image": format!("https://img.example/{id}.jpg"),
        "readyInMinutes": 10 * id,
        "servings": 2,
        "aggregateLikes": id,
        "extendedIngredients": [
            {"name": "Salt", "original": "a pinch of salt", "aisle": "Spices and Seasonings"},
            {"name": format!("item{id}"), "original": format!("1 cup item{id}"), "amount": 1.0, "unit": "cup"},
        ],
        "analyzedInstructions": [{"name": "", "steps": [{"number": 1, "step": "Cook."}]}],
    })
}

type Params = Query<HashMap<String, String>>;

async fn complex_search(Query(params): Params) -> Response {
    let ingredients = params.get("includeIngredients").cloned().unwrap_or_default();
    if ingredients.contains("slow") {
        tokio::time::sleep(Duration::from_millis(300)).await;
    }
    if ingredients.contains("broken") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"message": "Invalid ingredient list."})),
        )
            .into_response();
    }

    Json(json!({"results": [recipe(100), recipe(101)]})).into_response()
}

async fn random(Query(params): Params) -> Json<Value> {
    let number: u64 = params
        .get("number")
        .and_then(|n| n.parse().ok())
        .unwrap_or(1);

    Json(json!({"recipes": (1..=number).map(recipe).collect::<Vec<_>>()}))
}

async fn information_bulk(Query(params): Params) -> Json<Value> {
    let recipes: Vec<Value> = params
        .get("ids")
        .map(String::as_str)
        .unwrap_or_default()
        .split(',')
        .filter_map(|id| id.parse().ok())
        .map(recipe)
        .collect();

    Json(Value::Array(recipes))
}

async fn information(Path(id): Path<u64>) -> Json<Value> {
    Json(recipe(id))
}

pub async fn serve() -> String {
    let router = Router::new()
        .route("/complexSearch", get(complex_search))
        .route("/random", get(random))
        .route("/informationBulk", get(information_bulk))
        .route("/{id}/information", get(information));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind stub server");
    let addr = listener.local_addr().expect("stub address");

    tokio::spawn(async move {
        axum::serve(listener, router).await.expect("stub server");
    });

    format!("http://{addr}")
}

pub struct Harness {
    pub dir: TempDir,
    pub session: Session,
}

impl Harness {
    pub fn store(&self) -> JsonStore {
        JsonStore::new(self.dir.path())
    }

    /// Reopen the session over the same data directory.
    pub fn reopen(&mut self, base_url: &str) {
        self.session = Session::open(client(base_url), self.store());
    }
}

pub fn client(base_url: &str) -> Client {
    Client::new(ClientConfig {
        base_url: base_url.to_owned(),
        api_key: API_KEY.to_owned(),
        short_timeout: Duration::from_secs(5),
        long_timeout: Duration::from_secs(5),
    })
    .expect("client")
}

pub async fn setup() -> anyhow::Result<(String, Harness)> {
    let base_url = serve().await;
    let dir = TempDir::new()?;
    let session = Session::open(client(&base_url), JsonStore::new(dir.path()));

    Ok((base_url, Harness { dir, session }))
}
