extern crate log;
use log::{debug, info};
use rocket::http::Status;
use rocket::request::Request;
use rocket::response::status::{self, NoContent};
use rocket::serde::json::{json, Json, Value};
use rocket::{catch, catchers, delete, get, post, routes, Build, Rocket, State};
use std::net::{IpAddr, Ipv4Addr};
use std::sync::Arc;

use crate::error::{ApiError, ErrorMessage};
use crate::item::Item;
use crate::store::ItemStore;

pub const DEFAULT_PORT: u16 = 8080;

#[get("/health")]
fn health_check() -> Value {
    json!({ "message": "ok" })
}

#[get("/items")]
async fn list_items(store: &State<Arc<ItemStore>>) -> Json<Vec<Item>> {
    Json(store.list().await)
}

#[post("/items", data = "<item>")]
async fn create_item(
    item: Result<Json<Item>, rocket::serde::json::Error<'_>>,
    store: &State<Arc<ItemStore>>,
) -> Result<status::Custom<Json<Item>>, ApiError> {
    let item = item.map_err(|e| {
        debug!("rejecting item payload: {}", e);
        ApiError::MalformedRequest(e.to_string())
    })?;
    let created = store.insert(item.into_inner()).await?;
    info!("created item {:?}", created.id);
    Ok(status::Custom(Status::Created, Json(created)))
}

#[delete("/items/<id>")]
async fn delete_item(id: &str, store: &State<Arc<ItemStore>>) -> Result<NoContent, ApiError> {
    let removed = store.delete(id).await?;
    info!("deleted item {:?}", removed.id);
    Ok(NoContent)
}

// Anything the framework rejects before reaching a route (unknown path,
// oversized body, ...) still answers in the `{"error": ...}` shape.
#[catch(default)]
fn default_catcher(status: Status, _req: &Request<'_>) -> status::Custom<Json<ErrorMessage>> {
    let reason = status.reason().unwrap_or("Unknown Error");
    status::Custom(status, Json(ErrorMessage::new(reason)))
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub address: IpAddr,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            address: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            port: DEFAULT_PORT,
        }
    }
}

/// One instance of the registry service. Each node owns its own store, so
/// several nodes can live side by side in a single process.
pub struct ServerNode {
    store: Arc<ItemStore>,
    config: ServerConfig,
}

impl ServerNode {
    pub fn new(config: ServerConfig) -> Self {
        ServerNode {
            store: Arc::new(ItemStore::new()),
            config,
        }
    }

    pub fn store(&self) -> Arc<ItemStore> {
        self.store.clone()
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn build(&self) -> Rocket<Build> {
        info!(
            "Building item registry on {}:{}",
            self.config.address, self.config.port
        );
        rocket::build()
            .configure(
                rocket::Config::figment()
                    .merge(("address", self.config.address))
                    .merge(("port", self.config.port)),
            )
            .manage(self.store.clone())
            .mount(
                "/",
                routes![health_check, list_items, create_item, delete_item],
            )
            .register("/", catchers![default_catcher])
    }
}
