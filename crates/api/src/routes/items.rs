//! Item registry endpoints.

use std::fmt;
use std::sync::Arc;

use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use item_store::{Item, ItemId, ItemStore};
use serde::de::{self, Deserializer, Unexpected, Visitor};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{ApiError, ErrorResponse, ValidationErrorResponse};

/// Shared application state accessible from all handlers.
pub struct AppState<S: ItemStore> {
    pub item_store: S,
}

impl<S: ItemStore> AppState<S> {
    pub fn new(item_store: S) -> Self {
        Self { item_store }
    }
}

// -- Request types --

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateItemRequest {
    #[serde(deserialize_with = "deserialize_coerced_id")]
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl From<CreateItemRequest> for Item {
    fn from(req: CreateItemRequest) -> Self {
        Item {
            id: ItemId::new(req.id),
            name: req.name,
            description: req.description,
        }
    }
}

/// Reads `id` as a JSON integer, an integer-valued float (`1.0`), or a
/// string holding an integer (`"1"`). Anything else is a validation error.
fn deserialize_coerced_id<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct CoercedId;

    impl Visitor<'_> for CoercedId {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a valid integer")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| E::invalid_value(Unexpected::Unsigned(v), &self))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            // NaN and infinities have a NaN fractional part.
            if v.fract() == 0.0 && v >= i64::MIN as f64 && v < i64::MAX as f64 {
                Ok(v as i64)
            } else {
                Err(E::invalid_value(Unexpected::Float(v), &self))
            }
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<i64, E> {
            v.trim()
                .parse()
                .map_err(|_| E::invalid_value(Unexpected::Str(v), &self))
        }
    }

    deserializer.deserialize_any(CoercedId)
}

// -- Response types --

#[derive(Debug, Serialize, ToSchema)]
pub struct ItemResponse {
    pub id: i64,
    pub name: String,
    pub description: Option<String>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        ItemResponse {
            id: item.id.as_i64(),
            name: item.name,
            description: item.description,
        }
    }
}

// -- Handlers --

/// GET /api/items: every stored item, in first-insertion order.
#[utoipa::path(
    get,
    path = "/api/items",
    tag = "Items",
    responses((status = 200, description = "All stored items", body = [ItemResponse]))
)]
#[tracing::instrument(skip(state))]
pub async fn list<S: ItemStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let items = state.item_store.list().await?;
    Ok(Json(items.into_iter().map(ItemResponse::from).collect()))
}

/// GET /api/items/{item_id}: load one item.
#[utoipa::path(
    get,
    path = "/api/items/{item_id}",
    tag = "Items",
    params(("item_id" = i64, Path, description = "Item identifier")),
    responses(
        (status = 200, description = "The stored item", body = ItemResponse),
        (status = 404, description = "No item with this id", body = ErrorResponse),
        (status = 422, description = "Id is not an integer", body = ValidationErrorResponse)
    )
)]
#[tracing::instrument(skip(state))]
pub async fn get<S: ItemStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    item_id: Result<Path<ItemId>, PathRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Path(item_id) = item_id?;
    let item = state.item_store.require(item_id).await?;
    Ok(Json(item.into()))
}

/// POST /api/items: store an item, replacing any record with the same id.
#[utoipa::path(
    post,
    path = "/api/items",
    tag = "Items",
    request_body = CreateItemRequest,
    responses(
        (status = 200, description = "The stored item", body = ItemResponse),
        (status = 422, description = "Body does not match the item schema", body = ValidationErrorResponse)
    )
)]
#[tracing::instrument(skip(state, payload))]
pub async fn create<S: ItemStore + 'static>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<CreateItemRequest>, JsonRejection>,
) -> Result<Json<ItemResponse>, ApiError> {
    let Json(req) = payload?;
    let item = Item::from(req);

    let replaced = state.item_store.insert(item.clone()).await?;
    if replaced.is_some() {
        tracing::info!(item_id = %item.id, "overwrote existing item");
    }

    Ok(Json(item.into()))
}
