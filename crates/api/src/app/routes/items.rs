use std::sync::Arc;

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Extension, Path, Query,
    },
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use itemstore_items::{Item, ItemPatch};

use crate::app::services::AppServices;
use crate::app::{dto, errors};

pub async fn create_item(
    Extension(services): Extension<Arc<AppServices>>,
    query: Result<Query<dto::CreateItemQuery>, QueryRejection>,
    body: Result<Json<Item>, JsonRejection>,
) -> axum::response::Response {
    let Query(query) = match query {
        Ok(q) => q,
        Err(e) => return errors::query_rejection_to_response(e),
    };
    let item_id = match query.item_id.as_deref() {
        Some(raw) => match errors::parse_item_id(raw) {
            Ok(v) => v,
            Err(resp) => return resp,
        },
        None => {
            return errors::json_error(
                StatusCode::BAD_REQUEST,
                "invalid_id",
                "missing required query parameter: item_id",
            );
        }
    };
    let Json(item) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match services.items().create(item_id, item) {
        Ok(item) => {
            (StatusCode::OK, Json(dto::message_with_item(dto::ITEM_CREATED, &item))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn get_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let item_id = match errors::item_id_from_path(path) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.items().get(item_id) {
        Ok(item) => (StatusCode::OK, Json(dto::item_body(&item))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn update_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<Item>, JsonRejection>,
) -> axum::response::Response {
    let item_id = match errors::item_id_from_path(path) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(item) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match services.items().update(item_id, item) {
        Ok(item) => {
            (StatusCode::OK, Json(dto::message_with_item(dto::ITEM_UPDATED, &item))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn patch_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<ItemPatch>, JsonRejection>,
) -> axum::response::Response {
    let item_id = match errors::item_id_from_path(path) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let Json(patch) = match body {
        Ok(b) => b,
        Err(e) => return errors::json_rejection_to_response(e),
    };

    match services.items().patch(item_id, &patch) {
        Ok(item) => {
            (StatusCode::OK, Json(dto::message_with_item(dto::ITEM_PATCHED, &item))).into_response()
        }
        Err(e) => errors::domain_error_to_response(e),
    }
}

pub async fn delete_item(
    Extension(services): Extension<Arc<AppServices>>,
    path: Result<Path<String>, PathRejection>,
) -> axum::response::Response {
    let item_id = match errors::item_id_from_path(path) {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    match services.items().delete(item_id) {
        Ok(()) => (StatusCode::OK, Json(dto::message_body(dto::ITEM_DELETED))).into_response(),
        Err(e) => errors::domain_error_to_response(e),
    }
}
