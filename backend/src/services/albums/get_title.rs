//! # Album Title Lookup
//!
//! Backend logic for the `GET /albums/{album_id}?userId=` endpoint: the
//! single-album read used by the client when it only needs a title.
//!
//! ## Workflow
//!
//! 1. **Parameter check**: `userId` is a required query parameter. A request
//!    without it is answered with `400 Bad Request` before the store is
//!    touched, whether or not the album exists.
//! 2. **Lookup**: the album collection is scanned for an entry matching both
//!    the path id and the owner. Matching on the pair means a correct album
//!    id combined with the wrong owner is still a miss.
//! 3. **Response**: `200 OK` with a `{"title"}` body on a hit, `404 Not
//!    Found` with an `{"error"}` body otherwise.

use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TitleQuery {
    pub user_id: Option<u32>,
}

/// Actix web handler for the `GET /albums/{album_id}` endpoint.
///
/// # Arguments
/// * `store` - The shared in-memory store.
/// * `album_id` - The album's id, extracted from the URL path.
/// * `query` - The query string; must carry `userId`.
///
/// # Returns
/// - `200 OK` with `{"title"}` when an album matches both ids.
/// - `400 Bad Request` when `userId` is missing.
/// - `404 Not Found` when no album matches.
pub(crate) async fn process(
    store: web::Data<Store>,
    album_id: web::Path<u32>,
    query: web::Query<TitleQuery>,
) -> impl Responder {
    let album_id = album_id.into_inner();
    let Some(user_id) = query.user_id else {
        return HttpResponse::BadRequest()
            .json(json!({ "error": "userId query parameter is required" }));
    };

    let albums = store.albums.read().await;
    match albums
        .iter()
        .find(|a| a.id == album_id && a.user_id == user_id)
    {
        Some(album) => HttpResponse::Ok().json(json!({ "title": album.title })),
        None => {
            HttpResponse::NotFound().json(json!({ "error": format!("album {album_id} not found") }))
        }
    }
}
