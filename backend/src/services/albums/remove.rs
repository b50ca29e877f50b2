use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::json;

pub(crate) async fn process(store: web::Data<Store>, album_id: web::Path<u32>) -> impl Responder {
    let album_id = album_id.into_inner();
    match store.delete_album(album_id).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "album deleted" })),
        Err(e @ StoreError::AlbumNotFound(_)) => {
            HttpResponse::NotFound().json(json!({ "error": e.to_string() }))
        }
        Err(e) => {
            error!("Failed to persist albums: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "failed to persist albums" }))
        }
    }
}
