use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse, Responder};
use log::error;
use serde_json::json;

pub(crate) async fn process(store: web::Data<Store>, photo_id: web::Path<u32>) -> impl Responder {
    let photo_id = photo_id.into_inner();
    match store.delete_photo(photo_id).await {
        Ok(()) => HttpResponse::Ok().json(json!({ "message": "photo deleted" })),
        Err(e @ StoreError::PhotoNotFound(_)) => {
            HttpResponse::NotFound().json(json!({ "error": e.to_string() }))
        }
        Err(e) => {
            error!("Failed to delete photo {photo_id}: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "failed to delete photo" }))
        }
    }
}
