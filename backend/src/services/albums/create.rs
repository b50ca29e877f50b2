use crate::store::{Store, StoreError};
use actix_web::{web, HttpResponse, Responder};
use common::model::album::Album;
use common::requests::CreateAlbumRequest;
use log::error;
use serde_json::json;

pub(crate) async fn process(
    store: web::Data<Store>,
    payload: web::Json<CreateAlbumRequest>,
) -> impl Responder {
    let req = payload.into_inner();
    let album = Album {
        user_id: req.user_id,
        id: req.id,
        title: req.title,
    };

    match store.add_album(album).await {
        Ok(()) => HttpResponse::Created().json(json!({ "message": "album created" })),
        Err(e @ StoreError::DuplicateAlbum(_)) => {
            HttpResponse::Conflict().json(json!({ "error": e.to_string() }))
        }
        Err(e) => {
            error!("Failed to persist albums: {e}");
            HttpResponse::InternalServerError().json(json!({ "error": "failed to persist albums" }))
        }
    }
}
