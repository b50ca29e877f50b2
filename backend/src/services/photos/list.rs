use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::photo::Photo;
use serde::Deserialize;
use serde_json::json;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListPhotosQuery {
    pub album_id: Option<u32>,
    pub user_id: Option<u32>,
}

pub(crate) async fn process(
    store: web::Data<Store>,
    query: web::Query<ListPhotosQuery>,
) -> impl Responder {
    let (Some(album_id), Some(user_id)) = (query.album_id, query.user_id) else {
        return HttpResponse::BadRequest()
            .json(json!({ "error": "albumId and userId query parameters are required" }));
    };

    let photos = store.photos.read().await;
    let matching: Vec<&Photo> = photos
        .iter()
        .filter(|p| p.album_id == album_id && p.user_id == user_id)
        .collect();
    HttpResponse::Ok().json(matching)
}
