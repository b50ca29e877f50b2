use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};
use common::model::album::{Album, AlbumSummary};
use common::model::photo::Photo;
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListAlbumsQuery {
    pub user_id: Option<u32>,
}

pub(crate) async fn process(
    store: web::Data<Store>,
    query: web::Query<ListAlbumsQuery>,
) -> impl Responder {
    let albums = store.albums.read().await;
    let photos = store.photos.read().await;
    HttpResponse::Ok().json(summarize(&albums, &photos, query.user_id))
}

/// Filters by owner when requested and attaches the derived photo count.
/// A photo counts toward an album only when both its album id and its
/// denormalized user id match. Insertion order is preserved; nothing sorts.
fn summarize(albums: &[Album], photos: &[Photo], user_id: Option<u32>) -> Vec<AlbumSummary> {
    albums
        .iter()
        .filter(|album| user_id.map_or(true, |id| album.user_id == id))
        .map(|album| AlbumSummary {
            user_id: album.user_id,
            id: album.id,
            title: album.title.clone(),
            photo_count: photos
                .iter()
                .filter(|p| p.album_id == album.id && p.user_id == album.user_id)
                .count(),
        })
        .collect()
}
