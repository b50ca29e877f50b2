//! Photo endpoints. Photos can be listed per album and deleted; there is no
//! create or update, and deletions are never written back to CSV.
//!
//! The provided routes are:
//! - `GET /photos?albumId=&userId=`: photos of one album. Both parameters
//!   are required; a missing one is a client error rather than an
//!   unfiltered listing.
//! - `DELETE /photos/{photo_id}`: removes the photo from memory only.

use actix_web::web::{delete, get, scope};
use actix_web::Scope;

mod list;
mod remove;

const API_PATH: &str = "/photos";

pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("/{photo_id}", delete().to(remove::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Store;
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::photo::Photo;
    use tempfile::TempDir;

    fn photo(album_id: u32, user_id: u32, id: u32) -> Photo {
        Photo {
            album_id,
            user_id,
            id,
            title: format!("photo {id}"),
            url: format!("https://photos.example/{id}"),
            thumbnail_url: format!("https://photos.example/thumb/{id}"),
        }
    }

    fn fixture_store(dir: &TempDir) -> web::Data<Store> {
        web::Data::new(Store::new(
            Vec::new(),
            Vec::new(),
            vec![photo(1, 1, 10), photo(1, 1, 11), photo(2, 1, 12)],
            dir.path().join("albums.csv"),
        ))
    }

    #[actix_web::test]
    async fn listing_requires_both_parameters() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;

        for uri in ["/photos", "/photos?albumId=1", "/photos?userId=1"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn non_numeric_parameters_fail_extraction() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri("/photos?albumId=abc&userId=1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn listing_filters_on_album_and_owner() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri("/photos?albumId=1&userId=1")
            .to_request();
        let photos: Vec<Photo> = test::call_and_read_body_json(&app, req).await;
        assert_eq!(photos.len(), 2);
        assert!(photos.iter().all(|p| p.album_id == 1 && p.user_id == 1));
    }

    #[actix_web::test]
    async fn delete_reports_not_found_for_unknown_ids() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;

        let req = test::TestRequest::delete().uri("/photos/10").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::delete().uri("/photos/10").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }
}
