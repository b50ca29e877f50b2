//! Album endpoints: the one collection with full CRUD. Every successful
//! mutation rewrites `albums.csv` before the response goes out.
//!
//! The provided routes are:
//! - `GET /albums?userId=`: lists albums, optionally filtered to one owner,
//!   each annotated with the derived `photoCount`.
//! - `GET /albums/{album_id}?userId=`: returns the title of the album
//!   matching both ids; `userId` is required.
//! - `POST /albums`: appends a caller-identified album; duplicate ids are
//!   rejected.
//! - `PUT /albums/{album_id}`: replaces the title.
//! - `DELETE /albums/{album_id}`: removes the album.

use actix_web::web::{delete, get, post, put, scope};
use actix_web::Scope;

mod create;
mod get_title;
mod list;
mod remove;
mod update;

/// The base path for all album-related API endpoints.
const API_PATH: &str = "/albums";

/// Configures and returns the Actix `Scope` for all album-related routes.
///
/// # Registered Routes:
///
/// *   **`GET ""`** (`list::process`): Returns the album collection as JSON,
///     optionally filtered by the `userId` query parameter. Each entry is an
///     `AlbumSummary`, i.e. the stored album plus the `photoCount` computed
///     against the photo collection on every request.
///
/// *   **`POST ""`** (`create::process`): Appends a new album from a
///     `CreateAlbumRequest` payload and rewrites `albums.csv` before
///     responding. The caller supplies the id; a duplicate is rejected with
///     `409 Conflict` so collection-wide id uniqueness survives every
///     successful mutation.
///
/// *   **`GET "/{album_id}"`** (`get_title::process`): Returns the title of
///     the album matching both the path id and the required `userId` query
///     parameter.
///
/// *   **`PUT "/{album_id}"`** (`update::process`): Replaces the album's
///     title from an `UpdateAlbumRequest` payload and persists the
///     collection.
///
/// *   **`DELETE "/{album_id}"`** (`remove::process`): Removes the album and
///     persists the collection.
pub fn configure_routes() -> Scope {
    scope(API_PATH)
        .route("", get().to(list::process))
        .route("", post().to(create::process))
        .route("/{album_id}", get().to(get_title::process))
        .route("/{album_id}", put().to(update::process))
        .route("/{album_id}", delete().to(remove::process))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{load, persist, Store};
    use actix_web::http::StatusCode;
    use actix_web::{test, web, App};
    use common::model::album::{Album, AlbumSummary};
    use common::model::photo::Photo;
    use common::requests::UpdateAlbumRequest;
    use std::fs;
    use tempfile::TempDir;

    fn album(user_id: u32, id: u32, title: &str) -> Album {
        Album {
            user_id,
            id,
            title: title.to_string(),
        }
    }

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

    // One user, two albums, three photos split 2/1 across them.
    fn fixture_store(dir: &TempDir) -> web::Data<Store> {
        web::Data::new(Store::new(
            Vec::new(),
            vec![album(1, 1, "first"), album(1, 2, "second")],
            vec![photo(1, 1, 10), photo(1, 1, 11), photo(2, 1, 12)],
            dir.path().join("albums.csv"),
        ))
    }

    #[actix_web::test]
    async fn listing_attaches_photo_counts() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;

        let req = test::TestRequest::get().uri("/albums?userId=1").to_request();
        let albums: Vec<AlbumSummary> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(albums.len(), 2);
        assert_eq!(albums[0].photo_count, 2);
        assert_eq!(albums[1].photo_count, 1);
    }

    #[actix_web::test]
    async fn title_lookup_without_user_id_is_a_client_error() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;

        // 400 whether or not the album exists.
        for uri in ["/albums/1", "/albums/999"] {
            let req = test::TestRequest::get().uri(uri).to_request();
            let resp = test::call_service(&app, req).await;
            assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        }
    }

    #[actix_web::test]
    async fn title_lookup_matches_on_both_ids() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;

        let req = test::TestRequest::get()
            .uri("/albums/2?userId=1")
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["title"], "second");

        // Right album id, wrong owner.
        let req = test::TestRequest::get()
            .uri("/albums/2?userId=7")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn malformed_numeric_params_are_rejected() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;

        // A non-numeric query parameter fails u32 extraction.
        let req = test::TestRequest::get()
            .uri("/albums?userId=abc")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        // A non-numeric path id never names a resource.
        let req = test::TestRequest::get()
            .uri("/albums/abc?userId=1")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn update_of_missing_album_leaves_csv_untouched() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        persist::write_albums(
            &dir.path().join("albums.csv"),
            &store.albums.read().await,
        )
        .await
        .unwrap();
        let before = fs::read_to_string(dir.path().join("albums.csv")).unwrap();

        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;
        let req = test::TestRequest::put()
            .uri("/albums/999")
            .set_json(UpdateAlbumRequest {
                title: "renamed".to_string(),
            })
            .to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let after = fs::read_to_string(dir.path().join("albums.csv")).unwrap();
        assert_eq!(before, after);
    }

    #[actix_web::test]
    async fn delete_removes_album_from_listing_and_csv() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;

        let req = test::TestRequest::delete().uri("/albums/1").to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/albums").to_request();
        let albums: Vec<AlbumSummary> = test::call_and_read_body_json(&app, req).await;
        assert!(albums.iter().all(|a| a.id != 1));

        let on_disk: Vec<Album> = load::read_csv(&dir.path().join("albums.csv")).unwrap();
        assert!(on_disk.iter().all(|a| a.id != 1));
    }

    #[actix_web::test]
    async fn create_persists_and_rejects_duplicates() {
        let dir = TempDir::new().unwrap();
        let store = fixture_store(&dir);
        let app =
            test::init_service(App::new().app_data(store).service(configure_routes())).await;

        let req = test::TestRequest::post()
            .uri("/albums")
            .set_json(album(2, 3, "third"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);

        let on_disk: Vec<Album> = load::read_csv(&dir.path().join("albums.csv")).unwrap();
        assert!(on_disk.iter().any(|a| a.id == 3));

        let req = test::TestRequest::post()
            .uri("/albums")
            .set_json(album(2, 3, "third again"))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
