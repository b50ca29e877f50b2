//! Read-only GraphQL surface mirroring the REST data shapes.
//!
//! The schema exposes three query fields (`users`, `albums`, `photos`), each
//! returning the full in-memory collection with no filtering and no
//! mutations. `POST /graphql` executes queries; `GET /graphql` serves the
//! playground, on the same port as the REST routes.

use crate::store::Store;
use actix_web::web::{self, get, post, scope};
use actix_web::{HttpResponse, Responder, Scope};
use async_graphql::http::{playground_source, GraphQLPlaygroundConfig};
use async_graphql::{Context, EmptyMutation, EmptySubscription, Object, Schema};
use async_graphql_actix_web::{GraphQLRequest, GraphQLResponse};
use common::model::album::Album;
use common::model::photo::Photo;
use common::model::user::User;

pub type AppSchema = Schema<QueryRoot, EmptyMutation, EmptySubscription>;

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    async fn users(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<User>> {
        let store = ctx.data::<web::Data<Store>>()?;
        Ok(store.users.clone())
    }

    async fn albums(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Album>> {
        let store = ctx.data::<web::Data<Store>>()?;
        Ok(store.albums.read().await.clone())
    }

    async fn photos(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Photo>> {
        let store = ctx.data::<web::Data<Store>>()?;
        Ok(store.photos.read().await.clone())
    }
}

pub fn build_schema(store: web::Data<Store>) -> AppSchema {
    Schema::build(QueryRoot, EmptyMutation, EmptySubscription)
        .data(store)
        .finish()
}

pub(crate) async fn execute(schema: web::Data<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

async fn playground() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(playground_source(GraphQLPlaygroundConfig::new("/graphql")))
}

pub fn configure_routes() -> Scope {
    scope("/graphql")
        .route("", post().to(execute))
        .route("", get().to(playground))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn query_fields_return_full_collections() {
        let dir = TempDir::new().unwrap();
        let store = web::Data::new(Store::new(
            Vec::new(),
            vec![
                Album {
                    user_id: 1,
                    id: 1,
                    title: "first".to_string(),
                },
                Album {
                    user_id: 2,
                    id: 2,
                    title: "second".to_string(),
                },
            ],
            vec![Photo {
                album_id: 1,
                user_id: 1,
                id: 10,
                title: "photo".to_string(),
                url: "https://photos.example/10".to_string(),
                thumbnail_url: "https://photos.example/thumb/10".to_string(),
            }],
            dir.path().join("albums.csv"),
        ));
        let schema = build_schema(store);

        let response = schema
            .execute("{ albums { userId id title } photos { albumId thumbnailUrl } users { id } }")
            .await;
        assert!(response.errors.is_empty());

        let data = response.data.into_json().unwrap();
        assert_eq!(data["albums"].as_array().unwrap().len(), 2);
        assert_eq!(data["albums"][1]["title"], "second");
        assert_eq!(data["photos"][0]["albumId"], 1);
        assert_eq!(
            data["photos"][0]["thumbnailUrl"],
            "https://photos.example/thumb/10"
        );
        assert_eq!(data["users"].as_array().unwrap().len(), 0);
    }

    #[tokio::test]
    async fn schema_has_no_mutations() {
        let dir = TempDir::new().unwrap();
        let store = web::Data::new(Store::new(
            Vec::new(),
            Vec::new(),
            Vec::new(),
            dir.path().join("albums.csv"),
        ));
        let schema = build_schema(store);

        let response = schema
            .execute("mutation { addAlbum(id: 1) }")
            .await;
        assert!(!response.errors.is_empty());
    }
}
