mod config;
mod services;
mod store;

use crate::store::Store;
use actix_web::{web, App, HttpRequest, HttpResponse, HttpServer};
use env_logger::Env;
use include_dir::{include_dir, Dir};
use log::{error, info};
use std::thread;
use std::time::Duration;

static STATIC_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/static/dist");

async fn serve_embedded(req: HttpRequest) -> HttpResponse {
    let path = req.path().trim_start_matches('/');
    let file_path = if path.is_empty() { "index.html" } else { path };

    match STATIC_DIR.get_file(file_path) {
        Some(file) => {
            let mime = mime_guess::from_path(file_path).first_or_octet_stream();
            HttpResponse::Ok()
                .content_type(mime.as_ref())
                .body(file.contents().to_vec())
        }
        None => match STATIC_DIR.get_file("index.html") {
            Some(index) => HttpResponse::Ok()
                .content_type("text/html; charset=utf-8")
                .body(index.contents().to_vec()),
            None => HttpResponse::NotFound().body("Not Found"),
        },
    }
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(Env::default().default_filter_or("info"));
    let config = config::Config::load();
    let url = format!("http://{}:{}", config.host, config.port);

    // All three collections load sequentially before the listener binds;
    // a broken data directory is fatal.
    let store = Store::load(&config.data_dir).map_err(|e| {
        error!("Failed to load CSV data from {}: {}", config.data_dir.display(), e);
        std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
    })?;
    let store = web::Data::new(store);
    let schema = services::graphql::build_schema(store.clone());

    {
        let _url_clone = url.clone();
        thread::spawn(move || {
            thread::sleep(Duration::from_millis(500));
            let _ = webbrowser::open(&_url_clone);
        });
    }

    info!("Server running at {}", url);
    info!("GraphQL path is {}/graphql", url);

    HttpServer::new(move || {
        App::new()
            .app_data(store.clone())
            .app_data(web::Data::new(schema.clone()))
            .service(services::users::configure_routes())
            .service(services::albums::configure_routes())
            .service(services::photos::configure_routes())
            .service(services::graphql::configure_routes())
            .default_service(web::route().to(serve_embedded))
    })
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
