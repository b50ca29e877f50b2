//! User endpoints. Users are read-only: the single route returns the whole
//! collection as loaded at startup.

use actix_web::web::{get, scope};
use actix_web::Scope;

mod list;

const API_PATH: &str = "/users";

pub fn configure_routes() -> Scope {
    scope(API_PATH).route("", get().to(list::process))
}
