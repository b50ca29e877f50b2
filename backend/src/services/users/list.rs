use crate::store::Store;
use actix_web::{web, HttpResponse, Responder};

pub(crate) async fn process(store: web::Data<Store>) -> impl Responder {
    HttpResponse::Ok().json(&store.users)
}
