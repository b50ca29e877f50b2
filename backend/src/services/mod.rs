pub mod albums;
pub mod graphql;
pub mod photos;
pub mod users;
