pub mod albums;
pub mod pagination;
pub mod photos;
pub mod users;
