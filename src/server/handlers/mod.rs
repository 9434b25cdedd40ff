pub mod admin;
pub mod lists;
pub mod places;
pub mod routes;
