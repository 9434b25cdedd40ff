mod custom_list;
mod place;
mod route_history;

pub use custom_list::CustomList;
pub use place::Place;
pub use route_history::{RouteHistory, TravelMode};
