pub mod ask;
pub mod health_route;
pub mod not_found_route;
pub mod root_route;
