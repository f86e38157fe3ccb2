pub mod default_route;
pub mod export_route;
pub mod extract_route;
