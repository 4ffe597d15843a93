pub mod app;
pub mod context;
pub mod paths;
pub mod route_table;
pub mod routes;
pub mod vm;
pub mod views;

pub use app::App;
pub use context::{AppContext, UiApp, build_app_context};
pub use route_table::{RouteNode, Screen, allows, route_tree};
