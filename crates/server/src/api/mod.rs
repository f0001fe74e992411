pub mod curated;
pub mod filters;
pub mod handlers;
pub mod middleware;
pub mod publications;
pub mod routes;

pub use routes::create_router;
