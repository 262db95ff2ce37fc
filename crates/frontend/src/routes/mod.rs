pub mod page;
pub mod router;
pub mod routes;
