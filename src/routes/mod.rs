pub mod pagination_routes;
