pub mod pagination_service;
