pub mod pagination_controller;
