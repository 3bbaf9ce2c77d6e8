use crate::{controllers::pagination_controller::PaginationController, AppState};
use axum::{routing::get, Router};

pub struct PaginationRoutes;

impl PaginationRoutes {
    pub fn routes() -> Router<AppState> {
        Router::new().route("/paginate", get(PaginationController::paginate))
    }
}
