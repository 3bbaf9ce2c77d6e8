use axum::{
    extract::{Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};

use crate::{
    error::Result,
    models::pagination::PaginationQuery,
    services::pagination_service::PaginationService,
    AppState,
};

pub struct PaginationController;

impl PaginationController {
    pub async fn paginate(
        State(state): State<AppState>,
        Query(pairs): Query<Vec<(String, String)>>,
    ) -> Result<Response> {
        let params = pairs.into_iter().collect::<PaginationQuery>().validate()?;

        let page = PaginationService::paginate(state.store.as_ref(), &params).await?;
        let body = serde_json::to_vec(&page)?;

        Ok((
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response())
    }
}
