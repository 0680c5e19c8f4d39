use axum::{extract::State, response::Json, routing::get, Router};
use diesel::prelude::*;
use tracing::instrument;

use crate::api::PizzaResponse;
use crate::error::ApiError;
use crate::models::Pizza;
use crate::schema;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/pizzas", get(list_pizzas))
}

#[utoipa::path(
    get,
    path = "/pizzas",
    responses(
        (status = 200, description = "List of pizzas", body = Vec<PizzaResponse>),
    ),
    tag = "pizzas"
)]
#[instrument(skip(state))]
pub async fn list_pizzas(
    State(state): State<AppState>,
) -> Result<Json<Vec<PizzaResponse>>, ApiError> {
    let conn = &mut state.pool.get()?;

    let pizzas = schema::pizzas::table.select(Pizza::as_select()).load(conn)?;

    Ok(Json(pizzas.into_iter().map(PizzaResponse::from).collect()))
}
