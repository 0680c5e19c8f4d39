use axum::{extract::State, http::StatusCode, response::Json, routing::post, Router};
use diesel::prelude::*;
use tracing::instrument;

use crate::api::{
    ApiErrorsResponse, CreateRestaurantPizzaRequest, RestaurantPizzaCreated,
};
use crate::error::ApiError;
use crate::models::{NewRestaurantPizza, Pizza, Restaurant, RestaurantPizza};
use crate::schema;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/restaurant_pizzas", post(create_restaurant_pizza))
}

#[utoipa::path(
    post,
    path = "/restaurant_pizzas",
    request_body = CreateRestaurantPizzaRequest,
    responses(
        (status = 201, description = "Offer created", body = RestaurantPizzaCreated),
        (status = 400, description = "Validation failed or unknown restaurant/pizza", body = ApiErrorsResponse),
    ),
    tag = "restaurant_pizzas"
)]
#[instrument(skip(state))]
pub async fn create_restaurant_pizza(
    State(state): State<AppState>,
    Json(payload): Json<CreateRestaurantPizzaRequest>,
) -> Result<(StatusCode, Json<RestaurantPizzaCreated>), ApiError> {
    // Price is checked before the references so its error wins when both are bad.
    let price = payload
        .price
        .filter(|price| (1..=30).contains(price))
        .ok_or(ApiError::Validation)?;
    let restaurant_id = payload.restaurant_id.ok_or(ApiError::InvalidReference)?;
    let pizza_id = payload.pizza_id.ok_or(ApiError::InvalidReference)?;

    let conn = &mut state.pool.get()?;

    let restaurant = schema::restaurants::table
        .find(restaurant_id)
        .select(Restaurant::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::InvalidReference)?;
    let pizza = schema::pizzas::table
        .find(pizza_id)
        .select(Pizza::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::InvalidReference)?;

    let created: RestaurantPizza = diesel::insert_into(schema::restaurant_pizzas::table)
        .values(&NewRestaurantPizza {
            price,
            restaurant_id,
            pizza_id,
        })
        .returning(RestaurantPizza::as_returning())
        .get_result(conn)?;

    Ok((
        StatusCode::CREATED,
        Json(RestaurantPizzaCreated {
            id: created.id,
            price: created.price,
            restaurant_id: created.restaurant_id,
            pizza_id: created.pizza_id,
            pizza: pizza.into(),
            restaurant: restaurant.into(),
        }),
    ))
}
