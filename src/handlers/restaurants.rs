use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Json,
    routing::get,
    Router,
};
use diesel::prelude::*;
use tracing::instrument;

use crate::api::{ApiErrorResponse, RestaurantDetail, RestaurantSummary};
use crate::error::ApiError;
use crate::models::{Pizza, Restaurant, RestaurantPizza};
use crate::schema;

use super::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/restaurants", get(list_restaurants))
        .route(
            "/restaurants/{id}",
            get(get_restaurant).delete(delete_restaurant),
        )
}

#[utoipa::path(
    get,
    path = "/restaurants",
    responses(
        (status = 200, description = "List of restaurants", body = Vec<RestaurantSummary>),
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn list_restaurants(
    State(state): State<AppState>,
) -> Result<Json<Vec<RestaurantSummary>>, ApiError> {
    let conn = &mut state.pool.get()?;

    let restaurants = schema::restaurants::table
        .select(Restaurant::as_select())
        .load(conn)?;

    Ok(Json(
        restaurants.into_iter().map(RestaurantSummary::from).collect(),
    ))
}

#[utoipa::path(
    get,
    path = "/restaurants/{id}",
    responses(
        (status = 200, description = "Restaurant with its priced pizzas", body = RestaurantDetail),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn get_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<RestaurantDetail>, ApiError> {
    let conn = &mut state.pool.get()?;

    let restaurant = schema::restaurants::table
        .find(id)
        .select(Restaurant::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::RestaurantNotFound)?;

    let offers = RestaurantPizza::belonging_to(&restaurant)
        .inner_join(schema::pizzas::table)
        .select((RestaurantPizza::as_select(), Pizza::as_select()))
        .load::<(RestaurantPizza, Pizza)>(conn)?;

    Ok(Json(RestaurantDetail::new(restaurant, offers)))
}

#[utoipa::path(
    delete,
    path = "/restaurants/{id}",
    responses(
        (status = 204, description = "Restaurant and its offers deleted"),
        (status = 404, description = "Restaurant not found", body = ApiErrorResponse),
    ),
    params(
        ("id" = i32, Path, description = "Restaurant ID")
    ),
    tag = "restaurants"
)]
#[instrument(skip(state))]
pub async fn delete_restaurant(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    let conn = &mut state.pool.get()?;

    let restaurant = schema::restaurants::table
        .find(id)
        .select(Restaurant::as_select())
        .first(conn)
        .optional()?
        .ok_or(ApiError::RestaurantNotFound)?;

    // Children first, then the parent, inside one transaction.
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(RestaurantPizza::belonging_to(&restaurant)).execute(conn)?;
        diesel::delete(schema::restaurants::table.find(restaurant.id)).execute(conn)?;
        Ok(())
    })?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use axum::http::{Method, StatusCode};
    use serde_json::json;

    use crate::handlers::testing::*;
    use crate::handlers::app;

    #[tokio::test]
    async fn test_list_restaurants_returns_summaries() {
        let state = test_state();
        let dough_co = insert_restaurant(&state.pool, "Dough Co", Some("1 Main St"));
        insert_restaurant(&state.pool, "Crust Bros", None);
        let cheese = insert_pizza(&state.pool, "Cheese", "Dough, Sauce, Cheese");
        insert_restaurant_pizza(&state.pool, 12, dough_co.id, cheese.id);

        let response = send(app(state), Method::GET, "/restaurants", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        let restaurants = body.as_array().unwrap();
        assert_eq!(restaurants.len(), 2);
        assert_eq!(restaurants[0]["name"], "Dough Co");
        assert_eq!(restaurants[0]["address"], "1 Main St");
        assert_eq!(restaurants[1]["address"], json!(null));
        // The list view stays flat
        assert!(restaurants[0].get("restaurant_pizzas").is_none());
    }

    #[tokio::test]
    async fn test_get_restaurant_includes_offers() {
        let state = test_state();
        let dough_co = insert_restaurant(&state.pool, "Dough Co", Some("1 Main St"));
        let cheese = insert_pizza(&state.pool, "Cheese", "Dough, Sauce, Cheese");
        let pepperoni = insert_pizza(&state.pool, "Pepperoni", "Dough, Sauce, Cheese, Pepperoni");
        insert_restaurant_pizza(&state.pool, 12, dough_co.id, cheese.id);
        insert_restaurant_pizza(&state.pool, 15, dough_co.id, pepperoni.id);

        let uri = format!("/restaurants/{}", dough_co.id);
        let response = send(app(state), Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["id"], dough_co.id);
        assert_eq!(body["name"], "Dough Co");
        let offers = body["restaurant_pizzas"].as_array().unwrap();
        assert_eq!(offers.len(), 2);
        assert!(offers.iter().any(|o| o["pizza"]["name"] == "Cheese"));
        assert!(offers
            .iter()
            .any(|o| o["price"] == 15 && o["pizza"]["name"] == "Pepperoni"));
    }

    #[tokio::test]
    async fn test_get_missing_restaurant_returns_404() {
        let state = test_state();

        let response = send(app(state), Method::GET, "/restaurants/999", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "Restaurant not found"}));
    }

    #[tokio::test]
    async fn test_delete_missing_restaurant_returns_404() {
        let state = test_state();

        let response = send(app(state), Method::DELETE, "/restaurants/999", None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body, json!({"error": "Restaurant not found"}));
    }

    #[tokio::test]
    async fn test_delete_restaurant_cascades_to_offers() {
        let state = test_state();
        let dough_co = insert_restaurant(&state.pool, "Dough Co", Some("1 Main St"));
        let other = insert_restaurant(&state.pool, "Crust Bros", None);
        let cheese = insert_pizza(&state.pool, "Cheese", "Dough, Sauce, Cheese");
        insert_restaurant_pizza(&state.pool, 12, dough_co.id, cheese.id);
        insert_restaurant_pizza(&state.pool, 14, dough_co.id, cheese.id);
        insert_restaurant_pizza(&state.pool, 9, other.id, cheese.id);

        let uri = format!("/restaurants/{}", dough_co.id);
        let response = send(app(state.clone()), Method::DELETE, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());

        // The restaurant is gone and took its offers with it
        let response = send(app(state.clone()), Method::GET, &uri, None).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(association_count(&state.pool, dough_co.id), 0);

        // Unrelated rows survive
        assert_eq!(association_count(&state.pool, other.id), 1);
        let response = send(app(state), Method::GET, "/pizzas", None).await;
        let body = body_json(response).await;
        assert_eq!(body.as_array().unwrap().len(), 1);
    }
}
