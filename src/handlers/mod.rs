pub mod pizzas;
pub mod restaurant_pizzas;
pub mod restaurants;

// Re-export routers for easier importing
pub use pizzas::router as pizzas_router;
pub use restaurant_pizzas::router as restaurant_pizzas_router;
pub use restaurants::router as restaurants_router;

use axum::{response::Html, routing::get, Router};
use tower_http::cors::CorsLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::DbPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
}

/// Assemble the full application router over the given state.
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .merge(restaurants_router())
        .merge(pizzas_router())
        .merge(restaurant_pizzas_router())
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(state)
        .layer(CorsLayer::permissive())
}

async fn index() -> Html<&'static str> {
    Html("<h1>Pizzeria API</h1>")
}

#[derive(OpenApi)]
#[openapi(
    paths(
        restaurants::list_restaurants,
        restaurants::get_restaurant,
        restaurants::delete_restaurant,
        pizzas::list_pizzas,
        restaurant_pizzas::create_restaurant_pizza,
    ),
    components(
        schemas(
            crate::api::RestaurantSummary,
            crate::api::RestaurantDetail,
            crate::api::PizzaResponse,
            crate::api::RestaurantPizzaWithPizza,
            crate::api::CreateRestaurantPizzaRequest,
            crate::api::RestaurantPizzaCreated,
            crate::api::ApiErrorResponse,
            crate::api::ApiErrorsResponse
        )
    ),
    tags(
        (name = "restaurants", description = "Restaurant listing, retrieval and removal"),
        (name = "pizzas", description = "Pizza listing"),
        (name = "restaurant_pizzas", description = "Priced restaurant/pizza offers")
    ),
    info(
        title = "Pizzeria API",
        description = "REST API over restaurants, pizzas and their priced offers",
        version = "1.0.0"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use axum::http::{header, Method, StatusCode};

    use super::app;
    use super::testing::*;

    #[tokio::test]
    async fn test_index_serves_html_placeholder() {
        let state = test_state();

        let response = send(app(state), Method::GET, "/", None).await;
        assert_eq!(response.status(), StatusCode::OK);

        let content_type = response.headers().get(header::CONTENT_TYPE).unwrap();
        assert!(content_type.to_str().unwrap().starts_with("text/html"));

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(bytes.as_ref(), b"<h1>Pizzeria API</h1>");
    }
}
