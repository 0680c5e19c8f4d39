use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{Pizza, Restaurant, RestaurantPizza};

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantSummary {
    /// Unique identifier for the restaurant
    pub id: i32,
    /// Name of the restaurant
    pub name: String,
    /// Street address, if known
    pub address: Option<String>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantDetail {
    /// Unique identifier for the restaurant
    pub id: i32,
    /// Name of the restaurant
    pub name: String,
    /// Street address, if known
    pub address: Option<String>,
    /// Every pizza this restaurant sells, with its price
    pub restaurant_pizzas: Vec<RestaurantPizzaWithPizza>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct PizzaResponse {
    /// Unique identifier for the pizza
    pub id: i32,
    /// Name of the pizza
    pub name: String,
    /// Free-form ingredient description
    pub ingredients: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaWithPizza {
    /// Unique identifier for the offer
    pub id: i32,
    /// Whole-unit price the restaurant charges
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaResponse,
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateRestaurantPizzaRequest {
    /// Whole-unit price, between 1 and 30 inclusive
    pub price: Option<i32>,
    pub restaurant_id: Option<i32>,
    pub pizza_id: Option<i32>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct RestaurantPizzaCreated {
    /// Unique identifier for the offer
    pub id: i32,
    /// Whole-unit price the restaurant charges
    pub price: i32,
    pub restaurant_id: i32,
    pub pizza_id: i32,
    pub pizza: PizzaResponse,
    pub restaurant: RestaurantSummary,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorResponse {
    /// Error message
    pub error: String,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ApiErrorsResponse {
    /// Error messages
    pub errors: Vec<String>,
}

impl From<Restaurant> for RestaurantSummary {
    fn from(restaurant: Restaurant) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
        }
    }
}

impl From<Pizza> for PizzaResponse {
    fn from(pizza: Pizza) -> Self {
        Self {
            id: pizza.id,
            name: pizza.name,
            ingredients: pizza.ingredients,
        }
    }
}

impl From<(RestaurantPizza, Pizza)> for RestaurantPizzaWithPizza {
    fn from((offer, pizza): (RestaurantPizza, Pizza)) -> Self {
        Self {
            id: offer.id,
            price: offer.price,
            restaurant_id: offer.restaurant_id,
            pizza_id: offer.pizza_id,
            pizza: pizza.into(),
        }
    }
}

impl RestaurantDetail {
    pub fn new(restaurant: Restaurant, offers: Vec<(RestaurantPizza, Pizza)>) -> Self {
        Self {
            id: restaurant.id,
            name: restaurant.name,
            address: restaurant.address,
            restaurant_pizzas: offers.into_iter().map(Into::into).collect(),
        }
    }
}
