use diesel::prelude::*;
use tracing::info;

use crate::models::{NewPizza, NewRestaurant, NewRestaurantPizza, Pizza, Restaurant};
use crate::schema::{pizzas, restaurant_pizzas, restaurants};

/// Replace the store contents with a small demo dataset.
pub fn run(conn: &mut SqliteConnection) -> QueryResult<()> {
    conn.transaction::<_, diesel::result::Error, _>(|conn| {
        diesel::delete(restaurant_pizzas::table).execute(conn)?;
        diesel::delete(restaurants::table).execute(conn)?;
        diesel::delete(pizzas::table).execute(conn)?;

        let shops: Vec<Restaurant> = diesel::insert_into(restaurants::table)
            .values(&vec![
                NewRestaurant {
                    name: "Karen's Pizza Shack".to_string(),
                    address: Some("12 Mott St".to_string()),
                },
                NewRestaurant {
                    name: "Sanjay's Pizza".to_string(),
                    address: Some("702 Arch Rd".to_string()),
                },
                NewRestaurant {
                    name: "Kiki's Pizza".to_string(),
                    address: None,
                },
            ])
            .returning(Restaurant::as_returning())
            .get_results(conn)?;

        let menu: Vec<Pizza> = diesel::insert_into(pizzas::table)
            .values(&vec![
                NewPizza {
                    name: "Emma".to_string(),
                    ingredients: "Dough, Tomato Sauce, Cheese".to_string(),
                },
                NewPizza {
                    name: "Geri".to_string(),
                    ingredients: "Dough, Tomato Sauce, Cheese, Pepperoni".to_string(),
                },
                NewPizza {
                    name: "Melanie".to_string(),
                    ingredients: "Dough, Sauce, Ricotta, Red peppers, Mustard".to_string(),
                },
            ])
            .returning(Pizza::as_returning())
            .get_results(conn)?;

        let offers = vec![
            NewRestaurantPizza {
                price: 12,
                restaurant_id: shops[0].id,
                pizza_id: menu[0].id,
            },
            NewRestaurantPizza {
                price: 15,
                restaurant_id: shops[0].id,
                pizza_id: menu[1].id,
            },
            NewRestaurantPizza {
                price: 9,
                restaurant_id: shops[1].id,
                pizza_id: menu[0].id,
            },
            NewRestaurantPizza {
                price: 22,
                restaurant_id: shops[2].id,
                pizza_id: menu[2].id,
            },
        ];
        diesel::insert_into(restaurant_pizzas::table)
            .values(&offers)
            .execute(conn)?;

        info!(
            restaurants = shops.len(),
            pizzas = menu.len(),
            offers = offers.len(),
            "seeded demo data"
        );
        Ok(())
    })
}
