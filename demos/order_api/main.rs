//! Order API Example
//!
//! Serves the order REST routes using the backend named in a YAML config.
//!
//! ```sh
//! cargo run --example order_api -- config/orders.yaml
//! DATABASE_URL=postgres://... cargo run --example order_api --features postgres -- config/orders.yaml
//! ```
//!
//! With the in-memory backend the store starts with two customers and one
//! order so the routes have something to return.

use eshop::prelude::*;

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let config = match std::env::args().nth(1) {
        Some(path) => ServiceConfig::from_yaml_file(&path)?,
        None => ServiceConfig::default_config(),
    }
    .with_env_overrides();
    config.validate()?;

    let builder = match config.storage.backend {
        StorageBackend::InMemory => {
            let orders = InMemoryOrderRepository::new();
            populate_test_data(&orders).await?;
            let customers = orders.customers().clone();
            ServerBuilder::new().with_repositories(orders, customers)
        }
        StorageBackend::Postgres => ServerBuilder::new().with_config(&config).await?,
    };

    println!("🚀 Starting eshop-orders on http://{}", config.server.addr());
    println!("    GET    /orders                         - List all orders");
    println!("    POST   /orders                         - Create an order");
    println!("    GET    /orders/{{id}}                    - Get an order");
    println!("    PUT    /orders/{{id}}                    - Update the fields sent");
    println!("    DELETE /orders/{{id}}                    - Delete an order");
    println!("    GET    /orders/{{id}}/items              - Line items of an order");
    println!("    GET    /orders/search/date?from=&to=   - Orders in a date range");
    println!("    GET    /customers/{{id}}/orders?status=  - Orders of a customer");

    builder.serve(&config.server.addr()).await
}

/// Populate the in-memory store with test data
async fn populate_test_data(orders: &InMemoryOrderRepository) -> Result<()> {
    let ada = orders
        .customers()
        .save(Customer::new("Ada Lovelace", Some("ada@example.com".to_string())))
        .await?;
    orders
        .customers()
        .save(Customer::new("Alan Turing", None))
        .await?;

    let order = Order::new(ada, "NEW", Utc::now()).with_items(vec![
        OrderItem::new(1001, 2, Decimal::new(1999, 2)),
        OrderItem::new(1002, 1, Decimal::new(4950, 2)),
    ]);
    orders.save(order).await?;

    Ok(())
}
