//! Macro-generated test suite for `OrderRepository` contract validation.
//!
//! The `order_repository_tests!` macro generates a test module that validates
//! any `OrderRepository` / `CustomerRepository` pair against the contract the
//! order service relies on: id assignment, item ownership, the filtered
//! lookups, and the difference between "absent" and "empty".
//!
//! # Usage
//!
//! ```rust,ignore
//! #[macro_use]
//! mod storage_harness;
//!
//! use storage_harness::*;
//!
//! order_repository_tests!({
//!     let orders = InMemoryOrderRepository::new();
//!     let customers = orders.customers().clone();
//!     (orders, customers)
//! });
//! ```
//!
//! # Generated Tests
//!
//! ## CRUD
//! - `test_save_assigns_ids`: order and item ids come from the store
//! - `test_find_by_id_round_trip`: every field survives save then load
//! - `test_find_by_id_unknown`: unknown id is `None`
//! - `test_find_all_empty` / `test_find_all_multiple`
//! - `test_save_persisted_updates_in_place`: no second row
//! - `test_save_replaces_items`: the stored item set follows the order
//! - `test_saved_order_matches_stored_order`: sub-second dates as stored
//! - `test_item_ids_stay_with_their_order`: foreign item ids are replaced
//! - `test_delete_existing` / `test_delete_unknown`
//!
//! ## Lookups
//! - `test_find_by_date_between_is_inclusive`
//! - `test_find_by_date_between_reversed`: `from > to` matches nothing
//! - `test_find_all_by_customer`: known, known-without-orders, unknown
//! - `test_find_by_customer_and_status`: both filters, absent inputs
//! - `test_find_with_items`: items, no items, unknown order
//!
//! ## Concurrency
//! - `test_concurrent_saves`: 10 parallel creates, all distinct ids

/// Generate a repository contract test suite for a storage backend.
///
/// `$factory` must produce `(impl OrderRepository, impl CustomerRepository)`
/// sharing one empty store.
#[macro_export]
macro_rules! order_repository_tests {
    ($factory:expr) => {
        mod order_repository_tests {
            use super::*;
            use std::sync::Arc;

            // ==================================================================
            // CRUD - Create
            // ==================================================================

            #[tokio::test]
            async fn test_save_assigns_ids() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;

                let saved = orders
                    .save(sample_order(&ada, "NEW", day(2024, 5, 1)).with_items(sample_items()))
                    .await
                    .unwrap();

                let id = saved.id.expect("Order id should be assigned");
                assert_count(&saved.items, 2);
                for item in &saved.items {
                    assert!(item.id.is_some(), "Item id should be assigned");
                    assert_eq!(item.order_id, Some(id), "Item should point at its order");
                }
                assert_ne!(saved.items[0].id, saved.items[1].id);
            }

            // ==================================================================
            // CRUD - Read
            // ==================================================================

            #[tokio::test]
            async fn test_find_by_id_round_trip() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let saved = orders
                    .save(sample_order(&ada, "NEW", day(2024, 5, 1)).with_items(sample_items()))
                    .await
                    .unwrap();

                let loaded = orders
                    .find_by_id(saved.id.unwrap())
                    .await
                    .unwrap()
                    .expect("Order should exist after save");

                assert_eq!(loaded.id, saved.id);
                assert_eq!(loaded.customer, ada);
                assert_eq!(loaded.status, "NEW");
                assert_eq!(loaded.order_date, day(2024, 5, 1));
                assert_eq!(loaded.items, saved.items);
                assert_eq!(loaded.total(), Decimal::new(8948, 2));
            }

            #[tokio::test]
            async fn test_find_by_id_unknown() {
                let (orders, _customers) = $factory;

                let result = orders.find_by_id(424_242).await.unwrap();
                assert!(result.is_none(), "Unknown id should be None");
            }

            #[tokio::test]
            async fn test_find_all_empty() {
                let (orders, _customers) = $factory;

                let all = orders.find_all().await.unwrap();
                assert!(all.is_empty(), "Empty store should list nothing");
            }

            #[tokio::test]
            async fn test_find_all_multiple() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let alan = seed_customer(&customers, "Alan").await;

                let mut expected = Vec::new();
                for (customer, status) in [(&ada, "NEW"), (&alan, "NEW"), (&ada, "SHIPPED")] {
                    let saved = orders
                        .save(sample_order(customer, status, day(2024, 5, 1)))
                        .await
                        .unwrap();
                    expected.push(saved.id.unwrap());
                }

                let all = orders.find_all().await.unwrap();
                assert_count(&all, 3);
                for id in &expected {
                    assert!(
                        all.iter().any(|o| o.id == Some(*id)),
                        "Listed orders should contain id {}",
                        id
                    );
                }
            }

            // ==================================================================
            // CRUD - Update
            // ==================================================================

            #[tokio::test]
            async fn test_save_persisted_updates_in_place() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let mut saved = orders
                    .save(sample_order(&ada, "NEW", day(2024, 5, 1)))
                    .await
                    .unwrap();
                let id = saved.id;

                saved.status = "SHIPPED".to_string();
                let updated = orders.save(saved).await.unwrap();

                assert_eq!(updated.id, id);
                let all = orders.find_all().await.unwrap();
                assert_count(&all, 1);
                assert_eq!(all[0].status, "SHIPPED");
            }

            #[tokio::test]
            async fn test_save_replaces_items() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let mut saved = orders
                    .save(sample_order(&ada, "NEW", day(2024, 5, 1)).with_items(sample_items()))
                    .await
                    .unwrap();

                saved.items = vec![OrderItem::new(2001, 5, Decimal::new(250, 2))];
                let updated = orders.save(saved).await.unwrap();

                let items = orders
                    .find_by_id_with_order_items(updated.id.unwrap())
                    .await
                    .unwrap()
                    .unwrap();
                assert_count(&items, 1);
                assert_eq!(items[0].product_id, 2001);
                assert_eq!(items[0].quantity, 5);
                assert_eq!(items[0].order_id, updated.id);
            }

            #[tokio::test]
            async fn test_saved_order_matches_stored_order() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let date = with_nanos(day(2024, 5, 1), 123_456_789);

                let saved = orders
                    .save(sample_order(&ada, "NEW", date).with_items(sample_items()))
                    .await
                    .unwrap();
                let loaded = orders.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
                assert_eq!(loaded, saved);

                let mut changed = saved.clone();
                changed.order_date = with_nanos(day(2024, 5, 2), 987_654_321);
                let resaved = orders.save(changed).await.unwrap();
                let reloaded = orders.find_by_id(saved.id.unwrap()).await.unwrap().unwrap();
                assert_eq!(reloaded, resaved);
            }

            #[tokio::test]
            async fn test_item_ids_stay_with_their_order() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let first = orders
                    .save(sample_order(&ada, "NEW", day(2024, 5, 1)).with_items(sample_items()))
                    .await
                    .unwrap();
                let mut second = orders
                    .save(sample_order(&ada, "NEW", day(2024, 5, 2)))
                    .await
                    .unwrap();

                // One id owned by another order, one the store never issued
                let mut foreign = OrderItem::new(3001, 1, Decimal::ONE);
                foreign.id = first.items[0].id;
                let mut unissued = OrderItem::new(3002, 1, Decimal::ONE);
                unissued.id = Some(10_000);
                second.items = vec![foreign, unissued];
                let second = orders.save(second).await.unwrap();

                let first_ids: Vec<_> = first.items.iter().map(|i| i.id).collect();
                for item in &second.items {
                    assert!(!first_ids.contains(&item.id), "Item id taken from another order");
                    assert_ne!(item.id, Some(10_000), "Item id not issued by the store");
                }
                let first_items = orders
                    .find_by_id_with_order_items(first.id.unwrap())
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(first_items, first.items);

                // Ids the order owns are kept on a re-save
                let kept = orders.save(second.clone()).await.unwrap();
                assert_eq!(kept.items, second.items);

                // The store can still issue ids afterwards
                let mut all_ids: Vec<_> = first.items.iter().chain(&kept.items).map(|i| i.id).collect();
                for date in [day(2024, 5, 3), day(2024, 5, 4)] {
                    let more = orders
                        .save(
                            sample_order(&ada, "NEW", date)
                                .with_items(vec![OrderItem::new(4001, 1, Decimal::ONE)]),
                        )
                        .await
                        .unwrap();
                    all_ids.extend(more.items.iter().map(|i| i.id));
                }
                let count = all_ids.len();
                all_ids.sort_unstable();
                all_ids.dedup();
                assert_eq!(all_ids.len(), count, "Item ids should be unique");
            }

            // ==================================================================
            // CRUD - Delete
            // ==================================================================

            #[tokio::test]
            async fn test_delete_existing() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let saved = orders
                    .save(sample_order(&ada, "NEW", day(2024, 5, 1)).with_items(sample_items()))
                    .await
                    .unwrap();
                let id = saved.id.unwrap();

                orders.delete_by_id(id).await.unwrap();

                assert!(orders.find_by_id(id).await.unwrap().is_none());
                assert!(orders.find_by_id_with_order_items(id).await.unwrap().is_none());
            }

            #[tokio::test]
            async fn test_delete_unknown() {
                let (orders, _customers) = $factory;

                let result = orders.delete_by_id(424_242).await;
                assert!(result.is_ok(), "Deleting an unknown id should be a no-op");
            }

            // ==================================================================
            // Lookups
            // ==================================================================

            #[tokio::test]
            async fn test_find_by_date_between_is_inclusive() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                for date in [day(2024, 4, 30), day(2024, 5, 1), day(2024, 5, 31), day(2024, 6, 1)] {
                    orders.save(sample_order(&ada, "NEW", date)).await.unwrap();
                }

                let may = orders
                    .find_by_date_between(day(2024, 5, 1), day(2024, 5, 31))
                    .await
                    .unwrap()
                    .unwrap_or_default();
                assert_count(&may, 2);
                assert!(may.iter().all(|o| o.order_date >= day(2024, 5, 1)
                    && o.order_date <= day(2024, 5, 31)));

                let none = orders
                    .find_by_date_between(day(2023, 1, 1), day(2023, 12, 31))
                    .await
                    .unwrap()
                    .unwrap_or_default();
                assert!(none.is_empty());
            }

            #[tokio::test]
            async fn test_find_by_date_between_reversed() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                orders.save(sample_order(&ada, "NEW", day(2024, 5, 15))).await.unwrap();

                let reversed = orders
                    .find_by_date_between(day(2024, 5, 31), day(2024, 5, 1))
                    .await
                    .unwrap()
                    .unwrap_or_default();
                assert!(reversed.is_empty(), "A reversed range should match nothing");
            }

            #[tokio::test]
            async fn test_find_all_by_customer() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let alan = seed_customer(&customers, "Alan").await;
                let grace = seed_customer(&customers, "Grace").await;
                orders.save(sample_order(&ada, "NEW", day(2024, 5, 1))).await.unwrap();
                orders.save(sample_order(&ada, "SHIPPED", day(2024, 5, 2))).await.unwrap();
                orders.save(sample_order(&alan, "NEW", day(2024, 5, 3))).await.unwrap();

                let ada_orders = orders
                    .find_all_order_by_customer_id(ada.id.unwrap())
                    .await
                    .unwrap()
                    .expect("Known customer should not be absent");
                assert_count(&ada_orders, 2);
                assert!(ada_orders.iter().all(|o| o.customer_id() == ada.id));

                let grace_orders = orders
                    .find_all_order_by_customer_id(grace.id.unwrap())
                    .await
                    .unwrap()
                    .expect("Customer without orders should be empty, not absent");
                assert!(grace_orders.is_empty());

                let unknown = orders.find_all_order_by_customer_id(424_242).await.unwrap();
                assert!(unknown.is_none(), "Unknown customer should be absent");
            }

            #[tokio::test]
            async fn test_find_by_customer_and_status() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let alan = seed_customer(&customers, "Alan").await;
                orders.save(sample_order(&ada, "NEW", day(2024, 5, 1))).await.unwrap();
                orders.save(sample_order(&ada, "SHIPPED", day(2024, 5, 2))).await.unwrap();
                orders.save(sample_order(&alan, "SHIPPED", day(2024, 5, 3))).await.unwrap();

                let shipped = orders
                    .find_by_customer_and_status(ada.id, Some("SHIPPED"))
                    .await
                    .unwrap()
                    .unwrap_or_default();
                assert_count(&shipped, 1);
                assert_eq!(shipped[0].status, "SHIPPED");
                assert_eq!(shipped[0].customer_id(), ada.id);

                let cancelled = orders
                    .find_by_customer_and_status(ada.id, Some("CANCELLED"))
                    .await
                    .unwrap()
                    .unwrap_or_default();
                assert!(cancelled.is_empty());

                let no_customer = orders
                    .find_by_customer_and_status(None, Some("SHIPPED"))
                    .await
                    .unwrap()
                    .unwrap_or_default();
                assert!(no_customer.is_empty(), "Absent customer should match nothing");

                let no_status = orders
                    .find_by_customer_and_status(ada.id, None)
                    .await
                    .unwrap()
                    .unwrap_or_default();
                assert!(no_status.is_empty(), "Absent status should match nothing");
            }

            #[tokio::test]
            async fn test_find_with_items() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let with_items = orders
                    .save(sample_order(&ada, "NEW", day(2024, 5, 1)).with_items(sample_items()))
                    .await
                    .unwrap();
                let without_items = orders
                    .save(sample_order(&ada, "NEW", day(2024, 5, 2)))
                    .await
                    .unwrap();

                let items = orders
                    .find_by_id_with_order_items(with_items.id.unwrap())
                    .await
                    .unwrap()
                    .unwrap();
                assert_eq!(items, with_items.items);

                let empty = orders
                    .find_by_id_with_order_items(without_items.id.unwrap())
                    .await
                    .unwrap()
                    .expect("Order without items should be empty, not absent");
                assert!(empty.is_empty());

                let unknown = orders.find_by_id_with_order_items(424_242).await.unwrap();
                assert!(unknown.is_none(), "Unknown order should be absent");
            }

            // ==================================================================
            // Concurrency
            // ==================================================================

            #[tokio::test]
            async fn test_concurrent_saves() {
                let (orders, customers) = $factory;
                let ada = seed_customer(&customers, "Ada").await;
                let orders = Arc::new(orders);

                let mut handles = Vec::new();
                for i in 0..10u32 {
                    let orders = Arc::clone(&orders);
                    let order = sample_order(&ada, "NEW", day(2024, 5, 1 + i))
                        .with_items(sample_items());
                    handles.push(tokio::spawn(async move { orders.save(order).await }));
                }

                let mut ids = Vec::new();
                for handle in handles {
                    let saved = handle.await.unwrap().unwrap();
                    ids.push(saved.id.unwrap());
                }
                ids.sort_unstable();
                ids.dedup();
                assert_count(&ids, 10);
                assert_count(&orders.find_all().await.unwrap(), 10);
            }
        }
    };
}
