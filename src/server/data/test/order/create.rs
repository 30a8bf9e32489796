use super::*;

/// Tests inserting an order with line snapshots.
///
/// Expected: Ok with a pending order and line totals computed from price × quantity
#[tokio::test]
async fn inserts_pending_order_with_items() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_order_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::user::create_user(db).await?;
    let product = factory::product::ProductFactory::new(db)
        .price(250_00)
        .build()
        .await?;

    let repo = OrderRepository::new(db);
    let (order, items) = repo
        .create(NewOrder {
            order_number: "ORD-20240101-ABC123".to_string(),
            user_id: user.id,
            subtotal: 750_00,
            discount: 0,
            shipping: 300_00,
            total: 1_050_00,
            coupon_code: None,
            customer_name: "Иван".to_string(),
            customer_email: "ivan@example.com".to_string(),
            customer_phone: "+79990000000".to_string(),
            shipping_address: "Москва".to_string(),
            comment: None,
            items: vec![NewOrderItem {
                product_id: product.id,
                product_name: product.name.clone(),
                sku: product.sku.clone(),
                unit_price: product.price,
                quantity: 3,
            }],
        })
        .await?;

    assert_eq!(order.status, OrderStatus::Pending.as_str());
    assert_eq!(items.len(), 1);
    assert_eq!(items[0].line_total, 750_00);
    assert_eq!(items[0].product_id, Some(product.id));

    assert!(repo.order_number_exists("ORD-20240101-ABC123").await?);
    assert!(!repo.order_number_exists("ORD-20240101-ZZZZZZ").await?);

    let (found, found_items) = repo.find_by_id(order.id).await?.unwrap();
    assert_eq!(found.total, 1_050_00);
    assert_eq!(found_items, items);

    Ok(())
}
