mod common;

use std::sync::Arc;

use cafe_ordering::gateway::Gateway;
use cafe_ordering::lifecycle::CafeApp;
use cafe_ordering::model::FoodItem;
use cafe_ordering::render;
use common::StubGateway;

/// Full end-to-end flow through the application orchestrator.
#[tokio::test]
async fn test_full_ordering_flow() {
    let stub = Arc::new(StubGateway::with_items(vec![
        FoodItem::new("1", "Pizza", 5.5),
        FoodItem::new("2", "Cola", 1.5),
    ]));
    let gateway: Arc<dyn Gateway> = stub.clone();
    let app = CafeApp::new(gateway);

    // The mounted view renders the loaded menu
    let snapshot = app.ordering.snapshot().await.unwrap();
    let screen = render::screen(&snapshot);
    assert!(screen.starts_with("Student Cafe"));
    assert!(screen.contains("Pizza - $5.50"));
    assert!(screen.contains("Cola - $1.50"));

    // Order the first menu entry
    let first = snapshot.menu.first().cloned().expect("Menu is not empty");
    app.ordering.add_to_cart(first).await.unwrap();
    app.ordering.place_order().await.unwrap();

    let snapshot = app.ordering.snapshot().await.unwrap();
    let screen = render::screen(&snapshot);
    assert!(screen.contains("Order 42 placed successfully!"));
    assert!(snapshot.cart.is_empty());
    assert_eq!(stub.order_calls(), 1);

    // Graceful shutdown
    app.shutdown().await.expect("Failed to shutdown app");
}

/// Concurrent cart additions land one at a time on the same state.
#[tokio::test]
async fn test_concurrent_cart_additions() {
    let stub = Arc::new(StubGateway::with_items(vec![FoodItem::new(
        "1", "Pizza", 5.5,
    )]));
    let gateway: Arc<dyn Gateway> = stub.clone();
    let app = CafeApp::new(gateway);

    let mut handles = vec![];
    for _i in 0..10 {
        let ordering = app.ordering.clone();
        let handle = tokio::spawn(async move {
            ordering.add_to_cart(FoodItem::new("1", "Pizza", 5.5)).await
        });
        handles.push(handle);
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let snapshot = app.ordering.snapshot().await.unwrap();
    assert_eq!(snapshot.cart.len(), 10, "Every addition became one entry");

    app.shutdown().await.unwrap();
}
