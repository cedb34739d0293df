use cafe_orders::clients::ActorClient;
use cafe_orders::config::CafeConfig;
use cafe_orders::framework::InMemoryRepository;
use cafe_orders::inventory_actor::InventoryError;
use cafe_orders::lifecycle::CafeSystem;
use cafe_orders::menu_actor::MenuError;
use cafe_orders::model::{
    InventoryItem, InventoryItemUpdate, LineItem, MenuItem, MenuItemUpdate, Order, OrderCreate,
    OrderId, OrderStatus, OrderUpdate,
};
use cafe_orders::order_actor::OrderError;

struct Cafe {
    system: CafeSystem,
    inventory: InMemoryRepository<InventoryItem>,
    orders: InMemoryRepository<Order>,
}

fn open_cafe(menu: Vec<MenuItem>, stock: Vec<InventoryItem>) -> Cafe {
    let inventory = InMemoryRepository::with_records(stock);
    let orders = InMemoryRepository::new();
    let system = CafeSystem::new(
        InMemoryRepository::with_records(menu),
        inventory.clone(),
        orders.clone(),
    )
    .unwrap();
    Cafe {
        system,
        inventory,
        orders,
    }
}

fn milk(quantity: f64) -> InventoryItem {
    InventoryItem::new("milk", "Whole milk", quantity, "ml")
}

fn beans(quantity: f64) -> InventoryItem {
    InventoryItem::new("beans", "Espresso beans", quantity, "g")
}

fn latte() -> MenuItem {
    MenuItem::new("latte", "Latte", 3.5).with_ingredient("milk", 2.0)
}

fn lattes(n: u32) -> OrderCreate {
    OrderCreate::new("Ada", vec![LineItem::new("latte", n)])
}

impl Cafe {
    async fn stock(&self, id: &str) -> f64 {
        self.system
            .inventory_client
            .get_item(id.into())
            .await
            .unwrap()
            .quantity
    }
}

#[tokio::test]
async fn second_order_for_milk_is_refused() {
    let cafe = open_cafe(vec![latte()], vec![milk(10.0)]);

    let first = cafe.system.order_client.create_order(lattes(3)).await.unwrap();
    assert_eq!(first.id, OrderId(1));
    assert_eq!(first.status, OrderStatus::Open);
    assert_eq!(cafe.stock("milk").await, 4.0);

    let err = cafe.system.order_client.create_order(lattes(3)).await.unwrap_err();
    assert_eq!(err, OrderError::InsufficientStock("milk".into()));
    assert_eq!(cafe.stock("milk").await, 4.0);
    assert_eq!(cafe.orders.snapshot().len(), 1);

    cafe.system.shutdown().await.unwrap();
}

#[tokio::test]
async fn over_demand_leaves_every_collection_untouched() {
    let mocha = MenuItem::new("mocha", "Mocha", 4.0)
        .with_ingredient("beans", 1.0)
        .with_ingredient("milk", 3.0);
    let cafe = open_cafe(vec![mocha], vec![beans(100.0), milk(5.0)]);
    let before = cafe.inventory.snapshot();

    let order = OrderCreate::new("Ada", vec![LineItem::new("mocha", 2)]);
    let err = cafe.system.order_client.create_order(order).await.unwrap_err();

    assert_eq!(err, OrderError::InsufficientStock("milk".into()));
    assert_eq!(cafe.inventory.snapshot(), before);
    assert!(cafe.orders.snapshot().is_empty());
}

#[tokio::test]
async fn shared_ingredients_are_checked_against_their_sum() {
    let cortado = MenuItem::new("cortado", "Cortado", 3.0).with_ingredient("milk", 3.0);
    let cafe = open_cafe(vec![latte(), cortado], vec![milk(4.0)]);
    let both = || {
        OrderCreate::new(
            "Ada",
            vec![LineItem::new("latte", 1), LineItem::new("cortado", 1)],
        )
    };

    let err = cafe.system.order_client.create_order(both()).await.unwrap_err();
    assert_eq!(err, OrderError::InsufficientStock("milk".into()));
    assert_eq!(cafe.stock("milk").await, 4.0);

    cafe.system.inventory_client.adjust("milk".into(), 1.0).await.unwrap();
    cafe.system.order_client.create_order(both()).await.unwrap();
    assert_eq!(cafe.stock("milk").await, 0.0);
}

#[tokio::test]
async fn delete_returns_what_create_reserved() {
    let mocha = MenuItem::new("mocha", "Mocha", 4.0)
        .with_ingredient("beans", 1.5)
        .with_ingredient("milk", 3.0);
    let cafe = open_cafe(vec![latte(), mocha], vec![beans(20.0), milk(30.0)]);
    let before = cafe.inventory.snapshot();

    let order = OrderCreate::new(
        "Grace",
        vec![LineItem::new("mocha", 2), LineItem::new("latte", 4)],
    );
    let order = cafe.system.order_client.create_order(order).await.unwrap();
    assert_eq!(cafe.stock("beans").await, 17.0);
    assert_eq!(cafe.stock("milk").await, 16.0);

    cafe.system.order_client.delete_order(order.id).await.unwrap();
    assert_eq!(cafe.inventory.snapshot(), before);
    assert!(cafe.orders.snapshot().is_empty());
}

#[tokio::test]
async fn closed_orders_cannot_change() {
    let cafe = open_cafe(vec![latte()], vec![milk(10.0)]);
    let orders = &cafe.system.order_client;
    let order = orders.create_order(lattes(2)).await.unwrap();

    orders.close_order(order.id).await.unwrap();
    let closed = orders.get_order(order.id).await.unwrap();
    assert_eq!(closed.status, OrderStatus::Closed);

    let update = OrderUpdate {
        customer_name: Some("Grace".into()),
        items: Some(vec![LineItem::new("latte", 1)]),
    };
    let err = orders.update_order(order.id, update).await.unwrap_err();
    assert_eq!(err, OrderError::OrderClosed("order1".into()));
    assert_eq!(orders.get_order(order.id).await.unwrap(), closed);
    assert_eq!(cafe.stock("milk").await, 6.0);

    let err = orders.close_order(order.id).await.unwrap_err();
    assert_eq!(err, OrderError::AlreadyClosed("order1".into()));

    // Closed orders still give their reservation back when deleted.
    orders.delete_order(order.id).await.unwrap();
    assert_eq!(cafe.stock("milk").await, 10.0);
}

#[tokio::test]
async fn unknown_orders_are_not_found_and_nothing_is_written() {
    let cafe = open_cafe(vec![latte()], vec![milk(10.0)]);
    let orders = &cafe.system.order_client;
    let missing = OrderId(99);

    assert_eq!(
        orders.delete_order(missing).await,
        Err(OrderError::NotFound("order99".into()))
    );
    assert_eq!(
        orders.close_order(missing).await,
        Err(OrderError::NotFound("order99".into()))
    );
    assert_eq!(
        orders.update_order(missing, OrderUpdate::default()).await,
        Err(OrderError::NotFound("order99".into()))
    );
    assert_eq!(orders.get(missing).await, Ok(None));
    assert!(cafe.orders.snapshot().is_empty());
    assert_eq!(cafe.stock("milk").await, 10.0);
}

#[tokio::test]
async fn unknown_products_and_ingredients_are_rejected() {
    let chai = MenuItem::new("chai", "Chai", 3.0).with_ingredient("cardamom", 1.0);
    let cafe = open_cafe(vec![latte(), chai], vec![milk(10.0)]);
    let orders = &cafe.system.order_client;

    let order = OrderCreate::new(
        "Ada",
        vec![LineItem::new("latte", 1), LineItem::new("flat-white", 1)],
    );
    assert_eq!(
        orders.create_order(order).await,
        Err(OrderError::ProductNotFound("flat-white".into()))
    );

    let order = OrderCreate::new(
        "Ada",
        vec![LineItem::new("latte", 1), LineItem::new("chai", 1)],
    );
    assert_eq!(
        orders.create_order(order).await,
        Err(OrderError::IngredientNotFound("cardamom".into()))
    );

    assert_eq!(cafe.stock("milk").await, 10.0);
    assert!(cafe.orders.snapshot().is_empty());
}

#[tokio::test]
async fn invalid_orders_never_touch_stock() {
    let cafe = open_cafe(vec![latte()], vec![milk(10.0)]);
    let orders = &cafe.system.order_client;

    let err = orders
        .create_order(OrderCreate::new("", vec![LineItem::new("latte", 1)]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    let err = orders
        .create_order(OrderCreate::new("Ada", vec![]))
        .await
        .unwrap_err();
    assert!(matches!(err, OrderError::ValidationError(_)));

    assert_eq!(cafe.stock("milk").await, 10.0);
}

#[tokio::test]
async fn update_moves_only_the_difference() {
    let cafe = open_cafe(vec![latte()], vec![milk(10.0)]);
    let orders = &cafe.system.order_client;
    let order = orders.create_order(lattes(3)).await.unwrap();
    assert_eq!(cafe.stock("milk").await, 4.0);

    // 4 on hand plus 6 reserved covers exactly five lattes.
    let update = OrderUpdate {
        customer_name: None,
        items: Some(vec![LineItem::new("latte", 5)]),
    };
    let updated = orders.update_order(order.id, update).await.unwrap();
    assert_eq!(updated.items, vec![LineItem::new("latte", 5)]);
    assert_eq!(cafe.stock("milk").await, 0.0);

    let update = OrderUpdate {
        customer_name: Some("Grace".into()),
        items: Some(vec![LineItem::new("latte", 6)]),
    };
    let err = orders.update_order(order.id, update).await.unwrap_err();
    assert_eq!(err, OrderError::InsufficientStock("milk".into()));
    assert_eq!(cafe.stock("milk").await, 0.0);
    let kept = orders.get_order(order.id).await.unwrap();
    assert_eq!(kept.items, vec![LineItem::new("latte", 5)]);
    assert_eq!(kept.customer_name, "Ada");

    let update = OrderUpdate {
        customer_name: Some("Grace".into()),
        items: Some(vec![]),
    };
    let renamed = orders.update_order(order.id, update).await.unwrap();
    assert_eq!(renamed.customer_name, "Grace");
    assert_eq!(renamed.items, vec![LineItem::new("latte", 5)]);
    assert!(renamed.created_at >= updated.created_at);
    assert_eq!(cafe.stock("milk").await, 0.0);

    let update = OrderUpdate {
        customer_name: None,
        items: Some(vec![LineItem::new("latte", 1)]),
    };
    orders.update_order(order.id, update).await.unwrap();
    assert_eq!(cafe.stock("milk").await, 8.0);
}

#[tokio::test]
async fn concurrent_orders_never_over_allocate() {
    let cafe = open_cafe(vec![latte()], vec![milk(10.0)]);

    let tasks: Vec<_> = (0..12)
        .map(|_| {
            let orders = cafe.system.order_client.clone();
            tokio::spawn(async move { orders.create_order(lattes(1)).await })
        })
        .collect();

    let mut placed = 0;
    for task in tasks {
        match task.await.unwrap() {
            Ok(_) => placed += 1,
            Err(e) => assert_eq!(e, OrderError::InsufficientStock("milk".into())),
        }
    }

    assert_eq!(placed, 5);
    assert_eq!(cafe.stock("milk").await, 0.0);
    assert_eq!(cafe.orders.snapshot().len(), 5);
}

#[tokio::test]
async fn failed_order_writes_give_the_stock_back() {
    let cafe = open_cafe(vec![latte()], vec![milk(10.0)]);
    let orders = &cafe.system.order_client;
    let order = orders.create_order(lattes(2)).await.unwrap();
    assert_eq!(cafe.stock("milk").await, 6.0);

    cafe.orders.fail_writes(true);

    let err = orders.create_order(lattes(1)).await.unwrap_err();
    assert!(matches!(err, OrderError::Storage(_)));
    assert_eq!(cafe.stock("milk").await, 6.0);

    let update = OrderUpdate {
        customer_name: None,
        items: Some(vec![LineItem::new("latte", 4)]),
    };
    let err = orders.update_order(order.id, update).await.unwrap_err();
    assert!(matches!(err, OrderError::Storage(_)));
    assert_eq!(cafe.stock("milk").await, 6.0);

    let err = orders.delete_order(order.id).await.unwrap_err();
    assert!(matches!(err, OrderError::Storage(_)));
    assert_eq!(cafe.stock("milk").await, 6.0);

    cafe.orders.fail_writes(false);
    assert_eq!(orders.list_orders().await.unwrap(), vec![order.clone()]);
    orders.delete_order(order.id).await.unwrap();
    assert_eq!(cafe.stock("milk").await, 10.0);
}

#[tokio::test]
async fn stock_checks_are_reads_even_when_the_ledger_cannot_be_written() {
    let cafe = open_cafe(vec![latte()], vec![milk(10.0)]);
    let inventory = &cafe.system.inventory_client;

    cafe.inventory.fail_writes(true);
    assert_eq!(inventory.check_stock("milk".into()).await, Ok(10.0));

    let err = inventory.adjust("milk".into(), -1.0).await.unwrap_err();
    assert!(matches!(err, InventoryError::Storage(_)));
    assert_eq!(inventory.check_stock("milk".into()).await, Ok(10.0));
    assert_eq!(cafe.inventory.snapshot(), vec![milk(10.0)]);
}

#[tokio::test]
async fn deleting_an_order_for_a_removed_product_keeps_it() {
    let cafe = open_cafe(vec![latte()], vec![milk(10.0)]);
    let order = cafe.system.order_client.create_order(lattes(1)).await.unwrap();

    cafe.system.menu_client.delete_item("latte".into()).await.unwrap();

    let err = cafe.system.order_client.delete_order(order.id).await.unwrap_err();
    assert_eq!(err, OrderError::ProductNotFound("latte".into()));
    assert_eq!(cafe.orders.snapshot(), vec![order]);
    assert_eq!(cafe.stock("milk").await, 8.0);
}

#[tokio::test]
async fn catalog_and_ledger_administration() {
    let cafe = open_cafe(vec![latte()], vec![milk(10.0)]);
    let menu = &cafe.system.menu_client;
    let inventory = &cafe.system.inventory_client;

    assert_eq!(
        menu.add_item(latte().into()).await,
        Err(MenuError::DuplicateId("latte".into()))
    );
    let update = MenuItemUpdate {
        price: Some(4.0),
        ..Default::default()
    };
    assert_eq!(menu.update_item("latte".into(), update).await.unwrap().price, 4.0);
    assert_eq!(
        menu.delete_item("mocha".into()).await,
        Err(MenuError::NotFound("mocha".into()))
    );

    inventory.add_item(beans(50.0).into()).await.unwrap();
    assert_eq!(
        inventory.adjust("beans".into(), -60.0).await,
        Err(InventoryError::InsufficientStock {
            ingredient: "beans".into(),
            requested: 60.0,
            available: 50.0,
        })
    );
    assert_eq!(inventory.check_stock("beans".into()).await, Ok(50.0));
    assert_eq!(
        inventory.adjust("sugar".into(), 1.0).await,
        Err(InventoryError::NotFound("sugar".into()))
    );

    let update = InventoryItemUpdate {
        quantity: Some(-1.0),
        ..Default::default()
    };
    assert!(matches!(
        inventory.update_item("milk".into(), update).await,
        Err(InventoryError::ValidationError(_))
    ));

    inventory
        .replace_all(vec![milk(3.0), beans(1.0)])
        .await
        .unwrap();
    assert_eq!(inventory.list_all().await.unwrap().len(), 2);
    assert_eq!(cafe.stock("milk").await, 3.0);
    assert!(matches!(
        inventory.replace_all(vec![milk(1.0), milk(2.0)]).await,
        Err(InventoryError::DuplicateId(_))
    ));

    menu.replace_all(vec![]).await.unwrap();
    assert!(menu.list_all().await.unwrap().is_empty());
    assert_eq!(
        cafe.system.order_client.create_order(lattes(1)).await,
        Err(OrderError::ProductNotFound("latte".into()))
    );
}

#[tokio::test]
async fn orders_and_stock_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = CafeConfig::new(dir.path().join("data"));

    let system = CafeSystem::open(&config).unwrap();
    system.inventory_client.add_item(milk(10.0).into()).await.unwrap();
    system.menu_client.add_item(latte().into()).await.unwrap();
    let first = system.order_client.create_order(lattes(2)).await.unwrap();
    system.order_client.close_order(first.id).await.unwrap();
    system.shutdown().await.unwrap();

    let saved = std::fs::read_to_string(config.orders_path()).unwrap();
    assert!(saved.contains("\"order_id\": \"order1\""));
    assert!(saved.contains("\"status\": \"closed\""));

    let system = CafeSystem::open(&config).unwrap();
    let reloaded = system.order_client.get_order(first.id).await.unwrap();
    assert_eq!(reloaded.status, OrderStatus::Closed);
    assert_eq!(reloaded.created_at, first.created_at);

    let second = system.order_client.create_order(lattes(1)).await.unwrap();
    assert_eq!(second.id.to_string(), "order2");
    assert_eq!(
        system.inventory_client.get_item("milk".into()).await.unwrap().quantity,
        4.0
    );
    system.shutdown().await.unwrap();
}
