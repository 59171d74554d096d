use crate::clients::MenuClient;
use crate::error::ShopError;
use crate::kitchen::{
    shutdown_channel, Chef, ChefContext, DeliveryContext, DeliveryPerson, FloorQueues, OrderError,
    OrderRouter, ShutdownSender,
};
use crate::lifecycle::ShopConfig;
use crate::menu::{self, CaloriePartition, CatalogSource, MenuActor, MenuError};
use crate::model::{Address, Dish, FoodOrder, OrderStatus};
use crate::receipt::{publish_receipt, MenuWriter, WriteError};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info, instrument};

/// The running take-out shop.
///
/// `Shop` is responsible for:
/// - **Lifecycle Management**: loading the menu, starting the menu actor and both
///   worker pools, and stopping them again
/// - **Dependency Wiring**: handing the shared queue maps and the receipt writer to
///   every worker
/// - **Order Intake**: numbering and routing orders through its [`OrderRouter`]
///
/// # Example
///
/// ```ignore
/// let shop = Shop::start(&ShopConfig::default(), &source, writer).await;
///
/// let order = shop.place_order(Address::new(2, 3, 14), dishes).await?;
/// order.wait_for(OrderStatus::Delivered).await;
///
/// shop.shutdown().await?;
/// ```
pub struct Shop {
    menu: MenuClient,
    router: OrderRouter,
    orders_in: Arc<FloorQueues>,
    orders_ready_out: Arc<FloorQueues>,
    writer: Arc<dyn MenuWriter>,
    chefs: Vec<Chef>,
    delivery_staff: Vec<DeliveryPerson>,
    shutdown: ShutdownSender,
    menu_handle: JoinHandle<()>,
    /// Task handles for every chef and delivery person
    workers: Vec<JoinHandle<usize>>,
}

impl Shop {
    /// Opens the shop.
    ///
    /// 1. Loads the initial menu from `source`. A failure is logged and the shop opens
    ///    with an empty menu.
    /// 2. Spawns the menu actor.
    /// 3. Spawns one task per chef and per delivery person, all sharing the same
    ///    queue maps and shutdown signal.
    pub async fn start(
        config: &ShopConfig,
        source: &dyn CatalogSource,
        writer: Arc<dyn MenuWriter>,
    ) -> Self {
        // 1. Load the catalog
        let initial = match source.load().await {
            Ok(dishes) => {
                info!(source = %source.describe(), count = dishes.len(), "Catalog loaded");
                dishes
            }
            Err(e) => {
                error!(source = %source.describe(), error = %e, "Catalog load failed, opening with an empty menu");
                Vec::new()
            }
        };

        // 2. Start the menu actor
        let (menu_actor, menu) = MenuActor::new(config.menu_buffer.max(1), initial);
        let menu_handle = tokio::spawn(menu_actor.run());

        // 3. Start both pools with injected context
        let orders_in = Arc::new(FloorQueues::new("inbound"));
        let orders_ready_out = Arc::new(FloorQueues::new("outbound"));
        let (shutdown, token) = shutdown_channel();

        let chefs = config.chef_roster();
        let delivery_staff = config.delivery_roster();

        let chef_ctx = ChefContext {
            orders_in: orders_in.clone(),
            orders_ready_out: orders_ready_out.clone(),
            prep_time: config.prep_time,
        };
        let delivery_ctx = DeliveryContext {
            orders_ready_out: orders_ready_out.clone(),
            delivery_time: config.delivery_time,
            writer: writer.clone(),
        };

        let mut workers = Vec::with_capacity(chefs.len() + delivery_staff.len());
        for chef in &chefs {
            workers.push(tokio::spawn(chef.clone().run(chef_ctx.clone(), token.clone())));
        }
        for person in &delivery_staff {
            workers.push(tokio::spawn(
                person.clone().run(delivery_ctx.clone(), token.clone()),
            ));
        }

        info!(
            chefs = chefs.len(),
            delivery_staff = delivery_staff.len(),
            "Shop open"
        );

        Self {
            menu,
            router: OrderRouter::new(orders_in.clone()),
            orders_in,
            orders_ready_out,
            writer,
            chefs,
            delivery_staff,
            shutdown,
            menu_handle,
            workers,
        }
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Accepts an order and queues it for the kitchen.
    ///
    /// # Errors
    /// [`OrderError::InvalidOrder`] (wrapped in [`ShopError::Order`]) for an empty order.
    pub async fn place_order(
        &self,
        address: Address,
        dishes: Vec<Dish>,
    ) -> Result<Arc<FoodOrder>, ShopError> {
        Ok(self.router.route(address, dishes).await?)
    }

    /// Cancels an order that has not been prepared yet.
    ///
    /// A `Placed` order is also taken out of its inbound queue. An order already in
    /// preparation is dropped by its chef once preparation ends.
    #[instrument(skip(self, order), fields(ack_id = %order.ack_id))]
    pub async fn cancel_order(&self, order: &FoodOrder) -> Result<(), OrderError> {
        let previous = order.advance(OrderStatus::Cancelled)?;
        if previous == OrderStatus::Placed {
            self.orders_in.remove(order.floor(), order.ack_id).await;
        }
        info!(from = %previous, "Order cancelled");
        Ok(())
    }

    /// Publishes the receipt for `order` through the shop's writer.
    pub async fn generate_receipt(&self, order: &FoodOrder) -> Result<(), WriteError> {
        publish_receipt(self.writer.as_ref(), order).await
    }

    // =========================================================================
    // Menu
    // =========================================================================

    pub async fn get_menu(&self) -> Result<Vec<Dish>, MenuError> {
        self.menu.list().await
    }

    pub async fn set_new_menu(&self, dishes: Vec<Dish>) -> Result<(), MenuError> {
        self.menu.replace(dishes).await.map(|_| ())
    }

    pub async fn add_menu_item(&self, dish: Dish) -> Result<(), MenuError> {
        self.menu.append(dish).await.map(|_| ())
    }

    pub async fn add_menu_items(&self, dishes: Vec<Dish>) -> Result<(), MenuError> {
        self.menu.append_all(dishes).await.map(|_| ())
    }

    pub async fn vegetarian_menu(&self) -> Result<Vec<Dish>, MenuError> {
        self.menu.vegetarian().await
    }

    pub async fn partition_by_calorie_limit(&self, threshold: u32) -> Result<CaloriePartition, MenuError> {
        self.menu.partition_by_calorie_limit(threshold).await
    }

    /// `list[start..end]`, see [`menu::slice`].
    pub fn slice(list: &[Dish], start: usize, end: usize) -> Result<Vec<Dish>, MenuError> {
        menu::slice(list, start, end)
    }

    // =========================================================================
    // Staff & queues
    // =========================================================================

    pub fn chefs(&self) -> &[Chef] {
        &self.chefs
    }

    pub fn delivery_staff(&self) -> &[DeliveryPerson] {
        &self.delivery_staff
    }

    /// Orders waiting for a chef.
    pub async fn pending_inbound(&self) -> usize {
        self.orders_in.len().await
    }

    /// Orders waiting for a delivery person.
    pub async fn pending_outbound(&self) -> usize {
        self.orders_ready_out.len().await
    }

    /// Orders accepted since the shop opened.
    pub fn orders_received(&self) -> u64 {
        self.router.orders_received()
    }

    /// Stops every worker and the menu actor.
    ///
    /// 1. Signals shutdown. Idle workers wake and exit; busy ones finish the order in
    ///    hand first. Orders still queued stay queued.
    /// 2. Waits for every worker task.
    /// 3. Drops the menu client so the menu actor's loop ends, then waits for it.
    ///
    /// Returns [`ShopError::TaskFailed`] if any task panicked.
    pub async fn shutdown(self) -> Result<(), ShopError> {
        info!("Shutting down shop...");
        let Shop {
            menu,
            shutdown,
            menu_handle,
            workers,
            ..
        } = self;

        shutdown.shutdown();

        let mut failure = None;
        for handle in workers {
            if let Err(e) = handle.await {
                error!("Worker task failed: {:?}", e);
                failure.get_or_insert_with(|| format!("Worker task failed: {:?}", e));
            }
        }

        drop(menu);
        if let Err(e) = menu_handle.await {
            error!("Menu actor failed: {:?}", e);
            failure.get_or_insert_with(|| format!("Menu actor failed: {:?}", e));
        }

        match failure {
            Some(reason) => Err(ShopError::TaskFailed(reason)),
            None => {
                info!("Shop shutdown complete.");
                Ok(())
            }
        }
    }
}
