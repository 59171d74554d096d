//! The task that owns the live [`MenuCatalog`].

use crate::clients::MenuClient;
use crate::menu::{MenuCatalog, MenuRequest};
use crate::model::Dish;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Serializes every catalog read and write through a single receive loop, so a
/// `list` observes either the whole of a `replace` or none of it.
pub struct MenuActor {
    receiver: mpsc::Receiver<MenuRequest>,
    catalog: MenuCatalog,
}

impl MenuActor {
    pub fn new(buffer_size: usize, initial: Vec<Dish>) -> (Self, MenuClient) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            catalog: MenuCatalog::new(initial),
        };
        (actor, MenuClient::new(sender))
    }

    /// Processes requests until every client has been dropped.
    pub async fn run(mut self) {
        info!(size = self.catalog.len(), "Menu actor started");
        if self.catalog.is_empty() {
            warn!("Menu is empty");
        }

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                MenuRequest::List { respond_to } => {
                    debug!(size = self.catalog.len(), "List");
                    let _ = respond_to.send(self.catalog.list().to_vec());
                }
                MenuRequest::Append { dish, respond_to } => {
                    debug!(dish = %dish.name, "Append");
                    self.catalog.append(dish);
                    let _ = respond_to.send(self.catalog.len());
                }
                MenuRequest::AppendAll { dishes, respond_to } => {
                    debug!(count = dishes.len(), "AppendAll");
                    self.catalog.append_all(dishes);
                    let _ = respond_to.send(self.catalog.len());
                }
                MenuRequest::Replace { dishes, respond_to } => {
                    let previous = self.catalog.len();
                    self.catalog.replace(dishes);
                    info!(previous, size = self.catalog.len(), "Menu replaced");
                    let _ = respond_to.send(self.catalog.len());
                }
                MenuRequest::Vegetarian { respond_to } => {
                    debug!("Vegetarian");
                    let _ = respond_to.send(self.catalog.vegetarian());
                }
                MenuRequest::PartitionByCalories {
                    threshold,
                    respond_to,
                } => {
                    debug!(threshold, "PartitionByCalories");
                    let _ = respond_to.send(self.catalog.partition_by_calorie_limit(threshold));
                }
            }
        }

        info!(size = self.catalog.len(), "Shutdown");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_actor_serves_snapshots() {
        let (actor, client) = MenuActor::new(8, vec![Dish::new("soup", true, 200, 4.0)]);
        let handle = tokio::spawn(actor.run());

        let before = client.list().await.unwrap();
        client.append(Dish::new("steak", false, 900, 20.0)).await.unwrap();

        // The earlier snapshot is unaffected by the append.
        assert_eq!(before.len(), 1);
        assert_eq!(client.list().await.unwrap().len(), 2);

        drop(client);
        handle.await.unwrap();
    }

    #[tokio::test]
    async fn test_actor_stops_when_clients_dropped() {
        let (actor, client) = MenuActor::new(8, Vec::new());
        let handle = tokio::spawn(actor.run());

        let other = client.clone();
        drop(client);
        assert!(other.list().await.unwrap().is_empty());

        drop(other);
        handle.await.unwrap();
    }
}
