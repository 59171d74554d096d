use crate::menu::{CaloriePartition, MenuError, MenuRequest, Reply};
use crate::model::Dish;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, instrument};

/// Client for interacting with the menu actor.
#[derive(Clone)]
pub struct MenuClient {
    sender: mpsc::Sender<MenuRequest>,
}

impl MenuClient {
    pub fn new(sender: mpsc::Sender<MenuRequest>) -> Self {
        Self { sender }
    }

    /// Sends one request and waits for its reply.
    async fn request<T>(&self, build: impl FnOnce(Reply<T>) -> MenuRequest) -> Result<T, MenuError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(build(respond_to))
            .await
            .map_err(|_| MenuError::ActorCommunicationError("Actor closed".to_string()))?;
        response
            .await
            .map_err(|_| MenuError::ActorCommunicationError("Actor dropped response channel".to_string()))
    }

    #[instrument(skip(self))]
    pub async fn list(&self) -> Result<Vec<Dish>, MenuError> {
        debug!("Sending request");
        self.request(|respond_to| MenuRequest::List { respond_to }).await
    }

    #[instrument(skip(self, dish), fields(dish = %dish.name))]
    pub async fn append(&self, dish: Dish) -> Result<usize, MenuError> {
        debug!("Sending request");
        self.request(|respond_to| MenuRequest::Append { dish, respond_to })
            .await
    }

    #[instrument(skip(self, dishes), fields(count = dishes.len()))]
    pub async fn append_all(&self, dishes: Vec<Dish>) -> Result<usize, MenuError> {
        debug!("Sending request");
        self.request(|respond_to| MenuRequest::AppendAll { dishes, respond_to })
            .await
    }

    #[instrument(skip(self, dishes), fields(count = dishes.len()))]
    pub async fn replace(&self, dishes: Vec<Dish>) -> Result<usize, MenuError> {
        debug!("Sending request");
        self.request(|respond_to| MenuRequest::Replace { dishes, respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn vegetarian(&self) -> Result<Vec<Dish>, MenuError> {
        debug!("Sending request");
        self.request(|respond_to| MenuRequest::Vegetarian { respond_to })
            .await
    }

    #[instrument(skip(self))]
    pub async fn partition_by_calorie_limit(&self, threshold: u32) -> Result<CaloriePartition, MenuError> {
        debug!("Sending request");
        self.request(|respond_to| MenuRequest::PartitionByCalories {
            threshold,
            respond_to,
        })
        .await
    }
}

#[cfg(test)]
mod tests {
    use crate::mock::{create_mock_menu_client, expect_append, expect_list};
    use crate::model::Dish;

    #[tokio::test]
    async fn test_list_returns_actor_reply() {
        let (client, mut receiver) = create_mock_menu_client(4);

        let task = tokio::spawn(async move { client.list().await });

        let responder = expect_list(&mut receiver).await.expect("Expected List request");
        responder.send(vec![Dish::new("ramen", false, 550, 12.0)]).unwrap();

        let dishes = task.await.unwrap().unwrap();
        assert_eq!(dishes[0].name, "ramen");
    }

    #[tokio::test]
    async fn test_append_forwards_dish() {
        let (client, mut receiver) = create_mock_menu_client(4);

        let task = tokio::spawn(async move { client.append(Dish::new("tofu", true, 300, 8.0)).await });

        let (dish, responder) = expect_append(&mut receiver).await.expect("Expected Append request");
        assert_eq!(dish.name, "tofu");
        responder.send(7).unwrap();

        assert_eq!(task.await.unwrap(), Ok(7));
    }

    #[tokio::test]
    async fn test_dropped_reply_is_communication_error() {
        let (client, mut receiver) = create_mock_menu_client(4);

        let task = tokio::spawn(async move { client.vegetarian().await });

        // Receive the request and drop it without replying.
        drop(receiver.recv().await);

        let result = task.await.unwrap();
        assert!(matches!(result, Err(crate::menu::MenuError::ActorCommunicationError(_))));
    }

    #[tokio::test]
    async fn test_closed_actor_is_communication_error() {
        let (client, receiver) = create_mock_menu_client(4);
        drop(receiver);

        let result = client.list().await;
        assert!(matches!(result, Err(crate::menu::MenuError::ActorCommunicationError(_))));
    }
}
