//! # Test Doubles
//!
//! Utilities for testing components in isolation.
//!
//! - [`RecordingWriter`] / [`FailingWriter`] stand in for the receipt sink.
//! - [`create_mock_menu_client`] returns a real [`MenuClient`] wired to a receiver the
//!   test controls. Helpers like [`expect_list`] or [`expect_append`] pull the next
//!   request and hand back its responder.

use crate::clients::MenuClient;
use crate::menu::{MenuRequest, Reply};
use crate::model::Dish;
use crate::receipt::{MenuWriter, WriteError};
use async_trait::async_trait;
use std::sync::Mutex;
use tokio::sync::mpsc;

// =============================================================================
// RECEIPT SINKS
// =============================================================================

/// Keeps every published receipt in memory.
#[derive(Debug, Default)]
pub struct RecordingWriter {
    published: Mutex<Vec<(String, Vec<Dish>)>>,
}

impl RecordingWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Receipts published so far, in publish order.
    pub fn published(&self) -> Vec<(String, Vec<Dish>)> {
        self.published
            .lock()
            .expect("recorder poisoned")
            .clone()
    }
}

#[async_trait]
impl MenuWriter for RecordingWriter {
    async fn publish(&self, name: &str, items: &[Dish]) -> Result<(), WriteError> {
        let mut published = self.published.lock().map_err(|_| WriteError::Rejected {
            name: name.to_string(),
            reason: "recorder poisoned".to_string(),
        })?;
        published.push((name.to_string(), items.to_vec()));
        Ok(())
    }
}

/// Rejects every receipt.
#[derive(Debug, Default, Clone, Copy)]
pub struct FailingWriter;

#[async_trait]
impl MenuWriter for FailingWriter {
    async fn publish(&self, name: &str, _items: &[Dish]) -> Result<(), WriteError> {
        Err(WriteError::Rejected {
            name: name.to_string(),
            reason: "sink unavailable".to_string(),
        })
    }
}

// =============================================================================
// MENU CLIENT HELPERS
// =============================================================================

/// Creates a menu client and the receiver its requests arrive on.
///
/// The test plays the actor: pull a request with one of the `expect_*` helpers and
/// answer it through the returned responder.
pub fn create_mock_menu_client(buffer_size: usize) -> (MenuClient, mpsc::Receiver<MenuRequest>) {
    let (sender, receiver) = mpsc::channel(buffer_size);
    (MenuClient::new(sender), receiver)
}

/// Helper to verify that the next message is a List request
pub async fn expect_list(receiver: &mut mpsc::Receiver<MenuRequest>) -> Option<Reply<Vec<Dish>>> {
    match receiver.recv().await {
        Some(MenuRequest::List { respond_to }) => Some(respond_to),
        _ => None,
    }
}

/// Helper to verify that the next message is an Append request
pub async fn expect_append(receiver: &mut mpsc::Receiver<MenuRequest>) -> Option<(Dish, Reply<usize>)> {
    match receiver.recv().await {
        Some(MenuRequest::Append { dish, respond_to }) => Some((dish, respond_to)),
        _ => None,
    }
}

/// Helper to verify that the next message is a Replace request
pub async fn expect_replace(receiver: &mut mpsc::Receiver<MenuRequest>) -> Option<(Vec<Dish>, Reply<usize>)> {
    match receiver.recv().await {
        Some(MenuRequest::Replace { dishes, respond_to }) => Some((dishes, respond_to)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_recording_writer_keeps_order() {
        let writer = RecordingWriter::new();
        writer.publish("1-1-1.json", &[Dish::new("a", true, 1, 1.0)]).await.unwrap();
        writer.publish("1-2-1.json", &[]).await.unwrap();

        let names: Vec<String> = writer.published().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["1-1-1.json", "1-2-1.json"]);
    }

    #[test]
    #[should_panic(expected = "recorder poisoned")]
    fn test_poisoned_recorder_is_reported() {
        let writer = std::sync::Arc::new(RecordingWriter::new());
        let holder = writer.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.published.lock().unwrap();
            panic!("publisher crashed while holding the lock");
        })
        .join();

        writer.published();
    }

    #[tokio::test]
    async fn test_failing_writer_rejects() {
        let result = FailingWriter.publish("x.json", &[]).await;
        assert!(matches!(result, Err(WriteError::Rejected { .. })));
    }

    #[tokio::test]
    async fn test_expect_replace() {
        let (client, mut receiver) = create_mock_menu_client(4);

        let task = tokio::spawn(async move {
            client.replace(vec![Dish::new("new", false, 10, 1.0)]).await
        });

        let (dishes, responder) = expect_replace(&mut receiver).await.expect("Expected Replace request");
        assert_eq!(dishes.len(), 1);
        responder.send(1).unwrap();

        assert_eq!(task.await.unwrap(), Ok(1));
    }
}
