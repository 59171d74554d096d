use takeout_shop::menu::{MenuActor, MenuError};
use takeout_shop::mock::{create_mock_menu_client, expect_list};
use takeout_shop::model::Dish;

fn dishes(prefix: &str, count: u32) -> Vec<Dish> {
    (0..count)
        .map(|i| Dish::new(format!("{}_{}", prefix, i), i % 3 == 0, 150 * (i + 1), 4.0))
        .collect()
}

#[tokio::test]
async fn test_menu_actor_full_lifecycle() {
    // 1. Create the actor with an initial menu
    let (actor, client) = MenuActor::new(8, dishes("starter", 3));
    let handle = tokio::spawn(actor.run());

    // 2. Append single and bulk
    assert_eq!(client.append(Dish::new("soup", true, 120, 3.0)).await.unwrap(), 4);
    assert_eq!(client.append_all(dishes("main", 2)).await.unwrap(), 6);

    // 3. Derived views
    let veggie = client.vegetarian().await.unwrap();
    assert!(veggie.iter().all(|d| d.vegetarian));
    assert!(veggie.iter().any(|d| d.name == "soup"));

    let partition = client.partition_by_calorie_limit(300).await.unwrap();
    assert_eq!(partition.within_limit.len() + partition.over_limit.len(), 6);

    // 4. Replace
    assert_eq!(client.replace(dishes("new", 1)).await.unwrap(), 1);
    assert_eq!(client.list().await.unwrap()[0].name, "new_0");

    // 5. Dropping the last client stops the actor
    drop(client);
    handle.await.unwrap();
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_replace_is_never_observed_half_done() {
    let (actor, client) = MenuActor::new(32, dishes("old", 5));
    let handle = tokio::spawn(actor.run());

    let writer = client.clone();
    let replacing = tokio::spawn(async move {
        for round in 0..50 {
            let prefix = if round % 2 == 0 { "even" } else { "odd" };
            writer.replace(dishes(prefix, 7)).await.unwrap();
        }
    });

    for _ in 0..100 {
        let snapshot = client.list().await.unwrap();
        let prefix = snapshot[0].name.split('_').next().unwrap().to_string();
        assert!(snapshot.iter().all(|d| d.name.starts_with(&prefix)));
        assert!(snapshot.len() == 5 || snapshot.len() == 7);
    }

    replacing.await.unwrap();
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_client_against_scripted_actor() {
    let (client, mut receiver) = create_mock_menu_client(4);

    let task = tokio::spawn(async move { client.list().await });

    let responder = expect_list(&mut receiver).await.expect("Expected List request");
    responder.send(dishes("scripted", 2)).unwrap();

    assert_eq!(task.await.unwrap().unwrap().len(), 2);
}

#[tokio::test]
async fn test_client_reports_stopped_actor() {
    let (actor, client) = MenuActor::new(4, Vec::new());
    let handle = tokio::spawn(actor.run());

    // Abort the actor so the channel closes under the client.
    handle.abort();
    let _ = handle.await;

    let result = client.list().await;
    assert!(matches!(result, Err(MenuError::ActorCommunicationError(_))));
}
