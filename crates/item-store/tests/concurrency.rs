//! Concurrent access tests for the in-memory item store.

use item_store::{InMemoryItemStore, Item, ItemId, ItemStore};

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_distinct_inserts_are_all_kept() {
    let store = InMemoryItemStore::new();

    let handles: Vec<_> = (0..100)
        .map(|id| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .insert(Item::new(id, format!("item-{id}")))
                    .await
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    let mut ids: Vec<i64> = store
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|i| i.id.as_i64())
        .collect();
    assert_eq!(ids.len(), 100);
    ids.sort_unstable();
    assert_eq!(ids, (0..100).collect::<Vec<_>>());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_writes_to_one_id_leave_a_single_record() {
    let store = InMemoryItemStore::new();

    let handles: Vec<_> = (0..50)
        .map(|n| {
            let store = store.clone();
            tokio::spawn(async move {
                store
                    .insert(Item::new(7, format!("writer-{n}")))
                    .await
                    .unwrap();
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap();
    }

    assert_eq!(store.list().await.unwrap().len(), 1);

    let item = store.require(ItemId::new(7)).await.unwrap();
    assert!(item.name.starts_with("writer-"));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn readers_never_observe_partial_items() {
    let store = InMemoryItemStore::new();
    store
        .insert(Item::new(1, "v0").with_description("d0"))
        .await
        .unwrap();

    let writer = {
        let store = store.clone();
        tokio::spawn(async move {
            for n in 1..200 {
                store
                    .insert(Item::new(1, format!("v{n}")).with_description(format!("d{n}")))
                    .await
                    .unwrap();
            }
        })
    };

    let reader = {
        let store = store.clone();
        tokio::spawn(async move {
            for _ in 0..200 {
                let item = store.require(ItemId::new(1)).await.unwrap();
                let version = item.name.trim_start_matches('v');
                assert_eq!(item.description, Some(format!("d{version}")));
            }
        })
    };

    writer.await.unwrap();
    reader.await.unwrap();
}
