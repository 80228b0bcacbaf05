use movie_catalog::clients::CatalogHandle;
use movie_catalog::lifecycle::{CatalogConfig, CatalogSystem};
use movie_catalog::model::MovieId;
use pretty_assertions::assert_eq;

fn ids(store: &movie_catalog::catalog::CatalogStore) -> Vec<u32> {
    store.list_movies().iter().map(|m| m.id.0).collect()
}

/// Full end-to-end test through the real actor, starting from the seed.
#[tokio::test]
async fn test_full_catalog_scenario() {
    let system = CatalogSystem::new();

    let seeded = system
        .movie_client
        .list_movies()
        .await
        .expect("Failed to list movies");
    assert_eq!(ids(&seeded), vec![1, 2]);

    // Create "Dune" with no actors: appended with id 3
    let (store, dune) = system
        .movie_client
        .create_movie("Dune", vec![])
        .await
        .expect("Failed to create movie");
    assert_eq!(dune.id, MovieId(3));
    assert!(dune.actors.is_empty());
    assert_eq!(store.list_movies().last(), Some(&dune));

    // Add an actor to it
    let store = system
        .cast_client
        .add_actor(MovieId(3), "Timothée Chalamet")
        .await
        .expect("Failed to add actor");
    assert_eq!(
        store.movie(MovieId(3)).unwrap().actors,
        vec!["Timothée Chalamet"]
    );

    // Delete the first seed movie
    let store = system
        .movie_client
        .delete_movie(MovieId(1))
        .await
        .expect("Failed to delete movie");
    assert_eq!(ids(&store), vec![2, 3]);

    // Retrieve through the read side
    let dune = system
        .cast_client
        .get_movie(MovieId(3))
        .await
        .expect("Failed to get movie")
        .expect("Movie not found");
    assert_eq!(dune.title, "Dune");

    let final_state = system.shutdown().await.expect("Failed to shutdown system");
    assert_eq!(ids(&final_state), vec![2, 3]);
}

/// Misses are silent no-ops in the default configuration.
#[tokio::test]
async fn test_lenient_misses_leave_catalog_unchanged() {
    let system = CatalogSystem::new();
    let before = system.movie_client.list_movies().await.unwrap();

    let after_update = system.movie_client.update_movie(MovieId(42), "X").await.unwrap();
    let after_delete = system.movie_client.delete_movie(MovieId(42)).await.unwrap();
    let after_add = system.cast_client.add_actor(MovieId(42), "Y").await.unwrap();
    let after_rename = system
        .cast_client
        .update_actor(MovieId(1), "Nobody", "Somebody")
        .await
        .unwrap();
    let after_remove_at = system.cast_client.remove_actor_at(MovieId(2), 5).await.unwrap();

    for state in [after_update, after_delete, after_add, after_rename, after_remove_at] {
        assert_eq!(state, before);
    }

    system.shutdown().await.unwrap();
}

/// Name-based edits hit every duplicate, positional edits hit exactly one.
#[tokio::test]
async fn test_duplicate_actor_names() {
    let system = CatalogSystem::new();
    let cast = &system.cast_client;

    cast.add_actor(MovieId(2), "Heath Ledger").await.unwrap();
    let store = cast
        .update_actor_at(MovieId(2), 2, "Aaron Eckhart")
        .await
        .unwrap();
    assert_eq!(
        store.movie(MovieId(2)).unwrap().actors,
        vec!["Christian Bale", "Heath Ledger", "Aaron Eckhart"]
    );

    cast.add_actor(MovieId(2), "Christian Bale").await.unwrap();
    let store = cast
        .remove_actor(MovieId(2), "Christian Bale")
        .await
        .unwrap();
    assert_eq!(
        store.movie(MovieId(2)).unwrap().actors,
        vec!["Heath Ledger", "Aaron Eckhart"]
    );

    assert_eq!(
        cast.actors(MovieId(1)).await.unwrap().unwrap(),
        vec!["Leonardo DiCaprio", "Joseph Gordon-Levitt"]
    );

    system.shutdown().await.unwrap();
}

/// Concurrent creates through cloned clients never produce duplicate ids.
#[tokio::test]
async fn test_concurrent_creates() {
    let system = CatalogSystem::new();

    let mut handles = vec![];
    for i in 0..10 {
        let movies = system.movie_client.clone();
        handles.push(tokio::spawn(async move {
            movies.create_movie(format!("Movie {i}"), vec![]).await
        }));
    }

    let mut created = vec![];
    for handle in handles {
        let (_, movie) = handle.await.unwrap().unwrap();
        created.push(movie.id.0);
    }
    created.sort_unstable();
    assert_eq!(created, (3..=12).collect::<Vec<_>>());

    let final_state = system.shutdown().await.unwrap();
    assert_eq!(final_state.len(), 12);
}

/// Every committed change reaches a snapshot subscriber.
#[tokio::test]
async fn test_snapshots_follow_mutations() {
    let system = CatalogSystem::new();
    let mut snapshots = system.subscribe();
    assert_eq!(snapshots.borrow_and_update().len(), 2);

    system
        .movie_client
        .update_movie(MovieId(1), "Inception (2010)")
        .await
        .unwrap();
    assert!(snapshots.has_changed().unwrap());
    assert_eq!(
        snapshots.borrow_and_update().movie(MovieId(1)).unwrap().title,
        "Inception (2010)"
    );

    // a lenient miss commits nothing
    system.movie_client.delete_movie(MovieId(99)).await.unwrap();
    assert!(!snapshots.has_changed().unwrap());

    system.shutdown().await.unwrap();
}

/// A subscriber sees each committed state, in commit order.
#[tokio::test]
async fn test_snapshots_match_each_mutation_in_order() {
    let system = CatalogSystem::new();
    let mut snapshots = system.subscribe();
    let _ = snapshots.borrow_and_update();

    let mut returned = Vec::new();
    let mut observed = Vec::new();

    let (after_create, dune) = system
        .movie_client
        .create_movie("Dune", vec![])
        .await
        .unwrap();
    snapshots.changed().await.unwrap();
    observed.push(snapshots.borrow_and_update().clone());
    returned.push(after_create);

    let after_add = system
        .cast_client
        .add_actor(dune.id, "Timothée Chalamet")
        .await
        .unwrap();
    snapshots.changed().await.unwrap();
    observed.push(snapshots.borrow_and_update().clone());
    returned.push(after_add);

    let after_delete = system.movie_client.delete_movie(MovieId(1)).await.unwrap();
    snapshots.changed().await.unwrap();
    observed.push(snapshots.borrow_and_update().clone());
    returned.push(after_delete);

    assert_eq!(observed, returned);
    assert_eq!(ids(&observed[0]), vec![1, 2, 3]);
    assert_eq!(
        observed[1].movie(dune.id).unwrap().actors,
        vec!["Timothée Chalamet"]
    );
    assert_eq!(ids(&observed[2]), vec![2, 3]);
    assert!(!snapshots.has_changed().unwrap());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_configured_initial_movies() {
    let config = CatalogConfig::from_toml_str(
        r#"
        buffer_size = 2

        [[movies]]
        id = 10
        title = "Heat"
        actors = ["Al Pacino", "Robert De Niro"]
        "#,
    )
    .unwrap();
    let system = CatalogSystem::with_config(&config).unwrap();

    let (_, movie) = system
        .movie_client
        .create_movie("Collateral", vec!["Tom Cruise".into()])
        .await
        .unwrap();
    assert_eq!(movie.id, MovieId(11));

    let final_state = system.shutdown().await.unwrap();
    assert_eq!(ids(&final_state), vec![10, 11]);
}
