//! Drives a resource through Initial -> Loading -> Success/Failure
//!
//! A tokio task plays the request runner and a `watch` channel is the state
//! cell. The render loop folds every state it sees into a line of output.
//!
//! Run with: cargo run --example fetch_lifecycle --features tracing

use std::time::Duration;

use remote_resource::{combine, Resource};
use tokio::sync::watch;

#[derive(Debug, Clone)]
struct Movie {
    episode_id: u8,
    title: String,
}

type Movies = Resource<Vec<Movie>, String>;

async fn fetch_movies(ok: bool) -> Result<Vec<Movie>, String> {
    tokio::time::sleep(Duration::from_millis(200)).await;
    if ok {
        Ok(vec![
            Movie {
                episode_id: 4,
                title: "A New Hope".to_string(),
            },
            Movie {
                episode_id: 5,
                title: "The Empire Strikes Back".to_string(),
            },
            Movie {
                episode_id: 6,
                title: "Return of the Jedi".to_string(),
            },
        ])
    } else {
        Err("Not ok!".to_string())
    }
}

fn render(movies: &Movies) -> String {
    movies.fold_ref(
        || "(nothing requested)".to_string(),
        || "loading movies...".to_string(),
        |error| format!("error: {}", error),
        |movies| {
            movies
                .iter()
                .map(|m| format!("  {} - {}", m.episode_id, m.title))
                .collect::<Vec<_>>()
                .join("\n")
        },
    )
}

async fn run(label: &'static str, ok: bool) -> Movies {
    let (tx, mut rx) = watch::channel(Movies::initial());

    let driver = tokio::spawn(async move {
        tx.send_replace(Resource::loading());
        let outcome = fetch_movies(ok).await;
        tx.send_replace(Resource::from_result(outcome));
    });

    println!("[{}]\n{}", label, render(&rx.borrow()));
    while rx.changed().await.is_ok() {
        let state = rx.borrow_and_update().clone().trace(label);
        println!("[{}]\n{}", label, render(&state));
        if state.is_settled() {
            break;
        }
    }

    if let Err(e) = driver.await {
        tracing::error!("driver task failed: {}", e);
    }
    let last = rx.borrow().clone();
    last
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let good = run("films", true).await;
    let bad = run("films (broken)", false).await;

    let count = good
        .clone()
        .map(|movies| movies.len())
        .tap(|n| tracing::info!("loaded {} movies", n));
    println!("movie count: {}", count.get_or_else(|| 0));

    let recovered = bad
        .clone()
        .tap_failure(|e| tracing::warn!("request failed: {}", e))
        .recover(|_| Some(Vec::new()));
    println!("recovered to {} movies", recovered.map(|m| m.len()).unpack_value());

    let both = combine!(good, bad);
    println!("both screens ready: {}", both.is_success());
}
