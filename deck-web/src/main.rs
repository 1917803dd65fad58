//! deck-web - browse and create DeckBuilder games from the terminal
//!
//! The command line plays the part of the page components: it navigates,
//! dispatches store actions, and prints what the views would show.
//!
//! # Usage
//!
//! ```sh
//! # List games from the local backend
//! deck-web list
//!
//! # Create a game, then re-fetch the list
//! deck-web create '{"name": "chess"}' --refresh
//!
//! # Resolve a client-side path the way the router would
//! deck-web open /games/chess
//! ```

use anyhow::Context;
use clap::{Parser, Subcommand};
use deck_dispatch::Router;
use serde_json::Value;
use tracing_subscriber::EnvFilter;

use deck_web::actions::{fetch_create_game, fetch_games, games_store, GamesStore};
use deck_web::api::GamesClient;
use deck_web::routes::{route_table, Route};

/// deck-web - DeckBuilder games client
#[derive(Parser, Debug)]
#[command(name = "deck-web")]
#[command(about = "Browse and create DeckBuilder games")]
struct Args {
    /// Base path the app is served under
    #[arg(long, global = true, default_value = "/")]
    base: String,

    /// Log requests and commits
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Fetch and print all games
    List,

    /// Create a game from a JSON object
    Create {
        /// Game record, e.g. '{"name": "chess"}'
        json: String,

        /// Fetch the list again after creating
        #[arg(long)]
        refresh: bool,
    },

    /// Resolve a client-side path and show its view
    Open {
        /// Path such as `/games/chess`
        path: String,
    },

    /// Print the route table
    Routes,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let client = GamesClient::new();
    let store = games_store();
    let mut router = Router::<Route>::with_base(&args.base);

    match args.command {
        Command::List => {
            fetch_games(&store, &client)
                .await
                .context("failed to fetch games")?;
            print_list(&store)?;
        }
        Command::Create { json, refresh } => {
            let payload: Value =
                serde_json::from_str(&json).context("game must be given as JSON")?;
            let response = fetch_create_game(&store, &client, &payload)
                .await
                .context("failed to create game")?;
            println!("{}", serde_json::to_string_pretty(&response)?);

            if refresh {
                fetch_games(&store, &client)
                    .await
                    .context("failed to refresh games")?;
                print_list(&store)?;
            }
        }
        Command::Open { path } => match router.push(&path) {
            Some(Route::Games) => {
                fetch_games(&store, &client)
                    .await
                    .context("failed to fetch games")?;
                let names = store.with_state(|s| {
                    s.names().into_iter().map(str::to_owned).collect::<Vec<_>>()
                });
                for name in names {
                    let href = router.href(&Route::Game { name: name.clone() });
                    println!("{} -> {}", name, href);
                }
            }
            Some(Route::Game { name }) => {
                fetch_games(&store, &client)
                    .await
                    .context("failed to fetch games")?;
                match store.with_state(|s| s.game(&name).cloned()) {
                    Some(game) => println!("{}", serde_json::to_string_pretty(&game)?),
                    None => tracing::warn!(name = %name, "game is not in the fetched list"),
                }
            }
            Some(Route::NotFound) | None => {
                tracing::warn!(path = %path, "no route matches, showing blank view");
            }
        },
        Command::Routes => {
            for (pattern, view) in route_table() {
                println!("{:<16} {}", pattern, view);
            }
        }
    }

    Ok(())
}

fn print_list(store: &GamesStore) -> anyhow::Result<()> {
    let games = store.with_state(|s| s.games.clone());
    println!("{}", serde_json::to_string_pretty(&games)?);
    Ok(())
}
