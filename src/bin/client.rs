use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use find_hallucination::client::command::{Command, HELP};
use find_hallucination::client::render::render;
use find_hallucination::client::{ClientConfig, Game, HttpBackend, ScoreStore, Session};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    // Logs go to stderr so they don't interleave with the game screen
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "find_hallucination=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = ClientConfig::from_env();
    tracing::info!("Using backend {}", config.api_url);

    let backend = HttpBackend::new(config.api_url.clone())?;
    let mut session = Session::new(
        Game::new(),
        backend,
        ScoreStore::new(config.scores_path.clone()),
        config.nickname.clone(),
    );

    println!("{}\n", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while session.game().is_running() {
        if session.game().pending_load().is_some() {
            println!("{}", render(session.game()));
            session.load_pending().await;
            continue;
        }

        println!("\n{}\n", render(session.game()));
        let Some(line) = lines.next_line().await? else {
            break;
        };
        if line.trim().is_empty() {
            continue;
        }

        match line.parse::<Command>() {
            Ok(command) => {
                if let Some(message) = session.execute(command).await {
                    println!("{}", message);
                }
            }
            Err(e) => println!("{} (type 'help')", e),
        }
    }

    Ok(())
}
