use std::sync::Arc;

use anyhow::Result;

use soulsurf_auth::{FileSessionStore, SessionStore};
use soulsurf_locations::Location;
use soulsurf_weather::{
    fetch_all, surf_condition_text, FallbackForecastProvider, LiveForecastProvider,
    OpenMeteoClient, SeededForecastProvider,
};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize core
    soulsurf_core::init()?;

    // Create and initialize application
    let mut app = soulsurf_core::App::new()?;
    app.initialize()?;

    tracing::info!("Soul Surf application started");

    // Session flag is read once at startup, mutated only by login/logout.
    let session = FileSessionStore::open()?;

    println!("Soul Surf - Fortaleza surf map");
    println!("Config directory: {}", app.config().config_dir.display());
    println!(
        "Session: {}",
        if session.is_authenticated() { "logado" } else { "visitante" }
    );

    // Fetch every beach forecast up front; seeded data stands in when the
    // network is down, so this never fails.
    let client = OpenMeteoClient::new_with_base_url(&app.config().forecast.base_url)?;
    let provider = Arc::new(FallbackForecastProvider::new(
        LiveForecastProvider::with_client(client),
        SeededForecastProvider::new(),
    ));

    let beaches: Vec<Location> = app.catalog().beaches().cloned().collect();
    let forecasts = fetch_all(provider, &beaches).await;

    for beach in &beaches {
        println!("\n{} ({})", beach.name, beach.id);

        if let Some(post) = app.community().top_post(&beach.id) {
            println!("  Em alta: \"{}\" ({} likes)", post.content, post.likes);
        }

        match forecasts.get(&beach.id) {
            Some(entries) if !entries.is_empty() => {
                for entry in entries {
                    println!(
                        "  {} {}  {}",
                        entry.date,
                        entry.time.format("%H:%M"),
                        surf_condition_text(entry),
                    );
                }
            }
            _ => println!("  Sem previsão no momento"),
        }
    }

    // Graceful shutdown
    app.shutdown()?;

    Ok(())
}
