use std::sync::Arc;

use log::{error, info};

use saferoute::config::Config;
use saferoute::map::HeadlessMap;
use saferoute::status::StatusLine;
use saferoute::{InteractionController, Services};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load `.env` first, so `RUST_LOG` set there reaches the logger.
    let _ = dotenv::dotenv();

    #[cfg(feature = "tracing")]
    saferoute::util::trace::initialize_tracer();
    #[cfg(not(feature = "tracing"))]
    env_logger::init();

    let config = Config::from_env()?;
    let places: Vec<String> = std::env::args().skip(1).collect();

    let status = Arc::new(StatusLine::new());
    let map = HeadlessMap::with_view(config.initial_view, config.initial_zoom);
    let services = Services::http(&config, status.clone())?;
    let controller = InteractionController::new(&config, map, services);

    controller.locate_device().await;
    println!("{}", status.current());

    match places.as_slice() {
        [] => {}
        [from, to] => {
            info!("Directions from {from:?} to {to:?}");
            controller.directions(from, to).await;
            println!("{}", status.current());

            for line in controller.snapshot().await.stats {
                println!("  {line}");
            }
        }
        _ => {
            error!("Expected two place names, got {}", places.len());
            eprintln!("usage: saferoute [FROM TO]");
            std::process::exit(2);
        }
    }

    Ok(())
}
