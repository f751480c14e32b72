use phonebook::{app, bootstrap};
use tracing::info;

#[tokio::main]
async fn main() {
    let (config, phonebook) = bootstrap::app::setup();

    let jobs = app::start(&config, phonebook).await;

    // handle the signals
    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Phonebook shutting down..");

            // Await for all jobs to shutdown
            futures::future::join_all(jobs).await;
            info!("Phonebook successfully shutdown.");
        }
    }
}
