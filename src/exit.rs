use std::sync::Arc;
use std::time::Duration;

use rocket::serde::json::Json;
use rocket::serde::{Deserialize, Serialize};
use rocket::{tokio, State};
use tracing::info;

use crate::config;
use crate::terminate::Terminator;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ExitResponse {
    status: String,
}

#[post("/exit")]
pub fn exit(
    config: &State<config::Config>,
    terminator: &State<Arc<dyn Terminator>>,
) -> Json<ExitResponse> {
    info!("shutdown requested, closing the server");

    let delay = Duration::from_millis(config.shutdown_delay_ms);
    let terminator = Arc::clone(terminator.inner());
    let pid = std::process::id();

    // Give the response a head start before the process goes away.
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        terminator.terminate(pid);
    });

    Json(ExitResponse {
        status: "shutting_down".into(),
    })
}
