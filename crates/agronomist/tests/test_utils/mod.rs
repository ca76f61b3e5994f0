//! Test helpers for the HTTP front-end.

pub mod fake_driver;

#[allow(unused_imports)]
pub use fake_driver::{FakeDriver, FakeReply};

use agronomist::Advisor;
use agronomist::api::create_router;
use std::path::Path;
use std::sync::Arc;

/// Serve the router on an ephemeral local port; returns the base URL.
#[allow(dead_code)]
pub async fn spawn_api(driver: Arc<FakeDriver>, upload_dir: &Path) -> String {
    let advisor = Advisor::new(driver, upload_dir);
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(advisor)).await.unwrap();
    });
    format!("http://{}", addr)
}
