//! keeppt-web - Leptos dashboard shell for keeppt, plus an Axum preview server

#![recursion_limit = "1024"]

pub mod app;
pub mod browser;
pub mod components;
pub mod pages;
#[cfg(feature = "ssr")]
pub mod router;
pub mod theme;

pub use app::App;
pub use components::DashboardShell;
#[cfg(feature = "ssr")]
pub use router::create_router;

#[cfg(feature = "ssr")]
pub use server::run;

#[cfg(feature = "ssr")]
mod server {
    use anyhow::{Context, Result};
    use std::net::SocketAddr;
    use std::path::PathBuf;
    use tokio::net::TcpListener;
    use tracing::{info, warn};

    use crate::create_router;

    /// Run the preview server for a built frontend
    pub async fn run(dist: PathBuf, port: u16) -> Result<()> {
        if !dist.join("index.html").exists() {
            warn!(dist = %dist.display(), "index.html missing, run 'trunk build' first");
        }

        let router = create_router(&dist);

        let addr = SocketAddr::from(([127, 0, 0, 1], port));
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {}", addr))?;

        info!(%addr, dist = %dist.display(), "preview server listening");
        println!("keeppt listening on http://{}", addr);

        axum::serve(listener, router)
            .await
            .context("Preview server stopped unexpectedly")?;

        Ok(())
    }
}
