pub mod api;

use std::error::Error;
use std::net::SocketAddr;
use log::info;

pub use self::api::AppState;

pub struct Server {
    addr: String,
    state: AppState,
    cors_origin: String,
}

impl Server {
    pub fn new(addr: String, state: AppState, cors_origin: String) -> Self {
        Self {
            addr,
            state,
            cors_origin,
        }
    }

    pub async fn run(&self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let addr = self.addr.parse::<SocketAddr>()?;
        let app = api::build_router(self.state.clone(), &self.cors_origin)?;

        let listener = tokio::net::TcpListener::bind(addr).await?;
        info!("HTTP API server listening on: http://{}", addr);
        axum::serve(listener, app.into_make_service()).await?;

        Ok(())
    }
}
