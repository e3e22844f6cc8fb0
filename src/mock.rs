//! Stand-in for the external oracle: one route that always answers with the
//! same single byte.

use crate::error::{Error, Result};
use axum::{Router, body::Bytes, http::StatusCode, routing::get};
use std::io::ErrorKind;
use std::net::{Ipv4Addr, Ipv6Addr, SocketAddr};
use tokio::net::TcpListener;

/// Port the oracle offchain worker fetches from
pub const MOCK_PORT: u16 = 7666;

/// Body of every `/mock` response
pub const MOCK_PAYLOAD: [u8; 1] = [0x2a];

/// `GET /mock`
pub async fn mock() -> (StatusCode, Bytes) {
    tracing::info!("was hit!");
    (StatusCode::OK, Bytes::from_static(&MOCK_PAYLOAD))
}

pub fn router() -> Router {
    Router::new().route("/mock", get(mock))
}

/// Binds a listener on all interfaces.
///
/// Prefers the dual-stack `[::]` socket so both `127.0.0.1` and `::1` reach
/// the service, and falls back to `0.0.0.0` on hosts without IPv6.
pub async fn bind(port: u16) -> Result<TcpListener> {
    match TcpListener::bind(SocketAddr::from((Ipv6Addr::UNSPECIFIED, port))).await {
        Ok(listener) => Ok(listener),
        Err(source) if source.kind() == ErrorKind::AddrInUse => Err(Error::Bind { port, source }),
        Err(err) => {
            tracing::debug!("IPv6 bind failed ({err}), using IPv4 only");
            TcpListener::bind(SocketAddr::from((Ipv4Addr::UNSPECIFIED, port)))
                .await
                .map_err(|source| Error::Bind { port, source })
        }
    }
}

/// Serves [`router`] on `listener` until the process is terminated
pub async fn serve(listener: TcpListener) -> Result<()> {
    let port = listener.local_addr().map_err(Error::Serve)?.port();
    tracing::info!("Started the oracle service on port {port}.");

    axum::serve(listener, router()).await.map_err(Error::Serve)
}
