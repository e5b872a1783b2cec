use std::{
    net::{IpAddr, Ipv4Addr, SocketAddr},
    sync::{Arc, Mutex},
};

use anyhow::Context;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_models::contact::ContactMessage;
use serde::Serialize;
use tokio::{net::TcpListener, task::JoinHandle};
use tracing::info;
use url::Url;

pub const CONTACT_ROUTE: &str = "/api/contact";

/// A contact endpoint that answers every submission with a fixed status code
/// and remembers what it received.
#[derive(Debug, Clone)]
pub struct FakeContactEndpoint {
    status: StatusCode,
    received: Arc<Mutex<Vec<ContactMessage>>>,
}

impl FakeContactEndpoint {
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            received: Default::default(),
        }
    }

    /// Messages received so far, oldest first.
    pub fn received(&self) -> Vec<ContactMessage> {
        self.received
            .lock()
            .map(|received| received.clone())
            .unwrap_or_default()
    }

    pub fn router(&self) -> Router<()> {
        Router::new()
            .route(CONTACT_ROUTE, routing::post(receive))
            .with_state(self.clone())
    }
}

/// A [`FakeContactEndpoint`] serving on an ephemeral local port.
#[derive(Debug)]
pub struct SpawnedContactEndpoint {
    pub url: Url,
    pub endpoint: FakeContactEndpoint,
    task: JoinHandle<()>,
}

impl Drop for SpawnedContactEndpoint {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Binds a fake endpoint to `127.0.0.1:0` and serves it in the background
/// until the returned handle is dropped.
pub async fn spawn(status: StatusCode) -> anyhow::Result<SpawnedContactEndpoint> {
    let endpoint = FakeContactEndpoint::new(status);
    let listener = TcpListener::bind(SocketAddr::from((Ipv4Addr::LOCALHOST, 0)))
        .await
        .context("Failed to bind fake contact endpoint")?;
    let addr = listener.local_addr()?;
    let url = format!("http://{addr}{CONTACT_ROUTE}").parse()?;

    let router = endpoint.router();
    let task = tokio::spawn(async move {
        if let Err(err) = axum::serve(listener, router).await {
            tracing::error!("fake contact endpoint stopped: {err}");
        }
    });

    Ok(SpawnedContactEndpoint {
        url,
        endpoint,
        task,
    })
}

pub async fn start_server(host: IpAddr, port: u16, status: StatusCode) -> anyhow::Result<()> {
    info!("Starting fake contact endpoint on {host}:{port}");
    info!("Contact endpoint: http://{host}:{port}{CONTACT_ROUTE}");
    info!("Every submission is answered with {status}");

    let router = FakeContactEndpoint::new(status).router();

    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("Failed to bind to {host}:{port}"))?;
    axum::serve(listener, router)
        .await
        .context("Failed to start HTTP server")
}

#[derive(Serialize)]
#[serde(untagged)]
enum ContactResponse {
    Message { message: &'static str },
    Error { error: &'static str },
}

async fn receive(
    endpoint: State<FakeContactEndpoint>,
    Json(message): Json<ContactMessage>,
) -> Response {
    info!(?message, status = %endpoint.status, "received contact message");
    if let Ok(mut received) = endpoint.received.lock() {
        received.push(message);
    }

    let body = if endpoint.status.is_success() {
        ContactResponse::Message {
            message: "Message sent successfully",
        }
    } else if endpoint.status.is_client_error() {
        ContactResponse::Error {
            error: "Rejected by the fake contact endpoint",
        }
    } else {
        ContactResponse::Error {
            error: "Failed to process request",
        }
    };

    (endpoint.status, Json(body)).into_response()
}
