//! Mock PokeAPI server.
//!
//! Serves `/api/v2/pokemon?limit=N` and `/api/v2/pokemon/:id` on an
//! ephemeral localhost port from a background thread, so both sync CLI
//! tests and async client tests can point at it.

use std::collections::HashSet;
use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use anyhow::{Context, Result};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use pokedex_types::EntityDetail;
use serde::Deserialize;
use serde_json::json;
use tokio::sync::oneshot;

struct MockState {
    base_url: String,
    entities: Vec<EntityDetail>,
    fail_roster: bool,
    failing_ids: HashSet<u32>,
    malformed_ids: HashSet<u32>,
}

#[derive(Deserialize)]
struct RosterQuery {
    limit: Option<usize>,
}

/// Builder + handle for the mock server. Dropping the handle shuts it down.
pub struct MockPokeApi {
    addr: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    thread: Option<JoinHandle<()>>,
}

pub struct MockPokeApiBuilder {
    entities: Vec<EntityDetail>,
    fail_roster: bool,
    failing_ids: HashSet<u32>,
    malformed_ids: HashSet<u32>,
}

impl MockPokeApi {
    pub fn builder(entities: Vec<EntityDetail>) -> MockPokeApiBuilder {
        MockPokeApiBuilder {
            entities,
            fail_roster: false,
            failing_ids: HashSet::new(),
            malformed_ids: HashSet::new(),
        }
    }

    pub fn start(entities: Vec<EntityDetail>) -> Result<Self> {
        Self::builder(entities).start()
    }

    /// Value for `--api-url` / `ClientConfig::api_base_url`.
    pub fn base_url(&self) -> String {
        format!("http://{}/api/v2", self.addr)
    }
}

impl Drop for MockPokeApi {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown.take() {
            let _ = tx.send(());
        }
        if let Some(handle) = self.thread.take() {
            let _ = handle.join();
        }
    }
}

impl MockPokeApiBuilder {
    /// Roster endpoint answers 500.
    pub fn failing_roster(mut self) -> Self {
        self.fail_roster = true;
        self
    }

    /// Detail endpoint for `id` answers 500.
    pub fn failing_detail(mut self, id: u32) -> Self {
        self.failing_ids.insert(id);
        self
    }

    /// Detail endpoint for `id` answers 200 with a body that is not a detail record.
    pub fn malformed_detail(mut self, id: u32) -> Self {
        self.malformed_ids.insert(id);
        self
    }

    pub fn start(self) -> Result<MockPokeApi> {
        let (addr_tx, addr_rx) = mpsc::channel::<std::io::Result<SocketAddr>>();
        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let thread = thread::spawn(move || {
            let runtime = match tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
            {
                Ok(rt) => rt,
                Err(e) => {
                    let _ = addr_tx.send(Err(e));
                    return;
                }
            };

            runtime.block_on(async move {
                let listener = match tokio::net::TcpListener::bind("127.0.0.1:0").await {
                    Ok(l) => l,
                    Err(e) => {
                        let _ = addr_tx.send(Err(e));
                        return;
                    }
                };
                let addr = match listener.local_addr() {
                    Ok(a) => a,
                    Err(e) => {
                        let _ = addr_tx.send(Err(e));
                        return;
                    }
                };

                let state = Arc::new(MockState {
                    base_url: format!("http://{}/api/v2", addr),
                    entities: self.entities,
                    fail_roster: self.fail_roster,
                    failing_ids: self.failing_ids,
                    malformed_ids: self.malformed_ids,
                });

                let app = Router::new()
                    .route("/api/v2/pokemon", get(roster))
                    .route("/api/v2/pokemon/:id", get(detail))
                    .with_state(state);

                let _ = addr_tx.send(Ok(addr));

                let _ = axum::serve(listener, app)
                    .with_graceful_shutdown(async {
                        let _ = shutdown_rx.await;
                    })
                    .await;
            });
        });

        let addr = addr_rx
            .recv()
            .context("mock server thread exited before binding")?
            .context("mock server failed to bind")?;

        Ok(MockPokeApi {
            addr,
            shutdown: Some(shutdown_tx),
            thread: Some(thread),
        })
    }
}

async fn roster(State(state): State<Arc<MockState>>, Query(query): Query<RosterQuery>) -> Response {
    if state.fail_roster {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }

    // PokeAPI defaults to 20 when no limit is given
    let limit = query.limit.unwrap_or(20);
    let results: Vec<_> = state
        .entities
        .iter()
        .take(limit)
        .map(|e| {
            json!({
                "name": e.name,
                "url": format!("{}/pokemon/{}", state.base_url, e.id),
            })
        })
        .collect();

    Json(json!({
        "count": state.entities.len(),
        "next": null,
        "previous": null,
        "results": results,
    }))
    .into_response()
}

async fn detail(State(state): State<Arc<MockState>>, Path(id): Path<u32>) -> Response {
    if state.failing_ids.contains(&id) {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    if state.malformed_ids.contains(&id) {
        return Json(json!({ "detail": "Not a pokemon record" })).into_response();
    }

    let Some(entity) = state.entities.iter().find(|e| e.id == id) else {
        return StatusCode::NOT_FOUND.into_response();
    };

    let types: Vec<_> = entity
        .categories
        .iter()
        .enumerate()
        .map(|(i, name)| {
            json!({
                "slot": i + 1,
                "type": { "name": name, "url": format!("{}/type/{}", state.base_url, name) },
            })
        })
        .collect();

    Json(json!({
        "id": entity.id,
        "name": entity.name,
        "base_experience": 64,
        "sprites": { "front_default": entity.image_url, "back_default": null },
        "types": types,
    }))
    .into_response()
}
