//! Local stand-in for the public character API.
//!
//! `app()` serves a fixed roster with the full upstream payload shape and
//! answers unknown ids the way upstream does: status 201 with an error body.
//! `stub()` answers every lookup with one canned status and body, which is
//! what the client's failure-path tests run against.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

pub use axum::http::StatusCode;

pub const NOT_FOUND_MESSAGE: &str = "Character not found";

const API_ROOT: &str = "https://rickandmortyapi.com/api";

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Place {
    pub name: String,
    pub url: String,
}

/// A character as the upstream API returns it, extra fields included.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct CharacterRecord {
    pub id: i64,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub gender: String,
    pub origin: Place,
    pub location: Place,
    pub image: String,
    pub episode: Vec<String>,
    pub url: String,
    pub created: String,
}

impl CharacterRecord {
    fn new(
        id: i64,
        name: &str,
        gender: &str,
        origin: (&str, i64),
        location: (&str, i64),
        episodes: &[u32],
        created: &str,
    ) -> Self {
        Self {
            id,
            name: name.to_string(),
            status: "Alive".to_string(),
            species: "Human".to_string(),
            kind: String::new(),
            gender: gender.to_string(),
            origin: place(origin),
            location: place(location),
            image: format!("{API_ROOT}/character/avatar/{id}.jpeg"),
            episode: episodes
                .iter()
                .map(|n| format!("{API_ROOT}/episode/{n}"))
                .collect(),
            url: format!("{API_ROOT}/character/{id}"),
            created: created.to_string(),
        }
    }
}

/// Location reference; id 0 means upstream has no URL for it.
fn place((name, id): (&str, i64)) -> Place {
    Place {
        name: name.to_string(),
        url: if id == 0 {
            String::new()
        } else {
            format!("{API_ROOT}/location/{id}")
        },
    }
}

/// The built-in characters, keyed by id.
pub fn roster() -> HashMap<i64, CharacterRecord> {
    [
        CharacterRecord::new(
            1,
            "Rick Sanchez",
            "Male",
            ("Earth (C-137)", 1),
            ("Citadel of Ricks", 3),
            &[1, 2, 3],
            "2017-11-04T18:48:46.250Z",
        ),
        CharacterRecord::new(
            2,
            "Morty Smith",
            "Male",
            ("unknown", 0),
            ("Citadel of Ricks", 3),
            &[1, 2, 3],
            "2017-11-04T18:50:21.651Z",
        ),
        CharacterRecord::new(
            3,
            "Summer Smith",
            "Female",
            ("Earth (Replacement Dimension)", 20),
            ("Earth (Replacement Dimension)", 20),
            &[6, 7, 8],
            "2017-11-04T19:09:56.428Z",
        ),
        CharacterRecord::new(
            4,
            "Beth Smith",
            "Female",
            ("Earth (Replacement Dimension)", 20),
            ("Earth (Replacement Dimension)", 20),
            &[6, 7, 8],
            "2017-11-04T19:22:43.665Z",
        ),
        CharacterRecord::new(
            5,
            "Jerry Smith",
            "Male",
            ("Earth (Replacement Dimension)", 20),
            ("Earth (Replacement Dimension)", 20),
            &[6, 7, 8],
            "2017-11-04T19:26:56.301Z",
        ),
    ]
    .into_iter()
    .map(|record| (record.id, record))
    .collect()
}

pub type Db = Arc<HashMap<i64, CharacterRecord>>;

pub fn app() -> Router {
    let db: Db = Arc::new(roster());
    Router::new()
        .route("/character/{id}", get(get_character))
        .with_state(db)
}

#[derive(Clone)]
struct Canned {
    status: StatusCode,
    body: Arc<str>,
}

/// Router answering every `GET /character/{id}` with `status` and `body`.
pub fn stub(status: StatusCode, body: impl Into<String>) -> Router {
    let body: String = body.into();
    let canned = Canned {
        status,
        body: Arc::from(body),
    };
    Router::new()
        .route("/character/{id}", get(canned_response))
        .with_state(canned)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    serve(listener, app()).await
}

pub async fn serve(listener: TcpListener, router: Router) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("mock character API listening on {addr}");
    }
    axum::serve(listener, router).await
}

async fn get_character(State(db): State<Db>, Path(id): Path<i64>) -> Response {
    match db.get(&id) {
        Some(record) => {
            tracing::debug!(id, "character found");
            Json(record.clone()).into_response()
        }
        None => {
            tracing::debug!(id, "character not found");
            (
                StatusCode::CREATED,
                Json(serde_json::json!({ "error": NOT_FOUND_MESSAGE })),
            )
                .into_response()
        }
    }
}

async fn canned_response(State(canned): State<Canned>) -> Response {
    (
        canned.status,
        [(header::CONTENT_TYPE, "application/json")],
        canned.body.to_string(),
    )
        .into_response()
}
