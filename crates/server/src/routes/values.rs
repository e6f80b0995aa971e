use axum::{
    Router,
    extract::{DefaultBodyLimit, Json, State},
    http::StatusCode,
    response::Json as ResponseJson,
    routing::post,
};
use std::fmt;

use serde::{
    Deserialize, Deserializer,
    de::{self, IgnoredAny, MapAccess, Visitor},
};

use crate::{Deployment, error::ApiError};

/// Body of `POST /store-values`.
///
/// Only a JSON object decodes: unknown keys are skipped and a repeated `data`
/// key keeps its last value.
#[derive(Debug)]
pub struct Payload {
    pub data: String,
}

impl<'de> Deserialize<'de> for Payload {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(PayloadVisitor)
    }
}

struct PayloadVisitor;

impl<'de> Visitor<'de> for PayloadVisitor {
    type Value = Payload;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an object with a string `data` field")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Payload, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut data = None;
        while let Some(key) = map.next_key::<String>()? {
            if key == "data" {
                data = Some(map.next_value::<String>()?);
            } else {
                map.next_value::<IgnoredAny>()?;
            }
        }
        let data = data.ok_or_else(|| de::Error::missing_field("data"))?;
        Ok(Payload { data })
    }
}

/// Writes the submitted values to a new file and answers with its path.
///
/// Bodies that don't decode into [`Payload`] are rejected by the extractor
/// before any file is created.
pub async fn store_values(
    State(deployment): State<Deployment>,
    Json(payload): Json<Payload>,
) -> Result<(StatusCode, ResponseJson<String>), ApiError> {
    let path = deployment.values().store_values(&payload.data).await?;
    let path = path.to_string_lossy().into_owned();
    tracing::info!("Stored {} bytes of values at {}", payload.data.len(), path);
    Ok((StatusCode::CREATED, ResponseJson(path)))
}

pub fn router() -> Router<Deployment> {
    Router::new().route(
        "/store-values",
        post(store_values).layer(DefaultBodyLimit::max(20 * 1024 * 1024)), // 20MB limit
    )
}
