// III-IV
// Copyright 2023 Julio Merino
//
// Licensed under the Apache License, Version 2.0 (the "License"); you may not
// use this file except in compliance with the License.  You may obtain a copy
// of the License at:
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS, WITHOUT
// WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.  See the
// License for the specific language governing permissions and limitations
// under the License.

//! API to check the health of the service.

use crate::driver::Driver;
use axum::Json;
use axum::extract::State;
use axum::response::IntoResponse;
use iii_iv_core::rest::{EmptyBody, RestError};
use log::{info, warn};
use serde::Serialize;
use time::OffsetDateTime;

/// Overall status of the service.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
#[serde(rename_all = "lowercase")]
pub(crate) enum ServiceStatus {
    /// All dependencies are reachable.
    Healthy,

    /// The service is up but some dependency is not reachable.
    Degraded,
}

/// Status of the database.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize, PartialEq))]
#[serde(rename_all = "lowercase")]
pub(crate) enum DbStatus {
    /// The database answered the probe.
    Ok,

    /// The probe against the database failed.
    Error,
}

/// Message returned by the API.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, serde::Deserialize))]
pub(crate) struct HealthResponse {
    /// Overall status of the service.
    status: ServiceStatus,

    /// Status of the database.
    db: DbStatus,

    /// Time at which the check ran.
    #[serde(with = "time::serde::rfc3339")]
    timestamp: OffsetDateTime,
}

/// API handler.
///
/// Always succeeds: a failure to reach the database is reported in the response body only.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    _: EmptyBody,
) -> Result<impl IntoResponse, RestError> {
    info!("Health check requested");

    let timestamp = driver.now_utc();
    let (status, db) = match driver.check_db().await {
        Ok(()) => (ServiceStatus::Healthy, DbStatus::Ok),
        Err(e) => {
            warn!("Database health probe failed: {}", e);
            (ServiceStatus::Degraded, DbStatus::Error)
        }
    };

    Ok(Json(HealthResponse { status, db, timestamp }))
}
