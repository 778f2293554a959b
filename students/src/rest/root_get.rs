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

//! API to describe the service.

use axum::Json;
use axum::response::IntoResponse;
use iii_iv_core::rest::{EmptyBody, RestError};
use log::info;
use serde::Serialize;

/// Message returned by the API.
const MESSAGE: &str = "EduLink Backend is running now - Deployed via Docker & Magic Containers!";

/// Message returned by the API.
#[derive(Serialize)]
#[cfg_attr(test, derive(serde::Deserialize))]
pub(crate) struct RootResponse {
    /// Descriptive message about the service.
    message: String,
}

/// API handler.
pub(crate) async fn handler(_: EmptyBody) -> Result<impl IntoResponse, RestError> {
    info!("Root endpoint accessed");
    Ok(Json(RootResponse { message: MESSAGE.to_owned() }))
}
