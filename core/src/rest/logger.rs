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

//! Middleware to log every request served by the app.

use axum::extract::Request;
use axum::middleware::Next;
use axum::response::Response;
use log::info;

/// Logs the method and URI of an incoming request and, once served, its response status.
///
/// Install with `axum::middleware::from_fn(log_requests)` as the outermost layer of the router so
/// that requests that do not match any route are logged too.
pub async fn log_requests(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    info!("Incoming request: {} {}", method, uri);

    let response = next.run(request).await;

    info!("Response status: {} for {} {}", response.status().as_u16(), method, uri);
    response
}
