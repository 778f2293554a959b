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

//! Entry point to the REST server.

use crate::driver::Driver;
use crate::model::StudentId;
use axum::Router;
use axum::extract::Path;
use axum::extract::rejection::PathRejection;
use axum::middleware::from_fn;
use iii_iv_core::rest::{RestResult, log_requests};

mod health_get;
mod root_get;
mod student_delete;
mod student_get;
mod students_get;
mod students_post;
#[cfg(test)]
mod testutils;

/// Creates the router for the application.
pub(crate) fn app(driver: Driver) -> Router {
    use axum::routing::get;
    Router::new()
        .route("/", get(root_get::handler))
        .route("/health", get(health_get::handler))
        .route("/students", get(students_get::handler).post(students_post::handler))
        .route("/students/:id", get(student_get::handler).delete(student_delete::handler))
        .with_state(driver)
        .layer(from_fn(log_requests))
}

/// Validates the student identifier extracted from the request path.
fn parse_id(path: Result<Path<i64>, PathRejection>) -> RestResult<StudentId> {
    let Path(id) = path?;
    Ok(StudentId::new(id)?)
}
