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

//! API to add a new student.

use crate::driver::Driver;
use crate::model::{ClassName, JoinDate, NewStudent, Student, StudentId, StudentName};
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use axum::{Json, http};
use iii_iv_core::model::ModelError;
use iii_iv_core::rest::RestError;
use log::info;
use serde::{Deserialize, Serialize};

/// Message returned by the API on success.
const MESSAGE: &str = "Student added successfully!";

/// Student as supplied by the caller, before any validation.
#[derive(Deserialize)]
#[cfg_attr(test, derive(Serialize))]
pub(crate) struct StudentRequest {
    /// Identifier of the student.
    id: i64,

    /// Full name of the student.
    name: String,

    /// Class the student is enrolled in.
    enrolled_class: String,

    /// Date on which the student joined, as `YYYY-MM-DD`.
    date_joined: String,
}

impl TryFrom<StudentRequest> for NewStudent {
    type Error = ModelError;

    fn try_from(request: StudentRequest) -> Result<Self, Self::Error> {
        Ok(NewStudent::new(
            StudentId::new(request.id)?,
            StudentName::new(request.name)?,
            ClassName::new(request.enrolled_class)?,
            JoinDate::parse(&request.date_joined)?,
        ))
    }
}

/// Message returned by the API on success.
#[derive(Serialize)]
#[cfg_attr(test, derive(Debug, Deserialize, PartialEq))]
pub(crate) struct StudentCreatedResponse {
    /// Confirmation message.
    message: String,

    /// The student as stored.
    student: Student,
}

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    request: Result<Json<StudentRequest>, JsonRejection>,
) -> Result<impl IntoResponse, RestError> {
    let Json(request) = request?;
    let new = NewStudent::try_from(request)?;

    let student = driver.create_student(new).await?;
    info!("Added new student: {} (ID: {})", student.name().as_str(), student.id().as_i64());

    let response = StudentCreatedResponse { message: MESSAGE.to_owned(), student };
    Ok((http::StatusCode::CREATED, Json(response)))
}
