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

//! API to delete one student.

use crate::driver::Driver;
use crate::rest::parse_id;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::http;
use iii_iv_core::rest::{EmptyBody, RestError};
use log::info;

/// API handler.
pub(crate) async fn handler(
    State(driver): State<Driver>,
    id: Result<Path<i64>, PathRejection>,
    _: EmptyBody,
) -> Result<http::StatusCode, RestError> {
    let id = parse_id(id)?;
    driver.delete_student(id).await?;
    info!("Deleted student (ID: {})", id.as_i64());
    Ok(http::StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Student;
    use crate::rest::testutils::*;
    use iii_iv_core::rest::testutils::*;

    fn route(id: &str) -> (http::Method, String) {
        (http::Method::DELETE, format!("/students/{}", id))
    }

    #[tokio::test]
    async fn test_ok() {
        let context = TestContext::setup().await;

        context.insert(1, "Ada").await;
        context.insert(2, "Bob").await;

        OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NO_CONTENT)
            .expect_empty()
            .await;

        assert!(!context.has(1).await);
        assert!(context.has(2).await);

        context.close().await;
    }

    #[tokio::test]
    async fn test_not_found() {
        let context = TestContext::setup().await;

        context.insert(1, "Ada").await;

        OneShotBuilder::new(context.app(), route("2"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Student not found$")
            .await;

        assert_eq!(1, context.count().await);

        context.close().await;
    }

    #[tokio::test]
    async fn test_invalid_id() {
        let context = TestContext::setup().await;

        context.insert(1, "Ada").await;

        OneShotBuilder::new(context.app(), route("-1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::UNPROCESSABLE_ENTITY)
            .expect_error("id must be a positive integer")
            .await;

        assert_eq!(1, context.count().await);

        context.close().await;
    }

    #[tokio::test]
    async fn test_lifecycle() {
        let context = TestContext::setup().await;

        OneShotBuilder::new(context.app(), (http::Method::POST, "/students".to_owned()))
            .send_json(serde_json::json!({
                "id": 1,
                "name": "Ada",
                "enrolled_class": "Grade 10",
                "date_joined": "2025-08-17",
            }))
            .await
            .expect_status(http::StatusCode::CREATED)
            .take_body_as_text()
            .await;

        let get_route = (http::Method::GET, "/students/1".to_owned());
        let student = OneShotBuilder::new(context.app(), get_route)
            .send_empty()
            .await
            .expect_json::<Student>()
            .await;
        assert_eq!(1, student.id().as_i64());
        assert_eq!("Ada", student.name().as_str());
        assert_eq!("Grade 10", student.enrolled_class().as_str());
        assert_eq!("2025-08-17", student.date_joined().to_string());

        OneShotBuilder::new(context.app(), route("1"))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NO_CONTENT)
            .expect_empty()
            .await;

        OneShotBuilder::new(context.app(), (http::Method::GET, "/students/1".to_owned()))
            .send_empty()
            .await
            .expect_status(http::StatusCode::NOT_FOUND)
            .expect_error("^Student not found$")
            .await;

        context.close().await;
    }

    test_payload_must_be_empty!(TestContext::setup().await.into_app(), route("1"));
}
