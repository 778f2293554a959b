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

//! Test utilities for the REST layer.

use crate::driver::testutils::TestContext as DriverTestContext;
use crate::model::{Student, StudentId};
use crate::rest::app;
use axum::Router;
use iii_iv_core::clocks::testutils::SettableClock;
use std::sync::Arc;

/// State of a running test.
pub(crate) struct TestContext {
    /// Context of the driver backing the app, used to access the database.
    inner: DriverTestContext,

    /// The app under test.
    app: Router,
}

impl TestContext {
    /// Initializes the REST app using an in-memory database.
    pub(crate) async fn setup() -> Self {
        let inner = DriverTestContext::setup().await;
        let app = app(inner.driver());
        Self { inner, app }
    }

    /// Consumes the context and transforms it into the app router.
    pub(crate) fn into_app(self) -> Router {
        self.app
    }

    /// Gets a clone of the app router.
    pub(crate) fn app(&self) -> Router {
        self.app.clone()
    }

    /// Gets the clock used by the app.
    pub(crate) fn clock(&self) -> Arc<SettableClock> {
        self.inner.clock.clone()
    }

    /// Stores a student by directly modifying the backing database.
    pub(crate) async fn insert(&self, id: i64, name: &str) -> Student {
        self.inner.insert(id, name).await
    }

    /// Gets the student `id` by directly querying the backing database.
    pub(crate) async fn get(&self, id: i64) -> Student {
        self.inner.get(id).await
    }

    /// Checks if the student `id` exists by directly querying the backing database.
    pub(crate) async fn has(&self, id: i64) -> bool {
        self.inner.has(StudentId::new(id).unwrap()).await
    }

    /// Counts the stored students by directly querying the backing database.
    pub(crate) async fn count(&self) -> usize {
        self.inner.count().await
    }

    /// Closes the database, which makes every later access to it fail.
    pub(crate) async fn close(&self) {
        self.inner.close().await;
    }
}
