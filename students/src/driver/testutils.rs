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

//! Test utilities for the business layer.

use crate::db;
use crate::driver::Driver;
use crate::model::{ClassName, JoinDate, NewStudent, Student, StudentId, StudentName};
use iii_iv_core::clocks::Clock;
use iii_iv_core::clocks::testutils::SettableClock;
use iii_iv_core::db::{Db, DbError, Executor};
use std::sync::Arc;
use time::macros::datetime;

/// Syntactic sugar to build a valid student given only its `id` and `name`.
pub(crate) fn new_student(id: i64, name: &str) -> NewStudent {
    NewStudent::new(
        StudentId::new(id).unwrap(),
        StudentName::new(name).unwrap(),
        ClassName::new("Grade 10").unwrap(),
        JoinDate::parse("2025-08-17").unwrap(),
    )
}

/// State of a running test.
pub(crate) struct TestContext {
    /// The database backing the driver.
    db: Arc<dyn Db + Send + Sync>,

    /// The clock handed to the driver, which tests can adjust at will.
    pub(crate) clock: Arc<SettableClock>,

    /// The driver under test.
    driver: Driver,
}

impl TestContext {
    /// Initializes the driver using an in-memory database with the schema in place and a
    /// settable clock.
    pub(crate) async fn setup() -> Self {
        let db: Arc<dyn Db + Send + Sync> =
            Arc::new(iii_iv_core::db::sqlite::testutils::setup().await);
        db::init_schema(&mut db.ex().await.unwrap()).await.unwrap();
        let clock = Arc::new(SettableClock::new(datetime!(2025-08-17 09:30:00 UTC)));
        let driver = Driver::new(db.clone(), clock.clone());
        Self { db, clock, driver }
    }

    /// Gets a direct executor against the database.
    pub(crate) async fn ex(&self) -> Executor {
        self.db.ex().await.unwrap()
    }

    /// Gets a copy of the driver in this test context.
    pub(crate) fn driver(&self) -> Driver {
        self.driver.clone()
    }

    /// Stores a student by directly modifying the backing database.
    pub(crate) async fn insert(&self, id: i64, name: &str) -> Student {
        db::insert_student(&mut self.ex().await, new_student(id, name), self.clock.now_utc())
            .await
            .unwrap()
    }

    /// Gets the student `id` by directly querying the backing database.
    pub(crate) async fn get(&self, id: i64) -> Student {
        db::get_student(&mut self.ex().await, StudentId::new(id).unwrap()).await.unwrap()
    }

    /// Checks if the student `id` exists by directly querying the backing database.
    pub(crate) async fn has(&self, id: StudentId) -> bool {
        match db::get_student(&mut self.ex().await, id).await {
            Ok(_) => true,
            Err(DbError::NotFound) => false,
            Err(e) => panic!("{:?}", e),
        }
    }

    /// Counts the stored students by directly querying the backing database.
    pub(crate) async fn count(&self) -> usize {
        db::list_students(&mut self.ex().await).await.unwrap().len()
    }

    /// Closes the database.
    pub(crate) async fn close(&self) {
        self.db.close().await;
    }
}
