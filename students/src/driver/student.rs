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

//! Operations on one student.

use crate::db;
use crate::driver::Driver;
use crate::model::{Student, StudentId};
use iii_iv_core::db::DbError;
use iii_iv_core::driver::{DriverError, DriverResult};

/// Converts a database error into a driver error, describing missing students.
fn map_not_found(e: DbError) -> DriverError {
    match e {
        DbError::NotFound => DriverError::NotFound("Student not found".to_owned()),
        e => e.into(),
    }
}

impl Driver {
    /// Deletes the existing student identified by `id`.
    pub(crate) async fn delete_student(self, id: StudentId) -> DriverResult<()> {
        let mut tx = self.db.begin().await?;
        db::delete_student(tx.ex(), id).await.map_err(map_not_found)?;
        tx.commit().await?;
        Ok(())
    }

    /// Gets the student identified by `id`.
    pub(crate) async fn get_student(self, id: StudentId) -> DriverResult<Student> {
        let mut tx = self.db.begin().await?;
        let student = db::get_student(tx.ex(), id).await.map_err(map_not_found)?;
        tx.commit().await?;
        Ok(student)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::testutils::*;

    #[tokio::test]
    async fn test_delete_student_ok() {
        let context = TestContext::setup().await;

        context.insert(1, "Ada").await;
        context.insert(2, "Bob").await;

        context.driver().delete_student(StudentId::new(1).unwrap()).await.unwrap();

        assert!(!context.has(StudentId::new(1).unwrap()).await);
        assert!(context.has(StudentId::new(2).unwrap()).await);

        context.close().await;
    }

    #[tokio::test]
    async fn test_delete_student_not_found() {
        let context = TestContext::setup().await;

        context.insert(1, "Ada").await;

        assert_eq!(
            DriverError::NotFound("Student not found".to_owned()),
            context.driver().delete_student(StudentId::new(2).unwrap()).await.unwrap_err()
        );
        assert_eq!(1, context.count().await);

        context.close().await;
    }

    #[tokio::test]
    async fn test_get_student_ok() {
        let context = TestContext::setup().await;

        let exp_student = context.insert(1, "Ada").await;
        context.insert(2, "Bob").await;

        let student = context.driver().get_student(StudentId::new(1).unwrap()).await.unwrap();
        assert_eq!(exp_student, student);

        context.close().await;
    }

    #[tokio::test]
    async fn test_get_student_not_found() {
        let context = TestContext::setup().await;

        assert_eq!(
            DriverError::NotFound("Student not found".to_owned()),
            context.driver().get_student(StudentId::new(1).unwrap()).await.unwrap_err()
        );

        context.close().await;
    }
}
