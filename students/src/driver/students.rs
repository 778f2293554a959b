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

//! Operations on the collection of students.

use crate::db;
use crate::driver::Driver;
use crate::model::{NewStudent, Student};
use iii_iv_core::driver::{DriverError, DriverResult};
use iii_iv_core::db::DbError;

/// Error message returned when a student cannot be created because its identifier is taken.
const ALREADY_EXISTS_MESSAGE: &str = "Student with this ID already exists";

impl Driver {
    /// Gets all students sorted by their identifier.
    pub(crate) async fn list_students(self) -> DriverResult<Vec<Student>> {
        let mut tx = self.db.begin().await?;
        let students = db::list_students(tx.ex()).await?;
        tx.commit().await?;
        Ok(students)
    }

    /// Stores the `new` student, timestamping it with the current time.
    pub(crate) async fn create_student(self, new: NewStudent) -> DriverResult<Student> {
        let mut tx = self.db.begin().await?;

        if db::student_exists(tx.ex(), *new.id()).await? {
            return Err(DriverError::AlreadyExists(ALREADY_EXISTS_MESSAGE.to_owned()));
        }

        let now = self.clock.now_utc();
        let student = match db::insert_student(tx.ex(), new, now).await {
            Ok(student) => student,
            Err(DbError::AlreadyExists) => {
                return Err(DriverError::AlreadyExists(ALREADY_EXISTS_MESSAGE.to_owned()));
            }
            Err(e) => return Err(e.into()),
        };

        tx.commit().await?;
        Ok(student)
    }
}
