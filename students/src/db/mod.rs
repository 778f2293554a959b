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

//! Database abstraction to manipulate student records.

use crate::model::{ClassName, JoinDate, NewStudent, Student, StudentId, StudentName};
#[cfg(feature = "postgres")]
use iii_iv_core::db::postgres;
#[cfg(any(feature = "sqlite", test))]
use iii_iv_core::db::sqlite::{self, build_timestamp, unpack_timestamp};
use iii_iv_core::db::{DbError, DbResult, Executor};
use sqlx::Row;
#[cfg(feature = "postgres")]
use sqlx::postgres::PgRow;
#[cfg(any(feature = "sqlite", test))]
use sqlx::sqlite::SqliteRow;
use time::OffsetDateTime;


/// Initializes the database schema.  Safe to call on an already-initialized database.
pub(crate) async fn init_schema(ex: &mut Executor) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => postgres::run_schema(ex, include_str!("postgres.sql")).await,

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => sqlite::run_schema(ex, include_str!("sqlite.sql")).await,

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Issues a trivial query to verify that the database is reachable.
pub(crate) async fn ping(ex: &mut Executor) -> DbResult<()> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            sqlx::query("SELECT 1").execute(ex.conn()).await.map_err(postgres::map_sqlx_error)?;
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            sqlx::query("SELECT 1").execute(ex.conn()).await.map_err(sqlite::map_sqlx_error)?;
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
    Ok(())
}

#[cfg(feature = "postgres")]
impl TryFrom<PgRow> for Student {
    type Error = DbError;

    fn try_from(row: PgRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(postgres::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(postgres::map_sqlx_error)?;
        let enrolled_class: String =
            row.try_get("enrolled_class").map_err(postgres::map_sqlx_error)?;
        let date_joined: time::Date =
            row.try_get("date_joined").map_err(postgres::map_sqlx_error)?;
        let created_at: OffsetDateTime =
            row.try_get("created_at").map_err(postgres::map_sqlx_error)?;

        let student = NewStudent::new(
            StudentId::new(id)?,
            StudentName::new(name)?,
            ClassName::new(enrolled_class)?,
            JoinDate::from(date_joined),
        );
        Ok(student.into_persisted(created_at))
    }
}

#[cfg(any(feature = "sqlite", test))]
impl TryFrom<SqliteRow> for Student {
    type Error = DbError;

    fn try_from(row: SqliteRow) -> DbResult<Self> {
        let id: i64 = row.try_get("id").map_err(sqlite::map_sqlx_error)?;
        let name: String = row.try_get("name").map_err(sqlite::map_sqlx_error)?;
        let enrolled_class: String =
            row.try_get("enrolled_class").map_err(sqlite::map_sqlx_error)?;
        let date_joined: String = row.try_get("date_joined").map_err(sqlite::map_sqlx_error)?;
        let created_at_secs: i64 = row.try_get("created_at_secs").map_err(sqlite::map_sqlx_error)?;
        let created_at_nsecs: i64 =
            row.try_get("created_at_nsecs").map_err(sqlite::map_sqlx_error)?;

        let student = NewStudent::new(
            StudentId::new(id)?,
            StudentName::new(name)?,
            ClassName::new(enrolled_class)?,
            JoinDate::parse(&date_joined)?,
        );
        Ok(student.into_persisted(build_timestamp(created_at_secs, created_at_nsecs)?))
    }
}

/// Gets all students, sorted by their identifier.
pub(crate) async fn list_students(ex: &mut Executor) -> DbResult<Vec<Student>> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM students ORDER BY id";
            let rows =
                sqlx::query(query_str).fetch_all(ex.conn()).await.map_err(postgres::map_sqlx_error)?;
            rows.into_iter().map(Student::try_from).collect()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM students ORDER BY id";
            let rows =
                sqlx::query(query_str).fetch_all(ex.conn()).await.map_err(sqlite::map_sqlx_error)?;
            rows.into_iter().map(Student::try_from).collect()
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Gets the student identified by `id`.
pub(crate) async fn get_student(ex: &mut Executor, id: StudentId) -> DbResult<Student> {
    match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT * FROM students WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            Student::try_from(row)
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT * FROM students WHERE id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            Student::try_from(row)
        }

        #[allow(unused)]
        _ => unreachable!(),
    }
}

/// Checks whether a student identified by `id` exists.
pub(crate) async fn student_exists(ex: &mut Executor, id: StudentId) -> DbResult<bool> {
    let count: i64 = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "SELECT COUNT(*) AS count FROM students WHERE id = $1";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            row.try_get("count").map_err(postgres::map_sqlx_error)?
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "SELECT COUNT(*) AS count FROM students WHERE id = ?";
            let row = sqlx::query(query_str)
                .bind(id.as_i64())
                .fetch_one(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            row.try_get("count").map_err(sqlite::map_sqlx_error)?
        }

        #[allow(unused)]
        _ => unreachable!(),
    };
    Ok(count > 0)
}

/// Stores a `new` student with the `created_at` insertion timestamp.
///
/// Fails with `AlreadyExists` if a student with the same identifier is already stored.
pub(crate) async fn insert_student(
    ex: &mut Executor,
    new: NewStudent,
    created_at: OffsetDateTime,
) -> DbResult<Student> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "
                INSERT INTO students (id, name, enrolled_class, date_joined, created_at)
                VALUES ($1, $2, $3, $4, $5)";
            let done = sqlx::query(query_str)
                .bind(new.id().as_i64())
                .bind(new.name().as_str())
                .bind(new.enrolled_class().as_str())
                .bind(new.date_joined().as_date())
                .bind(created_at)
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let (created_at_secs, created_at_nsecs) = unpack_timestamp(created_at)?;

            let query_str = "
                INSERT INTO students
                    (id, name, enrolled_class, date_joined, created_at_secs, created_at_nsecs)
                VALUES (?, ?, ?, ?, ?, ?)";
            let done = sqlx::query(query_str)
                .bind(new.id().as_i64())
                .bind(new.name().as_str())
                .bind(new.enrolled_class().as_str())
                .bind(new.date_joined().to_string())
                .bind(created_at_secs)
                .bind(created_at_nsecs)
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    if rows_affected != 1 {
        return Err(DbError::BackendError("Insertion affected more than one row".to_owned()));
    }
    Ok(new.into_persisted(created_at))
}

/// Deletes the student identified by `id`.
pub(crate) async fn delete_student(ex: &mut Executor, id: StudentId) -> DbResult<()> {
    let rows_affected = match ex {
        #[cfg(feature = "postgres")]
        Executor::Postgres(ex) => {
            let query_str = "DELETE FROM students WHERE id = $1";
            let done = sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(postgres::map_sqlx_error)?;
            done.rows_affected()
        }

        #[cfg(any(feature = "sqlite", test))]
        Executor::Sqlite(ex) => {
            let query_str = "DELETE FROM students WHERE id = ?";
            let done = sqlx::query(query_str)
                .bind(id.as_i64())
                .execute(ex.conn())
                .await
                .map_err(sqlite::map_sqlx_error)?;
            done.rows_affected()
        }

        #[allow(unused)]
        _ => unreachable!(),
    };

    match rows_affected {
        0 => Err(DbError::NotFound),
        1 => Ok(()),
        _ => Err(DbError::BackendError("Deletion affected more than one row".to_owned())),
    }
}
