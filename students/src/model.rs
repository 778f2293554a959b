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

//! High-level data types.

use derive_getters::Getters;
use iii_iv_core::model::{ModelError, ModelResult};
use serde::de::Visitor;
use serde::{Deserialize, Serialize};
use time::format_description::FormatItem;
use time::macros::format_description;
use time::{Date, OffsetDateTime};

/// Maximum length of a student name as specified in the schema.
pub(crate) const MAX_NAME_LENGTH: usize = 100;

/// Maximum length of a class name as specified in the schema.
pub(crate) const MAX_CLASS_LENGTH: usize = 50;

/// Wire and storage format of dates.
const DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// Caller-assigned identifier of a student.  Always positive.
#[derive(Clone, Copy, Debug, Deserialize, Eq, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(try_from = "i64", into = "i64")]
pub(crate) struct StudentId(i64);

impl StudentId {
    /// Creates a new identifier from an untrusted `id`, making sure it is positive.
    pub(crate) fn new(id: i64) -> ModelResult<Self> {
        if id < 1 {
            return Err(ModelError("id must be a positive integer".to_owned()));
        }
        Ok(Self(id))
    }

    /// Returns the identifier as stored in the database.
    pub(crate) fn as_i64(&self) -> i64 {
        self.0
    }
}

impl TryFrom<i64> for StudentId {
    type Error = ModelError;

    fn try_from(id: i64) -> ModelResult<Self> {
        StudentId::new(id)
    }
}

impl From<StudentId> for i64 {
    fn from(id: StudentId) -> Self {
        id.0
    }
}

/// Validates that the untrusted `s` is usable as the text field `field` of at most `max`
/// characters.
fn validate_text(field: &str, s: String, max: usize) -> ModelResult<String> {
    if s.is_empty() {
        return Err(ModelError(format!("{} cannot be empty", field)));
    }
    if s.chars().count() > max {
        return Err(ModelError(format!("{} cannot be longer than {} characters", field, max)));
    }
    Ok(s)
}

/// Full name of a student.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "String")]
pub(crate) struct StudentName(String);

impl StudentName {
    /// Creates a new name from an untrusted string `s`, making sure it is valid.
    pub(crate) fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        validate_text("name", s.into(), MAX_NAME_LENGTH).map(Self)
    }

    /// Returns a string view of the name.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for StudentName {
    type Error = ModelError;

    fn try_from(s: String) -> ModelResult<Self> {
        StudentName::new(s)
    }
}

/// Name of the class a student is enrolled in.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(try_from = "String")]
pub(crate) struct ClassName(String);

impl ClassName {
    /// Creates a new class name from an untrusted string `s`, making sure it is valid.
    pub(crate) fn new<S: Into<String>>(s: S) -> ModelResult<Self> {
        validate_text("enrolled_class", s.into(), MAX_CLASS_LENGTH).map(Self)
    }

    /// Returns a string view of the class name.
    pub(crate) fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ClassName {
    type Error = ModelError;

    fn try_from(s: String) -> ModelResult<Self> {
        ClassName::new(s)
    }
}

/// Calendar date on which a student joined.
///
/// Only dates written as `YYYY-MM-DD` are accepted, and they are always written back in exactly
/// the same form.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub(crate) struct JoinDate(Date);

impl JoinDate {
    /// Parses an untrusted string `s` as a `YYYY-MM-DD` date.
    pub(crate) fn parse(s: &str) -> ModelResult<Self> {
        let error = || ModelError(format!("date_joined must be a valid YYYY-MM-DD date: '{}'", s));

        let date = Date::parse(s, DATE_FORMAT).map_err(|_| error())?;
        let join_date = Self(date);
        if join_date.to_string() != s {
            return Err(error());
        }
        Ok(join_date)
    }

    /// Returns the date.
    pub(crate) fn as_date(&self) -> Date {
        self.0
    }
}

impl From<Date> for JoinDate {
    fn from(date: Date) -> Self {
        Self(date)
    }
}

impl std::fmt::Display for JoinDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = self.0.format(DATE_FORMAT).map_err(|_| std::fmt::Error)?;
        f.write_str(&s)
    }
}

impl Serialize for JoinDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

/// A deserialization visitor for a `JoinDate`.
struct JoinDateVisitor;

impl Visitor<'_> for JoinDateVisitor {
    type Value = JoinDate;

    fn expecting(&self, formatter: &mut std::fmt::Formatter) -> std::fmt::Result {
        formatter.write_str("a date in YYYY-MM-DD format")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        JoinDate::parse(v).map_err(|e| E::custom(e.to_string()))
    }
}

impl<'de> Deserialize<'de> for JoinDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        deserializer.deserialize_str(JoinDateVisitor)
    }
}

/// A student as requested by a caller, before it is persisted.
#[derive(Clone, Getters)]
#[cfg_attr(test, derive(Debug, PartialEq))]
pub(crate) struct NewStudent {
    /// Identifier of the student.
    id: StudentId,

    /// Full name of the student.
    name: StudentName,

    /// Class the student is enrolled in.
    enrolled_class: ClassName,

    /// Date on which the student joined.
    date_joined: JoinDate,
}

impl NewStudent {
    /// Creates a new student from already-validated fields.
    pub(crate) fn new(
        id: StudentId,
        name: StudentName,
        enrolled_class: ClassName,
        date_joined: JoinDate,
    ) -> Self {
        Self { id, name, enrolled_class, date_joined }
    }

    /// Attaches the insertion timestamp to this student, yielding the persisted form.
    pub(crate) fn into_persisted(self, created_at: OffsetDateTime) -> Student {
        Student {
            id: self.id,
            name: self.name,
            enrolled_class: self.enrolled_class,
            date_joined: self.date_joined,
            created_at,
        }
    }
}

/// A student as stored in the database.
#[derive(Getters, Serialize)]
#[cfg_attr(test, derive(Clone, Debug, Deserialize, PartialEq))]
pub(crate) struct Student {
    /// Identifier of the student.
    id: StudentId,

    /// Full name of the student.
    name: StudentName,

    /// Class the student is enrolled in.
    enrolled_class: ClassName,

    /// Date on which the student joined.
    date_joined: JoinDate,

    /// Time at which the student was stored.
    #[serde(with = "time::serde::rfc3339")]
    created_at: OffsetDateTime,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_test::{Token, assert_de_tokens_error, assert_tokens};
    use time::macros::{date, datetime};

    #[test]
    fn test_student_id_ok() {
        assert_eq!(1, StudentId::new(1).unwrap().as_i64());
        assert_eq!(i64::MAX, StudentId::new(i64::MAX).unwrap().as_i64());
    }

    #[test]
    fn test_student_id_error() {
        assert_eq!(
            ModelError("id must be a positive integer".to_owned()),
            StudentId::new(0).unwrap_err()
        );
        assert!(StudentId::new(-5).is_err());
        assert_de_tokens_error::<StudentId>(&[Token::I64(0)], "id must be a positive integer");
    }

    #[test]
    fn test_student_name_ok() {
        assert_eq!("Ada Lovelace", StudentName::new("Ada Lovelace").unwrap().as_str());
        assert!(StudentName::new("x".repeat(MAX_NAME_LENGTH)).is_ok());
        assert!(StudentName::new("\u{00e9}".repeat(MAX_NAME_LENGTH)).is_ok());
    }

    #[test]
    fn test_student_name_error() {
        assert_eq!(
            ModelError("name cannot be empty".to_owned()),
            StudentName::new("").unwrap_err()
        );
        assert_eq!(
            ModelError("name cannot be longer than 100 characters".to_owned()),
            StudentName::new("x".repeat(MAX_NAME_LENGTH + 1)).unwrap_err()
        );
    }

    #[test]
    fn test_class_name_ok() {
        assert_eq!("Grade 10", ClassName::new("Grade 10").unwrap().as_str());
        assert!(ClassName::new("x".repeat(MAX_CLASS_LENGTH)).is_ok());
    }

    #[test]
    fn test_class_name_error() {
        assert_eq!(
            ModelError("enrolled_class cannot be empty".to_owned()),
            ClassName::new("").unwrap_err()
        );
        assert_eq!(
            ModelError("enrolled_class cannot be longer than 50 characters".to_owned()),
            ClassName::new("x".repeat(MAX_CLASS_LENGTH + 1)).unwrap_err()
        );
    }

    #[test]
    fn test_join_date_ok() {
        let d = JoinDate::parse("2025-08-17").unwrap();
        assert_eq!(date!(2025 - 08 - 17), d.as_date());
        assert_eq!("2025-08-17", d.to_string());
        assert_eq!("0999-01-02", JoinDate::parse("0999-01-02").unwrap().to_string());
    }

    #[test]
    fn test_join_date_error() {
        for s in ["", "2025-8-17", "2025-02-30", "17/08/2025", "2025-08-17T00:00:00", " 2025-08-17"]
        {
            assert!(JoinDate::parse(s).is_err(), "{} must have been rejected", s);
        }
    }

    #[test]
    fn test_join_date_ser_de_ok() {
        let d = JoinDate::parse("2024-02-29").unwrap();
        assert_tokens(&d, &[Token::Str("2024-02-29")]);
    }

    #[test]
    fn test_join_date_de_error() {
        assert_de_tokens_error::<JoinDate>(
            &[Token::Str("2023-02-29")],
            "date_joined must be a valid YYYY-MM-DD date: '2023-02-29'",
        );
    }

    #[test]
    fn test_into_persisted() {
        let new = NewStudent::new(
            StudentId::new(7).unwrap(),
            StudentName::new("Grace Hopper").unwrap(),
            ClassName::new("Navy 1").unwrap(),
            JoinDate::from(date!(2025 - 08 - 17)),
        );
        let created_at = datetime!(2025-08-17 09:30:00 UTC);
        let student = new.clone().into_persisted(created_at);
        assert_eq!(new.id(), student.id());
        assert_eq!(new.name(), student.name());
        assert_eq!(new.enrolled_class(), student.enrolled_class());
        assert_eq!(new.date_joined(), student.date_joined());
        assert_eq!(&created_at, student.created_at());
    }

    #[test]
    fn test_student_serialize() {
        let student = NewStudent::new(
            StudentId::new(3).unwrap(),
            StudentName::new("Alan Turing").unwrap(),
            ClassName::new("Maths").unwrap(),
            JoinDate::parse("2025-08-17").unwrap(),
        )
        .into_persisted(datetime!(2025-08-17 09:30:00.5 UTC));

        let json = serde_json::to_value(&student).unwrap();
        assert_eq!(
            serde_json::json!({
                "id": 3,
                "name": "Alan Turing",
                "enrolled_class": "Maths",
                "date_joined": "2025-08-17",
                "created_at": "2025-08-17T09:30:00.5Z",
            }),
            json
        );
    }
}
