use serde::{Deserialize, Serialize};

use crate::listing::Searchable;

// ── Teacher ─────────────────────────────────────────────────────────

/// A teacher as served by the teacher-listing endpoint.
///
/// When nested inside a [`Classroom`] the API only sends the id and the
/// full name, so `name` and `surname` default to empty strings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Teacher {
    #[serde(rename = "teacherId")]
    pub id: i64,
    #[serde(rename = "teacherName", default)]
    pub name: String,
    #[serde(rename = "teacherSurname", default)]
    pub surname: String,
    #[serde(rename = "teacherFullName")]
    pub full_name: String,
}

impl Searchable for Teacher {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.surname.as_str(),
            self.full_name.as_str(),
        ]
    }
}

// ── Student ─────────────────────────────────────────────────────────

/// A student enrolled in a classroom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Student {
    #[serde(rename = "studentId")]
    pub id: i64,
    #[serde(rename = "fullName")]
    pub full_name: String,
}

// ── Classroom ───────────────────────────────────────────────────────

/// A classroom with its (optional) class teacher and enrolled students.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Classroom {
    #[serde(rename = "classRoomId")]
    pub id: i64,
    #[serde(rename = "classRoomName")]
    pub name: String,
    #[serde(rename = "classTeacher", default)]
    pub teacher: Option<Teacher>,
    pub students: Vec<Student>,
}

/// Label shown in place of a missing class teacher.
pub const NO_TEACHER_LABEL: &str = "No teacher assigned";

impl Classroom {
    /// Display name of the class teacher, or [`NO_TEACHER_LABEL`].
    pub fn teacher_display(&self) -> &str {
        self.teacher
            .as_ref()
            .map(|t| t.full_name.as_str())
            .unwrap_or(NO_TEACHER_LABEL)
    }
}

impl Searchable for Classroom {
    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str()];
        // A missing teacher contributes no field, so it can never match.
        if let Some(teacher) = &self.teacher {
            fields.push(teacher.full_name.as_str());
        }
        fields
    }
}
