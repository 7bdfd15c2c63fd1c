/*
    course.rs - Course record

    Carries one extra field the other records do not have: the assigned
    faculty id, fixed at creation time. The id is not checked against the
    faculty store, so it may reference a faculty member that was never added.
*/

use super::types::{CourseId, FacultyId, StudentId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Course record: identity, assigned faculty, and the enrolled-student set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    /// Unique course id (immutable after creation)
    pub id: CourseId,

    /// Display name
    pub name: String,

    /// Faculty member assigned at creation time; never updated afterwards
    pub faculty_id: FacultyId,

    /// Ids of enrolled students (unique, unordered)
    pub students: HashSet<StudentId>,
}

impl Course {
    /// Create a new course with an empty student set
    pub fn new(id: CourseId, name: impl Into<String>, faculty_id: FacultyId) -> Self {
        Course {
            id,
            name: name.into(),
            faculty_id,
            students: HashSet::new(),
        }
    }

    /// Record a student enrollment; returns false if already enrolled
    pub fn enroll(&mut self, student_id: StudentId) -> bool {
        self.students.insert(student_id)
    }

    /// Check whether a student is enrolled in this course
    pub fn has_student(&self, student_id: StudentId) -> bool {
        self.students.contains(&student_id)
    }

    /// Number of enrolled students
    pub fn student_count(&self) -> usize {
        self.students.len()
    }
}
