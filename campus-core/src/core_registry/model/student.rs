/*
    student.rs - Student record

    A student owns its enrollment back-references as a plain id set. The set
    is denormalized: the authoritative pairing lives on both the student and
    the course record, and only the Registry facade keeps the two sides in
    sync.
*/

use super::types::{CourseId, StudentId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Student record: identity plus the set of enrolled course ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Student {
    /// Unique student id (immutable after creation)
    pub id: StudentId,

    /// Display name
    pub name: String,

    /// Ids of courses the student is enrolled in (unique, unordered)
    pub courses: HashSet<CourseId>,
}

impl Student {
    /// Create a new student with an empty course set
    pub fn new(id: StudentId, name: impl Into<String>) -> Self {
        Student {
            id,
            name: name.into(),
            courses: HashSet::new(),
        }
    }

    /// Record an enrollment; returns false if the course was already present
    pub fn enroll(&mut self, course_id: CourseId) -> bool {
        self.courses.insert(course_id)
    }

    /// Check whether the student is enrolled in a course
    pub fn is_enrolled_in(&self, course_id: CourseId) -> bool {
        self.courses.contains(&course_id)
    }

    /// Number of enrolled courses
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_creation() {
        let student = Student::new(StudentId::new(501), "Bob");
        assert_eq!(student.id, StudentId::new(501));
        assert_eq!(student.name, "Bob");
        assert!(student.courses.is_empty());
    }

    #[test]
    fn test_enroll_is_idempotent() {
        let mut student = Student::new(StudentId::new(501), "Bob");
        assert!(student.enroll(CourseId::new(101)));
        assert!(!student.enroll(CourseId::new(101)));
        assert_eq!(student.course_count(), 1);
        assert!(student.is_enrolled_in(CourseId::new(101)));
    }

    #[test]
    fn test_enroll_multiple_courses() {
        let mut student = Student::new(StudentId::new(501), "Bob");
        student.enroll(CourseId::new(101));
        student.enroll(CourseId::new(102));
        assert_eq!(student.course_count(), 2);
        assert!(!student.is_enrolled_in(CourseId::new(103)));
    }
}
