/*
    faculty.rs - Faculty record

    Mirrors the student record: identity plus the set of taught course ids.
    Assignments accumulate and are never removed.
*/

use super::types::{CourseId, FacultyId};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Faculty record: identity plus the set of taught course ids
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faculty {
    /// Unique faculty id (immutable after creation)
    pub id: FacultyId,

    /// Display name
    pub name: String,

    /// Ids of courses this faculty member teaches (unique, unordered)
    pub courses: HashSet<CourseId>,
}

impl Faculty {
    /// Create a new faculty member with an empty taught-course set
    pub fn new(id: FacultyId, name: impl Into<String>) -> Self {
        Faculty {
            id,
            name: name.into(),
            courses: HashSet::new(),
        }
    }

    /// Record a course assignment; returns false if already assigned
    pub fn assign(&mut self, course_id: CourseId) -> bool {
        self.courses.insert(course_id)
    }

    /// Check whether this faculty member teaches a course
    pub fn teaches(&self, course_id: CourseId) -> bool {
        self.courses.contains(&course_id)
    }

    /// Number of taught courses
    pub fn course_count(&self) -> usize {
        self.courses.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_faculty_creation() {
        let faculty = Faculty::new(FacultyId::new(1), "Dr. A");
        assert_eq!(faculty.id, FacultyId::new(1));
        assert_eq!(faculty.name, "Dr. A");
        assert!(faculty.courses.is_empty());
    }

    #[test]
    fn test_assign_is_idempotent() {
        let mut faculty = Faculty::new(FacultyId::new(1), "Dr. A");
        assert!(faculty.assign(CourseId::new(101)));
        assert!(!faculty.assign(CourseId::new(101)));
        assert_eq!(faculty.course_count(), 1);
        assert!(faculty.teaches(CourseId::new(101)));
    }
}
