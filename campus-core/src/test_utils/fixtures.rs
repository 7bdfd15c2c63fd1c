//! Test fixtures for creating common test objects
//!
//! Provides builder patterns and factory functions for creating test data.

use std::sync::atomic::{AtomicU32, Ordering};

use crate::core_registry::{CourseId, FacultyId, Registry, StudentId};

static NEXT_STUDENT_ID: AtomicU32 = AtomicU32::new(5000);
static NEXT_FACULTY_ID: AtomicU32 = AtomicU32::new(100);
static NEXT_COURSE_ID: AtomicU32 = AtomicU32::new(9000);

/// A student id guaranteed not to collide with ids from earlier calls.
pub fn next_student_id() -> StudentId {
    StudentId::new(NEXT_STUDENT_ID.fetch_add(1, Ordering::Relaxed))
}

/// A faculty id guaranteed not to collide with ids from earlier calls.
pub fn next_faculty_id() -> FacultyId {
    FacultyId::new(NEXT_FACULTY_ID.fetch_add(1, Ordering::Relaxed))
}

/// A course id guaranteed not to collide with ids from earlier calls.
pub fn next_course_id() -> CourseId {
    CourseId::new(NEXT_COURSE_ID.fetch_add(1, Ordering::Relaxed))
}

/// Builder for registries pre-populated with records
pub struct TestRegistryBuilder {
    students: Vec<(StudentId, String)>,
    faculty: Vec<(FacultyId, String)>,
    courses: Vec<(CourseId, String, FacultyId)>,
}

impl TestRegistryBuilder {
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            faculty: Vec::new(),
            courses: Vec::new(),
        }
    }

    pub fn with_student(mut self, id: u32, name: impl Into<String>) -> Self {
        self.students.push((StudentId::new(id), name.into()));
        self
    }

    pub fn with_faculty(mut self, id: u32, name: impl Into<String>) -> Self {
        self.faculty.push((FacultyId::new(id), name.into()));
        self
    }

    pub fn with_course(mut self, id: u32, name: impl Into<String>, faculty_id: u32) -> Self {
        self.courses
            .push((CourseId::new(id), name.into(), FacultyId::new(faculty_id)));
        self
    }

    pub fn build(self) -> Registry {
        let registry = Registry::new();
        for (id, name) in self.students {
            registry.add_student(id, name).unwrap();
        }
        for (id, name) in self.faculty {
            registry.add_faculty(id, name).unwrap();
        }
        for (id, name, faculty_id) in self.courses {
            registry.add_course(id, name, faculty_id).unwrap();
        }
        registry
    }
}

impl Default for TestRegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A small campus with enrollments and assignments already applied:
/// two students, one faculty member, and two courses, where student 501
/// takes both courses, student 502 takes only 101, and faculty 1
/// teaches both.
pub fn sample_campus() -> Registry {
    let registry = TestRegistryBuilder::new()
        .with_student(501, "Ada Lovelace")
        .with_student(502, "Alan Turing")
        .with_faculty(1, "Dr. Katherine Johnson")
        .with_course(101, "Distributed Systems", 1)
        .with_course(202, "Operating Systems", 1)
        .build();

    registry
        .enroll_in_course(StudentId::new(501), CourseId::new(101))
        .unwrap();
    registry
        .enroll_in_course(StudentId::new(501), CourseId::new(202))
        .unwrap();
    registry
        .enroll_in_course(StudentId::new(502), CourseId::new(101))
        .unwrap();
    registry
        .assign_course(FacultyId::new(1), CourseId::new(101))
        .unwrap();
    registry
        .assign_course(FacultyId::new(1), CourseId::new(202))
        .unwrap();

    registry
}
