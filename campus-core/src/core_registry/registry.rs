//! Registry - Main Orchestrator for Campus Records
//!
//! This module composes the three record stores and keeps their paired
//! associations in step.
//!
//! # Responsibilities
//!
//! - **Record Intake**: Adds students, faculty, and courses to their stores
//! - **Enrollment**: Writes the student↔course association on both sides
//! - **Assignment**: Writes the faculty→course association
//! - **Lookups**: Non-failing association and existence queries
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────────┐
//! │       Registry       │
//! └───┬──────┬──────┬────┘
//!     │      │      │
//!     ▼      ▼      ▼
//! Students Faculty Courses
//! ```
//!
//! Each store has its own lock, and the registry never holds two at
//! once. A concurrent reader can therefore observe an enrollment that
//! has reached the student store but not yet the course store.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::config::RegistryConfig;
use crate::core_registry::metrics;
use crate::core_registry::model::{Course, CourseId, Faculty, FacultyId, Student, StudentId};
use crate::core_registry::store::{CourseStore, FacultyStore, RegistryResult, StudentStore};

/// Registry - orchestrates the student, faculty, and course stores
#[derive(Debug)]
pub struct Registry {
    /// Student records and their enrolled-course sets
    students: StudentStore,

    /// Faculty records and their assigned-course sets
    faculty: FacultyStore,

    /// Course records with rosters and a stored faculty id
    courses: CourseStore,
}

/// Point-in-time record counts across the three stores.
///
/// Each count is read from its store independently, so under concurrent
/// writes the three numbers may come from slightly different moments.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryStats {
    /// Number of student records
    pub students: usize,
    /// Number of faculty records
    pub faculty: usize,
    /// Number of course records
    pub courses: usize,
}

impl Registry {
    /// Create a registry with empty stores.
    pub fn new() -> Self {
        info!("Creating Registry");

        Self {
            students: StudentStore::new(),
            faculty: FacultyStore::new(),
            courses: CourseStore::new(),
        }
    }

    /// Create a registry with stores pre-sized from configuration.
    ///
    /// # Arguments
    ///
    /// * `config` - Registry section of the application configuration
    pub fn with_config(config: &RegistryConfig) -> Self {
        info!(
            initial_capacity = config.initial_capacity,
            "Creating Registry"
        );

        Self {
            students: StudentStore::with_capacity(config.initial_capacity),
            faculty: FacultyStore::with_capacity(config.initial_capacity),
            courses: CourseStore::with_capacity(config.initial_capacity),
        }
    }

    /// Register a student.
    ///
    /// Adding an id that already exists replaces the record, dropping
    /// its course set; the displaced record is returned so the caller
    /// can tell the two cases apart.
    pub fn add_student(
        &self,
        id: StudentId,
        name: impl Into<String>,
    ) -> RegistryResult<Option<Student>> {
        let name = name.into();
        debug!(student_id = %id, name = %name, "Adding student");
        self.students.add_student(id, name)
    }

    /// Register a faculty member.
    ///
    /// Same overwrite behavior as [`add_student`](Self::add_student).
    pub fn add_faculty(
        &self,
        id: FacultyId,
        name: impl Into<String>,
    ) -> RegistryResult<Option<Faculty>> {
        let name = name.into();
        debug!(faculty_id = %id, name = %name, "Adding faculty");
        self.faculty.add_faculty(id, name)
    }

    /// Register a course taught by `faculty_id`.
    ///
    /// The faculty id is stored on the course without checking the
    /// faculty roster; a course may name a teacher the registry has
    /// never seen. Same overwrite behavior as
    /// [`add_student`](Self::add_student).
    pub fn add_course(
        &self,
        id: CourseId,
        name: impl Into<String>,
        faculty_id: FacultyId,
    ) -> RegistryResult<Option<Course>> {
        let name = name.into();
        debug!(course_id = %id, name = %name, faculty_id = %faculty_id, "Adding course");
        self.courses.add_course(id, name, faculty_id)
    }

    /// Enroll a student in a course, updating both sides.
    ///
    /// This performs two writes:
    /// 1. Adds the course to the student's course set
    /// 2. Adds the student to the course's roster
    ///
    /// Both records must already exist. If the student is missing,
    /// nothing is written. If the course is missing, the write from
    /// step 1 has already landed and is not rolled back: the student
    /// lists a course that has no matching roster entry.
    ///
    /// Enrolling an already-enrolled student succeeds and changes
    /// nothing.
    ///
    /// # Arguments
    ///
    /// * `student_id` - Student to enroll
    /// * `course_id` - Course to enroll them in
    ///
    /// # Example
    ///
    /// ```ignore
    /// registry.add_student(StudentId::new(501), "Ada Lovelace")?;
    /// registry.add_course(CourseId::new(101), "Distributed Systems", FacultyId::new(1))?;
    /// registry.enroll_in_course(StudentId::new(501), CourseId::new(101))?;
    /// ```
    pub fn enroll_in_course(
        &self,
        student_id: StudentId,
        course_id: CourseId,
    ) -> RegistryResult<()> {
        debug!(student_id = %student_id, course_id = %course_id, "Enrolling student in course");

        // Step 1: record the course on the student
        self.students
            .enroll_in_course(student_id, course_id)
            .map_err(|e| {
                warn!(
                    student_id = %student_id,
                    course_id = %course_id,
                    "Enrollment rejected: student not registered"
                );
                e
            })?;

        // Step 2: record the student on the course roster. No rollback
        // crosses store boundaries, so a failure here leaves the
        // student-side entry from step 1 in place.
        self.courses
            .enroll_student(course_id, student_id)
            .map_err(|e| {
                warn!(
                    student_id = %student_id,
                    course_id = %course_id,
                    "Enrollment half-applied: course not registered"
                );
                e
            })?;

        metrics::enrollment_recorded();
        debug!(student_id = %student_id, course_id = %course_id, "Enrollment recorded");
        Ok(())
    }

    /// Assign a course to a faculty member.
    ///
    /// Only the faculty record is written: the course keeps whatever
    /// faculty id it was created with, so a reassignment shows up in
    /// [`get_faculty_courses`](Self::get_faculty_courses) but not on
    /// the course record itself.
    ///
    /// Assigning an already-assigned course succeeds and changes
    /// nothing.
    ///
    /// # Arguments
    ///
    /// * `faculty_id` - Faculty member taking the course
    /// * `course_id` - Course being assigned
    pub fn assign_course(&self, faculty_id: FacultyId, course_id: CourseId) -> RegistryResult<()> {
        debug!(faculty_id = %faculty_id, course_id = %course_id, "Assigning course to faculty");

        self.faculty
            .assign_course(faculty_id, course_id)
            .map_err(|e| {
                warn!(
                    faculty_id = %faculty_id,
                    course_id = %course_id,
                    "Assignment rejected: faculty not registered"
                );
                e
            })?;

        metrics::assignment_recorded();
        Ok(())
    }

    /// Course ids the student is enrolled in; empty if the id is unknown.
    pub fn get_student_courses(&self, student_id: StudentId) -> HashSet<CourseId> {
        self.students.get_courses(student_id)
    }

    /// Course ids assigned to the faculty member; empty if the id is unknown.
    pub fn get_faculty_courses(&self, faculty_id: FacultyId) -> HashSet<CourseId> {
        self.faculty.get_courses(faculty_id)
    }

    /// Student ids on the course roster; empty if the id is unknown.
    pub fn get_course_students(&self, course_id: CourseId) -> HashSet<StudentId> {
        self.courses.get_students(course_id)
    }

    /// Whether a student with this id is registered.
    pub fn has_student(&self, id: StudentId) -> bool {
        self.students.has_student(id)
    }

    /// Whether a faculty member with this id is registered.
    pub fn has_faculty(&self, id: FacultyId) -> bool {
        self.faculty.has_faculty(id)
    }

    /// Whether a course with this id is registered.
    pub fn has_course(&self, id: CourseId) -> bool {
        self.courses.has_course(id)
    }

    /// Record counts across all three stores.
    pub fn stats(&self) -> RegistryStats {
        RegistryStats {
            students: self.students.len(),
            faculty: self.faculty.len(),
            courses: self.courses.len(),
        }
    }

    /// Direct access to the student store.
    ///
    /// Enrollments written here land on the student record only; the
    /// course roster is left untouched, unlike
    /// [`enroll_in_course`](Self::enroll_in_course).
    pub fn students(&self) -> &StudentStore {
        &self.students
    }

    /// Direct access to the faculty store.
    ///
    /// Mutations made here bypass the registry's logging and
    /// association counters.
    pub fn faculty(&self) -> &FacultyStore {
        &self.faculty
    }

    /// Direct access to the course store.
    ///
    /// Roster entries written here land on the course record only; the
    /// student's course set is left untouched, unlike
    /// [`enroll_in_course`](Self::enroll_in_course).
    pub fn courses(&self) -> &CourseStore {
        &self.courses
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
