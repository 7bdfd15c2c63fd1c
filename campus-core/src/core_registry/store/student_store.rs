/* student_store.rs - Keyed store for student records

   Maps student ids to records behind a single reader-writer lock, so
   any number of readers can inspect the roster while writers take the
   lock exclusively. Mutations surface lock poisoning as an error;
   read-only queries degrade to an empty answer instead, so lookups
   never fail.
*/

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::core_registry::metrics;
use crate::core_registry::model::{CourseId, Student, StudentId};
use crate::core_registry::store::errors::{handle_poison, RegistryError, RegistryResult};

/// Thread-safe store of student records keyed by id.
#[derive(Debug, Default)]
pub struct StudentStore {
    records: RwLock<HashMap<StudentId, Student>>,
}

impl StudentStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Create an empty store with room for `capacity` records.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: RwLock::new(HashMap::with_capacity(capacity)),
        }
    }

    /// Add a student, replacing any existing record under the same id.
    ///
    /// Returns the displaced record when the id was already present, so
    /// callers can tell an insert from an overwrite.
    pub fn add_student(
        &self,
        id: StudentId,
        name: impl Into<String>,
    ) -> RegistryResult<Option<Student>> {
        let mut records = self.records.write().map_err(handle_poison)?;
        let previous = records.insert(id, Student::new(id, name));
        if previous.is_some() {
            metrics::record_replaced("student");
        } else {
            metrics::record_added("student");
        }
        metrics::set_record_count("student", records.len());
        Ok(previous)
    }

    /// Record that the student is enrolled in `course_id`.
    ///
    /// Enrolling twice in the same course is a no-op. Fails with
    /// [`RegistryError::StudentNotFound`] when the student id is unknown.
    pub fn enroll_in_course(&self, id: StudentId, course_id: CourseId) -> RegistryResult<()> {
        let mut records = self.records.write().map_err(handle_poison)?;
        match records.get_mut(&id) {
            Some(student) => {
                student.enroll(course_id);
                Ok(())
            }
            None => {
                metrics::association_target_missing("student");
                Err(RegistryError::StudentNotFound(id))
            }
        }
    }

    /// Course ids the student is enrolled in.
    ///
    /// Unknown ids yield an empty set rather than an error, and a
    /// poisoned lock is treated the same way.
    pub fn get_courses(&self, id: StudentId) -> HashSet<CourseId> {
        let records = match self.records.read() {
            Ok(guard) => guard,
            Err(_) => return HashSet::new(),
        };
        records
            .get(&id)
            .map(|student| student.courses.clone())
            .unwrap_or_default()
    }

    /// Snapshot of a single student record.
    pub fn get(&self, id: StudentId) -> Option<Student> {
        let records = self.records.read().ok()?;
        records.get(&id).cloned()
    }

    /// Whether a student with this id exists.
    pub fn has_student(&self, id: StudentId) -> bool {
        self.records
            .read()
            .map(|records| records.contains_key(&id))
            .unwrap_or(false)
    }

    /// Ids of every student currently registered.
    pub fn list_students(&self) -> Vec<StudentId> {
        self.records
            .read()
            .map(|records| records.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Number of students currently registered.
    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
