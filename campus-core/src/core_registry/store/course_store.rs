/* course_store.rs - Keyed store for course records

   Course records carry a faculty id alongside the enrolled-student set.
   The store treats that faculty id as plain data: it is set when the
   course is added and never checked against the faculty roster, which
   lives in a different store entirely.
*/

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::core_registry::metrics;
use crate::core_registry::model::{Course, CourseId, FacultyId, StudentId};
use crate::core_registry::store::errors::{handle_poison, RegistryError, RegistryResult};

/// Thread-safe store of course records keyed by id.
#[derive(Debug, Default)]
pub struct CourseStore {
    records: RwLock<HashMap<CourseId, Course>>,
}

impl CourseStore {
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

    /// Add a course, replacing any existing record under the same id.
    ///
    /// `faculty_id` is stored as-is; it is not required to match any
    /// registered faculty member. Returns the displaced record when the
    /// id was already present.
    pub fn add_course(
        &self,
        id: CourseId,
        name: impl Into<String>,
        faculty_id: FacultyId,
    ) -> RegistryResult<Option<Course>> {
        let mut records = self.records.write().map_err(handle_poison)?;
        let previous = records.insert(id, Course::new(id, name, faculty_id));
        if previous.is_some() {
            metrics::record_replaced("course");
        } else {
            metrics::record_added("course");
        }
        metrics::set_record_count("course", records.len());
        Ok(previous)
    }

    /// Record that `student_id` is on the course roster.
    ///
    /// Enrolling the same student twice is a no-op. Fails with
    /// [`RegistryError::CourseNotFound`] when the course id is unknown.
    pub fn enroll_student(&self, id: CourseId, student_id: StudentId) -> RegistryResult<()> {
        let mut records = self.records.write().map_err(handle_poison)?;
        match records.get_mut(&id) {
            Some(course) => {
                course.enroll(student_id);
                Ok(())
            }
            None => {
                metrics::association_target_missing("course");
                Err(RegistryError::CourseNotFound(id))
            }
        }
    }

    /// Student ids on the course roster.
    ///
    /// Unknown ids yield an empty set rather than an error, and a
    /// poisoned lock is treated the same way.
    pub fn get_students(&self, id: CourseId) -> HashSet<StudentId> {
        let records = match self.records.read() {
            Ok(guard) => guard,
            Err(_) => return HashSet::new(),
        };
        records
            .get(&id)
            .map(|course| course.students.clone())
            .unwrap_or_default()
    }

    /// Snapshot of a single course record.
    pub fn get(&self, id: CourseId) -> Option<Course> {
        let records = self.records.read().ok()?;
        records.get(&id).cloned()
    }

    /// Whether a course with this id exists.
    pub fn has_course(&self, id: CourseId) -> bool {
        self.records
            .read()
            .map(|records| records.contains_key(&id))
            .unwrap_or(false)
    }

    /// Ids of every course currently registered.
    pub fn list_courses(&self) -> Vec<CourseId> {
        self.records
            .read()
            .map(|records| records.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Number of courses currently registered.
    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
