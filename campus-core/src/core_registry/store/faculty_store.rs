/* faculty_store.rs - Keyed store for faculty records

   Same shape as the student store: records behind one reader-writer
   lock, writes surfacing poisoning as an error, reads degrading to an
   empty answer. The association tracked here is which course ids a
   faculty member teaches.
*/

use std::collections::{HashMap, HashSet};
use std::sync::RwLock;

use crate::core_registry::metrics;
use crate::core_registry::model::{CourseId, Faculty, FacultyId};
use crate::core_registry::store::errors::{handle_poison, RegistryError, RegistryResult};

/// Thread-safe store of faculty records keyed by id.
#[derive(Debug, Default)]
pub struct FacultyStore {
    records: RwLock<HashMap<FacultyId, Faculty>>,
}

impl FacultyStore {
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

    /// Add a faculty member, replacing any existing record under the same id.
    ///
    /// Returns the displaced record when the id was already present.
    pub fn add_faculty(
        &self,
        id: FacultyId,
        name: impl Into<String>,
    ) -> RegistryResult<Option<Faculty>> {
        let mut records = self.records.write().map_err(handle_poison)?;
        let previous = records.insert(id, Faculty::new(id, name));
        if previous.is_some() {
            metrics::record_replaced("faculty");
        } else {
            metrics::record_added("faculty");
        }
        metrics::set_record_count("faculty", records.len());
        Ok(previous)
    }

    /// Record that the faculty member teaches `course_id`.
    ///
    /// Assigning the same course twice is a no-op. Fails with
    /// [`RegistryError::FacultyNotFound`] when the faculty id is unknown.
    pub fn assign_course(&self, id: FacultyId, course_id: CourseId) -> RegistryResult<()> {
        let mut records = self.records.write().map_err(handle_poison)?;
        match records.get_mut(&id) {
            Some(faculty) => {
                faculty.assign(course_id);
                Ok(())
            }
            None => {
                metrics::association_target_missing("faculty");
                Err(RegistryError::FacultyNotFound(id))
            }
        }
    }

    /// Course ids taught by the faculty member.
    ///
    /// Unknown ids yield an empty set rather than an error, and a
    /// poisoned lock is treated the same way.
    pub fn get_courses(&self, id: FacultyId) -> HashSet<CourseId> {
        let records = match self.records.read() {
            Ok(guard) => guard,
            Err(_) => return HashSet::new(),
        };
        records
            .get(&id)
            .map(|faculty| faculty.courses.clone())
            .unwrap_or_default()
    }

    /// Snapshot of a single faculty record.
    pub fn get(&self, id: FacultyId) -> Option<Faculty> {
        let records = self.records.read().ok()?;
        records.get(&id).cloned()
    }

    /// Whether a faculty member with this id exists.
    pub fn has_faculty(&self, id: FacultyId) -> bool {
        self.records
            .read()
            .map(|records| records.contains_key(&id))
            .unwrap_or(false)
    }

    /// Ids of every faculty member currently registered.
    pub fn list_faculty(&self) -> Vec<FacultyId> {
        self.records
            .read()
            .map(|records| records.keys().copied().collect())
            .unwrap_or_default()
    }

    /// Number of faculty members currently registered.
    pub fn len(&self) -> usize {
        self.records.read().map(|records| records.len()).unwrap_or(0)
    }

    /// Whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_faculty_returns_none_for_new_id() {
        let store = FacultyStore::new();
        let result = store.add_faculty(FacultyId::new(1), "Dr. Katherine Johnson");
        assert!(matches!(result, Ok(None)));
        assert!(store.has_faculty(FacultyId::new(1)));
    }

    #[test]
    fn test_add_faculty_overwrites_and_returns_previous() {
        let store = FacultyStore::new();
        store
            .add_faculty(FacultyId::new(1), "Dr. Katherine Johnson")
            .unwrap();
        store
            .assign_course(FacultyId::new(1), CourseId::new(101))
            .unwrap();

        let previous = store
            .add_faculty(FacultyId::new(1), "Dr. Barbara Liskov")
            .unwrap()
            .unwrap();

        assert_eq!(previous.name, "Dr. Katherine Johnson");
        assert!(previous.teaches(CourseId::new(101)));
        assert!(store.get_courses(FacultyId::new(1)).is_empty());
    }

    #[test]
    fn test_assign_course_records_teaching_load() {
        let store = FacultyStore::new();
        store
            .add_faculty(FacultyId::new(3), "Dr. Barbara Liskov")
            .unwrap();

        store
            .assign_course(FacultyId::new(3), CourseId::new(101))
            .unwrap();
        store
            .assign_course(FacultyId::new(3), CourseId::new(202))
            .unwrap();
        store
            .assign_course(FacultyId::new(3), CourseId::new(101))
            .unwrap();

        let courses = store.get_courses(FacultyId::new(3));
        assert_eq!(courses.len(), 2);
        assert!(courses.contains(&CourseId::new(101)));
        assert!(courses.contains(&CourseId::new(202)));
    }

    #[test]
    fn test_assign_unknown_faculty_fails() {
        let store = FacultyStore::new();
        let result = store.assign_course(FacultyId::new(99), CourseId::new(101));
        assert!(matches!(result, Err(RegistryError::FacultyNotFound(id)) if id == FacultyId::new(99)));
    }

    #[test]
    fn test_get_courses_for_unknown_faculty_is_empty() {
        let store = FacultyStore::new();
        assert!(store.get_courses(FacultyId::new(42)).is_empty());
    }

    #[test]
    fn test_list_and_len() {
        let store = FacultyStore::new();
        assert!(store.is_empty());

        store
            .add_faculty(FacultyId::new(1), "Dr. Katherine Johnson")
            .unwrap();
        store
            .add_faculty(FacultyId::new(2), "Dr. Barbara Liskov")
            .unwrap();

        let mut ids = store.list_faculty();
        ids.sort();
        assert_eq!(ids, vec![FacultyId::new(1), FacultyId::new(2)]);
        assert_eq!(store.len(), 2);
    }
}
