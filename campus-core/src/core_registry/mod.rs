/*
    core_registry - In-memory campus records layer

    The authoritative in-process state for students, faculty, and
    courses. Handles:
    - Data models (records and their id newtypes)
    - Per-family keyed stores behind reader-writer locks
    - The registry façade that keeps paired associations in step
    - Operation counters for observability
*/

pub mod metrics;
pub mod model;
pub mod registry;
pub mod store;

#[cfg(test)]
pub mod tests;

// Re-export commonly used types
pub use model::{Course, CourseId, Faculty, FacultyId, Student, StudentId};
pub use registry::{Registry, RegistryStats};
pub use store::{CourseStore, FacultyStore, RegistryError, RegistryResult, StudentStore};
