/* mod.rs - Store layer for core_registry

   One store per record family, each wrapping its own reader-writer
   lock. Stores know nothing about each other; keeping the paired
   associations in sync is the registry's job.
*/

pub mod course_store;
pub mod errors;
pub mod faculty_store;
pub mod student_store;

pub use course_store::CourseStore;
pub use errors::{RegistryError, RegistryResult};
pub use faculty_store::FacultyStore;
pub use student_store::StudentStore;
