//! campus-core - In-memory registry for campus records
//!
//! This crate keeps students, faculty, and courses in three
//! independently locked stores and exposes a [`Registry`] façade that
//! maintains the associations between them.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────┐
//! │      Registry       │
//! └───┬──────┬──────┬───┘
//!     │      │      │
//!     ▼      ▼      ▼
//! Students Faculty Courses
//! ```
//!
//! # Quick Start
//!
//! ```
//! use campus_core::{CourseId, FacultyId, Registry, StudentId};
//!
//! let registry = Registry::new();
//! registry.add_student(StudentId::new(501), "Ada Lovelace")?;
//! registry.add_faculty(FacultyId::new(1), "Dr. Katherine Johnson")?;
//! registry.add_course(CourseId::new(101), "Distributed Systems", FacultyId::new(1))?;
//!
//! registry.enroll_in_course(StudentId::new(501), CourseId::new(101))?;
//! registry.assign_course(FacultyId::new(1), CourseId::new(101))?;
//!
//! assert!(registry
//!     .get_course_students(CourseId::new(101))
//!     .contains(&StudentId::new(501)));
//! # Ok::<(), campus_core::RegistryError>(())
//! ```
//!
//! # Modules
//!
//! - [`core_registry`] - Stores, records, and the registry façade
//! - [`config`] - Application configuration
//! - [`logging`] - Tracing-based logging setup
//! - [`test_utils`] - Fixtures and assertion helpers for tests

pub mod config;
pub mod core_registry;
pub mod logging;
pub mod test_utils;

pub use config::Config;
pub use core_registry::{
    Course, CourseId, CourseStore, Faculty, FacultyId, FacultyStore, Registry, RegistryError,
    RegistryResult, RegistryStats, Student, StudentId, StudentStore,
};
pub use logging::{init_logging, LogLevel};
