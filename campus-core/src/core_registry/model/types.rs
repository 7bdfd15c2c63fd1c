/*
    types.rs - Common identifier types for core_registry models

    Defines:
    - Numeric id newtypes for students, faculty, and courses

    Ids are assigned by the caller and never generated internally; the
    registry treats them as opaque keys.
*/

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unique identifier for a student
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StudentId(pub u32);

impl StudentId {
    pub fn new(id: u32) -> Self {
        StudentId(id)
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a faculty member
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FacultyId(pub u32);

impl FacultyId {
    pub fn new(id: u32) -> Self {
        FacultyId(id)
    }
}

impl fmt::Display for FacultyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a course
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct CourseId(pub u32);

impl CourseId {
    pub fn new(id: u32) -> Self {
        CourseId(id)
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
