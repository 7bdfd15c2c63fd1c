/*
    Model subsystem - Data structures for registry entities
*/

pub mod course;
pub mod faculty;
pub mod student;
pub mod types;

pub use course::*;
pub use faculty::*;
pub use student::*;
pub use types::*;
