pub mod student;

pub use student::{StudentDashboard, StudentService, StudentStats};
