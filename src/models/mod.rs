pub mod classroom;

pub use classroom::Classroom;
