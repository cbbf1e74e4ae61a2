pub mod department;
pub mod employee;

pub use department::Department;
pub use employee::{Employee, EmployeeChanges};
