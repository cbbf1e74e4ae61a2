use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::department::Department;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
#[schema(
    example = json!({
        "name": "John Doe",
        "employee_id": "EMP001",
        "email": "john.doe@company.com",
        "phone": "9876543210",
        "department": "Engineering",
        "date_of_joining": "2024-01-15",
        "role": "Developer"
    })
)]
pub struct Employee {
    #[schema(example = "John Doe")]
    pub name: String,

    #[schema(example = "EMP001", max_length = 10)]
    pub employee_id: String,

    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,

    #[schema(example = "9876543210")]
    pub phone: String,

    #[sqlx(try_from = "String")]
    pub department: Department,

    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub date_of_joining: NaiveDate,

    #[schema(example = "Developer")]
    pub role: String,
}

/// Every field of an [`Employee`] that an update may overwrite.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct EmployeeChanges {
    #[schema(example = "John Doe")]
    pub name: String,
    #[schema(example = "john.doe@company.com", format = "email")]
    pub email: String,
    #[schema(example = "9876543210")]
    pub phone: String,
    pub department: Department,
    #[schema(example = "2024-01-15", value_type = String, format = "date")]
    pub date_of_joining: NaiveDate,
    #[schema(example = "Developer")]
    pub role: String,
}

impl Employee {
    pub fn changes(&self) -> EmployeeChanges {
        EmployeeChanges {
            name: self.name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            department: self.department,
            date_of_joining: self.date_of_joining,
            role: self.role.clone(),
        }
    }

    pub fn apply(&mut self, changes: EmployeeChanges) {
        self.name = changes.name;
        self.email = changes.email;
        self.phone = changes.phone;
        self.department = changes.department;
        self.date_of_joining = changes.date_of_joining;
        self.role = changes.role;
    }
}
