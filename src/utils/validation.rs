//! Field rules shared by the client form and the API handlers.
//!
//! [`EmployeeForm`] is the raw input exactly as typed into the form (or sent in
//! a request body). [`validate`] turns it into a typed [`Employee`] or a
//! per-field set of messages. Nothing here touches the network or the clock;
//! callers pass `today` in.

use std::collections::BTreeMap;
use std::fmt;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{Department, Employee, EmployeeChanges};

/// Calendar-date format used on the wire and by the date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

const MAX_EMPLOYEE_ID_LEN: usize = 10;

static EMPLOYEE_ID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z0-9]+$").unwrap());
static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Za-z0-9._%+\-]+@[A-Za-z0-9\-]+(\.[A-Za-z0-9\-]+)*\.[A-Za-z]{2,}$").unwrap());
static PHONE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]{10}$").unwrap());

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(default)]
pub struct EmployeeForm {
    pub name: String,
    pub employee_id: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    #[schema(example = "2024-01-15", format = "date")]
    pub date_of_joining: String,
    pub role: String,
}

impl From<&Employee> for EmployeeForm {
    /// Pre-populates the form from a stored record, date in input format.
    fn from(employee: &Employee) -> Self {
        Self {
            name: employee.name.clone(),
            employee_id: employee.employee_id.clone(),
            email: employee.email.clone(),
            phone: employee.phone.clone(),
            department: employee.department.to_string(),
            date_of_joining: employee.date_of_joining.format(DATE_FORMAT).to_string(),
            role: employee.role.clone(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    Name,
    EmployeeId,
    Email,
    Phone,
    Department,
    DateOfJoining,
    Role,
}

impl Field {
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::EmployeeId => "Employee ID",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Department => "Department",
            Field::DateOfJoining => "Date of Joining",
            Field::Role => "Role",
        }
    }
}

/// Per-field validation messages, at most one per field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    fn into_result<T>(self, value: Option<T>) -> Result<T, FieldErrors> {
        match value {
            Some(v) if self.is_empty() => Ok(v),
            _ => Err(self),
        }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (field, message) in self.iter() {
            if !first {
                f.write_str("; ")?;
            }
            write!(f, "{}: {}", field.label(), message)?;
            first = false;
        }
        Ok(())
    }
}

/// Validates a full record, as submitted on create.
pub fn validate(form: &EmployeeForm, today: NaiveDate) -> Result<Employee, FieldErrors> {
    let mut errors = FieldErrors::default();
    let employee_id = check_employee_id(&form.employee_id, &mut errors);
    let changes = check_changes(form, today, &mut errors);

    let record = match (employee_id, changes) {
        (Some(employee_id), Some(c)) => Some(Employee {
            name: c.name,
            employee_id,
            email: c.email,
            phone: c.phone,
            department: c.department,
            date_of_joining: c.date_of_joining,
            role: c.role,
        }),
        _ => None,
    };
    errors.into_result(record)
}

/// Validates every field except `employee_id`, as submitted on update.
pub fn validate_changes(
    form: &EmployeeForm,
    today: NaiveDate,
) -> Result<EmployeeChanges, FieldErrors> {
    let mut errors = FieldErrors::default();
    let changes = check_changes(form, today, &mut errors);
    errors.into_result(changes)
}

fn check_changes(
    form: &EmployeeForm,
    today: NaiveDate,
    errors: &mut FieldErrors,
) -> Option<EmployeeChanges> {
    let name = required(&form.name, Field::Name, "Name is required", errors);
    let email = check_email(&form.email, errors);
    let phone = check_phone(&form.phone, errors);
    let department = check_department(&form.department, errors);
    let date_of_joining = check_date_of_joining(&form.date_of_joining, today, errors);
    let role = required(&form.role, Field::Role, "Role is required", errors);

    Some(EmployeeChanges {
        name: name?,
        email: email?,
        phone: phone?,
        department: department?,
        date_of_joining: date_of_joining?,
        role: role?,
    })
}

fn required(value: &str, field: Field, message: &str, errors: &mut FieldErrors) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        errors.insert(field, message);
        return None;
    }
    Some(value.to_string())
}

fn check_employee_id(value: &str, errors: &mut FieldErrors) -> Option<String> {
    let id = required(value, Field::EmployeeId, "Employee ID is required", errors)?;
    if id.chars().count() > MAX_EMPLOYEE_ID_LEN {
        errors.insert(Field::EmployeeId, "ID must be at most 10 characters");
        return None;
    }
    if !EMPLOYEE_ID_RE.is_match(&id) {
        errors.insert(Field::EmployeeId, "ID must be alphanumeric");
        return None;
    }
    Some(id)
}

fn check_email(value: &str, errors: &mut FieldErrors) -> Option<String> {
    let email = required(value, Field::Email, "Email is required", errors)?;
    if !EMAIL_RE.is_match(&email) {
        errors.insert(Field::Email, "Invalid email format");
        return None;
    }
    Some(email)
}

fn check_phone(value: &str, errors: &mut FieldErrors) -> Option<String> {
    let phone = required(value, Field::Phone, "Phone is required", errors)?;
    if !PHONE_RE.is_match(&phone) {
        errors.insert(Field::Phone, "Phone number must be 10 digits");
        return None;
    }
    Some(phone)
}

fn check_department(value: &str, errors: &mut FieldErrors) -> Option<Department> {
    let dept = required(value, Field::Department, "Department is required", errors)?;
    match dept.parse() {
        Ok(d) => Some(d),
        Err(_) => {
            errors.insert(
                Field::Department,
                "Department must be one of HR, Engineering, Marketing, Finance, Operations",
            );
            None
        }
    }
}

fn check_date_of_joining(
    value: &str,
    today: NaiveDate,
    errors: &mut FieldErrors,
) -> Option<NaiveDate> {
    let raw = required(value, Field::DateOfJoining, "Date of Joining is required", errors)?;
    let Ok(date) = NaiveDate::parse_from_str(&raw, DATE_FORMAT) else {
        errors.insert(Field::DateOfJoining, "Date of Joining must be a valid date");
        return None;
    };
    if date > today {
        errors.insert(Field::DateOfJoining, "Date cannot be in the future");
        return None;
    }
    Some(date)
}
