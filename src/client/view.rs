//! Text rendering of the list and the form errors.

use std::fmt::Write;

use crate::model::Employee;
use crate::utils::validation::{DATE_FORMAT, FieldErrors};

const HEADERS: [&str; 7] = [
    "Name",
    "Employee ID",
    "Email",
    "Phone",
    "Department",
    "Date of Joining",
    "Role",
];

fn cells(employee: &Employee) -> [String; 7] {
    [
        employee.name.clone(),
        employee.employee_id.clone(),
        employee.email.clone(),
        employee.phone.clone(),
        employee.department.to_string(),
        employee.date_of_joining.format(DATE_FORMAT).to_string(),
        employee.role.clone(),
    ]
}

/// Renders records as a fixed-width table. An empty list renders nothing.
pub fn render_table(employees: &[Employee]) -> String {
    if employees.is_empty() {
        return String::new();
    }

    let rows: Vec<[String; 7]> = employees.iter().map(cells).collect();
    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    push_row(&mut out, HEADERS.iter().copied(), &widths);
    push_row(
        &mut out,
        widths.iter().map(|w| "-".repeat(*w)).collect::<Vec<_>>().iter().map(String::as_str),
        &widths,
    );
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize]) {
    let line = cells
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}

/// One `Label: message` line per failing field.
pub fn render_errors(errors: &FieldErrors) -> String {
    let mut out = String::new();
    for (field, message) in errors.iter() {
        let _ = writeln!(out, "{}: {}", field.label(), message);
    }
    out
}
