use crate::{
    error::ApiError,
    model::Employee,
    store::EmployeeStore,
    utils::validation::{EmployeeForm, validate, validate_changes},
};
use actix_web::{HttpResponse, Responder, web};
use chrono::{Local, NaiveDate};
use serde_json::json;
use tracing::{debug, info};

fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Create Employee
#[utoipa::path(
    post,
    path = "/addEmployee",
    request_body = EmployeeForm,
    responses(
        (status = 201, description = "Employee created", body = Object, example = json!({
            "message": "Employee successfully created"
        })),
        (status = 400, description = "Duplicate employee_id or email, or invalid fields", body = Object, example = json!({
            "message": "Email or employee_id already exists"
        })),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Failed to insert data"
        }))
    ),
    tag = "Employee"
)]
pub async fn create_employee(
    store: web::Data<dyn EmployeeStore>,
    payload: web::Json<EmployeeForm>,
) -> actix_web::Result<impl Responder> {
    let employee: Employee = validate(&payload, today()).map_err(ApiError::Validation)?;
    debug!(employee_id = %employee.employee_id, "Adding employee");

    store
        .insert(&employee)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to insert data"))?;

    info!(employee_id = %employee.employee_id, "Employee successfully added");
    Ok(HttpResponse::Created().json(json!({
        "message": "Employee successfully created"
    })))
}

/// List Employees
#[utoipa::path(
    get,
    path = "/getEmployees",
    responses(
        (status = 200, description = "All employee records", body = [Employee]),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Failed to retrieve data"
        }))
    ),
    tag = "Employee"
)]
pub async fn list_employees(
    store: web::Data<dyn EmployeeStore>,
) -> actix_web::Result<impl Responder> {
    let employees = store
        .list()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to retrieve data"))?;

    debug!(count = employees.len(), "Fetched employees");
    Ok(HttpResponse::Ok().json(employees))
}

/// Update Employee
///
/// `employee_id` comes from the path; any `employee_id` in the body is ignored.
#[utoipa::path(
    put,
    path = "/updateEmployee/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    request_body = crate::model::EmployeeChanges,
    responses(
        (status = 200, description = "Employee updated", body = Object, example = json!({
            "message": "Employee successfully updated"
        })),
        (status = 400, description = "Invalid fields or email held by another employee", body = Object),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Failed to update employee"
        }))
    ),
    tag = "Employee"
)]
pub async fn update_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
    payload: web::Json<EmployeeForm>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    debug!(employee_id = %employee_id, "Updating employee");

    let changes = validate_changes(&payload, today()).map_err(ApiError::Validation)?;

    store
        .update(&employee_id, &changes)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to update employee"))?;

    info!(employee_id = %employee_id, "Employee successfully updated");
    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee successfully updated"
    })))
}

/// Delete Employee
#[utoipa::path(
    delete,
    path = "/deleteEmployee/{id}",
    params(
        ("id", Path, description = "Employee ID")
    ),
    responses(
        (status = 200, description = "Employee deleted", body = Object, example = json!({
            "message": "Employee successfully deleted"
        })),
        (status = 404, description = "Employee not found", body = Object, example = json!({
            "message": "Employee not found"
        })),
        (status = 500, description = "Internal server error", body = Object, example = json!({
            "message": "Failed to delete employee"
        }))
    ),
    tag = "Employee"
)]
pub async fn delete_employee(
    store: web::Data<dyn EmployeeStore>,
    path: web::Path<String>,
) -> actix_web::Result<impl Responder> {
    let employee_id = path.into_inner();
    debug!(employee_id = %employee_id, "Deleting employee");

    store
        .delete(&employee_id)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to delete employee"))?;

    info!(employee_id = %employee_id, "Employee successfully deleted");
    Ok(HttpResponse::Ok().json(json!({
        "message": "Employee successfully deleted"
    })))
}
