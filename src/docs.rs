use crate::model::{Department, Employee, EmployeeChanges};
use crate::utils::validation::EmployeeForm;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Employee Registry API",
        version = "0.1.0",
        description = r#"
## Employee Registry

Create, list, update and delete employee records.

- `employee_id` (at most 10 alphanumeric characters) and `email` are unique.
- Dates are exchanged as `YYYY-MM-DD`.
- Every failure answers with a JSON body carrying a `message`.
"#,
    ),
    paths(
        crate::api::employee::create_employee,
        crate::api::employee::list_employees,
        crate::api::employee::update_employee,
        crate::api::employee::delete_employee
    ),
    components(
        schemas(
            Employee,
            EmployeeChanges,
            EmployeeForm,
            Department
        )
    ),
    tags(
        (name = "Employee", description = "Employee record APIs"),
    )
)]
pub struct ApiDoc;
