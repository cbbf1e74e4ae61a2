use chrono::NaiveDate;
use tracing::debug;

use super::EmployeeApi;
use crate::model::Employee;
use crate::utils::validation::{EmployeeForm, FieldErrors, validate};

/// Sink for blocking alerts.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

/// Result of [`EmployeeApp::submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Field errors were recorded; nothing was sent.
    Invalid,
    Created,
    Updated,
    /// The request was sent and failed; the failure was alerted.
    Failed,
}

/// Transient state of the form and list view. Nothing here survives a
/// restart; the server is the only source of truth.
pub struct EmployeeApp<A, N> {
    api: A,
    notifier: N,
    pub form: EmployeeForm,
    errors: FieldErrors,
    show_form: bool,
    show_list: bool,
    employees: Vec<Employee>,
    /// Record being edited; `None` in create mode.
    editing: Option<Employee>,
}

impl<A: EmployeeApi, N: Notifier> EmployeeApp<A, N> {
    pub fn new(api: A, notifier: N) -> Self {
        Self {
            api,
            notifier,
            form: EmployeeForm::default(),
            errors: FieldErrors::default(),
            show_form: false,
            show_list: false,
            employees: Vec::new(),
            editing: None,
        }
    }

    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn is_form_visible(&self) -> bool {
        self.show_form
    }

    pub fn is_list_visible(&self) -> bool {
        self.show_list
    }

    /// Identifier of the record being edited.
    pub fn edit_target(&self) -> Option<&str> {
        self.editing.as_ref().map(|e| e.employee_id.as_str())
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Shows an empty form in create mode.
    pub fn open_form(&mut self) {
        self.editing = None;
        self.form = EmployeeForm::default();
        self.errors.clear();
        self.show_form = true;
    }

    /// Validates the form and, when it passes, creates or updates the record
    /// depending on the current mode.
    pub async fn submit(&mut self, today: NaiveDate) -> SubmitOutcome {
        let record = match validate(&self.form, today) {
            Ok(record) => record,
            Err(errors) => {
                debug!(fields = errors.len(), "Form rejected");
                self.errors = errors;
                return SubmitOutcome::Invalid;
            }
        };
        self.errors.clear();

        let (result, outcome, success) = match &self.editing {
            Some(target) => (
                self.api.update(&target.employee_id, &record.changes()).await,
                SubmitOutcome::Updated,
                "Employee updated successfully!",
            ),
            None => (
                self.api.create(&record).await,
                SubmitOutcome::Created,
                "Employee added successfully!",
            ),
        };

        match result {
            Ok(_) => {
                self.notifier.alert(success);
                self.cancel();
                if self.show_list {
                    self.refresh_list().await;
                }
                outcome
            }
            Err(e) => {
                self.notifier.alert(&format!("Error: {}", e.user_message()));
                SubmitOutcome::Failed
            }
        }
    }

    /// Toggles the list. Showing it fetches all records; hiding it does not
    /// touch the network.
    pub async fn load_list(&mut self) {
        if self.show_list {
            self.show_list = false;
            return;
        }
        if self.refresh_list().await {
            self.show_list = true;
        }
    }

    async fn refresh_list(&mut self) -> bool {
        match self.api.list().await {
            Ok(employees) => {
                self.employees = employees;
                true
            }
            Err(e) => {
                self.notifier
                    .alert(&format!("Error fetching employees: {}", e.user_message()));
                false
            }
        }
    }

    /// Switches to edit mode for `record` and pre-populates the form.
    pub fn begin_edit(&mut self, record: &Employee) {
        self.form = EmployeeForm::from(record);
        self.errors.clear();
        self.editing = Some(record.clone());
        self.show_form = true;
    }

    /// Discards in-progress input: blank in create mode, the stored values
    /// in edit mode.
    pub fn reset_form(&mut self) {
        self.form = match &self.editing {
            Some(record) => EmployeeForm::from(record),
            None => EmployeeForm::default(),
        };
        self.errors.clear();
    }

    /// Hides the form and leaves edit mode.
    pub fn cancel(&mut self) {
        self.editing = None;
        self.form = EmployeeForm::default();
        self.errors.clear();
        self.show_form = false;
    }

    pub async fn delete(&mut self, employee_id: &str) -> bool {
        match self.api.delete(employee_id).await {
            Ok(message) => {
                self.employees.retain(|e| e.employee_id != employee_id);
                if self.edit_target() == Some(employee_id) {
                    self.cancel();
                }
                self.notifier.alert(&message);
                true
            }
            Err(e) => {
                self.notifier.alert(&format!("Error: {}", e.user_message()));
                false
            }
        }
    }
}
