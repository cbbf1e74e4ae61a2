//! Employee client
//!
//! Command-line front end for the employee API: the same form rules and
//! alerts as the browser form, driven from flags.

use std::process::ExitCode;

use anyhow::Result;
use chrono::Local;
use clap::{Args as ClapArgs, Parser, Subcommand};
use tracing::Level;

use employee_registry::client::view::{render_errors, render_table};
use employee_registry::client::{ClientConfig, EmployeeApp, HttpClient, Notifier, SubmitOutcome};
use employee_registry::utils::validation::EmployeeForm;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Base URL of the employee API
    #[arg(long, env = "EMPLOYEE_API_URL", default_value = "http://localhost:5000")]
    base_url: String,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout: u64,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List all employees
    List,
    /// Add an employee
    Add(FormArgs),
    /// Update an employee; omitted flags keep their stored values
    Update {
        employee_id: String,
        #[command(flatten)]
        fields: FormArgs,
    },
    /// Delete an employee
    Delete { employee_id: String },
}

#[derive(ClapArgs, Debug)]
struct FormArgs {
    #[arg(long)]
    name: Option<String>,
    /// At most 10 alphanumeric characters (ignored on update)
    #[arg(long)]
    employee_id: Option<String>,
    #[arg(long)]
    email: Option<String>,
    /// Exactly 10 digits
    #[arg(long)]
    phone: Option<String>,
    /// HR, Engineering, Marketing, Finance or Operations
    #[arg(long)]
    department: Option<String>,
    /// YYYY-MM-DD, not in the future
    #[arg(long)]
    date_of_joining: Option<String>,
    #[arg(long)]
    role: Option<String>,
}

impl FormArgs {
    fn apply_to(self, form: &mut EmployeeForm) {
        let overlay = [
            (self.name, &mut form.name),
            (self.email, &mut form.email),
            (self.phone, &mut form.phone),
            (self.department, &mut form.department),
            (self.date_of_joining, &mut form.date_of_joining),
            (self.role, &mut form.role),
        ];
        for (value, slot) in overlay {
            if let Some(value) = value {
                *slot = value;
            }
        }
    }
}

struct StdoutNotifier;

impl Notifier for StdoutNotifier {
    fn alert(&mut self, message: &str) {
        println!("{message}");
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .init();

    let config = ClientConfig::new(args.base_url).with_timeout(args.timeout);
    let mut app = EmployeeApp::new(HttpClient::new(&config)?, StdoutNotifier);
    let today = Local::now().date_naive();

    let ok = match args.command {
        Command::List => {
            app.load_list().await;
            if app.is_list_visible() {
                if app.employees().is_empty() {
                    println!("No employees found");
                } else {
                    print!("{}", render_table(app.employees()));
                }
            }
            app.is_list_visible()
        }
        Command::Add(fields) => {
            app.open_form();
            if let Some(id) = &fields.employee_id {
                app.form.employee_id = id.clone();
            }
            fields.apply_to(&mut app.form);
            submit(&mut app, today).await
        }
        Command::Update {
            employee_id,
            fields,
        } => {
            app.load_list().await;
            let record = app
                .employees()
                .iter()
                .find(|e| e.employee_id == employee_id)
                .cloned();
            match record {
                Some(record) => {
                    app.begin_edit(&record);
                    fields.apply_to(&mut app.form);
                    submit(&mut app, today).await
                }
                None if app.is_list_visible() => {
                    println!("Error: Employee not found");
                    false
                }
                None => false,
            }
        }
        Command::Delete { employee_id } => app.delete(&employee_id).await,
    };

    Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
}

async fn submit(app: &mut EmployeeApp<HttpClient, StdoutNotifier>, today: chrono::NaiveDate) -> bool {
    match app.submit(today).await {
        SubmitOutcome::Created | SubmitOutcome::Updated => true,
        SubmitOutcome::Invalid => {
            eprint!("{}", render_errors(app.errors()));
            false
        }
        SubmitOutcome::Failed => false,
    }
}
