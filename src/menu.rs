//! Command Handlers and Dispatch Loop
//!
//! One handler per menu action. Each handler gathers its reference data,
//! runs one prompt sequence, executes one catalog statement, and reports
//! the outcome. Failures are contained here: the loop reports them with the
//! failed operation's name and always returns to the menu. Only the "Exit"
//! entry ends the loop.

use crate::choice;
use crate::db::Db;
use crate::error::Result;
use crate::prompt::Prompter;
use crate::{queries, table};

/// Menu prompt shown on every loop iteration
pub const MENU_PROMPT: &str = "What would you like to do?";

/// Rule printed between operations
pub const SEPARATOR: &str = "----------------------------------------";

/// The eight menu actions, in menu order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    ViewDepartments,
    ViewRoles,
    ViewEmployees,
    AddDepartment,
    AddRole,
    AddEmployee,
    UpdateEmployeeRole,
    Exit,
}

impl MenuAction {
    /// All actions in the order they appear in the menu
    pub const ALL: [Self; 8] = [
        Self::ViewDepartments,
        Self::ViewRoles,
        Self::ViewEmployees,
        Self::AddDepartment,
        Self::AddRole,
        Self::AddEmployee,
        Self::UpdateEmployeeRole,
        Self::Exit,
    ];

    /// Exact menu label (stable contract for anything driving the interface)
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ViewDepartments => "View all departments",
            Self::ViewRoles => "View all roles",
            Self::ViewEmployees => "View all employees",
            Self::AddDepartment => "Add a department",
            Self::AddRole => "Add a role",
            Self::AddEmployee => "Add an employee",
            Self::UpdateEmployeeRole => "Update an employee role",
            Self::Exit => "Exit",
        }
    }

    /// Gerund used in failure reports ("Error viewing departments: ...")
    #[must_use]
    pub const fn describe(&self) -> &'static str {
        match self {
            Self::ViewDepartments => "viewing departments",
            Self::ViewRoles => "viewing roles",
            Self::ViewEmployees => "viewing employees",
            Self::AddDepartment => "adding department",
            Self::AddRole => "adding role",
            Self::AddEmployee => "adding employee",
            Self::UpdateEmployeeRole => "updating employee role",
            Self::Exit => "exiting",
        }
    }

    /// Look an action up by its exact menu label
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|action| action.label() == label)
    }
}

/// Run the dispatch loop until the user selects "Exit"
///
/// Handler failures are reported and the loop resumes; a failure of the
/// menu prompt itself (e.g. stdin closed) ends the loop with an error.
pub async fn run(db: &Db, prompter: &dyn Prompter) -> Result<()> {
    let menu_labels: Vec<String> =
        MenuAction::ALL.iter().map(|a| a.label().to_string()).collect();

    loop {
        let index = prompter.select(MENU_PROMPT, &menu_labels)?;

        let Some(action) = MenuAction::ALL.get(index).copied() else {
            // Unreachable with a closed choice list; handled defensively.
            println!("Invalid choice: {index}");
            continue;
        };

        if action == MenuAction::Exit {
            println!("Goodbye!");
            return Ok(());
        }

        if let Err(err) = dispatch(action, db, prompter).await {
            log::error!("{} failed: {} ({})", action.label(), err, err.error_code());
            eprintln!("Error {}: {}", action.describe(), err);
        }

        println!("{SEPARATOR}\n");
    }
}

async fn dispatch(action: MenuAction, db: &Db, prompter: &dyn Prompter) -> Result<()> {
    match action {
        MenuAction::ViewDepartments => view_departments(db).await,
        MenuAction::ViewRoles => view_roles(db).await,
        MenuAction::ViewEmployees => view_employees(db).await,
        MenuAction::AddDepartment => add_department(db, prompter).await,
        MenuAction::AddRole => add_role(db, prompter).await,
        MenuAction::AddEmployee => add_employee(db, prompter).await,
        MenuAction::UpdateEmployeeRole => update_employee_role(db, prompter).await,
        MenuAction::Exit => Ok(()),
    }
}

async fn view_departments(db: &Db) -> Result<()> {
    let rows = queries::list_departments(db).await?;
    let cells: Vec<Vec<String>> = rows
        .into_iter()
        .map(|d| vec![d.id.to_string(), d.name])
        .collect();

    println!("\n{}", table::render(&["id", "name"], &cells));
    Ok(())
}

async fn view_roles(db: &Db) -> Result<()> {
    let rows = queries::list_roles(db).await?;
    let cells: Vec<Vec<String>> = rows
        .into_iter()
        .map(|r| vec![r.id.to_string(), r.title, r.salary, r.department])
        .collect();

    println!("\n{}", table::render(&["id", "title", "salary", "department"], &cells));
    Ok(())
}

async fn view_employees(db: &Db) -> Result<()> {
    let rows = queries::list_employees(db).await?;
    let cells: Vec<Vec<String>> = rows
        .into_iter()
        .map(|e| {
            vec![
                e.id.to_string(),
                e.first_name,
                e.last_name,
                e.role,
                e.department,
                e.salary,
                e.manager.unwrap_or_default(),
            ]
        })
        .collect();

    let headers = ["id", "first_name", "last_name", "role", "department", "salary", "manager"];
    println!("\n{}", table::render(&headers, &cells));
    Ok(())
}

async fn add_department(db: &Db, prompter: &dyn Prompter) -> Result<()> {
    let name = prompter.input("Enter the name of the new department:")?;

    queries::insert_department(db, &name).await?;
    println!("Added department: {name}");
    Ok(())
}

async fn add_role(db: &Db, prompter: &dyn Prompter) -> Result<()> {
    let departments = queries::list_department_choices(db).await?;
    let choices = choice::build_choices(&departments);

    let title = prompter.input("Enter the title of the new role:")?;
    let salary = prompter.input("Enter the salary of the new role:")?;
    let department_id =
        selected_value(prompter, "Select the department for the new role:", &choices)?;

    queries::insert_role(db, &title, &salary, department_id).await?;
    println!("Added role: {title}");
    Ok(())
}

async fn add_employee(db: &Db, prompter: &dyn Prompter) -> Result<()> {
    let roles = queries::list_role_choices(db).await?;
    let role_choices = choice::build_choices(&roles);
    let managers = queries::list_employee_choices(db).await?;
    let manager_choices = choice::build_manager_choices(&managers);

    let first_name = prompter.input("Enter the employee's first name:")?;
    let last_name = prompter.input("Enter the employee's last name:")?;
    let role_id = selected_value(prompter, "Select the employee's role:", &role_choices)?;

    let manager_index = prompter.select(
        "Select the employee's manager:",
        &choice::manager_labels(&manager_choices),
    )?;
    let manager_id = manager_choices
        .get(manager_index)
        .ok_or_else(|| {
            crate::error::RosterError::invalid_input(format!(
                "Selection index {manager_index} out of range"
            ))
        })?
        .value;

    queries::insert_employee(db, &first_name, &last_name, role_id, manager_id).await?;
    println!("Added employee: {first_name} {last_name}");
    Ok(())
}

async fn update_employee_role(db: &Db, prompter: &dyn Prompter) -> Result<()> {
    let employees = queries::list_employee_choices(db).await?;
    let employee_choices = choice::build_choices(&employees);
    let roles = queries::list_role_choices(db).await?;
    let role_choices = choice::build_choices(&roles);

    let employee_id =
        selected_value(prompter, "Which employee would you like to update?", &employee_choices)?;
    let role_id = selected_value(
        prompter,
        "Which role would you like to assign to this employee?",
        &role_choices,
    )?;

    let affected = queries::update_employee_role(db, employee_id, role_id).await?;
    if affected == 0 {
        // Not-found is a normal outcome, never an error.
        println!("Employee with ID {employee_id} not found.");
    } else {
        println!("Updated employee with ID {employee_id} to role with ID {role_id}");
    }
    Ok(())
}

/// Run one selection prompt over a choice list and return the chosen value
fn selected_value(
    prompter: &dyn Prompter,
    message: &str,
    choices: &[choice::Choice],
) -> Result<u32> {
    let index = prompter.select(message, &choice::labels(choices))?;
    choices
        .get(index)
        .map(|c| c.value)
        .ok_or_else(|| {
            crate::error::RosterError::invalid_input(format!(
                "Selection index {index} out of range"
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    #[test]
    fn test_menu_labels_are_the_stable_contract() {
        let labels: Vec<&str> = MenuAction::ALL.iter().map(|a| a.label()).collect();
        assert_eq!(
            labels,
            vec![
                "View all departments",
                "View all roles",
                "View all employees",
                "Add a department",
                "Add a role",
                "Add an employee",
                "Update an employee role",
                "Exit",
            ]
        );
    }

    #[test]
    fn test_from_label_round_trips() {
        for action in MenuAction::ALL {
            assert_eq!(MenuAction::from_label(action.label()), Some(action));
        }
        assert_eq!(MenuAction::from_label("Delete everything"), None);
    }

    #[test]
    fn test_exit_is_last_menu_entry() {
        assert_eq!(MenuAction::ALL[7], MenuAction::Exit);
    }

    /// Scripted prompter returning canned answers in order
    struct ScriptedPrompter {
        inputs: Mutex<Vec<String>>,
        selections: Mutex<Vec<usize>>,
    }

    impl ScriptedPrompter {
        fn new(inputs: &[&str], selections: &[usize]) -> Self {
            Self {
                inputs: Mutex::new(inputs.iter().rev().map(|s| (*s).to_string()).collect()),
                selections: Mutex::new(selections.iter().rev().copied().collect()),
            }
        }
    }

    impl Prompter for ScriptedPrompter {
        fn input(&self, _message: &str) -> crate::error::Result<String> {
            self.inputs
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| RosterError::prompt_failed("script exhausted"))
        }

        fn select(&self, _message: &str, options: &[String]) -> crate::error::Result<usize> {
            let index = self
                .selections
                .lock()
                .unwrap()
                .pop()
                .ok_or_else(|| RosterError::prompt_failed("script exhausted"))?;
            if index >= options.len() {
                return Err(RosterError::prompt_failed(format!(
                    "scripted index {index} out of range ({} options)",
                    options.len()
                )));
            }
            Ok(index)
        }
    }

    #[test]
    fn test_selected_value_maps_index_to_choice_value() {
        let prompter = ScriptedPrompter::new(&[], &[1]);
        let choices = vec![
            choice::Choice { label: "Sales".to_string(), value: 7 },
            choice::Choice { label: "Legal".to_string(), value: 9 },
        ];

        let value = selected_value(&prompter, "pick", &choices).unwrap();
        assert_eq!(value, 9);
    }

    #[tokio::test]
    async fn test_run_exits_on_exit_selection() {
        // Exit is index 7; the loop must terminate without touching the db.
        let settings =
            crate::config::resolve(&Default::default(), &Default::default()).unwrap();
        let db = Db::connect(&settings).unwrap();
        let prompter = ScriptedPrompter::new(&[], &[7]);

        let result = run(&db, &prompter).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_run_propagates_menu_prompt_failure() {
        // An exhausted script models stdin closing at the menu itself.
        let settings =
            crate::config::resolve(&Default::default(), &Default::default()).unwrap();
        let db = Db::connect(&settings).unwrap();
        let prompter = ScriptedPrompter::new(&[], &[]);

        let err = run(&db, &prompter).await.unwrap_err();
        assert_eq!(err.error_code(), "PROMPT_FAILED");
    }
}
