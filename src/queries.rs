//! Query Catalog
//!
//! Every SQL statement the tool can issue, each parameterized and paired
//! with its exact result shape. Handlers never build SQL; they call these
//! functions.
//!
//! Statement text is `pub` so tests can check placeholder hygiene.

use crate::db::Db;
use crate::error::Result;

pub const LIST_DEPARTMENTS: &str = "SELECT id, name FROM department";

pub const LIST_ROLES: &str = "SELECT r.id, r.title, r.salary, d.name AS department
     FROM role r
     INNER JOIN department d ON r.department_id = d.id";

pub const LIST_EMPLOYEES: &str = "SELECT e.id, e.first_name, e.last_name, r.title AS role, d.name AS department,
            r.salary, CONCAT(m.first_name, ' ', m.last_name) AS manager
     FROM employee e
     INNER JOIN role r ON e.role_id = r.id
     INNER JOIN department d ON r.department_id = d.id
     LEFT JOIN employee m ON e.manager_id = m.id";

pub const INSERT_DEPARTMENT: &str = "INSERT INTO department (name) VALUES (?)";

pub const INSERT_ROLE: &str =
    "INSERT INTO role (title, salary, department_id) VALUES (?, ?, ?)";

pub const INSERT_EMPLOYEE: &str =
    "INSERT INTO employee (first_name, last_name, role_id, manager_id) VALUES (?, ?, ?, ?)";

pub const UPDATE_EMPLOYEE_ROLE: &str = "UPDATE employee SET role_id = ? WHERE id = ?";

pub const LIST_ROLE_ID_TITLE: &str = "SELECT id, title FROM role";

pub const LIST_EMPLOYEE_ID_NAME: &str =
    "SELECT id, CONCAT(first_name, ' ', last_name) AS name FROM employee";

/// One department row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentRow {
    pub id: u32,
    pub name: String,
}

/// One role row joined to its department name
///
/// Salary stays a string end-to-end: it is collected as free text, bound
/// as-is, and the store's DECIMAL column is the only validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoleRow {
    pub id: u32,
    pub title: String,
    pub salary: String,
    pub department: String,
}

/// One employee row joined to role, department, and manager full name
///
/// `manager` is `None` for employees with no manager (LEFT JOIN miss).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeRow {
    pub id: u32,
    pub first_name: String,
    pub last_name: String,
    pub role: String,
    pub department: String,
    pub salary: String,
    pub manager: Option<String>,
}

/// An id plus the label shown for it in a selection list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdLabel {
    pub id: u32,
    pub label: String,
}

/// Select all departments
pub async fn list_departments(db: &Db) -> Result<Vec<DepartmentRow>> {
    let rows: Vec<(u32, String)> = db.fetch(LIST_DEPARTMENTS, ()).await?;
    Ok(rows
        .into_iter()
        .map(|(id, name)| DepartmentRow { id, name })
        .collect())
}

/// Select all roles joined to their department name
pub async fn list_roles(db: &Db) -> Result<Vec<RoleRow>> {
    let rows: Vec<(u32, String, String, String)> = db.fetch(LIST_ROLES, ()).await?;
    Ok(rows
        .into_iter()
        .map(|(id, title, salary, department)| RoleRow { id, title, salary, department })
        .collect())
}

/// Select all employees joined to role, department, salary, and manager
pub async fn list_employees(db: &Db) -> Result<Vec<EmployeeRow>> {
    type Raw = (u32, String, String, String, String, String, Option<String>);
    let rows: Vec<Raw> = db.fetch(LIST_EMPLOYEES, ()).await?;
    Ok(rows
        .into_iter()
        .map(|(id, first_name, last_name, role, department, salary, manager)| EmployeeRow {
            id,
            first_name,
            last_name,
            role,
            department,
            salary,
            manager,
        })
        .collect())
}

/// Insert one department, returning the new row id
pub async fn insert_department(db: &Db, name: &str) -> Result<u64> {
    db.insert(INSERT_DEPARTMENT, (name,)).await
}

/// Insert one role, returning the new row id
///
/// Salary is bound as the raw string the user typed; a malformed value is
/// rejected by the store and surfaces as a query failure.
pub async fn insert_role(db: &Db, title: &str, salary: &str, department_id: u32) -> Result<u64> {
    db.insert(INSERT_ROLE, (title, salary, department_id)).await
}

/// Insert one employee, returning the new row id
///
/// `manager_id` of `None` binds SQL NULL.
pub async fn insert_employee(
    db: &Db,
    first_name: &str,
    last_name: &str,
    role_id: u32,
    manager_id: Option<u32>,
) -> Result<u64> {
    db.insert(INSERT_EMPLOYEE, (first_name, last_name, role_id, manager_id))
        .await
}

/// Update one employee's role by id, returning the affected-row count
///
/// Zero means the employee id did not exist; the caller reports that as a
/// not-found outcome, not an error.
pub async fn update_employee_role(db: &Db, employee_id: u32, role_id: u32) -> Result<u64> {
    db.update(UPDATE_EMPLOYEE_ROLE, (role_id, employee_id)).await
}

/// Select `{id, name}` for every department, for choice building
pub async fn list_department_choices(db: &Db) -> Result<Vec<IdLabel>> {
    let rows: Vec<(u32, String)> = db.fetch(LIST_DEPARTMENTS, ()).await?;
    Ok(rows.into_iter().map(|(id, label)| IdLabel { id, label }).collect())
}

/// Select `{id, title}` for every role, for choice building
pub async fn list_role_choices(db: &Db) -> Result<Vec<IdLabel>> {
    let rows: Vec<(u32, String)> = db.fetch(LIST_ROLE_ID_TITLE, ()).await?;
    Ok(rows.into_iter().map(|(id, label)| IdLabel { id, label }).collect())
}

/// Select `{id, full name}` for every employee, for choice building
pub async fn list_employee_choices(db: &Db) -> Result<Vec<IdLabel>> {
    let rows: Vec<(u32, String)> = db.fetch(LIST_EMPLOYEE_ID_NAME, ()).await?;
    Ok(rows.into_iter().map(|(id, label)| IdLabel { id, label }).collect())
}
