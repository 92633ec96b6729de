//! roster - Interactive Employee Database CLI
//!
//! roster is a menu-driven command-line tool for managing a small
//! organizational dataset (departments, roles, employees) in a MySQL
//! database. It presents a menu, collects structured input, and issues
//! parameterized queries against three related tables.
//!
//! # Core Principles
//! - Every statement is parameterized; user input never reaches SQL text
//! - Foreign keys are chosen from selection lists, never typed as raw ids
//! - The database is the sole source of truth; every action re-reads what
//!   it needs
//! - Failures are reported per operation and never terminate the loop;
//!   only "Exit" ends the process
//!
//! # Module Organization
//! - [`error`] - Error types and stable codes
//! - [`config`] - Connection settings (flags/env > file > defaults)
//! - [`db`] - Pooled MySQL access, one connection per statement
//! - [`queries`] - The query catalog and its typed row shapes
//! - [`choice`] - Reference rows to label/value selection pairs
//! - [`prompt`] - Interactive seam (dialoguer console implementation)
//! - [`table`] - Console table rendering
//! - [`menu`] - Command handlers and the dispatch loop

pub mod choice;
pub mod config;
pub mod db;
pub mod error;
pub mod menu;
pub mod prompt;
pub mod queries;
pub mod table;

// Re-export commonly used types for convenience
pub use choice::{build_choices, build_manager_choices, Choice, ManagerChoice};
pub use config::{Overrides, Settings, StoredSettings};
pub use db::Db;
pub use error::{Result, RosterError};
pub use menu::MenuAction;
pub use prompt::{ConsolePrompter, Prompter};
pub use queries::{DepartmentRow, EmployeeRow, IdLabel, RoleRow};
