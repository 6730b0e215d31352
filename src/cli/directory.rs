//! CLI command for searching the staff directory

use clap::{Args, ValueEnum};
use std::path::PathBuf;

use crate::display::{
    format_administrator_table, format_branch_table, format_employee_table, format_role_table,
};
use crate::error::DashResult;
use crate::services::Directory;

/// Which part of the directory to search
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SearchScope {
    Admins,
    Roles,
    Employees,
    Branches,
    All,
}

/// Arguments for `dashgen search`
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Directory file (.json, .yaml)
    pub file: PathBuf,

    /// Case-insensitive text to match; empty lists everything
    #[arg(default_value = "")]
    pub query: String,

    #[arg(short, long, value_enum, default_value = "all")]
    pub scope: SearchScope,

    /// List every extra permission instead of a short preview
    #[arg(long)]
    pub all_permissions: bool,
}

/// Handle `dashgen search`
pub fn handle_search_command(args: SearchArgs) -> DashResult<()> {
    let directory = Directory::load(&args.file)?;
    let query = args.query.as_str();
    let all = args.scope == SearchScope::All;

    if all || args.scope == SearchScope::Admins {
        if all {
            println!("Administrators");
        }
        print!(
            "{}",
            format_administrator_table(
                &directory,
                &directory.search_administrators(query),
                args.all_permissions
            )
        );
    }

    if all || args.scope == SearchScope::Roles {
        if all {
            println!("\nRoles");
        }
        print!("{}", format_role_table(&directory.search_roles(query)));
    }

    if all || args.scope == SearchScope::Employees {
        if all {
            println!("\nEmployees");
        }
        let employees = directory.search_employees(query);
        print!("{}", format_employee_table(&employees));
        if query.is_empty() {
            println!(
                "{} of {} employees active",
                directory.active_employee_count(),
                directory.employees.len()
            );
        }
    }

    if all || args.scope == SearchScope::Branches {
        if all {
            println!("\nBranches");
        }
        print!("{}", format_branch_table(&directory.search_branches(query)));
        if query.is_empty() {
            println!(
                "{} employees across {} branches",
                directory.total_branch_employees(),
                directory.branches.len()
            );
        }
    }

    Ok(())
}
