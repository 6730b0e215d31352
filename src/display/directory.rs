//! Directory display formatting
//!
//! Tables for administrators, roles, employees and branches.

use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::models::{Administrator, Branch, Employee, Role};
use crate::services::directory::visible_permissions;
use crate::services::Directory;

/// Permissions listed per administrator before collapsing into "+N"
pub const PERMISSION_PREVIEW: usize = 3;

#[derive(Tabled)]
struct AdministratorRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Email")]
    email: String,
    #[tabled(rename = "Role")]
    role: String,
    #[tabled(rename = "Extra permissions")]
    extra: String,
}

#[derive(Tabled)]
struct RoleRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Permissions")]
    permissions: usize,
    #[tabled(rename = "Description")]
    description: String,
}

#[derive(Tabled)]
struct EmployeeRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Position")]
    position: String,
    #[tabled(rename = "Branch")]
    branch: String,
    #[tabled(rename = "Area")]
    area: String,
    #[tabled(rename = "Status")]
    status: &'static str,
}

#[derive(Tabled)]
struct BranchRow {
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "Manager")]
    manager: String,
    #[tabled(rename = "Employees")]
    employees: u32,
    #[tabled(rename = "Registers")]
    registers: String,
    #[tabled(rename = "Cashiers")]
    cashiers: usize,
}

fn render<T: Tabled>(rows: Vec<T>) -> String {
    let mut table = Table::new(rows);
    table.with(Style::modern());
    let mut output = table.to_string();
    output.push('\n');
    output
}

/// Collapse a permission list into a short preview
pub fn format_permission_preview(permissions: &[String], show_all: bool) -> String {
    if permissions.is_empty() {
        return "-".to_string();
    }
    let shown = visible_permissions(permissions, PERMISSION_PREVIEW, show_all);
    let hidden = permissions.len() - shown.len();
    if hidden > 0 {
        format!("{} +{}", shown.join(", "), hidden)
    } else {
        shown.join(", ")
    }
}

pub fn format_administrator_table(
    directory: &Directory,
    admins: &[&Administrator],
    show_all: bool,
) -> String {
    if admins.is_empty() {
        return "No administrators found.\n".to_string();
    }

    let rows = admins
        .iter()
        .map(|admin| {
            let role = directory
                .role(&admin.role)
                .map(|r| r.display_name.clone())
                .unwrap_or_else(|_| admin.role.clone());
            AdministratorRow {
                id: admin.id.clone(),
                name: admin.name.clone(),
                email: admin.email.clone(),
                role,
                extra: format_permission_preview(&directory.extra_permissions(admin), show_all),
            }
        })
        .collect();
    render::<AdministratorRow>(rows)
}

pub fn format_role_table(roles: &[&Role]) -> String {
    if roles.is_empty() {
        return "No roles found.\n".to_string();
    }

    let rows = roles
        .iter()
        .map(|role| RoleRow {
            id: role.id.clone(),
            name: role.display_name.clone(),
            permissions: role.permissions.len(),
            description: role.description.clone(),
        })
        .collect();
    render::<RoleRow>(rows)
}

pub fn format_employee_table(employees: &[&Employee]) -> String {
    if employees.is_empty() {
        return "No employees found.\n".to_string();
    }

    let rows = employees
        .iter()
        .map(|e| EmployeeRow {
            id: e.id.clone(),
            name: e.name.clone(),
            position: e.position.clone(),
            branch: e.branch.clone(),
            area: e.area.clone(),
            status: if e.is_active { "Active" } else { "Inactive" },
        })
        .collect();
    render::<EmployeeRow>(rows)
}

pub fn format_branch_table(branches: &[&Branch]) -> String {
    if branches.is_empty() {
        return "No branches found.\n".to_string();
    }

    let rows = branches
        .iter()
        .map(|b| BranchRow {
            id: b.id.clone(),
            name: b.name.clone(),
            manager: b.manager.name.clone(),
            employees: b.employee_count,
            registers: format!("{}/{}", b.active_register_count(), b.register_count()),
            cashiers: b.cashier_count(),
        })
        .collect();
    render::<BranchRow>(rows)
}
