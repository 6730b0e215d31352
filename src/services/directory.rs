//! Directory search and permission views
//!
//! Case-insensitive text search over administrators, roles, employees and
//! branches, and the role/extra permission split shown on admin cards.

use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{DashError, DashResult};
use crate::models::{Administrator, Branch, Employee, Role};

/// Every directory list the management views work with
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Directory {
    #[serde(default)]
    pub administrators: Vec<Administrator>,
    #[serde(default)]
    pub roles: Vec<Role>,
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub branches: Vec<Branch>,
}

impl Directory {
    /// Load from a `.json`, `.yaml` or `.yml` file
    pub fn load(path: &Path) -> DashResult<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            DashError::Import(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase())
            .unwrap_or_default();

        let directory: Directory = match ext.as_str() {
            "json" => serde_json::from_str(&contents)?,
            "yaml" | "yml" => serde_yaml::from_str(&contents)?,
            other => {
                return Err(DashError::Import(format!(
                    "Unsupported directory file type '{}' (expected json or yaml)",
                    other
                )))
            }
        };

        info!(
            "Loaded directory from {}: {} admins, {} roles, {} employees, {} branches",
            path.display(),
            directory.administrators.len(),
            directory.roles.len(),
            directory.employees.len(),
            directory.branches.len()
        );
        Ok(directory)
    }

    pub fn role(&self, id: &str) -> DashResult<&Role> {
        self.roles
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| DashError::role_not_found(id))
    }

    pub fn administrator(&self, id: &str) -> DashResult<&Administrator> {
        self.administrators
            .iter()
            .find(|a| a.id == id)
            .ok_or_else(|| DashError::admin_not_found(id))
    }

    /// Administrators whose name, role or email contains `query`
    pub fn search_administrators(&self, query: &str) -> Vec<&Administrator> {
        let needle = query.to_lowercase();
        self.administrators
            .iter()
            .filter(|a| {
                contains(&a.name, &needle) || contains(&a.role, &needle) || contains(&a.email, &needle)
            })
            .collect()
    }

    /// Roles whose name or description contains `query`
    pub fn search_roles(&self, query: &str) -> Vec<&Role> {
        let needle = query.to_lowercase();
        self.roles
            .iter()
            .filter(|r| contains(&r.name, &needle) || contains(&r.description, &needle))
            .collect()
    }

    /// Employees whose name contains `query`
    pub fn search_employees(&self, query: &str) -> Vec<&Employee> {
        let needle = query.to_lowercase();
        self.employees
            .iter()
            .filter(|e| contains(&e.name, &needle))
            .collect()
    }

    /// Branches whose name or any area name contains `query`
    pub fn search_branches(&self, query: &str) -> Vec<&Branch> {
        let needle = query.to_lowercase();
        self.branches
            .iter()
            .filter(|b| {
                contains(&b.name, &needle) || b.areas.iter().any(|a| contains(&a.name, &needle))
            })
            .collect()
    }

    pub fn active_employee_count(&self) -> usize {
        self.employees.iter().filter(|e| e.is_active).count()
    }

    /// Headcount summed over every branch
    pub fn total_branch_employees(&self) -> u32 {
        self.branches.iter().map(|b| b.employee_count).sum()
    }

    /// Permissions an administrator holds beyond their role's
    ///
    /// An unknown role contributes no permissions, so everything is extra.
    pub fn extra_permissions(&self, admin: &Administrator) -> Vec<String> {
        let role_permissions: &[String] = self
            .roles
            .iter()
            .find(|r| r.id == admin.role)
            .map(|r| r.permissions.as_slice())
            .unwrap_or(&[]);
        extra_permissions(&admin.permissions, role_permissions)
    }
}

fn contains(haystack: &str, lowered_needle: &str) -> bool {
    haystack.to_lowercase().contains(lowered_needle)
}

/// `granted` minus `role_permissions`, deduplicated, first-seen order kept
pub fn extra_permissions(granted: &[String], role_permissions: &[String]) -> Vec<String> {
    let mut extra: Vec<String> = Vec::new();
    for permission in granted {
        if !role_permissions.contains(permission) && !extra.contains(permission) {
            extra.push(permission.clone());
        }
    }
    extra
}

/// First `limit` permissions unless everything should be shown
pub fn visible_permissions(permissions: &[String], limit: usize, show_all: bool) -> &[String] {
    if show_all {
        permissions
    } else {
        &permissions[..limit.min(permissions.len())]
    }
}
