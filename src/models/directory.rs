//! Directory entities: administrators, roles, employees and branches
//!
//! These are the records the dashboard's management views list and search.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Administrator {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Role id this administrator holds
    pub role: String,
    #[serde(default)]
    pub photo_url: String,
    /// Every permission granted, role permissions included
    #[serde(default)]
    pub permissions: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Role {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub permissions: Vec<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo_url: String,
    pub position: String,
    pub branch: String,
    #[serde(default)]
    pub area: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
}

fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cashier {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo_url: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub role: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Register {
    pub id: String,
    pub name: String,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default)]
    pub cashiers: Vec<Cashier>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Area {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub registers: Vec<Register>,
}

impl Area {
    pub fn cashier_count(&self) -> usize {
        self.registers.iter().map(|r| r.cashiers.len()).sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manager {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub photo_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Branch {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: String,
    pub manager: Manager,
    #[serde(default)]
    pub areas: Vec<Area>,
    #[serde(default)]
    pub employee_count: u32,
}

impl Branch {
    pub fn register_count(&self) -> usize {
        self.areas.iter().map(|a| a.registers.len()).sum()
    }

    pub fn active_register_count(&self) -> usize {
        self.areas
            .iter()
            .flat_map(|a| &a.registers)
            .filter(|r| r.is_active)
            .count()
    }

    pub fn cashier_count(&self) -> usize {
        self.areas.iter().map(Area::cashier_count).sum()
    }
}
