use std::{collections::BTreeMap, path::Path};

use anyhow::{Context, Result};
use glob::{Pattern, glob};

use super::scan::{Project, list_subdirectories};
use super::templates::{
    ALARM_PROFILES, DEVICE_CONNECTIONS_BODY, DEVICE_CONNECTIONS_PARAMS, GATEWAY_SCRIPTS_BODY,
    TRANSACTION_GROUPS,
};
use crate::utils::pluralize;

/// Gateway configuration database, relative to the installation root.
pub const CONFIG_DB_PATH: &str = "data/db/config.idb";

/// Documented asset category. Each one renders to a single markdown file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    GatewayScripts,
    DeviceConnections,
    TransactionGroups,
    AlarmProfiles,
}

impl Category {
    /// Extraction order.
    pub const ALL: [Category; 4] = [
        Category::GatewayScripts,
        Category::DeviceConnections,
        Category::TransactionGroups,
        Category::AlarmProfiles,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::GatewayScripts => "Gateway Scripts",
            Category::DeviceConnections => "Device Connections",
            Category::TransactionGroups => "Transaction Groups",
            Category::AlarmProfiles => "Alarm Profiles",
        }
    }

    /// Output path relative to the output root, `/`-separated.
    pub fn relative_path(self) -> &'static str {
        match self {
            Category::GatewayScripts => "scripting/gateway_scripts.md",
            Category::DeviceConnections => "devices/device_connections.md",
            Category::TransactionGroups => "database/transaction_groups.md",
            Category::AlarmProfiles => "alarms/alarm_notification_profiles.md",
        }
    }
}

/// Facts gathered from the installation that feed the category documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceInventory {
    pub project_count: usize,
    /// Gateway script count per script type folder, summed across projects.
    pub gateway_scripts: BTreeMap<String, usize>,
    pub config_db_found: bool,
}

impl SourceInventory {
    pub fn collect(root: &Path, projects: &[Project]) -> Result<Self> {
        Ok(Self {
            project_count: projects.len(),
            gateway_scripts: count_gateway_scripts(projects)?,
            config_db_found: root.join(CONFIG_DB_PATH).is_file(),
        })
    }

    pub fn gateway_script_total(&self) -> usize {
        self.gateway_scripts.values().sum()
    }
}

/// Count `*.json` files in every `gateway-scripts/<type>/` folder of every project.
///
/// Types without any script are left out.
pub fn count_gateway_scripts(projects: &[Project]) -> Result<BTreeMap<String, usize>> {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();

    for project in projects {
        let scripts_dir = project.ignition_dir().join("gateway-scripts");
        if !scripts_dir.is_dir() {
            continue;
        }

        for (script_type, type_path) in list_subdirectories(&scripts_dir)? {
            let files = count_json_files(&type_path)?;
            if files > 0 {
                *counts.entry(script_type).or_default() += files;
            }
        }
    }

    Ok(counts)
}

fn count_json_files(dir: &Path) -> Result<usize> {
    let pattern = format!("{}/*.json", Pattern::escape(&dir.to_string_lossy()));
    let entries = glob(&pattern).with_context(|| format!("Invalid glob pattern: {}", pattern))?;
    Ok(entries
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .count())
}

/// Render the full markdown document for `category`.
pub fn render(category: Category, inventory: &SourceInventory) -> String {
    match category {
        Category::GatewayScripts => {
            format!("{}\n{}", gateway_overview(inventory), GATEWAY_SCRIPTS_BODY)
        }
        Category::DeviceConnections => format!(
            "# Device Connection Configurations\n\n{}\n{}\n{}",
            DEVICE_CONNECTIONS_PARAMS,
            device_status(inventory),
            DEVICE_CONNECTIONS_BODY
        ),
        Category::TransactionGroups => TRANSACTION_GROUPS.to_string(),
        Category::AlarmProfiles => ALARM_PROFILES.to_string(),
    }
}

/// Short progress detail for a rendered category, if it has one.
pub fn detail(category: Category, inventory: &SourceInventory) -> Option<String> {
    match category {
        Category::GatewayScripts => {
            let total = inventory.gateway_script_total();
            Some(format!(
                "{} {} documented",
                total,
                pluralize(total, "script", "scripts")
            ))
        }
        Category::DeviceConnections
        | Category::TransactionGroups
        | Category::AlarmProfiles => None,
    }
}

fn gateway_overview(inventory: &SourceInventory) -> String {
    let mut out = String::from("# Gateway Event Scripts\n\n## Overview\n");
    let total = inventory.gateway_script_total();

    if inventory.gateway_scripts.is_empty() {
        out.push_str("No gateway scripts found.\n");
        return out;
    }

    out.push_str(&format!(
        "Found {} gateway {} across the following types:\n",
        total,
        pluralize(total, "script", "scripts")
    ));
    for (script_type, count) in &inventory.gateway_scripts {
        out.push_str(&format!(
            "- {}: {} {}\n",
            script_type,
            count,
            pluralize(*count, "script", "scripts")
        ));
    }
    out
}

fn device_status(inventory: &SourceInventory) -> String {
    let config_db = if inventory.config_db_found {
        "found"
    } else {
        "not found"
    };
    format!(
        "## Configured Devices\n\n### Current Status\n- Gateway configuration database (`{}`): {}\n- Projects scanned: {}\n",
        CONFIG_DB_PATH, config_db, inventory.project_count
    )
}
