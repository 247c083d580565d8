//! Tool catalog and name-based dispatch for an agent host.
//!
//! The host hands over a tool name and raw JSON arguments. Decoding the
//! arguments into the handler's input type is the structural check; a
//! handler only ever sees well-formed input. Unknown tools and undecodable
//! arguments are host-level faults ([`DispatchError`]), not envelopes.

use std::fmt;
use std::str::FromStr;

use schemars::{schema_for, Schema};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::handlers::{
    self, ClientDetailInput, DailyTotalsInput, ListInput, ProjectDetailInput, StaffDetailInput, TasksInput,
    TimeEntriesInput, ToolContext,
};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DispatchError {
    #[error("unknown tool: {0}")]
    UnknownTool(String),

    #[error("invalid arguments for {tool}: {reason}")]
    InvalidArguments { tool: &'static str, reason: String },

    #[error("failed to encode {tool} result: {reason}")]
    Encode { tool: &'static str, reason: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    GetStaff,
    GetStaffDetail,
    GetProjects,
    GetProjectDetail,
    GetClients,
    GetClientDetail,
    GetTasks,
    GetTimeEntries,
    GetDailyTotals,
}

impl ToolName {
    pub const ALL: [ToolName; 9] = [
        ToolName::GetStaff,
        ToolName::GetStaffDetail,
        ToolName::GetProjects,
        ToolName::GetProjectDetail,
        ToolName::GetClients,
        ToolName::GetClientDetail,
        ToolName::GetTasks,
        ToolName::GetTimeEntries,
        ToolName::GetDailyTotals,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::GetStaff => "get-staff",
            ToolName::GetStaffDetail => "get-staff-detail",
            ToolName::GetProjects => "get-projects",
            ToolName::GetProjectDetail => "get-project-detail",
            ToolName::GetClients => "get-clients",
            ToolName::GetClientDetail => "get-client-detail",
            ToolName::GetTasks => "get-tasks",
            ToolName::GetTimeEntries => "get-time-entries",
            ToolName::GetDailyTotals => "get-daily-totals",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            ToolName::GetStaff => "Get staff members from BigTime API",
            ToolName::GetStaffDetail => "Get detailed information about a specific staff member from BigTime API",
            ToolName::GetProjects => "Get projects from BigTime API",
            ToolName::GetProjectDetail => "Get detailed information about a specific project from BigTime API",
            ToolName::GetClients => "Get clients from BigTime API",
            ToolName::GetClientDetail => "Get detailed information about a specific client from BigTime API",
            ToolName::GetTasks => "Get tasks from BigTime API by project or staff member",
            ToolName::GetTimeEntries => {
                "Get time entries from BigTime API for a staff member or project within a date range"
            }
            ToolName::GetDailyTotals => "Get daily time totals for a staff member from BigTime API",
        }
    }

    /// JSON Schema of the tool's arguments.
    pub fn input_schema(&self) -> Schema {
        match self {
            ToolName::GetStaff | ToolName::GetProjects | ToolName::GetClients => schema_for!(ListInput),
            ToolName::GetStaffDetail => schema_for!(StaffDetailInput),
            ToolName::GetProjectDetail => schema_for!(ProjectDetailInput),
            ToolName::GetClientDetail => schema_for!(ClientDetailInput),
            ToolName::GetTasks => schema_for!(TasksInput),
            ToolName::GetTimeEntries => schema_for!(TimeEntriesInput),
            ToolName::GetDailyTotals => schema_for!(DailyTotalsInput),
        }
    }
}

impl fmt::Display for ToolName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ToolName {
    type Err = DispatchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .into_iter()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| DispatchError::UnknownTool(s.to_string()))
    }
}

/// What a host needs to register one tool.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub input_schema: Schema,
}

pub fn catalog() -> Vec<ToolDescriptor> {
    ToolName::ALL
        .iter()
        .map(|tool| ToolDescriptor {
            name: tool.as_str(),
            description: tool.description(),
            input_schema: tool.input_schema(),
        })
        .collect()
}

/// Run the named tool and return its envelope as JSON.
///
/// `null` arguments are treated as an empty object.
pub fn dispatch(ctx: &ToolContext, name: &str, arguments: Value) -> Result<Value, DispatchError> {
    let tool: ToolName = name.parse()?;
    let arguments = if arguments.is_null() {
        Value::Object(Default::default())
    } else {
        arguments
    };
    debug!(%tool, "dispatching tool call");

    match tool {
        ToolName::GetStaff => run(tool, arguments, |input| handlers::get_staff(ctx, input)),
        ToolName::GetStaffDetail => run(tool, arguments, |input| handlers::get_staff_detail(ctx, input)),
        ToolName::GetProjects => run(tool, arguments, |input| handlers::get_projects(ctx, input)),
        ToolName::GetProjectDetail => run(tool, arguments, |input| handlers::get_project_detail(ctx, input)),
        ToolName::GetClients => run(tool, arguments, |input| handlers::get_clients(ctx, input)),
        ToolName::GetClientDetail => run(tool, arguments, |input| handlers::get_client_detail(ctx, input)),
        ToolName::GetTasks => run(tool, arguments, |input| handlers::get_tasks(ctx, input)),
        ToolName::GetTimeEntries => run(tool, arguments, |input| handlers::get_time_entries(ctx, input)),
        ToolName::GetDailyTotals => run(tool, arguments, |input| handlers::get_daily_totals(ctx, input)),
    }
}

fn run<I, O>(tool: ToolName, arguments: Value, handler: impl FnOnce(I) -> O) -> Result<Value, DispatchError>
where
    I: DeserializeOwned,
    O: Serialize,
{
    let input: I = serde_json::from_value(arguments).map_err(|e| DispatchError::InvalidArguments {
        tool: tool.as_str(),
        reason: e.to_string(),
    })?;
    serde_json::to_value(handler(input)).map_err(|e| DispatchError::Encode {
        tool: tool.as_str(),
        reason: e.to_string(),
    })
}
