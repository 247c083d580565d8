//! One handler per tool.
//!
//! Every handler runs the same pipeline: semantic validation, credential
//! resolution, exactly one client call, optional pagination, and envelope
//! construction. Errors never leave a handler; they come back as a failure
//! envelope. Validation and credential failures return before the transport
//! is touched.

use std::sync::{Arc, LazyLock};

use regex::Regex;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::client::BigTimeClient;
use crate::config::ClientConfig;
use crate::credentials::{CredentialSource, EnvCredentials};
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::http::{Transport, UreqTransport};
use crate::pagination::{PageInfo, Pagination};
use crate::types::{Client, ClientDetail, DailyTotal, Project, ProjectDetail, Staff, StaffDetail, Task, TimeEntry, View};

static DATE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}$").expect("date pattern is valid"));

/// Everything a handler needs besides its input. Cheap to clone and shared
/// freely between concurrent invocations.
#[derive(Clone)]
pub struct ToolContext {
    pub config: ClientConfig,
    pub credentials: Arc<dyn CredentialSource>,
    pub transport: Arc<dyn Transport>,
}

impl ToolContext {
    pub fn new(config: ClientConfig, credentials: Arc<dyn CredentialSource>, transport: Arc<dyn Transport>) -> Self {
        Self {
            config,
            credentials,
            transport,
        }
    }

    /// Environment-backed context: config and credentials from env vars,
    /// `ureq` for the network.
    pub fn from_env() -> Result<Self, ApiError> {
        let config = ClientConfig::from_env()?;
        let transport = Arc::new(UreqTransport::new(&config));
        Ok(Self::new(config, Arc::new(EnvCredentials::new()), transport))
    }

    fn client(&self) -> Result<BigTimeClient, ApiError> {
        let credentials = self.credentials.resolve()?;
        Ok(BigTimeClient::new(&self.config.base_url, credentials, Arc::clone(&self.transport)))
    }
}

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Input for `get-staff`, `get-projects`, and `get-clients`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListInput {
    /// Whether to include inactive records (default: false)
    #[serde(default)]
    pub show_inactive: Option<bool>,
    /// Maximum number of records to return (default: 50, max: 1000)
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of records to skip for pagination (default: 0)
    #[serde(default)]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct StaffDetailInput {
    /// The StaffSid of the staff member to get details for
    pub staff_id: i64,
    /// The view type (Basic or Detailed, default: Detailed)
    #[serde(default)]
    pub view: Option<View>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetailInput {
    /// The SystemId of the project to get details for
    pub project_id: i64,
    /// The view type (Basic or Detailed, default: Detailed)
    #[serde(default)]
    pub view: Option<View>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ClientDetailInput {
    /// The SystemId of the client to get details for
    pub client_id: i64,
    /// The view type (Basic or Detailed, default: Detailed)
    #[serde(default)]
    pub view: Option<View>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TasksInput {
    /// The SystemId of the project to get tasks for
    #[serde(default)]
    pub project_id: Option<i64>,
    /// The StaffSid of the staff member to get tasks for
    #[serde(default)]
    pub staff_id: Option<i64>,
    /// Whether to include completed tasks (default: false)
    #[serde(default)]
    pub show_completed: Option<bool>,
    /// Maximum number of tasks to return (default: 50, max: 1000)
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of tasks to skip for pagination (default: 0)
    #[serde(default)]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntriesInput {
    /// The StaffSid of the staff member to get time entries for
    #[serde(default)]
    pub staff_id: Option<i64>,
    /// The ProjectSid of the project to get time entries for
    #[serde(default)]
    pub project_id: Option<i64>,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
    /// The view type (Basic or Detailed, default: Detailed)
    #[serde(default)]
    pub view: Option<View>,
    /// Maximum number of time entries to return (default: 50, max: 1000)
    #[serde(default)]
    pub limit: Option<i64>,
    /// Number of time entries to skip for pagination (default: 0)
    #[serde(default)]
    pub offset: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotalsInput {
    /// The StaffSid of the staff member to get daily totals for
    pub staff_id: i64,
    /// Start date in YYYY-MM-DD format
    pub start_date: String,
    /// End date in YYYY-MM-DD format
    pub end_date: String,
}

// ---------------------------------------------------------------------------
// Payloads
// ---------------------------------------------------------------------------

/// Paginated staff, project, or client listing.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing<R> {
    pub data: Vec<R>,
    pub pagination: PageInfo,
    pub showing_inactive: bool,
}

/// Which id a detail lookup was for; serialized as `staffId`, `projectId`,
/// or `clientId`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Subject {
    StaffId(i64),
    ProjectId(i64),
    ClientId(i64),
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Detail<R> {
    pub data: R,
    #[serde(flatten)]
    pub subject: Subject,
    pub view: View,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    Project,
    Staff,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskListing {
    pub data: Vec<Task>,
    pub pagination: PageInfo,
    pub filter_type: FilterType,
    pub filter_id: i64,
    pub showing_completed: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntryListing {
    pub data: Vec<TimeEntry>,
    pub pagination: PageInfo,
    pub filter_type: FilterType,
    pub filter_id: i64,
    pub start_date: String,
    pub end_date: String,
    pub view: View,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotals {
    pub data: Vec<DailyTotal>,
    pub count: usize,
    pub staff_id: i64,
    pub start_date: String,
    pub end_date: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

pub fn get_staff(ctx: &ToolContext, input: ListInput) -> Envelope<Listing<Staff>> {
    respond("get-staff", || {
        let window = Pagination::from_input(input.limit, input.offset);
        let show_inactive = input.show_inactive.unwrap_or(false);
        let staff = ctx.client()?.staff(show_inactive)?;
        Ok(listing(window, staff, show_inactive))
    })
}

pub fn get_staff_detail(ctx: &ToolContext, input: StaffDetailInput) -> Envelope<Detail<StaffDetail>> {
    respond("get-staff-detail", || {
        let view = input.view.unwrap_or_default();
        let data = ctx.client()?.staff_detail(input.staff_id, view)?;
        Ok(Detail {
            data,
            subject: Subject::StaffId(input.staff_id),
            view,
        })
    })
}

pub fn get_projects(ctx: &ToolContext, input: ListInput) -> Envelope<Listing<Project>> {
    respond("get-projects", || {
        let window = Pagination::from_input(input.limit, input.offset);
        let show_inactive = input.show_inactive.unwrap_or(false);
        let projects = ctx.client()?.projects(show_inactive)?;
        Ok(listing(window, projects, show_inactive))
    })
}

pub fn get_project_detail(ctx: &ToolContext, input: ProjectDetailInput) -> Envelope<Detail<ProjectDetail>> {
    respond("get-project-detail", || {
        let view = input.view.unwrap_or_default();
        let data = ctx.client()?.project_detail(input.project_id, view)?;
        Ok(Detail {
            data,
            subject: Subject::ProjectId(input.project_id),
            view,
        })
    })
}

pub fn get_clients(ctx: &ToolContext, input: ListInput) -> Envelope<Listing<Client>> {
    respond("get-clients", || {
        let window = Pagination::from_input(input.limit, input.offset);
        let show_inactive = input.show_inactive.unwrap_or(false);
        let clients = ctx.client()?.clients(show_inactive)?;
        Ok(listing(window, clients, show_inactive))
    })
}

pub fn get_client_detail(ctx: &ToolContext, input: ClientDetailInput) -> Envelope<Detail<ClientDetail>> {
    respond("get-client-detail", || {
        let view = input.view.unwrap_or_default();
        let data = ctx.client()?.client_detail(input.client_id, view)?;
        Ok(Detail {
            data,
            subject: Subject::ClientId(input.client_id),
            view,
        })
    })
}

/// Project takes precedence when both ids are given.
pub fn get_tasks(ctx: &ToolContext, input: TasksInput) -> Envelope<TaskListing> {
    respond("get-tasks", || {
        let (filter_type, filter_id) = match (input.project_id, input.staff_id) {
            (Some(project_id), _) => (FilterType::Project, project_id),
            (None, Some(staff_id)) => (FilterType::Staff, staff_id),
            (None, None) => return Err(ApiError::validation("Either projectId or staffId must be provided")),
        };
        let window = Pagination::from_input(input.limit, input.offset);
        let show_completed = input.show_completed.unwrap_or(false);

        let client = ctx.client()?;
        let tasks = match filter_type {
            FilterType::Project => client.tasks_by_project(filter_id, show_completed)?,
            FilterType::Staff => client.tasks_by_staffer(filter_id, show_completed)?,
        };

        let (data, pagination) = window.slice(tasks);
        Ok(TaskListing {
            data,
            pagination,
            filter_type,
            filter_id,
            showing_completed: show_completed,
        })
    })
}

/// Staff takes precedence when both ids are given.
pub fn get_time_entries(ctx: &ToolContext, input: TimeEntriesInput) -> Envelope<TimeEntryListing> {
    respond("get-time-entries", || {
        let (filter_type, filter_id) = match (input.staff_id, input.project_id) {
            (Some(staff_id), _) => (FilterType::Staff, staff_id),
            (None, Some(project_id)) => (FilterType::Project, project_id),
            (None, None) => return Err(ApiError::validation("Either staffId or projectId must be provided")),
        };
        validate_dates(&input.start_date, &input.end_date)?;
        let window = Pagination::from_input(input.limit, input.offset);
        let view = input.view.unwrap_or_default();

        let client = ctx.client()?;
        let entries = match filter_type {
            FilterType::Staff => client.time_sheet(filter_id, &input.start_date, &input.end_date, view)?,
            FilterType::Project => client.time_by_project(filter_id, &input.start_date, &input.end_date, view)?,
        };

        let (data, pagination) = window.slice(entries);
        Ok(TimeEntryListing {
            data,
            pagination,
            filter_type,
            filter_id,
            start_date: input.start_date.clone(),
            end_date: input.end_date.clone(),
            view,
        })
    })
}

pub fn get_daily_totals(ctx: &ToolContext, input: DailyTotalsInput) -> Envelope<DailyTotals> {
    respond("get-daily-totals", || {
        validate_dates(&input.start_date, &input.end_date)?;
        let data = ctx
            .client()?
            .daily_totals(input.staff_id, &input.start_date, &input.end_date)?;
        Ok(DailyTotals {
            count: data.len(),
            data,
            staff_id: input.staff_id,
            start_date: input.start_date.clone(),
            end_date: input.end_date.clone(),
        })
    })
}

fn listing<R>(window: Pagination, records: Vec<R>, show_inactive: bool) -> Listing<R> {
    let (data, pagination) = window.slice(records);
    Listing {
        data,
        pagination,
        showing_inactive: show_inactive,
    }
}

/// Literal `YYYY-MM-DD` shape check; no calendar validation.
pub fn is_valid_date(value: &str) -> bool {
    DATE_PATTERN.is_match(value)
}

fn validate_dates(start_date: &str, end_date: &str) -> Result<(), ApiError> {
    if is_valid_date(start_date) && is_valid_date(end_date) {
        Ok(())
    } else {
        Err(ApiError::validation("Dates must be in YYYY-MM-DD format"))
    }
}

fn respond<T>(tool: &'static str, run: impl FnOnce() -> Result<T, ApiError>) -> Envelope<T> {
    let result = run();
    if let Err(err) = &result {
        debug!(tool, kind = err.kind().label(), "tool failed: {err}");
    }
    Envelope::from_result(result)
}
