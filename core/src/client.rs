//! Authenticated request builder and response parser for the BigTime API.
//!
//! # Design
//! Each resource operation is split into a pure `build_*` method that
//! produces an [`HttpRequest`] and a fetching method that runs it through
//! the [`Transport`] and decodes the body. All of them funnel into
//! [`BigTimeClient::build_request`] and [`BigTimeClient::parse_response`],
//! so URL layout, auth headers, and status handling live in one place.
//!
//! Boolean flags are only written when true, and their casing differs per
//! endpoint (`ShowInactive` vs `showCompleted`). Dates are forwarded as-is.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use crate::credentials::Credentials;
use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse, Transport};
use crate::types::{
    Client, ClientDetail, DailyTotal, PicklistItem, Project, ProjectDetail, Staff, StaffDetail, Task, TaskDetail,
    TimeEntry, View,
};

pub const TOKEN_HEADER: &str = "X-Auth-ApiToken";
pub const REALM_HEADER: &str = "X-Auth-Realm";

/// Stateless BigTime client bound to one set of credentials.
#[derive(Clone)]
pub struct BigTimeClient {
    base_url: String,
    credentials: Credentials,
    transport: Arc<dyn Transport>,
}

impl BigTimeClient {
    pub fn new(base_url: &str, credentials: Credentials, transport: Arc<dyn Transport>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            credentials,
            transport,
        }
    }

    /// Build an authenticated request for `endpoint` (relative, may carry a
    /// query string).
    pub fn build_request<B>(&self, method: HttpMethod, endpoint: &str, body: Option<&B>) -> Result<HttpRequest, ApiError>
    where
        B: Serialize + ?Sized,
    {
        let body = body
            .map(serde_json::to_string)
            .transpose()
            .map_err(|e| ApiError::Serialization(e.to_string()))?;
        Ok(self.request(method, endpoint, body))
    }

    /// Map a response to `T`, failing on any non-2xx status.
    pub fn parse_response<T: DeserializeOwned>(&self, response: HttpResponse) -> Result<T, ApiError> {
        if !response.is_success() {
            warn!(status = response.status, reason = %response.status_text, "BigTime returned an error status");
            return Err(ApiError::Upstream {
                status: response.status,
                status_text: response.status_text,
            });
        }
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
    }

    /// Build, send, and decode in one step.
    pub fn fetch<T, B>(&self, method: HttpMethod, endpoint: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self.build_request(method, endpoint, body)?;
        self.execute(request)
    }

    pub fn execute<T: DeserializeOwned>(&self, request: HttpRequest) -> Result<T, ApiError> {
        debug!(method = request.method.as_str(), url = %request.url, "calling BigTime");
        let response = self.transport.execute(&request)?;
        self.parse_response(response)
    }

    fn request(&self, method: HttpMethod, endpoint: &str, body: Option<String>) -> HttpRequest {
        HttpRequest {
            method,
            url: format!("{}/{}", self.base_url, endpoint.trim_start_matches('/')),
            headers: vec![
                ("Content-Type".to_string(), "application/json".to_string()),
                (TOKEN_HEADER.to_string(), self.credentials.token.clone()),
                (REALM_HEADER.to_string(), self.credentials.firm_id.clone()),
            ],
            body,
        }
    }

    fn get(&self, endpoint: &str, query: &[(&str, &str)]) -> HttpRequest {
        self.request(HttpMethod::Get, &with_query(endpoint, query), None)
    }

    // -----------------------------------------------------------------------
    // Request builders
    // -----------------------------------------------------------------------

    pub fn build_staff_picklist(&self) -> HttpRequest {
        self.get("picklist/staff", &[])
    }

    pub fn build_staff(&self, show_inactive: bool) -> HttpRequest {
        self.get("staff", &flag("ShowInactive", show_inactive))
    }

    pub fn build_staff_detail(&self, staff_id: i64, view: View) -> HttpRequest {
        self.get(&format!("staff/detail/{staff_id}"), &[("View", view.as_str())])
    }

    pub fn build_projects_picklist(&self) -> HttpRequest {
        self.get("picklist/projects", &[])
    }

    pub fn build_projects(&self, show_inactive: bool) -> HttpRequest {
        self.get("project", &flag("ShowInactive", show_inactive))
    }

    pub fn build_project_detail(&self, project_id: i64, view: View) -> HttpRequest {
        self.get(&format!("project/detail/{project_id}"), &[("View", view.as_str())])
    }

    pub fn build_clients_picklist(&self) -> HttpRequest {
        self.get("picklist/clients", &[])
    }

    pub fn build_clients(&self, show_inactive: bool) -> HttpRequest {
        self.get("client", &flag("ShowInactive", show_inactive))
    }

    pub fn build_client_detail(&self, client_id: i64, view: View) -> HttpRequest {
        self.get(&format!("client/detail/{client_id}"), &[("View", view.as_str())])
    }

    pub fn build_tasks_by_project(&self, project_id: i64, show_completed: bool) -> HttpRequest {
        self.get(
            &format!("task/listByProject/{project_id}"),
            &flag("showCompleted", show_completed),
        )
    }

    pub fn build_tasks_by_staffer(&self, staff_id: i64, show_completed: bool) -> HttpRequest {
        self.get(
            &format!("task/ListByStaffer/{staff_id}"),
            &flag("showCompleted", show_completed),
        )
    }

    pub fn build_task_detail(&self, task_id: i64, view: View) -> HttpRequest {
        self.get(&format!("task/detail/{task_id}"), &[("View", view.as_str())])
    }

    pub fn build_time_sheet(&self, staff_id: i64, start_date: &str, end_date: &str, view: View) -> HttpRequest {
        self.get(
            &format!("time/Sheet/{staff_id}"),
            &[("StartDt", start_date), ("EndDt", end_date), ("View", view.as_str())],
        )
    }

    pub fn build_time_by_project(&self, project_id: i64, start_date: &str, end_date: &str, view: View) -> HttpRequest {
        self.get(
            &format!("time/ByProject/{project_id}"),
            &[("StartDt", start_date), ("EndDt", end_date), ("View", view.as_str())],
        )
    }

    pub fn build_daily_totals(&self, staff_id: i64, start_date: &str, end_date: &str) -> HttpRequest {
        self.get(
            &format!("time/TotalByDay/{staff_id}"),
            &[("StartDt", start_date), ("EndDt", end_date)],
        )
    }

    // -----------------------------------------------------------------------
    // Resource operations
    // -----------------------------------------------------------------------

    pub fn staff_picklist(&self) -> Result<Vec<PicklistItem>, ApiError> {
        self.execute(self.build_staff_picklist())
    }

    pub fn staff(&self, show_inactive: bool) -> Result<Vec<Staff>, ApiError> {
        self.execute(self.build_staff(show_inactive))
    }

    pub fn staff_detail(&self, staff_id: i64, view: View) -> Result<StaffDetail, ApiError> {
        self.execute(self.build_staff_detail(staff_id, view))
    }

    pub fn projects_picklist(&self) -> Result<Vec<PicklistItem>, ApiError> {
        self.execute(self.build_projects_picklist())
    }

    pub fn projects(&self, show_inactive: bool) -> Result<Vec<Project>, ApiError> {
        self.execute(self.build_projects(show_inactive))
    }

    pub fn project_detail(&self, project_id: i64, view: View) -> Result<ProjectDetail, ApiError> {
        self.execute(self.build_project_detail(project_id, view))
    }

    pub fn clients_picklist(&self) -> Result<Vec<PicklistItem>, ApiError> {
        self.execute(self.build_clients_picklist())
    }

    pub fn clients(&self, show_inactive: bool) -> Result<Vec<Client>, ApiError> {
        self.execute(self.build_clients(show_inactive))
    }

    pub fn client_detail(&self, client_id: i64, view: View) -> Result<ClientDetail, ApiError> {
        self.execute(self.build_client_detail(client_id, view))
    }

    pub fn tasks_by_project(&self, project_id: i64, show_completed: bool) -> Result<Vec<Task>, ApiError> {
        self.execute(self.build_tasks_by_project(project_id, show_completed))
    }

    pub fn tasks_by_staffer(&self, staff_id: i64, show_completed: bool) -> Result<Vec<Task>, ApiError> {
        self.execute(self.build_tasks_by_staffer(staff_id, show_completed))
    }

    pub fn task_detail(&self, task_id: i64, view: View) -> Result<TaskDetail, ApiError> {
        self.execute(self.build_task_detail(task_id, view))
    }

    pub fn time_sheet(&self, staff_id: i64, start_date: &str, end_date: &str, view: View) -> Result<Vec<TimeEntry>, ApiError> {
        self.execute(self.build_time_sheet(staff_id, start_date, end_date, view))
    }

    pub fn time_by_project(
        &self,
        project_id: i64,
        start_date: &str,
        end_date: &str,
        view: View,
    ) -> Result<Vec<TimeEntry>, ApiError> {
        self.execute(self.build_time_by_project(project_id, start_date, end_date, view))
    }

    pub fn daily_totals(&self, staff_id: i64, start_date: &str, end_date: &str) -> Result<Vec<DailyTotal>, ApiError> {
        self.execute(self.build_daily_totals(staff_id, start_date, end_date))
    }
}

/// `[(name, "true")]` when set, nothing otherwise. There is no `=false` form.
fn flag(name: &'static str, enabled: bool) -> Vec<(&'static str, &'static str)> {
    if enabled {
        vec![(name, "true")]
    } else {
        Vec::new()
    }
}

fn with_query(endpoint: &str, query: &[(&str, &str)]) -> String {
    if query.is_empty() {
        return endpoint.to_string();
    }
    let pairs: Vec<String> = query.iter().map(|(key, value)| format!("{key}={value}")).collect();
    format!("{endpoint}?{}", pairs.join("&"))
}
