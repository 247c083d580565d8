use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{Path, Query, Request, State},
    http::{HeaderMap, StatusCode},
    middleware::{self, Next},
    response::Response,
    routing::get,
    Json, Router,
};
use serde::Deserialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

pub const API_TOKEN: &str = "test-token";
pub const FIRM_ID: &str = "test-firm";

/// Seeded upstream records, stored in BigTime's wire shape.
#[derive(Clone, Debug)]
pub struct Fixtures {
    pub staff: Vec<Value>,
    pub projects: Vec<Value>,
    pub clients: Vec<Value>,
    pub tasks: Vec<Value>,
    pub time_entries: Vec<Value>,
}

impl Fixtures {
    /// 23 staff (every fifth inactive), 8 projects, 5 clients, 3 tasks per
    /// project, and ten January 2024 days of time for staff 1 to 3.
    pub fn seeded() -> Self {
        let staff = (1..=23)
            .map(|sid: i64| {
                let title = if sid % 2 == 0 { "Consultant" } else { "Analyst" };
                json!({
                    "StaffSID": sid,
                    "FName": format!("First{sid}"),
                    "SName": format!("Last{sid}"),
                    "Title": title,
                    "EMail": format!("staff{sid}@example.com"),
                    "IsInactive": sid % 5 == 0,
                    "Capacity": 40,
                })
            })
            .collect();

        let clients = (500..=504)
            .map(|sid: i64| {
                json!({
                    "SystemId": sid,
                    "Nm": format!("Client {sid}"),
                    "ClientId": format!("C-{sid}"),
                    "IsInactive": sid == 504,
                })
            })
            .collect();

        let projects = (100..=107)
            .map(|sid: i64| {
                json!({
                    "SystemId": sid,
                    "Nm": format!("Project {sid}"),
                    "ProjectCode": format!("P{sid}"),
                    "ClientId": 500 + (sid - 100) % 5,
                    "IsInactive": sid == 107,
                })
            })
            .collect();

        let mut tasks = Vec::new();
        for project in 100..=107_i64 {
            for k in 0..3_i64 {
                let staffer = ((project - 100) * 3 + k) % 23 + 1;
                let status = if k == 2 { "Completed" } else { "In Progress" };
                tasks.push(json!({
                    "TaskSid": project * 10 + k,
                    "ProjectSid": project,
                    "TaskNm": format!("Task {k} of {project}"),
                    "CurrentStatus_nm": status,
                    "AssignmentList": [{ "Sid": staffer, "Nm": format!("First{staffer} Last{staffer}") }],
                }));
            }
        }

        let mut time_entries = Vec::new();
        let mut sid = 1_i64;
        for staffer in 1..=3_i64 {
            for day in 1..=10_i64 {
                time_entries.push(json!({
                    "SID": sid,
                    "Dt": format!("2024-01-{day:02}"),
                    "ProjectSID": 100 + (day + staffer) % 3,
                    "StaffSID": staffer,
                    "Hours_IN": 8.0,
                    "HoursBillable": 6.0,
                    "Notes": format!("entry {sid}"),
                }));
                sid += 1;
            }
        }

        Self {
            staff,
            projects,
            clients,
            tasks,
            time_entries,
        }
    }
}

/// Path and query of every request that reached the server, in order.
#[derive(Clone, Debug, Default)]
pub struct RequestLog(Arc<Mutex<Vec<String>>>);

impl RequestLog {
    fn record(&self, target: String) {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).push(target);
    }

    pub fn entries(&self) -> Vec<String> {
        self.0.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    pub fn count_with_prefix(&self, prefix: &str) -> usize {
        self.entries().iter().filter(|e| e.starts_with(prefix)).count()
    }
}

#[derive(Clone, Debug)]
pub struct MockState {
    pub fixtures: Arc<Fixtures>,
    pub requests: RequestLog,
}

impl Default for MockState {
    fn default() -> Self {
        Self {
            fixtures: Arc::new(Fixtures::seeded()),
            requests: RequestLog::default(),
        }
    }
}

pub fn app() -> Router {
    app_with(MockState::default())
}

pub fn app_with(state: MockState) -> Router {
    Router::new()
        .route("/picklist/staff", get(staff_picklist))
        .route("/staff", get(list_staff))
        .route("/staff/detail/{id}", get(staff_detail))
        .route("/picklist/projects", get(projects_picklist))
        .route("/project", get(list_projects))
        .route("/project/detail/{id}", get(project_detail))
        .route("/picklist/clients", get(clients_picklist))
        .route("/client", get(list_clients))
        .route("/client/detail/{id}", get(client_detail))
        .route("/task/listByProject/{id}", get(tasks_by_project))
        .route("/task/ListByStaffer/{id}", get(tasks_by_staffer))
        .route("/task/detail/{id}", get(task_detail))
        .route("/time/Sheet/{id}", get(time_sheet))
        .route("/time/ByProject/{id}", get(time_by_project))
        .route("/time/TotalByDay/{id}", get(daily_totals))
        .layer(middleware::from_fn_with_state(state.clone(), authenticate))
        .with_state(state)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, state: MockState) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with(state)).await
}

async fn authenticate(State(state): State<MockState>, request: Request, next: Next) -> Result<Response, StatusCode> {
    let target = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_default();
    state.requests.record(target);

    let headers = request.headers();
    if header(headers, "x-auth-apitoken") != Some(API_TOKEN) || header(headers, "x-auth-realm") != Some(FIRM_ID) {
        return Err(StatusCode::UNAUTHORIZED);
    }
    Ok(next.run(request).await)
}

fn header<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[derive(Debug, Default, Deserialize)]
struct InactiveQuery {
    #[serde(rename = "ShowInactive", default)]
    show_inactive: bool,
}

#[derive(Debug, Default, Deserialize)]
struct CompletedQuery {
    #[serde(rename = "showCompleted", default)]
    show_completed: bool,
}

#[derive(Debug, Default, Deserialize)]
struct ViewQuery {
    #[serde(rename = "View")]
    view: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RangeQuery {
    #[serde(rename = "StartDt")]
    start: String,
    #[serde(rename = "EndDt")]
    end: String,
}

fn int(record: &Value, key: &str) -> Option<i64> {
    record.get(key).and_then(Value::as_i64)
}

fn is_inactive(record: &Value) -> bool {
    record.get("IsInactive").and_then(Value::as_bool).unwrap_or(false)
}

fn active_unless(records: &[Value], show_inactive: bool) -> Vec<Value> {
    records
        .iter()
        .filter(|r| show_inactive || !is_inactive(r))
        .cloned()
        .collect()
}

fn find(records: &[Value], key: &str, id: i64) -> Result<Value, StatusCode> {
    records
        .iter()
        .find(|r| int(r, key) == Some(id))
        .cloned()
        .ok_or(StatusCode::NOT_FOUND)
}

/// `Detailed` adds the extra fields BigTime only sends in that view.
fn with_view(mut record: Value, view: Option<&str>, extra: Value) -> Value {
    if view != Some("Basic") {
        if let (Some(target), Some(fields)) = (record.as_object_mut(), extra.as_object()) {
            target.extend(fields.clone());
        }
    }
    record
}

fn in_range(entry: &Value, range: &RangeQuery) -> bool {
    entry
        .get("Dt")
        .and_then(Value::as_str)
        .is_some_and(|dt| dt >= range.start.as_str() && dt <= range.end.as_str())
}

async fn staff_picklist(State(state): State<MockState>) -> Json<Vec<Value>> {
    let items = state
        .fixtures
        .staff
        .iter()
        .map(|s| {
            json!({
                "Id": int(s, "StaffSID").unwrap_or_default().to_string(),
                "Name": format!("{} {}", s["FName"].as_str().unwrap_or_default(), s["SName"].as_str().unwrap_or_default()),
                "Group": s.get("Title"),
                "IsInactive": is_inactive(s),
            })
        })
        .collect();
    Json(items)
}

async fn list_staff(State(state): State<MockState>, Query(q): Query<InactiveQuery>) -> Json<Vec<Value>> {
    Json(active_unless(&state.fixtures.staff, q.show_inactive))
}

async fn staff_detail(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Query(q): Query<ViewQuery>,
) -> Result<Json<Value>, StatusCode> {
    let record = find(&state.fixtures.staff, "StaffSID", id)?;
    Ok(Json(with_view(
        record,
        q.view.as_deref(),
        json!({ "Status": 1, "HomeTimezone": "UTC", "Start_dt": "2020-01-06" }),
    )))
}

async fn projects_picklist(State(state): State<MockState>) -> Json<Vec<Value>> {
    Json(picklist(&state.fixtures.projects))
}

async fn list_projects(State(state): State<MockState>, Query(q): Query<InactiveQuery>) -> Json<Vec<Value>> {
    Json(active_unless(&state.fixtures.projects, q.show_inactive))
}

async fn project_detail(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Query(q): Query<ViewQuery>,
) -> Result<Json<Value>, StatusCode> {
    let record = find(&state.fixtures.projects, "SystemId", id)?;
    let client_id = int(&record, "ClientId").unwrap_or_default();
    Ok(Json(with_view(
        record,
        q.view.as_deref(),
        json!({
            "StatusBill": 1,
            "IsAllStaff": true,
            "Client": { "SystemId": client_id, "Nm": format!("Client {client_id}") },
        }),
    )))
}

async fn clients_picklist(State(state): State<MockState>) -> Json<Vec<Value>> {
    Json(picklist(&state.fixtures.clients))
}

async fn list_clients(State(state): State<MockState>, Query(q): Query<InactiveQuery>) -> Json<Vec<Value>> {
    Json(active_unless(&state.fixtures.clients, q.show_inactive))
}

async fn client_detail(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Query(q): Query<ViewQuery>,
) -> Result<Json<Value>, StatusCode> {
    let record = find(&state.fixtures.clients, "SystemId", id)?;
    Ok(Json(with_view(
        record,
        q.view.as_deref(),
        json!({ "BillNm": "Accounts Payable", "Status": 1 }),
    )))
}

fn picklist(records: &[Value]) -> Vec<Value> {
    records
        .iter()
        .map(|r| {
            json!({
                "Id": int(r, "SystemId").unwrap_or_default().to_string(),
                "Name": r.get("Nm"),
                "IsInactive": is_inactive(r),
            })
        })
        .collect()
}

fn is_completed(task: &Value) -> bool {
    task.get("CurrentStatus_nm").and_then(Value::as_str) == Some("Completed")
}

fn assigned_to(task: &Value, staff_id: i64) -> bool {
    task.get("AssignmentList")
        .and_then(Value::as_array)
        .is_some_and(|list| list.iter().any(|a| int(a, "Sid") == Some(staff_id)))
}

async fn tasks_by_project(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Query(q): Query<CompletedQuery>,
) -> Json<Vec<Value>> {
    let tasks = state
        .fixtures
        .tasks
        .iter()
        .filter(|t| int(t, "ProjectSid") == Some(id))
        .filter(|t| q.show_completed || !is_completed(t))
        .cloned()
        .collect();
    Json(tasks)
}

async fn tasks_by_staffer(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Query(q): Query<CompletedQuery>,
) -> Json<Vec<Value>> {
    let tasks = state
        .fixtures
        .tasks
        .iter()
        .filter(|t| assigned_to(t, id))
        .filter(|t| q.show_completed || !is_completed(t))
        .cloned()
        .collect();
    Json(tasks)
}

async fn task_detail(State(state): State<MockState>, Path(id): Path<i64>) -> Result<Json<Value>, StatusCode> {
    find(&state.fixtures.tasks, "TaskSid", id).map(Json)
}

async fn time_sheet(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Query(range): Query<RangeQuery>,
) -> Json<Vec<Value>> {
    Json(time_for(&state.fixtures, "StaffSID", id, &range))
}

async fn time_by_project(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Query(range): Query<RangeQuery>,
) -> Json<Vec<Value>> {
    Json(time_for(&state.fixtures, "ProjectSID", id, &range))
}

fn time_for(fixtures: &Fixtures, key: &str, id: i64, range: &RangeQuery) -> Vec<Value> {
    fixtures
        .time_entries
        .iter()
        .filter(|e| int(e, key) == Some(id) && in_range(e, range))
        .cloned()
        .collect()
}

async fn daily_totals(
    State(state): State<MockState>,
    Path(id): Path<i64>,
    Query(range): Query<RangeQuery>,
) -> Json<Vec<Value>> {
    let mut by_day: BTreeMap<String, (f64, f64)> = BTreeMap::new();
    for entry in time_for(&state.fixtures, "StaffSID", id, &range) {
        let day = entry["Dt"].as_str().unwrap_or_default().to_string();
        let totals = by_day.entry(day).or_default();
        totals.0 += entry["Hours_IN"].as_f64().unwrap_or_default();
        totals.1 += entry["HoursBillable"].as_f64().unwrap_or_default();
    }
    let totals = by_day
        .into_iter()
        .map(|(dt, (total, billable))| {
            json!({
                "staffSid": id,
                "dt": dt,
                "totalHours": total,
                "timerCount": 0,
                "billableHours": billable,
                "nonBillableHours": total - billable,
                "totalUnsubmittedTime": 0.0,
            })
        })
        .collect();
    Json(totals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_fixture_sizes() {
        let f = Fixtures::seeded();
        assert_eq!(f.staff.len(), 23);
        assert_eq!(f.projects.len(), 8);
        assert_eq!(f.clients.len(), 5);
        assert_eq!(f.tasks.len(), 24);
        assert_eq!(f.time_entries.len(), 30);
    }

    #[test]
    fn every_fifth_staff_is_inactive() {
        let f = Fixtures::seeded();
        assert_eq!(active_unless(&f.staff, false).len(), 19);
        assert_eq!(active_unless(&f.staff, true).len(), 23);
    }

    #[test]
    fn basic_view_skips_detail_fields() {
        let record = json!({ "SystemId": 1 });
        let basic = with_view(record.clone(), Some("Basic"), json!({ "Status": 1 }));
        assert!(basic.get("Status").is_none());
        let detailed = with_view(record, Some("Detailed"), json!({ "Status": 1 }));
        assert_eq!(detailed["Status"], 1);
    }

    #[test]
    fn range_filter_is_inclusive() {
        let range = RangeQuery {
            start: "2024-01-02".to_string(),
            end: "2024-01-04".to_string(),
        };
        assert!(in_range(&json!({ "Dt": "2024-01-02" }), &range));
        assert!(in_range(&json!({ "Dt": "2024-01-04" }), &range));
        assert!(!in_range(&json!({ "Dt": "2024-01-05" }), &range));
    }

    #[test]
    fn request_log_counts_prefixes() {
        let log = RequestLog::default();
        log.record("/time/Sheet/1?StartDt=2024-01-01".to_string());
        log.record("/staff".to_string());
        assert_eq!(log.count_with_prefix("/time/"), 1);
        assert_eq!(log.entries().len(), 2);
    }
}
