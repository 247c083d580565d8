use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use mock_server::{app, app_with, MockState, API_TOKEN, FIRM_ID};
use serde_json::Value;
use tower::ServiceExt;

async fn body_json<T: serde::de::DeserializeOwned>(response: axum::response::Response) -> T {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn body_bytes(response: axum::response::Response) -> bytes::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

fn authed(uri: &str) -> Request<String> {
    Request::builder()
        .uri(uri)
        .header("X-Auth-ApiToken", API_TOKEN)
        .header("X-Auth-Realm", FIRM_ID)
        .body(String::new())
        .unwrap()
}

async fn get_json(uri: &str) -> (StatusCode, Value) {
    let resp = app().oneshot(authed(uri)).await.unwrap();
    let status = resp.status();
    let bytes = body_bytes(resp).await;
    // Rejections carry plain-text bodies.
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

// --- auth ---

#[tokio::test]
async fn missing_auth_headers_return_401() {
    let resp = app()
        .oneshot(Request::builder().uri("/staff").body(String::new()).unwrap())
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn wrong_realm_returns_401() {
    let req = Request::builder()
        .uri("/staff")
        .header("X-Auth-ApiToken", API_TOKEN)
        .header("X-Auth-Realm", "other-firm")
        .body(String::new())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

// --- staff ---

#[tokio::test]
async fn staff_hides_inactive_by_default() {
    let resp = app().oneshot(authed("/staff")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let staff: Vec<Value> = body_json(resp).await;
    assert_eq!(staff.len(), 19);
    assert!(staff.iter().all(|s| s["IsInactive"] == false));
}

#[tokio::test]
async fn staff_show_inactive_returns_everyone() {
    let (status, staff) = get_json("/staff?ShowInactive=true").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(staff.as_array().unwrap().len(), 23);
}

#[tokio::test]
async fn staff_picklist_uses_string_ids() {
    let (_, items) = get_json("/picklist/staff").await;
    let first = &items[0];
    assert_eq!(first["Id"], "1");
    assert_eq!(first["Name"], "First1 Last1");
}

#[tokio::test]
async fn staff_detail_view_controls_fields() {
    let (status, detailed) = get_json("/staff/detail/3?View=Detailed").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(detailed["StaffSID"], 3);
    assert_eq!(detailed["HomeTimezone"], "UTC");

    let (_, basic) = get_json("/staff/detail/3?View=Basic").await;
    assert!(basic.get("HomeTimezone").is_none());
}

// --- projects & clients ---

#[tokio::test]
async fn project_detail_not_found() {
    let (status, _) = get_json("/project/detail/999?View=Detailed").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn project_detail_bad_id_returns_400() {
    let (status, _) = get_json("/project/detail/abc?View=Detailed").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn project_detail_includes_client() {
    let (_, project) = get_json("/project/detail/101?View=Detailed").await;
    assert_eq!(project["Client"]["SystemId"], 501);
}

#[tokio::test]
async fn clients_filter_inactive() {
    let (_, active) = get_json("/client").await;
    let (_, all) = get_json("/client?ShowInactive=true").await;
    assert_eq!(active.as_array().unwrap().len(), 4);
    assert_eq!(all.as_array().unwrap().len(), 5);
}

// --- tasks ---

#[tokio::test]
async fn tasks_by_project_hide_completed_unless_asked() {
    let (_, open) = get_json("/task/listByProject/100").await;
    let (_, all) = get_json("/task/listByProject/100?showCompleted=true").await;
    assert_eq!(open.as_array().unwrap().len(), 2);
    assert_eq!(all.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn tasks_by_staffer_match_assignment() {
    let (_, tasks) = get_json("/task/ListByStaffer/1?showCompleted=true").await;
    let ids: Vec<i64> = tasks.as_array().unwrap().iter().map(|t| t["TaskSid"].as_i64().unwrap()).collect();
    assert_eq!(ids, vec![1000, 1072]);
}

#[tokio::test]
async fn staffer_route_is_case_sensitive() {
    let (status, _) = get_json("/task/listByStaffer/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// --- time ---

#[tokio::test]
async fn time_sheet_filters_by_range() {
    let (status, entries) = get_json("/time/Sheet/1?StartDt=2024-01-03&EndDt=2024-01-05&View=Detailed").await;
    assert_eq!(status, StatusCode::OK);
    let days: Vec<&str> = entries.as_array().unwrap().iter().map(|e| e["Dt"].as_str().unwrap()).collect();
    assert_eq!(days, vec!["2024-01-03", "2024-01-04", "2024-01-05"]);
}

#[tokio::test]
async fn time_sheet_requires_dates() {
    let (status, _) = get_json("/time/Sheet/1?View=Detailed").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn daily_totals_sum_per_day() {
    let (_, totals) = get_json("/time/TotalByDay/2?StartDt=2024-01-01&EndDt=2024-01-02").await;
    let totals = totals.as_array().unwrap();
    assert_eq!(totals.len(), 2);
    assert_eq!(totals[0]["dt"], "2024-01-01");
    assert_eq!(totals[0]["totalHours"], 8.0);
    assert_eq!(totals[0]["nonBillableHours"], 2.0);
}

// --- request log ---

#[tokio::test]
async fn request_log_records_path_and_query() {
    let state = MockState::default();
    let router = app_with(state.clone());
    router.oneshot(authed("/staff?ShowInactive=true")).await.unwrap();
    assert_eq!(state.requests.entries(), vec!["/staff?ShowInactive=true".to_string()]);
}
