//! BigTime resource records.
//!
//! # Design
//! These are pass-through projections of the upstream JSON. Field names keep
//! the upstream spelling and every known key is a [`Field`], so a key that
//! was missing stays missing and a `null` stays `null`. Unknown keys land in
//! `extra`. Decoding only checks JSON types; nothing is coerced or defaulted,
//! and one record with gaps never fails the list it arrived in. Hours, rates
//! and budgets stay `Number` so `8` is not rewritten as `8.0`.
//! Detail records embed their basic record with `#[serde(flatten)]`.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

use crate::field::Field;

/// Server-side selector for how much detail a record carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum View {
    Basic,
    #[default]
    Detailed,
}

impl View {
    pub fn as_str(&self) -> &'static str {
        match self {
            View::Basic => "Basic",
            View::Detailed => "Detailed",
        }
    }
}

/// Entry from any `picklist/*` endpoint (staff, projects, clients).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct PicklistItem {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub group: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_inactive: Field<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub city: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub state: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub zip: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub country: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub full_address: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

// ---------------------------------------------------------------------------
// Staff
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Staff {
    #[serde(rename = "StaffSID", default, skip_serializing_if = "Field::is_absent")]
    pub staff_sid: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub f_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub s_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub title: Field<String>,
    #[serde(rename = "ManagerID", default, skip_serializing_if = "Field::is_absent")]
    pub manager_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub e_mail: Field<String>,
    #[serde(rename = "Phone_Cell", default, skip_serializing_if = "Field::is_absent")]
    pub phone_cell: Field<String>,
    #[serde(rename = "Phone_Wk", default, skip_serializing_if = "Field::is_absent")]
    pub phone_wk: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub notes: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_inactive: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub dt_created: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub dt_modified: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub default_role: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address: Field<Address>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub capacity: Field<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomField {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub sid: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub value: Field<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct StaffDetail {
    #[serde(flatten)]
    pub staff: Staff,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status: Field<i64>,
    #[serde(rename = "Start_dt", default, skip_serializing_if = "Field::is_absent")]
    pub start_dt: Field<String>,
    #[serde(rename = "Term_dt", default, skip_serializing_if = "Field::is_absent")]
    pub term_dt: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub cost_factor: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub staff_type: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub home_timezone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub udf_list: Field<Vec<CustomField>>,
}

// ---------------------------------------------------------------------------
// Projects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Project {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub system_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub nm: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub display_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub project_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub type_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub start_dt: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub end_dt: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_inactive: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status_prod: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub notes: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub client_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub budget_hrs: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub total_budget: Field<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Contact attached to a client or project.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Contact {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub full_nm: Field<String>,
    /// `PRIMARY`, `BILLING` or `OTHER`.
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub tag: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub title: Field<String>,
    #[serde(rename = "EMail", default, skip_serializing_if = "Field::is_absent")]
    pub email: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub phone: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address: Field<Address>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub linked_projects: Field<Vec<LinkedProject>>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Other projects a contact is attached to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct LinkedProject {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub system_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub nm: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub display_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub project_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_inactive: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub primary_contact_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub billing_contact_id: Field<i64>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectClient {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub system_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub nm: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub client_code: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_inactive: Field<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectDetail {
    #[serde(flatten)]
    pub project: Project,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status_bill: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_all_staff: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_no_charge: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub invoice_type: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub basic_rate: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub contact_list: Field<Vec<Contact>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub address_list: Field<Vec<Address>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub client: Field<ProjectClient>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub udf_list: Field<Vec<Value>>,
}

// ---------------------------------------------------------------------------
// Clients
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Client {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub system_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub nm: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub display_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub legal_nm: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub client_id: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub full_address: Field<String>,
    #[serde(rename = "MainPH", default, skip_serializing_if = "Field::is_absent")]
    pub main_ph: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub notes: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_inactive: Field<bool>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub dt_created: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub dt_modified: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ClientDetail {
    #[serde(flatten)]
    pub client: Client,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub bill_nm: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub bill_address: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub status: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub billing_contact_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub primary_contact_id: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub contact_list: Field<Vec<Contact>>,
}

// ---------------------------------------------------------------------------
// Tasks
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct TaskAssignment {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub sid: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub nm: Field<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Returned by the task list endpoints and `task/detail` alike.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Task {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub task_sid: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub project_sid: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub task_nm: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub task_group: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub full_name: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub current_status: Field<i64>,
    #[serde(rename = "CurrentStatus_nm", default, skip_serializing_if = "Field::is_absent")]
    pub current_status_nm: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub priority: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub assignment_list: Field<Vec<TaskAssignment>>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub due_dt: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub start_dt: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub budget_hours: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub per_comp: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub is_archived: Field<bool>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

pub type TaskDetail = Task;

// ---------------------------------------------------------------------------
// Time
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeEntry {
    #[serde(rename = "SID", default, skip_serializing_if = "Field::is_absent")]
    pub sid: Field<i64>,
    #[serde(rename = "Dt", default, skip_serializing_if = "Field::is_absent")]
    pub dt: Field<String>,
    #[serde(rename = "ProjectSID", default, skip_serializing_if = "Field::is_absent")]
    pub project_sid: Field<i64>,
    #[serde(rename = "ProjectNm", default, skip_serializing_if = "Field::is_absent")]
    pub project_nm: Field<String>,
    #[serde(rename = "ClientNm", default, skip_serializing_if = "Field::is_absent")]
    pub client_nm: Field<String>,
    #[serde(rename = "StaffSID", default, skip_serializing_if = "Field::is_absent")]
    pub staff_sid: Field<i64>,
    #[serde(rename = "TaskSID", default, skip_serializing_if = "Field::is_absent")]
    pub task_sid: Field<i64>,
    #[serde(rename = "TaskNm", default, skip_serializing_if = "Field::is_absent")]
    pub task_nm: Field<String>,
    #[serde(rename = "Hours_IN", default, skip_serializing_if = "Field::is_absent")]
    pub hours_in: Field<Number>,
    #[serde(rename = "Notes", default, skip_serializing_if = "Field::is_absent")]
    pub notes: Field<String>,
    #[serde(rename = "NoCharge", default, skip_serializing_if = "Field::is_absent")]
    pub no_charge: Field<bool>,
    #[serde(rename = "IsApproved", default, skip_serializing_if = "Field::is_absent")]
    pub is_approved: Field<bool>,
    #[serde(rename = "HoursBillable", default, skip_serializing_if = "Field::is_absent")]
    pub hours_billable: Field<Number>,
    #[serde(rename = "BillRate", default, skip_serializing_if = "Field::is_absent")]
    pub bill_rate: Field<Number>,
    #[serde(rename = "ChargeBillable", default, skip_serializing_if = "Field::is_absent")]
    pub charge_billable: Field<Number>,
    #[serde(rename = "ApprovalInfo", default, skip_serializing_if = "Field::is_absent")]
    pub approval_info: Field<Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyTotal {
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub staff_sid: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub dt: Field<String>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub total_hours: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub timer_count: Field<i64>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub billable_hours: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub non_billable_hours: Field<Number>,
    #[serde(default, skip_serializing_if = "Field::is_absent")]
    pub total_unsubmitted_time: Field<Number>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn staff_keeps_upstream_field_names() {
        let raw = json!({
            "StaffSID": 7,
            "FName": "Ada",
            "SName": "Lovelace",
            "EMail": "ada@example.com",
            "Phone_Cell": "555-0100",
            "ManagerID": 2,
            "IsInactive": false
        });
        let staff: Staff = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(staff.staff_sid.get(), Some(7));
        assert_eq!(staff.e_mail.as_str(), Some("ada@example.com"));
        assert_eq!(staff.phone_cell.as_str(), Some("555-0100"));
        assert_eq!(staff.manager_id.get(), Some(2));
        assert_eq!(serde_json::to_value(&staff).unwrap(), raw);
    }

    #[test]
    fn nulls_and_missing_keys_survive() {
        let raw = json!({ "StaffSID": 1, "Title": null, "IsInactive": null, "Address": null });
        let staff: Staff = serde_json::from_value(raw.clone()).unwrap();
        assert!(staff.title.is_null());
        assert!(staff.f_name.is_absent());
        assert_eq!(serde_json::to_value(&staff).unwrap(), raw);
    }

    #[test]
    fn missing_flag_is_not_invented() {
        let client: Client = serde_json::from_value(json!({ "SystemId": 10, "Nm": "Acme" })).unwrap();
        assert!(client.is_inactive.is_absent());
        assert!(serde_json::to_value(&client).unwrap().get("IsInactive").is_none());
    }

    #[test]
    fn unknown_fields_pass_through() {
        let raw = json!({
            "SystemId": 10,
            "Nm": "Acme",
            "IsInactive": false,
            "QBCustomerId": "QB-1",
            "CostCenterA": 4
        });
        let client: Client = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(client.extra.get("QBCustomerId"), Some(&json!("QB-1")));
        assert_eq!(serde_json::to_value(&client).unwrap(), raw);
    }

    #[test]
    fn detail_embeds_basic_record() {
        let raw = json!({
            "SystemId": 100,
            "Nm": "Website",
            "ProjectCode": "WEB",
            "IsInactive": false,
            "StatusBill": 1,
            "Client": { "SystemId": 500, "Nm": "Acme", "ClientCode": null },
            "InvoiceNotes": "net 30"
        });
        let detail: ProjectDetail = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(detail.project.system_id.get(), Some(100));
        assert_eq!(detail.status_bill.get(), Some(1));
        assert_eq!(detail.client.value().and_then(|c| c.system_id.get()), Some(500));
        assert_eq!(detail.project.extra.get("InvoiceNotes"), Some(&json!("net 30")));
        assert_eq!(serde_json::to_value(&detail).unwrap(), raw);
    }

    #[test]
    fn contact_carries_linked_projects() {
        let raw = json!({
            "Id": 3,
            "FullNm": "Grace Hopper",
            "Tag": "BILLING",
            "ProjectSid": 100,
            "LinkedProjects": [{ "SystemId": 101, "Nm": "Support", "ProjectCode": "SUP", "IsInactive": false }]
        });
        let contact: Contact = serde_json::from_value(raw.clone()).unwrap();
        let linked = contact.linked_projects.value().unwrap();
        assert_eq!(linked[0].project_code.as_str(), Some("SUP"));
        assert_eq!(contact.extra.get("ProjectSid"), Some(&json!(100)));
        assert_eq!(serde_json::to_value(&contact).unwrap(), raw);
    }

    #[test]
    fn time_entry_with_gaps_still_decodes() {
        let raw = json!({ "SID": 1, "Dt": "2024-01-02", "ProjectSID": null, "StaffSID": 1 });
        let entry: TimeEntry = serde_json::from_value(raw.clone()).unwrap();
        assert!(entry.hours_in.is_absent());
        assert!(entry.project_sid.is_null());
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn mistyped_value_is_rejected() {
        assert!(serde_json::from_value::<TimeEntry>(json!({ "SID": "one" })).is_err());
    }

    #[test]
    fn daily_total_uses_camel_case() {
        let raw = json!({
            "staffSid": 1,
            "dt": "2024-01-02",
            "totalHours": 8.0,
            "timerCount": 0,
            "billableHours": 6.5,
            "nonBillableHours": 1.5,
            "totalUnsubmittedTime": 0.0
        });
        let total: DailyTotal = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(total.billable_hours.value().and_then(Number::as_f64), Some(6.5));
        assert_eq!(serde_json::to_value(&total).unwrap(), raw);
    }

    #[test]
    fn view_defaults_to_detailed() {
        assert_eq!(View::default(), View::Detailed);
        assert_eq!(serde_json::to_value(View::Basic).unwrap(), json!("Basic"));
    }
}
