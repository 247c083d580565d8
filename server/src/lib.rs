//! Line-delimited JSON front end for the BigTime tools.
//!
//! # Overview
//! An agent host writes one request per line on stdin and reads one response
//! per line on stdout:
//!
//! ```text
//! {"id": 1, "method": "tools/list"}
//! {"id": 2, "method": "tools/call", "params": {"name": "get-staff", "arguments": {"limit": 5}}}
//! ```
//!
//! # Design
//! - Tool outcomes, including failures, travel inside `result` as the
//!   envelope the handler produced. Only protocol faults (malformed line,
//!   unknown method or tool, undecodable arguments) use `error`.
//! - The `id` is echoed verbatim; a line that is not JSON gets `id: null`.
//! - Requests are handled in arrival order; the writer is flushed after
//!   every response.

use std::io::{self, BufRead, Write};

use bigtime_core::{catalog, dispatch, ToolContext};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::{debug, warn};

pub const LIST_METHOD: &str = "tools/list";
pub const CALL_METHOD: &str = "tools/call";

#[derive(Debug, Deserialize)]
struct Incoming {
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Deserialize)]
struct CallParams {
    name: String,
    #[serde(default)]
    arguments: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Response {
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ErrorBody {
    pub message: String,
}

impl Response {
    fn result(id: Value, result: Value) -> Self {
        Self {
            id,
            result: Some(result),
            error: None,
        }
    }

    fn error(id: Value, message: impl Into<String>) -> Self {
        Self {
            id,
            result: None,
            error: Some(ErrorBody {
                message: message.into(),
            }),
        }
    }
}

/// Answer one request line.
pub fn handle_line(ctx: &ToolContext, line: &str) -> Response {
    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            warn!("malformed request line: {e}");
            return Response::error(Value::Null, format!("malformed request: {e}"));
        }
    };
    let id = value.get("id").cloned().unwrap_or(Value::Null);

    let incoming: Incoming = match serde_json::from_value(value) {
        Ok(incoming) => incoming,
        Err(e) => return Response::error(id, format!("invalid request: {e}")),
    };
    debug!(method = %incoming.method, "request");

    match incoming.method.as_str() {
        LIST_METHOD => Response::result(id, json!({ "tools": catalog() })),
        CALL_METHOD => {
            let params: CallParams = match serde_json::from_value(incoming.params) {
                Ok(params) => params,
                Err(e) => return Response::error(id, format!("invalid params: {e}")),
            };
            match dispatch(ctx, &params.name, params.arguments) {
                Ok(envelope) => Response::result(id, envelope),
                Err(e) => Response::error(id, e.to_string()),
            }
        }
        other => Response::error(id, format!("unknown method: {other}")),
    }
}

/// Serve requests from `reader` until end of input.
pub fn serve<R: BufRead, W: Write>(ctx: &ToolContext, reader: R, mut writer: W) -> io::Result<()> {
    for line in reader.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let response = handle_line(ctx, &line);
        serde_json::to_writer(&mut writer, &response)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use bigtime_core::{ApiError, ClientConfig, Credentials, HttpRequest, HttpResponse, StaticCredentials, Transport};

    use super::*;

    struct StaffOnly;

    impl Transport for StaffOnly {
        fn execute(&self, request: &HttpRequest) -> Result<HttpResponse, ApiError> {
            if request.url.ends_with("/staff") {
                Ok(HttpResponse::new(
                    200,
                    r#"[{"StaffSID":1,"IsInactive":false},{"StaffSID":2,"IsInactive":false}]"#,
                ))
            } else {
                Ok(HttpResponse::new(404, ""))
            }
        }
    }

    fn ctx() -> ToolContext {
        ToolContext::new(
            ClientConfig::with_base_url("http://bigtime.test"),
            Arc::new(StaticCredentials(Credentials::new("t", "f"))),
            Arc::new(StaffOnly),
        )
    }

    fn run(input: &str) -> Vec<Value> {
        let mut out = Vec::new();
        serve(&ctx(), input.as_bytes(), &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn lists_all_nine_tools() {
        let responses = run(r#"{"id":1,"method":"tools/list"}"#);
        let tools = responses[0]["result"]["tools"].as_array().unwrap();
        assert_eq!(tools.len(), 9);
        assert_eq!(tools[0]["name"], "get-staff");
        assert!(tools[0]["inputSchema"].is_object());
        assert!(responses[0].get("error").is_none());
    }

    #[test]
    fn call_returns_the_envelope_as_result() {
        let responses =
            run(r#"{"id":"a","method":"tools/call","params":{"name":"get-staff","arguments":{"limit":1}}}"#);
        assert_eq!(responses[0]["id"], "a");
        let result = &responses[0]["result"];
        assert_eq!(result["success"], true);
        assert_eq!(result["pagination"]["total"], 2);
        assert_eq!(result["pagination"]["returned"], 1);
    }

    #[test]
    fn tool_failures_stay_inside_result() {
        let responses =
            run(r#"{"id":2,"method":"tools/call","params":{"name":"get-project-detail","arguments":{"projectId":9}}}"#);
        assert_eq!(
            responses[0]["result"],
            json!({ "success": false, "error": "API Error", "message": "BigTime API error: 404 Not Found" })
        );
    }

    #[test]
    fn protocol_faults_use_error() {
        let input = concat!(
            "not json\n",
            "\n",
            "   \n",
            "{\"id\":3,\"method\":\"tools/delete\"}\n",
            "{\"id\":4,\"method\":\"tools/call\",\"params\":{\"name\":\"get-invoices\"}}\n",
            "{\"id\":5,\"method\":\"tools/call\",\"params\":{\"name\":\"get-staff-detail\",\"arguments\":{}}}\n",
            "{\"id\":6,\"method\":\"tools/call\"}\n",
        );
        let responses = run(input);
        assert_eq!(responses.len(), 5);

        assert_eq!(responses[0]["id"], Value::Null);
        assert!(responses[0]["error"]["message"].as_str().unwrap().starts_with("malformed request"));
        assert_eq!(responses[1]["error"]["message"], "unknown method: tools/delete");
        assert_eq!(responses[2]["error"]["message"], "unknown tool: get-invoices");
        assert!(responses[3]["error"]["message"]
            .as_str()
            .unwrap()
            .starts_with("invalid arguments for get-staff-detail"));
        assert!(responses[4]["error"]["message"].as_str().unwrap().starts_with("invalid params"));
        assert!(responses.iter().all(|r| r.get("result").is_none()));
    }

    #[test]
    fn missing_arguments_default_to_empty() {
        let responses = run(r#"{"id":7,"method":"tools/call","params":{"name":"get-staff"}}"#);
        assert_eq!(responses[0]["result"]["success"], true);
    }
}
