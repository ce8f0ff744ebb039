mod common;

use common::{process_error, server_with, RecordingProvider};
use serde_json::{json, Value};
use yokatlas_mcp::mcp::{dto::McpRequest, handler, ToolCall};
use yokatlas_mcp::provider::Payload;
use yokatlas_mcp::tools::Operation;

fn call(name: &str, arguments: Value) -> ToolCall {
    ToolCall {
        name: name.to_string(),
        arguments,
    }
}

#[tokio::test]
async fn bachelor_details_success_is_pretty_printed() {
    let details = json!({ "name": "Boğaziçi Üniversitesi Bilgisayar Mühendisliği", "stats": { "kontenjan": 96 } });
    let provider = RecordingProvider::ok_json(details.clone());
    let server = server_with(provider.clone());

    let response = server
        .handle_tool_call(call(
            "get_bachelor_degree_atlas_details",
            json!({ "yop_kodu": "102210277", "year": 2024 }),
        ))
        .await;

    assert!(!response.is_error);
    assert_eq!(response.content.len(), 1);
    assert_eq!(response.text(), serde_json::to_string_pretty(&details).unwrap());

    let (operation, query) = provider.calls().pop().unwrap();
    assert_eq!(operation, Operation::GetBachelorDegreeAtlasDetails);
    assert_eq!(query.get("yop_kodu"), Some(&json!("102210277")));
    assert_eq!(query.get("year"), Some(&json!(2024)));
}

#[tokio::test]
async fn helper_failure_becomes_error_envelope() {
    let provider = RecordingProvider::replying(|_| Err(process_error(1, "program not found")));
    let server = server_with(provider);

    let response = server
        .handle_tool_call(call(
            "get_bachelor_degree_atlas_details",
            json!({ "yop_kodu": "102210277", "year": 2024 }),
        ))
        .await;

    assert!(response.is_error);
    let body: Value = serde_json::from_str(response.text()).unwrap();
    assert_eq!(
        body,
        json!({ "error": "Python process exited with code 1: program not found" })
    );
}

#[tokio::test]
async fn associate_search_always_forwards_tyt() {
    let provider = RecordingProvider::replying(|_| Ok(Payload::Text("listing".into())));
    let server = server_with(provider.clone());

    for arguments in [
        json!({}),
        json!({ "siralama": 300000 }),
        json!({ "program": "tıbbi laboratuvar", "max_results": 5 }),
    ] {
        let response = server
            .handle_tool_call(call("search_associate_degree_programs", arguments))
            .await;
        assert!(!response.is_error);
        assert_eq!(provider.last_query().get("puan_turu"), Some(&json!("tyt")));
    }
}

#[tokio::test]
async fn associate_search_renames_fields() {
    let provider = RecordingProvider::replying(|_| Ok(Payload::Text("listing".into())));
    let server = server_with(provider.clone());

    server
        .handle_tool_call(call(
            "search_associate_degree_programs",
            json!({
                "university": "anadolu",
                "city": ["eskişehir"],
                "availability": "Dolmadı"
            }),
        ))
        .await;

    let query = provider.last_query();
    let fields: Vec<_> = query.fields().collect();
    assert_eq!(
        fields,
        vec!["doluluk", "max_results", "puan_turu", "sehir", "universite"]
    );
    assert_eq!(query.get("sehir"), Some(&json!(["eskişehir"])));
}

#[tokio::test]
async fn bachelor_search_keeps_lists_and_defaults_max_results() {
    let provider = RecordingProvider::replying(|_| Ok(Payload::Text("1. Bilgisayar Mühendisliği".into())));
    let server = server_with(provider.clone());

    let response = server
        .handle_tool_call(call(
            "search_bachelor_degree_programs",
            json!({ "universite": ["boğaziçi", "odtü"], "puan_turu": "SAY" }),
        ))
        .await;

    assert!(!response.is_error);
    assert_eq!(response.text(), "1. Bilgisayar Mühendisliği");
    let query = provider.last_query();
    assert_eq!(query.get("universite"), Some(&json!(["boğaziçi", "odtü"])));
    assert_eq!(query.get("max_results"), Some(&json!(100)));
}

#[tokio::test]
async fn integral_float_counts_are_accepted() {
    let provider = RecordingProvider::replying(|_| Ok(Payload::Text("listing".into())));
    let server = server_with(provider.clone());

    let response = server
        .handle_tool_call(call(
            "search_associate_degree_programs",
            json!({ "max_results": 1.0, "siralama": 250000.0 }),
        ))
        .await;

    assert!(!response.is_error, "{}", response.text());
    let query = provider.last_query();
    assert_eq!(query.get("max_results"), Some(&json!(1)));
    assert_eq!(query.get("siralama"), Some(&json!(250000)));

    let details = RecordingProvider::ok_json(json!({ "name": "x" }));
    let server = server_with(details.clone());
    let response = server
        .handle_tool_call(call(
            "get_associate_degree_atlas_details",
            json!({ "yop_kodu": "202110123", "year": 2024.0 }),
        ))
        .await;
    assert!(!response.is_error, "{}", response.text());
    assert_eq!(details.last_query().get("year"), Some(&json!(2024)));
}

#[tokio::test]
async fn health_check_validates_without_arguments() {
    let provider = RecordingProvider::ok_json(json!({ "status": "healthy" }));
    let server = server_with(provider.clone());

    let req = McpRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(3)),
        method: "tools/call".to_string(),
        params: Some(json!({ "name": "health_check" })),
    };
    let resp = handler::handle_request(&server, req).await.unwrap();
    let result = resp.result.unwrap();
    assert_eq!(result["isError"], json!(false));
    assert_eq!(provider.calls().len(), 1);
    assert!(provider.last_query().is_empty());
}

#[tokio::test]
async fn health_check_reports_helper_failure() {
    let provider = RecordingProvider::replying(|_| Err(process_error(2, "No module named yokatlas_py")));
    let server = server_with(provider.clone());

    let response = server.handle_tool_call(call("health_check", json!({}))).await;
    assert!(response.is_error);
    assert_eq!(provider.calls().len(), 1);
}

#[tokio::test]
async fn repeated_calls_are_independent_round_trips() {
    let provider = RecordingProvider::ok_json(json!({ "name": "x" }));
    let server = server_with(provider.clone());
    let arguments = json!({ "yop_kodu": "202110123", "year": 2023 });

    let first = server
        .handle_tool_call(call("get_associate_degree_atlas_details", arguments.clone()))
        .await;
    let second = server
        .handle_tool_call(call("get_associate_degree_atlas_details", arguments))
        .await;
    let other = server.handle_tool_call(call("health_check", json!({}))).await;

    assert_eq!(first, second);
    assert!(!other.is_error);
    let calls = provider.calls();
    assert_eq!(calls.len(), 3);
    assert_eq!(calls[0], calls[1]);
    assert!(calls[2].1.is_empty());
}

#[tokio::test]
async fn protocol_methods() {
    let server = server_with(RecordingProvider::ok_json(json!({})));
    let request = |method: &str| McpRequest {
        jsonrpc: "2.0".to_string(),
        id: Some(json!(1)),
        method: method.to_string(),
        params: None,
    };

    let init = handler::handle_request(&server, request("initialize")).await.unwrap();
    assert_eq!(init.result.unwrap()["protocolVersion"], json!("2024-11-05"));

    let list = handler::handle_request(&server, request("tools/list")).await.unwrap();
    assert_eq!(list.result.unwrap()["tools"].as_array().unwrap().len(), 5);

    let missing = handler::handle_request(&server, request("tools/call")).await.unwrap();
    assert_eq!(missing.error.unwrap().code, -32602);

    let unknown = handler::handle_request(&server, request("resources/list")).await.unwrap();
    assert_eq!(unknown.error.unwrap().code, -32601);

    let notification = McpRequest {
        id: None,
        ..request("notifications/initialized")
    };
    assert!(handler::handle_request(&server, notification).await.is_none());
}
