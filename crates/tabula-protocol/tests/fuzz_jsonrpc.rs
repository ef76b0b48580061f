//! Property-based tests for JSON-RPC deserialization.
//!
//! Every stdin line goes through these parsers, so they must never panic
//! and must tell requests and notifications apart by the `id` field.

use proptest::prelude::*;
use tabula_protocol::mcp::ToolsCallParams;
use tabula_protocol::{JsonRpcNotification, JsonRpcRequest};

proptest! {
    /// Arbitrary lines never cause a panic.
    #[test]
    fn no_panic_on_arbitrary_line(input in "\\PC{0,256}") {
        let _ = serde_json::from_str::<JsonRpcRequest>(&input);
        let _ = serde_json::from_str::<JsonRpcNotification>(&input);
        let _ = serde_json::from_str::<ToolsCallParams>(&input);
    }

    /// Well-formed requests round-trip through serde.
    #[test]
    fn valid_request_roundtrips(method in "[a-z/]{1,32}", id in any::<i64>()) {
        let json = serde_json::json!({"jsonrpc": "2.0", "id": id, "method": method});
        let req: JsonRpcRequest = serde_json::from_value(json).expect("test: valid request");
        let text = serde_json::to_string(&req).expect("test: serializable");
        let back: Result<JsonRpcRequest, _> = serde_json::from_str(&text);
        prop_assert!(back.is_ok());
    }

    /// Messages without an id are notifications, not requests.
    #[test]
    fn missing_id_is_notification(method in "[a-z/]{2,32}") {
        let line = format!(r#"{{"jsonrpc":"2.0","method":"{method}"}}"#);
        prop_assert!(serde_json::from_str::<JsonRpcRequest>(&line).is_err());
        prop_assert!(serde_json::from_str::<JsonRpcNotification>(&line).is_ok());
    }

    /// tools/call params keep the tool name verbatim.
    #[test]
    fn call_params_keep_name(name in "[a-z_]{1,32}") {
        let json = serde_json::json!({"name": name.clone(), "arguments": {"k": 1}});
        let p: ToolsCallParams = serde_json::from_value(json).expect("test: valid params");
        prop_assert_eq!(p.name, name);
    }
}
