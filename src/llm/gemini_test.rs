use super::*;

fn make_response(parts: serde_json::Value) -> String {
    serde_json::json!({
        "candidates": [{
            "content": { "role": "model", "parts": parts },
            "finishReason": "STOP",
            "index": 0
        }],
        "usageMetadata": {
            "promptTokenCount": 120,
            "candidatesTokenCount": 480,
            "totalTokenCount": 600
        },
        "modelVersion": "gemini-2.5-flash"
    })
    .to_string()
}

fn request(schema: Option<serde_json::Value>) -> GenerateRequest {
    GenerateRequest {
        prompt: "Gere produtos".into(),
        system: None,
        max_tokens: 2048,
        response_schema: schema,
    }
}

// =============================================================================
// endpoint_url
// =============================================================================

#[test]
fn endpoint_url_includes_model_and_method() {
    assert_eq!(
        endpoint_url("https://generativelanguage.googleapis.com/v1beta", "gemini-2.5-flash"),
        "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.5-flash:generateContent"
    );
}

// =============================================================================
// build_request
// =============================================================================

#[test]
fn build_request_plain_text() {
    let body = serde_json::to_value(build_request(&request(None))).unwrap();
    assert_eq!(body["contents"][0]["role"], "user");
    assert_eq!(body["contents"][0]["parts"][0]["text"], "Gere produtos");
    assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
    assert!(body["generationConfig"].get("responseMimeType").is_none());
    assert!(body["generationConfig"].get("responseSchema").is_none());
    assert!(body.get("systemInstruction").is_none());
}

#[test]
fn build_request_with_schema_enables_json_mode() {
    let schema = serde_json::json!({ "type": "ARRAY", "items": { "type": "OBJECT" } });
    let body = serde_json::to_value(build_request(&request(Some(schema.clone())))).unwrap();
    assert_eq!(body["generationConfig"]["responseMimeType"], "application/json");
    assert_eq!(body["generationConfig"]["responseSchema"], schema);
}

#[test]
fn build_request_with_system_instruction() {
    let mut req = request(None);
    req.system = Some("Você é um catálogo.".into());
    let body = serde_json::to_value(build_request(&req)).unwrap();
    assert_eq!(body["systemInstruction"]["parts"][0]["text"], "Você é um catálogo.");
    assert!(body["systemInstruction"].get("role").is_none());
}

// =============================================================================
// parse_response
// =============================================================================

#[test]
fn parse_text_response() {
    let json = make_response(serde_json::json!([{ "text": "[]" }]));
    let resp = parse_response(&json, "gemini-2.5-flash").unwrap();
    assert_eq!(resp.text, "[]");
    assert_eq!(resp.model, "gemini-2.5-flash");
    assert_eq!(resp.finish_reason.as_deref(), Some("STOP"));
    assert_eq!(resp.input_tokens, 120);
    assert_eq!(resp.output_tokens, 480);
}

#[test]
fn parse_concatenates_text_parts() {
    let json = make_response(serde_json::json!([{ "text": "[{\"id\":" }, { "text": "\"a\"}]" }]));
    let resp = parse_response(&json, "m").unwrap();
    assert_eq!(resp.text, "[{\"id\":\"a\"}]");
}

#[test]
fn parse_skips_thought_parts() {
    let json = make_response(serde_json::json!([
        { "text": "Pensando nos produtos...", "thought": true },
        { "text": "[]" }
    ]));
    let resp = parse_response(&json, "m").unwrap();
    assert_eq!(resp.text, "[]");
}

#[test]
fn parse_missing_model_version_uses_requested_model() {
    let json = serde_json::json!({
        "candidates": [{ "content": { "parts": [{ "text": "ok" }] } }]
    })
    .to_string();
    let resp = parse_response(&json, "gemini-2.5-flash").unwrap();
    assert_eq!(resp.model, "gemini-2.5-flash");
    assert_eq!(resp.input_tokens, 0);
    assert!(resp.finish_reason.is_none());
}

#[test]
fn parse_blocked_prompt_reports_reason() {
    let json = serde_json::json!({
        "candidates": [],
        "promptFeedback": { "blockReason": "SAFETY" }
    })
    .to_string();
    let err = parse_response(&json, "m").unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse(ref r) if r == "SAFETY"));
}

#[test]
fn parse_empty_candidate_reports_finish_reason() {
    let json = serde_json::json!({
        "candidates": [{ "content": { "parts": [] }, "finishReason": "MAX_TOKENS" }]
    })
    .to_string();
    let err = parse_response(&json, "m").unwrap_err();
    assert!(matches!(err, LlmError::EmptyResponse(ref r) if r == "MAX_TOKENS"));
}

#[test]
fn parse_invalid_json() {
    let err = parse_response("not json", "m").unwrap_err();
    assert!(matches!(err, LlmError::ApiParse(_)));
}
