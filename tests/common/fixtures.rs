//! Static log documents used across harnesses.

/// The canonical "step then click" script.
pub const DOC_STEP_CLICK: &str = r#"{
  "timestamp": "2024-01-15T10:00:00.123Z",
  "entries": [
    { "kind": "context", "message": "Step 1", "children": [
      { "kind": "info", "message": "clicked button",
        "caller": { "member_name": "click", "file_path": "steps.rs", "line_number": 12 } }
    ] }
  ]
}"#;

/// Two steps, annotations at several levels, and a blank scope header.
pub const DOC_CHECKOUT: &str = r#"{
  "timestamp": "2024-01-15T10:00:00Z",
  "entries": [
    { "kind": "info", "message": "session started" },
    { "kind": "context", "message": "Step 1: open cart", "children": [
      { "kind": "info", "message": "3 items" },
      { "kind": "warning", "message": "price changed" }
    ] },
    { "kind": "context", "message": "Step 2: pay", "children": [
      { "kind": "context", "message": "card form", "children": [
        { "kind": "error", "message": "card declined",
          "timestamp": "2024-01-15T10:00:05.250Z",
          "caller": { "member_name": "submit", "file_path": "pay.rs", "line_number": 88 } }
      ] },
      { "kind": "context", "message": "   ", "children": [
        { "kind": "info", "message": "retry scheduled" }
      ] }
    ] }
  ]
}"#;
