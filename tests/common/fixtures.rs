//! Test fixtures - reusable configuration documents.
#![allow(dead_code)]

/// Two fully configured instances; produces no errors and no warnings.
pub const CLEAN_CONFIG: &str = r#"{
  "mcpServers": {
    "prod": {
      "command": "npx",
      "args": ["-y", "server"],
      "env": {
        "API_TOKEN": "tok-prod-123",
        "BASE_URL": "https://prod.example.com",
        "LOG_FILE": "/var/log/mcp/prod.log",
        "LOG_LEVEL": "INFO"
      }
    },
    "staging": {
      "command": "node",
      "args": ["server.js"],
      "env": {
        "USERNAME": "svc",
        "PASSWORD": "secret",
        "LOG_FILE": "/var/log/mcp/staging.log",
        "LOG_LEVEL": "WARN"
      }
    }
  }
}"#;

/// Valid but missing log settings; warnings only.
pub const WARNINGS_ONLY_CONFIG: &str = r#"{
  "mcpServers": {
    "dev": {
      "command": "npx",
      "args": [],
      "env": { "PASSCODE": "1234" }
    }
  }
}"#;

/// Shared log file plus a missing `args` field.
pub const CONFLICT_CONFIG: &str = r#"{
  "mcpServers": {
    "a": {
      "command": "npx",
      "args": [],
      "env": { "API_TOKEN": "t1", "LOG_FILE": "/tmp/shared.log", "LOG_LEVEL": "INFO" }
    },
    "b": {
      "command": "npx",
      "env": { "API_TOKEN": "t2", "LOG_FILE": "/tmp/shared.log", "LOG_LEVEL": "INFO" }
    }
  }
}"#;

pub const NO_SERVERS_CONFIG: &str = r#"{ "servers": {} }"#;

pub const MALFORMED_JSON: &str = r#"{ "mcpServers": { "a": "#;
