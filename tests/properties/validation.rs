//! Property tests for document validation.

use proptest::prelude::*;
use serde_json::{json, Map, Value};

use mcpcheck::{validate_str, Config};

fn env_value() -> impl Strategy<Value = Value> {
    prop_oneof![
        "[A-Za-z0-9_:/.\\- ]{0,24}".prop_map(Value::String),
        Just(Value::String("YOUR_TOKEN_HERE".to_string())),
        Just(Value::String("https://example.com".to_string())),
        any::<i64>().prop_map(|n| json!(n)),
        any::<bool>().prop_map(Value::Bool),
        Just(Value::Null),
    ]
}

fn env_map() -> impl Strategy<Value = Value> {
    let keys = prop::sample::select(vec![
        "API_TOKEN",
        "USERNAME",
        "PASSWORD",
        "PASSCODE",
        "BASE_URL",
        "LOG_FILE",
        "LOG_LEVEL",
        "ELICITATION_ENABLED",
        "ELICITATION_BULK_THRESHOLD",
    ]);
    prop::collection::vec((keys, env_value()), 0..8).prop_map(|pairs| {
        let map: Map<String, Value> = pairs.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        Value::Object(map)
    })
}

fn instance() -> impl Strategy<Value = Value> {
    (
        prop::option::of(prop_oneof![
            prop::sample::select(vec!["npx", "node", "docker", "python"])
                .prop_map(|s| json!(s)),
            any::<u8>().prop_map(|n| json!(n)),
        ]),
        prop::option::of(prop::collection::vec("[a-z\\-]{0,6}", 0..3)),
        prop::option::of(env_map()),
    )
        .prop_map(|(command, args, env)| {
            let mut obj = Map::new();
            if let Some(command) = command {
                obj.insert("command".to_string(), command);
            }
            if let Some(args) = args {
                obj.insert("args".to_string(), json!(args));
            }
            if let Some(env) = env {
                obj.insert("env".to_string(), env);
            }
            Value::Object(obj)
        })
}

fn document() -> impl Strategy<Value = String> {
    prop::collection::vec(("[a-c]{1,2}", instance()), 0..5).prop_map(|instances| {
        let body: Vec<String> = instances
            .into_iter()
            .map(|(name, value)| format!("{}: {}", json!(name), value))
            .collect();
        format!("{{\"mcpServers\": {{{}}}}}", body.join(", "))
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: validation never panics on arbitrary text.
    #[test]
    fn property_validate_never_panics(text in "(?s).{0,256}") {
        let _ = validate_str(&text, &Config::default());
    }

    /// PROPERTY: the same document always yields the same result.
    #[test]
    fn property_validation_is_deterministic(doc in document()) {
        let config = Config::default();
        prop_assert_eq!(validate_str(&doc, &config), validate_str(&doc, &config));
    }

    /// PROPERTY: every message of a well-formed document names its instance.
    #[test]
    fn property_instance_messages_are_prefixed(doc in document()) {
        let result = validate_str(&doc, &Config::default());
        for message in result.errors.iter().chain(result.warnings.iter()) {
            let prefix = message.split(':').next().unwrap_or_default();
            prop_assert!(
                ["a", "b", "c", "aa", "ab", "ac", "ba", "bb", "bc", "ca", "cb", "cc"]
                    .contains(&prefix),
                "unexpected message: {}",
                message
            );
        }
    }

    /// PROPERTY: without an authentication field, an instance always errors.
    #[test]
    fn property_missing_auth_is_an_error(name in "[a-z]{1,8}") {
        let doc = format!(
            "{{\"mcpServers\": {{{}: {{\"command\": \"npx\", \"args\": []}}}}}}",
            json!(name)
        );
        let result = validate_str(&doc, &Config::default());
        prop_assert!(!result.is_success());
        let expected = format!("{}: no authentication configured", name);
        prop_assert!(result.errors.iter().any(|e| e.starts_with(&expected)));
    }
}
