//! Loading and parsing of `mcpServers` documents

use std::fmt;
use std::fs;
use std::path::Path;

use serde::de::{self, Deserialize, Deserializer, IgnoredAny, MapAccess, SeqAccess, Visitor};
use serde_json::{Map, Value};

use crate::error::{McpCheckError, McpCheckResult};

/// Root field holding the instance map
pub const SERVERS_FIELD: &str = "mcpServers";

/// Parsed document: instances in source order, repeated keys included.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub instances: Vec<(String, Value)>,
}

/// Read a file; any read failure is reported as a missing file.
pub fn read(path: &Path) -> McpCheckResult<Vec<u8>> {
    fs::read(path).map_err(|_| McpCheckError::FileNotFound {
        path: path.to_path_buf(),
    })
}

/// Parse raw bytes into a [`Document`].
///
/// Fails with exactly one of `InvalidJson`, `MissingServers` or
/// `ServersNotObject`. A repeated root `mcpServers` key resolves to its last
/// occurrence.
pub fn parse(bytes: &[u8]) -> McpCheckResult<Document> {
    let root: Root = serde_json::from_slice(bytes).map_err(|e| McpCheckError::InvalidJson {
        message: e.to_string(),
    })?;

    match root.servers {
        Servers::Missing | Servers::Null => Err(McpCheckError::MissingServers),
        Servers::NotObject => Err(McpCheckError::ServersNotObject),
        Servers::Instances(instances) => Ok(Document { instances }),
    }
}

/// Shape of the root `mcpServers` value
enum Servers {
    Missing,
    Null,
    NotObject,
    /// Map entries collected as a list, repeated names included
    Instances(Vec<(String, Value)>),
}

struct Root {
    servers: Servers,
}

impl<'de> Deserialize<'de> for Root {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct RootVisitor;

        impl<'de> Visitor<'de> for RootVisitor {
            type Value = Root;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a JSON document")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut servers = Servers::Missing;
                while let Some(key) = map.next_key::<String>()? {
                    if key == SERVERS_FIELD {
                        servers = map.next_value::<Servers>()?;
                    } else {
                        map.next_value::<IgnoredAny>()?;
                    }
                }
                Ok(Root { servers })
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Root::scalar())
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Root::scalar())
            }

            fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
                Ok(Root::scalar())
            }

            fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Self::Value, E> {
                Ok(Root::scalar())
            }

            fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Self::Value, E> {
                Ok(Root::scalar())
            }

            fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
                Ok(Root::scalar())
            }

            fn visit_str<E: de::Error>(self, _v: &str) -> Result<Self::Value, E> {
                Ok(Root::scalar())
            }
        }

        deserializer.deserialize_any(RootVisitor)
    }
}

impl Root {
    /// Non-object roots have no `mcpServers` field.
    fn scalar() -> Self {
        Root {
            servers: Servers::Missing,
        }
    }
}

impl<'de> Deserialize<'de> for Servers {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ServersVisitor;

        impl<'de> Visitor<'de> for ServersVisitor {
            type Value = Servers;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("an object of named instances")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((name, value)) = map.next_entry::<String, Value>()? {
                    entries.push((name, value));
                }
                Ok(Servers::Instances(entries))
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(Servers::Null)
            }

            fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
            where
                A: SeqAccess<'de>,
            {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(Servers::NotObject)
            }

            fn visit_bool<E: de::Error>(self, _v: bool) -> Result<Self::Value, E> {
                Ok(Servers::NotObject)
            }

            fn visit_i64<E: de::Error>(self, _v: i64) -> Result<Self::Value, E> {
                Ok(Servers::NotObject)
            }

            fn visit_u64<E: de::Error>(self, _v: u64) -> Result<Self::Value, E> {
                Ok(Servers::NotObject)
            }

            fn visit_f64<E: de::Error>(self, _v: f64) -> Result<Self::Value, E> {
                Ok(Servers::NotObject)
            }

            fn visit_str<E: de::Error>(self, _v: &str) -> Result<Self::Value, E> {
                Ok(Servers::NotObject)
            }
        }

        deserializer.deserialize_any(ServersVisitor)
    }
}

/// Read-only view over one instance's JSON value.
///
/// Non-object instances behave as if every field were absent.
pub struct InstanceView<'a> {
    fields: Option<&'a Map<String, Value>>,
    env: Option<&'a Map<String, Value>>,
}

impl<'a> InstanceView<'a> {
    pub fn new(value: &'a Value) -> Self {
        let fields = value.as_object();
        let env = fields
            .and_then(|f| f.get("env"))
            .and_then(Value::as_object);
        Self { fields, env }
    }

    pub fn field(&self, key: &str) -> Option<&'a Value> {
        self.fields.and_then(|f| f.get(key))
    }

    /// A non-empty string `env` value. Other JSON types count as absent.
    pub fn env_str(&self, key: &str) -> Option<&'a str> {
        self.env
            .and_then(|env| env.get(key))
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }
}
