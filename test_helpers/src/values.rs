//! Builders for merge fixtures.

use treemerge::Value;

/// A chain of single-key mappings `{"k": {"k": ... leaf}}` nested `depth`
/// levels deep. Depth zero returns `leaf` itself.
#[must_use]
pub fn nested(depth: usize, leaf: impl Into<Value>) -> Value {
    (0..depth).fold(leaf.into(), |inner, _| Value::mapping([("k", inner)]))
}

/// A flat mapping `{"key0": 0, "key1": 1, ...}` with `width` entries.
#[must_use]
pub fn wide(width: u32) -> Value {
    Value::mapping((0..width).map(|n| (format!("key{n}"), Value::from(n))))
}

/// A small service configuration used as a merge base.
#[must_use]
pub fn service_defaults() -> Value {
    Value::mapping([
        (
            "server",
            Value::mapping([
                ("host", Value::from("0.0.0.0")),
                ("port", Value::from(80)),
            ]),
        ),
        ("features", Value::sequence(["auth"])),
        ("debug", Value::from(false)),
    ])
}

/// Overrides for [`service_defaults`] touching nested and list values.
#[must_use]
pub fn service_overrides() -> Value {
    Value::mapping([
        ("server", Value::mapping([("port", Value::from(8080))])),
        ("features", Value::sequence(["metrics"])),
        ("debug", Value::Null),
    ])
}

/// `count` mappings sharing a `counter` key and each adding a unique key.
#[must_use]
pub fn layered(count: u32) -> Vec<Value> {
    (0..count)
        .map(|n| {
            Value::mapping([
                (String::from("counter"), Value::from(n)),
                (format!("layer{n}"), Value::from(true)),
            ])
        })
        .collect()
}
