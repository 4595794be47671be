//! Args caps - depth and size limits for example payloads.
//!
//! Examples end up inside an agent's context window, so their payloads are
//! bounded: nesting depth at most [`MAX_ARGS_DEPTH`] and a combined count of
//! mapping keys plus sequence elements at most [`MAX_ARGS_SIZE`].

use serde::Serialize;
use serde_json::{Map, Value};

/// Maximum nesting depth of mappings/sequences. The top-level mapping is depth 1.
pub const MAX_ARGS_DEPTH: usize = 5;
/// Maximum total of mapping keys plus sequence elements across all levels.
pub const MAX_ARGS_SIZE: usize = 50;

/// Measurements of an args payload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ArgsStats {
    /// Deepest container level reached.
    pub depth: usize,
    /// Keys of every mapping plus elements of every sequence.
    pub size: usize,
}

impl ArgsStats {
    pub fn within_caps(&self) -> bool {
        self.depth <= MAX_ARGS_DEPTH && self.size <= MAX_ARGS_SIZE
    }

    fn absorb(&mut self, child: ArgsStats) {
        self.size += child.size;
        self.depth = self.depth.max(child.depth);
    }
}

/// Measure a top-level args mapping and check it against the caps.
pub fn validate_args(args: &Map<String, Value>) -> (ArgsStats, bool) {
    let stats = measure_map(args, 1);
    (stats, stats.within_caps())
}

/// Measure an arbitrary value. A container at the top counts as depth 1;
/// a bare scalar measures zero.
pub fn measure_value(value: &Value) -> ArgsStats {
    measure_at(value, 1)
}

fn measure_at(value: &Value, depth: usize) -> ArgsStats {
    match value {
        Value::Object(map) => measure_map(map, depth),
        Value::Array(items) => {
            let mut stats = ArgsStats {
                depth,
                size: items.len(),
            };
            for item in items {
                stats.absorb(measure_at(item, depth + 1));
            }
            stats
        }
        // scalars add neither size nor depth
        _ => ArgsStats {
            depth: depth - 1,
            size: 0,
        },
    }
}

fn measure_map(map: &Map<String, Value>, depth: usize) -> ArgsStats {
    let mut stats = ArgsStats {
        depth,
        size: map.len(),
    };
    for value in map.values() {
        stats.absorb(measure_at(value, depth + 1));
    }
    stats
}
