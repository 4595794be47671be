//! Registry contract tests - error kinds, caps, isolation, limits, concurrency.

use pretty_assertions::assert_eq;
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use tooldocs::docs::{args_from, MAX_ARGS_DEPTH, MAX_ARGS_SIZE, MAX_SUMMARY_LEN};
use tooldocs::tools::FnResolver;
use tooldocs::types::RegistryConfig;
use tooldocs::{DetailLevel, DocEntry, DocRegistry, Error, Tool, ToolExample, ToolIndex};

const LEVELS: [DetailLevel; 3] = [DetailLevel::Summary, DetailLevel::Schema, DetailLevel::Full];

/// Helper: registry backed by an index holding `tools`.
fn registry_with(tools: Vec<Tool>, max_examples: usize) -> DocRegistry {
    let index = Arc::new(ToolIndex::new());
    for tool in tools {
        index.register_tool(tool).unwrap();
    }
    DocRegistry::new(&RegistryConfig { max_examples }).with_index(index)
}

fn summary_entry(summary: &str) -> DocEntry {
    DocEntry {
        summary: summary.to_string(),
        ..DocEntry::default()
    }
}

fn nested_args(levels: usize) -> Map<String, Value> {
    let mut result = json!({"value": "leaf"});
    for _ in 1..levels {
        result = json!({ "nested": result });
    }
    result.as_object().cloned().unwrap()
}

fn flat_args(keys: usize) -> Map<String, Value> {
    (0..keys).map(|i| (format!("k{}", i), json!(i))).collect()
}

fn titled(count: usize) -> Vec<ToolExample> {
    (0..count)
        .map(|i| ToolExample::new(format!("Example {}", i)))
        .collect()
}

// =============================================================================
// Error kinds
// =============================================================================

#[tokio::test]
async fn test_absent_id_is_not_found_at_every_level() {
    let registry = registry_with(vec![], 0);
    for level in LEVELS {
        let err = registry.describe_tool("ghost:tool", level).await.unwrap_err();
        assert!(matches!(err, Error::NotFound(ref id) if id == "ghost:tool"));
        assert_eq!(err.code(), "NOT_FOUND");
    }
}

#[tokio::test]
async fn test_doc_only_record_needs_tool_for_detail() {
    let registry = registry_with(vec![], 0);
    registry
        .register_doc("jira:create", &summary_entry("Create a ticket"))
        .unwrap();

    let doc = registry
        .describe_tool("jira:create", DetailLevel::Summary)
        .await
        .unwrap();
    assert_eq!(doc.summary, "Create a ticket");

    for level in [DetailLevel::Schema, DetailLevel::Full] {
        let err = registry.describe_tool("jira:create", level).await.unwrap_err();
        assert!(matches!(err, Error::NoTool(_)));
    }
}

#[tokio::test]
async fn test_tool_without_docs_uses_description() {
    let registry = registry_with(
        vec![Tool::new("api", "search").with_description("Search API")],
        0,
    );
    let doc = registry
        .describe_tool("api:search", DetailLevel::Summary)
        .await
        .unwrap();
    assert_eq!(doc.summary, "Search API");
}

#[tokio::test]
async fn test_invalid_detail_level() {
    let err = "verbose".parse::<DetailLevel>().unwrap_err();
    assert!(matches!(err, Error::InvalidDetail(ref level) if level == "verbose"));
    assert_eq!(err.code(), "INVALID_ARGUMENT");
}

#[tokio::test]
async fn test_resolver_failure_never_becomes_not_found() {
    let resolver = FnResolver::new(|_: &str| -> tooldocs::Result<Option<Tool>> {
        Err(Error::resolver("registry unreachable"))
    });
    let registry =
        DocRegistry::new(&RegistryConfig::default()).with_resolver(Arc::new(resolver));

    for level in LEVELS {
        let err = registry.describe_tool("api:search", level).await.unwrap_err();
        assert!(matches!(err, Error::Resolver(_)), "{level}: {err}");
    }
    let err = registry.list_examples("api:search", 0).await.unwrap_err();
    assert!(matches!(err, Error::Resolver(_)));
}

// =============================================================================
// Idempotence and truncation
// =============================================================================

proptest! {
    #[test]
    fn prop_register_then_summary_returns_truncated(summary in "\\PC{1,260}") {
        let registry = registry_with(vec![], 0);
        registry.register_doc("ns:tool", &summary_entry(&summary)).unwrap();

        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        let doc = rt
            .block_on(registry.describe_tool("ns:tool", DetailLevel::Summary))
            .unwrap();
        let expected: String = summary.chars().take(MAX_SUMMARY_LEN).collect();
        prop_assert_eq!(doc.summary, expected);
    }
}

#[tokio::test]
async fn test_truncation_respects_char_boundaries() {
    let registry = registry_with(vec![], 0);
    let summary = "é".repeat(MAX_SUMMARY_LEN + 10);
    registry
        .register_doc("ns:tool", &summary_entry(&summary))
        .unwrap();

    let doc = registry
        .describe_tool("ns:tool", DetailLevel::Summary)
        .await
        .unwrap();
    assert_eq!(doc.summary.chars().count(), MAX_SUMMARY_LEN);
}

// =============================================================================
// Isolation
// =============================================================================

#[tokio::test]
async fn test_caller_mutation_never_reaches_store() {
    let registry = registry_with(vec![], 0);
    let mut examples = vec![ToolExample::new("Ex").with_args(
        json!({"filters": {"tags": ["a", "b"]}, "limit": 10})
            .as_object()
            .cloned()
            .unwrap(),
    )];
    registry.register_examples("ns:tool", &examples).unwrap();

    examples[0].args["filters"]["tags"][0] = json!("mutated");

    let mut returned = registry.list_examples("ns:tool", 0).await.unwrap();
    assert_eq!(returned[0].args["filters"]["tags"][0], json!("a"));

    returned[0].args["limit"] = json!(999);
    returned[0].title = "Changed".to_string();

    let again = registry.list_examples("ns:tool", 0).await.unwrap();
    assert_eq!(again[0].args["limit"], json!(10));
    assert_eq!(again[0].title, "Ex");
}

#[tokio::test]
async fn test_full_doc_snapshot_is_owned() {
    let registry = registry_with(vec![Tool::new("ns", "tool")], 0);
    registry
        .register_doc(
            "ns:tool",
            &DocEntry {
                summary: "s".to_string(),
                examples: vec![ToolExample::new("Ex").with_args(flat_args(2))],
                ..DocEntry::default()
            },
        )
        .unwrap();

    let mut doc = registry
        .describe_tool("ns:tool", DetailLevel::Full)
        .await
        .unwrap();
    doc.examples[0].args.clear();

    let doc = registry
        .describe_tool("ns:tool", DetailLevel::Full)
        .await
        .unwrap();
    assert_eq!(doc.examples[0].args.len(), 2);
}

#[tokio::test]
async fn test_typed_args_register_through_args_from() {
    #[derive(serde::Serialize)]
    struct CreateTicket {
        project: &'static str,
        labels: Vec<&'static str>,
    }

    let args = args_from(&CreateTicket {
        project: "OPS",
        labels: vec!["urgent"],
    })
    .unwrap();
    let registry = registry_with(vec![], 0);
    registry
        .register_examples("jira:create", &[ToolExample::new("Typed").with_args(args)])
        .unwrap();

    let examples = registry.list_examples("jira:create", 0).await.unwrap();
    assert_eq!(
        Value::Object(examples[0].args.clone()),
        json!({"project": "OPS", "labels": ["urgent"]})
    );
}

// =============================================================================
// Caps
// =============================================================================

#[test]
fn test_caps_boundaries_on_both_register_paths() {
    let registry = registry_with(vec![], 0);

    let ok_depth = vec![ToolExample::new("Depth").with_args(nested_args(MAX_ARGS_DEPTH))];
    let ok_size = vec![ToolExample::new("Size").with_args(flat_args(MAX_ARGS_SIZE))];
    let deep = vec![ToolExample::new("Deep").with_args(nested_args(MAX_ARGS_DEPTH + 1))];
    let wide = vec![ToolExample::new("Wide").with_args(flat_args(MAX_ARGS_SIZE + 1))];

    for examples in [&ok_depth, &ok_size] {
        registry.register_examples("ns:tool", examples).unwrap();
        registry
            .register_doc(
                "ns:tool",
                &DocEntry {
                    examples: examples.clone(),
                    ..DocEntry::default()
                },
            )
            .unwrap();
    }

    for examples in [&deep, &wide] {
        let err = registry.register_examples("ns:other", examples).unwrap_err();
        assert!(matches!(err, Error::ArgsTooLarge { .. }));
        let err = registry
            .register_doc(
                "ns:other",
                &DocEntry {
                    examples: examples.clone(),
                    ..DocEntry::default()
                },
            )
            .unwrap_err();
        assert!(matches!(err, Error::ArgsTooLarge { .. }));
        assert_eq!(err.code(), "RESOURCE_EXHAUSTED");
    }
    assert!(!registry.has_doc("ns:other"));
}

#[test]
fn test_args_too_large_reports_measurements() {
    let registry = registry_with(vec![], 0);
    let err = registry
        .register_examples(
            "ns:tool",
            &[
                ToolExample::new("Fine"),
                ToolExample::new("Wide").with_args(flat_args(MAX_ARGS_SIZE + 3)),
            ],
        )
        .unwrap_err();

    assert_eq!(
        err.to_string(),
        format!(
            "args exceeds caps: example 1 (Wide) has depth=1 (max {}), size={} (max {})",
            MAX_ARGS_DEPTH,
            MAX_ARGS_SIZE + 3,
            MAX_ARGS_SIZE
        )
    );
}

// =============================================================================
// Example limits
// =============================================================================

#[tokio::test]
async fn test_example_limit_composition() {
    // (configured, requested, expected) over 5 stored examples
    let cases = [(0, 0, 5), (0, 3, 3), (2, 0, 2), (2, 4, 2), (4, 2, 2), (9, 9, 5)];

    for (configured, requested, expected) in cases {
        let registry = registry_with(vec![Tool::new("ns", "tool")], configured);
        registry.register_examples("ns:tool", &titled(5)).unwrap();

        let listed = registry.list_examples("ns:tool", requested).await.unwrap();
        assert_eq!(listed.len(), expected, "list D={configured} R={requested}");

        let doc = registry
            .describe_tool_with_limit("ns:tool", DetailLevel::Full, requested)
            .await
            .unwrap();
        assert_eq!(doc.examples.len(), expected, "full D={configured} R={requested}");
    }
}

#[tokio::test]
async fn test_limit_keeps_registration_order() {
    let registry = registry_with(vec![], 0);
    registry.register_examples("ns:tool", &titled(4)).unwrap();

    let titles: Vec<String> = registry
        .list_examples("ns:tool", 2)
        .await
        .unwrap()
        .into_iter()
        .map(|e| e.title)
        .collect();
    assert_eq!(titles, vec!["Example 0", "Example 1"]);
}

// =============================================================================
// Concurrency
// =============================================================================

/// Round encoded in a `w{writer}-{round}` summary; the seed record is round 0.
fn committed_round(summary: &str) -> usize {
    summary
        .rsplit_once('-')
        .map(|(_, round)| round.parse().unwrap())
        .unwrap_or(0)
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_readers_and_writers() {
    let registry = Arc::new(registry_with(
        vec![Tool::new("ns", "tool").with_description("Shared tool")],
        0,
    ));
    registry.register_doc("ns:tool", &summary_entry("v0")).unwrap();

    let mut handles = Vec::new();
    for writer in 0..4 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            for round in 0..50 {
                let entry = DocEntry {
                    summary: format!("w{}-{}", writer, round),
                    examples: titled(round % 5),
                    ..DocEntry::default()
                };
                registry.register_doc("ns:tool", &entry).unwrap();
            }
        }));
    }
    for _ in 0..4 {
        let registry = Arc::clone(&registry);
        handles.push(tokio::spawn(async move {
            for _ in 0..50 {
                let doc = registry
                    .describe_tool("ns:tool", DetailLevel::Full)
                    .await
                    .unwrap();
                // every snapshot comes from exactly one committed record
                assert_eq!(doc.examples.len(), committed_round(&doc.summary) % 5);
                registry.list_examples("ns:tool", 0).await.unwrap();
            }
        }));
    }
    for handle in handles {
        handle.await.unwrap();
    }

    let last = registry
        .describe_tool("ns:tool", DetailLevel::Summary)
        .await
        .unwrap();
    assert!(last.summary.ends_with("-49"));
}

#[tokio::test]
async fn test_registration_visible_to_later_reads() {
    let registry = Arc::new(registry_with(vec![], 0));
    let writer = Arc::clone(&registry);
    tokio::spawn(async move {
        writer
            .register_doc("ns:late", &summary_entry("Registered later"))
            .unwrap();
    })
    .await
    .unwrap();

    let doc = registry
        .describe_tool("ns:late", DetailLevel::Summary)
        .await
        .unwrap();
    assert_eq!(doc.summary, "Registered later");
}
