use std::collections::HashSet;

use serde_json::Value;

/// Nest a flat list of JSON objects by their parent-id references.
///
/// Every record whose `parent_key` value equals `root` becomes a top-level
/// node; the records pointing at its `id_key` value become its children
/// under `children_key`, recursively. Id comparison is by *stringified*
/// value, so numeric and string ids mix freely (`0` matches `"0"`).
///
/// Leaves get no children key at all rather than an empty array. Records
/// that are not objects, or that lack `parent_key`, are dropped. Parent
/// cycles are broken by never descending into an id twice along one branch.
pub fn list_to_tree(
    list: &[Value],
    id_key: &str,
    parent_key: &str,
    children_key: &str,
    root: &str,
) -> Vec<Value> {
    let mut on_branch = HashSet::new();
    build(list, id_key, parent_key, children_key, root, &mut on_branch)
}

fn build(
    list: &[Value],
    id_key: &str,
    parent_key: &str,
    children_key: &str,
    parent_id: &str,
    on_branch: &mut HashSet<String>,
) -> Vec<Value> {
    let mut nodes = Vec::new();

    for record in list {
        if field_as_string(record, parent_key).as_deref() != Some(parent_id) {
            continue;
        }

        let mut node = record.clone();
        if let Some(id) = field_as_string(record, id_key) {
            if on_branch.insert(id.clone()) {
                let children = build(list, id_key, parent_key, children_key, &id, on_branch);
                on_branch.remove(&id);
                if !children.is_empty() {
                    if let Value::Object(map) = &mut node {
                        map.insert(children_key.to_string(), Value::Array(children));
                    }
                }
            }
        }
        nodes.push(node);
    }

    nodes
}

/// Stringified view of an object field, aligning `5` with `"5"`.
fn field_as_string(record: &Value, key: &str) -> Option<String> {
    match record.get(key)? {
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
