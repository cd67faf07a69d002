//! List reordering and keyed lookup helpers.

use serde_json::{Map, Value};

use crate::error::UtilsError;

/// Moves the element at `old_index` to `new_index`, in place.
///
/// A `new_index` past the end is clamped to the last position. The same
/// vector is handed back so calls can be chained.
///
/// # Errors
///
/// Returns `UtilsError::InvalidInput` if `old_index` is out of bounds.
///
/// # Examples
///
/// ```
/// use dputils_domain::common::move_array_position;
///
/// let mut list = vec![1, 2, 3, 4];
/// move_array_position(&mut list, 0, 10).unwrap();
/// assert_eq!(list, vec![2, 3, 4, 1]);
/// ```
pub fn move_array_position<T>(
    list: &mut Vec<T>,
    old_index: usize,
    new_index: usize,
) -> Result<&mut Vec<T>, UtilsError> {
    if old_index >= list.len() {
        return Err(UtilsError::invalid_input(format!(
            "index {} is out of bounds for a list of {} elements",
            old_index,
            list.len()
        )));
    }
    let element = list.remove(old_index);
    // the list is one shorter now, so the last slot is `len()`
    let new_index = new_index.min(list.len());
    list.insert(new_index, element);
    Ok(list)
}

/// Dynamic variant of [`move_array_position`] for values of unknown shape.
///
/// # Errors
///
/// Returns `UtilsError::InvalidInput` if `value` is not an array or
/// `old_index` is out of bounds.
pub fn move_value_position(
    value: Value,
    old_index: usize,
    new_index: usize,
) -> Result<Vec<Value>, UtilsError> {
    match value {
        Value::Array(mut items) => {
            move_array_position(&mut items, old_index, new_index)?;
            Ok(items)
        }
        _ => Err(UtilsError::invalid_input("First argument is not an Array")),
    }
}

/// Builds a map from each element's `property_name` value to the element.
///
/// String properties are used verbatim as keys; other scalars use their JSON
/// text (`1`, `true`). Elements that are not objects, or lack the property,
/// are skipped. Later duplicates overwrite earlier ones while the key keeps
/// its original position. A non-array `list` yields an empty map.
///
/// # Errors
///
/// Returns `UtilsError::InvalidInput` if `property_name` is empty.
pub fn create_hash_table(list: &Value, property_name: &str) -> Result<Map<String, Value>, UtilsError> {
    if property_name.is_empty() {
        return Err(UtilsError::invalid_input(
            "Please provide a string type propertyName",
        ));
    }

    let mut table = Map::new();
    let Some(items) = list.as_array() else {
        return Ok(table);
    };

    for item in items {
        let Some(key) = item.get(property_name).map(hash_key) else {
            continue;
        };
        table.insert(key, item.clone());
    }

    Ok(table)
}

fn hash_key(property: &Value) -> String {
    match property {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_move_array_position_forward() {
        let mut list = vec!['a', 'b', 'c', 'd'];
        move_array_position(&mut list, 1, 3).expect("in bounds");
        assert_eq!(list, vec!['a', 'c', 'd', 'b']);
    }

    #[test]
    fn test_move_array_position_backward() {
        let mut list = vec![1, 2, 3, 4];
        move_array_position(&mut list, 3, 0).expect("in bounds");
        assert_eq!(list, vec![4, 1, 2, 3]);
    }

    #[test]
    fn test_move_array_position_clamps_new_index() {
        let mut list = vec![1, 2, 3, 4];
        let moved = move_array_position(&mut list, 0, 10).expect("in bounds");
        assert_eq!(*moved, vec![2, 3, 4, 1]);
    }

    #[test]
    fn test_move_array_position_new_index_equal_to_len() {
        let mut list = vec![1, 2, 3];
        move_array_position(&mut list, 0, 3).expect("in bounds");
        assert_eq!(list, vec![2, 3, 1]);
    }

    #[test]
    fn test_move_array_position_out_of_bounds() {
        let mut list = vec![1, 2];
        assert!(move_array_position(&mut list, 2, 0).is_err());
        assert_eq!(list, vec![1, 2]);

        let mut empty: Vec<u8> = Vec::new();
        assert!(move_array_position(&mut empty, 0, 0).is_err());
    }

    #[test]
    fn test_move_value_position() {
        let moved = move_value_position(json!([1, 2, 3, 4]), 0, 10).expect("array");
        assert_eq!(moved, vec![json!(2), json!(3), json!(4), json!(1)]);
    }

    #[test]
    fn test_move_value_position_rejects_non_array() {
        let err = move_value_position(json!({"0": 1}), 0, 1).expect_err("not an array");
        assert_eq!(err.to_string(), "Invalid input: First argument is not an Array");
    }

    #[test]
    fn test_create_hash_table() {
        let list = json!([{"id": "a"}, {"id": "b"}]);
        let table = create_hash_table(&list, "id").expect("valid property");
        assert_eq!(
            Value::Object(table),
            json!({"a": {"id": "a"}, "b": {"id": "b"}})
        );
    }

    #[test]
    fn test_create_hash_table_last_duplicate_wins() {
        let list = json!([
            {"id": "a", "v": 1},
            {"id": "b", "v": 2},
            {"id": "a", "v": 3}
        ]);
        let table = create_hash_table(&list, "id").expect("valid property");
        assert_eq!(table.len(), 2);
        assert_eq!(table["a"], json!({"id": "a", "v": 3}));
        let keys: Vec<&String> = table.keys().collect();
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_create_hash_table_non_string_keys_and_missing_properties() {
        let list = json!([{"id": 1}, {"id": true}, {"other": 0}, "scalar"]);
        let table = create_hash_table(&list, "id").expect("valid property");
        assert_eq!(table.len(), 2);
        assert!(table.contains_key("1"));
        assert!(table.contains_key("true"));
    }

    #[test]
    fn test_create_hash_table_empty_property_name() {
        assert!(matches!(
            create_hash_table(&json!([{"id": "a"}]), ""),
            Err(UtilsError::InvalidInput(_))
        ));
    }

    #[test]
    fn test_create_hash_table_non_array_is_empty() {
        let table = create_hash_table(&json!({"id": "a"}), "id").expect("valid property");
        assert!(table.is_empty());
    }
}
