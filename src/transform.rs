//! Record transforms
//!
//! Pure helpers applied to API records before they are handed out.

use crate::error::{Error, Result};
use crate::types::{JsonObject, JsonValue};

/// Length in hex characters of a policy id
pub const POLICY_ID_HEX_LEN: usize = 56;

/// Flatten nested mappings of a record into its top level
///
/// Every field whose value is an object has that object's entries spliced
/// into the output in place of the field itself. Later keys overwrite
/// earlier ones, so nested keys replace same-named top-level keys seen
/// before them. Other fields are copied through unchanged.
pub fn process_onchain_metadata(asset: &JsonObject) -> JsonObject {
    let mut flat = JsonObject::new();

    for (key, value) in asset {
        match value {
            JsonValue::Object(metadata) => {
                for (meta_key, meta_value) in metadata {
                    flat.insert(meta_key.clone(), meta_value.clone());
                }
            }
            _ => {
                flat.insert(key.clone(), value.clone());
            }
        }
    }

    flat
}

/// Flatten a record given as a JSON value; non-objects pass through
pub fn flatten_record(record: &JsonValue) -> JsonValue {
    match record {
        JsonValue::Object(obj) => JsonValue::Object(process_onchain_metadata(obj)),
        other => other.clone(),
    }
}

/// Decode a hex string into UTF-8 text
pub fn convert_hex_to_ascii(hex_string: &str) -> Result<String> {
    let bytes = hex::decode(hex_string)
        .map_err(|e| Error::invalid_argument(format!("'{hex_string}' is not valid hex: {e}")))?;

    String::from_utf8(bytes)
        .map_err(|e| Error::invalid_argument(format!("'{hex_string}' is not UTF-8 text: {e}")))
}

/// Readable name of an asset identifier (policy id + hex asset name)
///
/// Strips `policy_id` when the identifier starts with it and decodes the
/// remaining asset name. Names that are not UTF-8 text are returned as hex.
pub fn readable_asset_name(asset: &str, policy_id: &str) -> String {
    let name_hex = asset.strip_prefix(policy_id).unwrap_or_else(|| {
        if asset.len() > POLICY_ID_HEX_LEN && asset.is_char_boundary(POLICY_ID_HEX_LEN) {
            &asset[POLICY_ID_HEX_LEN..]
        } else {
            asset
        }
    });

    convert_hex_to_ascii(name_hex).unwrap_or_else(|_| name_hex.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn obj(value: JsonValue) -> JsonObject {
        match value {
            JsonValue::Object(map) => map,
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_flatten_onchain_metadata() {
        let asset = obj(json!({"asset": "X", "onchain_metadata": {"name": "Foo"}}));
        let flat = process_onchain_metadata(&asset);
        assert_eq!(JsonValue::Object(flat), json!({"asset": "X", "name": "Foo"}));
    }

    #[test]
    fn test_flatten_without_nested_is_identity() {
        let asset = obj(json!({"asset": "X", "quantity": "1", "metadata": null, "tags": [1, 2]}));
        assert_eq!(process_onchain_metadata(&asset), asset);
    }

    #[test]
    fn test_flatten_collision_last_write_wins() {
        let asset = obj(json!({
            "name": "top",
            "onchain_metadata": {"name": "nested", "image": "ipfs://x"},
            "image": "late"
        }));
        let flat = process_onchain_metadata(&asset);

        assert_eq!(flat["name"], "nested");
        assert_eq!(flat["image"], "late");
        let keys: Vec<&str> = flat.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["name", "image"]);
    }

    #[test]
    fn test_flatten_record_passthrough() {
        assert_eq!(flatten_record(&json!("pool1abc")), json!("pool1abc"));
        assert_eq!(
            flatten_record(&json!({"a": {"b": 1}})),
            json!({"b": 1})
        );
    }

    #[test]
    fn test_convert_hex_to_ascii() {
        assert_eq!(
            convert_hex_to_ascii("436c61794e6174696f6e33393836").unwrap(),
            "ClayNation3986"
        );
        assert!(matches!(
            convert_hex_to_ascii("zz"),
            Err(Error::InvalidArgument { .. })
        ));
        assert!(matches!(
            convert_hex_to_ascii("ff"),
            Err(Error::InvalidArgument { .. })
        ));
    }

    #[test]
    fn test_readable_asset_name() {
        let policy = "40fa2aa67258b4ce7b5782f74831d46a84c59a0ff0c28262fab21728";
        let asset = format!("{policy}436c61794e6174696f6e33393836");
        assert_eq!(readable_asset_name(&asset, policy), "ClayNation3986");
        assert_eq!(readable_asset_name(&asset, "other"), "ClayNation3986");
        assert_eq!(readable_asset_name(&format!("{policy}ff00"), policy), "ff00");
    }
}
