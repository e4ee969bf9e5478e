//! Partial-update merge applied to settings patches.
//!
//! The device accepts sparse configuration updates: the client POSTs only
//! the fields it wants to change, nested at most as deep as the canonical
//! settings tree itself. The merge walks the patch, overwrites matching
//! leaves in the canonical body, and ignores everything else — no additive
//! keys, no validation, no type checking of incoming values. This mirrors
//! how the device parses updates and is intentionally permissive.

use serde_json::Value;

/// Maximum number of object levels the merge descends into.
///
/// Level 1 is the settings body itself, level 2 a sub-settings object,
/// level 3 a sub-sub-settings object. At this depth values are overwritten
/// wholesale instead of being walked further.
pub const MERGE_DEPTH_LIMIT: usize = 3;

/// Apply a sparse `patch` onto `current`, known keys only.
///
/// Rules, per key present in both objects:
/// - canonical value is an object (and we are below [`MERGE_DEPTH_LIMIT`]):
///   recurse; a non-object patch value has no keys to walk and is a no-op;
/// - canonical value is a scalar or array, or the depth limit is reached:
///   overwrite with the patch value as-is.
///
/// Keys absent from `current` are silently dropped. Non-object inputs at
/// the top level leave `current` untouched.
pub fn apply_partial(current: &mut Value, patch: &Value) {
    merge_level(current, patch, 1);
}

fn merge_level(current: &mut Value, patch: &Value, depth: usize) {
    let (Value::Object(current), Value::Object(patch)) = (current, patch) else {
        return;
    };
    for (key, incoming) in patch {
        let Some(existing) = current.get_mut(key) else {
            continue;
        };
        if existing.is_object() && depth < MERGE_DEPTH_LIMIT {
            merge_level(existing, incoming, depth + 1);
        } else {
            *existing = incoming.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn canonical() -> Value {
        json!({
            "echo": true,
            "led_mode": 2,
            "wifi_settings": {
                "ssid": "device",
                "channel": 1,
            },
            "can_settings": {
                "can0": { "enabled": true, "bitrate": 500_000 },
                "can1": { "enabled": false, "bitrate": 500_000 },
            },
        })
    }

    #[test]
    fn should_overwrite_top_level_scalar() {
        let mut body = canonical();
        apply_partial(&mut body, &json!({ "led_mode": 1 }));
        assert_eq!(body["led_mode"], json!(1));
        assert_eq!(body["echo"], json!(true));
    }

    #[test]
    fn should_ignore_unknown_keys() {
        let mut body = canonical();
        let before = body.clone();
        apply_partial(&mut body, &json!({ "bogus": true }));
        assert_eq!(body, before);
    }

    #[test]
    fn should_not_add_keys_from_patch() {
        let mut body = canonical();
        apply_partial(&mut body, &json!({ "wifi_settings": { "password": "hunter2" } }));
        assert!(body["wifi_settings"].get("password").is_none());
    }

    #[test]
    fn should_merge_second_level_leaving_siblings() {
        let mut body = canonical();
        apply_partial(&mut body, &json!({ "wifi_settings": { "channel": 6 } }));
        assert_eq!(body["wifi_settings"]["channel"], json!(6));
        assert_eq!(body["wifi_settings"]["ssid"], json!("device"));
    }

    #[test]
    fn should_merge_third_level_leaving_siblings() {
        let mut body = canonical();
        apply_partial(&mut body, &json!({ "can_settings": { "can1": { "enabled": true } } }));
        assert_eq!(body["can_settings"]["can1"]["enabled"], json!(true));
        assert_eq!(body["can_settings"]["can1"]["bitrate"], json!(500_000));
        assert_eq!(body["can_settings"]["can0"]["enabled"], json!(true));
    }

    #[test]
    fn should_overwrite_wholesale_at_depth_limit() {
        // can0's value sits at level 3: no further descent, even for objects.
        let mut body = json!({
            "can_settings": { "can0": { "limits": { "warn": 1, "max": 2 } } }
        });
        apply_partial(
            &mut body,
            &json!({ "can_settings": { "can0": { "limits": { "warn": 5 } } } }),
        );
        assert_eq!(body["can_settings"]["can0"]["limits"], json!({ "warn": 5 }));
    }

    #[test]
    fn should_ignore_scalar_patch_against_nested_object() {
        let mut body = canonical();
        apply_partial(&mut body, &json!({ "wifi_settings": 42 }));
        assert_eq!(body["wifi_settings"]["ssid"], json!("device"));
    }

    #[test]
    fn should_permit_type_changing_overwrite() {
        let mut body = canonical();
        apply_partial(&mut body, &json!({ "led_mode": "banana" }));
        assert_eq!(body["led_mode"], json!("banana"));
    }

    #[test]
    fn should_do_nothing_for_non_object_patch() {
        let mut body = canonical();
        let before = body.clone();
        apply_partial(&mut body, &json!([1, 2, 3]));
        assert_eq!(body, before);
    }

    #[test]
    fn should_keep_depth_limit_at_three_levels() {
        assert_eq!(MERGE_DEPTH_LIMIT, 3);
    }
}
