//! Canonical schema constants for structured logging and events
//!
//! These constants ensure consistency across all logging and error reporting.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";

// Graph traversal context
pub const FIELD_PATH: &str = "path";
pub const FIELD_MEMBER: &str = "member";
pub const FIELD_TYPE_NAME: &str = "type_name";
pub const FIELD_MODE: &str = "mode";

// Outcome sizes
pub const FIELD_MISMATCH_COUNT: &str = "mismatch_count";
pub const FIELD_COPIED_COUNT: &str = "copied_count";
pub const FIELD_SKIPPED_COUNT: &str = "skipped_count";

// Error fields
pub const FIELD_ERR_KIND: &str = "err_kind";
pub const FIELD_ERR_CODE: &str = "err_code";

// Canonical operation names
pub const OP_DEEP_EQUALS: &str = "deep_equals";
pub const OP_COPY_PROPERTIES: &str = "copy_properties";
pub const OP_PATH_GET: &str = "path_get";
pub const OP_PATH_SET: &str = "path_set";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
pub const EVENT_MISMATCH: &str = "mismatch";
pub const EVENT_SKIP: &str = "skip";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants_accessibility() {
        assert!(!FIELD_COMPONENT.is_empty());
        assert!(!FIELD_OP.is_empty());
        assert!(!FIELD_PATH.is_empty());
        assert!(!EVENT_START.is_empty());
        assert!(!EVENT_END.is_empty());
        assert!(!EVENT_END_ERROR.is_empty());
    }

    #[test]
    fn test_event_names_are_distinct() {
        let events = [
            EVENT_START,
            EVENT_END,
            EVENT_END_ERROR,
            EVENT_MISMATCH,
            EVENT_SKIP,
        ];
        for (i, a) in events.iter().enumerate() {
            for b in events.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn test_op_names_are_distinct() {
        assert_ne!(OP_PATH_GET, OP_PATH_SET);
        assert_ne!(OP_DEEP_EQUALS, OP_COPY_PROPERTIES);
    }
}
