//! Canonical schema constants for structured logging and result tables
//!
//! These constants ensure consistency across logging, error reporting and
//! the shape of the grouped result table.

// Canonical field keys for structured logging
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";

// Table dimensions
pub const FIELD_ROWS: &str = "rows";
pub const FIELD_COLUMNS: &str = "columns";
pub const FIELD_GROUPS: &str = "groups";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";

// Result table column names, in order
pub const COLUMN_GROUP: &str = "group";
pub const COLUMN_COUNT: &str = "count";
pub const COLUMN_INDICES: &str = "indices";
pub const RESULT_COLUMNS: [&str; 3] = [COLUMN_GROUP, COLUMN_COUNT, COLUMN_INDICES];
