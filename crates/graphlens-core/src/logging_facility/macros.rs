//! Operation logging macros
//!
//! Every public graph operation (`deep_equals`, `copy_properties`,
//! `path_get`, `path_set`) is bracketed by `log_op_start!` and either
//! `log_op_end!` or `log_op_error!`. Per-member findings inside a walk
//! (mismatches, skipped copy targets) go through `log_op_detail!` at debug
//! level so they stay silent under the production profile.
//!
//! All macros stamp `component`, `op` and `event` using the keys in
//! [`crate::core_types::schema`].

/// Log entry into a graph operation
///
/// Extra fields follow the operation name, e.g. the comparison mode or path.
///
/// # Example
///
/// ```
/// # use graphlens_core::log_op_start;
/// log_op_start!("deep_equals");
/// log_op_start!("path_get", path = "address.city");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_START,
            $($($field)*)?
        );
    };
}

/// Log successful completion of a graph operation
///
/// `duration_ms` is mandatory; outcome fields such as `mismatch_count` or
/// `copied_count` may follow it.
///
/// # Example
///
/// ```
/// # use graphlens_core::log_op_end;
/// log_op_end!("copy_properties", duration_ms = 3, copied_count = 4u64);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {
        tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END,
            duration_ms = $duration,
            $($($field)*)?
        );
    };
}

/// Log a failed graph operation
///
/// Accepts anything convertible into [`ExError`](crate::errors::ExError) and
/// records its code and kind, plus the type and path the failure names when
/// the error carries them.
///
/// # Example
///
/// ```
/// # use graphlens_core::{log_op_error, errors::GraphError};
/// let err = GraphError::MemberNotFound {
///     type_name: "Person".to_string(),
///     member: "nickname".to_string(),
/// };
/// log_op_error!("path_get", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr $(, $($field:tt)*)?) => {{
        let ex_err: $crate::errors::ExError = $err.into();
        tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::core_types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err_kind = ?ex_err.kind(),
            err_code = ex_err.code(),
            err_type = ex_err.type_name(),
            err_path = ex_err.path(),
            err_member = ex_err.member(),
            $($($field)*)?
        );
    }};
}

/// Log a per-member finding inside an operation's walk
///
/// `event` is one of the schema detail events (`mismatch`, `skip`) and `path`
/// is the dotted member path the finding applies to.
///
/// # Example
///
/// ```
/// # use graphlens_core::log_op_detail;
/// log_op_detail!("copy_properties", "skip", "address.city", reason = "read only");
/// ```
#[macro_export]
macro_rules! log_op_detail {
    ($op:expr, $event:expr, $path:expr $(, $($field:tt)*)?) => {
        tracing::debug!(
            component = module_path!(),
            op = $op,
            event = $event,
            path = %$path,
            $($($field)*)?
        );
    };
}
