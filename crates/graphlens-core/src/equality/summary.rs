//! Human-readable summary renderer for comparisons.

use crate::equality::model::{Comparison, MismatchKind};

/// Render a plain-text report of a [`Comparison`].
///
/// Intended for assertion failure messages; one line per mismatch.
pub fn render_summary(comparison: &Comparison) -> String {
    let mut out = String::new();

    if comparison.is_equal() {
        out.push_str(&format!("Deep equality ({}): equal\n", comparison.mode));
        return out;
    }

    out.push_str(&format!(
        "Deep equality ({}): {} mismatch(es)\n",
        comparison.mode,
        comparison.mismatches.len()
    ));

    for mismatch in &comparison.mismatches {
        let path = if mismatch.path.is_empty() {
            "(root)"
        } else {
            mismatch.path.as_str()
        };
        let source = mismatch.source.as_deref().unwrap_or("<absent>");
        let compare = mismatch.compare.as_deref().unwrap_or("<absent>");
        let line = match &mismatch.kind {
            MismatchKind::NullMismatch => format!("null on one side: {} vs {}", source, compare),
            MismatchKind::ValueMismatch => format!("{} != {}", source, compare),
            MismatchKind::ShapeMismatch => format!("shape differs: {} vs {}", source, compare),
            MismatchKind::CountMismatch {
                source_len,
                compare_len,
            } => format!("length {} vs {}", source_len, compare_len),
            MismatchKind::MissingMember => "missing on compare".to_string(),
            MismatchKind::ExtraMember => "not present on source".to_string(),
        };
        out.push_str(&format!("  - {}: {}\n", path, line));
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::equality::model::Mismatch;
    use crate::options::CompareMode;

    #[test]
    fn test_equal_summary_is_one_line() {
        let comparison = Comparison {
            equal: true,
            mode: CompareMode::Strict,
            mismatches: vec![],
        };
        assert_eq!(render_summary(&comparison), "Deep equality (strict): equal\n");
    }

    #[test]
    fn test_mismatch_lines() {
        let comparison = Comparison {
            equal: false,
            mode: CompareMode::SubEquals,
            mismatches: vec![
                Mismatch {
                    path: "name".to_string(),
                    kind: MismatchKind::ValueMismatch,
                    source: Some("\"Bob\"".to_string()),
                    compare: Some("\"Rob\"".to_string()),
                },
                Mismatch {
                    path: "extra".to_string(),
                    kind: MismatchKind::MissingMember,
                    source: Some("1".to_string()),
                    compare: None,
                },
            ],
        };
        let summary = render_summary(&comparison);
        assert!(summary.starts_with("Deep equality (sub_equals): 2 mismatch(es)"));
        assert!(summary.contains("  - name: \"Bob\" != \"Rob\""));
        assert!(summary.contains("  - extra: missing on compare"));
    }
}
