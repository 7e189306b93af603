//! Output formatting for CLI display.

use rover::Summary;

/// One-line human summary of a finished mission.
pub(super) fn format_summary(summary: &Summary) -> String {
    let noun = if summary.rovers == 1 { "rover" } else { "rovers" };
    let mut parts = vec![format!("{} {noun}", summary.rovers)];
    if summary.blocked > 0 {
        parts.push(format!("{} blocked", summary.blocked));
    }
    if summary.started_invalid > 0 {
        parts.push(format!("{} started off-limits", summary.started_invalid));
    }
    parts.join(", ")
}
