use crate::patcher::Patch;
use regex::Regex;
use std::sync::LazyLock;

static APPEND_TAB_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"appendTab\(id, tabTitle, view, tabTooltip, userGesture, isCloseable, index\) \{")
        .unwrap()
});

/// Inserts an allowlist guard at the top of TabbedPane.appendTab so only
/// the tabs the embedded view supports ever register. Everything else
/// (Sources, Audits, extension panels) silently drops.
pub struct AppendTabPatch {
    condition: String,
}

impl AppendTabPatch {
    pub fn new(allowed_tabs: &[String]) -> Self {
        // An empty allowlist means no tab may register; emit a condition
        // that is always true rather than the invalid `if ()`.
        let condition = if allowed_tabs.is_empty() {
            "true".to_string()
        } else {
            allowed_tabs
                .iter()
                .map(|tab| format!("id !== '{}'", tab))
                .collect::<Vec<_>>()
                .join(" && ")
        };
        Self { condition }
    }
}

impl Patch for AppendTabPatch {
    fn name(&self) -> &str { "append_tab" }

    fn target(&self) -> &str { "ui/TabbedPane.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !APPEND_TAB_RE.is_match(content) {
            return None;
        }
        let replacement = format!(
            "appendTab(id, tabTitle, view, tabTooltip, userGesture, isCloseable, index) {{ if ({}) return;",
            self.condition
        );
        Some(APPEND_TAB_RE.replace_all(content, replacement.as_str()).into_owned())
    }
}
