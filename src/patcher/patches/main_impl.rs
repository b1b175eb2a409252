use crate::patcher::Patch;
use regex::Regex;
use std::sync::LazyLock;

static MORE_TOOLS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"const moreTools\s*=\s*[^;]+;").unwrap()
});

/// Stubs out the "More Tools" context menu in MainImpl.js. The stub keeps
/// the call sites happy: defaultSection() yields an object whose
/// appendItem is a no-op.
pub struct MoreToolsPatch;

impl Patch for MoreToolsPatch {
    fn name(&self) -> &str { "more_tools" }

    fn target(&self) -> &str { "main/MainImpl.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !MORE_TOOLS_RE.is_match(content) {
            return None;
        }
        Some(
            MORE_TOOLS_RE
                .replace_all(
                    content,
                    "const moreTools = { defaultSection: () => ({ appendItem: () => {} }) };",
                )
                .into_owned(),
        )
    }
}
