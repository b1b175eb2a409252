use crate::patcher::Patch;
use regex::Regex;
use std::sync::LazyLock;

/// Renames the anonymous `reveal` function in common/Revealer.js so that
/// reveal actions land in the host-injected `revealInEditor`, which calls
/// `InspectorFrontendHost.openInEditor` instead of opening a Sources tab.
pub struct CommonRevealerPatch;

static REVEAL_FN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"let reveal = function\(revealable, omitFocus\) \{").unwrap()
});

impl Patch for CommonRevealerPatch {
    fn name(&self) -> &str { "common_revealer" }

    fn target(&self) -> &str { "common/Revealer.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !REVEAL_FN_RE.is_match(content) {
            return None;
        }
        Some(
            REVEAL_FN_RE
                .replace_all(content, "let reveal = function revealInEditor(revealable, omitFocus) {")
                .into_owned(),
        )
    }
}
