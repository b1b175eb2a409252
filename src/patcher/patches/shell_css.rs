use crate::patcher::Patch;
use regex::Regex;
use std::sync::LazyLock;

// The bundled shell.js carries inspectorCommon.css inline. In a release
// build that CSS sits inside a JS string, so every line break we inject
// has to be the two-character escape `\n`; the match patterns themselves
// are identical in both modes.
fn separator(release: bool) -> &'static str {
    if release { "\\n" } else { "\n" }
}

const MONOSPACE_ANCHOR: &str = ":host-context(.platform-mac) .monospace,";

/// Injects CSS ahead of the first selector of inspectorCommon.css: hides
/// the main tabbed-pane header the editor replaces with its own chrome,
/// while keeping the screencast toggle visible.
pub struct ToolbarCssPatch {
    release: bool,
}

impl ToolbarCssPatch {
    pub fn new(release: bool) -> Self {
        Self { release }
    }
}

impl Patch for ToolbarCssPatch {
    fn name(&self) -> &str { "toolbar_css" }

    fn target(&self) -> &str { "shell.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !content.contains(MONOSPACE_ANCHOR) {
            return None;
        }
        let sep = separator(self.release);
        let css = format!(
            ".main-tabbed-pane .tabbed-pane-header-contents {{{sep}            visibility: hidden !important;{sep}        }}{sep}{sep}        .toolbar-button[aria-label='Toggle screencast'] {{{sep}            visibility: visible !important;{sep}        }}{sep}{sep}        "
        );
        Some(content.replacen(MONOSPACE_ANCHOR, &format!("{}{}", css, MONOSPACE_ANCHOR), 1))
    }
}

static TAB_SLIDER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.tabbed-pane-tab-slider\s*\{[^}]*\}").unwrap()
});

/// Collapses the selected-tab slider rule to display: none.
pub struct TabSliderCssPatch {
    release: bool,
}

impl TabSliderCssPatch {
    pub fn new(release: bool) -> Self {
        Self { release }
    }
}

impl Patch for TabSliderCssPatch {
    fn name(&self) -> &str { "tab_slider_css" }

    fn target(&self) -> &str { "shell.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !TAB_SLIDER_RE.is_match(content) {
            return None;
        }
        let sep = separator(self.release);
        let replacement = format!(
            ".tabbed-pane-tab-slider {{{sep}            display: none !important;{sep}        }}"
        );
        Some(TAB_SLIDER_RE.replace_all(content, replacement.as_str()).into_owned())
    }
}

static RIGHT_TOOLBAR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\.tabbed-pane-right-toolbar\s*\{[^}]*\}").unwrap()
});

/// Collapses the right toolbar rule (dock controls, overflow menu) to
/// display: none.
pub struct RightToolbarCssPatch {
    release: bool,
}

impl RightToolbarCssPatch {
    pub fn new(release: bool) -> Self {
        Self { release }
    }
}

impl Patch for RightToolbarCssPatch {
    fn name(&self) -> &str { "right_toolbar_css" }

    fn target(&self) -> &str { "shell.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !RIGHT_TOOLBAR_RE.is_match(content) {
            return None;
        }
        let sep = separator(self.release);
        let replacement = format!(
            ".tabbed-pane-right-toolbar {{{sep}            display: none !important;{sep}        }}"
        );
        Some(RIGHT_TOOLBAR_RE.replace_all(content, replacement.as_str()).into_owned())
    }
}
