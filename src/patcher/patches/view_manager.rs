use crate::patcher::Patch;

const DEFAULT_TAB_ASSIGN: &str = "this._defaultTab = defaultTab;";

/// Forces ViewManager's tabbed location to open on a fixed panel rather
/// than the caller-supplied default.
pub struct ShowElementsTabPatch {
    panel: String,
}

impl ShowElementsTabPatch {
    pub fn new(panel: &str) -> Self {
        Self { panel: panel.to_string() }
    }
}

impl Patch for ShowElementsTabPatch {
    fn name(&self) -> &str { "show_elements_tab" }

    fn target(&self) -> &str { "ui/ViewManager.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !content.contains(DEFAULT_TAB_ASSIGN) {
            return None;
        }
        Some(content.replace(
            DEFAULT_TAB_ASSIGN,
            &format!("this._defaultTab = '{}';", self.panel),
        ))
    }
}
