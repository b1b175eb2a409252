use crate::patcher::Patch;
use regex::Regex;
use std::sync::LazyLock;

/// Short-circuits InspectorView.handleAction so drawer toggle shortcuts
/// do nothing inside the embedded view.
pub struct HandleActionPatch;

static HANDLE_ACTION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"handleAction\(context, actionId\) \{").unwrap()
});

impl Patch for HandleActionPatch {
    fn name(&self) -> &str { "handle_action" }

    fn target(&self) -> &str { "ui/InspectorView.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !HANDLE_ACTION_RE.is_match(content) {
            return None;
        }
        Some(
            HANDLE_ACTION_RE
                .replace_all(content, "handleAction(context, actionId) { return false;")
                .into_owned(),
        )
    }
}

/// Keeps the drawer closed by making _showDrawer bail out immediately.
pub struct ShowDrawerPatch;

static SHOW_DRAWER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"_showDrawer\(focus\) \{").unwrap()
});

impl Patch for ShowDrawerPatch {
    fn name(&self) -> &str { "show_drawer" }

    fn target(&self) -> &str { "ui/InspectorView.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !SHOW_DRAWER_RE.is_match(content) {
            return None;
        }
        Some(
            SHOW_DRAWER_RE
                .replace_all(content, "_showDrawer(focus) { return false;")
                .into_owned(),
        )
    }
}

const DRAWER_LOCATION: &str = "this._showDrawer.bind(this, false), 'drawer-view', true, true";

/// Appends a default tab id to the drawer tabbed-location registration so
/// the drawer comes up on a known tab instead of whatever was persisted.
pub struct DrawerTabLocationPatch {
    default_tab: String,
}

impl DrawerTabLocationPatch {
    pub fn new(default_tab: &str) -> Self {
        Self { default_tab: default_tab.to_string() }
    }
}

impl Patch for DrawerTabLocationPatch {
    fn name(&self) -> &str { "drawer_tab_location" }

    fn target(&self) -> &str { "ui/InspectorView.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !content.contains(DRAWER_LOCATION) {
            return None;
        }
        Some(content.replace(
            DRAWER_LOCATION,
            &format!("{}, '{}'", DRAWER_LOCATION, self.default_tab),
        ))
    }
}

const MAIN_TAB_LOCATION: &str =
    "InspectorFrontendHostInstance), 'panel', true, true, Root.Runtime.queryParam('panel')";

/// Replaces the ?panel= query-param default for the main tabbed location
/// with a fixed panel id; the embedded view has no URL to carry the param.
pub struct MainTabLocationPatch {
    default_tab: String,
}

impl MainTabLocationPatch {
    pub fn new(default_tab: &str) -> Self {
        Self { default_tab: default_tab.to_string() }
    }
}

impl Patch for MainTabLocationPatch {
    fn name(&self) -> &str { "main_tab_location" }

    fn target(&self) -> &str { "ui/InspectorView.js" }

    fn apply(&self, content: &str) -> Option<String> {
        if !content.contains(MAIN_TAB_LOCATION) {
            return None;
        }
        Some(content.replace(
            MAIN_TAB_LOCATION,
            &format!(
                "InspectorFrontendHostInstance), 'panel', true, true, '{}'",
                self.default_tab
            ),
        ))
    }
}
