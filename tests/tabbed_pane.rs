use devtools_shim::patcher::patches::tabbed_pane::AppendTabPatch;
use devtools_shim::patcher::Patch;

fn tabs(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_append_tab_inserts_guard() {
    let patch = AppendTabPatch::new(&tabs(&["elements", "Styles"]));
    let input = "appendTab(id, tabTitle, view, tabTooltip, userGesture, isCloseable, index) {\n    const tab = new Tab();";
    let result = patch.apply(input).unwrap();
    assert!(result.contains(
        "appendTab(id, tabTitle, view, tabTooltip, userGesture, isCloseable, index) { if (id"
    ));
    assert!(result.contains("id !== 'elements' && id !== 'Styles') return;"));
    assert!(result.contains("const tab = new Tab();"));
}

#[test]
fn test_append_tab_single_entry() {
    let patch = AppendTabPatch::new(&tabs(&["elements"]));
    let input = "appendTab(id, tabTitle, view, tabTooltip, userGesture, isCloseable, index) {";
    let result = patch.apply(input).unwrap();
    assert!(result.contains("{ if (id !== 'elements') return;"));
}

#[test]
fn test_append_tab_empty_allowlist_blocks_all_tabs() {
    let patch = AppendTabPatch::new(&[]);
    let input = "appendTab(id, tabTitle, view, tabTooltip, userGesture, isCloseable, index) {";
    let result = patch.apply(input).unwrap();
    assert!(result.contains("{ if (true) return;"));
    assert!(!result.contains("if () return;"));
}

#[test]
fn test_append_tab_drifted() {
    let patch = AppendTabPatch::new(&tabs(&["elements"]));
    assert!(patch.apply("appendTab(id, title, view) {").is_none());
}
