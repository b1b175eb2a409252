use devtools_shim::config::{FrontendConfig, PatchConfig, PatchToggles};
use devtools_shim::patcher::PatchPipeline;

fn config_with(toggles: PatchToggles) -> PatchConfig {
    PatchConfig {
        patches: toggles,
        frontend: FrontendConfig::default(),
    }
}

#[test]
fn test_rules_route_by_target_file() {
    let config = config_with(PatchToggles {
        handle_action: true,
        show_drawer: true,
        ..Default::default()
    });
    let pipeline = PatchPipeline::new(&config);

    let input = "handleAction(context, actionId) {\n_showDrawer(focus) {";
    let patched = pipeline.patch_content("ui/InspectorView.js", input);
    assert!(patched.contains("handleAction(context, actionId) { return false;"));
    assert!(patched.contains("_showDrawer(focus) { return false;"));

    // Same text under a different file name is left alone.
    let untouched = pipeline.patch_content("ui/TabbedPane.js", input);
    assert_eq!(untouched, input);
}

#[test]
fn test_missing_pattern_falls_back_to_original() {
    let config = config_with(PatchToggles {
        common_revealer: true,
        ..Default::default()
    });
    let pipeline = PatchPipeline::new(&config);

    let drifted = "let reveal = async (revealable) => {";
    assert_eq!(pipeline.patch_content("common/Revealer.js", drifted), drifted);
}

#[test]
fn test_disabled_rules_are_not_applied() {
    let config = config_with(PatchToggles::default());
    let pipeline = PatchPipeline::new(&config);

    let input = "handleAction(context, actionId) {";
    assert_eq!(pipeline.patch_content("ui/InspectorView.js", input), input);
}

#[test]
fn test_check_content_reports_matches_and_misses() {
    let config = config_with(PatchToggles {
        handle_action: true,
        show_drawer: true,
        ..Default::default()
    });
    let pipeline = PatchPipeline::new(&config);

    let input = "handleAction(context, actionId) { dispatch();";
    let report = pipeline.check_content("ui/InspectorView.js", input);
    assert_eq!(report.len(), 2);
    assert!(report.contains(&("handle_action", true)));
    assert!(report.contains(&("show_drawer", false)));
}

#[tokio::test]
async fn test_patch_build_rewrites_nested_files() {
    let root = std::env::temp_dir().join(format!("devtools-shim-patch-{}", std::process::id()));
    let ui = root.join("ui");
    tokio::fs::create_dir_all(&ui).await.unwrap();
    tokio::fs::write(ui.join("InspectorView.js"), "handleAction(context, actionId) {")
        .await
        .unwrap();
    tokio::fs::write(root.join("shell.js"), ".tabbed-pane-tab-slider {\n    visibility: hidden;\n}")
        .await
        .unwrap();
    tokio::fs::write(root.join("readme.txt"), "not a source file").await.unwrap();

    let config = config_with(PatchToggles {
        handle_action: true,
        tab_slider_css: true,
        ..Default::default()
    });
    let pipeline = PatchPipeline::new(&config);

    let count = pipeline.patch_build(&root).await.unwrap();
    assert_eq!(count, 2);

    let inspector = tokio::fs::read_to_string(ui.join("InspectorView.js")).await.unwrap();
    assert!(inspector.contains("handleAction(context, actionId) { return false;"));
    let shell = tokio::fs::read_to_string(root.join("shell.js")).await.unwrap();
    assert!(shell.contains("display: none !important;"));

    tokio::fs::remove_dir_all(&root).await.unwrap();
}

#[tokio::test]
async fn test_check_build_counts_missing_patterns() {
    let root = std::env::temp_dir().join(format!("devtools-shim-check-{}", std::process::id()));
    let ui = root.join("ui");
    tokio::fs::create_dir_all(&ui).await.unwrap();
    // handleAction is present, _showDrawer drifted.
    tokio::fs::write(ui.join("InspectorView.js"), "handleAction(context, actionId) {")
        .await
        .unwrap();

    let config = config_with(PatchToggles {
        handle_action: true,
        show_drawer: true,
        ..Default::default()
    });
    let pipeline = PatchPipeline::new(&config);

    let missing = pipeline.check_build(&root).await.unwrap();
    assert_eq!(missing, 1);

    // check is a dry run, the file must be untouched.
    let content = tokio::fs::read_to_string(ui.join("InspectorView.js")).await.unwrap();
    assert_eq!(content, "handleAction(context, actionId) {");

    tokio::fs::remove_dir_all(&root).await.unwrap();
}

#[test]
fn test_configured_tab_ids_flow_into_rules() {
    let config = PatchConfig {
        patches: PatchToggles {
            drawer_tab_location: true,
            main_tab_location: true,
            ..Default::default()
        },
        frontend: FrontendConfig {
            drawer_default_tab: "console-view".into(),
            panel_default_tab: "elements".into(),
            ..Default::default()
        },
    };
    let pipeline = PatchPipeline::new(&config);

    let input = "this._showDrawer.bind(this, false), 'drawer-view', true, true\nInspectorFrontendHostInstance), 'panel', true, true, Root.Runtime.queryParam('panel')";
    let patched = pipeline.patch_content("ui/InspectorView.js", input);
    assert!(patched.contains("'drawer-view', true, true, 'console-view'"));
    assert!(patched.contains("'panel', true, true, 'elements'"));
}
