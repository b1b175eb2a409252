use crate::config::PatchConfig;
use anyhow::Result;
use std::path::{Path, PathBuf};

/// One substitution rule against one known frontend file.
///
/// `apply` returns `None` when the expected pattern is absent (the bundle
/// drifted from the version the rule was written against). Rules never
/// error and never panic on arbitrary input; the caller decides what a
/// miss means.
pub trait Patch: Send + Sync {
    fn name(&self) -> &str;
    /// Path suffix of the bundle file this rule targets, e.g. "ui/InspectorView.js".
    fn target(&self) -> &str;
    fn apply(&self, content: &str) -> Option<String>;
}

pub struct PatchPipeline {
    patches: Vec<Box<dyn Patch>>,
}

impl PatchPipeline {
    pub fn new(config: &PatchConfig) -> Self {
        use super::patches;
        let mut pipeline = Self { patches: Vec::new() };
        let frontend = &config.frontend;

        if config.patches.common_revealer {
            pipeline.patches.push(Box::new(patches::revealer::CommonRevealerPatch));
        }
        if config.patches.handle_action {
            pipeline.patches.push(Box::new(patches::inspector_view::HandleActionPatch));
        }
        if config.patches.show_drawer {
            pipeline.patches.push(Box::new(patches::inspector_view::ShowDrawerPatch));
        }
        if config.patches.drawer_tab_location {
            pipeline.patches.push(Box::new(
                patches::inspector_view::DrawerTabLocationPatch::new(&frontend.drawer_default_tab),
            ));
        }
        if config.patches.main_tab_location {
            pipeline.patches.push(Box::new(
                patches::inspector_view::MainTabLocationPatch::new(&frontend.panel_default_tab),
            ));
        }
        if config.patches.append_tab {
            pipeline.patches.push(Box::new(
                patches::tabbed_pane::AppendTabPatch::new(&frontend.allowed_tabs),
            ));
        }
        if config.patches.show_elements_tab {
            pipeline.patches.push(Box::new(
                patches::view_manager::ShowElementsTabPatch::new(&frontend.elements_panel),
            ));
        }
        if config.patches.more_tools {
            pipeline.patches.push(Box::new(patches::main_impl::MoreToolsPatch));
        }
        if config.patches.toolbar_css {
            pipeline.patches.push(Box::new(
                patches::shell_css::ToolbarCssPatch::new(frontend.release_mode),
            ));
        }
        if config.patches.tab_slider_css {
            pipeline.patches.push(Box::new(
                patches::shell_css::TabSliderCssPatch::new(frontend.release_mode),
            ));
        }
        if config.patches.right_toolbar_css {
            pipeline.patches.push(Box::new(
                patches::shell_css::RightToolbarCssPatch::new(frontend.release_mode),
            ));
        }

        tracing::info!("Patch pipeline initialized with {} patches", pipeline.patches.len());
        pipeline
    }

    /// Applies every rule targeting `file` in registration order. A rule
    /// whose pattern is missing logs a warning and leaves the text as it
    /// was, so the host always gets something loadable back.
    pub fn patch_content(&self, file: &str, content: &str) -> String {
        let mut result = content.to_string();
        for patch in &self.patches {
            if !file.ends_with(patch.target()) {
                continue;
            }
            match patch.apply(&result) {
                Some(patched) => result = patched,
                None => tracing::warn!(
                    "Patch '{}' found no match in {}; bundle may have drifted",
                    patch.name(),
                    file
                ),
            }
        }
        result
    }

    /// Dry run: for every rule targeting `file`, whether its pattern is present.
    pub fn check_content(&self, file: &str, content: &str) -> Vec<(&str, bool)> {
        self.patches
            .iter()
            .filter(|p| file.ends_with(p.target()))
            .map(|p| (p.name(), p.apply(content).is_some()))
            .collect()
    }

    pub async fn patch_build(&self, build_dir: &Path) -> Result<u32> {
        let mut count = 0u32;

        for path in collect_sources(build_dir).await? {
            let rel = relative_key(build_dir, &path);
            let content = tokio::fs::read_to_string(&path).await?;
            let patched = self.patch_content(&rel, &content);
            if patched != content {
                tokio::fs::write(&path, patched).await?;
                count += 1;
                tracing::debug!("Patched: {}", rel);
            }
        }

        tracing::info!("Patched {} files in {:?}", count, build_dir);
        Ok(count)
    }

    /// Dry run over a whole bundle: logs per file which rules match and
    /// returns how many enabled patterns were not found.
    pub async fn check_build(&self, build_dir: &Path) -> Result<u32> {
        let mut missing = 0u32;

        for path in collect_sources(build_dir).await? {
            let rel = relative_key(build_dir, &path);
            let content = tokio::fs::read_to_string(&path).await?;
            for (patch, matched) in self.check_content(&rel, &content) {
                if matched {
                    tracing::info!("{}: '{}' matches", rel, patch);
                } else {
                    tracing::warn!("{}: '{}' pattern NOT found", rel, patch);
                    missing += 1;
                }
            }
        }

        Ok(missing)
    }
}

/// All .js/.css files under `build_dir`, recursively; DevTools bundles
/// nest their modules (ui/, common/, main/).
async fn collect_sources(build_dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let mut dirs = vec![build_dir.to_path_buf()];

    while let Some(dir) = dirs.pop() {
        let mut entries = tokio::fs::read_dir(&dir).await?;
        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            if entry.file_type().await?.is_dir() {
                dirs.push(path);
                continue;
            }
            let name = path.file_name().unwrap_or_default().to_string_lossy().to_string();
            if name.ends_with(".js") || name.ends_with(".css") {
                files.push(path);
            }
        }
    }

    Ok(files)
}

/// Path of `path` under `base` with forward slashes, matching how rules
/// name their targets.
fn relative_key(base: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(base).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
