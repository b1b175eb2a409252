use anyhow::Result;
use serde::Deserialize;
use std::path::PathBuf;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub frontend_dir: PathBuf,
    pub patch_config: PatchConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PatchConfig {
    pub patches: PatchToggles,
    #[serde(default)]
    pub frontend: FrontendConfig,
}

/// Per-rule toggles. Every rule must be listed explicitly in
/// patch_config.toml so a bundle update forces a conscious review.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PatchToggles {
    pub common_revealer: bool,
    pub handle_action: bool,
    pub show_drawer: bool,
    pub drawer_tab_location: bool,
    pub main_tab_location: bool,
    pub append_tab: bool,
    pub show_elements_tab: bool,
    pub more_tools: bool,
    pub toolbar_css: bool,
    pub tab_slider_css: bool,
    pub right_toolbar_css: bool,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FrontendConfig {
    /// Minified bundle: CSS lives inside JS strings, so injected line
    /// breaks must stay escaped as the two characters `\n`.
    pub release_mode: bool,
    pub drawer_default_tab: String,
    pub panel_default_tab: String,
    pub elements_panel: String,
    pub allowed_tabs: Vec<String>,
}

impl Default for FrontendConfig {
    fn default() -> Self {
        Self {
            release_mode: false,
            drawer_default_tab: "network.blocked-urls".into(),
            panel_default_tab: "network".into(),
            elements_panel: "elements".into(),
            allowed_tabs: [
                "elements",
                "Styles",
                "Computed",
                "accessibility.view",
                "elements.domProperties",
                "elements.domBreakpoints",
                "elements.eventListeners",
                "preferences",
                "workspace",
                "experiments",
                "blackbox",
                "devices",
                "throttling-conditions",
                "emulation-geolocations",
                "Shortcuts",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self> {
        let patch_config_str = std::fs::read_to_string("patch_config.toml")?;
        let patch_config: PatchConfig = toml::from_str(&patch_config_str)?;

        Ok(Self {
            frontend_dir: PathBuf::from(
                std::env::var("FRONTEND_DIR").unwrap_or_else(|_| "./frontend".into()),
            ),
            patch_config,
        })
    }
}
