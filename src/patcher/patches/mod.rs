pub mod inspector_view;
pub mod main_impl;
pub mod revealer;
pub mod shell_css;
pub mod tabbed_pane;
pub mod view_manager;
