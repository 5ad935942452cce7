//! One-shot startup: resolve the configuration, find the mount element and
//! render [`App`] into it.

use crate::{
    app::{App, AppProps},
    config::{AppConfig, ConfigError},
};
use log::info;
use std::sync::atomic::{AtomicBool, Ordering};
use web_sys::Element;
use yew::AppHandle;

/// Id of the element in `index.html` the app is rendered into.
pub const MOUNT_ELEMENT_ID: &str = "app";

static STARTED: AtomicBool = AtomicBool::new(false);

#[derive(Debug, thiserror::Error)]
pub enum BootstrapError {
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("mount element `#{0}` not found in the document")]
    MissingMountPoint(String),
    #[error("the application is already running")]
    AlreadyStarted,
}

/// Starts the dashboard using the build-time configuration.
pub fn start() -> Result<AppHandle<App>, BootstrapError> {
    let config = AppConfig::from_build_env()?;
    let root = mount_point(MOUNT_ELEMENT_ID)?;
    start_with(config, root)
}

pub fn mount_point(id: &str) -> Result<Element, BootstrapError> {
    gloo::utils::document()
        .get_element_by_id(id)
        .ok_or_else(|| BootstrapError::MissingMountPoint(id.to_string()))
}

/// Renders the app into `root`. Only the first call in a process succeeds.
pub fn start_with(config: AppConfig, root: Element) -> Result<AppHandle<App>, BootstrapError> {
    claim_instance()?;
    info!(
        "Starting dashboard, environment: {}, API prefix: {}",
        config.environment, config.prefix
    );
    Ok(yew::Renderer::<App>::with_root_and_props(root, AppProps { config }).render())
}

fn claim_instance() -> Result<(), BootstrapError> {
    if STARTED.swap(true, Ordering::SeqCst) {
        Err(BootstrapError::AlreadyStarted)
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn only_one_instance_can_be_claimed() {
        assert_matches!(claim_instance(), Ok(()));
        assert_matches!(claim_instance(), Err(BootstrapError::AlreadyStarted));
        assert_matches!(claim_instance(), Err(BootstrapError::AlreadyStarted));
    }

    #[test]
    fn host_page_has_mount_point_and_matching_stylesheets() {
        let index = include_str!("../index.html");
        assert!(index.contains(&format!(r#"<div id="{MOUNT_ELEMENT_ID}">"#)));
        // yewprint emits `bp3-*` classes.
        assert!(index.contains("@blueprintjs/core@3/"));
        assert!(index.contains("@blueprintjs/icons@3/"));
    }

    #[test]
    fn config_errors_convert() {
        let err: BootstrapError = ConfigError::EmptyPrefix.into();
        assert_eq!(
            "invalid configuration: API prefix must not be empty",
            err.to_string()
        );
    }
}
