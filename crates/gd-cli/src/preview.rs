use gd_core::{PreviewConfig, PreviewInput, RewriteMode};

/// Default preview config with the command-line overrides applied.
pub fn preview_config(gateway: Option<String>, suffix: Option<String>) -> PreviewConfig {
    let mut config = PreviewConfig::default();
    if let Some(gateway) = gateway {
        config.gateway_origin = gateway;
    }
    if let Some(suffix) = suffix {
        config.sample_suffix = suffix;
    }
    config
}

/// The two preview lines for the given editor fields.
pub fn render_preview(config: &PreviewConfig, incoming: &str, uri: &str, mode: &str, target: &str) -> String {
    let mode = RewriteMode::from_value(mode);
    log::debug!("Rendering preview in {} mode", mode.as_str());

    config
        .render(&PreviewInput {
            incoming_path: incoming,
            target_uri: uri,
            mode,
            target_path: target,
        })
        .to_text()
}
