//! Live example preview for the simple route editor
//!
//! Given the four editor fields, show what a sample request to the gateway
//! turns into once it is forwarded upstream.

// =============================================================================
// Rewrite Mode
// =============================================================================

/// How an incoming path is mapped to the forwarded path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RewriteMode {
    /// Drop the matched prefix.
    Strip,
    /// Replace the matched prefix with the target path.
    Rewrite,
    /// Forward the path unchanged.
    #[default]
    PassThrough,
}

impl RewriteMode {
    /// Parse the `rewriteType` select value. Unknown values pass through.
    pub fn from_value(value: &str) -> Self {
        match value {
            "strip" => Self::Strip,
            "rewrite" => Self::Rewrite,
            _ => Self::PassThrough,
        }
    }

    /// Canonical name of the mode. Every pass-through value, including
    /// empty and unknown ones, reports as `none`, so this is not the
    /// select value that was parsed.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Strip => "strip",
            Self::Rewrite => "rewrite",
            Self::PassThrough => "none",
        }
    }

    /// Whether the rewrite-specific options panel should be visible.
    #[inline]
    pub fn shows_rewrite_options(&self) -> bool {
        matches!(self, Self::Rewrite)
    }
}

// =============================================================================
// Config
// =============================================================================

/// Constants the preview is rendered with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewConfig {
    /// Origin the sample request is sent to.
    pub gateway_origin: String,
    /// Path appended to both sides of the example.
    pub sample_suffix: String,
    pub default_incoming_path: String,
    pub default_target_uri: String,
    pub default_target_path: String,
}

impl Default for PreviewConfig {
    fn default() -> Self {
        Self {
            gateway_origin: "http://localhost:8087".to_string(),
            sample_suffix: "/token".to_string(),
            default_incoming_path: "/ye".to_string(),
            default_target_uri: "http://192.168.0.188:8000".to_string(),
            default_target_path: "/api".to_string(),
        }
    }
}

/// Raw field values as read from the editor. Empty means "use default".
#[derive(Debug, Clone, Copy, Default)]
pub struct PreviewInput<'a> {
    pub incoming_path: &'a str,
    pub target_uri: &'a str,
    pub mode: RewriteMode,
    pub target_path: &'a str,
}

// =============================================================================
// Preview
// =============================================================================

/// Rendered example: the inbound request and where it is forwarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExamplePreview {
    pub request_url: String,
    pub forward_url: String,
    pub forward_path: String,
}

impl ExamplePreview {
    pub fn request_line(&self) -> String {
        format!("Request: {}", self.request_url)
    }

    pub fn forward_line(&self) -> String {
        format!("Forwards to: {}", self.forward_url)
    }

    /// Both lines separated by a newline.
    pub fn to_text(&self) -> String {
        format!("{}\n{}", self.request_line(), self.forward_line())
    }
}

fn or_default<'a>(value: &'a str, default: &'a str) -> &'a str {
    if value.is_empty() {
        default
    } else {
        value
    }
}

impl PreviewConfig {
    /// Derive the example. Defaults apply per field, never all at once.
    pub fn render(&self, input: &PreviewInput<'_>) -> ExamplePreview {
        let incoming_path = or_default(input.incoming_path, &self.default_incoming_path);
        let target_uri = or_default(input.target_uri, &self.default_target_uri);
        let target_path = or_default(input.target_path, &self.default_target_path);
        let suffix = self.sample_suffix.as_str();

        let forward_path = match input.mode {
            RewriteMode::Strip => suffix.to_string(),
            RewriteMode::Rewrite => format!("{}{}", target_path, suffix),
            RewriteMode::PassThrough => format!("{}{}", incoming_path, suffix),
        };

        ExamplePreview {
            request_url: format!("{}{}{}", self.gateway_origin, incoming_path, suffix),
            forward_url: format!("{}{}", target_uri, forward_path),
            forward_path,
        }
    }
}
