//! Color and styling helpers for CLI output.
//!
//! Semantic Color Theme:
//!   - Success/High:   green   (high attendance frequency, success notes)
//!   - Warning/Medium: yellow  (medium frequency, load warnings)
//!   - Error/Low:      red     (low frequency, errors)
//!   - Info/Reference: cyan    (person IDs, source names)
//!   - Accent:         magenta (visitor-type labels)
//!   - Muted:          dimmed  (field labels, unknown identities)
//!   - Emphasis:       bold    (table headers, totals)

use colored::Colorize;

use crate::domain::FrequencyBucket;

use super::OutputConfig;

/// Apply semantic "success" color (green) to text.
pub fn success(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.green().to_string()
}

/// Apply semantic "error" color (red) to text.
pub fn error(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.red().to_string()
}

/// Apply semantic "warning" color (yellow) to text.
pub fn warning(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.yellow().to_string()
}

/// Apply semantic "info" color (cyan) to text.
pub fn info(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.cyan().to_string()
}

/// Bold emphasis for headers.
pub(crate) fn bold(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.bold().to_string()
}

/// Muted styling for secondary text.
pub(crate) fn dimmed(text: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return text.to_string();
    }
    text.dimmed().to_string()
}

/// Color a frequency bucket like the report's badges: High green,
/// Medium yellow, Low red.
pub(crate) fn colorize_frequency(bucket: FrequencyBucket, config: &OutputConfig) -> String {
    let text = bucket.to_string();
    if !config.use_colors {
        return text;
    }
    match bucket {
        FrequencyBucket::High => text.green().to_string(),
        FrequencyBucket::Medium => text.yellow().to_string(),
        FrequencyBucket::Low => text.red().to_string(),
    }
}

/// Cyan reference styling for person IDs.
pub(crate) fn colorize_id(id: &str, config: &OutputConfig) -> String {
    if !config.use_colors {
        return id.to_string();
    }
    id.cyan().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain() -> OutputConfig {
        OutputConfig::new(80, false, false)
    }

    #[test]
    fn colors_disabled_passes_text_through() {
        let config = plain();
        assert_eq!(success("ok", &config), "ok");
        assert_eq!(colorize_frequency(FrequencyBucket::High, &config), "high");
        assert_eq!(colorize_id("FP001", &config), "FP001");
    }

    #[test]
    fn colors_enabled_adds_escape_codes() {
        colored::control::set_override(true);
        let config = OutputConfig::new(80, false, true);
        assert_ne!(colorize_frequency(FrequencyBucket::Low, &config), "low");
        colored::control::unset_override();
    }
}
