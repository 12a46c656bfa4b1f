use serde::{Deserialize, Serialize};

/// Client settings. Every field has a default, so a partial JSON document
/// (or none at all) is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    pub analyze_url: String,
    pub re_recommend_url: String,
    pub export: ExportConfig,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            analyze_url: "/api/analyze".to_string(),
            re_recommend_url: "/api/re-recommend".to_string(),
            export: ExportConfig::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// Capture resolution multiplier.
    pub scale: f64,
    pub background: String,
    pub file_prefix: String,
    pub page_width_mm: f64,
    pub page_height_mm: f64,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            scale: 3.0,
            background: "#ffffff".to_string(),
            file_prefix: "Winter_Outfit_Recommendation".to_string(),
            page_width_mm: 210.0,
            page_height_mm: 297.0,
        }
    }
}

impl ExportConfig {
    /// Scale and page sizes must be finite and positive.
    pub fn is_valid(&self) -> bool {
        [self.scale, self.page_width_mm, self.page_height_mm]
            .iter()
            .all(|value| value.is_finite() && *value > 0.0)
    }
}

impl ClientConfig {
    /// Parses the page-supplied config. An unusable export section is
    /// replaced by the defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let mut config: ClientConfig = serde_json::from_str(json)?;
        if !config.export.is_valid() {
            log::warn!("Ignoring invalid export settings: {:?}", config.export);
            config.export = ExportConfig::default();
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config =
            ClientConfig::from_json(r#"{"analyze_url": "/v2/analyze", "export": {"scale": 2}}"#)
                .unwrap();
        assert_eq!(config.analyze_url, "/v2/analyze");
        assert_eq!(config.re_recommend_url, "/api/re-recommend");
        assert_eq!(config.export.scale, 2.0);
        assert_eq!(config.export.page_height_mm, 297.0);
    }

    #[test]
    fn test_empty_object_is_default() {
        assert_eq!(ClientConfig::from_json("{}").unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_unusable_export_sizes_fall_back() {
        for export in [
            r#"{"page_height_mm": 0}"#,
            r#"{"page_width_mm": -210}"#,
            r#"{"scale": 0}"#,
        ] {
            let json = format!(r#"{{"analyze_url": "/x", "export": {export}}}"#);
            let config = ClientConfig::from_json(&json).unwrap();
            assert_eq!(config.export, ExportConfig::default(), "{export}");
            assert_eq!(config.analyze_url, "/x");
        }
    }

    #[test]
    fn test_invalid_json_is_an_error() {
        assert!(ClientConfig::from_json("{analyze_url").is_err());
    }
}
