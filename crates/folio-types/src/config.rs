//! Runtime configuration for the folio terminal.

use serde::Deserialize;

use crate::error::Result;

/// Configuration for the terminal shell: prompt marker, identity, and the
/// targets of the external-link and download commands.
///
/// All fields have built-in defaults matching the hosted portfolio, so a
/// config file is optional. TOML overrides may supply any subset.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FolioConfig {
    /// Prompt marker echoed in front of every submitted line.
    pub prompt: String,
    /// Identity string printed by `whoami`.
    pub identity: String,
    /// URL opened by the `github` command.
    pub github_url: String,
    /// URL opened by the `linkedin` command.
    pub linkedin_url: String,
    /// Filename passed to the host download capability by `cat resume.pdf`.
    pub resume_file: String,
}

impl Default for FolioConfig {
    fn default() -> Self {
        Self {
            prompt: "$".to_string(),
            identity: "developer@portfolio:~$".to_string(),
            github_url: "https://github.com".to_string(),
            linkedin_url: "https://linkedin.com".to_string(),
            resume_file: "resume.pdf".to_string(),
        }
    }
}

impl FolioConfig {
    /// Parse a config from TOML text. Missing keys keep their defaults.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_values() {
        let cfg = FolioConfig::default();
        assert_eq!(cfg.prompt, "$");
        assert_eq!(cfg.identity, "developer@portfolio:~$");
        assert_eq!(cfg.resume_file, "resume.pdf");
    }

    #[test]
    fn toml_partial_override() {
        let cfg = FolioConfig::from_toml_str("prompt = \"❯\"\n").unwrap();
        assert_eq!(cfg.prompt, "❯");
        // Untouched keys keep defaults.
        assert_eq!(cfg.github_url, "https://github.com");
    }

    #[test]
    fn toml_full_override() {
        let cfg = FolioConfig::from_toml_str(
            r#"
prompt = ">"
identity = "guest@folio:~$"
github_url = "https://github.com/guest"
linkedin_url = "https://linkedin.com/in/guest"
resume_file = "cv.pdf"
"#,
        )
        .unwrap();
        assert_eq!(cfg.identity, "guest@folio:~$");
        assert_eq!(cfg.resume_file, "cv.pdf");
    }

    #[test]
    fn toml_invalid_is_error() {
        assert!(FolioConfig::from_toml_str("prompt = [[[").is_err());
    }
}
