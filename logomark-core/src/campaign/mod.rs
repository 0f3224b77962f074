pub mod schema;
pub mod seed;

use anyhow::{Context, Result};
pub use schema::{CampaignConfig, Structure, Tone};
pub use seed::seed_string;

pub fn load_from_yaml_str(s: &str) -> Result<CampaignConfig> {
    let brief: CampaignConfig = serde_yaml::from_str(s)?;
    Ok(brief)
}

pub fn load_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<CampaignConfig> {
    let path = path.as_ref();
    let data = std::fs::read_to_string(path)
        .with_context(|| format!("reading campaign brief {}", path.display()))?;
    load_from_yaml_str(&data)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn loads_partial_brief_with_defaults() {
        let brief = load_from_yaml_str("brand: Acme\ntone: bold\nstructure: icon-top\n").unwrap();
        assert_eq!(brief.brand, "Acme");
        assert_eq!(brief.tone, Tone::Bold);
        assert_eq!(brief.structure, Structure::IconTop);
        assert_eq!(brief.tagline, "");
        assert_eq!(brief.palette_id, "neo-nebula");
    }

    #[test]
    fn accepts_camel_case_keys() {
        let brief = load_from_yaml_str("campaignGoal: Grow\npaletteId: velvet-noir\n").unwrap();
        assert_eq!(brief.campaign_goal, "Grow");
        assert_eq!(brief.palette_id, "velvet-noir");
    }

    #[test]
    fn rejects_unknown_tone() {
        assert!(load_from_yaml_str("tone: grumpy\n").is_err());
    }

    #[test]
    fn loads_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "brand: Filed\nkeywords: \"a, b\"").unwrap();
        let brief = load_from_path(file.path()).unwrap();
        assert_eq!(brief.brand, "Filed");
        assert_eq!(brief.keyword_tokens(), vec!["a", "b"]);
    }

    #[test]
    fn missing_file_reports_path() {
        let err = load_from_path("/nonexistent/brief.yaml").unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/brief.yaml"));
    }
}
