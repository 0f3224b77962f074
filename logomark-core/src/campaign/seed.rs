//! Seed strings: every hashed brief field, the generation key and the
//! variant index joined by `|`.

use super::CampaignConfig;

pub const SEED_DELIMITER: char = '|';

/// Structure and palette are deliberately not part of the seed; they only
/// steer how draws are interpreted.
pub fn seed_string(config: &CampaignConfig, generation_key: &str, index: usize) -> String {
    let fields = [
        config.brand.as_str(),
        config.campaign_goal.as_str(),
        config.tagline.as_str(),
        config.keywords.as_str(),
        config.audience.as_str(),
        config.tone.as_str(),
        generation_key,
    ];
    let mut seed = String::with_capacity(fields.iter().map(|f| f.len() + 1).sum::<usize>() + 2);
    for field in fields {
        seed.push_str(field);
        seed.push(SEED_DELIMITER);
    }
    seed.push_str(&index.to_string());
    seed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::campaign::{Structure, Tone};

    fn golden() -> CampaignConfig {
        CampaignConfig {
            brand: "Acme".into(),
            keywords: "fast,bold".into(),
            tone: Tone::Bold,
            structure: Structure::IconLeft,
            palette_id: "neo-nebula".into(),
            ..Default::default()
        }
    }

    #[test]
    fn golden_seed() {
        assert_eq!(seed_string(&golden(), "abc", 0), "Acme|||fast,bold||bold|abc|0");
    }

    #[test]
    fn tagline_precedes_keywords() {
        let cfg = CampaignConfig { tagline: "T".into(), keywords: "K".into(), audience: "A".into(), ..golden() };
        assert_eq!(seed_string(&cfg, "abc", 0), "Acme||T|K|A|bold|abc|0");
    }

    #[test]
    fn index_changes_suffix_only() {
        let cfg = golden();
        let seeds: Vec<String> = (0..3).map(|i| seed_string(&cfg, "abc", i)).collect();
        assert_eq!(seeds[1], "Acme|||fast,bold||bold|abc|1");
        assert_ne!(seeds[0], seeds[2]);
    }

    #[test]
    fn every_hashed_field_changes_the_seed() {
        let base = golden();
        let reference = seed_string(&base, "abc", 0);
        let edits: [fn(&mut CampaignConfig); 6] = [
            |c| c.brand.push('!'),
            |c| c.campaign_goal.push('!'),
            |c| c.tagline.push('!'),
            |c| c.keywords.push('!'),
            |c| c.audience.push('!'),
            |c| c.tone = Tone::Organic,
        ];
        for edit in edits {
            let mut cfg = base.clone();
            edit(&mut cfg);
            assert_ne!(seed_string(&cfg, "abc", 0), reference);
        }
        assert_ne!(seed_string(&base, "abd", 0), reference);
    }

    #[test]
    fn structure_and_palette_are_not_hashed() {
        let mut cfg = golden();
        cfg.structure = Structure::IconTop;
        cfg.palette_id = "velvet-noir".into();
        assert_eq!(seed_string(&cfg, "abc", 0), seed_string(&golden(), "abc", 0));
    }
}
