use serde::{Deserialize, Serialize};

pub const DEFAULT_API_BASE: &str = "https://api.goaffpro.com";
pub const DEFAULT_REFERRAL_BASE: &str = "https://your-goaffpro-domain.com/";

// one snapshot of the admin-managed options, loaded per invocation so every
// field used in a single affiliate call comes from the same read
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AffiliateSettings {
    pub api_key: String,
    pub api_secret: String,
    pub show_refer_and_earn: bool,
    pub add_name_fields_to_registration: bool,
    pub attach_api_credentials: bool,
    pub skip_if_already_linked: bool,
    pub referral_base: String,
    pub api_base: String,
}

impl Default for AffiliateSettings {
    fn default() -> AffiliateSettings {
        AffiliateSettings {
            api_key: String::new(),
            api_secret: String::new(),
            show_refer_and_earn: false,
            add_name_fields_to_registration: false,
            attach_api_credentials: false,
            skip_if_already_linked: false,
            referral_base: String::from(DEFAULT_REFERRAL_BASE),
            api_base: String::from(DEFAULT_API_BASE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_the_production_api() {
        let settings = AffiliateSettings::default();
        assert_eq!(settings.api_base, "https://api.goaffpro.com");
        assert!(!settings.attach_api_credentials);
        assert!(!settings.skip_if_already_linked);
        assert!(!settings.show_refer_and_earn);
        assert!(!settings.add_name_fields_to_registration);
    }
}
