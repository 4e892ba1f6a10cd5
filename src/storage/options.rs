use mongodb::{bson::doc, options::UpdateOptions, Collection, Database};
use serde::{Deserialize, Serialize};

use crate::types::settings::AffiliateSettings;

// admin-managed name/value records, the platform's option store
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionRecord {
    pub name: String,
    pub value: String,
}

pub async fn get_option(db: &Database, name: &str) -> mongodb::error::Result<Option<String>> {
    let collection: Collection<OptionRecord> = db.collection("options");
    let record = collection.find_one(doc! {"name": name}, None).await?;
    Ok(record.map(|record| record.value))
}

pub async fn set_option(db: &Database, name: &str, value: &str) -> mongodb::error::Result<()> {
    let collection: Collection<OptionRecord> = db.collection("options");
    let options = UpdateOptions::builder().upsert(true).build();
    collection
        .update_one(doc! {"name": name}, doc! {"$set": {"value": value}}, options)
        .await?;
    Ok(())
}

pub fn option_enabled(value: Option<String>) -> bool {
    match value {
        Some(value) => value == "1" || value.to_lowercase() == "true",
        None => false,
    }
}

// materialize one settings snapshot; the affiliate call is attempted even
// when the api key/secret options are unset or blank
pub async fn load_affiliate_settings(db: &Database) -> mongodb::error::Result<AffiliateSettings> {
    let mut settings = AffiliateSettings::default();

    if let Some(value) = get_option(db, "goaffpro_api_key").await? {
        settings.api_key = value;
    }

    if let Some(value) = get_option(db, "goaffpro_api_secret").await? {
        settings.api_secret = value;
    }

    settings.show_refer_and_earn =
        option_enabled(get_option(db, "goaffpro_show_refer_and_earn").await?);
    settings.add_name_fields_to_registration =
        option_enabled(get_option(db, "goaffpro_add_name_fields_to_registration").await?);
    settings.attach_api_credentials =
        option_enabled(get_option(db, "goaffpro_attach_api_credentials").await?);
    settings.skip_if_already_linked =
        option_enabled(get_option(db, "goaffpro_skip_if_already_linked").await?);

    if let Some(value) = get_option(db, "goaffpro_referral_base").await? {
        if !value.is_empty() {
            settings.referral_base = value;
        }
    }

    if let Some(value) = get_option(db, "goaffpro_api_base").await? {
        if !value.is_empty() {
            settings.api_base = value;
        }
    }

    Ok(settings)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn checkbox_style_values_enable_an_option() {
        assert!(option_enabled(Some(String::from("1"))));
        assert!(option_enabled(Some(String::from("true"))));
        assert!(option_enabled(Some(String::from("TRUE"))));
    }

    #[test]
    fn anything_else_leaves_an_option_disabled() {
        assert!(!option_enabled(Some(String::from("0"))));
        assert!(!option_enabled(Some(String::from(""))));
        assert!(!option_enabled(Some(String::from("yes"))));
        assert!(!option_enabled(None));
    }
}
