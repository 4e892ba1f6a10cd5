#[derive(Debug)]
#[allow(dead_code)]
pub enum APIMessages {
    // Generic Errors
    InternalServerError,
    BadRequest,
    Unauthorized,
    NotFound,
    // Token
    Token(TokenMessages),
    // Generic
    Input(InputMessages),
    // Email
    Email(EmailMessages),
    // Storage
    Mongo(MongoMessages),
    Redis(RedisMessages),
    // Customer
    Customer(CustomerMessages),
    // Affiliate
    Affiliate(AffiliateMessages),
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum TokenMessages {
    NotSigningKeyFound,
    ErrorCreating,
    Expired,
    ErrorValidating,
    NotAuthorizationHeader,
    ErrorParsingToken,
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum InputMessages {
    InvalidPasswordLength,
    PasswordMustHaveAtLeastOneLetterAndOneNumber,
    PasswordConfirmationMustMatch,
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum CustomerMessages {
    Created,
    Found,
    NotFound,
    NotAcceptedTerms,
    IncorrectPassword,
    ErrorVerifyingPassword,
    ErrorHashingPassword,
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum MongoMessages {
    ErrorInserting,
    ErrorFinding,
    ErrorUpdating,
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum RedisMessages {
    ErrorFetching,
    ErrorSettingKey,
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum EmailMessages {
    Invalid,
    Taken,
    EmailAndPasswordMustBeDifferent,
}

#[derive(Debug)]
#[allow(dead_code)]
pub enum AffiliateMessages {
    AccountCreated,
    AlreadyLinked,
    ErrorCreatingAccount,
    ReferAndEarnDisabled,
    NoAccountYet,
    ReferralLink,
    Settings,
    SettingsUpdated,
}

impl ToString for APIMessages {
    fn to_string(&self) -> String {
        match self {
            APIMessages::InternalServerError => "generic.internal_server_error".to_string(),
            APIMessages::BadRequest => "generic.bad_request".to_string(),
            APIMessages::Unauthorized => "generic.unauthorized".to_string(),
            APIMessages::NotFound => "generic.not_found".to_string(),
            APIMessages::Token(token_message) => token_message.to_string(),
            APIMessages::Input(input_message) => input_message.to_string(),
            APIMessages::Email(email_message) => email_message.to_string(),
            APIMessages::Mongo(mongo_message) => mongo_message.to_string(),
            APIMessages::Redis(redis_message) => redis_message.to_string(),
            APIMessages::Customer(customer_message) => customer_message.to_string(),
            APIMessages::Affiliate(affiliate_message) => affiliate_message.to_string(),
        }
    }
}

impl ToString for TokenMessages {
    fn to_string(&self) -> String {
        match self {
            TokenMessages::NotSigningKeyFound => "token.not_signing_key_found".to_string(),
            TokenMessages::ErrorCreating => "token.error_creating".to_string(),
            TokenMessages::Expired => "token.expired".to_string(),
            TokenMessages::ErrorValidating => "token.error_validating".to_string(),
            TokenMessages::NotAuthorizationHeader => "token.not_authorization_header".to_string(),
            TokenMessages::ErrorParsingToken => "token.error_parsing_token".to_string(),
        }
    }
}

impl ToString for InputMessages {
    fn to_string(&self) -> String {
        match self {
            InputMessages::InvalidPasswordLength => "generic.invalid_password_length".to_string(),
            InputMessages::PasswordMustHaveAtLeastOneLetterAndOneNumber => {
                "generic.password_must_have_at_least_one_letter_and_one_number".to_string()
            }
            InputMessages::PasswordConfirmationMustMatch => {
                "generic.password_confirmation_must_match".to_string()
            }
        }
    }
}

impl ToString for CustomerMessages {
    fn to_string(&self) -> String {
        match self {
            CustomerMessages::Created => "customer.created".to_string(),
            CustomerMessages::Found => "customer.found".to_string(),
            CustomerMessages::NotFound => "customer.not_found".to_string(),
            CustomerMessages::NotAcceptedTerms => "customer.not_accepted_terms".to_string(),
            CustomerMessages::IncorrectPassword => "customer.incorrect_password".to_string(),
            CustomerMessages::ErrorVerifyingPassword => "customer.error_verifying_password".to_string(),
            CustomerMessages::ErrorHashingPassword => "customer.error_hashing_password".to_string(),
        }
    }
}

impl ToString for MongoMessages {
    fn to_string(&self) -> String {
        match self {
            MongoMessages::ErrorInserting => "storage.mongo_error_inserting".to_string(),
            MongoMessages::ErrorFinding => "storage.mongo_error_finding".to_string(),
            MongoMessages::ErrorUpdating => "storage.mongo_error_updating".to_string(),
        }
    }
}

impl ToString for RedisMessages {
    fn to_string(&self) -> String {
        match self {
            RedisMessages::ErrorFetching => "storage.redis_error_fetching".to_string(),
            RedisMessages::ErrorSettingKey => "storage.redis_error_setting_key".to_string(),
        }
    }
}

impl ToString for EmailMessages {
    fn to_string(&self) -> String {
        match self {
            EmailMessages::Invalid => "email.invalid".to_string(),
            EmailMessages::Taken => "email.taken".to_string(),
            EmailMessages::EmailAndPasswordMustBeDifferent => {
                "email.and_password_must_be_different".to_string()
            }
        }
    }
}

impl ToString for AffiliateMessages {
    fn to_string(&self) -> String {
        match self {
            AffiliateMessages::AccountCreated => "affiliate.account_created".to_string(),
            AffiliateMessages::AlreadyLinked => "affiliate.already_linked".to_string(),
            // shown directly to the shopper when the upstream call failed
            AffiliateMessages::ErrorCreatingAccount => {
                "an error occurred while creating the affiliate account".to_string()
            }
            AffiliateMessages::ReferAndEarnDisabled => "affiliate.refer_and_earn_disabled".to_string(),
            AffiliateMessages::NoAccountYet => "affiliate.no_account_yet".to_string(),
            AffiliateMessages::ReferralLink => "affiliate.referral_link".to_string(),
            AffiliateMessages::Settings => "affiliate.settings".to_string(),
            AffiliateMessages::SettingsUpdated => "affiliate.settings_updated".to_string(),
        }
    }
}
