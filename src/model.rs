//! Output records returned by the gateway.
//!
//! Every record is built fresh from a single upstream response and owned by
//! the request that produced it. Field names on the wire follow the camelCase
//! shape clients of the service already depend on.

use serde::{Deserialize, Serialize};

/// Full description of one country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryFull {
    #[serde(rename = "countryCode")]
    pub code: String,

    #[serde(rename = "countryName")]
    pub name: String,

    #[serde(rename = "capitalCity")]
    pub capital: String,

    #[serde(rename = "phoneCode")]
    pub phone_code: String,

    #[serde(rename = "continentCode")]
    pub continent_code: String,

    #[serde(rename = "currencyCode")]
    pub currency_code: String,

    /// URL of the flag image.
    #[serde(rename = "countryFlag")]
    pub flag_url: String,

    /// Spoken languages, in upstream order.
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Language {
    #[serde(rename = "languageCode")]
    pub code: String,

    #[serde(rename = "languageName")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currency {
    #[serde(rename = "currencyCode")]
    pub code: String,

    #[serde(rename = "currencyName")]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Continent {
    #[serde(rename = "continentCode")]
    pub code: String,

    #[serde(rename = "continentName")]
    pub name: String,
}

/// Country entry of the "countries using a currency" list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryByCurrency {
    pub code: String,
    pub name: String,
}
