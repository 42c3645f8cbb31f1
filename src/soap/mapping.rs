//! Conversion of upstream result elements into output records.
//!
//! Missing child fields become empty strings; the upstream schema marks every
//! field optional and the gateway does not second-guess it.

use crate::model::{Continent, CountryByCurrency, CountryFull, Currency, Language};
use crate::soap::parser::XmlElement;

impl From<&XmlElement> for Language {
    fn from(el: &XmlElement) -> Self {
        Self {
            code: el.child_text("sISOCode").to_string(),
            name: el.child_text("sName").to_string(),
        }
    }
}

impl From<&XmlElement> for Currency {
    fn from(el: &XmlElement) -> Self {
        Self {
            code: el.child_text("sISOCode").to_string(),
            name: el.child_text("sName").to_string(),
        }
    }
}

impl From<&XmlElement> for Continent {
    fn from(el: &XmlElement) -> Self {
        Self {
            code: el.child_text("sCode").to_string(),
            name: el.child_text("sName").to_string(),
        }
    }
}

impl From<&XmlElement> for CountryByCurrency {
    fn from(el: &XmlElement) -> Self {
        Self {
            code: el.child_text("sISOCode").to_string(),
            name: el.child_text("sName").to_string(),
        }
    }
}

impl From<&XmlElement> for CountryFull {
    fn from(el: &XmlElement) -> Self {
        let languages = el
            .child("Languages")
            .map(|langs| list_of(langs, "tLanguage"))
            .unwrap_or_default();

        Self {
            code: el.child_text("sISOCode").to_string(),
            name: el.child_text("sName").to_string(),
            capital: el.child_text("sCapitalCity").to_string(),
            phone_code: el.child_text("sPhoneCode").to_string(),
            continent_code: el.child_text("sContinentCode").to_string(),
            currency_code: el.child_text("sCurrencyISOCode").to_string(),
            flag_url: el.child_text("sCountryFlag").to_string(),
            languages,
        }
    }
}

/// Map every `item` child of `parent`, preserving document order.
pub fn list_of<'a, T>(parent: &'a XmlElement, item: &'a str) -> Vec<T>
where
    T: From<&'a XmlElement>,
{
    parent.children_named(item).map(T::from).collect()
}

/// A record result is absent when it carries no ISO code.
pub fn record_of<'a, T>(result: Option<&'a XmlElement>) -> Option<T>
where
    T: From<&'a XmlElement>,
{
    result
        .filter(|r| !r.child_text("sISOCode").is_empty())
        .map(T::from)
}
