//! Upstream SOAP operations and their element names.

/// Target namespace of the country information service.
pub const SERVICE_NAMESPACE: &str = "http://www.oorsprong.org/websamples.countryinfo";

/// One operation of the upstream service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    CapitalCity,
    CountriesUsingCurrency,
    CountryCurrency,
    CountryIntPhoneCode,
    CountryIsoCode,
    CountryName,
    CurrencyName,
    FullCountryInfo,
    FullCountryInfoAllCountries,
    LanguageIsoCode,
    LanguageName,
    ListOfContinentsByName,
    ListOfCurrenciesByName,
    ListOfLanguagesByName,
}

impl Operation {
    /// Request element name, also the operation name on the wire.
    pub fn element_name(&self) -> &'static str {
        match self {
            Self::CapitalCity => "CapitalCity",
            Self::CountriesUsingCurrency => "CountriesUsingCurrency",
            Self::CountryCurrency => "CountryCurrency",
            Self::CountryIntPhoneCode => "CountryIntPhoneCode",
            Self::CountryIsoCode => "CountryISOCode",
            Self::CountryName => "CountryName",
            Self::CurrencyName => "CurrencyName",
            Self::FullCountryInfo => "FullCountryInfo",
            Self::FullCountryInfoAllCountries => "FullCountryInfoAllCountries",
            Self::LanguageIsoCode => "LanguageISOCode",
            Self::LanguageName => "LanguageName",
            Self::ListOfContinentsByName => "ListOfContinentsByName",
            Self::ListOfCurrenciesByName => "ListOfCurrenciesByName",
            Self::ListOfLanguagesByName => "ListOfLanguagesByName",
        }
    }

    /// Child element carrying the identifier; `None` for list operations.
    pub fn parameter_name(&self) -> Option<&'static str> {
        match self {
            Self::CapitalCity
            | Self::CountryCurrency
            | Self::CountryIntPhoneCode
            | Self::CountryName
            | Self::FullCountryInfo => Some("sCountryISOCode"),
            Self::CountriesUsingCurrency => Some("sISOCurrencyCode"),
            Self::CountryIsoCode => Some("sCountryName"),
            Self::CurrencyName => Some("sCurrencyISOCode"),
            Self::LanguageIsoCode => Some("sLanguageName"),
            Self::LanguageName => Some("sISOCode"),
            Self::FullCountryInfoAllCountries
            | Self::ListOfContinentsByName
            | Self::ListOfCurrenciesByName
            | Self::ListOfLanguagesByName => None,
        }
    }

    pub fn response_name(&self) -> String {
        format!("{}Response", self.element_name())
    }

    pub fn result_name(&self) -> String {
        format!("{}Result", self.element_name())
    }
}

impl std::fmt::Display for Operation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.element_name())
    }
}
