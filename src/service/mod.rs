//! Normalisation layer between the HTTP handlers and the upstream client.
//!
//! Each operation canonicalises its identifier and delegates one-to-one.
//! Results come back unmodified.

pub mod normalize;

use std::sync::Arc;

use crate::model::{Continent, CountryByCurrency, CountryFull, Currency, Language};
use crate::upstream::{CountryInfoUpstream, UpstreamResult};

/// Country information service, shared by all request handlers.
#[derive(Clone)]
pub struct CountryService {
    upstream: Arc<dyn CountryInfoUpstream>,
}

impl CountryService {
    pub fn new(upstream: Arc<dyn CountryInfoUpstream>) -> Self {
        Self { upstream }
    }

    pub async fn capital_city(&self, country_code: &str) -> UpstreamResult<Option<String>> {
        self.upstream.capital_city(&normalize::iso_code(country_code)).await
    }

    pub async fn countries_by_currency(&self, currency_code: &str) -> UpstreamResult<Vec<CountryByCurrency>> {
        self.upstream
            .countries_by_currency(&normalize::iso_code(currency_code))
            .await
    }

    pub async fn currency_of_country(&self, country_code: &str) -> UpstreamResult<Option<Currency>> {
        self.upstream
            .currency_of_country(&normalize::iso_code(country_code))
            .await
    }

    pub async fn phone_code(&self, country_code: &str) -> UpstreamResult<Option<String>> {
        self.upstream.phone_code(&normalize::iso_code(country_code)).await
    }

    pub async fn country_code(&self, country_name: &str) -> UpstreamResult<String> {
        self.upstream
            .country_code(&normalize::country_name(country_name))
            .await
    }

    pub async fn country_name(&self, country_code: &str) -> UpstreamResult<Option<String>> {
        self.upstream.country_name(&normalize::iso_code(country_code)).await
    }

    pub async fn currency_name(&self, currency_code: &str) -> UpstreamResult<Option<String>> {
        self.upstream.currency_name(&normalize::iso_code(currency_code)).await
    }

    pub async fn full_info(&self, country_code: &str) -> UpstreamResult<Option<CountryFull>> {
        self.upstream.full_info(&normalize::iso_code(country_code)).await
    }

    pub async fn all_countries(&self) -> UpstreamResult<Vec<CountryFull>> {
        self.upstream.all_countries().await
    }

    /// Language names pass through unchanged.
    pub async fn language_code(&self, language_name: &str) -> UpstreamResult<Option<String>> {
        self.upstream.language_code(language_name).await
    }

    /// Language codes pass through unchanged.
    pub async fn language_name(&self, language_code: &str) -> UpstreamResult<Option<String>> {
        self.upstream.language_name(language_code).await
    }

    pub async fn all_continents(&self) -> UpstreamResult<Vec<Continent>> {
        self.upstream.all_continents().await
    }

    pub async fn all_currencies(&self) -> UpstreamResult<Vec<Currency>> {
        self.upstream.all_currencies().await
    }

    pub async fn all_languages(&self) -> UpstreamResult<Vec<Language>> {
        self.upstream.all_languages().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Records every identifier it receives and echoes it back.
    #[derive(Default)]
    struct Recorder {
        seen: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn record(&self, id: &str) -> Option<String> {
            self.seen.lock().unwrap().push(id.to_string());
            Some(id.to_string())
        }

        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl CountryInfoUpstream for Recorder {
        async fn capital_city(&self, c: &str) -> UpstreamResult<Option<String>> {
            Ok(self.record(c))
        }
        async fn countries_by_currency(&self, c: &str) -> UpstreamResult<Vec<CountryByCurrency>> {
            self.record(c);
            Ok(Vec::new())
        }
        async fn currency_of_country(&self, c: &str) -> UpstreamResult<Option<Currency>> {
            self.record(c);
            Ok(None)
        }
        async fn phone_code(&self, c: &str) -> UpstreamResult<Option<String>> {
            Ok(self.record(c))
        }
        async fn country_code(&self, n: &str) -> UpstreamResult<String> {
            Ok(self.record(n).unwrap_or_default())
        }
        async fn country_name(&self, c: &str) -> UpstreamResult<Option<String>> {
            Ok(self.record(c))
        }
        async fn currency_name(&self, c: &str) -> UpstreamResult<Option<String>> {
            Ok(self.record(c))
        }
        async fn full_info(&self, c: &str) -> UpstreamResult<Option<CountryFull>> {
            self.record(c);
            Ok(None)
        }
        async fn all_countries(&self) -> UpstreamResult<Vec<CountryFull>> {
            Ok(Vec::new())
        }
        async fn language_code(&self, n: &str) -> UpstreamResult<Option<String>> {
            Ok(self.record(n))
        }
        async fn language_name(&self, c: &str) -> UpstreamResult<Option<String>> {
            Ok(self.record(c))
        }
        async fn all_continents(&self) -> UpstreamResult<Vec<Continent>> {
            Ok(Vec::new())
        }
        async fn all_currencies(&self) -> UpstreamResult<Vec<Currency>> {
            Ok(Vec::new())
        }
        async fn all_languages(&self) -> UpstreamResult<Vec<Language>> {
            Ok(Vec::new())
        }
    }

    #[tokio::test]
    async fn test_codes_are_uppercased_before_delegation() {
        let recorder = Arc::new(Recorder::default());
        let service = CountryService::new(recorder.clone());

        service.capital_city("us").await.unwrap();
        service.countries_by_currency("eur").await.unwrap();
        service.currency_of_country("zzz").await.unwrap();
        service.phone_code("De").await.unwrap();
        service.country_name("fr").await.unwrap();
        service.currency_name("chf").await.unwrap();
        service.full_info("gb").await.unwrap();

        assert_eq!(recorder.seen(), vec!["US", "EUR", "ZZZ", "DE", "FR", "CHF", "GB"]);
    }

    #[tokio::test]
    async fn test_country_name_is_title_cased() {
        let recorder = Arc::new(Recorder::default());
        let service = CountryService::new(recorder.clone());

        let code = service.country_code("NETHERLANDS").await.unwrap();
        assert_eq!(code, "Netherlands");
        assert_eq!(recorder.seen(), vec!["Netherlands"]);
    }

    #[tokio::test]
    async fn test_language_identifiers_pass_through() {
        let recorder = Arc::new(Recorder::default());
        let service = CountryService::new(recorder.clone());

        service.language_code("english").await.unwrap();
        service.language_name("En").await.unwrap();

        assert_eq!(recorder.seen(), vec!["english", "En"]);
    }
}
