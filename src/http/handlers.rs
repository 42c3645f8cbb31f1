//! Request handlers, one per route.
//!
//! Handlers extract the single path identifier, call the service and
//! serialise the result. Absent scalars and records become `null`,
//! empty collections become `[]`.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::model::{Continent, CountryByCurrency, CountryFull, Currency, Language};

type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "operational",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn capital_city(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Option<String>> {
    tracing::debug!(code = %code, "Capital city lookup");
    Ok(Json(state.service.capital_city(&code).await?))
}

pub async fn countries_by_currency(
    State(state): State<AppState>,
    Path(currency_code): Path<String>,
) -> ApiResult<Vec<CountryByCurrency>> {
    tracing::debug!(currency_code = %currency_code, "Countries by currency lookup");
    Ok(Json(state.service.countries_by_currency(&currency_code).await?))
}

pub async fn currency_of_country(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Option<Currency>> {
    tracing::debug!(code = %code, "Country currency lookup");
    Ok(Json(state.service.currency_of_country(&code).await?))
}

pub async fn phone_code(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Option<String>> {
    tracing::debug!(code = %code, "Phone code lookup");
    Ok(Json(state.service.phone_code(&code).await?))
}

pub async fn country_code(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> ApiResult<String> {
    tracing::debug!(name = %name, "Country code lookup");
    Ok(Json(state.service.country_code(&name).await?))
}

pub async fn country_name(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Option<String>> {
    tracing::debug!(code = %code, "Country name lookup");
    Ok(Json(state.service.country_name(&code).await?))
}

pub async fn currency_name(
    State(state): State<AppState>,
    Path(currency_code): Path<String>,
) -> ApiResult<Option<String>> {
    tracing::debug!(currency_code = %currency_code, "Currency name lookup");
    Ok(Json(state.service.currency_name(&currency_code).await?))
}

pub async fn full_info(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> ApiResult<Option<CountryFull>> {
    tracing::debug!(code = %code, "Full country info lookup");
    Ok(Json(state.service.full_info(&code).await?))
}

pub async fn all_countries(State(state): State<AppState>) -> ApiResult<Vec<CountryFull>> {
    Ok(Json(state.service.all_countries().await?))
}

pub async fn language_code(
    State(state): State<AppState>,
    Path(lang_name): Path<String>,
) -> ApiResult<Option<String>> {
    tracing::debug!(lang_name = %lang_name, "Language code lookup");
    Ok(Json(state.service.language_code(&lang_name).await?))
}

pub async fn language_name(
    State(state): State<AppState>,
    Path(lang_code): Path<String>,
) -> ApiResult<Option<String>> {
    tracing::debug!(lang_code = %lang_code, "Language name lookup");
    Ok(Json(state.service.language_name(&lang_code).await?))
}

pub async fn all_continents(State(state): State<AppState>) -> ApiResult<Vec<Continent>> {
    Ok(Json(state.service.all_continents().await?))
}

pub async fn all_currencies(State(state): State<AppState>) -> ApiResult<Vec<Currency>> {
    Ok(Json(state.service.all_currencies().await?))
}

pub async fn all_languages(State(state): State<AppState>) -> ApiResult<Vec<Language>> {
    Ok(Json(state.service.all_languages().await?))
}
