use clap::{Parser, Subcommand};
use serde_json::Value;
use url::Url;

#[derive(Parser)]
#[command(name = "country-cli")]
#[command(about = "Query a running country information gateway", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080", env = "GATEWAY_URL")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Capital city of a country
    Capital { code: String },
    /// Countries using a currency
    ByCurrency { currency_code: String },
    /// Currency of a country
    Currency { code: String },
    /// International phone code of a country
    Phone { code: String },
    /// ISO code of a country by name
    Code { name: String },
    /// Name of a country by ISO code
    Name { code: String },
    /// Name of a currency by ISO code
    CurrencyName { currency_code: String },
    /// Full information about a country
    Info { code: String },
    /// Full information about every country
    All,
    /// ISO code of a language by name
    LangCode { name: String },
    /// Name of a language by ISO code
    LangName { code: String },
    /// All continents
    Continents,
    /// All currencies
    Currencies,
    /// All languages
    Languages,
    /// Gateway health
    Health,
}

impl Commands {
    /// Path segments of the route; identifiers stay single segments.
    fn segments(&self) -> Vec<&str> {
        match self {
            Commands::Capital { code } => vec!["country", code.as_str(), "capital"],
            Commands::ByCurrency { currency_code } => vec!["country", "currency-code", currency_code.as_str()],
            Commands::Currency { code } => vec!["country", code.as_str(), "currency"],
            Commands::Phone { code } => vec!["country", code.as_str(), "phone"],
            Commands::Code { name } => vec!["country", "name", name.as_str()],
            Commands::Name { code } => vec!["country", code.as_str(), "name"],
            Commands::CurrencyName { currency_code } => {
                vec!["country", "currency", "currency-code", currency_code.as_str()]
            }
            Commands::Info { code } => vec!["country", code.as_str(), "full", "info"],
            Commands::All => vec!["country", "all"],
            Commands::LangCode { name } => vec!["country", "language", "lang-name", name.as_str()],
            Commands::LangName { code } => vec!["country", "language", "lang-code", code.as_str()],
            Commands::Continents => vec!["country", "continents"],
            Commands::Currencies => vec!["country", "currencies"],
            Commands::Languages => vec!["country", "languages"],
            Commands::Health => vec!["health"],
        }
    }
}

/// Resolve the request URL, percent-encoding each segment.
fn target_url(base: &str, command: &Commands) -> Result<Url, Box<dyn std::error::Error>> {
    let mut url = Url::parse(base)?;
    url.path_segments_mut()
        .map_err(|_| format!("gateway URL '{}' cannot carry a path", base))?
        .pop_if_empty()
        .extend(command.segments());
    Ok(url)
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();

    let target = target_url(&cli.url, &cli.command)?;

    let res = client.get(target).send().await?;
    print_response(res).await
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: gateway returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifiers_are_encoded_as_one_segment() {
        let url = target_url(
            "http://localhost:8080",
            &Commands::Code { name: "Trinidad/Tobago?#".into() },
        )
        .unwrap();
        assert_eq!(url.path(), "/country/name/Trinidad%2FTobago%3F%23");
        assert!(url.query().is_none());
        assert!(url.fragment().is_none());
    }

    #[test]
    fn test_base_path_is_kept() {
        let url = target_url("http://gw.local/api/", &Commands::Capital { code: "us".into() }).unwrap();
        assert_eq!(url.as_str(), "http://gw.local/api/country/us/capital");

        let health = target_url("http://gw.local", &Commands::Health).unwrap();
        assert_eq!(health.as_str(), "http://gw.local/health");
    }

    #[test]
    fn test_rejects_non_base_url() {
        assert!(target_url("mailto:ops@example.com", &Commands::All).is_err());
    }
}
