use clap::Parser;
use tracing::info;

pub const DEFAULT_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vTE16CfbUQiYoq6lrYJ27UENAYJWQ2lPtkE4eHUMMGKHnfdZ5d-BwR0gD1eom3IwPuEtVOgG73Y-QKR/pub?gid=0&single=true&output=csv";

/// Process-wide settings, parsed once at startup and read-only afterwards.
///
/// Every flag can also come from the environment, the flag wins.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Config {
    /// Port to host on
    #[arg(long, env = "LUNCH_PORT", default_value_t = 8081)]
    pub port: u16,

    /// Address to bind the listener to
    #[arg(long, env = "LUNCH_BIND", default_value = "0.0.0.0")]
    pub bind: String,

    /// Public URL of the published sheet CSV
    #[arg(long = "csvurl", env = "LUNCH_CSV_URL", default_value = DEFAULT_CSV_URL)]
    pub csv_url: String,

    /// Index of the header row with the column names
    #[arg(long, env = "LUNCH_HEADER", default_value_t = 3)]
    pub header: usize,

    /// IANA timezone used to decide what "today" is
    #[arg(long = "tz", env = "LUNCH_TZ", default_value = "Europe/Brussels")]
    pub timezone: String,

    /// Subject of the order email
    #[arg(long, env = "LUNCH_SUBJECT", default_value = "Order")]
    pub subject: String,

    /// Recipient of the order email
    #[arg(long, env = "LUNCH_EMAIL", default_value = "test@example.org")]
    pub email: String,

    /// Link to the sheet where people fill in their order
    #[arg(long = "sheet-url", env = "LUNCH_SHEET_URL", default_value = "https://example.com")]
    pub sheet_url: String,
}

impl Config {
    pub fn address(&self) -> String {
        format!("{}:{}", self.bind, self.port)
    }

    pub fn log(&self) {
        info!("CSV source: {}", self.csv_url);
        info!("Header row index: {}", self.header);
        info!("Timezone: {}", self.timezone);
        info!("Mail to {} with subject {:?}", self.email, self.subject);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["lunchweb"]).unwrap();

        assert_eq!(config.port, 8081);
        assert_eq!(config.header, 3);
        assert_eq!(config.timezone, "Europe/Brussels");
        assert_eq!(config.subject, "Order");
        assert_eq!(config.csv_url, DEFAULT_CSV_URL);
        assert_eq!(config.address(), "0.0.0.0:8081");
    }

    #[test]
    fn test_flags() {
        let config = Config::try_parse_from([
            "lunchweb",
            "--port",
            "9000",
            "--csvurl",
            "http://localhost/sheet.csv",
            "--header",
            "0",
            "--tz",
            "UTC",
            "--sheet-url",
            "http://localhost/edit",
        ])
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.csv_url, "http://localhost/sheet.csv");
        assert_eq!(config.header, 0);
        assert_eq!(config.timezone, "UTC");
        assert_eq!(config.sheet_url, "http://localhost/edit");
    }

    #[test]
    fn test_invalid_port() {
        assert!(Config::try_parse_from(["lunchweb", "--port", "lunch"]).is_err());
    }
}
