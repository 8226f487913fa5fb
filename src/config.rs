// ============================================================================
// CONFIG - Application configuration, assembled once at startup
// ============================================================================
// Values come from compile-time env vars (build.rs forwards .env) and are
// passed explicitly through AppState. Nothing here is mutable at runtime.
// ============================================================================

use serde::{Deserialize, Serialize};

/// Asset images, content-addressed on IPFS (disconnected, weekend, minted, not weekend)
pub const IMAGE_INTRO: &str =
    "https://dweb.mypinata.cloud/ipfs/QmTidtsgh4faygkV3Fj1f2gfdLNYCFh3gsgNVWRsGwSQbA";
pub const IMAGE_WEEKEND: &str =
    "https://dweb.mypinata.cloud/ipfs/QmeDejkafV9hwBE2zYmmfUkLb5AjqPFpRUY2XkbLd8iq6n";
pub const IMAGE_MINTED: &str =
    "https://dweb.mypinata.cloud/ipfs/QmZpFMrCFc8Xs3orLBUukiG3f1VfNaHweSZYTB2SyZGyfc";
pub const IMAGE_NOT_WEEKEND: &str =
    "https://dweb.mypinata.cloud/ipfs/QmQgqbUnCVwcXvdXjPMxEvY2vTv9HLY3ZwjG6rQS9Jc8XN";

/// Every image the screens can show, warmed by the preloader
pub const PRELOAD_IMAGES: [&str; 4] = [IMAGE_INTRO, IMAGE_WEEKEND, IMAGE_MINTED, IMAGE_NOT_WEEKEND];

/// Sponsor logo in the footer (served next to index.html)
pub const FOOTER_LOGO: &str = "/pinata.png";

const DEFAULT_CONTRACT_ADDRESS: &str = "0x0000000000000000000000000000000000000000";
const DEFAULT_CHAIN_ID: u64 = 8453;
const DEFAULT_RECEIPT_POLL_INTERVAL_MS: u32 = 4_000;
const DEFAULT_RECEIPT_MAX_POLLS: u32 = 150;
const DEFAULT_SHARE_URL: &str = "https://warpcast.com/~/compose?text=I%20just%20minted%20The%20Weekend%2C%20only%20available%20on%20the%20weekends.%20Get%20yours%20now!&embeds[]=https://theweekend.lol";
const DEFAULT_FOOTER_URL: &str = "https://pinata.cloud";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    pub contract: ContractConfig,
    pub enable_logging: bool,
    pub receipt: ReceiptConfig,
    /// Seconds between isWeekEnd re-queries, 0 = query once per page load
    pub weekend_refresh_seconds: u32,
    pub share_url: String,
    pub footer_url: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractConfig {
    pub address: String,
    pub chain_id: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiptConfig {
    pub poll_interval_ms: u32,
    pub max_polls: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            contract: ContractConfig::default(),
            enable_logging: true,
            receipt: ReceiptConfig::default(),
            weekend_refresh_seconds: 0,
            share_url: DEFAULT_SHARE_URL.to_string(),
            footer_url: DEFAULT_FOOTER_URL.to_string(),
        }
    }
}

impl Default for ContractConfig {
    fn default() -> Self {
        Self {
            address: DEFAULT_CONTRACT_ADDRESS.to_string(),
            chain_id: DEFAULT_CHAIN_ID,
        }
    }
}

impl Default for ReceiptConfig {
    fn default() -> Self {
        Self {
            poll_interval_ms: DEFAULT_RECEIPT_POLL_INTERVAL_MS,
            max_polls: DEFAULT_RECEIPT_MAX_POLLS,
        }
    }
}

impl AppConfig {
    /// Load the configuration from compile-time environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| match key {
            "CONTRACT_ADDRESS" => option_env!("CONTRACT_ADDRESS"),
            "CHAIN_ID" => option_env!("CHAIN_ID"),
            "ENABLE_LOGGING" => option_env!("ENABLE_LOGGING"),
            "RECEIPT_POLL_INTERVAL_MS" => option_env!("RECEIPT_POLL_INTERVAL_MS"),
            "RECEIPT_MAX_POLLS" => option_env!("RECEIPT_MAX_POLLS"),
            "WEEKEND_REFRESH_SECONDS" => option_env!("WEEKEND_REFRESH_SECONDS"),
            "SHARE_URL" => option_env!("SHARE_URL"),
            "FOOTER_URL" => option_env!("FOOTER_URL"),
            _ => None,
        })
    }

    /// Build a configuration from any key lookup, falling back to defaults
    /// for missing or unparsable values
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<&'static str>,
    {
        let defaults = Self::default();
        Self {
            contract: ContractConfig {
                address: lookup("CONTRACT_ADDRESS")
                    .map(|s| s.trim().to_string())
                    .unwrap_or(defaults.contract.address),
                chain_id: parse_or(lookup("CHAIN_ID"), defaults.contract.chain_id),
            },
            enable_logging: parse_or(lookup("ENABLE_LOGGING"), defaults.enable_logging),
            receipt: ReceiptConfig {
                poll_interval_ms: parse_or(
                    lookup("RECEIPT_POLL_INTERVAL_MS"),
                    defaults.receipt.poll_interval_ms,
                ),
                max_polls: parse_or(lookup("RECEIPT_MAX_POLLS"), defaults.receipt.max_polls),
            },
            weekend_refresh_seconds: parse_or(
                lookup("WEEKEND_REFRESH_SECONDS"),
                defaults.weekend_refresh_seconds,
            ),
            share_url: lookup("SHARE_URL")
                .map(str::to_string)
                .unwrap_or(defaults.share_url),
            footer_url: lookup("FOOTER_URL")
                .map(str::to_string)
                .unwrap_or(defaults.footer_url),
        }
    }

    /// Check the values that would make the app silently misbehave
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut problems = Vec::new();

        if !is_hex_address(&self.contract.address) {
            problems.push(format!(
                "CONTRACT_ADDRESS '{}' is not a 0x-prefixed 20-byte hex address",
                self.contract.address
            ));
        } else if self.contract.address == DEFAULT_CONTRACT_ADDRESS {
            problems.push("CONTRACT_ADDRESS is the zero address".to_string());
        }
        if self.receipt.poll_interval_ms == 0 {
            problems.push("RECEIPT_POLL_INTERVAL_MS must be greater than 0".to_string());
        }
        if self.receipt.max_polls == 0 {
            problems.push("RECEIPT_MAX_POLLS must be greater than 0".to_string());
        }

        if problems.is_empty() {
            Ok(())
        } else {
            Err(problems)
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Info
        } else {
            log::Level::Warn
        }
    }
}

fn parse_or<T: std::str::FromStr>(raw: Option<&str>, default: T) -> T {
    raw.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

fn is_hex_address(address: &str) -> bool {
    match address.strip_prefix("0x") {
        Some(hex) => hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
