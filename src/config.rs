//! Configuration management for the reservation desk.
//!
//! Loads configuration from environment variables with sensible defaults.

use crate::payment::{AlwaysApprove, AlwaysDecline, CoinFlipGateway, PaymentGateway};
use serde::{Deserialize, Serialize};
use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Path of the persisted room catalog
    pub rooms_file: PathBuf,
    /// Path of the persisted booking log
    pub bookings_file: PathBuf,
    /// Payment simulator configuration
    pub payment: PaymentConfig,
}

/// Payment simulator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentConfig {
    /// Which simulator answers payment requests
    pub mode: PaymentMode,
    /// Approval probability for the `random` mode (clamped to `[0.0, 1.0]`)
    pub success_rate: f64,
}

/// Payment simulator selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMode {
    /// Every payment succeeds
    Approve,
    /// Every payment is declined
    Decline,
    /// Payments succeed with `success_rate` probability
    Random,
}

impl PaymentMode {
    fn parse(text: &str) -> Option<Self> {
        match text.to_ascii_lowercase().as_str() {
            "approve" => Some(Self::Approve),
            "decline" => Some(Self::Decline),
            "random" => Some(Self::Random),
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// defaults for anything unset or unparseable.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            rooms_file: env::var("FRONTDESK_ROOMS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("rooms.csv")),
            bookings_file: env::var("FRONTDESK_BOOKINGS_FILE")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("bookings.csv")),
            payment: PaymentConfig {
                mode: env::var("FRONTDESK_PAYMENT_MODE")
                    .ok()
                    .and_then(|s| PaymentMode::parse(&s))
                    .unwrap_or(PaymentMode::Random),
                success_rate: env::var("FRONTDESK_PAYMENT_SUCCESS_RATE")
                    .ok()
                    .and_then(|s| s.parse().ok())
                    .unwrap_or(0.8),
            },
        }
    }
}

impl PaymentConfig {
    /// Builds the configured payment collaborator
    #[must_use]
    pub fn gateway(&self) -> Box<dyn PaymentGateway> {
        match self.mode {
            PaymentMode::Approve => Box::new(AlwaysApprove),
            PaymentMode::Decline => Box::new(AlwaysDecline),
            PaymentMode::Random => Box::new(CoinFlipGateway::new(self.success_rate)),
        }
    }
}
