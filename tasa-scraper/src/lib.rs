//! # Tasa Scraper
//!
//! Concrete upstream adapter for the exchange-rate service. This crate
//! implements the `RateSource` port by scraping the official USD rate off
//! the BCV homepage.

mod bcv;

pub use bcv::BcvScraper;
