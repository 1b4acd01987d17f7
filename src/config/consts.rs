// src/config/consts.rs

// Site
pub const BASE_URL: &str = "https://results.eci.gov.in/PcResultGenJune2024/";
pub const ENTRY_PAGE: &str = "index.htm";

// Config file looked up in the working directory when --config is absent
pub const CONFIG_FILE: &str = "eci_scrape.toml";

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const PARTIES_STEM: &str = "parties_data";
pub const DETAILED_STEM: &str = "detailed_data";

// Log
pub const LOG_DIR: &str = ".store";
pub const LOG_FILE: &str = "debug.log";
