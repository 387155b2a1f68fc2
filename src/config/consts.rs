// src/config/consts.rs

// Source
pub const DEFAULT_SOURCE_URL: &str =
    "https://content.codecademy.com/courses/beautifulsoup/cacao/index.html";
pub const USER_AGENT: &str = concat!("choco_scrape/", env!("CARGO_PKG_VERSION"));
pub const HTTP_TIMEOUT_SECS: u64 = 30;

// Class markers on the reviews page, one per column
pub const RATING_SELECTOR: &str = ".Rating";
pub const COCOA_SELECTOR: &str = ".CocoaPercent";
pub const COMPANY_SELECTOR: &str = ".Company";
pub const LOCATION_SELECTOR: &str = ".CompanyLocation";
pub const ORIGIN_SELECTOR: &str = ".Origin";

// Report
pub const DEFAULT_TOP_N: usize = 10;
pub const DEFAULT_FOCUS_LOCATION: &str = "Brazil";
pub const DEFAULT_HISTOGRAM_BINS: usize = 10;

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "chocolate";
