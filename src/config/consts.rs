// src/config/consts.rs

// Listing source
pub const SHEET_CSV_URL: &str = "https://docs.google.com/spreadsheets/d/e/2PACX-1vSOVAB4idBjItPEOwxQvOGM4dAaYeWBuY49qlllo9bo-YW11K2e9wHLo3Ul8RKwiswKanQ29XbSMbZ8/pub?output=csv";
pub const AUTO_REFRESH_MS: u64 = 30_000;

// Net config
pub const HTTP_TIMEOUT_SECS: u64 = 15;
pub const USER_AGENT: &str = concat!("lot_viewer/", env!("CARGO_PKG_VERSION"));

// Placeholders
pub const CARD_PLACEHOLDER_IMG: &str = "https://via.placeholder.com/320x180?text=No+Image";
pub const DETAIL_PLACEHOLDER_IMG: &str = "https://via.placeholder.com/450x220?text=No+Image";

// Messages
pub const FETCH_ERROR_MSG: &str = "Error fetching listings.";

// Gallery
pub const SWIPE_THRESHOLD_PX: f32 = 40.0;

// Window
pub const WINDOW_W: f32 = 1100.0;
pub const WINDOW_H: f32 = 760.0;
pub const CARD_W: f32 = 320.0;
pub const CARD_IMG_H: f32 = 180.0;
