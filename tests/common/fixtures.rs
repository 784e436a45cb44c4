//! Test fixtures and constants.

use wearpick::models::AppConfig;

/// Colors used across tests
pub mod colors {
    pub const RED: &str = "#FF0000";
    pub const GREEN: &str = "#00FF00";
    pub const WHITE: &str = "#FFFFFF";
    /// Between swatches: not an exact rainbow color
    pub const OFF_GRID: &str = "#5A3C78";
}

/// Four greys, one row
pub const MONO: [&str; 4] = ["#000000", "#555555", "#AAAAAA", "#FFFFFF"];

/// Two rows of four
pub const WARM: [&str; 8] = [
    "#330000", "#660000", "#990000", "#CC0000", "#332200", "#664400", "#996600", "#CC8800",
];

/// Configuration with the `mono` and `warm` palettes
pub fn config_with_palettes() -> AppConfig {
    let yaml = format!(
        "palettes:\n  mono: [{}]\n  warm: [{}]\n",
        quoted(&MONO),
        quoted(&WARM)
    );
    AppConfig::from_yaml(&yaml).expect("Fixture config should parse")
}

fn quoted(colors: &[&str]) -> String {
    colors
        .iter()
        .map(|c| format!("\"{c}\""))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Body for POST /api/pick
pub fn open_body(request_code: i32, old_color: Option<&str>) -> String {
    match old_color {
        Some(color) => {
            serde_json::json!({"request_code": request_code, "old_color": color}).to_string()
        }
        None => serde_json::json!({"request_code": request_code}).to_string(),
    }
}
