//! Seoul district (sigungu) code lookup
//!
//! District codes arrive as strings (`"1"` through `"25"`) in page URLs and
//! in recommendation records. The table is built once on first use and never
//! mutated afterwards.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Name used when a district code is missing or not in the table
pub const DEFAULT_REGION_NAME: &str = "Seoul";

/// District code → English district name, in code order
pub const SIGUNGU_CODES: [(&str, &str); 25] = [
    ("1", "Gangnam-gu"),
    ("2", "Gangdong-gu"),
    ("3", "Gangbuk-gu"),
    ("4", "Gangseo-gu"),
    ("5", "Gwanak-gu"),
    ("6", "Gwangjin-gu"),
    ("7", "Guro-gu"),
    ("8", "Geumcheon-gu"),
    ("9", "Nowon-gu"),
    ("10", "Dobong-gu"),
    ("11", "Dongdaemun-gu"),
    ("12", "Dongjak-gu"),
    ("13", "Mapo-gu"),
    ("14", "Seodaemun-gu"),
    ("15", "Seocho-gu"),
    ("16", "Seongdong-gu"),
    ("17", "Seongbuk-gu"),
    ("18", "Songpa-gu"),
    ("19", "Yangcheon-gu"),
    ("20", "Yeongdeungpo-gu"),
    ("21", "Yongsan-gu"),
    ("22", "Eunpyeong-gu"),
    ("23", "Jongno-gu"),
    ("24", "Jung-gu"),
    ("25", "Jungnang-gu"),
];

static REGION_MAP: Lazy<HashMap<&'static str, &'static str>> =
    Lazy::new(|| SIGUNGU_CODES.iter().copied().collect());

/// Look up the English name for a district code
///
/// Returns `None` for absent or unknown codes so callers can pick their own
/// fallback.
pub fn lookup(code: Option<&str>) -> Option<&'static str> {
    code.and_then(|c| REGION_MAP.get(c).copied())
}

/// English name for a district code, or [`DEFAULT_REGION_NAME`]
pub fn region_name(code: Option<&str>) -> &'static str {
    lookup(code).unwrap_or(DEFAULT_REGION_NAME)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_code_maps_to_its_name() {
        for (code, name) in SIGUNGU_CODES {
            assert_eq!(region_name(Some(code)), name, "code {}", code);
            assert_eq!(lookup(Some(code)), Some(name));
        }
    }

    #[test]
    fn test_seocho_is_code_15() {
        assert_eq!(region_name(Some("15")), "Seocho-gu");
    }

    #[test]
    fn test_unknown_or_absent_code_falls_back_to_seoul() {
        assert_eq!(region_name(None), "Seoul");
        assert_eq!(region_name(Some("")), "Seoul");
        assert_eq!(region_name(Some("0")), "Seoul");
        assert_eq!(region_name(Some("26")), "Seoul");
        assert_eq!(region_name(Some(" 1")), "Seoul");
        assert_eq!(region_name(Some("gangnam")), "Seoul");
    }

    #[test]
    fn test_lookup_has_no_fallback() {
        assert_eq!(lookup(None), None);
        assert_eq!(lookup(Some("99")), None);
    }

    #[test]
    fn test_table_has_unique_codes() {
        assert_eq!(REGION_MAP.len(), SIGUNGU_CODES.len());
    }
}
