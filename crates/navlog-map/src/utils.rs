//! Header folding shared by aliases and source headers.

/// Folds a header or alias for comparison: drops a byte-order mark, trims
/// surrounding whitespace and lowercases. Inner punctuation is kept, so
/// `sound_velocity` and `sound velocity` stay distinct.
pub fn fold_header(raw: &str) -> String {
    raw.trim_matches('\u{feff}').trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_case_and_whitespace() {
        assert_eq!(fold_header("  LATITUDE\t"), "latitude");
        assert_eq!(fold_header("\u{feff}Row Name"), "row name");
        assert_eq!(fold_header("Paro_Depth_M"), "paro_depth_m");
    }

    #[test]
    fn keeps_inner_punctuation() {
        assert_ne!(fold_header("sound_velocity"), fold_header("sound velocity"));
    }
}
