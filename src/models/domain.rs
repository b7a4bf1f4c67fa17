/// Address supplied by the caller in the `addr` query parameter, already
/// percent-decoded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddressQuery {
    address: String,
}

impl AddressQuery {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.address
    }

    /// The legacy `converted` value: the query with its final character
    /// removed. Truncates by `char`, so multi-byte text stays intact.
    pub fn converted(&self) -> &str {
        match self.address.char_indices().next_back() {
            Some((idx, _)) => &self.address[..idx],
            None => "",
        }
    }
}

/// Structured output of the address normalizer
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizationResult {
    /// Match level, 0 means the normalizer could not place the address
    pub level: u32,
    pub pref: String,
    pub city: String,
    pub town: String,
    pub chome: Option<String>,
    pub banchi: Option<String>,
    pub lng: Option<f64>,
    pub lat: Option<f64>,
}

impl NormalizationResult {
    pub fn is_match(&self) -> bool {
        self.level > 0
    }

    /// `PREF/CITY/TOWN/CHOME/BANCHI`, with absent parts left empty
    pub fn address_path(&self) -> String {
        format!(
            "{}/{}/{}/{}/{}",
            self.pref,
            self.city,
            self.town,
            self.chome.as_deref().unwrap_or(""),
            self.banchi.as_deref().unwrap_or("")
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_converted_drops_last_multibyte_char() {
        let query = AddressQuery::new("東京都新宿区西新宿２丁目８−１");
        assert_eq!(query.converted(), "東京都新宿区西新宿２丁目８−");
    }

    #[test]
    fn test_converted_single_char() {
        assert_eq!(AddressQuery::new("a").converted(), "");
        assert_eq!(AddressQuery::new("都").converted(), "");
    }

    #[test]
    fn test_address_path_with_missing_parts() {
        let result = NormalizationResult {
            level: 3,
            pref: "東京都".to_string(),
            city: "新宿区".to_string(),
            town: "西新宿二丁目".to_string(),
            chome: None,
            banchi: None,
            lng: Some(139.691774),
            lat: Some(35.68945),
        };

        assert_eq!(result.address_path(), "東京都/新宿区/西新宿二丁目//");
        assert!(result.is_match());
    }
}
