use serde::{Deserialize, Serialize};

/// Decoded barcode string. The globally unique key of a product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Barcode(String);

impl Barcode {
    /// Creates a new Barcode from any type that can be converted into a String.
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the inner string as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True when the barcode carries no usable characters.
    pub fn is_blank(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for Barcode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for Barcode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for Barcode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Scalar-property write behavior for product upserts.
///
/// `CreateOnce` sets title and the descriptive fields only when the product
/// node is first created; `Overwrite` re-sets them on every call. Attribute
/// relationships are (re-)established under either policy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UpsertPolicy {
    CreateOnce,
    Overwrite,
}

impl std::fmt::Display for UpsertPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpsertPolicy::CreateOnce => write!(f, "create_once"),
            UpsertPolicy::Overwrite => write!(f, "overwrite"),
        }
    }
}

impl std::str::FromStr for UpsertPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "create_once" => Ok(UpsertPolicy::CreateOnce),
            "overwrite" => Ok(UpsertPolicy::Overwrite),
            _ => Err(format!("Invalid upsert policy: {}", s)),
        }
    }
}

/// Row filter for catalog export.
///
/// `All` is outer-join semantics: every product gets a row. `CompleteOnly`
/// keeps only products with brand, category, and manufacturer all linked
/// (image stays optional either way).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ExportFilter {
    All,
    CompleteOnly,
}

impl std::fmt::Display for ExportFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFilter::All => write!(f, "all"),
            ExportFilter::CompleteOnly => write!(f, "complete_only"),
        }
    }
}

impl std::str::FromStr for ExportFilter {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "all" => Ok(ExportFilter::All),
            "complete_only" => Ok(ExportFilter::CompleteOnly),
            _ => Err(format!("Invalid export filter: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_create_barcode_from_string() {
        let barcode = Barcode::new("012345678905".to_string());
        assert_eq!(barcode.as_str(), "012345678905");
    }

    #[test]
    fn should_create_barcode_from_str() {
        let barcode: Barcode = "8410000810004".into();
        assert_eq!(barcode.as_str(), "8410000810004");
    }

    #[test]
    fn should_display_barcode() {
        let barcode = Barcode::new("012345678905");
        assert_eq!(format!("{}", barcode), "012345678905");
    }

    #[test]
    fn should_compare_barcodes_for_equality() {
        let a = Barcode::new("012345678905");
        let b = Barcode::new("012345678905");
        let c = Barcode::new("036000291452");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn should_detect_blank_barcode() {
        assert!(Barcode::new("").is_blank());
        assert!(Barcode::new("   ").is_blank());
        assert!(!Barcode::new("012345678905").is_blank());
    }

    #[test]
    fn should_round_trip_upsert_policy() {
        assert_eq!(
            "create_once".parse::<UpsertPolicy>().unwrap(),
            UpsertPolicy::CreateOnce
        );
        assert_eq!(
            "overwrite".parse::<UpsertPolicy>().unwrap(),
            UpsertPolicy::Overwrite
        );
        assert_eq!(UpsertPolicy::CreateOnce.to_string(), "create_once");
        assert!("sometimes".parse::<UpsertPolicy>().is_err());
    }

    #[test]
    fn should_round_trip_export_filter() {
        assert_eq!("all".parse::<ExportFilter>().unwrap(), ExportFilter::All);
        assert_eq!(
            "complete_only".parse::<ExportFilter>().unwrap(),
            ExportFilter::CompleteOnly
        );
        assert_eq!(ExportFilter::CompleteOnly.to_string(), "complete_only");
        assert!("partial".parse::<ExportFilter>().is_err());
    }
}
