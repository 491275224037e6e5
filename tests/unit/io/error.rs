//! Tests for error display formatting and construction helpers

#[cfg(test)]
mod tests {
    use std::error::Error;
    use std::path::PathBuf;
    use tilesplit::SlicerError;
    use tilesplit::io::error::{invalid_value, missing_parameter};

    // Tests that each user-facing message names the relevant path or section
    #[test]
    fn test_display_messages() {
        let error = SlicerError::ConfigMissing {
            path: PathBuf::from("config.ini"),
        };
        assert_eq!(
            error.to_string(),
            "Configuration file not found: config.ini"
        );

        let error = SlicerError::ImageNotFound {
            path: PathBuf::from("assets/town.png"),
        };
        assert_eq!(error.to_string(), "Tileset file not found: assets/town.png");

        let error = missing_parameter(&"town", "tile_width");
        assert_eq!(
            error.to_string(),
            "Missing required parameter 'tile_width' in section 'town'"
        );

        let error = invalid_value(&"town", "margin", &"eight", &"invalid digit found in string");
        assert_eq!(
            error.to_string(),
            "Invalid value 'eight' for 'margin' in section 'town': invalid digit found in string"
        );
    }

    // Tests that construction helpers fill the right variants
    #[test]
    fn test_helper_constructors() {
        assert!(matches!(
            missing_parameter(&"s", "spacing"),
            SlicerError::MissingParameter { key: "spacing", .. }
        ));
        assert!(matches!(
            invalid_value(&"s", "spacing", &"x", &"reason"),
            SlicerError::InvalidValue { key: "spacing", .. }
        ));
    }

    // Tests that wrapped I/O errors surface through Error::source
    #[test]
    fn test_error_source_chain() {
        let error = SlicerError::FileSystem {
            path: PathBuf::from("tiles"),
            operation: "create directory",
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        };
        assert!(error.source().is_some());

        let error = SlicerError::ConfigMissing {
            path: PathBuf::from("config.ini"),
        };
        assert!(error.source().is_none());
    }
}
