//! Tests for INI section parsing and tileset definition validation

#[cfg(test)]
mod tests {
    use std::path::Path;
    use tilesplit::SlicerError;
    use tilesplit::io::config::{ConfigSection, TilesetDefinition, parse_sections};

    fn valid_section() -> ConfigSection {
        let mut section = ConfigSection::new("dungeon");
        section.insert("tileset_name", "dungeon_tiles");
        section.insert("tileset_path", "assets/dungeon.png");
        section.insert("tile_width", "32");
        section.insert("tile_height", "32");
        section.insert("margin", "0");
        section.insert("spacing", "0");
        section
    }

    // Tests basic section and entry parsing with comments and blank lines
    #[test]
    fn test_parse_sections_basic_layout() {
        let text = "\n; a comment\n# another comment\n[first]\ntile_width = 16\n\n[second]\nTile_Height: 24\n";
        let sections = parse_sections(text);

        assert_eq!(sections.len(), 2);
        let first = sections.first();
        assert_eq!(first.map(|s| s.name.as_str()), Some("first"));
        assert_eq!(first.and_then(|s| s.get("tile_width")), Some("16"));

        // Keys are lowercased and ':' works as a separator
        let second = sections.last();
        assert_eq!(second.and_then(|s| s.get("tile_height")), Some("24"));
    }

    // Tests that entries before the first section header are dropped
    #[test]
    fn test_parse_sections_ignores_orphan_entries() {
        let sections = parse_sections("stray = value\n[only]\nmargin = 1\n");
        assert_eq!(sections.len(), 1);
        assert_eq!(sections.first().and_then(|s| s.get("margin")), Some("1"));
        assert_eq!(sections.first().and_then(|s| s.get("stray")), None);
    }

    // Tests that values keep separators past the first one
    #[test]
    fn test_parse_sections_value_may_contain_separators() {
        let sections = parse_sections("[s]\ntileset_path = C:/sheets/town.png\n");
        assert_eq!(
            sections.first().and_then(|s| s.get("tileset_path")),
            Some("C:/sheets/town.png")
        );
    }

    // Tests that a fully specified section parses into a definition
    // Verified by removing individual keys
    #[test]
    fn test_from_section_valid() {
        let mut section = valid_section();
        section.insert("transparent_color_rgb", "255, 0 ,255");

        let definition = TilesetDefinition::from_section(&section).unwrap();
        assert_eq!(definition.name, "dungeon_tiles");
        assert_eq!(definition.source_path, Path::new("assets/dungeon.png"));
        assert_eq!(definition.tile_width, 32);
        assert_eq!(definition.tile_height, 32);
        assert_eq!(definition.margin, 0);
        assert_eq!(definition.spacing, 0);
        assert_eq!(definition.transparent_color, Some([255, 0, 255]));
    }

    // Tests that an absent required key is reported with section and key
    #[test]
    fn test_missing_required_key() {
        let mut section = ConfigSection::new("dungeon");
        section.insert("tileset_name", "dungeon_tiles");
        section.insert("tileset_path", "assets/dungeon.png");
        section.insert("tile_height", "32");
        section.insert("margin", "0");
        section.insert("spacing", "0");

        let error = TilesetDefinition::from_section(&section).unwrap_err();
        match error {
            SlicerError::MissingParameter { section: name, key } => {
                assert_eq!(name, "dungeon");
                assert_eq!(key, "tile_width");
            }
            other => unreachable!("expected MissingParameter, got {other}"),
        }
    }

    // Tests that a non-numeric field is an invalid value, not a panic
    #[test]
    fn test_non_numeric_field() {
        let mut section = valid_section();
        section.insert("margin", "eight");

        let error = TilesetDefinition::from_section(&section).unwrap_err();
        assert!(matches!(
            error,
            SlicerError::InvalidValue { key: "margin", .. }
        ));
    }

    // Tests that zero tile dimensions are rejected
    #[test]
    fn test_zero_tile_dimension_rejected() {
        let mut section = valid_section();
        section.insert("tile_height", "0");

        let error = TilesetDefinition::from_section(&section).unwrap_err();
        assert!(matches!(
            error,
            SlicerError::InvalidValue {
                key: "tile_height",
                ..
            }
        ));
    }

    // Tests the optional color key: absent and empty both mean no keying
    #[test]
    fn test_transparent_color_optional() {
        let definition = TilesetDefinition::from_section(&valid_section()).unwrap();
        assert_eq!(definition.transparent_color, None);

        let mut section = valid_section();
        section.insert("transparent_color_rgb", "");
        let definition = TilesetDefinition::from_section(&section).unwrap();
        assert_eq!(definition.transparent_color, None);
    }

    // Tests malformed color triples: wrong arity and out-of-range channels
    #[test]
    fn test_transparent_color_malformed() {
        for raw in ["255,0", "255,0,255,0", "256,0,0", "-1,0,0", "a,b,c"] {
            let mut section = valid_section();
            section.insert("transparent_color_rgb", raw);

            let error = TilesetDefinition::from_section(&section).unwrap_err();
            assert!(
                matches!(
                    error,
                    SlicerError::InvalidValue {
                        key: "transparent_color_rgb",
                        ..
                    }
                ),
                "raw value {raw:?}"
            );
        }
    }
}
