//! Tests for landmark file loading and its failure modes

#[cfg(test)]
mod tests {
    use palatometry::{LandmarkError, LandmarkPoint};
    use palatometry::landmarks::loader::{
        DuplicatePolicy, LoadOptions, file_id_from_path, load, load_with, parse_points,
    };
    use palatometry::landmarks::metadata::StageTable;
    use std::fs;
    use std::path::{Path, PathBuf};

    fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).expect("Failed to write landmark file");
        path
    }

    fn points_document(points: &[(&str, f64, f64)]) -> String {
        let mut xml = String::from("<points>\n");
        for (name, x, y) in points {
            xml.push_str(&format!("  <point name=\"{name}\" x=\"{x}\" y=\"{y}\"/>\n"));
        }
        xml.push_str("</points>\n");
        xml
    }

    // Tests a well-formed file yields one point per node and filename metadata
    // Verified by skipping the first child element
    #[test]
    fn test_load_valid_file() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_file(
            dir.path(),
            "E13.5 Cul 24.points",
            &points_document(&[
                ("Ant shelf L", 10.0, 20.0),
                ("Post shelf L", 13.0, 24.0),
                ("Left", 0.5, -1.25),
            ]),
        );

        let file = load(&path).unwrap();

        assert_eq!(file.file_id(), "E13.5 Cul 24");
        assert_eq!(file.len(), 3);
        assert_eq!(file.node_count(), 3);
        assert_eq!(file.metadata().time_hours(), Some(24.0));
        let left = file.point("Left").unwrap();
        assert_eq!((left.x, left.y), (0.5, -1.25));
    }

    // Tests element names, whitespace, comments and extra attributes are tolerated
    // Verified by requiring elements named 'point'
    #[test]
    fn test_parse_points_accepts_any_element_name() {
        let text = r#"<?xml version="1.0"?>
<landmarks scale="1">
  <!-- digitised by hand -->
  <landmark name="A" x=" 1.5 " y="2" colour="red"/>
  <p name="B" x="-3e1" y="4.0"></p>
</landmarks>"#;

        let points = parse_points(Path::new("inline.points"), text).unwrap();

        assert_eq!(points.len(), 2);
        assert_eq!(points[0].name, "A");
        assert_eq!(points[0].x, 1.5);
        assert_eq!(points[1].x, -30.0);
    }

    // Tests a document type declaration does not make a file unreadable
    // Verified by parsing with DTDs disallowed
    #[test]
    fn test_doctype_is_accepted() {
        let text = "<?xml version=\"1.0\"?>\n<!DOCTYPE points>\n<points><point name=\"Left\" x=\"0\" y=\"0\"/></points>";

        let points = parse_points(Path::new("E13 Cul 12.points"), text).unwrap();

        assert_eq!(points, [LandmarkPoint::new("Left", 0.0, 0.0)]);
    }

    // Tests a missing coordinate attribute is a parse error naming the file
    // Verified by defaulting missing coordinates to zero
    #[test]
    fn test_missing_attribute_is_parse_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_file(
            dir.path(),
            "E13 Cul 12.points",
            "<points>\n<point name=\"A\" x=\"1\"/>\n</points>",
        );

        match load(&path).unwrap_err() {
            LandmarkError::Parse { path: failed, reason } => {
                assert_eq!(failed, path);
                assert!(reason.contains("'y'"), "unexpected reason: {reason}");
                assert!(reason.contains("line 2"), "unexpected reason: {reason}");
            }
            other => unreachable!("Expected Parse error, got {other:?}"),
        }
    }

    // Tests a point without a name is a parse error
    // Verified by using the element name as landmark name
    #[test]
    fn test_missing_name_is_parse_error() {
        let result = parse_points(
            Path::new("E13 Cul 12.points"),
            "<points><point x=\"1\" y=\"2\"/></points>",
        );

        assert!(matches!(result, Err(LandmarkError::Parse { .. })));
    }

    // Tests non-numeric and non-finite coordinates are rejected
    // Verified by accepting any value Rust parses as f64
    #[test]
    fn test_non_numeric_coordinate_is_parse_error() {
        let path = Path::new("E13 Cul 12.points");

        for value in ["abc", "", "NaN", "inf"] {
            let text = format!("<points><point name=\"A\" x=\"{value}\" y=\"2\"/></points>");
            assert!(
                matches!(parse_points(path, &text), Err(LandmarkError::Parse { .. })),
                "x = '{value}' should be rejected"
            );
        }
    }

    // Tests text that is not XML is a parse error
    // Verified by treating unparsable files as empty
    #[test]
    fn test_malformed_xml_is_parse_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_file(dir.path(), "E13 Cul 12.points", "<points><point name=");

        assert!(matches!(load(&path), Err(LandmarkError::Parse { .. })));
    }

    // Tests an unreadable file is a parse error naming the path
    // Verified by mapping read failures to file system errors
    #[test]
    fn test_missing_file_is_parse_error() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("E13 Cul 12.points");

        let error = load(&path).unwrap_err();
        assert!(matches!(error, LandmarkError::Parse { .. }));
        assert_eq!(error.subject(), Some(path.display().to_string()));
    }

    // Tests a malformed filename fails even when the contents are valid
    // Verified by skipping metadata parsing
    #[test]
    fn test_malformed_filename_fails_load() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_file(
            dir.path(),
            "BadName.points",
            &points_document(&[("A", 0.0, 0.0)]),
        );

        assert!(matches!(
            load(&path),
            Err(LandmarkError::MalformedFilename { .. })
        ));
    }

    // Tests duplicate names are kept last-wins and reported under the warn policy
    // Verified by dropping the duplicate record
    #[test]
    fn test_duplicates_are_reported() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_file(
            dir.path(),
            "E14 Fix.points",
            &points_document(&[("A", 0.0, 0.0), ("B", 1.0, 1.0), ("A", 5.0, 5.0)]),
        );

        let file = load(&path).unwrap();
        assert_eq!(file.node_count(), 3);
        assert_eq!(file.len(), 2);
        assert_eq!(file.duplicates(), ["A".to_string()]);
        assert_eq!(file.point("A").map(|p| p.x), Some(5.0));
    }

    // Tests the reject policy turns duplicates into an error
    // Verified by ignoring the duplicate policy
    #[test]
    fn test_duplicates_rejected() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_file(
            dir.path(),
            "E14 Fix.points",
            &points_document(&[("A", 0.0, 0.0), ("A", 5.0, 5.0)]),
        );
        let options = LoadOptions {
            duplicate_policy: DuplicatePolicy::Reject,
            ..LoadOptions::default()
        };

        match load_with(&path, &options).unwrap_err() {
            LandmarkError::DuplicateLandmark { name, .. } => assert_eq!(name, "A"),
            other => unreachable!("Expected DuplicateLandmark, got {other:?}"),
        }
    }

    // Tests the stage table in the options reaches the metadata parser
    // Verified by always using the built-in stage table
    #[test]
    fn test_load_with_custom_stages() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = write_file(
            dir.path(),
            "E16 Fix.points",
            &points_document(&[("A", 0.0, 0.0)]),
        );
        let options = LoadOptions {
            stages: StageTable::from_entries([("E16", 84.0)]),
            ..LoadOptions::default()
        };

        assert_eq!(load(&path).unwrap().metadata().time_hours(), None);
        assert_eq!(
            load_with(&path, &options).unwrap().metadata().time_hours(),
            Some(84.0)
        );
    }

    // Tests the file id drops only the last extension
    // Verified by splitting at the first dot
    #[test]
    fn test_file_id_from_path() {
        assert_eq!(
            file_id_from_path(Path::new("/data/E13.5 Cul 24.points")).unwrap(),
            "E13.5 Cul 24"
        );
        assert_eq!(
            file_id_from_path(Path::new("E12.5 Fix.xml")).unwrap(),
            "E12.5 Fix"
        );
        assert!(file_id_from_path(Path::new("/")).is_err());
    }
}
