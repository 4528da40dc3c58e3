//! Tests for the long-form measurement view

#[cfg(test)]
mod tests {
    use palatometry::analysis::reshape::long_form;
    use palatometry::{BatchOptions, PointPairing, aggregate};
    use std::fs;

    // Tests rows follow specimen then pairing order and skip unmeasured pairings
    // Verified by emitting rows in label order
    #[test]
    fn test_long_form_order_and_gaps() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let first = dir.path().join("E13.5 Cul 24.points");
        let second = dir.path().join("E12.5 Fix.points");
        fs::write(
            &first,
            "<points>\
             <point name=\"Left\" x=\"0\" y=\"0\"/>\
             <point name=\"Right\" x=\"0\" y=\"2\"/>\
             <point name=\"A\" x=\"1\" y=\"0\"/>\
             </points>",
        )
        .expect("Failed to write specimen");
        fs::write(&second, "<points><point name=\"A\" x=\"1\" y=\"1\"/></points>")
            .expect("Failed to write specimen");

        let options = BatchOptions {
            pairings: vec![
                PointPairing::new("Left", "Right"),
                PointPairing::new("A", "Left"),
            ],
            ..BatchOptions::default()
        };
        let results = aggregate(&[first, second], &options).unwrap();

        let rows = long_form(&results);

        let keys: Vec<(&str, &str, f64)> = rows
            .iter()
            .map(|row| (row.file_id.as_str(), row.measurement.as_str(), row.distance))
            .collect();
        assert_eq!(
            keys,
            [
                ("E13.5 Cul 24", "Dist(Left, Right)", 2.0),
                ("E13.5 Cul 24", "Dist(A, Left)", 1.0),
            ]
        );
        assert!(rows.iter().all(|row| row.time_hours == Some(24.0)));
        assert!(rows.iter().all(|row| row.info == "E13.5" && row.culture == "Cul"));
    }
}
