mod common;

use sclight_analyzer::Analyzer;

#[test]
fn result_serializes_to_stable_json() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze("Motor := Sensor_1 AND NOT Falha;", &common::plant_snapshot());

    let json: serde_json::Value = serde_json::from_str(
        &serde_json::to_string(&result).unwrap(),
    )
    .unwrap();

    assert_eq!(json["success"], true);
    assert_eq!(json["classified_type"], "plain");
    assert_eq!(json["assignments"][0]["variable_name"], "Motor");
    assert_eq!(json["assignments"][0]["value"], true);
    assert_eq!(json["assignments"][0]["inferred_type"], "BOOL");
    assert_eq!(json["statistics"]["tags_found"], 3);
    assert_eq!(json["tags_referenced"][0]["declared_type"], "BOOL");
}

#[test]
fn non_finite_values_serialize_as_markers() {
    let analyzer = Analyzer::new();
    let result = analyzer.analyze("Razao := 1 / 0;", &common::plant_snapshot());

    let json: serde_json::Value = serde_json::from_str(
        &serde_json::to_string(&result).unwrap(),
    )
    .unwrap();

    assert_eq!(json["assignments"][0]["value"], "Infinity");
    assert_eq!(json["diagnostics"][0]["severity"], "warning");
}
