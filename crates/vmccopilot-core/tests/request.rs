// Machining request tests
// Covers form defaults, serde round trips through TOML/JSON, and the
// operation sequence parser.

use vmccopilot_core::*;

#[test]
fn test_form_defaults() {
    let request = MachiningRequest::default();

    assert_eq!(request.shape, PartShape::Cylinder);
    assert_eq!(request.diameter_mm, 50.0);
    assert_eq!(request.height_mm, 100.0);
    assert_eq!(request.length_mm, 0.0);
    assert_eq!(request.material, Material::Aluminum);
    assert_eq!(request.tool_type, ToolType::EndMill);
    assert_eq!(request.tool_diameter_mm, 10.0);
    assert_eq!(request.cutting_speed_mm_per_min, 150.0);
    assert_eq!(request.feed_rate_mm_per_min, 100.0);
    assert_eq!(request.depth_of_cut_mm, 5.0);
    assert_eq!(request.finish_type, FinishType::Rough);
    assert_eq!(request.advanced.spindle_speed_rpm, 1500.0);
    assert!(request.advanced.coolant);
}

#[test]
fn test_partial_toml_uses_defaults() {
    let request: MachiningRequest = toml::from_str(
        r#"
        shape = "Cube"
        length_mm = 80.0
        material = "Steel"
        tool_type = "Ball End Mill"
        finish_type = "Ultra-Fine"

        [advanced]
        operations = ["Roughing", "Finishing"]
        "#,
    )
    .unwrap();

    assert_eq!(request.shape, PartShape::Cube);
    assert_eq!(request.length_mm, 80.0);
    assert_eq!(request.material, Material::Steel);
    assert_eq!(request.tool_type, ToolType::BallEndMill);
    assert_eq!(request.finish_type, FinishType::UltraFine);
    assert_eq!(request.diameter_mm, 50.0);
    assert_eq!(
        request.advanced.operations,
        vec![Operation::Roughing, Operation::Finishing]
    );
    assert_eq!(request.advanced.tolerance_mm, 0.1);
    assert!(request.validate().is_ok());
}

#[test]
fn test_unknown_material_in_json_falls_back() {
    let request: MachiningRequest =
        serde_json::from_str(r#"{ "material": "Inconel 718" }"#).unwrap();
    assert_eq!(request.material, Material::Other);
    assert_eq!(request.material.strength_coefficient(), 120.0);
}

#[test]
fn test_unknown_shape_in_json_is_rejected() {
    let result: std::result::Result<MachiningRequest, _> = serde_json::from_str(r#"{ "shape": "Torus" }"#);
    assert!(result.is_err());
}

#[test]
fn test_material_serializes_as_label() {
    let json = serde_json::to_string(&MachiningRequest::default()).unwrap();
    assert!(json.contains(r#""material":"Aluminum""#));
    assert!(json.contains(r#""tool_type":"End Mill""#));
}

#[test]
fn test_operation_sequence_parsing() {
    let ops = parse_operation_sequence("Roughing, Drilling ,, finishing").unwrap();
    assert_eq!(
        ops,
        vec![Operation::Roughing, Operation::Drilling, Operation::Finishing]
    );

    assert!(parse_operation_sequence("").unwrap().is_empty());

    let err = parse_operation_sequence("Roughing, Knurling").unwrap_err();
    assert!(matches!(err, Error::UnknownVariant { kind: "operation", .. }));
}

#[test]
fn test_validation_reports_field() {
    let request = MachiningRequest {
        depth_of_cut_mm: 0.05,
        ..MachiningRequest::default()
    };
    match request.validate() {
        Err(Error::InvalidArgument { field, .. }) => assert_eq!(field, "depth_of_cut_mm"),
        other => panic!("expected InvalidArgument, got {:?}", other),
    }

    let request = MachiningRequest {
        advanced: AdvancedOptions {
            spindle_speed_rpm: 200.0,
            ..AdvancedOptions::default()
        },
        ..MachiningRequest::default()
    };
    assert!(request.validate().unwrap_err().is_invalid_argument());
}

#[test]
fn test_tool_spec_from_request() {
    let request = MachiningRequest {
        tool_type: ToolType::FaceMill,
        tool_diameter_mm: 40.0,
        ..MachiningRequest::default()
    };
    let spec = request.tool_spec();
    assert_eq!(spec.tool_type, ToolType::FaceMill);
    assert_eq!(spec.diameter_mm, 40.0);
    assert_eq!(spec.length_mm, 50.0);
}

#[test]
fn test_labels_are_case_insensitive_in_request_files() {
    let request: MachiningRequest = toml::from_str(
        r#"
        shape = "cube"
        length_mm = 40.0
        tool_type = "ball end mill"
        finish_type = "ULTRA-FINE"

        [advanced]
        workpiece_orientation = "tilted"
        "#,
    )
    .unwrap();

    assert_eq!(request.shape, PartShape::Cube);
    assert_eq!(request.tool_type, ToolType::BallEndMill);
    assert_eq!(request.finish_type, FinishType::UltraFine);
    assert_eq!(
        request.advanced.workpiece_orientation,
        WorkpieceOrientation::Tilted
    );
}

#[test]
fn test_operation_sequence_from_comma_separated_string() {
    let request: MachiningRequest = toml::from_str(
        r#"
        [advanced]
        operations = "drilling, Tapping"
        operation_sequence = "Roughing, Drilling"
        "#,
    )
    .unwrap();

    assert_eq!(
        request.advanced.operation_sequence,
        vec![Operation::Roughing, Operation::Drilling]
    );
    assert_eq!(
        request.advanced.operations,
        vec![Operation::Drilling, Operation::Tapping]
    );

    let request: MachiningRequest =
        serde_json::from_str(r#"{ "advanced": { "operation_sequence": ["finishing", "Roughing"] } }"#)
            .unwrap();
    assert_eq!(
        request.advanced.operation_sequence,
        vec![Operation::Finishing, Operation::Roughing]
    );
}

#[test]
fn test_unknown_operation_in_sequence_string_is_rejected() {
    let result: std::result::Result<MachiningRequest, _> = toml::from_str(
        r#"
        [advanced]
        operation_sequence = "Roughing, Knurling"
        "#,
    );
    let err = result.unwrap_err();
    assert!(err.to_string().contains("Knurling"));
}

#[test]
fn test_serialized_labels_load_back() {
    let request = MachiningRequest {
        finish_type: FinishType::UltraFine,
        tool_type: ToolType::FaceMill,
        ..MachiningRequest::for_shape(PartShape::Prism)
    };
    let text = toml::to_string(&request).unwrap();
    assert!(text.contains(r#"finish_type = "Ultra-Fine""#));
    let loaded: MachiningRequest = toml::from_str(&text).unwrap();
    assert_eq!(loaded, request);
}
