use framedecode_core::{CType, UnknownTypeError, width_of};

#[test]
fn registry_widths_match_c_types() {
    assert_eq!(width_of("uint8_t"), Ok(1));
    assert_eq!(width_of("uint16_t"), Ok(2));
    assert_eq!(width_of("uint32_t"), Ok(4));
    assert_eq!(width_of("int8_t"), Ok(1));
    assert_eq!(width_of("int16_t"), Ok(2));
    assert_eq!(width_of("int32_t"), Ok(4));
    assert_eq!(width_of("float"), Ok(4));
    assert_eq!(width_of("double"), Ok(8));
    assert_eq!(width_of("char"), Ok(1));
    assert_eq!(width_of("hex"), Ok(1));
}

#[test]
fn unknown_identifier_is_rejected() {
    let err = width_of("enum").expect_err("enum is reserved, not registered");
    assert_eq!(err, UnknownTypeError::new("enum"));
    assert_eq!(err.to_string(), "unknown type identifier 'enum'");
}

#[test]
fn identifiers_are_case_sensitive() {
    assert!("UINT8_T".parse::<CType>().is_err());
}

#[test]
fn numeric_classification() {
    assert!(CType::I16.is_numeric());
    assert!(CType::F64.is_numeric());
    assert!(!CType::Char.is_numeric());
    assert!(!CType::Hex.is_numeric());
}

#[test]
fn display_uses_identifier() {
    assert_eq!(CType::U32.to_string(), "uint32_t");
    assert_eq!(CType::F32.to_string(), "float");
}
