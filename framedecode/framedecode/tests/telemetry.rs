use framedecode::{
    DecodeOptions, FrameDecoder,
    core::{CType, Conversion, FieldDef, Schema, Value},
};

const ORDER: [&str; 9] = [
    "RTCtimestamp",
    "GPStimestamp",
    "GPSlat",
    "GPSlng",
    "temperature",
    "humidity",
    "pressure",
    "voltage",
    "GPSsats",
];

fn scaled(name: &str, ty: CType, factor: f64) -> FieldDef {
    FieldDef::new(name, ty).with_conversion(Conversion::polynomial([0.0, factor]))
}

fn weather_station() -> Schema {
    [
        FieldDef::new("RTCtimestamp", CType::U32).with_comment("RTC timestamp"),
        FieldDef::new("GPStimestamp", CType::U32).with_comment("GPS timestamp"),
        scaled("GPSlat", CType::I32, 1e-6),
        scaled("GPSlng", CType::I32, 1e-6),
        scaled("temperature", CType::I16, 0.01),
        scaled("humidity", CType::U16, 0.01),
        scaled("pressure", CType::U16, 0.1),
        scaled("voltage", CType::U16, 0.01),
        scaled("GPSsats", CType::U8, 1.0),
    ]
    .into_iter()
    .collect()
}

fn approx(value: Option<&Value>, expected: f64) -> bool {
    matches!(value, Some(Value::F64(v)) if (v - expected).abs() < 1e-9)
}

#[test]
fn timestamp_and_latitude_end_to_end() {
    let schema: Schema = [
        FieldDef::new("RTCtimestamp", CType::U32),
        scaled("GPSlat", CType::I32, 1e-6),
    ]
    .into_iter()
    .collect();
    let mut decoder = FrameDecoder::new(&schema);
    decoder.set_order(["RTCtimestamp", "GPSlat"]);

    let mut bytes = 1000u32.to_le_bytes().to_vec();
    bytes.extend_from_slice(&45_000_000i32.to_le_bytes());
    let hex = hex::encode(&bytes);

    let frame = decoder.decode(&hex).expect("decode").expect("frame");
    assert_eq!(frame.len(), 2);
    assert_eq!(frame.get("RTCtimestamp"), Some(&Value::U32(1000)));
    assert!(approx(frame.get("GPSlat"), 45.0));

    let from_bytes = decoder.decode_bytes(&bytes).expect("decode").expect("frame");
    assert_eq!(from_bytes, frame);
}

#[test]
fn weather_station_sample_frame() {
    let schema = weather_station();
    let mut decoder = FrameDecoder::new(&schema);
    decoder.set_order(ORDER);
    assert_eq!(decoder.frame_width(), Some(25));

    let frame = decoder
        .decode("0b8cfe630e70fe63282d44fc34e866fcb0021c1268260a030c")
        .expect("decode")
        .expect("frame");

    assert_eq!(frame.names().collect::<Vec<_>>(), ORDER);
    assert_eq!(frame.get("RTCtimestamp"), Some(&Value::U32(1_677_626_379)));
    assert_eq!(frame.get("GPStimestamp"), Some(&Value::U32(1_677_619_214)));
    assert!(approx(frame.get("GPSlat"), -62.640856));
    assert!(approx(frame.get("GPSlng"), -60.364748));
    assert!(approx(frame.get("temperature"), 6.88));
    assert!(approx(frame.get("humidity"), 46.36));
    assert!(approx(frame.get("pressure"), 983.2));
    assert!(approx(frame.get("voltage"), 7.78));
    assert!(approx(frame.get("GPSsats"), 12.0));
}

#[test]
fn legacy_mode_matches_default_for_positive_sample() {
    let schema = weather_station();
    let sample = "938bfe63966ffe633c2d44fc14e866fcb2021812692609030c";

    let mut corrected = FrameDecoder::new(&schema);
    corrected.set_order(ORDER);
    let mut legacy = FrameDecoder::with_options(&schema, DecodeOptions::legacy());
    legacy.set_order(ORDER);

    assert_eq!(
        corrected.decode(sample).expect("decode"),
        legacy.decode(sample).expect("decode")
    );
}

#[test]
fn negative_temperature_differs_between_modes() {
    let schema = weather_station();
    let mut corrected = FrameDecoder::new(&schema);
    corrected.set_order(["temperature"]);
    let mut legacy = FrameDecoder::with_options(&schema, DecodeOptions::legacy());
    legacy.set_order(["temperature"]);

    // -5.00 degrees encoded as hundredths
    let hex = "0cfe";
    let corrected = corrected.decode(hex).expect("decode").expect("frame");
    let legacy = legacy.decode(hex).expect("decode").expect("frame");
    assert!(approx(corrected.get("temperature"), -5.0));
    assert!(approx(legacy.get("temperature"), 650.36));
}
