use std::fmt::Write as _;

use anyhow::Result;
use chrono::{DateTime, SecondsFormat};
use clap::ValueEnum;
use framedecode::{
    DecodedFrame,
    core::{FieldDef, Schema, Value},
};

#[derive(Clone, Copy, Debug, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum OutputFormat {
    Table,
    Json,
    Jsonl,
}

impl OutputFormat {
    pub fn render(&self, frame: &DecodedFrame, schema: &Schema) -> Result<String> {
        Ok(match self {
            OutputFormat::Table => render_table(frame, schema),
            OutputFormat::Json => serde_json::to_string_pretty(frame)?,
            OutputFormat::Jsonl => serde_json::to_string(frame)?,
        })
    }
}

/// Name / Measure / Comment columns, one row per decoded field.
pub fn render_table(frame: &DecodedFrame, schema: &Schema) -> String {
    let rows: Vec<[String; 3]> = frame
        .iter()
        .map(|(name, value)| {
            let field = schema.get(name);
            [
                name.to_string(),
                format_measure(name, value, field),
                field
                    .and_then(|f| f.comment.clone())
                    .unwrap_or_default(),
            ]
        })
        .collect();

    let header = ["Name".to_string(), "Measure".to_string(), "Comment".to_string()];
    let mut widths = header.clone().map(|h| h.chars().count());
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    for row in std::iter::once(&header).chain(&rows) {
        let line = format!(
            "{:<w0$}  {:<w1$}  {}",
            row[0],
            row[1],
            row[2],
            w0 = widths[0],
            w1 = widths[1],
        );
        let _ = writeln!(out, "{}", line.trim_end());
    }
    out
}

/// Display a value with the field's precision, and an ISO-8601 time for
/// timestamp fields.
pub fn format_measure(name: &str, value: &Value, field: Option<&FieldDef>) -> String {
    let mut text = match (value.as_f64(), field.and_then(FieldDef::precision)) {
        (Some(v), Some(precision)) => format!("{v:.precision$}"),
        _ => value.to_string(),
    };
    if name.contains("timestamp")
        && let Some(iso) = value.as_f64().and_then(iso_time)
    {
        let _ = write!(text, " ({iso})");
    }
    text
}

fn iso_time(secs: f64) -> Option<String> {
    let millis = (secs * 1000.0).round();
    if !millis.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(millis as i64)
        .map(|t| t.to_rfc3339_opts(SecondsFormat::Millis, true))
}

#[cfg(test)]
mod tests {
    use framedecode::core::{CType, Conversion};

    use super::*;

    #[test]
    fn timestamp_gets_iso_annotation() {
        let text = format_measure("RTCtimestamp", &Value::U32(1_677_626_379), None);
        assert_eq!(text, "1677626379 (2023-02-28T23:19:39.000Z)");
    }

    #[test]
    fn precision_rounds_converted_values() {
        let field = FieldDef::new("pressure", CType::U16)
            .with_conversion(Conversion::polynomial([0.0, 0.1]).with_precision(1));
        let text = format_measure("pressure", &Value::F64(983.2000000000001), Some(&field));
        assert_eq!(text, "983.2");
    }

    #[test]
    fn strings_ignore_precision() {
        let field = FieldDef::new("tag", CType::Char)
            .with_conversion(Conversion::default().with_precision(3));
        assert_eq!(format_measure("tag", &Value::string("AB"), Some(&field)), "AB");
    }

    #[test]
    fn table_lists_rows_with_comments() {
        let schema: Schema = [FieldDef::new("sats", CType::U8).with_comment("Satellites")]
            .into_iter()
            .collect();
        let mut decoder = framedecode::FrameDecoder::new(&schema);
        decoder.set_order(["sats"]);
        let frame = decoder.decode("0c").expect("decode").expect("frame");

        let table = render_table(&frame, &schema);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines, ["Name  Measure  Comment", "sats  12       Satellites"]);
    }
}
