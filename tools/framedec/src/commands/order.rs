use anyhow::Result;
use clap::Args;
use framedecode::core::FrameConfig;

use crate::source::ConfigSource;

#[derive(Args)]
pub struct OrderArgs {
    #[command(flatten)]
    source: ConfigSource,
}

impl OrderArgs {
    pub fn run(self) -> Result<()> {
        let config = self.source.load()?;
        print!("{}", describe_order(&config));
        Ok(())
    }
}

/// One line per layout entry with its type, width and byte offset.
pub fn describe_order(config: &FrameConfig) -> String {
    let mut out = String::new();
    let mut offset = Some(0usize);

    for (index, name) in config.order.iter().enumerate() {
        let position = offset.map_or_else(|| "?".to_string(), |o| o.to_string());
        match config.sensors.get(name) {
            Some(field) => {
                out.push_str(&format!(
                    "{:>2}. {name} ({}, {} B, offset {position})\n",
                    index + 1,
                    field.ty,
                    field.width(),
                ));
                offset = offset.map(|o| o + field.width());
            }
            None => {
                out.push_str(&format!("{:>2}. {name} (not defined)\n", index + 1));
                offset = None;
            }
        }
    }

    match offset {
        Some(total) => out.push_str(&format!("frame width: {total} bytes\n")),
        None => out.push_str("frame width: unknown\n"),
    }
    out
}

#[cfg(test)]
mod tests {
    use framedecode::core::{CType, FieldDef};

    use super::*;

    #[test]
    fn offsets_accumulate_until_unknown_field() {
        let config = FrameConfig {
            sensors: [FieldDef::new("a", CType::U16), FieldDef::new("b", CType::F64)]
                .into_iter()
                .collect(),
            order: vec!["a".into(), "b".into(), "ghost".into(), "a".into()],
            samples: Vec::new(),
        };
        let text = describe_order(&config);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            [
                " 1. a (uint16_t, 2 B, offset 0)",
                " 2. b (double, 8 B, offset 2)",
                " 3. ghost (not defined)",
                " 4. a (uint16_t, 2 B, offset ?)",
                "frame width: unknown",
            ]
        );
    }
}
