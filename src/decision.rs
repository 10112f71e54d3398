use serde::Serialize;
use serde_json::ser::Formatter;
use std::io::{self, Write};

/// Verdict written back to Claude Code on stdout
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "decision", rename_all = "lowercase")]
pub enum Decision {
    Allow,
    Block { reason: String },
}

impl Decision {
    /// Block with all issues joined one per line, or allow if there are none
    pub fn from_issues(issues: &[String]) -> Self {
        if issues.is_empty() {
            Decision::Allow
        } else {
            Decision::Block {
                reason: issues.join("\n"),
            }
        }
    }

    /// Write the decision as a single line of JSON
    pub fn write_to(&self, mut writer: impl Write) -> anyhow::Result<()> {
        let mut ser = serde_json::Serializer::with_formatter(&mut writer, SpacedFormatter);
        self.serialize(&mut ser)?;
        writer.write_all(b"\n")?;
        writer.flush()?;
        Ok(())
    }
}

/// Single-line JSON with `", "` and `": "` separators
struct SpacedFormatter;

impl Formatter for SpacedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + Write,
    {
        writer.write_all(b": ")
    }
}
