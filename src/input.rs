use serde::de::{self, DeserializeOwned, IgnoredAny, Visitor};
use serde::{Deserialize, Deserializer};
use serde_json::value::RawValue;
use std::fmt;
use std::io::Read;

/// Failures reading the hook input. Nothing is written to stdout for these.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("failed to read hook input from stdin")]
    ReadInput(#[from] std::io::Error),
    #[error("malformed hook input: {0}")]
    MalformedInput(String),
}

/// Input JSON from Claude Code hook system.
/// Only `tool_input.command` drives the decision; the rest is for logging.
/// Missing or mistyped fields fall back to their defaults, and unknown
/// fields are skipped without decoding their contents.
#[derive(Debug, Default, Deserialize)]
pub struct HookInput {
    #[serde(default, deserialize_with = "lenient_text")]
    pub hook_event_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub tool_name: Option<String>,
    #[serde(default, deserialize_with = "lenient_object")]
    pub tool_input: ToolInput,
}

/// Bash tool arguments
#[derive(Debug, Default, Deserialize)]
pub struct ToolInput {
    #[serde(default, deserialize_with = "lenient_text")]
    pub command: String,
}

impl HookInput {
    pub fn command(&self) -> &str {
        &self.tool_input.command
    }
}

/// Keep a nested object only if the value is one; anything else is the default.
fn lenient_object<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    if !raw.get().trim_start().starts_with('{') {
        return Ok(T::default());
    }
    Ok(serde_json::from_str(raw.get()).unwrap_or_default())
}

/// Keep a string value; anything else is the default.
/// Escapes that are not valid UTF-16 (lone surrogates) become U+FFFD.
fn lenient_text<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: From<String> + Default,
{
    let raw = Box::<RawValue>::deserialize(deserializer)?;
    Ok(decode_text(&raw).map(T::from).unwrap_or_default())
}

fn decode_text(raw: &RawValue) -> Option<String> {
    let text = raw.get();
    if !text.trim_start().starts_with('"') {
        return None;
    }
    // Byte mode hands back lone surrogates as WTF-8 instead of failing.
    let mut de = serde_json::Deserializer::from_str(text);
    (&mut de).deserialize_bytes(LossyText).ok()
}

struct LossyText;

impl<'de> Visitor<'de> for LossyText {
    type Value = String;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string")
    }

    fn visit_bytes<E: de::Error>(self, v: &[u8]) -> Result<String, E> {
        Ok(String::from_utf8_lossy(v).into_owned())
    }
}

/// Parse a hook input document. The root must be a single JSON object.
pub fn parse_input(buffer: &str) -> Result<HookInput, HookError> {
    if !buffer
        .trim_start_matches([' ', '\t', '\n', '\r'])
        .starts_with('{')
    {
        // Report syntax errors first, then the wrong root type
        let reason = match serde_json::from_str::<IgnoredAny>(buffer) {
            Ok(_) => "expected a JSON object".to_string(),
            Err(e) => e.to_string(),
        };
        return Err(HookError::MalformedInput(reason));
    }
    serde_json::from_str(buffer).map_err(|e| HookError::MalformedInput(e.to_string()))
}

pub fn read_input(mut reader: impl Read) -> Result<HookInput, HookError> {
    let mut buffer = String::new();
    reader.read_to_string(&mut buffer)?;
    parse_input(&buffer)
}
