//! Record parsing and formatting between the two color encodings, plus
//! the file batch passes driving them.
//!
//! Batch passes are best-effort: lines that don't form a complete color
//! record are skipped (logged at debug level), never an error. A record
//! with a malformed hex token is kept, but carries no channels.

use std::fmt;
use std::path::Path;

use crate::color::{byte_to_fraction, fraction_to_byte, Color};
use crate::data::{DataError, DataFile, DataNode};
use crate::hex::{byte_to_hex, hex_pair_to_byte};

/// Marker token that opens a color record in a data file.
const COLOR_MARKER: &str = "color";

/// A full fractional record carries marker, name, and three channels.
const MIN_ES_TOKENS: usize = 5;

/// A hex record carries marker, name, and one hex-code token.
const MIN_HEX_TOKENS: usize = 3;

/// One converted entry from a fractional-to-hex pass.
#[derive(Debug, Clone, PartialEq)]
pub struct HexEntry {
    pub name: String,
    pub code: String,
}

impl fmt::Display for HexEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "\"{}\" {}", self.name, self.code)
    }
}

/// One converted entry from a hex-to-fractional pass. `color` is None
/// when the hex token was malformed; the entry still prints, name only.
#[derive(Debug, Clone, PartialEq)]
pub struct EsEntry {
    pub name: String,
    pub color: Option<Color>,
}

impl fmt::Display for EsEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "color \"{}\"", self.name)?;
        if let Some(color) = &self.color {
            for value in color.channels() {
                write!(f, " {}", format_channel(value))?;
            }
        }
        Ok(())
    }
}

/// Render the three channels starting at `first_channel` as a `#RRGGBB`
/// code. A fourth (alpha) channel is not representable in hex and is
/// ignored.
pub fn es_node_to_hex(node: &DataNode, first_channel: usize) -> String {
    let mut code = String::from("#");
    for i in 0..3 {
        code.push_str(&byte_to_hex(fraction_to_byte(node.value(first_channel + i))));
    }
    code
}

/// Decode a `#RRGGBB` token into fractional channels. Returns None when
/// the token lacks the `#` prefix or is shorter than 7 characters;
/// individual non-hex digits inside a long-enough token decode as 0.
pub fn hex_to_color(hex: &str) -> Option<Color> {
    if !hex.starts_with('#') || hex.len() < 7 {
        return None;
    }
    let pair = |range| hex.get(range).map_or(0, hex_pair_to_byte);
    Some(Color::new(
        byte_to_fraction(pair(1..3)),
        byte_to_fraction(pair(3..5)),
        byte_to_fraction(pair(5..7)),
    ))
}

/// Convert every qualifying fractional record in the file at `path` to a
/// hex entry, preserving input order.
pub fn es_file_to_hex(path: &Path) -> Result<Vec<HexEntry>, DataError> {
    let file = DataFile::load(path)?;

    let mut entries = Vec::new();
    for node in &file {
        if node.token(0) == COLOR_MARKER && node.size() >= MIN_ES_TOKENS {
            entries.push(HexEntry {
                name: node.token(1).to_string(),
                code: es_node_to_hex(node, 2),
            });
        } else {
            log::debug!("skipping line starting with {:?}", node.token(0));
        }
    }
    Ok(entries)
}

/// Convert every qualifying hex record in the file at `path` to a
/// fractional entry, preserving input order.
pub fn hex_file_to_es(path: &Path) -> Result<Vec<EsEntry>, DataError> {
    let file = DataFile::load(path)?;

    let mut entries = Vec::new();
    for node in &file {
        if node.token(0) == COLOR_MARKER && node.size() >= MIN_HEX_TOKENS {
            entries.push(EsEntry {
                name: node.token(1).to_string(),
                color: hex_to_color(node.token(2)),
            });
        } else {
            log::debug!("skipping line starting with {:?}", node.token(0));
        }
    }
    Ok(entries)
}

/// Format a channel value the way the original files write them: up to
/// six significant digits, trailing zeros trimmed. Every byte scaled
/// through `byte_to_fraction` prints exactly ("1", "0", "0.501961").
pub fn format_channel(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (5 - magnitude).max(0) as usize;
    let mut text = format!("{:.*}", decimals, value);
    if text.contains('.') {
        while text.ends_with('0') {
            text.pop();
        }
        if text.ends_with('.') {
            text.pop();
        }
    }
    text
}
