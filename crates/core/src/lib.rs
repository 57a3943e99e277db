//! Conversion between Endless Sky fractional color records and 24-bit
//! hexadecimal HTML color codes.

pub use color::{byte_to_fraction, fraction_to_byte, Color};
pub use convert::{
    es_file_to_hex, es_node_to_hex, format_channel, hex_file_to_es, hex_to_color, EsEntry,
    HexEntry,
};
pub use data::{DataError, DataFile, DataNode};
pub use hex::{byte_to_hex, hex_pair_to_byte};

mod color;
mod convert;
mod data;
mod hex;
