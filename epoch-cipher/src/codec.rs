//! Wire format for encrypted packets.
//!
//! One packet per plaintext character: the per-prime residues as decimal
//! integers, separated by the delimiter, with a trailing delimiter after
//! the final integer. Packet length equals the key length and is not
//! encoded; the decoder learns it from the shared key halves.

use itertools::Itertools;

use crate::errors::CipherError;

/// Separator between residues inside a packet; also trails the packet.
pub const PACKET_DELIMITER: &str = ".";

/// Renders one packet.
///
/// # Example
///
/// ```
/// # use epoch_cipher::codec::packet_to_string;
/// assert_eq!(packet_to_string(&[12, 7, 301]), "12.7.301.");
/// ```
pub fn packet_to_string(residues: &[u64]) -> String {
    let mut packet = residues.iter().join(PACKET_DELIMITER);
    packet.push_str(PACKET_DELIMITER);
    packet
}

/// Parses one packet back into its residues.
///
/// Splits on the delimiter and discards the trailing empty field; its
/// absence, or any non-numeric field, is a malformed packet.
///
/// # Example
///
/// ```
/// # use epoch_cipher::codec::parse_packet;
/// assert_eq!(parse_packet("12.7.301.").unwrap(), vec![12, 7, 301]);
/// assert!(parse_packet("12.7.301").is_err());
/// ```
pub fn parse_packet(packet: &str) -> Result<Vec<u64>, CipherError> {
    let body = packet.strip_suffix(PACKET_DELIMITER).ok_or_else(|| {
        CipherError::MalformedPacket(format!(
            "packet {packet:?} is missing its trailing delimiter"
        ))
    })?;

    body.split(PACKET_DELIMITER)
        .map(|field| {
            field.parse::<u64>().map_err(|_| {
                CipherError::MalformedPacket(format!("invalid residue field {field:?}"))
            })
        })
        .collect()
}
