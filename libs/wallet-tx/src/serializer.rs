//! The shared little-endian primitive writer, the Kaspa-style compact
//! varint, and Mode-A (transaction-id) canonical serialization.

use wallet_types::{Transaction, TxOutput};

pub fn write_u16_le(buf: &mut Vec<u8>, value: u16) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn write_u32_le(buf: &mut Vec<u8>, value: u32) {
    buf.extend_from_slice(&value.to_le_bytes());
}

pub fn write_u64_le(buf: &mut Vec<u8>, value: u64) {
    buf.extend_from_slice(&value.to_le_bytes());
}

/// Kaspa-style compact length prefix: single byte for 0x00-0xFC, otherwise
/// a marker byte followed by a fixed-width little-endian integer.
pub fn write_varint(buf: &mut Vec<u8>, value: u64) {
    if value < 0xFD {
        buf.push(value as u8);
    } else if value <= u16::MAX as u64 {
        buf.push(0xFD);
        write_u16_le(buf, value as u16);
    } else if value <= u32::MAX as u64 {
        buf.push(0xFE);
        write_u32_le(buf, value as u32);
    } else {
        buf.push(0xFF);
        write_u64_le(buf, value);
    }
}

/// Writes one output as `amount || script-version || varint(len) || script`,
/// the encoding shared by Mode-A output serialization and the outputs
/// sub-hash in the sighash engine.
pub fn write_output(buf: &mut Vec<u8>, output: &TxOutput) {
    write_u64_le(buf, output.amount);
    write_u16_le(buf, output.script_public_key.version);
    write_varint(buf, output.script_public_key.script.len() as u64);
    buf.extend_from_slice(&output.script_public_key.script);
}

/// Mode A: the canonical byte string double-Blake3'd to produce the
/// transaction-id. Signature scripts are zero-length and omitted so the
/// id is stable under re-signing; every outpoint transaction-id is written
/// byte-reversed.
pub fn serialize_for_id(tx: &Transaction) -> Vec<u8> {
    let mut buf = Vec::new();

    write_u16_le(&mut buf, tx.version);

    write_varint(&mut buf, tx.inputs.len() as u64);
    for input in &tx.inputs {
        let mut reversed_txid = input.previous_outpoint.transaction_id;
        reversed_txid.reverse();
        buf.extend_from_slice(&reversed_txid);
        write_u32_le(&mut buf, input.previous_outpoint.index);
        write_varint(&mut buf, 0);
        write_u64_le(&mut buf, input.sequence);
        buf.push(input.sig_op_count);
    }

    write_varint(&mut buf, tx.outputs.len() as u64);
    for output in &tx.outputs {
        write_output(&mut buf, output);
    }

    write_u64_le(&mut buf, tx.lock_time);
    buf.extend_from_slice(&tx.subnetwork_id);
    write_u64_le(&mut buf, tx.gas);
    write_varint(&mut buf, tx.payload.len() as u64);
    buf.extend_from_slice(&tx.payload);

    buf
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn varint_single_byte_boundary() {
        let mut buf = Vec::new();
        write_varint(&mut buf, 0xFC);
        assert_eq!(buf, vec![0xFC]);
    }

    #[test]
    fn varint_u16_prefix() {
        let mut buf = Vec::new();
        write_varint(&mut buf, 0xFD);
        assert_eq!(buf, vec![0xFD, 0xFD, 0x00]);
    }

    #[test]
    fn varint_u32_prefix() {
        let mut buf = Vec::new();
        write_varint(&mut buf, 0x1_0000);
        assert_eq!(buf, vec![0xFE, 0x00, 0x00, 0x01, 0x00]);
    }

    #[test]
    fn varint_u64_prefix() {
        let mut buf = Vec::new();
        write_varint(&mut buf, u32::MAX as u64 + 1);
        assert_eq!(buf[0], 0xFF);
        assert_eq!(buf.len(), 9);
    }

    /// Decodes exactly what `write_varint` produces; only exists to make the
    /// round-trip property below meaningful, since the wire format never
    /// needs a reader on the signing-only side of this core.
    fn read_varint(buf: &[u8]) -> u64 {
        match buf[0] {
            0xFD => u16::from_le_bytes([buf[1], buf[2]]) as u64,
            0xFE => u32::from_le_bytes([buf[1], buf[2], buf[3], buf[4]]) as u64,
            0xFF => u64::from_le_bytes(buf[1..9].try_into().unwrap()),
            marker => marker as u64,
        }
    }

    proptest! {
        #[test]
        fn varint_round_trips(value: u64) {
            let mut buf = Vec::new();
            write_varint(&mut buf, value);
            prop_assert_eq!(read_varint(&buf), value);
        }
    }
}
