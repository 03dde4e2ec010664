//! Mode-B: the per-input signature digest.
//!
//! This is the subsystem every reimplementation gets wrong first: field
//! order, the byte-reversal asymmetry with Mode A, and the exact boundary
//! between a compact-varint length prefix and a fixed 8-byte one.

use crate::serializer::{write_output, write_u16_le, write_u32_le, write_u64_le, write_varint};
use wallet_types::{SigHashType, SighashReusedValues, Transaction, TxOutput, UtxoForSigning};

const SCHNORR_DOMAIN: &[u8; 32] = b"TransactionSigningHash\0\0\0\0\0\0\0\0\0\0";
const ECDSA_DOMAIN: &[u8; 32] = b"TransactionSigningHashECDSA\0\0\0\0\0";

/// A zero-sized namespace for the two digest constructors. Carries no
/// state of its own -- all caching lives in the caller-owned
/// `SighashReusedValues`.
pub struct SighashEngine;

/// Writes `len(bytes) as u64 LE || bytes`. This is the hasher's own
/// var-bytes convention, distinct from the compact varint Mode-A uses for
/// wire serialization: the fixed 8-byte width here is load-bearing for the
/// S2 preimage-length test vector, not a stylistic choice.
fn write_var_bytes_u64(buf: &mut Vec<u8>, bytes: &[u8]) {
    write_u64_le(buf, bytes.len() as u64);
    buf.extend_from_slice(bytes);
}

fn previous_outputs_hash(tx: &Transaction, sighash_type: SigHashType) -> [u8; 32] {
    if sighash_type.is_anyone_can_pay() {
        return [0u8; 32];
    }
    let mut buf = Vec::new();
    for input in &tx.inputs {
        buf.extend_from_slice(&input.previous_outpoint.transaction_id);
        write_u32_le(&mut buf, input.previous_outpoint.index);
    }
    *blake3::hash(&buf).as_bytes()
}

fn sequences_hash(tx: &Transaction, sighash_type: SigHashType) -> [u8; 32] {
    if sighash_type.is_anyone_can_pay() || sighash_type.is_single() || sighash_type.is_none() {
        return [0u8; 32];
    }
    let mut buf = Vec::new();
    for input in &tx.inputs {
        write_u64_le(&mut buf, input.sequence);
    }
    *blake3::hash(&buf).as_bytes()
}

fn sig_op_counts_hash(tx: &Transaction, sighash_type: SigHashType) -> [u8; 32] {
    if sighash_type.is_anyone_can_pay() {
        return [0u8; 32];
    }
    let buf: Vec<u8> = tx.inputs.iter().map(|i| i.sig_op_count).collect();
    *blake3::hash(&buf).as_bytes()
}

fn encode_outputs(outputs: &[TxOutput]) -> Vec<u8> {
    let mut buf = Vec::new();
    for output in outputs {
        write_output(&mut buf, output);
    }
    buf
}

fn outputs_hash(tx: &Transaction, input_index: usize, sighash_type: SigHashType) -> [u8; 32] {
    if sighash_type.is_none() {
        return [0u8; 32];
    }
    if sighash_type.is_single() {
        return match tx.outputs.get(input_index) {
            Some(output) => *blake3::hash(&encode_outputs(std::slice::from_ref(output))).as_bytes(),
            None => [0u8; 32],
        };
    }
    *blake3::hash(&encode_outputs(&tx.outputs)).as_bytes()
}

fn payload_hash(tx: &Transaction) -> [u8; 32] {
    if tx.is_native_subnetwork() {
        return [0u8; 32];
    }
    let mut buf = Vec::new();
    write_var_bytes_u64(&mut buf, &tx.payload);
    *blake3::hash(&buf).as_bytes()
}

impl SighashEngine {
    /// Assembles the 17-field preimage for input `input_index` and returns
    /// the keyed-Blake3 digest over it with the Schnorr domain key. This is
    /// also the digest an ECDSA signature is ultimately derived from, via
    /// one further keyed hash (see [`Self::calc_ecdsa_signature_hash`]).
    pub fn calc_schnorr_signature_hash(
        tx: &Transaction,
        input_index: usize,
        utxo: &UtxoForSigning,
        sighash_type: SigHashType,
        reused: &mut SighashReusedValues,
    ) -> [u8; 32] {
        let input = &tx.inputs[input_index];

        let prev_outputs_hash = *reused
            .previous_outputs_hash
            .get_or_insert_with(|| previous_outputs_hash(tx, sighash_type));
        let seq_hash = *reused.sequences_hash.get_or_insert_with(|| sequences_hash(tx, sighash_type));
        let sig_op_hash = *reused
            .sig_op_counts_hash
            .get_or_insert_with(|| sig_op_counts_hash(tx, sighash_type));

        // SIGHASH_SINGLE's outputs hash depends on the input index, so it
        // cannot be cached the way the other three sub-hashes can; only
        // cache the SIGHASH_ALL case, which is shared across every input.
        let out_hash = if sighash_type.is_all() {
            *reused.outputs_hash.get_or_insert_with(|| outputs_hash(tx, input_index, sighash_type))
        } else {
            outputs_hash(tx, input_index, sighash_type)
        };

        let pay_hash = *reused.payload_hash.get_or_insert_with(|| payload_hash(tx));

        let mut buf = Vec::with_capacity(300);
        write_u16_le(&mut buf, tx.version);
        buf.extend_from_slice(&prev_outputs_hash);
        buf.extend_from_slice(&seq_hash);
        buf.extend_from_slice(&sig_op_hash);
        buf.extend_from_slice(&input.previous_outpoint.transaction_id); // not reversed here
        write_u32_le(&mut buf, input.previous_outpoint.index);
        write_u16_le(&mut buf, utxo.script_public_key.version);
        write_var_bytes_u64(&mut buf, &utxo.script_public_key.script);
        write_u64_le(&mut buf, utxo.amount);
        write_u64_le(&mut buf, input.sequence);
        buf.push(input.sig_op_count);
        buf.extend_from_slice(&out_hash);
        write_u64_le(&mut buf, tx.lock_time);
        buf.extend_from_slice(&tx.subnetwork_id);
        write_u64_le(&mut buf, tx.gas);
        buf.extend_from_slice(&pay_hash);
        buf.push(sighash_type.to_u8());

        log::trace!("sighash preimage for input {input_index}: {} bytes", buf.len());

        *blake3::keyed_hash(SCHNORR_DOMAIN, &buf).as_bytes()
    }

    /// The ECDSA digest: one further keyed Blake3 over the Schnorr digest,
    /// under the ECDSA domain separator. Never a SHA-256 outer hash -- see
    /// DESIGN.md for why that variant, present in some source examples, is
    /// rejected.
    pub fn calc_ecdsa_signature_hash(
        tx: &Transaction,
        input_index: usize,
        utxo: &UtxoForSigning,
        sighash_type: SigHashType,
        reused: &mut SighashReusedValues,
    ) -> [u8; 32] {
        let inner = Self::calc_schnorr_signature_hash(tx, input_index, utxo, sighash_type, reused);
        *blake3::keyed_hash(ECDSA_DOMAIN, &inner).as_bytes()
    }
}
