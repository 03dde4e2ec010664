//! Stateful, single-shot transaction assembly: collect inputs and spending
//! keys, collect recipient outputs under the two-recipient cap, fold or
//! emit change, then sign every input in one pass.

use crate::sighash::SighashEngine;
use crate::{Result, TxError};
use wallet_codec::address::decode_address;
use wallet_crypto::signer::{sign_input, SignatureKind};
use wallet_crypto::KeyPair;
use wallet_types::{
    Network, Outpoint, ScriptPublicKey, SigHashType, SighashReusedValues, Transaction, TxInput, TxOutput,
    UtxoForSigning,
};

const MAX_RECIPIENT_OUTPUTS: usize = 2;
const DUST_THRESHOLD: u64 = 1000;

fn signature_kind_for(script: &ScriptPublicKey) -> Result<SignatureKind> {
    match (script.script.len(), script.script.first(), script.script.last()) {
        (34, Some(0x20), Some(0xAC)) => Ok(SignatureKind::Schnorr),
        (35, Some(0x21), Some(0xAB)) => Ok(SignatureKind::Ecdsa),
        _ => Err(TxError::InvalidTransaction("unsupported spend script template".into())),
    }
}

fn decode_for_network(address: &str, network: Network) -> Result<ScriptPublicKey> {
    let expected_prefix = network.address_prefix();
    let actual_prefix = address.split(':').next().unwrap_or("");
    if actual_prefix != expected_prefix {
        return Err(TxError::InvalidTransaction(format!(
            "address prefix {actual_prefix} does not match the {expected_prefix} network"
        )));
    }
    let (_version, script_public_key) = decode_address(address)?;
    Ok(script_public_key)
}

/// Builds one transaction, holding borrowed spending keys until `sign`
/// consumes the builder and hands the caller a fully-signed [`Transaction`].
pub struct TxBuilder<'a> {
    network: Network,
    transaction: Transaction,
    pending_inputs: Vec<(UtxoForSigning, &'a KeyPair)>,
    recipient_count: usize,
    fee: Option<u64>,
}

impl<'a> TxBuilder<'a> {
    pub fn new(network: Network) -> Self {
        Self {
            network,
            transaction: Transaction::new(0),
            pending_inputs: Vec::new(),
            recipient_count: 0,
            fee: None,
        }
    }

    /// Appends a spendable input. Rejects a duplicate outpoint -- each utxo
    /// may fund a transaction at most once.
    pub fn add_input(&mut self, utxo: UtxoForSigning, spending_key: &'a KeyPair) -> Result<()> {
        if self.pending_inputs.iter().any(|(existing, _)| existing.outpoint == utxo.outpoint) {
            return Err(TxError::InvalidTransaction(format!(
                "duplicate outpoint {}:{}",
                hex::encode(utxo.outpoint.transaction_id),
                utxo.outpoint.index
            )));
        }
        self.transaction.inputs.push(TxInput::new(utxo.outpoint, 0, 1));
        self.pending_inputs.push((utxo, spending_key));
        Ok(())
    }

    /// Appends a recipient output. Capped at two non-change outputs per
    /// transaction; callers needing more must split across transactions.
    pub fn add_output(&mut self, address: &str, amount: u64) -> Result<()> {
        if amount == 0 {
            return Err(TxError::InvalidTransaction("output amount must be greater than zero".into()));
        }
        if self.recipient_count >= MAX_RECIPIENT_OUTPUTS {
            return Err(TxError::TooManyRecipients { count: self.recipient_count + 1, cap: MAX_RECIPIENT_OUTPUTS });
        }
        let script_public_key = decode_for_network(address, self.network)?;
        self.transaction.outputs.push(TxOutput::new(amount, script_public_key));
        self.recipient_count += 1;
        Ok(())
    }

    pub fn set_fee(&mut self, amount: u64) {
        self.fee = Some(amount);
    }

    pub fn set_subnetwork_id(&mut self, subnetwork_id: [u8; wallet_types::SUBNETWORK_ID_SIZE]) {
        self.transaction.subnetwork_id = subnetwork_id;
    }

    pub fn set_payload(&mut self, payload: Vec<u8>) {
        self.transaction.payload = payload;
    }

    /// Computes change = inputs - outputs - fee. Appends a change output
    /// when change clears the dust threshold; otherwise folds the
    /// remainder into the fee and emits nothing.
    pub fn add_change_output(&mut self, address: &str) -> Result<()> {
        let fee = self.fee.ok_or_else(|| TxError::InvalidTransaction("fee must be set before computing change".into()))?;

        let input_total: u64 = self.pending_inputs.iter().map(|(utxo, _)| utxo.amount).sum();
        let output_total: u64 = self.transaction.outputs.iter().map(|o| o.amount).sum();
        let spent = output_total
            .checked_add(fee)
            .ok_or_else(|| TxError::InvalidTransaction("output total plus fee overflowed".into()))?;

        if input_total < spent {
            return Err(TxError::InsufficientFunds { available: input_total, required: spent });
        }

        let change = input_total - spent;
        if change >= DUST_THRESHOLD {
            let script_public_key = decode_for_network(address, self.network)?;
            self.transaction.outputs.push(TxOutput::new(change, script_public_key));
            log::debug!("change output of {change} base units added");
        } else if change > 0 {
            log::debug!("change of {change} base units folded into fee (below dust threshold)");
        }
        Ok(())
    }

    /// Validates every input has a spending key, signs each input's
    /// sighash digest, and returns the finished transaction.
    pub fn sign(mut self) -> Result<Transaction> {
        if self.transaction.inputs.is_empty() {
            return Err(TxError::InvalidTransaction("transaction has no inputs".into()));
        }

        let utxos: Vec<UtxoForSigning> = self.pending_inputs.iter().map(|(u, _)| u.clone()).collect();
        let mut reused = SighashReusedValues::new();

        for index in 0..self.transaction.inputs.len() {
            let (utxo, keypair) = &self.pending_inputs[index];
            let kind = signature_kind_for(&utxo.script_public_key)?;
            let sighash_type = SigHashType::ALL;

            let digest = match kind {
                SignatureKind::Schnorr => {
                    SighashEngine::calc_schnorr_signature_hash(&self.transaction, index, &utxos[index], sighash_type, &mut reused)
                }
                SignatureKind::Ecdsa => {
                    SighashEngine::calc_ecdsa_signature_hash(&self.transaction, index, &utxos[index], sighash_type, &mut reused)
                }
            };

            let signature_script = sign_input(keypair, &digest, sighash_type, kind)?;
            self.transaction.inputs[index].signature_script = signature_script;
            log::trace!("input {index} signed with {kind:?}");
        }

        Ok(self.transaction)
    }

    /// Recipient-output script length, for a caller estimating mass before
    /// `set_fee` -- a crude stand-in for `FeePolicy::min_fee`'s real input.
    pub fn pending_output_count(&self) -> usize {
        self.transaction.outputs.len()
    }

    pub fn pending_input_count(&self) -> usize {
        self.transaction.inputs.len()
    }
}
