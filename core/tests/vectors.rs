//! The literal test scenarios a reference implementation is checked
//! against: one per named scenario, each named after it.

use hoosat_wallet_core::{
    coins_to_base_units, decode_address, encode_address, transaction_id, AddressVersion, FeeEstimator, KeyPair,
    MempoolEntry, Network, Outpoint, ScriptPublicKey, SigHashType, Transaction, TxBuilder, TxInput, TxOutput,
    UtxoForSigning,
};

fn reference_transaction() -> Transaction {
    let mut prev_txid = [0u8; 32];
    hex::decode_to_slice(
        "091ea22a707ac840c8291706fca5421a61ee03147f3f9655133d5b62ec38f29f",
        &mut prev_txid,
    )
    .unwrap();

    let mut tx = Transaction::new(0);
    tx.inputs.push(TxInput::new(Outpoint::new(prev_txid, 0), 0, 1));
    tx.outputs.push(TxOutput::new(
        1000,
        ScriptPublicKey::new(0, hex::decode("20fe34183d4e783b5dbd572b338d6e4c084ef92fa941a77bbe9b23acf27107f065ac").unwrap()),
    ));
    tx.outputs.push(TxOutput::new(
        19_999_989_000,
        ScriptPublicKey::new(
            0,
            hex::decode("2102eddf8d68ad880ec15b9d0de338d62f53630af2efc2e2d3a03e2f7a65c379fbaaab").unwrap(),
        ),
    ));
    tx
}

/// S1 -- transaction id of the reference skeleton is deterministic and
/// unaffected by populating a signature script afterward.
#[test]
fn s1_transaction_id_is_deterministic_and_signature_script_independent() {
    let tx = reference_transaction();
    let id_a = transaction_id(&tx);
    let id_b = transaction_id(&tx);
    assert_eq!(id_a, id_b);
    assert_eq!(hex::encode(id_a).len(), 64);

    let mut mutated = tx;
    mutated.inputs[0].signature_script = vec![0x41; 66];
    assert_eq!(transaction_id(&mutated), id_a);
}

/// S3 -- signing produces a 66-byte signature script: 0x41, 64 raw
/// signature bytes, and the SIGHASH_ALL byte.
#[test]
fn s3_signature_script_has_expected_shape() {
    let keypair = KeyPair::generate();
    let utxo = UtxoForSigning::new(
        Outpoint::new([7u8; 32], 0),
        10_000,
        ScriptPublicKey::schnorr_p2pk(&keypair.x_only_public_key()),
        0,
        false,
    );
    let recipient = encode_address(&keypair.x_only_public_key(), Network::Mainnet).unwrap();

    let mut builder = TxBuilder::new(Network::Mainnet);
    builder.add_input(utxo, &keypair).unwrap();
    builder.add_output(&recipient, 5_000).unwrap();
    builder.set_fee(1_000);
    builder.add_change_output(&recipient).unwrap();
    let tx = builder.sign().unwrap();

    let script = &tx.inputs[0].signature_script;
    assert_eq!(script.len(), 66);
    assert_eq!(script[0], 0x41);
    assert_eq!(script[65], SigHashType::ALL.to_u8());
}

/// S4 -- address version dispatch: Schnorr keys encode as version 0x00
/// under the `hoosat:q` prefix, ECDSA keys as version 0x01, and a 20-byte
/// payload is rejected outright.
#[test]
fn s4_address_version_dispatch() {
    let schnorr_key = [0x11u8; 32];
    let address = encode_address(&schnorr_key, Network::Mainnet).unwrap();
    assert!(address.starts_with("hoosat:q"));
    let (version, _) = decode_address(&address).unwrap();
    assert_eq!(version, AddressVersion::Schnorr);
    assert_eq!(version.to_byte(), 0x00);

    let ecdsa_key = [0x22u8; 33];
    let address = encode_address(&ecdsa_key, Network::Mainnet).unwrap();
    let (version, _) = decode_address(&address).unwrap();
    assert_eq!(version, AddressVersion::Ecdsa);
    assert_eq!(version.to_byte(), 0x01);

    let invalid_payload = [0u8; 20];
    assert!(encode_address(&invalid_payload, Network::Mainnet).is_err());
}

/// S5 -- an empty mempool sample yields the fixed conservative fallback.
#[test]
fn s5_fee_estimator_fallback_on_empty_mempool() {
    let mut estimator = FeeEstimator::with_default_ttl();
    let recs = estimator.estimate(&Vec::<MempoolEntry>::new());
    assert_eq!(recs.low, 1);
    assert_eq!(recs.normal, 1);
    assert_eq!(recs.high, 2);
    assert_eq!(recs.urgent, 3);
    assert_eq!(recs.based_on_samples, 0);
    assert_eq!(recs.mempool_size, 0);
}

/// S6 -- inputs summing to 10,000,000 funding a 9,000,000 output plus a
/// 2,000,000 fee cannot cover the spend; `addChangeOutput` must fail.
#[test]
fn s6_insufficient_funds_detection() {
    let keypair = KeyPair::generate();
    let utxo = UtxoForSigning::new(
        Outpoint::new([3u8; 32], 0),
        10_000_000,
        ScriptPublicKey::schnorr_p2pk(&keypair.x_only_public_key()),
        0,
        false,
    );
    let recipient = encode_address(&keypair.x_only_public_key(), Network::Mainnet).unwrap();

    let mut builder = TxBuilder::new(Network::Mainnet);
    builder.add_input(utxo, &keypair).unwrap();
    builder.add_output(&recipient, 9_000_000).unwrap();
    builder.set_fee(2_000_000);
    let result = builder.add_change_output(&recipient);
    assert!(result.is_err());
}

/// Sanity check for the `coins_to_base_units` conversion used throughout
/// these scenarios' amounts.
#[test]
fn coin_amounts_convert_to_expected_base_units() {
    assert_eq!(coins_to_base_units("199.9998900").unwrap(), 19_999_989_000);
}
