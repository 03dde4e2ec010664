use crate::serializer::serialize_for_id;
use wallet_types::Transaction;

/// Transaction id = double-Blake3 of the Mode-A canonical serialization.
/// Stable against any change to signature scripts, since those are
/// zero-length for the purposes of this hash.
pub fn transaction_id(tx: &Transaction) -> [u8; 32] {
    let preimage = serialize_for_id(tx);
    let first = blake3::hash(&preimage);
    let second = blake3::hash(first.as_bytes());
    *second.as_bytes()
}

/// Renders a transaction id as big-endian hex, per the wire convention.
pub fn transaction_id_hex(tx: &Transaction) -> String {
    let mut id = transaction_id(tx);
    id.reverse();
    hex::encode(id)
}
