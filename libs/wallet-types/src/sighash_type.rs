/// Which outputs a signature commits to, as a single wire byte.
///
/// `SIG_HASH_ALL` is the only variant the core requires for correctness;
/// the others (`NONE`, `SINGLE`, and the `ANYONECANPAY` modifier) must still
/// be structurally correct per the digest construction rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct SigHashType(u8);

pub const SIG_HASH_ALL: u8 = 0x01;
pub const SIG_HASH_NONE: u8 = 0x02;
pub const SIG_HASH_SINGLE: u8 = 0x04;
pub const SIG_HASH_ANYONECANPAY: u8 = 0x80;

impl SigHashType {
    pub const ALL: SigHashType = SigHashType(SIG_HASH_ALL);
    pub const NONE: SigHashType = SigHashType(SIG_HASH_NONE);
    pub const SINGLE: SigHashType = SigHashType(SIG_HASH_SINGLE);

    /// Builds a type from a raw byte without validating the base bits form
    /// a known combination. `outputs_hash` only special-cases `NONE` and
    /// `SINGLE`; an unknown base falls through the same branch as `ALL` and
    /// gets the full outputs hash, not a zeroed one.
    pub fn from_u8(byte: u8) -> SigHashType {
        SigHashType(byte)
    }

    pub fn to_u8(self) -> u8 {
        self.0
    }

    pub fn with_anyone_can_pay(self) -> SigHashType {
        SigHashType(self.0 | SIG_HASH_ANYONECANPAY)
    }

    pub fn is_anyone_can_pay(self) -> bool {
        self.0 & SIG_HASH_ANYONECANPAY != 0
    }

    fn base(self) -> u8 {
        self.0 & !SIG_HASH_ANYONECANPAY
    }

    pub fn is_all(self) -> bool {
        self.base() == SIG_HASH_ALL
    }

    pub fn is_none(self) -> bool {
        self.base() == SIG_HASH_NONE
    }

    pub fn is_single(self) -> bool {
        self.base() == SIG_HASH_SINGLE
    }
}

impl Default for SigHashType {
    fn default() -> Self {
        SigHashType::ALL
    }
}
