//! Minimum-fee computation from an affine transaction mass model.

/// Fixed per-transaction overhead, in mass units.
pub const MASS_BASE: u64 = 100;
/// Mass contributed by each input (outpoint, sequence, sig-op-count, and
/// the amortized cost of its signature-script).
pub const MASS_PER_INPUT: u64 = 110;
/// Mass contributed by each output (amount, script-version, and script).
pub const MASS_PER_OUTPUT: u64 = 50;
/// Mass contributed by each byte of payload.
pub const MASS_PER_PAYLOAD_BYTE: u64 = 1;

/// Minimum fee rate, in base units per mass unit.
pub const MIN_FEE_RATE: u64 = 1;
/// Absolute minimum fee regardless of how small the computed mass is.
pub const ABSOLUTE_FLOOR: u64 = 1000;

/// Mass = base + inputs*per_input + outputs*per_output + payload_len*per_byte.
pub fn calculate_mass(n_inputs: usize, n_outputs: usize, payload_len: usize) -> u64 {
    MASS_BASE
        + n_inputs as u64 * MASS_PER_INPUT
        + n_outputs as u64 * MASS_PER_OUTPUT
        + payload_len as u64 * MASS_PER_PAYLOAD_BYTE
}

/// `max(mass * MIN_FEE_RATE, ABSOLUTE_FLOOR)`.
pub fn min_fee(n_inputs: usize, n_outputs: usize, payload_len: usize) -> u64 {
    let mass = calculate_mass(n_inputs, n_outputs, payload_len);
    (mass * MIN_FEE_RATE).max(ABSOLUTE_FLOOR)
}
