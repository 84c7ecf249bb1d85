//! Numeric utilities shared by extraction and signature generation

/// Decimal precision policy for emitted values
pub mod precision;
/// Haar wavelet decomposition and subband energies
pub mod wavelet;
