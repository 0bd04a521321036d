//! Cross-crate tests for GreenCabal. See `tests/`.
