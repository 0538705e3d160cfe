//! Integration tests for Layer 0: Foundation
//!
//! Tests for plain data values and structured paths.

mod values;
