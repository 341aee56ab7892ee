//! Debounces up to eight switches sharing a single 8-bit port register.
//!
//! The caller samples the port on a fixed interval and feeds each raw
//! reading to a [`Debouncer`]; the debouncer settles out the contact
//! bounce and reports press and release edges per pin. No I/O happens in
//! here, sampling and timing belong to the caller.

#![no_std]

pub mod debounce;

pub use debounce::{Debouncer, Edge, Pull, PullConfig};

/// Single-bit masks for the eight port pins. OR them together to build
/// the `pins` argument of the [`Debouncer`] accessors.
pub const PIN_0: u8 = 1 << 0;
pub const PIN_1: u8 = 1 << 1;
pub const PIN_2: u8 = 1 << 2;
pub const PIN_3: u8 = 1 << 3;
pub const PIN_4: u8 = 1 << 4;
pub const PIN_5: u8 = 1 << 5;
pub const PIN_6: u8 = 1 << 6;
pub const PIN_7: u8 = 1 << 7;

/// Every pin on the port.
pub const ALL_PINS: u8 = 0xFF;
