#![no_main]

use fuzz_primitives::mix::{g, swap16, swap32};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: u32| {
    let halved = data as u16;

    // The 32-bit round degenerates to a plain byte reversal.
    assert_eq!(swap32(data), data.swap_bytes());
    assert_eq!(swap32(swap32(data)), data);

    // The 16-bit round always carries the old low byte into the high
    // lane, and is invertible from its output alone.
    let mixed = swap16(halved);
    assert_eq!((mixed >> 8) as u8, halved as u8);

    let right = (mixed >> 8) as u8;
    let left = (mixed as u8) ^ g(right);
    assert_eq!(((left as u16) << 8) | right as u16, halved);
});
