#![allow(dead_code)]

pub mod traces {
    pub const SOLAR: &str = "tests/traces/solar.txt";
    pub const INTERLEAVED: &str = "tests/traces/interleaved.txt";
    pub const ORPHAN: &str = "tests/traces/orphan.txt";
    pub const MALFORMED: &str = "tests/traces/malformed.txt";
    pub const CRLF: &str = "tests/traces/crlf.txt";
    pub const EMPTY: &str = "tests/traces/empty.txt";
    pub const MISSING: &str = "tests/traces/does_not_exist.txt";
}

/// Number of timesteps in [`traces::SOLAR`].
pub const SOLAR_STEPS: usize = 12;
/// Bodies in [`traces::SOLAR`], in order of appearance.
pub const SOLAR_BODIES: [&str; 4] = ["sun", "earth", "moon", " 0"];
