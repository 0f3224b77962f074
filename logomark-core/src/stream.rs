//! Seeded draw stream.
//!
//! A seed string is folded FNV-1a style into 32 bits, then every draw runs a
//! shift/add/xor mix over the state and returns `(state % 10000) / 10000`.
//! Draws are therefore quantized to four decimal digits; golden fixtures
//! depend on that.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ParseEnumError;

pub const FNV_OFFSET: u32 = 2_166_136_261;
pub const FNV_PRIME: u32 = 16_777_619;
/// Number of distinct values a draw can take.
pub const RESOLUTION: u32 = 10_000;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// How the seed fold is evaluated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HashMode {
    /// Exact 32-bit wraparound arithmetic.
    #[default]
    Wrapping,
    /// Accumulator carried as an IEEE double with int32 coercion before each
    /// xor, as engines without native 32-bit multiply evaluate the fold. The
    /// product can exceed 2^53 and lose low bits, so seeds longer than a
    /// couple of characters diverge from `Wrapping`.
    DoublePrecision,
}

impl HashMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashMode::Wrapping => "wrapping",
            HashMode::DoublePrecision => "double-precision",
        }
    }
}

impl fmt::Display for HashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result { f.write_str(self.as_str()) }
}

impl FromStr for HashMode {
    type Err = ParseEnumError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wrapping" => Ok(HashMode::Wrapping),
            "double-precision" | "double" => Ok(HashMode::DoublePrecision),
            _ => Err(ParseEnumError::new("hash mode", s)),
        }
    }
}

/// Anything that can hand out unit draws in [0, 1).
///
/// Composers take `&mut impl UnitSource` so tests can script the draws.
pub trait UnitSource {
    fn next_unit(&mut self) -> f64;

    /// `floor(draw * len)`; always consumes one draw. `len` must be non-zero.
    fn next_index(&mut self, len: usize) -> usize {
        let draw = self.next_unit();
        ((draw * len as f64).floor() as usize).min(len.saturating_sub(1))
    }

    /// Uniform pick over a non-empty slice.
    fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        let idx = self.next_index(items.len());
        &items[idx]
    }
}

/// Fold a seed string into the initial 32-bit state.
pub fn fnv_fold(seed: &str) -> u32 {
    seed.encode_utf16()
        .fold(FNV_OFFSET, |h, unit| (h ^ u32::from(unit)).wrapping_mul(FNV_PRIME))
}

/// The same fold with a double-precision accumulator. The result is left
/// unreduced; the first draw reduces it.
pub fn fnv_fold_f64(seed: &str) -> f64 {
    seed.encode_utf16().fold(f64::from(FNV_OFFSET), |h, unit| {
        f64::from(to_int32(h) ^ i32::from(unit)) * f64::from(FNV_PRIME)
    })
}

fn to_uint32(x: f64) -> u32 {
    x.trunc().rem_euclid(TWO_POW_32) as u32
}

fn to_int32(x: f64) -> i32 {
    to_uint32(x) as i32
}

/// Stateful generator. One instance per variant.
#[derive(Debug, Clone)]
pub struct DeterministicStream {
    state: u32,
    // Unreduced double-precision fold, consumed by the first draw.
    wide: Option<f64>,
}

impl DeterministicStream {
    pub fn new(seed: &str) -> Self { Self::with_mode(seed, HashMode::Wrapping) }

    pub fn with_mode(seed: &str, mode: HashMode) -> Self {
        match mode {
            HashMode::Wrapping => Self { state: fnv_fold(seed), wide: None },
            HashMode::DoublePrecision => Self { state: 0, wide: Some(fnv_fold_f64(seed)) },
        }
    }

    /// Start from a raw 32-bit state, skipping the fold.
    pub fn from_state(state: u32) -> Self { Self { state, wide: None } }

    /// Next value in [0, 1).
    pub fn draw(&mut self) -> f64 {
        let mut h = match self.wide.take() {
            Some(wide) => to_uint32(wide + f64::from(to_int32(wide) << 13)),
            None => self.state.wrapping_add(self.state << 13),
        };
        h ^= h >> 7;
        h = h.wrapping_add(h << 3);
        h ^= h >> 17;
        h = h.wrapping_add(h << 5);
        self.state = h;
        f64::from(h % RESOLUTION) / f64::from(RESOLUTION)
    }
}

impl UnitSource for DeterministicStream {
    fn next_unit(&mut self) -> f64 { self.draw() }
}

impl Iterator for DeterministicStream {
    type Item = f64;
    fn next(&mut self) -> Option<f64> { Some(self.draw()) }
}
