//! Pick identifiers and their flat-color encoding.
//!
//! During an ID pass each pickable draw writes `encode(id)` instead of its lit
//! color. RGB carry the id as little-endian bytes and alpha is fully opaque,
//! marking the pixel as pickable. Everything else in an ID pass (background
//! and non-pickable geometry) is [`NO_HIT_COLOR`], whose zero alpha can never
//! decode to an id.

use std::fmt;
use std::num::NonZeroU32;

/// Largest id that fits the three color channels
pub const MAX_PICK_ID: u32 = 0x00FF_FFFF;

/// Sentinel written where nothing pickable is visible
pub const NO_HIT_COLOR: [u8; 4] = [0, 0, 0, 0];

/// Identifies one pickable object within a frame. Always in `1..=MAX_PICK_ID`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PickId(NonZeroU32);

impl PickId {
    /// Returns `None` for zero or for ids past [`MAX_PICK_ID`]
    pub const fn new(raw: u32) -> Option<Self> {
        if raw > MAX_PICK_ID {
            return None;
        }
        match NonZeroU32::new(raw) {
            Some(id) => Some(Self(id)),
            None => None,
        }
    }

    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Flat RGBA color representing this id in an ID pass
    pub fn encode(self) -> [u8; 4] {
        let [r, g, b, _] = self.get().to_le_bytes();
        [r, g, b, u8::MAX]
    }

    /// Inverse of [`PickId::encode`]. Anything not produced by `encode`
    /// (background, sentinel, lit colors with partial alpha) yields `None`.
    pub fn decode(rgba: [u8; 4]) -> Option<Self> {
        let [r, g, b, a] = rgba;
        if a != u8::MAX {
            return None;
        }
        Self::new(u32::from_le_bytes([r, g, b, 0]))
    }
}

impl fmt::Display for PickId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.get())
    }
}

/// Result of resolving a pick request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickTarget {
    /// Background, non-pickable geometry, or a point outside the viewport
    None,
    Object(PickId),
}

impl PickTarget {
    pub fn from_color(rgba: [u8; 4]) -> Self {
        PickId::decode(rgba).map_or(Self::None, Self::Object)
    }

    /// Raw id with `0` standing for "no hit"
    pub fn as_raw(&self) -> u32 {
        match *self {
            Self::Object(id) => id.get(),
            Self::None => 0,
        }
    }

    pub fn id(&self) -> Option<PickId> {
        match *self {
            Self::Object(id) => Some(id),
            Self::None => None,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}
