//! Zone identifiers, flood status levels, and the flooded-set mask.

use core::fmt;
use core::str::FromStr;

use crate::error::FwError;

/// Identifier for a monitored zone of a school building.
///
/// The zone set is closed: buildings are partitioned into exactly three
/// zones. Enumeration order (A, B, C) is the canonical ordering everywhere
/// a zone sequence appears.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ZoneId {
    A,
    B,
    C,
}

/// Number of zones in a building.
pub const ZONE_COUNT: usize = 3;

impl ZoneId {
    /// All zones in enumeration order.
    pub const ALL: [ZoneId; ZONE_COUNT] = [ZoneId::A, ZoneId::B, ZoneId::C];

    /// 0-based position in enumeration order.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Single-letter name ("A").
    pub fn letter(self) -> &'static str {
        match self {
            ZoneId::A => "A",
            ZoneId::B => "B",
            ZoneId::C => "C",
        }
    }

    /// Display label as shown on dashboards ("Zone A").
    pub fn label(self) -> &'static str {
        match self {
            ZoneId::A => "Zone A",
            ZoneId::B => "Zone B",
            ZoneId::C => "Zone C",
        }
    }
}

impl fmt::Display for ZoneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ZoneId {
    type Err = FwError;

    /// Parses both the bare letter ("A") and the display label ("Zone A"),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let letter = trimmed
            .strip_prefix("Zone ")
            .or_else(|| trimmed.strip_prefix("zone "))
            .or_else(|| trimmed.strip_prefix("ZONE "))
            .unwrap_or(trimmed);
        match letter {
            "A" | "a" => Ok(ZoneId::A),
            "B" | "b" => Ok(ZoneId::B),
            "C" | "c" => Ok(ZoneId::C),
            _ => Err(FwError::UnknownZone {
                label: s.to_string(),
            }),
        }
    }
}

/// Flood severity level of a single zone.
///
/// The derived `Ord` gives the severity order Safe < Warning < Flooded.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub enum FloodStatus {
    #[default]
    Safe,
    Warning,
    Flooded,
}

impl FloodStatus {
    pub fn is_flooded(self) -> bool {
        matches!(self, FloodStatus::Flooded)
    }
}

impl fmt::Display for FloodStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FloodStatus::Safe => "SAFE",
            FloodStatus::Warning => "WARNING",
            FloodStatus::Flooded => "FLOODED",
        };
        f.write_str(s)
    }
}

/// A zone paired with its current flood status.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoneState {
    pub id: ZoneId,
    pub status: FloodStatus,
}

/// Set of flooded zones, packed into a 3-bit mask.
///
/// Bit 0 = A, bit 1 = B, bit 2 = C. The mask doubles as the index into the
/// evacuation route table, which enumerates all 8 membership combinations.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FloodedSet(u8);

impl FloodedSet {
    pub const EMPTY: FloodedSet = FloodedSet(0);

    /// Build a set from a raw mask. Bits above the zone count are dropped.
    pub fn from_mask(mask: u8) -> Self {
        FloodedSet(mask & 0b111)
    }

    pub fn mask(self) -> u8 {
        self.0
    }

    pub fn insert(&mut self, zone: ZoneId) {
        self.0 |= 1 << zone.index();
    }

    pub fn contains(self, zone: ZoneId) -> bool {
        self.0 & (1 << zone.index()) != 0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Flooded zones in enumeration order.
    pub fn iter(self) -> impl Iterator<Item = ZoneId> {
        ZoneId::ALL.into_iter().filter(move |z| self.contains(*z))
    }
}

impl FromIterator<ZoneId> for FloodedSet {
    fn from_iter<I: IntoIterator<Item = ZoneId>>(iter: I) -> Self {
        let mut set = FloodedSet::EMPTY;
        for zone in iter {
            set.insert(zone);
        }
        set
    }
}

impl fmt::Display for FloodedSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for zone in self.iter() {
            if !first {
                f.write_str(", ")?;
            }
            f.write_str(zone.label())?;
            first = false;
        }
        if first {
            f.write_str("(none)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_order_is_stable() {
        assert_eq!(ZoneId::ALL, [ZoneId::A, ZoneId::B, ZoneId::C]);
        assert_eq!(ZoneId::B.index(), 1);
    }

    #[test]
    fn zone_parses_letter_and_label() {
        assert_eq!("A".parse::<ZoneId>().unwrap(), ZoneId::A);
        assert_eq!("Zone B".parse::<ZoneId>().unwrap(), ZoneId::B);
        assert_eq!("zone c".parse::<ZoneId>().unwrap(), ZoneId::C);
        assert_eq!(" C ".parse::<ZoneId>().unwrap(), ZoneId::C);
        assert!("Zone D".parse::<ZoneId>().is_err());
        assert!("".parse::<ZoneId>().is_err());
    }

    #[test]
    fn severity_order() {
        assert!(FloodStatus::Safe < FloodStatus::Warning);
        assert!(FloodStatus::Warning < FloodStatus::Flooded);
    }

    #[test]
    fn flooded_set_mask_round_trip() {
        for mask in 0..8_u8 {
            let set = FloodedSet::from_mask(mask);
            assert_eq!(set.mask(), mask);
            assert_eq!(set.iter().collect::<FloodedSet>(), set);
        }
    }

    #[test]
    fn flooded_set_membership() {
        let set: FloodedSet = [ZoneId::A, ZoneId::C].into_iter().collect();
        assert_eq!(set.mask(), 0b101);
        assert!(set.contains(ZoneId::A));
        assert!(!set.contains(ZoneId::B));
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_string(), "Zone A, Zone C");
    }

    #[test]
    fn empty_set_display() {
        assert_eq!(FloodedSet::EMPTY.to_string(), "(none)");
    }
}
