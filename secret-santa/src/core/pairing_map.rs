//! Giver -> recipient mapping
//!
//! A non-empty map is only ever produced by the generator, which always emits
//! one cycle through every user. Anything else read back from disk is
//! corruption and is rejected while deserializing.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};
use shared::ProxyId;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PairingMapError {
    #[error("pairee {pairee} of {giver} is not a participant")]
    UnknownPairee { giver: ProxyId, pairee: ProxyId },

    #[error("{pairee} is assigned to more than one giver")]
    SharedPairee { pairee: ProxyId },

    #[error("{giver} is paired with themselves")]
    SelfPairing { giver: ProxyId },

    #[error("pairings split into more than one cycle ({cycle_len} of {total} users reachable)")]
    BrokenCycle { cycle_len: usize, total: usize },
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<ProxyId, ProxyId>", into = "BTreeMap<ProxyId, ProxyId>")]
pub struct PairingMap(BTreeMap<ProxyId, ProxyId>);

impl PairingMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wrap a map known to be a single cycle
    pub(crate) fn from_cycle(pairs: BTreeMap<ProxyId, ProxyId>) -> Self {
        debug_assert!(Self::validate(&pairs).is_ok());
        Self(pairs)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Recipient assigned to `giver`
    pub fn pairee_of(&self, giver: &ProxyId) -> Option<&ProxyId> {
        self.0.get(giver)
    }

    /// Givers in sorted order
    pub fn givers(&self) -> impl Iterator<Item = &ProxyId> {
        self.0.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ProxyId, &ProxyId)> {
        self.0.iter()
    }

    /// Number of users visited when following pairee pointers from `start`
    /// until the walk returns to `start` or leaves the map.
    pub fn cycle_len_from(&self, start: &ProxyId) -> usize {
        let mut seen = BTreeSet::new();
        let mut current = start;
        while seen.insert(current) {
            match self.0.get(current) {
                Some(next) => current = next,
                None => break,
            }
        }
        seen.len()
    }

    fn validate(pairs: &BTreeMap<ProxyId, ProxyId>) -> Result<(), PairingMapError> {
        if pairs.is_empty() {
            return Ok(());
        }

        let mut recipients = BTreeSet::new();
        for (giver, pairee) in pairs {
            if !pairs.contains_key(pairee) {
                return Err(PairingMapError::UnknownPairee {
                    giver: giver.clone(),
                    pairee: pairee.clone(),
                });
            }
            if !recipients.insert(pairee) {
                return Err(PairingMapError::SharedPairee {
                    pairee: pairee.clone(),
                });
            }
            if pairs.len() > 1 && giver == pairee {
                return Err(PairingMapError::SelfPairing {
                    giver: giver.clone(),
                });
            }
        }

        let map = PairingMap(pairs.clone());
        if let Some(start) = pairs.keys().next() {
            let cycle_len = map.cycle_len_from(start);
            if cycle_len != pairs.len() {
                return Err(PairingMapError::BrokenCycle {
                    cycle_len,
                    total: pairs.len(),
                });
            }
        }
        Ok(())
    }
}

impl TryFrom<BTreeMap<ProxyId, ProxyId>> for PairingMap {
    type Error = PairingMapError;

    fn try_from(pairs: BTreeMap<ProxyId, ProxyId>) -> Result<Self, Self::Error> {
        Self::validate(&pairs)?;
        Ok(Self(pairs))
    }
}

impl From<PairingMap> for BTreeMap<ProxyId, ProxyId> {
    fn from(map: PairingMap) -> Self {
        map.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ProxyId {
        ProxyId::new(s).unwrap()
    }

    fn parse(json: &str) -> Result<PairingMap, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[test]
    fn test_empty_object_is_valid() {
        let map = parse("{}").unwrap();
        assert!(map.is_empty());
        assert_eq!(serde_json::to_string(&map).unwrap(), "{}");
    }

    #[test]
    fn test_single_cycle_accepted() {
        let map = parse(r#"{"a":"c","b":"a","c":"b"}"#).unwrap();
        assert_eq!(map.len(), 3);
        assert_eq!(map.pairee_of(&id("a")), Some(&id("c")));
        assert_eq!(map.cycle_len_from(&id("b")), 3);
    }

    #[test]
    fn test_lone_user_may_map_to_self() {
        let map = parse(r#"{"solo":"solo"}"#).unwrap();
        assert_eq!(map.pairee_of(&id("solo")), Some(&id("solo")));
    }

    #[test]
    fn test_rejects_self_pairing() {
        let err = PairingMap::try_from(BTreeMap::from([
            (id("a"), id("a")),
            (id("b"), id("b")),
        ]))
        .unwrap_err();
        assert!(matches!(err, PairingMapError::SelfPairing { .. }));
    }

    #[test]
    fn test_rejects_unknown_pairee() {
        let err = PairingMap::try_from(BTreeMap::from([
            (id("a"), id("b")),
            (id("b"), id("ghost")),
        ]))
        .unwrap_err();
        assert_eq!(
            err,
            PairingMapError::UnknownPairee {
                giver: id("b"),
                pairee: id("ghost"),
            }
        );
    }

    #[test]
    fn test_rejects_shared_pairee() {
        let err = PairingMap::try_from(BTreeMap::from([
            (id("a"), id("c")),
            (id("b"), id("c")),
            (id("c"), id("a")),
        ]))
        .unwrap_err();
        assert!(matches!(err, PairingMapError::SharedPairee { .. }));
    }

    #[test]
    fn test_rejects_two_cycles() {
        let err = PairingMap::try_from(BTreeMap::from([
            (id("a"), id("b")),
            (id("b"), id("a")),
            (id("c"), id("d")),
            (id("d"), id("c")),
        ]))
        .unwrap_err();
        assert_eq!(err, PairingMapError::BrokenCycle { cycle_len: 2, total: 4 });
    }

    #[test]
    fn test_rejects_non_string_contents() {
        assert!(parse("[]").is_err());
        assert!(parse(r#"{"a": 1}"#).is_err());
        assert!(parse(r#"{"": ""}"#).is_err());
        assert!(parse("not json").is_err());
    }
}
