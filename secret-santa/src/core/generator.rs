//! Pairing generation
//!
//! Shuffles the roster uniformly, then has every user give to the one before
//! them in the shuffled order, with the first giving to the last. The result
//! is a single cycle, so nobody draws themselves once there are two or more
//! users.

use std::collections::BTreeMap;

use rand::Rng;
use shared::ProxyId;

use crate::core::PairingMap;
use crate::error::{SantaError, SantaResult};

/// Fisher–Yates shuffle, walking from the last index down to 1
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Pair each user with their predecessor in `order`; the first wraps to the last
pub fn cycle_from_order(order: &[ProxyId]) -> SantaResult<PairingMap> {
    let (first, last) = match (order.first(), order.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err(SantaError::EmptyRoster),
    };

    let mut pairs = BTreeMap::new();
    pairs.insert(first.clone(), last.clone());
    for window in order.windows(2) {
        if pairs.insert(window[1].clone(), window[0].clone()).is_some() {
            return Err(SantaError::DuplicateUser {
                proxy_id: window[1].clone(),
            });
        }
    }

    Ok(PairingMap::from_cycle(pairs))
}

/// Shuffle `users` and build the cyclic assignment
pub fn generate_pairings<R: Rng + ?Sized>(users: &[ProxyId], rng: &mut R) -> SantaResult<PairingMap> {
    if users.is_empty() {
        return Err(SantaError::EmptyRoster);
    }

    let mut order = users.to_vec();
    shuffle(&mut order, rng);
    cycle_from_order(&order)
}
