//! Decides whether the stored pairing still covers the current roster

use shared::ProxyId;

use crate::core::PairingMap;

/// True when `pairings` is non-empty and its givers are exactly `current_users`.
///
/// Any added or removed user makes this false so the list can be regenerated.
pub fn is_generated(pairings: &PairingMap, current_users: &[ProxyId]) -> bool {
    if pairings.is_empty() {
        return false;
    }

    let mut users: Vec<&ProxyId> = current_users.iter().collect();
    users.sort();
    // BTreeMap keys are already sorted
    let givers: Vec<&ProxyId> = pairings.givers().collect();

    givers == users
}
