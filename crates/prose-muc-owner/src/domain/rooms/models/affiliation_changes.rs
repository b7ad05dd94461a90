// prose-core-client/prose-muc-owner
//
// Copyright: 2023, Marc Bauer <mb@nesium.com>
// License: Mozilla Public License v2.0 (MPL v2.0)

use std::collections::HashMap;

use jid::BareJid;

use super::{OwnerError, RoomAffiliation};

#[derive(Debug, Clone, PartialEq)]
pub struct AffiliationChange {
    pub jid: BareJid,
    pub previous: RoomAffiliation,
    pub affiliation: RoomAffiliation,
}

/// The affiliation changes needed to make a room's owner and admin lists match a submitted
/// configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AffiliationChanges {
    changes: Vec<AffiliationChange>,
}

impl AffiliationChanges {
    /// Computes the changes in the order they need to be applied: new owners, new admins, demoted
    /// owners, demoted admins.
    ///
    /// Previous owners (admins) that are neither in `owners` nor in `admins` are demoted to
    /// members if `owners` (`admins`) was submitted. Identities for which `is_group` returns
    /// true are never demoted.
    ///
    /// Fails with `OwnerError::Conflict` if the room would end up without any owner.
    pub fn reconcile(
        affiliations: &HashMap<BareJid, RoomAffiliation>,
        owners: Option<&[BareJid]>,
        admins: Option<&[BareJid]>,
        is_group: impl Fn(&BareJid) -> bool,
    ) -> Result<Self, OwnerError> {
        let mut resulting = affiliations.clone();
        let mut changes = AffiliationChanges::default();

        for jid in owners.unwrap_or_default() {
            changes.record(&mut resulting, jid, RoomAffiliation::Owner);
        }
        for jid in admins.unwrap_or_default() {
            changes.record(&mut resulting, jid, RoomAffiliation::Admin);
        }

        let is_listed = |jid: &BareJid| {
            owners.unwrap_or_default().contains(jid) || admins.unwrap_or_default().contains(jid)
        };

        for (sent, affiliation) in [
            (owners.is_some(), RoomAffiliation::Owner),
            (admins.is_some(), RoomAffiliation::Admin),
        ] {
            if !sent {
                continue;
            }

            let mut demoted = resulting
                .iter()
                .filter(|(jid, a)| **a == affiliation && !is_listed(*jid) && !is_group(*jid))
                .map(|(jid, _)| jid.clone())
                .collect::<Vec<_>>();
            demoted.sort_by_key(|jid| jid.to_string());

            for jid in demoted {
                changes.record(&mut resulting, &jid, RoomAffiliation::Member);
            }
        }

        let had_owners = affiliations.values().any(RoomAffiliation::is_owner);
        let has_owners = resulting.values().any(RoomAffiliation::is_owner);

        if !has_owners && (had_owners || owners.is_some()) {
            return Err(OwnerError::Conflict);
        }

        Ok(changes)
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    fn record(
        &mut self,
        affiliations: &mut HashMap<BareJid, RoomAffiliation>,
        jid: &BareJid,
        affiliation: RoomAffiliation,
    ) {
        let previous = affiliations.get(jid).copied().unwrap_or_default();
        if previous == affiliation {
            return;
        }

        affiliations.insert(jid.clone(), affiliation);

        // A jid changed twice (e.g. listed as owner and admin) keeps its first `previous`.
        if let Some(idx) = self.changes.iter().position(|change| &change.jid == jid) {
            if self.changes[idx].previous == affiliation {
                self.changes.remove(idx);
            } else {
                self.changes[idx].affiliation = affiliation;
            }
            return;
        }

        self.changes.push(AffiliationChange {
            jid: jid.clone(),
            previous,
            affiliation,
        })
    }
}

impl IntoIterator for AffiliationChanges {
    type Item = AffiliationChange;
    type IntoIter = std::vec::IntoIter<AffiliationChange>;

    fn into_iter(self) -> Self::IntoIter {
        self.changes.into_iter()
    }
}
