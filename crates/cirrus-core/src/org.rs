//! The organization containment tree.
//!
//! An [`Organization`] owns its organizational units and direct accounts in
//! name-keyed maps; units own their accounts the same way. Children carry a
//! non-owning [`Parent`] back-reference (root marker or parent-unit name)
//! rather than a pointer, so the tree stays a tree.
//!
//! Builder calls with a name that is already registered overwrite the stored
//! child. No uniqueness is enforced here; duplicate emails or sibling names
//! surface when the provider applies the manifest.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::collections::btree_map::Entry;

use crate::enums::FeatureSet;

/// Non-owning back-reference from a child entity to its container.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum Parent {
    /// Directly under the organization root.
    Root,
    /// Under the organizational unit with this name.
    Unit(String),
}

/// A leaf cloud account with its own root email.
///
/// The real 12-digit account id only exists after the provider creates the
/// account; until then the account is referenced by name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Account {
    pub name: String,
    pub email: String,
    pub parent: Parent,
}

/// A named grouping node in the organization tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct OrganizationalUnit {
    pub name: String,
    pub parent: Parent,
    accounts: BTreeMap<String, Account>,
}

impl OrganizationalUnit {
    fn new(name: &str, parent: Parent) -> Self {
        Self {
            name: name.to_owned(),
            parent,
            accounts: BTreeMap::new(),
        }
    }

    /// Add an account under this unit, overwriting any account already
    /// registered under the same name.
    pub fn add_account(&mut self, name: &str, email: &str) -> &Account {
        let account = Account {
            name: name.to_owned(),
            email: email.to_owned(),
            parent: Parent::Unit(self.name.clone()),
        };
        insert_named(&mut self.accounts, name, account)
    }

    /// Accounts directly under this unit, in name order.
    pub fn accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    #[must_use]
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.get(name)
    }
}

/// Root entity representing a multi-account cloud estate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct Organization {
    pub feature_set: FeatureSet,
    organizational_units: BTreeMap<String, OrganizationalUnit>,
    accounts: BTreeMap<String, Account>,
}

impl Organization {
    #[must_use]
    pub const fn new(feature_set: FeatureSet) -> Self {
        Self {
            feature_set,
            organizational_units: BTreeMap::new(),
            accounts: BTreeMap::new(),
        }
    }

    /// Add an organizational unit under the root, overwriting any unit
    /// already registered under the same name.
    pub fn add_organizational_unit(&mut self, name: &str) -> &mut OrganizationalUnit {
        let unit = OrganizationalUnit::new(name, Parent::Root);
        insert_named(&mut self.organizational_units, name, unit)
    }

    /// Add an account directly under the root.
    pub fn add_account(&mut self, name: &str, email: &str) -> &Account {
        let account = Account {
            name: name.to_owned(),
            email: email.to_owned(),
            parent: Parent::Root,
        };
        insert_named(&mut self.accounts, name, account)
    }

    /// Organizational units in name order.
    pub fn organizational_units(&self) -> impl Iterator<Item = &OrganizationalUnit> {
        self.organizational_units.values()
    }

    #[must_use]
    pub fn organizational_unit(&self, name: &str) -> Option<&OrganizationalUnit> {
        self.organizational_units.get(name)
    }

    /// Accounts directly under the root, in name order.
    pub fn direct_accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values()
    }

    /// Every account in the tree: root-level accounts first, then each
    /// unit's accounts, unit by unit in name order.
    pub fn all_accounts(&self) -> impl Iterator<Item = &Account> {
        self.accounts.values().chain(
            self.organizational_units
                .values()
                .flat_map(|unit| unit.accounts.values()),
        )
    }

    /// Look up an account anywhere in the tree by name.
    #[must_use]
    pub fn account(&self, name: &str) -> Option<&Account> {
        self.accounts.get(name).or_else(|| {
            self.organizational_units
                .values()
                .find_map(|unit| unit.account(name))
        })
    }
}

/// Insert-or-overwrite returning a reference to the stored value.
fn insert_named<'a, V>(map: &'a mut BTreeMap<String, V>, name: &str, value: V) -> &'a mut V {
    match map.entry(name.to_owned()) {
        Entry::Occupied(mut entry) => {
            entry.insert(value);
            entry.into_mut()
        }
        Entry::Vacant(entry) => entry.insert(value),
    }
}
