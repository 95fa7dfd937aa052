//! Bank aggregate.
//!
//! A [`Bank`] collects the assets that share a bank name, keyed first by
//! kind, then by member name. Member names are unique per kind within a
//! bank; the same member name may appear under two different kinds. Adding
//! an asset under a name that is already taken for that kind replaces the
//! earlier asset without a diagnostic — last write wins.

pub mod archive;

use std::collections::BTreeMap;
use std::fmt;

use crate::asset::{Asset, AssetKind};
use crate::error::{BankrollError, Result};

/// File extension of a bank archive, distinct from every asset extension.
pub const BANK_EXTENSION: &str = "vitalbank";

/// A named aggregate of assets destined for one archive file.
#[derive(Debug, Clone, Default)]
pub struct Bank {
    name: String,
    elements: BTreeMap<AssetKind, BTreeMap<String, Asset>>,
}

impl Bank {
    /// Create an empty bank.
    pub fn new(name: &str) -> Bank {
        Bank {
            name: name.to_string(),
            elements: BTreeMap::new(),
        }
    }

    /// The bank's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an asset under its current name.
    ///
    /// The asset's kind must have a registry row; anything else is a
    /// programming error upstream and fails with
    /// [`BankrollError::InvalidAsset`] leaving the bank unchanged.
    pub fn add(&mut self, asset: Asset) -> Result<()> {
        if asset.kind().info().is_none() {
            return Err(BankrollError::InvalidAsset {
                detail: format!("kind {} has no registry entry", asset.kind()),
            });
        }

        self.elements
            .entry(asset.kind())
            .or_default()
            .insert(asset.name().to_string(), asset);
        Ok(())
    }

    /// Assets of one kind, keyed by member name.
    pub fn assets_of_kind(&self, kind: AssetKind) -> Option<&BTreeMap<String, Asset>> {
        self.elements.get(&kind)
    }

    /// Iterate all held assets in (kind, member name) order.
    pub fn iter(&self) -> impl Iterator<Item = (AssetKind, &Asset)> {
        self.elements
            .iter()
            .flat_map(|(kind, members)| members.values().map(move |asset| (*kind, asset)))
    }

    /// Total number of assets across all kinds.
    pub fn len(&self) -> usize {
        self.elements.values().map(BTreeMap::len).sum()
    }

    /// Whether the bank holds no assets.
    pub fn is_empty(&self) -> bool {
        self.elements.values().all(BTreeMap::is_empty)
    }
}

impl fmt::Display for Bank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// The orchestrator-owned mapping of bank name to [`Bank`].
#[derive(Debug, Clone, Default)]
pub struct BankRegistry {
    banks: BTreeMap<String, Bank>,
}

impl BankRegistry {
    /// Create an empty registry.
    pub fn new() -> BankRegistry {
        BankRegistry::default()
    }

    /// Fetch the bank for `bank_name`, creating and registering an empty
    /// one on first sight.
    pub fn get_or_create(&mut self, bank_name: &str) -> &mut Bank {
        self.banks
            .entry(bank_name.to_string())
            .or_insert_with(|| Bank::new(bank_name))
    }

    /// Look a bank up without creating it.
    pub fn get(&self, bank_name: &str) -> Option<&Bank> {
        self.banks.get(bank_name)
    }

    /// Iterate banks in name order.
    pub fn iter(&self) -> impl Iterator<Item = &Bank> {
        self.banks.values()
    }

    /// Number of banks.
    pub fn len(&self) -> usize {
        self.banks.len()
    }

    /// Whether no banks have been registered.
    pub fn is_empty(&self) -> bool {
        self.banks.is_empty()
    }
}
