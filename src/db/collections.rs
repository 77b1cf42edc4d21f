use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::db::store::KeyValueStore;
use crate::error::{FundError, FundResult};
use crate::model::{Deposit, Fund, Group, Id, Member, Team, Withdrawal};

/// The logical collections kept in the store, one JSON array per key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collection {
    Members,
    Boxes,
    Teams,
    Groups,
    Deposits,
    Withdrawals,
}

impl Collection {
    pub const ALL: &'static [Collection] = &[
        Collection::Members,
        Collection::Deposits,
        Collection::Withdrawals,
        Collection::Teams,
        Collection::Boxes,
        Collection::Groups,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            Collection::Members => "members",
            Collection::Boxes => "boxes",
            Collection::Teams => "teams",
            Collection::Groups => "groups",
            Collection::Deposits => "deposits",
            Collection::Withdrawals => "withdrawals",
        }
    }
}

/// A record type persisted as an element of one collection.
pub trait Stored: Serialize + DeserializeOwned + Clone {
    const COLLECTION: Collection;

    fn id(&self) -> Id<Self>;
}

impl Stored for Member {
    const COLLECTION: Collection = Collection::Members;

    fn id(&self) -> Id<Self> {
        self.id
    }
}

impl Stored for Fund {
    const COLLECTION: Collection = Collection::Boxes;

    fn id(&self) -> Id<Self> {
        self.id
    }
}

impl Stored for Team {
    const COLLECTION: Collection = Collection::Teams;

    fn id(&self) -> Id<Self> {
        self.id
    }
}

impl Stored for Group {
    const COLLECTION: Collection = Collection::Groups;

    fn id(&self) -> Id<Self> {
        self.id
    }
}

impl Stored for Deposit {
    const COLLECTION: Collection = Collection::Deposits;

    fn id(&self) -> Id<Self> {
        self.id
    }
}

impl Stored for Withdrawal {
    const COLLECTION: Collection = Collection::Withdrawals;

    fn id(&self) -> Id<Self> {
        self.id
    }
}

/// Writes an empty array for every collection key that is absent.
/// Existing values are left alone, even if they fail to parse.
pub fn initialize(store: &dyn KeyValueStore) -> FundResult<()> {
    for collection in Collection::ALL {
        let key = collection.key();
        if store.get(key)?.is_none() {
            store.set(key, "[]")?;
            tracing::debug!(key, "initialized empty collection");
        }
    }
    Ok(())
}

/// Loads a whole collection. Never fails: a missing key, a read error and
/// corrupt JSON all yield an empty list, the latter two with a warning.
pub fn load<T: Stored>(store: &dyn KeyValueStore) -> Vec<T> {
    match load_for_update(store) {
        Ok(records) => records,
        Err(e) => {
            tracing::warn!(key = T::COLLECTION.key(), error = %e, "unreadable collection, using empty list");
            Vec::new()
        }
    }
}

/// Loads a collection that is about to be written back. A missing key is an
/// empty list, but a value that cannot be read or parsed is an error, so the
/// caller never overwrites data it could not see.
pub fn load_for_update<T: Stored>(store: &dyn KeyValueStore) -> FundResult<Vec<T>> {
    let key = T::COLLECTION.key();
    let raw = match store.get(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            tracing::debug!(key, "collection absent, using empty list");
            return Ok(Vec::new());
        }
        Err(e @ FundError::StoreRead { .. }) => return Err(e),
        Err(e) => {
            return Err(FundError::StoreRead {
                key: key.to_string(),
                reason: e.to_string(),
            })
        }
    };

    serde_json::from_str(&raw).map_err(|e| FundError::StoreRead {
        key: key.to_string(),
        reason: format!("corrupt collection JSON: {e}"),
    })
}

/// Persists a whole collection, replacing what was stored under its key.
pub fn save<T: Stored>(store: &dyn KeyValueStore, records: &[T]) -> FundResult<()> {
    let key = T::COLLECTION.key();
    let result = serde_json::to_string(records)
        .map_err(FundError::from)
        .and_then(|json| store.set(key, &json));

    match result {
        Ok(()) => {
            tracing::debug!(key, count = records.len(), "collection saved");
            Ok(())
        }
        Err(e) => {
            tracing::error!(key, error = %e, "failed to save collection");
            match e {
                FundError::StoreWrite { .. } => Err(e),
                other => Err(FundError::StoreWrite {
                    key: key.to_string(),
                    reason: other.to_string(),
                }),
            }
        }
    }
}

/// Finds a record by id in a freshly loaded collection.
pub fn find_by_id<T: Stored>(store: &dyn KeyValueStore, id: Id<T>) -> Option<T> {
    load::<T>(store).into_iter().find(|r| r.id() == id)
}

/// Appends one record and persists the collection.
pub fn insert<T: Stored>(store: &dyn KeyValueStore, record: T) -> FundResult<T> {
    let mut records = load_for_update::<T>(store)?;
    records.push(record.clone());
    save(store, &records)?;
    Ok(record)
}

/// Replaces the stored record that has the same id. Returns `false` when no
/// such record exists, in which case nothing is written.
pub fn replace<T: Stored>(store: &dyn KeyValueStore, record: &T) -> FundResult<bool> {
    let mut records = load_for_update::<T>(store)?;
    match records.iter_mut().find(|r| r.id() == record.id()) {
        Some(slot) => *slot = record.clone(),
        None => return Ok(false),
    }
    save(store, &records)?;
    Ok(true)
}

/// Removes the record with `id`. Returns `false` when it was not present.
pub fn remove<T: Stored>(store: &dyn KeyValueStore, id: Id<T>) -> FundResult<bool> {
    let mut records = load_for_update::<T>(store)?;
    let before = records.len();
    records.retain(|r| r.id() != id);
    if records.len() == before {
        return Ok(false);
    }
    save(store, &records)?;
    Ok(true)
}
