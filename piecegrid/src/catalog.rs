// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! The catalog of piece types available to a game.
//!
//! A [`Catalog`] is loaded once from an ordered list of descriptor records and never
//! changes afterwards. It is shared with the [`PieceTypeFactory`] and [`PieceFactory`]
//! through an `Arc`, so the same catalog can back any number of factories and boards.

use std::{
    collections::{btree_map::Entry, BTreeMap},
    io::Read,
    sync::Arc,
};

use serde_json::Value;
use tracing::{debug, instrument};

use crate::pieces::PieceType;

pub use self::{
    errors::{CatalogError, CreatePieceError, UnknownPieceType},
    factory::{PieceFactory, PieceTypeFactory},
};

mod errors;
mod factory;

/// Descriptor data bundled with the crate.
const BUILTIN_PIECE_TYPES: &str = include_str!("../data/piece-types.json");

/// Immutable set of [`PieceType`]s indexed by name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    piece_types: BTreeMap<String, Arc<PieceType>>,
}

impl Catalog {
    /// Load the piece types bundled with this crate.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_PIECE_TYPES)
    }

    /// Load a catalog from a JSON array of piece type descriptors.
    #[instrument(skip(json), fields(bytes = json.len()))]
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let descriptors: Vec<Value> = serde_json::from_str(json)?;
        Self::from_descriptors(descriptors)
    }

    /// Load a catalog from a reader producing a JSON array of piece type descriptors.
    #[instrument(skip(reader))]
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let descriptors: Vec<Value> = serde_json::from_reader(reader)?;
        Self::from_descriptors(descriptors)
    }

    /// Build a catalog from raw descriptor records. Every descriptor is validated as a
    /// [`PieceType`] and must have a unique, nonempty name.
    pub fn from_descriptors<I>(descriptors: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = Value>,
    {
        let piece_types = descriptors
            .into_iter()
            .enumerate()
            .map(|(index, descriptor)| {
                PieceType::from_props(&descriptor)
                    .map_err(|source| CatalogError::InvalidDescriptor { index, source })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_piece_types(piece_types)
    }

    /// Build a catalog from already constructed piece types.
    pub fn from_piece_types<I>(piece_types: I) -> Result<Self, CatalogError>
    where
        I: IntoIterator<Item = PieceType>,
    {
        let mut by_name = BTreeMap::new();
        for (index, piece_type) in piece_types.into_iter().enumerate() {
            if piece_type.name().is_empty() {
                return Err(CatalogError::MissingName { index });
            }
            match by_name.entry(piece_type.name().to_owned()) {
                Entry::Occupied(entry) => {
                    return Err(CatalogError::DuplicateName {
                        name: entry.key().clone(),
                    })
                }
                Entry::Vacant(entry) => {
                    entry.insert(Arc::new(piece_type));
                }
            }
        }
        debug!(count = by_name.len(), "loaded piece type catalog");
        Ok(Self {
            piece_types: by_name,
        })
    }

    /// Get the piece type with the given name.
    pub fn get(&self, name: &str) -> Option<&Arc<PieceType>> {
        self.piece_types.get(name)
    }

    /// Number of piece types in the catalog.
    pub fn len(&self) -> usize {
        self.piece_types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.piece_types.is_empty()
    }

    /// Names of all piece types, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.piece_types.keys().map(String::as_str)
    }

    /// All piece types keyed by name.
    pub fn available_piece_types(&self) -> &BTreeMap<String, Arc<PieceType>> {
        &self.piece_types
    }
}
