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

//! Factories that hand out validated piece types and pieces by name.

use std::{collections::BTreeMap, sync::Arc};

use tracing::trace;

use crate::{
    catalog::{Catalog, CreatePieceError, UnknownPieceType},
    pieces::{Piece, PieceType, Position},
};

/// Creates [`PieceType`]s by name from a shared [`Catalog`].
#[derive(Debug, Clone)]
pub struct PieceTypeFactory {
    catalog: Arc<Catalog>,
}

impl PieceTypeFactory {
    /// Construct a factory reading from the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self { catalog }
    }

    /// Get the piece type with the given name. Every piece type created for the same name
    /// is the same shared instance.
    pub fn create_piece(&self, name: &str) -> Result<Arc<PieceType>, UnknownPieceType> {
        trace!(name, "creating piece type");
        self.catalog
            .get(name)
            .cloned()
            .ok_or_else(|| UnknownPieceType::new(name))
    }

    /// All piece types this factory can create, keyed by name.
    pub fn available_piece_types(&self) -> &BTreeMap<String, Arc<PieceType>> {
        self.catalog.available_piece_types()
    }

    /// The catalog backing this factory.
    pub fn catalog(&self) -> &Arc<Catalog> {
        &self.catalog
    }
}

/// Creates [`Piece`]s by type name and position from a shared [`Catalog`].
#[derive(Debug, Clone)]
pub struct PieceFactory {
    types: PieceTypeFactory,
}

impl PieceFactory {
    /// Construct a factory reading from the given catalog.
    pub fn new(catalog: Arc<Catalog>) -> Self {
        Self {
            types: PieceTypeFactory::new(catalog),
        }
    }

    /// Create a piece of the named type at the given position. The name is looked up
    /// before the position is checked.
    pub fn create_piece(&self, name: &str, position: Position) -> Result<Piece, CreatePieceError> {
        let piece_type = self.types.create_piece(name)?;
        Ok(Piece::new(piece_type, position)?)
    }

    /// All piece types this factory can create, keyed by name.
    pub fn available_piece_types(&self) -> &BTreeMap<String, Arc<PieceType>> {
        self.types.available_piece_types()
    }
}

impl From<PieceTypeFactory> for PieceFactory {
    fn from(types: PieceTypeFactory) -> Self {
        Self { types }
    }
}
