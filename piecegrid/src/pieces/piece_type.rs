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

use std::convert::TryFrom;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::pieces::PieceTypeError;

/// Fields of the raw descriptor which have dedicated storage. Anything else is kept in
/// [`PieceType::extras`].
const KNOWN_FIELDS: [&str; 5] = ["name", "displayName", "textIcon", "power", "speed"];

/// Immutable description of a kind of piece, shared by every piece of that kind.
///
/// Piece types are identified by [`name`][PieceType::name] within a
/// [`Catalog`][crate::Catalog]. `power` and `speed` are always nonnegative numbers.
/// Fields that this crate does not interpret are carried along untouched and written
/// back out on serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "Value")]
pub struct PieceType {
    name: String,
    display_name: String,
    text_icon: String,
    power: f64,
    speed: f64,
    #[serde(flatten)]
    extra: Map<String, Value>,
}

impl PieceType {
    /// Construct a piece type from typed values. Fails if `power` or `speed` is negative
    /// or NaN; `power` is checked first.
    pub fn new(
        name: impl Into<String>,
        display_name: impl Into<String>,
        text_icon: impl Into<String>,
        power: f64,
        speed: f64,
    ) -> Result<Self, PieceTypeError> {
        Ok(Self {
            name: name.into(),
            display_name: display_name.into(),
            text_icon: text_icon.into(),
            power: check_nonnegative("power", Some(power))?,
            speed: check_nonnegative("speed", Some(speed))?,
            extra: Map::new(),
        })
    }

    /// Construct a piece type from a raw property record.
    ///
    /// `props` must be an object with numeric, nonnegative `power` and `speed`
    /// properties. `name`, `displayName` and `textIcon` default to empty strings when
    /// absent. Every other property is copied onto the piece type as an extension field.
    pub fn from_props(props: &Value) -> Result<Self, PieceTypeError> {
        let props = props.as_object().ok_or(PieceTypeError::InvalidArgument)?;
        let power = check_nonnegative("power", props.get("power").and_then(Value::as_f64))?;
        let speed = check_nonnegative("speed", props.get("speed").and_then(Value::as_f64))?;
        Ok(Self {
            name: string_field(props, "name")?,
            display_name: string_field(props, "displayName")?,
            text_icon: string_field(props, "textIcon")?,
            power,
            speed,
            extra: props
                .iter()
                .filter(|(key, _)| !KNOWN_FIELDS.contains(&key.as_str()))
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect(),
        })
    }

    /// Return this piece type with an extension field added, replacing any previous value
    /// for `key`. Keys that name one of the dedicated fields are ignored.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        let key = key.into();
        if !KNOWN_FIELDS.contains(&key.as_str()) {
            self.extra.insert(key, value.into());
        }
        self
    }

    /// Unique name of this piece type within its catalog.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Human readable name.
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Short text used to draw pieces of this type on a text board.
    pub fn text_icon(&self) -> &str {
        &self.text_icon
    }

    /// Strength of pieces of this type. Never negative.
    pub fn power(&self) -> f64 {
        self.power
    }

    /// How far pieces of this type can travel. Never negative.
    pub fn speed(&self) -> f64 {
        self.speed
    }

    /// Get an extension field by name.
    pub fn extra(&self, key: &str) -> Option<&Value> {
        self.extra.get(key)
    }

    /// All extension fields of this piece type.
    pub fn extras(&self) -> &Map<String, Value> {
        &self.extra
    }
}

impl TryFrom<Value> for PieceType {
    type Error = PieceTypeError;

    fn try_from(props: Value) -> Result<Self, Self::Error> {
        Self::from_props(&props)
    }
}

/// Accept `value` if it is a nonnegative number. NaN fails the comparison and is
/// rejected along with negatives.
fn check_nonnegative(property: &'static str, value: Option<f64>) -> Result<f64, PieceTypeError> {
    match value {
        Some(v) if v >= 0.0 => Ok(v),
        _ => Err(PieceTypeError::InvalidProperty { property }),
    }
}

fn string_field(props: &Map<String, Value>, field: &'static str) -> Result<String, PieceTypeError> {
    match props.get(field) {
        None => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(PieceTypeError::NonStringField { field }),
    }
}
