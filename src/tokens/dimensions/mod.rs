//! Dimension maps: one closed lookup table per style axis
//!
//! Each table maps every archetype of its axis to a fixed-shape record of
//! style fragments. Tables are built once, validated for completeness, and
//! then only read. A record with an empty field is a defect in the table
//! itself, so [`DimensionMaps::builtin`] refuses to build rather than letting
//! the gap surface later inside an unrelated component.

use std::marker::PhantomData;

use once_cell::sync::Lazy;
use thiserror::Error;

use super::archetype::{
    Archetype, Axis, ColorKey, DensityKey, LayoutKey, ShapeKey, ToneKey, TypographyKey,
};

/// A fixed-shape record of named style fragments for one axis
pub trait AxisRecord: Clone + std::fmt::Debug {
    /// Every field as `(name, fragment)`, in declaration order, named as
    /// they serialize
    fn fields(&self) -> Vec<(&'static str, &str)>;
}

macro_rules! axis_record {
    (@key $field:ident) => {
        stringify!($field)
    };
    (@key $field:ident $key:literal) => {
        $key
    };
    (
        $(#[$meta:meta])*
        $name:ident {
            $($(#[$field_meta:meta])* $field:ident $(as $key:literal)?,)+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
        pub struct $name {
            $($(#[$field_meta])* $(#[serde(rename = $key)])? pub $field: &'static str,)+
        }

        impl $crate::tokens::dimensions::AxisRecord for $name {
            fn fields(&self) -> Vec<(&'static str, &str)> {
                vec![$((axis_record!(@key $field $($key)?), self.$field),)+]
            }
        }
    };
}

mod color;
mod density;
mod layout;
mod shape;
mod tone;
mod typography;

pub use color::ColorRecord;
pub use density::DensityRecord;
pub use layout::LayoutRecord;
pub use shape::ShapeRecord;
pub use tone::ToneRecord;
pub use typography::TypographyRecord;

/// Errors found while building a dimension map
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DimensionError {
    /// An archetype left one of its record fields empty
    #[error("{axis} archetype '{archetype}' has an empty '{field}' fragment")]
    EmptyField {
        axis: Axis,
        archetype: &'static str,
        field: &'static str,
    },

    /// An archetype enumeration lists its keys out of declaration order
    #[error("{axis} archetype '{archetype}' is listed at position {position} but indexes {index}")]
    Misordered {
        axis: Axis,
        archetype: &'static str,
        position: usize,
        index: usize,
    },
}

/// A total lookup table from the archetypes of one axis to their records
#[derive(Debug, Clone)]
pub struct DimensionMap<K, R> {
    records: Vec<R>,
    _key: PhantomData<K>,
}

impl<K: Archetype, R: AxisRecord> DimensionMap<K, R> {
    /// Build the table by asking `define` for every archetype of `K`
    pub fn build(define: impl Fn(K) -> R) -> Result<Self, DimensionError> {
        let mut records = Vec::with_capacity(K::ALL.len());
        for (position, &key) in K::ALL.iter().enumerate() {
            if key.index() != position {
                return Err(DimensionError::Misordered {
                    axis: K::AXIS,
                    archetype: key.as_str(),
                    position,
                    index: key.index(),
                });
            }
            let record = define(key);
            if let Some((field, _)) = record
                .fields()
                .into_iter()
                .find(|(_, fragment)| fragment.trim().is_empty())
            {
                return Err(DimensionError::EmptyField {
                    axis: K::AXIS,
                    archetype: key.as_str(),
                    field,
                });
            }
            records.push(record);
        }
        Ok(Self {
            records,
            _key: PhantomData,
        })
    }

    /// The record for `key`
    pub fn get(&self, key: K) -> &R {
        &self.records[key.index()]
    }

    /// All `(archetype, record)` pairs in declaration order
    pub fn iter(&self) -> impl Iterator<Item = (K, &R)> {
        K::ALL.iter().copied().zip(self.records.iter())
    }
}

/// An archetype enumeration that has a table in [`DimensionMaps`]
pub trait Dimension: Archetype {
    type Record: AxisRecord;

    fn map(maps: &DimensionMaps) -> &DimensionMap<Self, Self::Record>;
}

macro_rules! dimension {
    ($key:ty, $record:ty, $field:ident) => {
        impl Dimension for $key {
            type Record = $record;

            fn map(maps: &DimensionMaps) -> &DimensionMap<Self, Self::Record> {
                &maps.$field
            }
        }
    };
}

dimension!(LayoutKey, LayoutRecord, layout);
dimension!(ToneKey, ToneRecord, tone);
dimension!(ShapeKey, ShapeRecord, shape);
dimension!(DensityKey, DensityRecord, density);
dimension!(TypographyKey, TypographyRecord, typography);
dimension!(ColorKey, ColorRecord, color);

static BUILTIN: Lazy<DimensionMaps> = Lazy::new(|| {
    DimensionMaps::builtin().expect("built-in dimension maps should define every fragment")
});

/// The six dimension maps
#[derive(Debug, Clone)]
pub struct DimensionMaps {
    pub layout: DimensionMap<LayoutKey, LayoutRecord>,
    pub tone: DimensionMap<ToneKey, ToneRecord>,
    pub shape: DimensionMap<ShapeKey, ShapeRecord>,
    pub density: DimensionMap<DensityKey, DensityRecord>,
    pub typography: DimensionMap<TypographyKey, TypographyRecord>,
    pub color: DimensionMap<ColorKey, ColorRecord>,
}

impl DimensionMaps {
    /// Build and validate the built-in tables
    pub fn builtin() -> Result<Self, DimensionError> {
        Ok(Self {
            layout: DimensionMap::build(layout::record)?,
            tone: DimensionMap::build(tone::record)?,
            shape: DimensionMap::build(shape::record)?,
            density: DimensionMap::build(density::record)?,
            typography: DimensionMap::build(typography::record)?,
            color: DimensionMap::build(color::record)?,
        })
    }

    /// The process-wide built-in tables, built on first use
    pub fn shared() -> &'static DimensionMaps {
        &BUILTIN
    }

    /// The record for an archetype
    pub fn lookup<K: Dimension>(&self, key: K) -> &K::Record {
        K::map(self).get(key)
    }

    /// Every archetype of an axis with its fields, in declaration order
    pub fn entries(&self, axis: Axis) -> Vec<(&'static str, Vec<(&'static str, &str)>)> {
        fn collect<K: Archetype, R: AxisRecord>(
            map: &DimensionMap<K, R>,
        ) -> Vec<(&'static str, Vec<(&'static str, &str)>)> {
            map.iter()
                .map(|(key, record)| (key.as_str(), record.fields()))
                .collect()
        }

        match axis {
            Axis::Layout => collect(&self.layout),
            Axis::Tone => collect(&self.tone),
            Axis::Shape => collect(&self.shape),
            Axis::Density => collect(&self.density),
            Axis::Typography => collect(&self.typography),
            Axis::Color => collect(&self.color),
        }
    }
}
