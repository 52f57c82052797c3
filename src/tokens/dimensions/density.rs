//! Density archetypes: spacing scale

use crate::tokens::archetype::DensityKey;

axis_record! {
    /// Spacing fragments, from tight to airy
    DensityRecord {
        /// Gap between grid items
        gap,
        /// Padding for page regions
        padding,
        card_padding as "cardPadding",
        /// Vertical rhythm between sections
        section_gap as "sectionGap",
        /// Vertical rhythm inside a component
        stack,
        /// Padding for table cells and list rows
        cell,
    }
}

pub(super) fn record(key: DensityKey) -> DensityRecord {
    match key {
        DensityKey::Compact => DensityRecord {
            gap: "gap-2",
            padding: "p-3",
            card_padding: "p-3",
            section_gap: "space-y-4",
            stack: "space-y-1",
            cell: "px-2 py-1",
        },
        DensityKey::Comfortable => DensityRecord {
            gap: "gap-4",
            padding: "p-6",
            card_padding: "p-5",
            section_gap: "space-y-8",
            stack: "space-y-2",
            cell: "px-4 py-2.5",
        },
        DensityKey::Spacious => DensityRecord {
            gap: "gap-8",
            padding: "p-10",
            card_padding: "p-8",
            section_gap: "space-y-16",
            stack: "space-y-4",
            cell: "px-6 py-4",
        },
    }
}
