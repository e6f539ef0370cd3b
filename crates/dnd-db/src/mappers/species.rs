//! Species entity <-> model mapper

use dnd_core::entities::{Size, Species};

use crate::models::SpeciesModel;

/// Convert SpeciesModel to Species entity
impl From<SpeciesModel> for Species {
    fn from(model: SpeciesModel) -> Self {
        Species {
            name: model.name,
            speed: u32::try_from(model.speed).unwrap_or_default(),
            // The column defaults to 'medium'; anything unrecognised reads as the default
            size: model.size.parse().unwrap_or(Size::Medium),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_species_from_model() {
        let species = Species::from(SpeciesModel {
            id: 2,
            name: "Dwarf".to_string(),
            speed: 25,
            size: "medium".to_string(),
        });

        assert_eq!(species, Species::new("Dwarf", 25, Size::Medium));
    }

    #[test]
    fn test_unknown_size_reads_as_medium() {
        let species = Species::from(SpeciesModel {
            id: 9,
            name: "Treant".to_string(),
            speed: 20,
            size: "enormous".to_string(),
        });

        assert_eq!(species.size, Size::Medium);
    }
}
