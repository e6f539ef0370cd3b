//! Class entity <-> model mapper

use dnd_core::entities::ClassDefinition;

use crate::models::ClassModel;

/// Convert ClassModel to ClassDefinition entity
impl From<ClassModel> for ClassDefinition {
    fn from(model: ClassModel) -> Self {
        ClassDefinition { name: model.name }
    }
}
