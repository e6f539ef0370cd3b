//! Character filter criteria

/// Independent optional criteria for listing characters
///
/// Empty lists mean "no constraint" for that field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharacterFilter {
    /// Substring the character name must contain
    pub name: Option<String>,
    /// Candidate species names
    pub species: Vec<String>,
    /// Candidate class names
    pub classes: Vec<String>,
}

impl CharacterFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_species<I, S>(mut self, species: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.species = species.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_classes<I, S>(mut self, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.classes = classes.into_iter().map(Into::into).collect();
        self
    }

    /// True when no criterion is set
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.species.is_empty() && self.classes.is_empty()
    }
}
