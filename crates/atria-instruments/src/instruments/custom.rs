use crate::Instrument;
use crate::catalog::Catalog;
use crate::error::InstrumentError;

/// A questionnaire whose catalog was loaded from a JSON definition, e.g. a
/// translated or re-ordered form of Strength 360.
#[derive(Debug, Clone)]
pub struct CustomInstrument {
    id: String,
    name: String,
    catalog: Catalog,
}

impl CustomInstrument {
    pub fn new(id: impl Into<String>, name: impl Into<String>, catalog: Catalog) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            catalog,
        }
    }

    pub fn from_json(
        id: impl Into<String>,
        name: impl Into<String>,
        json: &str,
    ) -> Result<Self, InstrumentError> {
        let catalog = Catalog::from_json(json)?;
        let instrument = Self::new(id, name, catalog);
        tracing::info!(
            id = %instrument.id,
            questions = instrument.catalog.question_count(),
            "loaded custom catalog"
        );
        Ok(instrument)
    }
}

impl Instrument for CustomInstrument {
    fn id(&self) -> &str {
        &self.id
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}
