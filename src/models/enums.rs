use serde::{Deserialize, Serialize};

/// Macro to generate enum with an as_str label per variant
macro_rules! str_enum {
    ($name:ident { $($variant:ident => $s:literal),+ $(,)? }) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }
    };
}

str_enum!(ExportColumn {
    DrugName => "Drug Name",
    Category => "Category",
    Class => "Class",
    Dosage => "Dosage",
    Indications => "Indications",
    Contraindications => "Contraindications",
    Interactions => "Interactions",
    SideEffects => "Side Effects",
    Monitoring => "Monitoring",
    Conditions => "Conditions",
});

impl ExportColumn {
    /// Column order of every export file.
    pub const ALL: [ExportColumn; 10] = [
        Self::DrugName,
        Self::Category,
        Self::Class,
        Self::Dosage,
        Self::Indications,
        Self::Contraindications,
        Self::Interactions,
        Self::SideEffects,
        Self::Monitoring,
        Self::Conditions,
    ];
}
