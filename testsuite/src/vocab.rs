/// Namespace of the OntoSPM classes.
pub const ONTOSPM_NAMESPACE: &str =
    "http://medicis.univ-rennes1.fr/ontologies/ontospm/OntoSPM.owl#";

/// Local names of the surgical continuant categories.
pub const CATEGORIES: [&str; 4] = [
    "operative_specimen",
    "surgical_material",
    "surgical_instrument",
    "medical_equipment",
];

/// Local name of the root of the instrument functions.
pub const FUNCTION_ROOT: &str = "function_of_instrument";

/// Local names of the continuants that do not need a function.
pub const FUNCTION_EXEMPTIONS: [&str; 2] = ["surgical_furniture", "medical_device"];
