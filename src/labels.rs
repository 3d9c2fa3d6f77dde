//! Fixed user-facing label set.

pub const TITLE: &str = "Panel de Competencias en Ciberseguridad";

pub const UNIQUE_USERS: &str = "Usuarios Únicos";
pub const AVERAGE_RATING: &str = "Calificación Promedio";
pub const CONCEPTS_EVALUATED: &str = "Conceptos Evaluados";

pub const CONCEPT_CHART: &str = "Calificación Promedio por Concepto";
pub const AREA_CHART: &str = "Usuarios por Área";

pub const TABLE_TITLE: &str = "Evaluaciones Detalladas";
pub const SEARCH_PLACEHOLDER: &str = "Buscar por nombre o correo...";
pub const ALL_AREAS: &str = "Todas las Áreas";
pub const ALL_CONCEPTS: &str = "Todos los Conceptos";
pub const AREAS: &str = "Áreas";
pub const CONCEPTS: &str = "Conceptos";

pub const TABLE_HEADERS: [&str; 7] = [
    "Nombre",
    "Correo",
    "Edad",
    "Género",
    "Área",
    "Concepto",
    "Calificación",
];

pub const PREVIOUS: &str = "Anterior";
pub const NEXT: &str = "Siguiente";

/// "Análisis de N evaluaciones de competencia"
pub fn subtitle(total_records: usize) -> String {
    format!("Análisis de {total_records} evaluaciones de competencia")
}

/// "N por página"
pub fn page_size_option(size: usize) -> String {
    format!("{size} por página")
}

/// "Mostrando X de Y resultados"
pub fn showing(visible: usize, total: usize) -> String {
    format!("Mostrando {visible} de {total} resultados")
}

/// "Filtrado: N evaluaciones, U usuarios, promedio X"
pub fn filtered_summary(total_records: usize, unique_users: usize, average: &str) -> String {
    format!("Filtrado: {total_records} evaluaciones, {unique_users} usuarios, promedio {average}")
}

/// "Página N de M"
pub fn page_of(current: usize, total: usize) -> String {
    format!("Página {current} de {total}")
}
