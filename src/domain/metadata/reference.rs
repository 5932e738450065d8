//! Helpers for dotted property references (`.properties.name`, `.job.name`).

/// Prefix shared by every product-level property reference.
pub const PRODUCT_PROPERTIES_PREFIX: &str = ".properties.";

/// Root of every product property path in the configuration document.
pub const PRODUCT_PROPERTIES_ROOT: &str = "/product-properties";

/// Last `.`-delimited segment of a reference.
///
/// Nested inputs may carry either a bare name (`collection_object`) or a full
/// reference (`.properties.selector.option`); both resolve to the same name.
pub fn last_segment(reference: &str) -> &str {
    reference.rsplit('.').next().unwrap_or(reference)
}

/// Append a child name to a parent reference.
pub fn child_reference(parent: &str, child: &str) -> String {
    format!("{parent}.{child}")
}

/// Interpolation variable name derived from a reference.
///
/// `.properties.selector.option.name` becomes `selector/option/name`;
/// job-level references keep the job name as their first segment.
pub fn variable_name(reference: &str) -> String {
    let trimmed = reference
        .strip_prefix(PRODUCT_PROPERTIES_PREFIX)
        .or_else(|| reference.strip_prefix('.'))
        .unwrap_or(reference);
    trimmed.replace('.', "/")
}

/// Create-if-absent ops path for a property reference.
pub fn ops_path(reference: &str) -> String {
    format!("{PRODUCT_PROPERTIES_ROOT}/{reference}?")
}

/// Feature key prefix for a top-level reference.
///
/// Product-level properties share one namespace. Job-level properties are
/// prefixed with their job name so identical property names on different
/// jobs cannot produce the same feature key.
pub fn scope_prefix(reference: &str) -> String {
    if reference.starts_with(PRODUCT_PROPERTIES_PREFIX) {
        return String::new();
    }
    match reference.strip_prefix('.').and_then(|rest| rest.split('.').next()) {
        Some(job) if !job.is_empty() => format!("{job}-"),
        _ => String::new(),
    }
}

/// Bosh-style interpolation placeholder.
pub fn placeholder(variable: &str) -> String {
    format!("(({variable}))")
}
