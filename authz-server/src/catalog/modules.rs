//! Module registry
//!
//! Fixed lookup tables for the functional modules permissions group under.
//! A module row ties a code namespace key to its display name and
//! description; "Reports & System" owns two keys (`report`, `system`).
//! Custom permissions may introduce new modules; those fall back to the
//! generic description.

/// (namespace key, module name, description)
pub const BUILT_IN_MODULES: &[(&str, &str, &str)] = &[
    (
        "user",
        "User Management",
        "Permissions for managing system users and accounts",
    ),
    (
        "employee",
        "Employee Management",
        "Permissions for managing employee records and information",
    ),
    (
        "department",
        "Department Management",
        "Permissions for managing organizational departments",
    ),
    (
        "office",
        "Office Management",
        "Permissions for managing office locations and details",
    ),
    (
        "role",
        "Role Management",
        "Permissions for managing user roles and access levels",
    ),
    (
        "id_card",
        "ID Card Management",
        "Permissions for managing employee ID cards and printing",
    ),
    (
        "report",
        "Reports & System",
        "Permissions for system administration and reporting",
    ),
    (
        "system",
        "Reports & System",
        "Permissions for system administration and reporting",
    ),
];

/// Actions the built-in catalog ships with. The set is open: custom
/// permissions may use other actions.
pub const KNOWN_ACTIONS: &[&str] = &[
    "create",
    "read",
    "update",
    "delete",
    "export",
    "generate",
    "configure",
    "backup",
];

/// Fallback description for modules outside the registry
pub const GENERIC_MODULE_DESCRIPTION: &str = "Module permissions";

/// Description for a module name, with the generic fallback for unknown ones
pub fn module_description(module: &str) -> &'static str {
    BUILT_IN_MODULES
        .iter()
        .find(|(_, name, _)| *name == module)
        .map(|(_, _, desc)| *desc)
        .unwrap_or(GENERIC_MODULE_DESCRIPTION)
}

/// The registered module name for a namespace key, if any
pub fn module_for_key(key: &str) -> Option<&'static str> {
    BUILT_IN_MODULES
        .iter()
        .find(|(k, _, _)| *k == key)
        .map(|(_, name, _)| *name)
}

/// Whether a module name belongs to the built-in registry
pub fn is_builtin_module(module: &str) -> bool {
    BUILT_IN_MODULES.iter().any(|(_, name, _)| *name == module)
}
