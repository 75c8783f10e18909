//! Configuration types for the attendance hours engine.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file.

use serde::Deserialize;

/// Metadata about the configured deployment.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineMetadata {
    /// The deployment name (e.g., the company or site).
    pub name: String,
    /// The jurisdiction the rules apply in.
    pub jurisdiction: String,
    /// The configuration version or effective date.
    pub version: String,
}

/// The administrative-staff roster.
///
/// An employee is administrative when their id is listed explicitly or
/// their assigned area is one of the administrative areas. Administrative
/// staff get the simplified normal/50% overtime split instead of
/// shift-based bucketing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AdministrativeRoster {
    /// Employee ids that are administrative regardless of area.
    #[serde(default)]
    employees: Vec<String>,
    /// Area names whose members are administrative.
    #[serde(default)]
    areas: Vec<String>,
}

impl AdministrativeRoster {
    /// Creates a roster from explicit lists.
    pub fn new(employees: Vec<String>, areas: Vec<String>) -> Self {
        Self { employees, areas }
    }

    /// Whether the given employee counts as administrative staff.
    ///
    /// # Example
    ///
    /// ```
    /// use attendance_engine::config::AdministrativeRoster;
    ///
    /// let roster = AdministrativeRoster::new(
    ///     vec!["emp_009".to_string()],
    ///     vec!["Talento Humano".to_string()],
    /// );
    /// assert!(roster.is_administrative("emp_009", None));
    /// assert!(roster.is_administrative("emp_014", Some("Talento Humano")));
    /// assert!(!roster.is_administrative("emp_014", Some("Producción")));
    /// ```
    pub fn is_administrative(&self, employee_id: &str, area: Option<&str>) -> bool {
        if self.employees.iter().any(|id| id == employee_id) {
            return true;
        }
        match area {
            Some(area) => self.areas.iter().any(|name| name == area),
            None => false,
        }
    }
}

/// The complete engine configuration loaded from YAML.
#[derive(Debug, Clone, Deserialize)]
pub struct EngineConfig {
    /// Deployment metadata.
    pub metadata: EngineMetadata,
    /// The administrative-staff roster.
    #[serde(default)]
    pub administrative: AdministrativeRoster,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_roster_flags_nobody() {
        let roster = AdministrativeRoster::default();
        assert!(!roster.is_administrative("emp_001", Some("Talento Humano")));
    }

    #[test]
    fn test_explicit_employee_wins_without_area() {
        let roster = AdministrativeRoster::new(vec!["emp_001".to_string()], vec![]);
        assert!(roster.is_administrative("emp_001", None));
        assert!(!roster.is_administrative("emp_002", None));
    }

    #[test]
    fn test_area_membership_flags_employee() {
        let roster = AdministrativeRoster::new(vec![], vec!["Administración".to_string()]);
        assert!(roster.is_administrative("emp_002", Some("Administración")));
        assert!(!roster.is_administrative("emp_002", Some("Bodega")));
        assert!(!roster.is_administrative("emp_002", None));
    }

    #[test]
    fn test_config_deserializes_from_yaml() {
        let yaml = r#"
metadata:
  name: "Planta Quito"
  jurisdiction: "EC"
  version: "2025-01-01"
administrative:
  employees:
    - emp_009
  areas:
    - "Talento Humano"
    - "Administración"
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.metadata.name, "Planta Quito");
        assert!(config.administrative.is_administrative("emp_009", None));
        assert!(config
            .administrative
            .is_administrative("emp_100", Some("Administración")));
    }

    #[test]
    fn test_config_without_roster_section() {
        let yaml = r#"
metadata:
  name: "Planta Quito"
  jurisdiction: "EC"
  version: "2025-01-01"
"#;
        let config: EngineConfig = serde_yaml::from_str(yaml).unwrap();
        assert!(!config.administrative.is_administrative("emp_009", None));
    }
}
