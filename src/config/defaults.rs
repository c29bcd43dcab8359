//! Default selection used when the command line leaves it out

use serde::Deserialize;

use super::error::ValidationError;

/// Default customer, products and competitor
#[derive(Debug, Clone, Deserialize)]
pub struct DefaultsConfig {
    /// Customer name
    #[serde(default = "default_customer")]
    pub customer: String,

    /// Competitor vendor
    #[serde(default = "default_competitor")]
    pub competitor: String,

    /// Selected products (comma-separated)
    #[serde(default = "default_products")]
    pub products: String,
}

impl DefaultsConfig {
    /// Get the products as a vector, skipping blank entries
    pub fn products_list(&self) -> Vec<String> {
        self.products
            .split(',')
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
            .map(|s| s.to_string())
            .collect()
    }

    /// Picks the products for a run
    ///
    /// Explicit products win. `none` selects nothing even when defaults are
    /// configured. Otherwise the configured list applies.
    pub fn resolve_products(&self, explicit: Vec<String>, none: bool) -> Vec<String> {
        if none {
            Vec::new()
        } else if explicit.is_empty() {
            self.products_list()
        } else {
            explicit
        }
    }

    /// Validate default selection
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.customer.trim().is_empty() {
            return Err(ValidationError::MissingRequired("defaults.customer"));
        }
        if self.competitor.trim().is_empty() {
            return Err(ValidationError::MissingRequired("defaults.competitor"));
        }
        Ok(())
    }
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            customer: default_customer(),
            competitor: default_competitor(),
            products: default_products(),
        }
    }
}

fn default_customer() -> String {
    "State Bank of India".to_string()
}

fn default_competitor() -> String {
    "Palo Alto Networks".to_string()
}

fn default_products() -> String {
    "Cisco Secure Firewall,Cisco Duo".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo_selection() {
        let config = DefaultsConfig::default();
        assert_eq!(config.customer, "State Bank of India");
        assert_eq!(config.competitor, "Palo Alto Networks");
        assert_eq!(
            config.products_list(),
            vec!["Cisco Secure Firewall", "Cisco Duo"]
        );
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_products_list_trims_and_skips_blanks() {
        let config = DefaultsConfig {
            products: " Cisco Duo , ,Cisco Umbrella,".to_string(),
            ..DefaultsConfig::default()
        };
        assert_eq!(config.products_list(), vec!["Cisco Duo", "Cisco Umbrella"]);
    }

    #[test]
    fn test_empty_products_is_empty_selection() {
        let config = DefaultsConfig {
            products: String::new(),
            ..DefaultsConfig::default()
        };
        assert!(config.products_list().is_empty());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_resolve_products_prefers_explicit() {
        let config = DefaultsConfig::default();
        assert_eq!(
            config.resolve_products(vec!["Cisco Umbrella".to_string()], false),
            vec!["Cisco Umbrella"]
        );
    }

    #[test]
    fn test_resolve_products_falls_back_to_defaults() {
        let config = DefaultsConfig::default();
        assert_eq!(
            config.resolve_products(Vec::new(), false),
            vec!["Cisco Secure Firewall", "Cisco Duo"]
        );
    }

    #[test]
    fn test_resolve_products_none_overrides_defaults() {
        let config = DefaultsConfig::default();
        assert!(config.resolve_products(Vec::new(), true).is_empty());
    }

    #[test]
    fn test_blank_customer_rejected() {
        let config = DefaultsConfig {
            customer: "   ".to_string(),
            ..DefaultsConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("defaults.customer"))
        );
    }

    #[test]
    fn test_blank_competitor_rejected() {
        let config = DefaultsConfig {
            competitor: String::new(),
            ..DefaultsConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ValidationError::MissingRequired("defaults.competitor"))
        );
    }
}
