//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate value ranges (timeouts > 0, addresses parse)
//! - Check route declarations (methods are HTTP tokens, paths are absolute)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: KittyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::{Method, StatusCode};
use thiserror::Error;

use crate::config::schema::{KittyConfig, ResponseConfig};

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("invalid {field}: {value:?} is not a socket address")]
    InvalidAddress { field: &'static str, value: String },
    #[error("timeouts.request_secs must be greater than zero")]
    ZeroTimeout,
    #[error("route #{index} has no name")]
    MissingRouteName { index: usize },
    #[error("route {route:?} has no methods")]
    NoMethods { route: String },
    #[error("route {route:?} has no paths")]
    NoPaths { route: String },
    #[error("route {route:?} has invalid method {method:?}")]
    InvalidMethod { route: String, method: String },
    #[error("route {route:?} has path {path:?} not starting with '/'")]
    InvalidPath { route: String, path: String },
    #[error("{context} has invalid status code {status}")]
    InvalidStatus { context: String, status: u16 },
}

/// Validate `config`, collecting every error found.
pub fn validate_config(config: &KittyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::ZeroTimeout);
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: config.observability.metrics_address.clone(),
        });
    }

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.is_empty() {
            errors.push(ValidationError::MissingRouteName { index });
        }
        let label = if route.name.is_empty() {
            format!("#{}", index)
        } else {
            route.name.clone()
        };

        if route.methods.is_empty() {
            errors.push(ValidationError::NoMethods { route: label.clone() });
        }
        for method in &route.methods {
            if Method::from_bytes(method.as_bytes()).is_err() {
                errors.push(ValidationError::InvalidMethod {
                    route: label.clone(),
                    method: method.clone(),
                });
            }
        }

        if route.paths.is_empty() {
            errors.push(ValidationError::NoPaths { route: label.clone() });
        }
        for path in &route.paths {
            if !path.starts_with('/') {
                errors.push(ValidationError::InvalidPath {
                    route: label.clone(),
                    path: path.clone(),
                });
            }
        }

        check_status(&route.response, format!("route {:?}", label), &mut errors);
    }

    if let Some(not_found) = &config.not_found {
        check_status(not_found, "not_found".to_string(), &mut errors);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn check_status(response: &ResponseConfig, context: String, errors: &mut Vec<ValidationError>) {
    if StatusCode::from_u16(response.status).is_err() {
        errors.push(ValidationError::InvalidStatus {
            context,
            status: response.status,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    fn route(name: &str, methods: &[&str], paths: &[&str]) -> RouteConfig {
        RouteConfig {
            name: name.to_string(),
            methods: methods.iter().map(|m| m.to_string()).collect(),
            paths: paths.iter().map(|p| p.to_string()).collect(),
            response: ResponseConfig::default(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&KittyConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = KittyConfig::default();
        config.listener.bind_address = "not-an-address".into();
        config.timeouts.request_secs = 0;
        config.routes.push(route("bad", &[], &["relative"]));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::InvalidAddress {
                    field: "listener.bind_address",
                    value: "not-an-address".into(),
                },
                ValidationError::ZeroTimeout,
                ValidationError::NoMethods { route: "bad".into() },
                ValidationError::InvalidPath {
                    route: "bad".into(),
                    path: "relative".into(),
                },
            ]
        );
    }

    #[test]
    fn test_invalid_method_and_status() {
        let mut config = KittyConfig::default();
        let mut r = route("r", &["GET", "BAD METHOD"], &["/ok"]);
        r.response.status = 42;
        config.routes.push(r);

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::InvalidMethod {
            route: "r".into(),
            method: "BAD METHOD".into(),
        }));
        assert!(errors.contains(&ValidationError::InvalidStatus {
            context: "route \"r\"".into(),
            status: 42,
        }));
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = KittyConfig::default();
        config.observability.metrics_address = "nope".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
