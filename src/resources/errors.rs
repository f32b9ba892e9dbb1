use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Invalid configuration: {0}")]
    Validation(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// Fails with a validation error unless `value` is finite and strictly positive.
pub(crate) fn ensure_positive(name: &str, value: f32) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{} must be positive and finite, got {}",
            name, value
        )))
    }
}

/// Fails with a validation error unless `value` lies in `[0, 1]`.
pub(crate) fn ensure_ratio(name: &str, value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::Validation(format!(
            "{} must be between 0 and 1, got {}",
            name, value
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_checks() {
        assert!(ensure_positive("gravity", 80.0).is_ok());
        assert!(ensure_positive("gravity", 0.0).is_err());
        assert!(ensure_positive("gravity", f32::NAN).is_err());
        assert!(ensure_positive("gravity", f32::INFINITY).is_err());
    }

    #[test]
    fn test_ratio_checks() {
        assert!(ensure_ratio("lift", 0.0).is_ok());
        assert!(ensure_ratio("lift", 1.0).is_ok());
        assert!(ensure_ratio("lift", 1.2).is_err());
        assert!(ensure_ratio("lift", f32::NAN).is_err());

        let err = ensure_ratio("lift", -0.5).unwrap_err();
        assert!(err.to_string().contains("lift"));
    }
}
