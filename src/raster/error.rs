//! Error types for raster service operations.
//!
//! Errors carry structured context so a failed branch can be diagnosed from
//! logs even though the pipeline converts it to an absent value.

use std::fmt;

/// Result type for raster service operations.
pub type RasterResult<T> = Result<T, RasterError>;

/// Structured context for raster errors.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// The operation being performed (e.g., "reduce_region_mean")
    pub operation: Option<String>,
    /// The raster layer or collection involved
    pub layer: Option<String>,
    /// The band involved, if applicable
    pub band: Option<String>,
    /// Additional details about the error
    pub details: Option<String>,
    /// Whether this error is retryable
    pub retryable: bool,
}

impl ErrorContext {
    /// Create a new error context with an operation name.
    pub fn new(operation: impl Into<String>) -> Self {
        Self {
            operation: Some(operation.into()),
            ..Default::default()
        }
    }

    /// Set the layer or collection identifier.
    pub fn with_layer(mut self, layer: impl Into<String>) -> Self {
        self.layer = Some(layer.into());
        self
    }

    /// Set the band identifier.
    pub fn with_band(mut self, band: impl Into<String>) -> Self {
        self.band = Some(band.into());
        self
    }

    /// Set additional details.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Mark this error as retryable.
    pub fn retryable(mut self) -> Self {
        self.retryable = true;
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(ref op) = self.operation {
            parts.push(format!("operation={}", op));
        }
        if let Some(ref layer) = self.layer {
            parts.push(format!("layer={}", layer));
        }
        if let Some(ref band) = self.band {
            parts.push(format!("band={}", band));
        }
        if let Some(ref details) = self.details {
            parts.push(format!("details={}", details));
        }
        if self.retryable {
            parts.push("retryable=true".to_string());
        }
        write!(f, "[{}]", parts.join(", "))
    }
}

/// Error type for raster service operations.
#[derive(Debug, thiserror::Error)]
pub enum RasterError {
    /// Network, auth, or quota failure reaching the raster service.
    /// These are typically transient and may be retried.
    #[error("Transport error: {message} {context}")]
    Transport {
        message: String,
        context: ErrorContext,
    },

    /// The service accepted the call but the query itself failed.
    #[error("Query error: {message} {context}")]
    Query {
        message: String,
        context: ErrorContext,
    },

    /// A requested band does not exist on the target raster.
    #[error("Missing band: {band} on {layer}")]
    MissingBand { layer: String, band: String },

    /// The request was malformed before it reached the service.
    #[error("Invalid request: {message} {context}")]
    InvalidRequest {
        message: String,
        context: ErrorContext,
    },
}

impl RasterError {
    /// Transport error with context.
    pub fn transport(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Transport {
            message: message.into(),
            context,
        }
    }

    /// Query error with context.
    pub fn query(message: impl Into<String>, context: ErrorContext) -> Self {
        Self::Query {
            message: message.into(),
            context,
        }
    }

    /// Missing band on a layer.
    pub fn missing_band(layer: impl Into<String>, band: impl Into<String>) -> Self {
        Self::MissingBand {
            layer: layer.into(),
            band: band.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_display() {
        let ctx = ErrorContext::new("reduce_region_mean")
            .with_layer("OpenLandMap/SOL/SOL_PH-H2O_USDA-4C1A2A_M/v02")
            .with_band("phh2o_usda.4c1a2a_m_sl1_250m")
            .retryable();
        let s = ctx.to_string();
        assert!(s.contains("operation=reduce_region_mean"));
        assert!(s.contains("band=phh2o"));
        assert!(s.contains("retryable=true"));
    }

    #[test]
    fn test_missing_band_display() {
        let err = RasterError::missing_band("layer-x", "band-y");
        assert_eq!(err.to_string(), "Missing band: band-y on layer-x");
    }
}
