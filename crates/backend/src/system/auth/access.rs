use crate::shared::error::TrackerError;

/// Write privilege of the caller of a store or registry operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    Engineer,
}

impl Access {
    pub fn from_admin_flag(is_admin: bool) -> Self {
        if is_admin {
            Access::Engineer
        } else {
            Access::ReadOnly
        }
    }

    pub fn can_write(&self) -> bool {
        matches!(self, Access::Engineer)
    }

    /// Fails closed: read-only callers get `Unauthorized` and nothing is touched
    pub fn require_write(&self) -> Result<(), TrackerError> {
        if self.can_write() {
            Ok(())
        } else {
            Err(TrackerError::Unauthorized)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_write() {
        assert!(Access::Engineer.require_write().is_ok());
        assert!(matches!(
            Access::ReadOnly.require_write(),
            Err(TrackerError::Unauthorized)
        ));
        assert_eq!(Access::from_admin_flag(false), Access::ReadOnly);
    }
}
