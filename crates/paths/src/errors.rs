//! Path builder errors

use thiserror::Error;

use crate::operations::Operation;

/// Error returned when an operation and identifier do not form a valid path
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PathBuilderError {
    /// The operation targets a single item but no identifier was given
    #[error("operation {0} requires an identifier")]
    MissingId(Operation),

    /// The operation targets a collection but an identifier was given
    #[error("operation {0} does not take an identifier")]
    UnexpectedId(Operation),

    /// The identifier would produce an empty path segment
    #[error("operation {0} was given an empty identifier")]
    EmptyId(Operation),

    /// The identifier is `.` or `..` (possibly percent-encoded), which URL
    /// resolution would collapse into the parent path
    #[error("operation {0} was given a dot-segment identifier")]
    DotSegmentId(Operation),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operations::Action;
    use crate::resource::Resource;

    #[test]
    fn test_error_messages_name_the_operation() {
        assert_eq!(
            PathBuilderError::MissingId(Operation::Delete(Resource::Salons)).to_string(),
            "operation salons.delete requires an identifier"
        );
        assert_eq!(
            PathBuilderError::DotSegmentId(Operation::Action(Action::BlockSlot)).to_string(),
            "operation timeslots.block_slot was given a dot-segment identifier"
        );
    }
}
