//! Identity of whoever triggered a service call.

use uuid::Uuid;

use crate::errors::ServiceError;

/// Authenticated caller. `sppg_id` is set for operators bound to one unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Actor {
    pub user_id: Uuid,
    pub sppg_id: Option<Uuid>,
}

/// Author recorded on rows created by scheduled jobs.
pub const SYSTEM_ACTOR: Actor = Actor { user_id: Uuid::nil(), sppg_id: None };

impl Actor {
    pub fn new(user_id: Uuid) -> Self {
        Self { user_id, sppg_id: None }
    }

    pub fn with_sppg(mut self, sppg_id: Uuid) -> Self {
        self.sppg_id = Some(sppg_id);
        self
    }

    /// The explicit reference wins; otherwise the session's own unit.
    pub fn resolve_sppg(&self, explicit: Option<Uuid>) -> Result<Uuid, ServiceError> {
        explicit
            .or(self.sppg_id)
            .ok_or_else(|| ServiceError::invalid("sppgId", "SPPG harus dipilih"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ErrorKind;

    #[test]
    fn explicit_sppg_overrides_session() {
        let own = Uuid::new_v4();
        let other = Uuid::new_v4();
        let actor = Actor::new(Uuid::new_v4()).with_sppg(own);
        assert_eq!(actor.resolve_sppg(None).unwrap(), own);
        assert_eq!(actor.resolve_sppg(Some(other)).unwrap(), other);
    }

    #[test]
    fn missing_sppg_is_a_validation_failure() {
        let err = SYSTEM_ACTOR.resolve_sppg(None).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ValidationFailed);
    }
}
