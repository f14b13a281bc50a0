//! Ownership gate.
//!
//! Every operation takes an explicit [`Principal`]. An unauthenticated caller
//! is [`Principal::Anonymous`] and is never the owner of anything.

use crate::error::CoreError;
use crate::types::UserId;

/// The identity making a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    Anonymous,
    User(UserId),
}

impl Principal {
    pub fn user_id(&self) -> Option<UserId> {
        match self {
            Principal::Anonymous => None,
            Principal::User(id) => Some(*id),
        }
    }
}

impl From<Option<UserId>> for Principal {
    fn from(id: Option<UserId>) -> Self {
        id.map_or(Principal::Anonymous, Principal::User)
    }
}

/// An entity with a single owning user (a site or a media record).
pub trait Owned {
    fn owner_id(&self) -> UserId;
}

/// True iff `principal` is authenticated and equals the entity's owner.
pub fn is_owner<E: Owned + ?Sized>(principal: &Principal, entity: &E) -> bool {
    principal.user_id() == Some(entity.owner_id())
}

/// The single rejection used for every failed ownership check, whether the
/// target is missing or belongs to someone else.
pub fn not_owner() -> CoreError {
    CoreError::Forbidden("Only the owner may modify this resource".into())
}

/// Gate a mutation: `Ok` for the owner, `Forbidden` for anyone else.
pub fn ensure_owner<E: Owned + ?Sized>(principal: &Principal, entity: &E) -> Result<(), CoreError> {
    if is_owner(principal, entity) {
        Ok(())
    } else {
        Err(not_owner())
    }
}
