//! Pawn promotion awaiting a piece choice
//!
//! When the trainee's move reaches the last rank the session suspends in
//! `AwaitingPromotionChoice` and records the move here. Nothing is committed
//! until a role is chosen; cancelling drops the record.

use shakmaty::{Role, Square};

/// Roles a pawn may promote to, in menu order
pub const PROMOTION_CHOICES: [Role; 4] = [Role::Queen, Role::Rook, Role::Bishop, Role::Knight];

/// A suspended promotion move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingPromotion {
    pub from: Square,
    pub to: Square,
}

impl PendingPromotion {
    pub fn new(from: Square, to: Square) -> Self {
        Self { from, to }
    }
}

/// Whether `role` is an acceptable promotion choice
pub fn is_promotion_choice(role: Role) -> bool {
    PROMOTION_CHOICES.contains(&role)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_king_and_pawn_are_not_choices() {
        assert!(is_promotion_choice(Role::Knight));
        assert!(is_promotion_choice(Role::Queen));
        assert!(!is_promotion_choice(Role::King));
        assert!(!is_promotion_choice(Role::Pawn));
    }
}
