use crate::board::{NUM_SLOTS, slot_draw_position};
use crate::error::{MorrisError, MorrisResult};
use crate::types::{Player, Point, Rect};

/// Index of a token in the registry. Only valid until the next reset.
pub type TokenId = usize;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Token {
    pub owner: Player,
    /// Slot the token rests on. Stays at the origin during a slide.
    pub slot: usize,
    /// Reserved destination; `Some` exactly while the token is in transit.
    pub destination: Option<usize>,
    /// Sprite top-left in board pixels.
    pub position: Point,
    pub target: Point,
}

impl Token {
    pub fn is_moving(&self) -> bool {
        self.destination.is_some()
    }

    /// Returns true if the token claims `slot`, either resting or reserved.
    pub fn claims(&self, slot: usize) -> bool {
        self.slot == slot || self.destination == Some(slot)
    }

    pub fn bounds(&self, token_extent: f32) -> Rect {
        Rect::square(self.position, token_extent)
    }
}

/// Placed tokens in placement order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TokenRegistry {
    tokens: Vec<Token>,
}

impl TokenRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn place_token(
        &mut self,
        owner: Player,
        slot: usize,
        token_extent: f32,
    ) -> MorrisResult<TokenId> {
        if slot >= NUM_SLOTS {
            return Err(MorrisError::SlotOutOfRange { slot });
        }
        if self.is_occupied(slot) {
            return Err(MorrisError::SlotOccupied { slot });
        }

        let position = slot_draw_position(slot, token_extent);
        self.tokens.push(Token {
            owner,
            slot,
            destination: None,
            position,
            target: position,
        });
        Ok(self.tokens.len() - 1)
    }

    /// Starts a slide. The destination is reserved immediately; the token's
    /// slot stays at the origin until `complete_move`.
    pub fn begin_move(
        &mut self,
        id: TokenId,
        destination: usize,
        token_extent: f32,
    ) -> MorrisResult<()> {
        if destination >= NUM_SLOTS {
            return Err(MorrisError::SlotOutOfRange { slot: destination });
        }
        if self.is_occupied(destination) {
            return Err(MorrisError::SlotOccupied { slot: destination });
        }

        let token = self
            .tokens
            .get_mut(id)
            .ok_or(MorrisError::NoSuchToken { id })?;
        token.destination = Some(destination);
        token.target = slot_draw_position(destination, token_extent);
        Ok(())
    }

    /// Lands a token on its reserved destination.
    pub fn complete_move(&mut self, id: TokenId) -> MorrisResult<()> {
        let token = self
            .tokens
            .get_mut(id)
            .ok_or(MorrisError::NoSuchToken { id })?;
        let destination = token.destination.ok_or(MorrisError::NotMoving { id })?;

        token.slot = destination;
        token.destination = None;
        token.position = token.target;
        Ok(())
    }

    pub fn is_occupied(&self, slot: usize) -> bool {
        self.tokens.iter().any(|t| t.claims(slot))
    }

    /// Owner of the token resting on `slot`. Reservations are not reported.
    pub fn owner_at(&self, slot: usize) -> Option<Player> {
        self.tokens.iter().find(|t| t.slot == slot).map(|t| t.owner)
    }

    /// First token of `owner` whose sprite bounds contain `pos`.
    pub fn token_at(&self, pos: Point, owner: Player, token_extent: f32) -> Option<TokenId> {
        self.tokens
            .iter()
            .position(|t| t.owner == owner && t.bounds(token_extent).contains(pos))
    }

    pub fn get(&self, id: TokenId) -> Option<&Token> {
        self.tokens.get(id)
    }

    pub(crate) fn get_mut(&mut self, id: TokenId) -> Option<&mut Token> {
        self.tokens.get_mut(id)
    }

    pub fn moving(&self) -> impl Iterator<Item = TokenId> + '_ {
        self.tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| t.is_moving())
            .map(|(id, _)| id)
    }

    pub fn any_moving(&self) -> bool {
        self.tokens.iter().any(Token::is_moving)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Token> {
        self.tokens.iter()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn clear(&mut self) {
        self.tokens.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EXTENT: f32 = 50.0;

    #[test]
    fn place_token_appends_in_order() {
        let mut tokens = TokenRegistry::new();

        assert_eq!(tokens.place_token(Player::A, 0, EXTENT), Ok(0));
        assert_eq!(tokens.place_token(Player::B, 8, EXTENT), Ok(1));

        let owners: Vec<Player> = tokens.iter().map(|t| t.owner).collect();
        assert_eq!(owners, vec![Player::A, Player::B]);
        assert_eq!(tokens.owner_at(8), Some(Player::B));
        assert_eq!(tokens.get(0).unwrap().position, Point::new(25.0, 25.0));
    }

    #[test]
    fn place_token_rejects_occupied_and_out_of_range_slots() {
        let mut tokens = TokenRegistry::new();
        tokens.place_token(Player::A, 3, EXTENT).unwrap();

        assert_eq!(
            tokens.place_token(Player::B, 3, EXTENT),
            Err(MorrisError::SlotOccupied { slot: 3 })
        );
        assert_eq!(
            tokens.place_token(Player::B, 9, EXTENT),
            Err(MorrisError::SlotOutOfRange { slot: 9 })
        );
        assert_eq!(tokens.len(), 1);
    }

    #[test]
    fn begin_move_reserves_destination_and_keeps_origin() {
        let mut tokens = TokenRegistry::new();
        let id = tokens.place_token(Player::A, 4, EXTENT).unwrap();

        tokens.begin_move(id, 1, EXTENT).unwrap();

        let token = tokens.get(id).unwrap();
        assert_eq!(token.slot, 4);
        assert_eq!(token.destination, Some(1));
        assert_eq!(token.target, Point::new(275.0, 25.0));
        assert!(tokens.is_occupied(1));
        assert!(tokens.is_occupied(4));
        assert_eq!(tokens.owner_at(1), None);
        assert_eq!(
            tokens.place_token(Player::B, 1, EXTENT),
            Err(MorrisError::SlotOccupied { slot: 1 })
        );
        assert_eq!(tokens.moving().collect::<Vec<_>>(), vec![id]);
    }

    #[test]
    fn complete_move_lands_token_and_frees_origin() {
        let mut tokens = TokenRegistry::new();
        let id = tokens.place_token(Player::A, 4, EXTENT).unwrap();
        tokens.begin_move(id, 1, EXTENT).unwrap();

        tokens.complete_move(id).unwrap();

        let token = tokens.get(id).unwrap();
        assert_eq!(token.slot, 1);
        assert!(!token.is_moving());
        assert_eq!(token.position, token.target);
        assert!(!tokens.is_occupied(4));
        assert!(!tokens.any_moving());
    }

    #[test]
    fn complete_move_requires_transit() {
        let mut tokens = TokenRegistry::new();
        let id = tokens.place_token(Player::A, 0, EXTENT).unwrap();

        assert_eq!(tokens.complete_move(id), Err(MorrisError::NotMoving { id }));
        assert_eq!(tokens.complete_move(7), Err(MorrisError::NoSuchToken { id: 7 }));
    }

    #[test]
    fn token_at_hits_only_owner_tokens() {
        let mut tokens = TokenRegistry::new();
        tokens.place_token(Player::A, 0, EXTENT).unwrap();
        tokens.place_token(Player::B, 4, EXTENT).unwrap();

        assert_eq!(tokens.token_at(Point::new(40.0, 40.0), Player::A, EXTENT), Some(0));
        assert_eq!(tokens.token_at(Point::new(40.0, 40.0), Player::B, EXTENT), None);
        assert_eq!(tokens.token_at(Point::new(300.0, 300.0), Player::B, EXTENT), Some(1));
    }
}
