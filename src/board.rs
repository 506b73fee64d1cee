use crate::token::TokenRegistry;
use crate::types::{Point, Rect};

pub const NUM_SLOTS: usize = 9;
pub const CENTER: usize = 4;

/// A fixed board position with its prime weight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub center: Point,
    pub prime: u64,
}

/// Row-major layout:
/// | 0 | 1 | 2 |
/// | 3 | 4 | 5 |
/// | 6 | 7 | 8 |
pub const SLOTS: [Slot; NUM_SLOTS] = [
    slot(50.0, 50.0, 13),
    slot(300.0, 50.0, 3),
    slot(550.0, 50.0, 23),
    slot(50.0, 300.0, 17),
    slot(300.0, 300.0, 11),
    slot(550.0, 300.0, 5),
    slot(50.0, 550.0, 29),
    slot(300.0, 550.0, 7),
    slot(550.0, 550.0, 19),
];

pub const WIN_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const ADJACENT: [&[usize]; NUM_SLOTS] = [
    &[1, 3, 4],
    &[0, 2, 4],
    &[1, 5, 4],
    &[0, 4, 6],
    &[0, 1, 2, 3, 5, 6, 7, 8],
    &[2, 4, 8],
    &[3, 4, 7],
    &[6, 4, 8],
    &[4, 5, 7],
];

const fn slot(x: f32, y: f32, prime: u64) -> Slot {
    Slot {
        center: Point::new(x, y),
        prime,
    }
}

/// Returns true if a token on slot `a` can slide directly to slot `b`.
pub fn is_adjacent(a: usize, b: usize) -> bool {
    a < NUM_SLOTS && ADJACENT[a].contains(&b)
}

/// Slots reachable from `slot` in one move.
pub fn neighbors(slot: usize) -> &'static [usize] {
    if slot < NUM_SLOTS { ADJACENT[slot] } else { &[] }
}

/// Click region of a slot.
pub fn slot_region(slot: usize, extent: f32) -> Rect {
    Rect::centered(SLOTS[slot].center, extent)
}

/// Sprite top-left for a token resting on `slot`.
pub fn slot_draw_position(slot: usize, token_extent: f32) -> Point {
    let center = SLOTS[slot].center;
    let half = token_extent / 2.0;
    Point::new(center.x - half, center.y - half)
}

/// Returns the slot under `pos` that is neither occupied nor reserved by a
/// token in transit.
pub fn free_slot_at(pos: Point, tokens: &TokenRegistry, extent: f32) -> Option<usize> {
    (0..NUM_SLOTS).find(|&i| slot_region(i, extent).contains(pos) && !tokens.is_occupied(i))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    const EXTENT: f32 = 50.0;

    #[test]
    fn adjacency_is_symmetric() {
        for a in 0..NUM_SLOTS {
            for b in 0..NUM_SLOTS {
                assert_eq!(is_adjacent(a, b), is_adjacent(b, a), "({a}, {b})");
            }
        }
    }

    #[test]
    fn adjacency_matches_fixed_table() {
        let expected: [&[usize]; NUM_SLOTS] = [
            &[1, 3, 4],
            &[0, 2, 4],
            &[1, 4, 5],
            &[0, 4, 6],
            &[0, 1, 2, 3, 5, 6, 7, 8],
            &[2, 4, 8],
            &[3, 4, 7],
            &[4, 6, 8],
            &[4, 5, 7],
        ];

        for (a, row) in expected.iter().enumerate() {
            let actual: Vec<usize> = (0..NUM_SLOTS).filter(|&b| is_adjacent(a, b)).collect();
            assert_eq!(actual, row.to_vec(), "neighbors of {a}");
        }
    }

    #[test]
    fn center_touches_everything_and_others_have_three_neighbors() {
        assert_eq!(neighbors(CENTER).len(), 8);
        for s in (0..NUM_SLOTS).filter(|&s| s != CENTER) {
            assert_eq!(neighbors(s).len(), 3);
            assert!(is_adjacent(s, CENTER));
            assert!(!is_adjacent(s, s));
        }
    }

    #[test]
    fn out_of_range_slots_are_never_adjacent() {
        assert!(!is_adjacent(9, 4));
        assert!(!is_adjacent(4, 9));
        assert!(neighbors(42).is_empty());
    }

    #[test]
    fn primes_are_distinct() {
        for i in 0..NUM_SLOTS {
            for j in (i + 1)..NUM_SLOTS {
                assert_ne!(SLOTS[i].prime, SLOTS[j].prime);
            }
        }
    }

    #[test]
    fn free_slot_at_finds_slot_under_point() {
        let tokens = TokenRegistry::new();

        assert_eq!(free_slot_at(Point::new(300.0, 300.0), &tokens, EXTENT), Some(4));
        assert_eq!(free_slot_at(Point::new(30.0, 560.0), &tokens, EXTENT), Some(6));
        assert_eq!(free_slot_at(Point::new(175.0, 175.0), &tokens, EXTENT), None);
    }

    #[test]
    fn free_slot_at_skips_occupied_and_reserved_slots() {
        let mut tokens = TokenRegistry::new();
        let id = tokens.place_token(Player::A, 4, EXTENT).unwrap();

        assert_eq!(free_slot_at(Point::new(300.0, 300.0), &tokens, EXTENT), None);

        tokens.begin_move(id, 1, EXTENT).unwrap();
        assert_eq!(free_slot_at(Point::new(300.0, 50.0), &tokens, EXTENT), None);
        assert_eq!(free_slot_at(Point::new(300.0, 300.0), &tokens, EXTENT), None);

        tokens.complete_move(id).unwrap();
        assert_eq!(free_slot_at(Point::new(300.0, 300.0), &tokens, EXTENT), Some(4));
    }

    #[test]
    fn draw_position_is_centered_on_slot() {
        assert_eq!(slot_draw_position(0, EXTENT), Point::new(25.0, 25.0));
        assert_eq!(slot_draw_position(8, EXTENT), Point::new(525.0, 525.0));
    }
}
