//! # Uno Game Implementation
//!
//! The full Uno turn engine: a 108-card deck, action cards, penalty
//! stacks, the +4 bluff challenge, and three switchable house rules.
//!
//! ## Base rules
//! - A card is playable when it matches the active color, matches the
//!   top card's face, or is a wild
//! - Skip skips, Reverse flips direction (and skips in a 2-player game),
//!   Draw Two makes the next seat draw two and lose their turn
//! - Wild Draw Four may always be attempted; the victim can challenge
//!   the claim that the player had no card of the active color. A caught
//!   bluffer draws the stack; a wrong challenger draws two extra
//! - First empty hand wins and scores the cards left in other hands
//!
//! ## House rules (each opt-in, see [`HouseRules`])
//! - **Stacking**: answer a pending +2 with a +2 (or +4 with +4),
//!   passing the grown stack along
//! - **Jump-in**: a seat holding a card identical to the one just played
//!   may play it out of turn; play continues from the jumper
//! - **Seven-0**: a played 7 swaps hands with a chosen seat, a played 0
//!   rotates all hands one seat in the direction of play
//!
//! The engine is a turn-taking state machine: interrupt decisions
//! (challenges, jump-in offers, swap targets) are modeled as phases
//! where the seat that must decide becomes the acting player.

use crate::GameState;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use std::fmt;
use std::str::FromStr;

/// The four suit colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnoColor {
    Red,
    Yellow,
    Green,
    Blue,
}

impl UnoColor {
    /// All colors, used when enumerating wild declarations.
    pub const ALL: [UnoColor; 4] = [
        UnoColor::Red,
        UnoColor::Yellow,
        UnoColor::Green,
        UnoColor::Blue,
    ];

    fn name(self) -> &'static str {
        match self {
            UnoColor::Red => "red",
            UnoColor::Yellow => "yellow",
            UnoColor::Green => "green",
            UnoColor::Blue => "blue",
        }
    }
}

/// A card face.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnoFace {
    Number(u8),
    Skip,
    Reverse,
    DrawTwo,
    Wild,
    WildDrawFour,
}

/// An Uno card. Wilds carry no color of their own.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct UnoCard {
    pub color: Option<UnoColor>,
    pub face: UnoFace,
}

impl UnoCard {
    fn colored(color: UnoColor, face: UnoFace) -> Self {
        UnoCard {
            color: Some(color),
            face,
        }
    }

    fn wild(face: UnoFace) -> Self {
        UnoCard { color: None, face }
    }

    /// Whether this card is a wild of either kind.
    pub fn is_wild(&self) -> bool {
        matches!(self.face, UnoFace::Wild | UnoFace::WildDrawFour)
    }

    /// End-of-game point value of a card left in hand.
    pub fn points(&self) -> u32 {
        match self.face {
            UnoFace::Number(n) => n as u32,
            UnoFace::Skip | UnoFace::Reverse | UnoFace::DrawTwo => 20,
            UnoFace::Wild | UnoFace::WildDrawFour => 50,
        }
    }
}

/// Optional house rules, all off by default.
#[derive(Clone, Copy, Default, Debug, PartialEq, Eq)]
pub struct HouseRules {
    /// Penalty cards may be answered with penalty cards
    pub stacking: bool,
    /// Identical cards may be played out of turn
    pub jump_in: bool,
    /// Sevens swap hands, zeros rotate them
    pub seven_zero: bool,
}

/// An Uno action. Which variants are legal depends on the engine phase.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum UnoMove {
    /// Play a hand card by index; wilds must declare a color
    Play {
        index: usize,
        color: Option<UnoColor>,
    },
    /// Draw a card (always allowed in place of playing)
    Draw,
    /// Play the card just drawn
    PlayDrawn { color: Option<UnoColor> },
    /// Keep the card just drawn and end the turn
    KeepDrawn,
    /// Draw the accumulated +2 stack and lose the turn
    AcceptPenalty,
    /// Call the bluff on a Wild Draw Four
    Challenge,
    /// Decline the challenge: draw the stack and lose the turn
    NoChallenge,
    /// Choose whose hand to take after playing a 7 (1-based seat)
    SwapWith { seat: usize },
    /// Play an identical card out of turn
    JumpIn { index: usize },
    /// Decline the jump-in offer
    PassJumpIn,
}

/// What the engine is waiting on.
#[derive(Clone, Debug, PartialEq, Eq)]
enum UnoPhase {
    /// The acting seat plays, draws, or answers a +2 stack
    Play,
    /// The acting seat decides what to do with the card they just drew
    DrawnDecision { index: usize },
    /// The acting seat is the victim of a Wild Draw Four
    Challenge,
    /// The acting seat played a 7 and must pick a swap target
    SwapTarget,
    /// Seats in `offers` are asked, in order, whether they jump in
    JumpInWindow { offers: Vec<usize> },
}

/// The Uno turn engine.
#[derive(Debug, Clone)]
pub struct UnoGame {
    hands: Vec<Vec<UnoCard>>,
    /// Draw pile, last element on top
    deck: Vec<UnoCard>,
    /// Discard pile, last element on top
    discard: Vec<UnoCard>,
    /// `None` only while a wild starter leaves the first player a free choice
    active_color: Option<UnoColor>,
    /// Seat whose decision the engine is waiting on
    current: usize,
    /// Seat holding the nominal turn (differs from `current` in windows)
    turn_holder: usize,
    direction: i8,
    /// Cards owed to the next victim of a penalty stack
    pending_draw: u8,
    /// Whether the pending stack is made of Wild Draw Fours
    pending_wild: bool,
    /// Active color before the last Wild Draw Four, for bluff checks
    color_before_wild: Option<UnoColor>,
    /// Seat that played the last Wild Draw Four
    culprit: usize,
    skip_next: bool,
    phase: UnoPhase,
    rules: HouseRules,
    winner: Option<usize>,
    rng: Xoshiro256StarStar,
}

impl GameState for UnoGame {
    type Move = UnoMove;

    fn get_num_players(&self) -> i32 {
        self.hands.len() as i32
    }

    fn get_possible_moves(&self) -> Vec<Self::Move> {
        if self.winner.is_some() {
            return Vec::new();
        }
        let hand = &self.hands[self.current];
        let mut moves = Vec::new();
        match &self.phase {
            UnoPhase::Play => {
                if self.pending_draw > 0 {
                    // A +2 stack: accept it, or grow it when stacking is on.
                    moves.push(UnoMove::AcceptPenalty);
                    if self.rules.stacking {
                        for (i, card) in hand.iter().enumerate() {
                            if card.face == UnoFace::DrawTwo {
                                moves.push(UnoMove::Play {
                                    index: i,
                                    color: None,
                                });
                            }
                        }
                    }
                } else {
                    for (i, card) in hand.iter().enumerate() {
                        if !self.is_playable(card) {
                            continue;
                        }
                        if card.is_wild() {
                            for color in UnoColor::ALL {
                                moves.push(UnoMove::Play {
                                    index: i,
                                    color: Some(color),
                                });
                            }
                        } else {
                            moves.push(UnoMove::Play {
                                index: i,
                                color: None,
                            });
                        }
                    }
                    moves.push(UnoMove::Draw);
                }
            }
            UnoPhase::DrawnDecision { index } => {
                let card = hand[*index];
                if card.is_wild() {
                    for color in UnoColor::ALL {
                        moves.push(UnoMove::PlayDrawn { color: Some(color) });
                    }
                } else {
                    moves.push(UnoMove::PlayDrawn { color: None });
                }
                moves.push(UnoMove::KeepDrawn);
            }
            UnoPhase::Challenge => {
                moves.push(UnoMove::Challenge);
                moves.push(UnoMove::NoChallenge);
                if self.rules.stacking {
                    for (i, card) in hand.iter().enumerate() {
                        if card.face == UnoFace::WildDrawFour {
                            for color in UnoColor::ALL {
                                moves.push(UnoMove::Play {
                                    index: i,
                                    color: Some(color),
                                });
                            }
                        }
                    }
                }
            }
            UnoPhase::SwapTarget => {
                for seat in 0..self.hands.len() {
                    if seat != self.current {
                        moves.push(UnoMove::SwapWith { seat: seat + 1 });
                    }
                }
            }
            UnoPhase::JumpInWindow { .. } => {
                let top = *self.top_card();
                for (i, card) in hand.iter().enumerate() {
                    if card.color == top.color && card.face == top.face {
                        moves.push(UnoMove::JumpIn { index: i });
                    }
                }
                moves.push(UnoMove::PassJumpIn);
            }
        }
        moves
    }

    fn make_move(&mut self, mv: &Self::Move) {
        if self.winner.is_some() {
            return;
        }
        match (self.phase.clone(), *mv) {
            (UnoPhase::Play, UnoMove::Play { index, color }) => {
                self.play_from_hand(self.current, index, color);
            }
            (UnoPhase::Play, UnoMove::Draw) if self.pending_draw == 0 => {
                let seat = self.current;
                match self.draw_one(seat) {
                    Some(index) if self.is_playable(&self.hands[seat][index]) => {
                        self.phase = UnoPhase::DrawnDecision { index };
                    }
                    _ => self.advance_turn(seat),
                }
            }
            (UnoPhase::Play, UnoMove::AcceptPenalty) if self.pending_draw > 0 => {
                let seat = self.current;
                self.draw_many(seat, self.pending_draw as usize);
                self.pending_draw = 0;
                self.advance_turn(seat);
            }
            (UnoPhase::DrawnDecision { index }, UnoMove::PlayDrawn { color }) => {
                self.play_from_hand(self.current, index, color);
            }
            (UnoPhase::DrawnDecision { .. }, UnoMove::KeepDrawn) => {
                self.advance_turn(self.current);
            }
            (UnoPhase::Challenge, UnoMove::Challenge) => {
                let victim = self.current;
                let bluffed = self.culprit_bluffed();
                if bluffed {
                    // Caught: the culprit draws the stack and the victim
                    // keeps their turn.
                    let culprit = self.culprit;
                    self.draw_many(culprit, self.pending_draw as usize);
                    self.pending_draw = 0;
                    self.phase = UnoPhase::Play;
                    self.turn_holder = victim;
                } else {
                    // Clean: the victim draws the stack plus two.
                    self.draw_many(victim, self.pending_draw as usize + 2);
                    self.pending_draw = 0;
                    self.advance_turn(victim);
                }
            }
            (UnoPhase::Challenge, UnoMove::NoChallenge) => {
                let victim = self.current;
                self.draw_many(victim, self.pending_draw as usize);
                self.pending_draw = 0;
                self.advance_turn(victim);
            }
            (UnoPhase::Challenge, UnoMove::Play { index, color })
                if self.rules.stacking
                    && self.hands[self.current][index].face == UnoFace::WildDrawFour =>
            {
                self.play_from_hand(self.current, index, color);
            }
            (UnoPhase::SwapTarget, UnoMove::SwapWith { seat }) if seat >= 1 => {
                let me = self.current;
                let other = seat - 1;
                if other != me && other < self.hands.len() {
                    self.hands.swap(me, other);
                    self.finish_play(me);
                }
            }
            (UnoPhase::JumpInWindow { .. }, UnoMove::JumpIn { index }) => {
                self.jump_in(self.current, index);
            }
            (UnoPhase::JumpInWindow { mut offers }, UnoMove::PassJumpIn) => {
                offers.remove(0);
                match offers.first() {
                    Some(&next) => {
                        self.current = next;
                        self.phase = UnoPhase::JumpInWindow { offers };
                    }
                    None => {
                        let holder = self.turn_holder;
                        self.phase = UnoPhase::Play;
                        self.advance_turn(holder);
                    }
                }
            }
            _ => {}
        }
    }

    fn is_terminal(&self) -> bool {
        self.winner.is_some()
    }

    fn get_winner(&self) -> Option<i32> {
        self.winner.map(|s| s as i32 + 1)
    }

    fn get_current_player(&self) -> i32 {
        self.current as i32 + 1
    }
}

impl UnoGame {
    /// Deals a new game: seven cards per seat and a starter flip.
    ///
    /// A flipped Wild Draw Four is buried and re-flipped. Other action
    /// starters apply to the opening seat: Skip skips it, Draw Two makes
    /// it draw and skips it, Reverse hands the lead to the dealer (the
    /// last seat) with play running backwards, and a Wild leaves the
    /// opening seat a free color choice.
    ///
    /// # Arguments
    /// * `players` - Seats, clamped to 2-10
    /// * `rules` - House rule switches
    /// * `seed` - Shuffle seed
    pub fn new(players: usize, rules: HouseRules, seed: u64) -> Self {
        let players = players.clamp(2, 10);
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);
        let mut deck = full_deck();
        deck.shuffle(&mut rng);

        let mut hands = vec![Vec::with_capacity(7); players];
        for _ in 0..7 {
            for hand in hands.iter_mut() {
                hand.push(deck.pop().expect("108 cards cover any deal"));
            }
        }

        // Flip the starter, burying Wild Draw Fours.
        let starter = loop {
            let card = deck.pop().expect("deck cannot run out flipping starters");
            if card.face == UnoFace::WildDrawFour {
                deck.insert(0, card);
            } else {
                break card;
            }
        };

        let mut game = UnoGame {
            hands,
            deck,
            discard: vec![starter],
            active_color: starter.color,
            current: 0,
            turn_holder: 0,
            direction: 1,
            pending_draw: 0,
            pending_wild: false,
            color_before_wild: None,
            culprit: 0,
            skip_next: false,
            phase: UnoPhase::Play,
            rules,
            winner: None,
            rng,
        };

        match starter.face {
            UnoFace::Skip => {
                game.current = game.seat_after(0);
            }
            UnoFace::DrawTwo => {
                game.draw_many(0, 2);
                game.current = game.seat_after(0);
            }
            UnoFace::Reverse => {
                game.direction = -1;
                game.current = players - 1;
            }
            _ => {}
        }
        game.turn_holder = game.current;
        game
    }

    /// The discard pile's top card.
    pub fn top_card(&self) -> &UnoCard {
        self.discard.last().expect("discard always holds the starter")
    }

    /// The color that must be matched, `None` while a wild starter
    /// leaves the choice open.
    pub fn active_color(&self) -> Option<UnoColor> {
        self.active_color
    }

    /// Cards owed to the current penalty victim.
    pub fn pending_draw(&self) -> u8 {
        self.pending_draw
    }

    /// Hand sizes by seat.
    pub fn hand_sizes(&self) -> Vec<usize> {
        self.hands.iter().map(|h| h.len()).collect()
    }

    /// The acting seat's hand.
    pub fn current_hand(&self) -> &[UnoCard] {
        &self.hands[self.current]
    }

    /// The configured house rules.
    pub fn rules(&self) -> HouseRules {
        self.rules
    }

    /// Points the winning seat collects from the cards left in the
    /// other hands. Zero while the game is running.
    pub fn winning_score(&self) -> u32 {
        match self.winner {
            Some(winner) => self
                .hands
                .iter()
                .enumerate()
                .filter(|(seat, _)| *seat != winner)
                .flat_map(|(_, hand)| hand.iter())
                .map(|card| card.points())
                .sum(),
            None => 0,
        }
    }

    /// Picks a move for the bot.
    ///
    /// Penalties are stacked when possible and accepted otherwise;
    /// matching action cards go first, then high numbers, then plain
    /// wilds, keeping Wild Draw Four for last. Wild declarations take
    /// the majority color of the rest of the hand. Challenges are only
    /// raised from a desperate position (seven or more cards in hand).
    pub fn suggest_move(&self) -> Option<UnoMove> {
        if self.winner.is_some() {
            return None;
        }
        let hand = &self.hands[self.current];
        match &self.phase {
            UnoPhase::Play if self.pending_draw > 0 => {
                if self.rules.stacking {
                    if let Some(i) = hand.iter().position(|c| c.face == UnoFace::DrawTwo) {
                        return Some(UnoMove::Play {
                            index: i,
                            color: None,
                        });
                    }
                }
                Some(UnoMove::AcceptPenalty)
            }
            UnoPhase::Play => {
                let mut best: Option<(u32, usize)> = None;
                let mut wild: Option<usize> = None;
                let mut wild_four: Option<usize> = None;
                for (i, card) in hand.iter().enumerate() {
                    if !self.is_playable(card) {
                        continue;
                    }
                    match card.face {
                        UnoFace::Wild => wild = wild.or(Some(i)),
                        UnoFace::WildDrawFour => wild_four = wild_four.or(Some(i)),
                        UnoFace::Skip | UnoFace::Reverse | UnoFace::DrawTwo => {
                            if best.map_or(true, |(v, _)| 20 > v) {
                                best = Some((20, i));
                            }
                        }
                        UnoFace::Number(n) => {
                            if best.map_or(true, |(v, _)| u32::from(n) > v) {
                                best = Some((u32::from(n), i));
                            }
                        }
                    }
                }
                if let Some((_, i)) = best {
                    return Some(UnoMove::Play {
                        index: i,
                        color: None,
                    });
                }
                if let Some(i) = wild {
                    return Some(UnoMove::Play {
                        index: i,
                        color: Some(self.majority_color()),
                    });
                }
                if let Some(i) = wild_four {
                    return Some(UnoMove::Play {
                        index: i,
                        color: Some(self.majority_color()),
                    });
                }
                Some(UnoMove::Draw)
            }
            UnoPhase::DrawnDecision { index } => {
                let color = if hand[*index].is_wild() {
                    Some(self.majority_color())
                } else {
                    None
                };
                Some(UnoMove::PlayDrawn { color })
            }
            UnoPhase::Challenge => {
                if self.rules.stacking {
                    if let Some(i) = hand.iter().position(|c| c.face == UnoFace::WildDrawFour) {
                        return Some(UnoMove::Play {
                            index: i,
                            color: Some(self.majority_color()),
                        });
                    }
                }
                if hand.len() >= 7 {
                    Some(UnoMove::Challenge)
                } else {
                    Some(UnoMove::NoChallenge)
                }
            }
            UnoPhase::SwapTarget => {
                let me = self.current;
                (0..self.hands.len())
                    .filter(|&s| s != me)
                    .min_by_key(|&s| self.hands[s].len())
                    .map(|s| UnoMove::SwapWith { seat: s + 1 })
            }
            UnoPhase::JumpInWindow { .. } => {
                let top = *self.top_card();
                hand.iter()
                    .position(|c| c.color == top.color && c.face == top.face)
                    .map(|index| UnoMove::JumpIn { index })
                    .or(Some(UnoMove::PassJumpIn))
            }
        }
    }

    /// Whether a card may be played on the current pile.
    fn is_playable(&self, card: &UnoCard) -> bool {
        if self.pending_draw > 0 {
            return self.rules.stacking
                && if self.pending_wild {
                    card.face == UnoFace::WildDrawFour
                } else {
                    card.face == UnoFace::DrawTwo
                };
        }
        if card.is_wild() {
            return true;
        }
        match self.active_color {
            None => true, // wild starter: first play is free
            Some(active) => card.color == Some(active) || card.face == self.top_card().face,
        }
    }

    fn play_from_hand(&mut self, seat: usize, index: usize, declared: Option<UnoColor>) {
        if index >= self.hands[seat].len() {
            return;
        }
        let previous_color = self.active_color;
        let card = self.hands[seat].remove(index);
        self.discard.push(card);
        self.active_color = if card.is_wild() {
            declared.or(Some(UnoColor::Red))
        } else {
            card.color
        };

        if self.hands[seat].is_empty() {
            self.winner = Some(seat);
            return;
        }

        match card.face {
            UnoFace::Skip => self.skip_next = true,
            UnoFace::Reverse => {
                self.direction = -self.direction;
                if self.hands.len() == 2 {
                    self.skip_next = true;
                }
            }
            UnoFace::DrawTwo => {
                self.pending_draw += 2;
                self.pending_wild = false;
            }
            UnoFace::WildDrawFour => {
                self.pending_draw += 4;
                self.pending_wild = true;
                self.culprit = seat;
                self.color_before_wild = previous_color;
            }
            UnoFace::Number(7) if self.rules.seven_zero => {
                self.phase = UnoPhase::SwapTarget;
                self.current = seat;
                self.turn_holder = seat;
                return;
            }
            UnoFace::Number(0) if self.rules.seven_zero => {
                self.rotate_hands();
            }
            _ => {}
        }

        self.finish_play(seat);
    }

    /// After a card's effects are on the books: open a jump-in window if
    /// the house rule allows, otherwise pass the turn along.
    fn finish_play(&mut self, seat: usize) {
        let card = *self.top_card();
        if self.rules.jump_in && !card.is_wild() && self.pending_draw == 0 {
            let mut offers = Vec::new();
            let mut probe = self.seat_after(seat);
            while probe != seat {
                if self.hands[probe]
                    .iter()
                    .any(|c| c.color == card.color && c.face == card.face)
                {
                    offers.push(probe);
                }
                probe = self.seat_after(probe);
            }
            if !offers.is_empty() {
                self.turn_holder = seat;
                self.current = offers[0];
                self.phase = UnoPhase::JumpInWindow { offers };
                return;
            }
        }
        self.advance_turn(seat);
    }

    /// An out-of-turn play of a card identical to the top one. The turn
    /// order re-anchors at the jumper and the card's effect applies anew.
    fn jump_in(&mut self, seat: usize, index: usize) {
        let top = *self.top_card();
        let matches = self
            .hands[seat]
            .get(index)
            .map(|c| c.color == top.color && c.face == top.face)
            .unwrap_or(false);
        if !matches {
            return;
        }
        // The interrupted play's skip is superseded by the jumper's copy.
        self.skip_next = false;
        self.turn_holder = seat;
        self.play_from_hand(seat, index, None);
    }

    fn advance_turn(&mut self, from: usize) {
        let mut next = self.seat_after(from);
        if self.skip_next {
            self.skip_next = false;
            next = self.seat_after(next);
        }
        self.current = next;
        self.turn_holder = next;
        self.phase = if self.pending_draw > 0 && self.pending_wild {
            UnoPhase::Challenge
        } else {
            UnoPhase::Play
        };
    }

    fn seat_after(&self, seat: usize) -> usize {
        let n = self.hands.len() as i32;
        ((seat as i32 + self.direction as i32).rem_euclid(n)) as usize
    }

    /// Whether the last Wild Draw Four was played while holding a card
    /// of the then-active color. A wild starter leaves every colored
    /// card "matching", so any colored holding counts as a bluff.
    fn culprit_bluffed(&self) -> bool {
        let hand = &self.hands[self.culprit];
        match self.color_before_wild {
            Some(color) => hand.iter().any(|c| c.color == Some(color)),
            None => hand.iter().any(|c| c.color.is_some()),
        }
    }

    fn draw_one(&mut self, seat: usize) -> Option<usize> {
        if self.deck.is_empty() {
            self.refill_deck();
        }
        let card = self.deck.pop()?;
        self.hands[seat].push(card);
        Some(self.hands[seat].len() - 1)
    }

    /// Draws up to `count` cards; silently short when both piles are dry.
    fn draw_many(&mut self, seat: usize, count: usize) {
        for _ in 0..count {
            if self.draw_one(seat).is_none() {
                break;
            }
        }
    }

    /// Shuffles everything under the discard top back into the deck.
    fn refill_deck(&mut self) {
        if self.discard.len() <= 1 {
            return;
        }
        let top = self.discard.pop().expect("discard checked non-empty");
        self.deck.append(&mut self.discard);
        self.discard.push(top);
        let rng = &mut self.rng;
        self.deck.shuffle(rng);
    }

    /// Every hand moves one seat along the direction of play.
    fn rotate_hands(&mut self) {
        if self.direction == 1 {
            self.hands.rotate_right(1);
        } else {
            self.hands.rotate_left(1);
        }
    }

    /// The color the bot declares on a wild: its most common held color.
    fn majority_color(&self) -> UnoColor {
        let hand = &self.hands[self.current];
        let mut counts = [0usize; 4];
        for card in hand {
            if let Some(color) = card.color {
                let slot = UnoColor::ALL
                    .iter()
                    .position(|&c| c == color)
                    .expect("listed color");
                counts[slot] += 1;
            }
        }
        let mut best = 0usize;
        for i in 1..4 {
            if counts[i] > counts[best] {
                best = i;
            }
        }
        UnoColor::ALL[best]
    }
}

/// The standard 108-card deck, unshuffled.
pub fn full_deck() -> Vec<UnoCard> {
    let mut deck = Vec::with_capacity(108);
    for color in UnoColor::ALL {
        deck.push(UnoCard::colored(color, UnoFace::Number(0)));
        for n in 1..=9 {
            deck.push(UnoCard::colored(color, UnoFace::Number(n)));
            deck.push(UnoCard::colored(color, UnoFace::Number(n)));
        }
        for _ in 0..2 {
            deck.push(UnoCard::colored(color, UnoFace::Skip));
            deck.push(UnoCard::colored(color, UnoFace::Reverse));
            deck.push(UnoCard::colored(color, UnoFace::DrawTwo));
        }
    }
    for _ in 0..4 {
        deck.push(UnoCard::wild(UnoFace::Wild));
        deck.push(UnoCard::wild(UnoFace::WildDrawFour));
    }
    deck
}

impl fmt::Display for UnoColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl FromStr for UnoColor {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "r" | "red" => Ok(UnoColor::Red),
            "y" | "yellow" => Ok(UnoColor::Yellow),
            "g" | "green" => Ok(UnoColor::Green),
            "b" | "blue" => Ok(UnoColor::Blue),
            other => Err(format!("Unknown color '{}'", other)),
        }
    }
}

impl fmt::Display for UnoCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.color, self.face) {
            (Some(c), UnoFace::Number(n)) => write!(f, "{} {}", c, n),
            (Some(c), UnoFace::Skip) => write!(f, "{} skip", c),
            (Some(c), UnoFace::Reverse) => write!(f, "{} reverse", c),
            (Some(c), UnoFace::DrawTwo) => write!(f, "{} +2", c),
            (_, UnoFace::Wild) => write!(f, "wild"),
            (_, UnoFace::WildDrawFour) => write!(f, "wild +4"),
            (None, face) => write!(f, "{:?}", face),
        }
    }
}

impl fmt::Display for UnoGame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let color = match self.active_color {
            Some(c) => c.name().to_string(),
            None => "any".to_string(),
        };
        writeln!(
            f,
            "top: {}  (active color: {}, direction: {})",
            self.top_card(),
            color,
            if self.direction == 1 { ">>" } else { "<<" }
        )?;
        if self.pending_draw > 0 {
            writeln!(f, "pending penalty: +{}", self.pending_draw)?;
        }
        for (seat, hand) in self.hands.iter().enumerate() {
            let marker = if seat == self.current { ">" } else { " " };
            writeln!(f, "{} seat {}: {} cards", marker, seat + 1, hand.len())?;
        }
        match &self.phase {
            UnoPhase::Challenge => {
                writeln!(f, "seat {} may challenge the wild +4", self.current + 1)?
            }
            UnoPhase::SwapTarget => {
                writeln!(f, "seat {} picks a hand to swap with", self.current + 1)?
            }
            UnoPhase::JumpInWindow { .. } => {
                writeln!(f, "seat {} may jump in on the {}", self.current + 1, self.top_card())?
            }
            _ => {}
        }
        write!(f, "hand:")?;
        for (i, card) in self.hands[self.current].iter().enumerate() {
            write!(f, "  [{}] {}", i, card)?;
        }
        writeln!(f)
    }
}

impl fmt::Display for UnoMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnoMove::Play { index, color: None } => write!(f, "p{}", index),
            UnoMove::Play {
                index,
                color: Some(c),
            } => write!(f, "p{} {}", index, c),
            UnoMove::Draw => write!(f, "d"),
            UnoMove::PlayDrawn { color: None } => write!(f, "pd"),
            UnoMove::PlayDrawn { color: Some(c) } => write!(f, "pd {}", c),
            UnoMove::KeepDrawn => write!(f, "k"),
            UnoMove::AcceptPenalty => write!(f, "a"),
            UnoMove::Challenge => write!(f, "c"),
            UnoMove::NoChallenge => write!(f, "n"),
            UnoMove::SwapWith { seat } => write!(f, "s{}", seat),
            UnoMove::JumpIn { index } => write!(f, "j{}", index),
            UnoMove::PassJumpIn => write!(f, "pass"),
        }
    }
}

impl FromStr for UnoMove {
    type Err = String;

    /// Parses the compact move language used at the prompt:
    /// `p3` / `p3 red` play, `d` draw, `pd` / `pd blue` play the drawn
    /// card, `k` keep it, `a` accept a penalty, `c` / `n` challenge or
    /// not, `s2` swap with seat 2, `j1` jump in with card 1, `pass`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let head = match parts.first() {
            Some(h) => h.to_lowercase(),
            None => return Err("Empty move".to_string()),
        };
        let color = match parts.get(1) {
            Some(c) => Some(c.parse::<UnoColor>()?),
            None => None,
        };
        let split_index = |head: &str, tag: &str| -> Result<usize, String> {
            head[tag.len()..]
                .parse::<usize>()
                .map_err(|_| format!("'{}' needs a number, e.g. {}3", tag, tag))
        };

        match head.as_str() {
            "d" | "draw" => Ok(UnoMove::Draw),
            "pd" => Ok(UnoMove::PlayDrawn { color }),
            "k" | "keep" => Ok(UnoMove::KeepDrawn),
            "a" | "accept" => Ok(UnoMove::AcceptPenalty),
            "c" | "challenge" => Ok(UnoMove::Challenge),
            "n" | "no" => Ok(UnoMove::NoChallenge),
            "pass" => Ok(UnoMove::PassJumpIn),
            h if h.starts_with('p') && h.len() > 1 && h[1..].chars().all(|c| c.is_ascii_digit()) => {
                Ok(UnoMove::Play {
                    index: split_index(h, "p")?,
                    color,
                })
            }
            h if h.starts_with('s') && h.len() > 1 => Ok(UnoMove::SwapWith {
                seat: split_index(h, "s")?,
            }),
            h if h.starts_with('j') && h.len() > 1 => Ok(UnoMove::JumpIn {
                index: split_index(h, "j")?,
            }),
            other => Err(format!("Unknown move '{}'", other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn red(n: u8) -> UnoCard {
        UnoCard::colored(UnoColor::Red, UnoFace::Number(n))
    }

    fn blue(n: u8) -> UnoCard {
        UnoCard::colored(UnoColor::Blue, UnoFace::Number(n))
    }

    fn green(n: u8) -> UnoCard {
        UnoCard::colored(UnoColor::Green, UnoFace::Number(n))
    }

    fn card(color: UnoColor, face: UnoFace) -> UnoCard {
        UnoCard::colored(color, face)
    }

    /// A bare fixture with explicit hands, deck and starter.
    fn fixture(hands: Vec<Vec<UnoCard>>, deck: Vec<UnoCard>, starter: UnoCard, rules: HouseRules) -> UnoGame {
        UnoGame {
            active_color: starter.color,
            hands,
            deck,
            discard: vec![starter],
            current: 0,
            turn_holder: 0,
            direction: 1,
            pending_draw: 0,
            pending_wild: false,
            color_before_wild: None,
            culprit: 0,
            skip_next: false,
            phase: UnoPhase::Play,
            rules,
            winner: None,
            rng: Xoshiro256StarStar::seed_from_u64(0),
        }
    }

    #[test]
    fn test_full_deck_composition() {
        let deck = full_deck();
        assert_eq!(deck.len(), 108);
        let wilds = deck.iter().filter(|c| c.face == UnoFace::Wild).count();
        let wild_fours = deck.iter().filter(|c| c.face == UnoFace::WildDrawFour).count();
        let zeros = deck
            .iter()
            .filter(|c| c.face == UnoFace::Number(0))
            .count();
        let red_fives = deck
            .iter()
            .filter(|c| **c == red(5))
            .count();
        assert_eq!(wilds, 4);
        assert_eq!(wild_fours, 4);
        assert_eq!(zeros, 4);
        assert_eq!(red_fives, 2);
    }

    #[test]
    fn test_new_game_deal() {
        let game = UnoGame::new(3, HouseRules::default(), 1);
        assert_eq!(game.get_num_players(), 3);
        assert_ne!(game.top_card().face, UnoFace::WildDrawFour);
        let dealt: usize = game.hand_sizes().iter().sum();
        let accounted = dealt + game.deck.len() + game.discard.len();
        assert_eq!(accounted, 108);
        assert!(game.hand_sizes().iter().all(|&n| n >= 7));
    }

    #[test]
    fn test_color_and_face_matching() {
        let game = fixture(
            vec![
                vec![red(3), blue(5), blue(7), UnoCard::wild(UnoFace::Wild)],
                vec![green(1)],
            ],
            vec![green(9)],
            red(7),
            HouseRules::default(),
        );
        let moves = game.get_possible_moves();
        // red 3 matches color, blue 7 matches face, wild always works;
        // blue 5 matches nothing.
        assert!(moves.contains(&UnoMove::Play { index: 0, color: None }));
        assert!(!moves.contains(&UnoMove::Play { index: 1, color: None }));
        assert!(moves.contains(&UnoMove::Play { index: 2, color: None }));
        assert!(moves.contains(&UnoMove::Play {
            index: 3,
            color: Some(UnoColor::Blue)
        }));
        assert!(moves.contains(&UnoMove::Draw));
    }

    #[test]
    fn test_play_advances_turn_and_sets_color() {
        let mut game = fixture(
            vec![vec![blue(7), red(1)], vec![green(2)], vec![green(3)]],
            vec![green(9)],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        assert_eq!(game.active_color(), Some(UnoColor::Blue));
        assert_eq!(game.get_current_player(), 2);
        assert_eq!(game.top_card(), &blue(7));
    }

    #[test]
    fn test_skip_and_reverse() {
        let mut game = fixture(
            vec![
                vec![card(UnoColor::Red, UnoFace::Skip), red(1)],
                vec![green(2); 2],
                vec![green(3); 2],
            ],
            vec![green(9)],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        assert_eq!(game.get_current_player(), 3, "skip jumps seat 2");

        let mut game = fixture(
            vec![
                vec![card(UnoColor::Red, UnoFace::Reverse), red(1)],
                vec![green(2); 2],
                vec![green(3); 2],
            ],
            vec![green(9)],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        assert_eq!(game.get_current_player(), 3, "reverse walks backwards");
    }

    #[test]
    fn test_reverse_two_player_acts_as_skip() {
        let mut game = fixture(
            vec![
                vec![card(UnoColor::Red, UnoFace::Reverse), red(1)],
                vec![green(2); 2],
            ],
            vec![green(9)],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        assert_eq!(
            game.get_current_player(),
            1,
            "with two seats a reverse gives the player another turn"
        );
    }

    #[test]
    fn test_draw_two_without_stacking() {
        let mut game = fixture(
            vec![
                vec![card(UnoColor::Red, UnoFace::DrawTwo), red(1)],
                vec![card(UnoColor::Green, UnoFace::DrawTwo), green(2)],
                vec![green(3); 2],
            ],
            vec![green(9), blue(1), blue(2), blue(3)],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        assert_eq!(game.pending_draw(), 2);
        assert_eq!(game.get_current_player(), 2);
        // Without stacking the victim's only option is to take the cards.
        assert_eq!(game.get_possible_moves(), vec![UnoMove::AcceptPenalty]);
        game.make_move(&UnoMove::AcceptPenalty);
        assert_eq!(game.hand_sizes()[1], 4);
        assert_eq!(game.pending_draw(), 0);
        assert_eq!(game.get_current_player(), 3, "victim loses their turn");
    }

    #[test]
    fn test_draw_two_stacking() {
        let rules = HouseRules {
            stacking: true,
            ..Default::default()
        };
        let mut game = fixture(
            vec![
                vec![card(UnoColor::Red, UnoFace::DrawTwo), red(1)],
                vec![card(UnoColor::Green, UnoFace::DrawTwo), green(2)],
                vec![green(3); 2],
            ],
            vec![green(9), blue(1), blue(2), blue(3), blue(4)],
            red(7),
            rules,
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        let moves = game.get_possible_moves();
        assert!(moves.contains(&UnoMove::Play { index: 0, color: None }));
        game.make_move(&UnoMove::Play { index: 0, color: None });
        assert_eq!(game.pending_draw(), 4, "stack grew to four");
        assert_eq!(game.get_current_player(), 3);
        game.make_move(&UnoMove::AcceptPenalty);
        assert_eq!(game.hand_sizes()[2], 6);
        assert_eq!(game.get_current_player(), 1);
    }

    #[test]
    fn test_wild_draw_four_challenge_catches_bluff() {
        let mut game = fixture(
            vec![
                // Seat 1 holds a red card, so a +4 on red is a bluff.
                vec![UnoCard::wild(UnoFace::WildDrawFour), red(1)],
                vec![green(2); 2],
            ],
            vec![green(9), blue(1), blue(2), blue(3), blue(4)],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Play {
            index: 0,
            color: Some(UnoColor::Blue),
        });
        assert_eq!(game.get_current_player(), 2);
        game.make_move(&UnoMove::Challenge);
        // The bluffer draws the four; the victim keeps the turn.
        assert_eq!(game.hand_sizes()[0], 5);
        assert_eq!(game.hand_sizes()[1], 2);
        assert_eq!(game.pending_draw(), 0);
        assert_eq!(game.get_current_player(), 2);
        assert_eq!(game.active_color(), Some(UnoColor::Blue));
    }

    #[test]
    fn test_wild_draw_four_challenge_fails_when_clean() {
        let mut game = fixture(
            vec![
                // No red in hand beside the wild: the +4 was legitimate.
                vec![UnoCard::wild(UnoFace::WildDrawFour), blue(1)],
                vec![green(2); 2],
                vec![green(3); 2],
            ],
            vec![green(9), blue(1), blue(2), blue(3), blue(4), blue(5), blue(6)],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Play {
            index: 0,
            color: Some(UnoColor::Green),
        });
        game.make_move(&UnoMove::Challenge);
        // The victim draws four plus two and is skipped.
        assert_eq!(game.hand_sizes()[1], 8);
        assert_eq!(game.get_current_player(), 3);
    }

    #[test]
    fn test_wild_draw_four_accepted() {
        let mut game = fixture(
            vec![
                vec![UnoCard::wild(UnoFace::WildDrawFour), blue(1)],
                vec![green(2); 2],
                vec![green(3); 2],
            ],
            vec![green(9), blue(1), blue(2), blue(3), blue(4)],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Play {
            index: 0,
            color: Some(UnoColor::Green),
        });
        game.make_move(&UnoMove::NoChallenge);
        assert_eq!(game.hand_sizes()[1], 6);
        assert_eq!(game.get_current_player(), 3);
        assert_eq!(game.active_color(), Some(UnoColor::Green));
    }

    #[test]
    fn test_seven_swaps_hands() {
        let rules = HouseRules {
            seven_zero: true,
            ..Default::default()
        };
        let mut game = fixture(
            vec![
                vec![red(7), red(1), red(2)],
                vec![green(2)],
                vec![green(3), green(4)],
            ],
            vec![green(9)],
            red(5),
            rules,
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        // The engine now wants a swap target.
        let moves = game.get_possible_moves();
        assert!(moves.contains(&UnoMove::SwapWith { seat: 2 }));
        assert!(moves.contains(&UnoMove::SwapWith { seat: 3 }));
        game.make_move(&UnoMove::SwapWith { seat: 2 });
        assert_eq!(game.hand_sizes(), vec![1, 2, 2]);
        assert_eq!(game.get_current_player(), 2);
    }

    #[test]
    fn test_zero_rotates_hands() {
        let rules = HouseRules {
            seven_zero: true,
            ..Default::default()
        };
        let mut game = fixture(
            vec![
                vec![red(0), red(1)],
                vec![green(2)],
                vec![green(3), green(4), green(5)],
            ],
            vec![green(9)],
            red(5),
            rules,
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        // Seat 1's leftover single card moved to seat 2, seat 3's three
        // cards came home to seat 1, and so on around the table.
        assert_eq!(game.hand_sizes(), vec![3, 1, 1]);
        assert_eq!(game.get_current_player(), 2);
    }

    #[test]
    fn test_going_out_with_seven_wins_without_swap() {
        let rules = HouseRules {
            seven_zero: true,
            ..Default::default()
        };
        let mut game = fixture(
            vec![vec![red(7)], vec![green(2)], vec![green(3)]],
            vec![green(9)],
            red(5),
            rules,
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        assert_eq!(game.get_winner(), Some(1));
        assert!(game.is_terminal());
    }

    #[test]
    fn test_jump_in_window_and_reanchor() {
        let rules = HouseRules {
            jump_in: true,
            ..Default::default()
        };
        let mut game = fixture(
            vec![
                vec![red(5), red(1)],
                vec![green(2); 2],
                // Seat 3 holds the identical red 5.
                vec![red(5), green(3)],
                vec![green(4); 2],
            ],
            vec![green(9)],
            red(7),
            rules,
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        // The window offers seat 3 (the only holder of the twin).
        assert_eq!(game.get_current_player(), 3);
        assert!(game
            .get_possible_moves()
            .contains(&UnoMove::JumpIn { index: 0 }));
        game.make_move(&UnoMove::JumpIn { index: 0 });
        // Play re-anchors at seat 3; next up is seat 4.
        assert_eq!(game.get_current_player(), 4);
        assert_eq!(game.hand_sizes(), vec![1, 2, 1, 2]);
    }

    #[test]
    fn test_jump_in_pass_returns_to_order() {
        let rules = HouseRules {
            jump_in: true,
            ..Default::default()
        };
        let mut game = fixture(
            vec![
                vec![red(5), red(1)],
                vec![green(2); 2],
                vec![red(5), green(3)],
            ],
            vec![green(9)],
            red(7),
            rules,
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        assert_eq!(game.get_current_player(), 3);
        game.make_move(&UnoMove::PassJumpIn);
        // Nobody jumped: the turn passes normally to seat 2.
        assert_eq!(game.get_current_player(), 2);
    }

    #[test]
    fn test_no_jump_in_window_on_penalty_cards() {
        let rules = HouseRules {
            jump_in: true,
            ..Default::default()
        };
        let mut game = fixture(
            vec![
                vec![card(UnoColor::Red, UnoFace::DrawTwo), red(1)],
                vec![card(UnoColor::Red, UnoFace::DrawTwo), green(2)],
                vec![green(3); 2],
            ],
            vec![green(9), blue(1), blue(2)],
            red(7),
            rules,
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        // Straight to the victim; no window even though seat 2 holds
        // the identical +2.
        assert_eq!(game.get_current_player(), 2);
        assert_eq!(game.get_possible_moves(), vec![UnoMove::AcceptPenalty]);
    }

    #[test]
    fn test_draw_then_play_or_keep() {
        let mut game = fixture(
            vec![vec![blue(5), blue(6)], vec![green(2)]],
            vec![red(9)], // the card that will be drawn
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Draw);
        // The drawn red 9 is playable on red 7: the seat decides.
        let moves = game.get_possible_moves();
        assert!(moves.contains(&UnoMove::PlayDrawn { color: None }));
        assert!(moves.contains(&UnoMove::KeepDrawn));
        game.make_move(&UnoMove::PlayDrawn { color: None });
        assert_eq!(game.top_card(), &red(9));
        assert_eq!(game.get_current_player(), 2);
        assert_eq!(game.hand_sizes()[0], 2);
    }

    #[test]
    fn test_unplayable_draw_passes_turn() {
        let mut game = fixture(
            vec![vec![blue(5)], vec![green(2)]],
            vec![blue(9)], // not playable on red 7
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Draw);
        assert_eq!(game.get_current_player(), 2);
        assert_eq!(game.hand_sizes()[0], 2);
    }

    #[test]
    fn test_deck_refill_from_discard() {
        let mut game = fixture(
            vec![vec![blue(5)], vec![green(2)]],
            vec![], // deck is dry
            red(7),
            HouseRules::default(),
        );
        game.discard = vec![red(7), green(9), green(8)]; // top is green 8
        game.active_color = Some(UnoColor::Green);
        game.make_move(&UnoMove::Draw);
        // The two buried cards were reshuffled; one was drawn.
        assert_eq!(game.hand_sizes()[0], 2);
        assert_eq!(game.deck.len(), 1);
        assert_eq!(game.discard.len(), 1);
        assert_eq!(game.top_card(), &green(8));
    }

    #[test]
    fn test_exhausted_piles_short_draw() {
        let mut game = fixture(
            vec![vec![blue(5)], vec![green(2)]],
            vec![],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Draw);
        // Nothing to draw anywhere: the turn simply passes.
        assert_eq!(game.hand_sizes()[0], 1);
        assert_eq!(game.get_current_player(), 2);
    }

    #[test]
    fn test_win_and_score() {
        let mut game = fixture(
            vec![
                vec![red(9)],
                vec![green(2), card(UnoColor::Green, UnoFace::Skip)],
                vec![UnoCard::wild(UnoFace::Wild)],
            ],
            vec![green(9)],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Play { index: 0, color: None });
        assert_eq!(game.get_winner(), Some(1));
        assert!(game.is_terminal());
        assert!(game.get_possible_moves().is_empty());
        // 2 + 20 + 50
        assert_eq!(game.winning_score(), 72);
    }

    #[test]
    fn test_wild_sets_declared_color() {
        let mut game = fixture(
            vec![vec![UnoCard::wild(UnoFace::Wild), red(1)], vec![green(2)]],
            vec![green(9)],
            red(7),
            HouseRules::default(),
        );
        game.make_move(&UnoMove::Play {
            index: 0,
            color: Some(UnoColor::Green),
        });
        assert_eq!(game.active_color(), Some(UnoColor::Green));
    }

    #[test]
    fn test_bot_plays_full_game() {
        for seed in [3, 14, 159] {
            let rules = HouseRules {
                stacking: true,
                jump_in: true,
                seven_zero: true,
            };
            let mut game = UnoGame::new(4, rules, seed);
            let mut guard = 0;
            while !game.is_terminal() && guard < 3000 {
                let mv = game.suggest_move().expect("bot always has a move");
                assert!(
                    game.is_legal(&mv),
                    "bot move {:?} must be legal in phase {:?}",
                    mv,
                    game.phase
                );
                game.make_move(&mv);
                guard += 1;
            }
            assert!(game.is_terminal(), "seed {} game did not finish", seed);
            assert!(game.get_winner().is_some());
        }
    }

    #[test]
    fn test_move_parsing() {
        assert_eq!(
            UnoMove::from_str("p3"),
            Ok(UnoMove::Play {
                index: 3,
                color: None
            })
        );
        assert_eq!(
            UnoMove::from_str("p0 green"),
            Ok(UnoMove::Play {
                index: 0,
                color: Some(UnoColor::Green)
            })
        );
        assert_eq!(UnoMove::from_str("d"), Ok(UnoMove::Draw));
        assert_eq!(
            UnoMove::from_str("pd b"),
            Ok(UnoMove::PlayDrawn {
                color: Some(UnoColor::Blue)
            })
        );
        assert_eq!(UnoMove::from_str("k"), Ok(UnoMove::KeepDrawn));
        assert_eq!(UnoMove::from_str("a"), Ok(UnoMove::AcceptPenalty));
        assert_eq!(UnoMove::from_str("c"), Ok(UnoMove::Challenge));
        assert_eq!(UnoMove::from_str("s2"), Ok(UnoMove::SwapWith { seat: 2 }));
        assert_eq!(UnoMove::from_str("j1"), Ok(UnoMove::JumpIn { index: 1 }));
        assert_eq!(UnoMove::from_str("pass"), Ok(UnoMove::PassJumpIn));
        assert!(UnoMove::from_str("p").is_err());
        assert!(UnoMove::from_str("p3 magenta").is_err());
        assert!(UnoMove::from_str("flip").is_err());
    }
}
