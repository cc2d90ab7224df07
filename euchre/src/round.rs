use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

use crate::{
    deal, shuffle_deck, standard_deck, Card, IllegalPlay, Seat, SeatEntry, Suit, Trick,
    TrickNotComplete, TrickSummary, SEATS,
};

/// The trump declaration for one round.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    pub trump: Suit,
    /// The seat that named trump.
    pub caller: Seat,
    /// Whether the caller plays without their partner.
    pub alone: bool,
}

impl Contract {
    /// The seat sitting out this round: the caller's partner, iff the caller
    /// went alone.
    pub fn out_seat(self) -> Option<Seat> {
        self.alone.then(|| self.caller.partner())
    }
}

/// Whether trump has been declared yet this round.
///
/// Ranking, play validation and trick resolution are only defined once a
/// contract exists, so "no trump yet" is a distinct state rather than a
/// nullable field.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractState {
    /// The kitty card is face up and the table is still bidding.
    Bidding,
    Declared(Contract),
}

/// One deal: four hands, a kitty card, and five tricks played under a single
/// trump declaration.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    hands: [Vec<Card>; 4],
    kitty: Card,
    dealer: Seat,
    contract: ContractState,
    trick_counter: u8,
    current_trick: Trick,
    tricks_won: [u8; 2],
}

impl Round {
    /// Shuffles a fresh deck and deals a new round.
    pub fn new(dealer: Seat, rng: &mut StdRng) -> Self {
        let mut deck = standard_deck();
        shuffle_deck(&mut deck, rng);
        let (hands, kitty) = deal(deck);
        Round {
            hands,
            kitty,
            dealer,
            contract: ContractState::Bidding,
            trick_counter: 0,
            current_trick: Trick::new(None),
            tricks_won: [0, 0],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(hands: [Vec<Card>; 4], kitty: Card, dealer: Seat) -> Self {
        Round {
            hands,
            kitty,
            dealer,
            contract: ContractState::Bidding,
            trick_counter: 0,
            current_trick: Trick::new(None),
            tricks_won: [0, 0],
        }
    }

    pub fn hand(&self, seat: Seat) -> &[Card] {
        &self.hands[seat.index()]
    }

    pub fn kitty(&self) -> Card {
        self.kitty
    }

    pub fn dealer(&self) -> Seat {
        self.dealer
    }

    pub fn contract(&self) -> ContractState {
        self.contract
    }

    /// The seat sitting out this round, if the caller went alone.
    pub fn out_seat(&self) -> Option<Seat> {
        match self.contract {
            ContractState::Declared(contract) => contract.out_seat(),
            ContractState::Bidding => None,
        }
    }

    /// Number of completed tricks so far (0..=5).
    pub fn trick_counter(&self) -> u8 {
        self.trick_counter
    }

    pub fn current_trick(&self) -> &Trick {
        &self.current_trick
    }

    /// Tricks won per team, indexed by [`Team::index`](crate::Team::index).
    pub fn tricks_won(&self) -> [u8; 2] {
        self.tricks_won
    }

    /// Records the trump decision for this round.
    ///
    /// The bidding flow itself (who is asked, in what order) is the caller's
    /// concern; the engine only records the outcome, once.
    pub fn declare_trump(
        &mut self,
        trump: Suit,
        caller: Seat,
        alone: bool,
    ) -> Result<(), IllegalPlay> {
        if let ContractState::Declared(contract) = self.contract {
            return Err(IllegalPlay::TrumpAlreadyDeclared {
                trump: contract.trump,
            });
        }
        let contract = Contract {
            trump,
            caller,
            alone,
        };
        self.contract = ContractState::Declared(contract);
        // No card has been played yet, so the out seat can still be marked
        // on the first trick.
        self.current_trick = Trick::new(contract.out_seat());
        Ok(())
    }

    /// Plays a card from a seat's hand into the current trick.
    ///
    /// The first card of a trick is always legal and becomes the led card.
    /// After that a seat must follow the led card's effective suit if it can;
    /// a seat void in that suit may play anything. All validation happens
    /// before any state is touched.
    pub fn play_card(&mut self, seat: Seat, card: Card) -> Result<(), IllegalPlay> {
        let ContractState::Declared(contract) = self.contract else {
            return Err(IllegalPlay::TrumpNotDeclared);
        };
        let trump = contract.trump;

        match self.current_trick.entry(seat) {
            SeatEntry::Out => return Err(IllegalPlay::SittingOut { seat }),
            SeatEntry::Played(_) => return Err(IllegalPlay::SeatAlreadyPlayed { seat }),
            SeatEntry::Pending => {}
        }

        let hand = &self.hands[seat.index()];
        let Some(pos) = hand.iter().position(|&c| c == card) else {
            return Err(IllegalPlay::CardNotInHand { card });
        };

        if let Some(led) = self.current_trick.led() {
            if !card.same_suit_as(led, trump) {
                let led_suit = led.effective_suit(trump);
                let holds_follow = hand.iter().any(|c| c.effective_suit(trump) == led_suit);
                if holds_follow {
                    return Err(IllegalPlay::MustFollowSuit { led: led_suit });
                }
            }
        }

        let card = self.hands[seat.index()].remove(pos);
        self.current_trick.record(seat, card);
        Ok(())
    }

    /// The cards [`play_card`](Self::play_card) would currently accept from
    /// this seat. Empty while bidding, for the out seat, and for a seat that
    /// has already played this trick.
    pub fn legal_plays(&self, seat: Seat) -> Vec<Card> {
        let ContractState::Declared(contract) = self.contract else {
            return Vec::new();
        };
        if !matches!(self.current_trick.entry(seat), SeatEntry::Pending) {
            return Vec::new();
        }
        let hand = &self.hands[seat.index()];
        if let Some(led) = self.current_trick.led() {
            let led_suit = led.effective_suit(contract.trump);
            let follows: Vec<Card> = hand
                .iter()
                .copied()
                .filter(|c| c.effective_suit(contract.trump) == led_suit)
                .collect();
            if !follows.is_empty() {
                return follows;
            }
        }
        hand.to_vec()
    }

    /// Resolves the winner of the current trick without mutating anything,
    /// so a caller can present the result before resetting the trick via
    /// [`score_trick`](Self::score_trick).
    pub fn trick_winner(&self) -> Result<Seat, TrickNotComplete> {
        match self.contract {
            ContractState::Declared(contract) => self.current_trick.winner(contract.trump),
            // Without trump, no card has legally been played
            ContractState::Bidding => Err(TrickNotComplete {
                waiting_on: SEATS.to_vec(),
            }),
        }
    }

    /// Credits a completed trick to the winner's team and resets trick state.
    pub fn score_trick(&mut self, winner: Seat) -> TrickSummary {
        debug_assert!(self.current_trick.is_complete());
        let team = winner.team();
        self.tricks_won[team.index()] += 1;
        self.current_trick = Trick::new(self.out_seat());
        self.trick_counter += 1;
        TrickSummary {
            winner,
            team,
            tricks_won: self.tricks_won,
        }
    }
}
