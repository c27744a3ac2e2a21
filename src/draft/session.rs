//! The draft session aggregate and its turn engine.
//!
//! ## State machine
//!
//! ```text
//!            pick_card (alternating seats)
//!              ┌──────┐
//!              ▼      │
//!          InProgress ─┘ ── finish_draft ──▶ Finished (terminal)
//!            │     ▲
//!  request_reset   │ decline_reset / accept_reset (host)
//!            ▼     │
//!         ResetRequested
//! ```
//!
//! Every transition borrows the current session and returns a new one, so a
//! rejected call leaves the caller's value untouched. History is an
//! `im::Vector`, which keeps those copies cheap.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::{debug, info};
use uuid::Uuid;

use super::history::{DraftHistory, Pick};
use crate::cards::{Card, CardCatalog, CardId};
use crate::core::{
    DraftRng, DraftSettings, FinishError, PickError, PlayerId, ResetError, Seat, SeatMap,
    SessionError,
};
use crate::pool::PoolResult;
use crate::rules::{can_finish, can_pick, PlayerCardStats};

/// A player's picked cards. Hands rarely exceed a dozen cards.
pub type Hand<'a> = SmallVec<[&'a Card; 16]>;

/// Unique identifier for a draft.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DraftId(pub Uuid);

impl DraftId {
    #[must_use]
    pub fn random() -> Self {
        Self(Uuid::new_v4())
    }
}

impl std::fmt::Display for DraftId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Draft({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DraftStatus {
    InProgress,
    ResetRequested,
    Finished,
}

/// Plain, serializable form of a session for host storage.
///
/// The current turn is not stored; it is derived from `first_turn` and the
/// number of picks when the snapshot is restored.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSnapshot {
    pub id: DraftId,
    pub player1_id: PlayerId,
    pub player2_id: PlayerId,
    pub pool: PoolResult,
    pub allowed_points: u32,
    pub status: DraftStatus,
    pub first_turn: Seat,
    pub history: DraftHistory,
    #[serde(default)]
    pub reset_requested_by: Option<Seat>,
    #[serde(default)]
    pub finished_by: Option<Seat>,
}

/// One two-player draft over a frozen pool.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DraftSession {
    id: DraftId,
    players: SeatMap<PlayerId>,
    pool: PoolResult,
    allowed_points: u32,
    status: DraftStatus,
    first_turn: Seat,
    current_turn: Seat,
    history: DraftHistory,
    reset_requested_by: Option<Seat>,
    finished_by: Option<Seat>,
}

impl DraftSession {
    /// Open a draft between two distinct players.
    ///
    /// `first_turn` is the seat that picks first.
    pub fn new(
        id: DraftId,
        player1: PlayerId,
        player2: PlayerId,
        pool: PoolResult,
        allowed_points: u32,
        first_turn: Seat,
    ) -> Result<Self, SessionError> {
        if player1 == player2 {
            return Err(SessionError::SamePlayerTwice);
        }
        if allowed_points == 0 {
            return Err(SessionError::ZeroAllowedPoints);
        }

        Ok(Self {
            id,
            players: SeatMap::new(player1, player2),
            pool,
            allowed_points,
            status: DraftStatus::InProgress,
            first_turn,
            current_turn: first_turn,
            history: DraftHistory::new(),
            reset_requested_by: None,
            finished_by: None,
        })
    }

    /// Open a draft with a fresh ID, the host's settings, and a rolled
    /// opening seat.
    pub fn open(
        player1: PlayerId,
        player2: PlayerId,
        pool: PoolResult,
        settings: &DraftSettings,
        rng: &mut DraftRng,
    ) -> Result<Self, SessionError> {
        let first_turn = Self::roll_first_turn(rng);
        let session = Self::new(
            DraftId::random(),
            player1,
            player2,
            pool,
            settings.allowed_points,
            first_turn,
        )?;
        info!(draft = %session.id, first = %session.current_player(), "draft opened");
        Ok(session)
    }

    /// Roll which seat picks first.
    pub fn roll_first_turn(rng: &mut DraftRng) -> Seat {
        if rng.gen_bool(0.5) {
            Seat::First
        } else {
            Seat::Second
        }
    }

    // === Host storage ===

    /// Capture the session for storage.
    #[must_use]
    pub fn snapshot(&self) -> DraftSnapshot {
        DraftSnapshot {
            id: self.id,
            player1_id: self.players[Seat::First],
            player2_id: self.players[Seat::Second],
            pool: self.pool.clone(),
            allowed_points: self.allowed_points,
            status: self.status,
            first_turn: self.first_turn,
            history: self.history.clone(),
            reset_requested_by: self.reset_requested_by,
            finished_by: self.finished_by,
        }
    }

    /// Rebuild a session from storage, checking every invariant the turn
    /// engine would have maintained.
    pub fn restore(snapshot: DraftSnapshot, catalog: &CardCatalog) -> Result<Self, SessionError> {
        let mut session = Self::new(
            snapshot.id,
            snapshot.player1_id,
            snapshot.player2_id,
            snapshot.pool,
            snapshot.allowed_points,
            snapshot.first_turn,
        )?;

        snapshot
            .history
            .validate_against(&session.pool, &session.players, snapshot.first_turn)?;

        match (snapshot.status, snapshot.reset_requested_by, snapshot.finished_by) {
            (DraftStatus::InProgress, None, None)
            | (DraftStatus::ResetRequested, Some(_), None)
            | (DraftStatus::Finished, None, Some(_)) => {}
            _ => return Err(SessionError::InconsistentState("status does not match its recorded actor")),
        }

        session.history = snapshot.history;
        session.status = snapshot.status;
        session.reset_requested_by = snapshot.reset_requested_by;
        session.finished_by = snapshot.finished_by;
        if session.history.len() % 2 == 1 {
            session.current_turn = session.first_turn.other();
        }

        for (_, &player) in session.players.iter() {
            let spent = session.spent_by(player, catalog).map_err(SessionError::UnknownCard)?;
            if spent > session.allowed_points {
                return Err(SessionError::OverBudget {
                    player,
                    spent,
                    allowed: session.allowed_points,
                });
            }
        }

        if let Some(seat) = session.finished_by {
            let hand = session
                .cards_of(session.players[seat], catalog)
                .map_err(SessionError::UnknownCard)?;
            if !can_finish(hand.iter().copied(), session.allowed_points).is_ok() {
                return Err(SessionError::InconsistentState("finishing player's picks do not complete the draft"));
            }
        }

        Ok(session)
    }

    // === Accessors ===

    #[must_use]
    pub fn id(&self) -> DraftId {
        self.id
    }

    #[must_use]
    pub fn players(&self) -> &SeatMap<PlayerId> {
        &self.players
    }

    #[must_use]
    pub fn player(&self, seat: Seat) -> PlayerId {
        self.players[seat]
    }

    #[must_use]
    pub fn pool(&self) -> &PoolResult {
        &self.pool
    }

    #[must_use]
    pub fn allowed_points(&self) -> u32 {
        self.allowed_points
    }

    #[must_use]
    pub fn status(&self) -> DraftStatus {
        self.status
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.status == DraftStatus::Finished
    }

    #[must_use]
    pub fn first_turn(&self) -> Seat {
        self.first_turn
    }

    #[must_use]
    pub fn current_turn(&self) -> Seat {
        self.current_turn
    }

    /// The player allowed to pick next.
    #[must_use]
    pub fn current_player(&self) -> PlayerId {
        self.players[self.current_turn]
    }

    #[must_use]
    pub fn history(&self) -> &DraftHistory {
        &self.history
    }

    #[must_use]
    pub fn reset_requested_by(&self) -> Option<Seat> {
        self.reset_requested_by
    }

    #[must_use]
    pub fn finished_by(&self) -> Option<Seat> {
        self.finished_by
    }

    #[must_use]
    pub fn seat_of(&self, player: PlayerId) -> Option<Seat> {
        self.players.seat_of(&player)
    }

    // === Derived views ===

    /// Picks made by one player, in order.
    pub fn picks_of(&self, player: PlayerId) -> impl Iterator<Item = &Pick> {
        self.history.picks_by(player)
    }

    /// Pool cards nobody has picked yet, in pool order.
    pub fn available_card_ids(&self) -> impl Iterator<Item = CardId> + '_ {
        self.pool
            .card_ids
            .iter()
            .copied()
            .filter(|&id| !self.history.contains_card(id))
    }

    /// Resolve a player's picks against the catalog.
    ///
    /// Fails with the first picked ID the catalog does not know.
    pub fn cards_of<'c>(&self, player: PlayerId, catalog: &'c CardCatalog) -> Result<Hand<'c>, CardId> {
        self.picks_of(player)
            .map(|pick| catalog.get(pick.card_id).ok_or(pick.card_id))
            .collect()
    }

    /// Resolve the unpicked pool cards against the catalog.
    pub fn available_cards<'c>(&self, catalog: &'c CardCatalog) -> Result<Vec<&'c Card>, CardId> {
        catalog.resolve(self.available_card_ids())
    }

    pub fn stats_of(&self, player: PlayerId, catalog: &CardCatalog) -> Result<PlayerCardStats, CardId> {
        let hand = self.cards_of(player, catalog)?;
        Ok(PlayerCardStats::collect(hand.iter().copied(), self.allowed_points))
    }

    pub fn spent_by(&self, player: PlayerId, catalog: &CardCatalog) -> Result<u32, CardId> {
        Ok(self.stats_of(player, catalog)?.total_cost)
    }

    pub fn remaining_points(&self, player: PlayerId, catalog: &CardCatalog) -> Result<u32, CardId> {
        Ok(self.stats_of(player, catalog)?.remaining_points)
    }

    // === Transitions ===

    /// Run every check `pick_card` runs, without recording anything.
    ///
    /// Hosts use this to predict the authoritative outcome of a pick, e.g.
    /// for optimistic UI updates.
    pub fn check_pick(&self, catalog: &CardCatalog, player: PlayerId, card_id: CardId) -> Result<(), PickError> {
        if self.status != DraftStatus::InProgress {
            return Err(PickError::SessionNotInProgress);
        }
        let seat = self.seat_of(player).ok_or(PickError::PlayerNotParticipant)?;
        if seat != self.current_turn {
            return Err(PickError::NotYourTurn);
        }
        if !self.pool.contains(card_id) {
            return Err(PickError::CardNotInPool(card_id));
        }
        if self.history.contains_card(card_id) {
            return Err(PickError::AlreadyPicked(card_id));
        }

        let card = catalog.get(card_id).ok_or(PickError::UnknownCard(card_id))?;
        let hand = self.cards_of(player, catalog).map_err(PickError::UnknownCard)?;
        let available = self.available_cards(catalog).map_err(PickError::UnknownCard)?;

        can_pick(card, hand.iter().copied(), self.allowed_points, available.iter().copied())
            .into_result()
            .map_err(PickError::Illegal)
    }

    /// Whether `pick_card` would accept this pick right now.
    #[must_use]
    pub fn player_can_pick(&self, catalog: &CardCatalog, player: PlayerId, card_id: CardId) -> bool {
        self.check_pick(catalog, player, card_id).is_ok()
    }

    /// Record a pick for the player holding the turn, timestamped now.
    pub fn pick_card(&self, catalog: &CardCatalog, player: PlayerId, card_id: CardId) -> Result<Self, PickError> {
        self.pick_card_at(catalog, player, card_id, Utc::now())
    }

    /// Record a pick with an explicit timestamp.
    pub fn pick_card_at(
        &self,
        catalog: &CardCatalog,
        player: PlayerId,
        card_id: CardId,
        timestamp: DateTime<Utc>,
    ) -> Result<Self, PickError> {
        if let Err(err) = self.check_pick(catalog, player, card_id) {
            debug!(draft = %self.id, %player, card = %card_id, %err, "pick rejected");
            return Err(err);
        }

        let mut next = self.clone();
        let pick_number = next.history.push(card_id, player, timestamp).pick_number;
        next.current_turn = next.current_turn.other();
        debug!(draft = %self.id, %player, card = %card_id, pick_number, "card picked");
        Ok(next)
    }

    /// Flag the draft for a host-arbitrated restart. History is kept.
    pub fn request_reset(&self, player: PlayerId) -> Result<Self, ResetError> {
        if self.status != DraftStatus::InProgress {
            return Err(ResetError::SessionNotInProgress);
        }
        let seat = self.seat_of(player).ok_or(ResetError::PlayerNotParticipant)?;

        let mut next = self.clone();
        next.status = DraftStatus::ResetRequested;
        next.reset_requested_by = Some(seat);
        info!(draft = %self.id, %player, "draft reset requested");
        Ok(next)
    }

    /// Host resolution: restart the draft from an empty history.
    ///
    /// The pool and the opening seat are kept.
    pub fn accept_reset(&self) -> Result<Self, ResetError> {
        if self.status != DraftStatus::ResetRequested {
            return Err(ResetError::SessionNotResetRequested);
        }

        let mut next = self.clone();
        next.status = DraftStatus::InProgress;
        next.history = DraftHistory::new();
        next.current_turn = next.first_turn;
        next.reset_requested_by = None;
        info!(draft = %self.id, discarded = self.history.len(), "draft reset accepted");
        Ok(next)
    }

    /// Host resolution: carry on where the draft left off.
    pub fn decline_reset(&self) -> Result<Self, ResetError> {
        if self.status != DraftStatus::ResetRequested {
            return Err(ResetError::SessionNotResetRequested);
        }

        let mut next = self.clone();
        next.status = DraftStatus::InProgress;
        next.reset_requested_by = None;
        info!(draft = %self.id, "draft reset declined");
        Ok(next)
    }

    /// End the draft. Only the acting player's own picks are checked.
    pub fn finish_draft(&self, catalog: &CardCatalog, player: PlayerId) -> Result<Self, FinishError> {
        if self.status != DraftStatus::InProgress {
            return Err(FinishError::SessionNotInProgress);
        }
        let seat = self.seat_of(player).ok_or(FinishError::PlayerNotParticipant)?;
        let hand = self.cards_of(player, catalog).map_err(FinishError::UnknownCard)?;

        can_finish(hand.iter().copied(), self.allowed_points)
            .into_result()
            .map_err(FinishError::Illegal)?;

        let mut next = self.clone();
        next.status = DraftStatus::Finished;
        next.finished_by = Some(seat);
        info!(draft = %self.id, %player, picks = self.history.len(), "draft finished");
        Ok(next)
    }
}

// === Host entry points ===

/// Record a pick. See [`DraftSession::pick_card`].
pub fn pick_card(
    session: &DraftSession,
    catalog: &CardCatalog,
    player: PlayerId,
    card_id: CardId,
) -> Result<DraftSession, PickError> {
    session.pick_card(catalog, player, card_id)
}

/// Request a reset. See [`DraftSession::request_reset`].
pub fn request_reset(session: &DraftSession, player: PlayerId) -> Result<DraftSession, ResetError> {
    session.request_reset(player)
}

/// Finish the draft. See [`DraftSession::finish_draft`].
pub fn finish_draft(
    session: &DraftSession,
    catalog: &CardCatalog,
    player: PlayerId,
) -> Result<DraftSession, FinishError> {
    session.finish_draft(catalog, player)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Category;
    use crate::rules::LegalityReason;

    struct Fixture {
        catalog: CardCatalog,
        ids: Vec<CardId>,
        p1: PlayerId,
        p2: PlayerId,
    }

    /// Pool: two gods (5, 4), a 5-cost monster, and troops of cost 1..=4.
    fn fixture() -> Fixture {
        let cards = vec![
            Card::new(CardId::random(), "Zeus", Category::God, 5),
            Card::new(CardId::random(), "Hades", Category::God, 4),
            Card::new(CardId::random(), "Cerberus", Category::Monster, 5),
            Card::new(CardId::random(), "Peltast", Category::Troop, 1),
            Card::new(CardId::random(), "Archer", Category::Troop, 2),
            Card::new(CardId::random(), "Hoplite", Category::Troop, 3),
            Card::new(CardId::random(), "Cavalry", Category::Troop, 4),
        ];
        let ids = cards.iter().map(|c| c.id).collect();
        Fixture {
            catalog: CardCatalog::from_cards(cards).unwrap(),
            ids,
            p1: PlayerId::random(),
            p2: PlayerId::random(),
        }
    }

    fn session(f: &Fixture, allowed: u32) -> DraftSession {
        let pool = PoolResult::new(f.ids.clone(), 15);
        DraftSession::new(DraftId::random(), f.p1, f.p2, pool, allowed, Seat::First).unwrap()
    }

    #[test]
    fn test_new_rejects_same_player() {
        let f = fixture();
        let pool = PoolResult::new(f.ids.clone(), 15);
        assert!(matches!(
            DraftSession::new(DraftId::random(), f.p1, f.p1, pool, 10, Seat::First),
            Err(SessionError::SamePlayerTwice)
        ));
    }

    #[test]
    fn test_pick_alternates_turns() {
        let f = fixture();
        let s0 = session(&f, 10);
        assert_eq!(s0.current_player(), f.p1);

        let s1 = s0.pick_card(&f.catalog, f.p1, f.ids[0]).unwrap();
        assert_eq!(s1.current_player(), f.p2);
        assert_eq!(s1.history().last().unwrap().pick_number, 1);

        let s2 = s1.pick_card(&f.catalog, f.p2, f.ids[1]).unwrap();
        assert_eq!(s2.current_player(), f.p1);
        assert_eq!(s2.history().last().unwrap().pick_number, 2);

        // The earlier snapshots are untouched.
        assert!(s0.history().is_empty());
        assert_eq!(s1.history().len(), 1);
    }

    #[test]
    fn test_pick_precondition_order() {
        let f = fixture();
        let s = session(&f, 10);

        assert_eq!(
            s.pick_card(&f.catalog, PlayerId::random(), f.ids[0]),
            Err(PickError::PlayerNotParticipant)
        );
        assert_eq!(s.pick_card(&f.catalog, f.p2, f.ids[0]), Err(PickError::NotYourTurn));
        assert!(!s.player_can_pick(&f.catalog, f.p2, f.ids[0]));
        assert!(s.player_can_pick(&f.catalog, f.p1, f.ids[0]));

        let stranger = CardId::random();
        assert_eq!(
            s.pick_card(&f.catalog, f.p1, stranger),
            Err(PickError::CardNotInPool(stranger))
        );

        let s = s.pick_card(&f.catalog, f.p1, f.ids[0]).unwrap();
        assert_eq!(
            s.pick_card(&f.catalog, f.p2, f.ids[0]),
            Err(PickError::AlreadyPicked(f.ids[0]))
        );
    }

    #[test]
    fn test_pick_applies_legality() {
        let f = fixture();
        let s = session(&f, 10);

        // p1 holds no god; taking the 4-cost troop leaves 6, fine.
        let s = s.pick_card(&f.catalog, f.p1, f.ids[6]).unwrap();
        // p2 takes Zeus.
        let s = s.pick_card(&f.catalog, f.p2, f.ids[0]).unwrap();
        // p1 has 6 left; the 3-cost troop would leave 3 < Hades (4).
        assert_eq!(
            s.pick_card(&f.catalog, f.p1, f.ids[5]),
            Err(PickError::Illegal(LegalityReason::MustReservePointsForGod))
        );
        assert!(s.pick_card(&f.catalog, f.p1, f.ids[4]).is_ok());
    }

    #[test]
    fn test_unknown_card_in_pool() {
        let f = fixture();
        let ghost = CardId::random();
        let mut ids = f.ids.clone();
        ids.push(ghost);
        let s = DraftSession::new(DraftId::random(), f.p1, f.p2, PoolResult::new(ids, 15), 10, Seat::First)
            .unwrap();

        assert_eq!(s.pick_card(&f.catalog, f.p1, ghost), Err(PickError::UnknownCard(ghost)));
    }

    #[test]
    fn test_reset_flow() {
        let f = fixture();
        let s = session(&f, 10).pick_card(&f.catalog, f.p1, f.ids[3]).unwrap();

        assert_eq!(s.request_reset(PlayerId::random()), Err(ResetError::PlayerNotParticipant));
        assert_eq!(s.accept_reset(), Err(ResetError::SessionNotResetRequested));

        let requested = s.request_reset(f.p2).unwrap();
        assert_eq!(requested.status(), DraftStatus::ResetRequested);
        assert_eq!(requested.reset_requested_by(), Some(Seat::Second));
        assert_eq!(requested.history().len(), 1);
        assert_eq!(
            requested.pick_card(&f.catalog, f.p2, f.ids[4]),
            Err(PickError::SessionNotInProgress)
        );
        assert_eq!(requested.request_reset(f.p1), Err(ResetError::SessionNotInProgress));

        let declined = requested.decline_reset().unwrap();
        assert_eq!(declined.status(), DraftStatus::InProgress);
        assert_eq!(declined.history().len(), 1);
        assert_eq!(declined.current_player(), f.p2);

        let restarted = requested.accept_reset().unwrap();
        assert_eq!(restarted.status(), DraftStatus::InProgress);
        assert!(restarted.history().is_empty());
        assert_eq!(restarted.current_player(), f.p1);
    }

    #[test]
    fn test_finish_flow() {
        let f = fixture();
        // p1: Hades (4) + Peltast (1) = 5 = allowed.
        let s = session(&f, 5);
        let s = s.pick_card(&f.catalog, f.p1, f.ids[1]).unwrap();

        assert_eq!(
            s.finish_draft(&f.catalog, f.p2),
            Err(FinishError::Illegal(LegalityReason::MustPickGodCard))
        );
        assert_eq!(
            s.finish_draft(&f.catalog, f.p1),
            Err(FinishError::Illegal(LegalityReason::MustUseAllPoints))
        );

        let s = s.pick_card(&f.catalog, f.p2, f.ids[0]).unwrap();
        let s = s.pick_card(&f.catalog, f.p1, f.ids[3]).unwrap();

        let done = s.finish_draft(&f.catalog, f.p1).unwrap();
        assert!(done.is_finished());
        assert_eq!(done.finished_by(), Some(Seat::First));
        assert_eq!(done.finish_draft(&f.catalog, f.p1), Err(FinishError::SessionNotInProgress));
        assert_eq!(done.request_reset(f.p2), Err(ResetError::SessionNotInProgress));
        assert_eq!(
            done.pick_card(&f.catalog, f.p2, f.ids[2]),
            Err(PickError::SessionNotInProgress)
        );
    }

    #[test]
    fn test_snapshot_restore() {
        let f = fixture();
        let s = session(&f, 10)
            .pick_card(&f.catalog, f.p1, f.ids[0])
            .unwrap()
            .pick_card(&f.catalog, f.p2, f.ids[1])
            .unwrap()
            .pick_card(&f.catalog, f.p1, f.ids[3])
            .unwrap();

        let json = serde_json::to_string(&s.snapshot()).unwrap();
        let snapshot: DraftSnapshot = serde_json::from_str(&json).unwrap();
        let restored = DraftSession::restore(snapshot, &f.catalog).unwrap();

        assert_eq!(restored, s);
        assert_eq!(restored.current_player(), f.p2);
    }

    #[test]
    fn test_restore_rejects_inconsistent_status() {
        let f = fixture();
        let mut snapshot = session(&f, 10).snapshot();
        snapshot.status = DraftStatus::Finished;

        assert!(matches!(
            DraftSession::restore(snapshot, &f.catalog),
            Err(SessionError::InconsistentState(_))
        ));
    }

    #[test]
    fn test_restore_rejects_unearned_finish() {
        let f = fixture();
        let mut snapshot = session(&f, 10).snapshot();
        snapshot.status = DraftStatus::Finished;
        snapshot.finished_by = Some(Seat::First);

        assert!(matches!(
            DraftSession::restore(snapshot, &f.catalog),
            Err(SessionError::InconsistentState(_))
        ));
    }

    #[test]
    fn test_restore_accepts_earned_finish() {
        let f = fixture();
        // p1: Zeus (5), Peltast (1) and Cavalry (4) = 10.
        let done = session(&f, 10)
            .pick_card(&f.catalog, f.p1, f.ids[0])
            .unwrap()
            .pick_card(&f.catalog, f.p2, f.ids[1])
            .unwrap()
            .pick_card(&f.catalog, f.p1, f.ids[3])
            .unwrap()
            .pick_card(&f.catalog, f.p2, f.ids[4])
            .unwrap()
            .pick_card(&f.catalog, f.p1, f.ids[6])
            .unwrap()
            .finish_draft(&f.catalog, f.p1)
            .unwrap();

        let restored = DraftSession::restore(done.snapshot(), &f.catalog).unwrap();
        assert_eq!(restored, done);
    }

    #[test]
    fn test_roll_first_turn_hits_both_seats() {
        let mut rng = DraftRng::new(11);
        let rolls: Vec<Seat> = (0..64).map(|_| DraftSession::roll_first_turn(&mut rng)).collect();
        assert!(rolls.contains(&Seat::First));
        assert!(rolls.contains(&Seat::Second));
    }
}
