//! The round engine: one state machine shared by every game.
//!
//! A game is a [`GameConfig`] plus a content catalog. The presentation
//! layer dispatches [`Event`]s and renders [`RoundSnapshot`]s; it never
//! mutates state directly.
//!
//! ## Example
//!
//! ```
//! use party_engine::content::{ContentId, ContentItem};
//! use party_engine::core::{GameConfig, Roster, RoundSettings};
//! use party_engine::rules::{Event, Phase, RoundEngine, ScoringPolicy, Selection};
//!
//! let catalog = vec![
//!     ContentItem::new(ContentId::new(1), "Best dance move?"),
//!     ContentItem::new(ContentId::new(2), "Worst pickup line?"),
//! ];
//! let config = GameConfig::new("Judge Picks").with_scoring(ScoringPolicy::SingleWinner);
//! let roster = Roster::with_names(["Ada", "Bo", "Cy"]).unwrap();
//! let mut engine = RoundEngine::new(config, catalog, 42).with_roster(roster);
//!
//! engine.dispatch(Event::StartGame(RoundSettings::new().with_rounds(1))).unwrap();
//! assert_eq!(engine.phase(), Phase::Handoff);
//!
//! engine.dispatch(Event::Reveal).unwrap();
//! let bo = engine.roster().at(1).unwrap().id;
//! engine.dispatch(Event::Select(Selection::Player(bo))).unwrap();
//! engine.dispatch(Event::Next).unwrap();
//!
//! assert_eq!(engine.phase(), Phase::GameOver);
//! assert_eq!(engine.roster().get(bo).unwrap().score(), 1);
//! ```
//!
//! ## Totality
//!
//! `dispatch` accepts every event in every phase. Configuration problems
//! come back as `Err` and leave the state untouched; anything else that
//! doesn't apply to the current phase is `Transition::Ignored`.

use im::Vector;

use super::event::{Event, EventRecord, Selection, Vote};
use super::phase::Phase;
use super::scoring::{Award, ScoringPolicy, TurnResult};
use super::snapshot::RoundSnapshot;
use super::state::RoundState;
use crate::content::{ContentItem, ContentPool};
use crate::core::{
    EndCondition, EngineError, GameConfig, Player, PlayerId, ResetPolicy, RoleCursor, Roster,
    RoundSettings, SessionRng, TurnMode, TurnsPerRound,
};
use crate::timer::{TimerHandle, TimerSignal, TimerSlot};

/// Outcome of a dispatched event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    /// The phase changed.
    Moved { from: Phase, to: Phase },
    /// State changed within the same phase.
    Stayed(Phase),
    /// The event doesn't apply to this phase; nothing changed.
    Ignored(Phase),
}

impl Transition {
    #[must_use]
    pub fn is_applied(self) -> bool {
        !matches!(self, Transition::Ignored(_))
    }

    /// Phase after the event.
    #[must_use]
    pub fn phase(self) -> Phase {
        match self {
            Transition::Moved { to, .. } => to,
            Transition::Stayed(phase) | Transition::Ignored(phase) => phase,
        }
    }
}

/// A single game session.
pub struct RoundEngine {
    config: GameConfig,
    catalog: Vec<ContentItem>,
    rng: SessionRng,
    games_started: u32,
    roster: Roster,
    state: RoundState,
    pool: Option<ContentPool>,
    timer: TimerSlot<Phase>,
    history: Vector<EventRecord>,
}

impl RoundEngine {
    /// Create a session in setup with an empty roster.
    #[must_use]
    pub fn new(config: GameConfig, catalog: Vec<ContentItem>, seed: u64) -> Self {
        Self {
            config,
            catalog,
            rng: SessionRng::new(seed),
            games_started: 0,
            roster: Roster::new(),
            state: RoundState::default(),
            pool: None,
            timer: TimerSlot::new(),
            history: Vector::new(),
        }
    }

    /// Seat an existing roster.
    #[must_use]
    pub fn with_roster(mut self, mut roster: Roster) -> Self {
        roster.set_locked(false);
        self.roster = roster;
        self
    }

    // === Dispatch ===

    /// Apply one event.
    pub fn dispatch(&mut self, event: Event) -> Result<Transition, EngineError> {
        let from = self.state.phase;
        let transition = match (from, &event) {
            (Phase::Setup, Event::Configure) => self.configure()?,
            (Phase::Setup | Phase::Config, Event::StartGame(settings)) => {
                self.start_game(settings)?
            }
            (Phase::Handoff, Event::Reveal) => self.reveal(),
            (Phase::Countdown | Phase::Prompt, Event::Tick) => self.tick(),
            (Phase::Countdown | Phase::Prompt, Event::Expire(handle)) => self.expire(*handle),
            (Phase::Prompt, Event::Timeout | Event::Done) => self.enter_resolution(),
            (Phase::Prompt, Event::GotIt) => self.got_it(),
            (Phase::Prompt, Event::Skip) => self.skip(),
            (Phase::Prompt, Event::Select(selection)) => self.select_in_prompt(*selection),
            (Phase::Prompt, Event::Vote(vote)) => self.vote(*vote),
            (Phase::Resolution, Event::Select(selection)) => {
                self.select_in_resolution(*selection)
            }
            (Phase::Resolution, Event::Next) => self.next(),
            (Phase::GameOver, Event::Reset) => self.reset(),
            (_, Event::RemovePlayer(id)) => self.remove_seat(*id)?.1,
            _ => Transition::Ignored(from),
        };

        if !transition.is_applied() {
            tracing::trace!(phase = %from, ?event, "event ignored");
        } else if event != Event::Reset {
            self.record(from, transition, event);
        }
        Ok(transition)
    }

    fn record(&mut self, from: Phase, transition: Transition, event: Event) {
        self.history.push_back(EventRecord {
            turn: self.state.turn_number,
            round: self.state.round_number,
            from,
            to: transition.phase(),
            event,
        });
    }

    fn configure(&mut self) -> Result<Transition, EngineError> {
        self.config.check_roster(&self.roster)?;
        self.enter(Phase::Config);
        Ok(self.settled(Phase::Setup))
    }

    fn start_game(&mut self, settings: &RoundSettings) -> Result<Transition, EngineError> {
        let from = self.state.phase;
        self.config.check_roster(&self.roster)?;
        self.config.check_settings(settings)?;

        let rng = self
            .rng
            .for_context(&format!("content/{}", self.games_started));
        let pool = ContentPool::initialize(&self.catalog, &settings.packs, self.config.draw_policy, rng)?;
        let total_rounds = match self.config.end {
            EndCondition::Rounds => self.config.rounds_for(settings),
            EndCondition::DeckExhausted => u32::try_from(pool.len()).unwrap_or(u32::MAX),
        };

        self.games_started += 1;
        self.pool = Some(pool);
        self.state = RoundState::new(settings.clone(), total_rounds);
        self.state.phase = from;
        if self.config.judge {
            // Judge reads, the next seat acts
            self.state.actor = RoleCursor::at(self.roster.rotate(0));
        }
        self.roster.set_locked(true);

        tracing::info!(
            game = %self.config.name,
            players = self.roster.len(),
            total_rounds,
            "game started"
        );
        self.begin_turn();
        Ok(self.settled(from))
    }

    fn reveal(&mut self) -> Transition {
        let from = self.state.phase;
        self.reveal_content();
        self.settled(from)
    }

    fn tick(&mut self) -> Transition {
        match self.timer.tick() {
            Some((owner, TimerSignal::Expired(_))) => self.on_expired(owner),
            Some((_, TimerSignal::Tick { .. })) => Transition::Stayed(self.state.phase),
            _ => Transition::Ignored(self.state.phase),
        }
    }

    fn expire(&mut self, handle: TimerHandle) -> Transition {
        match self.timer.expire(handle) {
            Some(owner) => self.on_expired(owner),
            None => Transition::Ignored(self.state.phase),
        }
    }

    fn on_expired(&mut self, owner: Phase) -> Transition {
        let from = self.state.phase;
        match (owner, from) {
            (Phase::Countdown, Phase::Countdown) => self.enter_prompt(),
            (Phase::Prompt, Phase::Prompt) => self.enter(Phase::Resolution),
            _ => return Transition::Ignored(from),
        }
        self.settled(from)
    }

    fn got_it(&mut self) -> Transition {
        if self.config.scoring == ScoringPolicy::SelfScore {
            self.state.pending_points += self.config.points_per_award;
        }
        match self.config.turn_mode {
            TurnMode::Burst => self.next_in_burst(),
            TurnMode::SingleItem => self.enter_resolution(),
        }
    }

    fn skip(&mut self) -> Transition {
        match self.config.turn_mode {
            TurnMode::Burst => self.next_in_burst(),
            TurnMode::SingleItem => self.enter_resolution(),
        }
    }

    fn next_in_burst(&mut self) -> Transition {
        let deck_done = self.config.end == EndCondition::DeckExhausted
            && self.pool.as_ref().is_some_and(ContentPool::is_exhausted);
        if deck_done {
            return self.enter_resolution();
        }
        self.draw_content();
        Transition::Stayed(Phase::Prompt)
    }

    fn select_in_prompt(&mut self, selection: Selection) -> Transition {
        if self.config.scoring.uses_votes() || !self.selection_valid(selection) {
            return Transition::Ignored(Phase::Prompt);
        }

        if let Selection::Choice(choice) = selection {
            let answer = self.state.current_content.as_ref().and_then(|c| c.answer);
            if answer == Some(choice) && self.config.scoring == ScoringPolicy::SelfScore {
                self.state.pending_points += self.config.points_per_award;
            }
        }
        self.state.pending_selection = Some(selection);
        self.enter_resolution()
    }

    fn select_in_resolution(&mut self, selection: Selection) -> Transition {
        match selection {
            Selection::Player(id)
                if self.config.scoring == ScoringPolicy::SingleWinner && self.roster.contains(id) =>
            {
                self.state.pending_selection = Some(selection);
                Transition::Stayed(Phase::Resolution)
            }
            _ => Transition::Ignored(Phase::Resolution),
        }
    }

    fn vote(&mut self, vote: Vote) -> Transition {
        if !self.config.scoring.uses_votes()
            || !self.roster.contains(vote.voter)
            || self.state.has_voted(vote.voter)
            || !self.selection_valid(vote.choice)
        {
            return Transition::Ignored(Phase::Prompt);
        }

        self.state.votes.push(vote);
        if self.state.votes.len() >= self.roster.len() {
            self.enter_resolution()
        } else {
            Transition::Stayed(Phase::Prompt)
        }
    }

    fn next(&mut self) -> Transition {
        for award in self.pending_awards() {
            match self.roster.award_point(award.player, award.points) {
                Ok(total) => {
                    tracing::debug!(player = %award.player, points = award.points, total, "points awarded");
                }
                Err(err) => tracing::warn!(%err, "award skipped"),
            }
        }

        self.state.clear_turn();
        self.state.turn_number += 1;
        self.state.turn_in_round += 1;
        let turns_in_round = match self.config.turns_per_round {
            TurnsPerRound::One => 1,
            TurnsPerRound::EachPlayer => self.actors_per_round(),
        };
        let round_complete = self.state.turn_in_round as usize >= turns_in_round;
        if round_complete {
            self.state.round_number += 1;
            self.state.turn_in_round = 0;
        }

        if self.is_finished() {
            self.enter(Phase::GameOver);
            tracing::info!(
                game = %self.config.name,
                rounds = self.state.round_number,
                turns = self.state.turn_number,
                "game over"
            );
        } else {
            if round_complete && self.config.judge {
                self.state.judge.advance(&self.roster);
            }
            self.advance_actor();
            self.begin_turn();
        }
        self.settled(Phase::Resolution)
    }

    /// Players who act once per round; the judge sits out.
    fn actors_per_round(&self) -> usize {
        let seats = self.roster.len();
        if self.config.judge && seats > 1 {
            seats - 1
        } else {
            seats
        }
    }

    /// Pass the actor role to the next seat that isn't judging.
    fn advance_actor(&mut self) {
        self.state.actor.advance(&self.roster);
        if self.config.judge
            && self.roster.len() > 1
            && self.state.actor.seat() == self.state.judge.seat()
        {
            self.state.actor.advance(&self.roster);
        }
    }

    fn reset(&mut self) -> Transition {
        self.timer.release();
        match self.config.on_reset {
            ResetPolicy::KeepRoster => self.roster.reset_scores(),
            ResetPolicy::ClearRoster => self.roster.clear(),
        }
        self.roster.set_locked(false);
        self.state = RoundState::default();
        self.pool = None;
        self.history.clear();

        tracing::info!(game = %self.config.name, players = self.roster.len(), "session reset");
        Transition::Moved {
            from: Phase::GameOver,
            to: Phase::Setup,
        }
    }

    // === Internal transitions ===

    /// Switch phase. Any timer owned by the old phase is cancelled.
    fn enter(&mut self, phase: Phase) {
        let from = self.state.phase;
        if from != phase {
            self.timer.release();
        }
        self.state.phase = phase;
        tracing::debug!(
            %from,
            to = %phase,
            round = self.state.round_number,
            turn = self.state.turn_number,
            "phase transition"
        );
    }

    fn settled(&self, from: Phase) -> Transition {
        if self.state.phase == from {
            Transition::Stayed(from)
        } else {
            Transition::Moved {
                from,
                to: self.state.phase,
            }
        }
    }

    fn begin_turn(&mut self) {
        self.state.clear_turn();
        if self.config.handoff {
            self.enter(Phase::Handoff);
        } else {
            self.reveal_content();
        }
    }

    fn reveal_content(&mut self) {
        self.draw_content();
        match self.config.countdown_secs {
            Some(secs) => {
                self.enter(Phase::Countdown);
                self.timer.start(Phase::Countdown, secs);
            }
            None => self.enter_prompt(),
        }
    }

    fn draw_content(&mut self) {
        if let Some(pool) = self.pool.as_mut() {
            self.state.current_content = Some(pool.draw().clone());
        }
    }

    fn enter_prompt(&mut self) {
        self.state.pending_selection = None;
        self.enter(Phase::Prompt);
        if let Some(secs) = self.config.turn_secs {
            self.timer.start(Phase::Prompt, secs);
        }
    }

    fn enter_resolution(&mut self) -> Transition {
        let from = self.state.phase;
        self.enter(Phase::Resolution);
        self.settled(from)
    }

    fn selection_valid(&self, selection: Selection) -> bool {
        match selection {
            Selection::Player(id) => self.roster.contains(id),
            Selection::Choice(_) => true,
        }
    }

    fn is_finished(&self) -> bool {
        let length_reached = self.state.round_number >= self.state.total_rounds
            || (self.config.end == EndCondition::DeckExhausted
                && self.pool.as_ref().is_some_and(ContentPool::is_exhausted));
        let target_reached = self
            .config
            .target_score
            .is_some_and(|target| self.roster.iter().any(|p| p.score() >= target));
        length_reached || target_reached
    }

    // === Roster ===

    /// Seat a new player at the end of the table.
    pub fn add_player(&mut self, name: impl Into<String>) -> Result<PlayerId, EngineError> {
        let id = self.roster.add(name)?;
        tracing::debug!(player = %id, seats = self.roster.len(), "player added");
        Ok(id)
    }

    /// Rename a player. Only before the game starts.
    pub fn rename_player(&mut self, id: PlayerId, name: impl Into<String>) -> Result<(), EngineError> {
        self.roster.rename(id, name)
    }

    /// Remove a player, keeping every role cursor valid.
    ///
    /// Once past setup, removal may not take the roster below the minimum.
    /// Recorded in the history like `Event::RemovePlayer`.
    pub fn remove_player(&mut self, id: PlayerId) -> Result<Player, EngineError> {
        let from = self.state.phase;
        let (player, transition) = self.remove_seat(id)?;
        self.record(from, transition, Event::RemovePlayer(id));
        Ok(player)
    }

    fn remove_seat(&mut self, id: PlayerId) -> Result<(Player, Transition), EngineError> {
        if !self.roster.contains(id) {
            return Err(EngineError::UnknownPlayer(id));
        }
        let phase = self.state.phase;
        if phase == Phase::Config || phase.in_play() {
            let required = self.config.min_players.max(1);
            let remaining = self.roster.len() - 1;
            if remaining < required {
                return Err(EngineError::RosterTooSmall {
                    required,
                    actual: remaining,
                });
            }
        }

        let was_acting = self.state.actor.player(&self.roster) == Some(id);
        let (seat, player) = self.roster.remove(id)?;
        let len = self.roster.len();
        self.state.actor.on_removed(seat, len);
        self.state.judge.on_removed(seat, len);
        self.state.forget_player(id);
        if was_acting {
            // Unbanked points leave with the actor who earned them
            self.state.pending_points = 0;
        }
        tracing::debug!(player = %id, seat, seats = len, "player removed");

        // The departed player may have been the last vote outstanding
        let votes = self.state.votes.len();
        if phase == Phase::Prompt && votes > 0 && votes >= len {
            self.enter(Phase::Resolution);
        }
        Ok((player, self.settled(phase)))
    }

    /// Leave the game: cancel any running timer and hand back the roster.
    pub fn exit(mut self) -> Roster {
        if let Some(handle) = self.timer.release() {
            tracing::trace!(%handle, "timer released on exit");
        }
        tracing::info!(game = %self.config.name, phase = %self.state.phase, "session closed");
        self.roster.set_locked(false);
        self.roster
    }

    // === Queries ===

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.state.phase
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.phase.is_terminal()
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    #[must_use]
    pub fn state(&self) -> &RoundState {
        &self.state
    }

    /// The session's content pool, once a game has started.
    #[must_use]
    pub fn pool(&self) -> Option<&ContentPool> {
        self.pool.as_ref()
    }

    /// Applied events since the last reset.
    #[must_use]
    pub fn history(&self) -> &Vector<EventRecord> {
        &self.history
    }

    /// Acting player, during play.
    #[must_use]
    pub fn actor(&self) -> Option<PlayerId> {
        if self.state.phase.in_play() {
            self.state.actor.player(&self.roster)
        } else {
            None
        }
    }

    /// Judge, during play, for games with one.
    #[must_use]
    pub fn judge(&self) -> Option<PlayerId> {
        if self.config.judge && self.state.phase.in_play() {
            self.state.judge.player(&self.roster)
        } else {
            None
        }
    }

    /// Handle of the engine-owned countdown, if one is running.
    #[must_use]
    pub fn timer_handle(&self) -> Option<TimerHandle> {
        self.timer.handle()
    }

    /// Seconds left on the engine-owned countdown.
    #[must_use]
    pub fn timer_remaining(&self) -> Option<u32> {
        self.timer.remaining()
    }

    /// Votes cast this turn.
    #[must_use]
    pub fn votes(&self) -> &[Vote] {
        &self.state.votes
    }

    /// Awards the current turn would grant if resolved now.
    #[must_use]
    pub fn pending_awards(&self) -> Vec<Award> {
        let turn = TurnResult {
            actor: self.actor(),
            selection: self.state.pending_selection,
            votes: &self.state.votes,
            pending_points: self.state.pending_points,
            points_per_award: self.config.points_per_award,
        };
        self.config.scoring.settle(&turn)
    }

    #[must_use]
    pub fn leaderboard(&self) -> Vec<&Player> {
        self.roster.leaderboard()
    }

    /// Read-only view for rendering.
    #[must_use]
    pub fn snapshot(&self) -> RoundSnapshot {
        let current_content = if self.state.phase == Phase::Countdown {
            None
        } else {
            self.state.current_content.clone()
        };

        RoundSnapshot {
            phase: self.state.phase,
            round_number: self.state.round_number,
            total_rounds: self.state.total_rounds,
            turn_number: self.state.turn_number,
            current_content,
            roster: self.roster.players().to_vec(),
            pending_selection: self.state.pending_selection,
            actor: self.actor(),
            judge: self.judge(),
            votes: self.state.votes.to_vec(),
            pending_points: self.state.pending_points,
            timer_remaining: self.timer.remaining(),
        }
    }
}
