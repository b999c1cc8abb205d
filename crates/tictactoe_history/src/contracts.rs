//! Contract-based validation for history transitions.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use crate::error::{IllegalMove, OutOfRange};
use crate::history::GameHistory;
use crate::invariants::{HistoryInvariants, InvariantSet, InvariantViolation};
use crate::position::Position;
use crate::rules;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Validated form of the action handed to the transition.
    type Checked;

    /// Error reported when the precondition fails.
    type Error;

    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<Self::Checked, Self::Error>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

/// Runs `C::post` and fails a debug assertion on violation.
#[instrument(skip_all)]
pub(crate) fn debug_check_post<C, S, A>(before: &S, after: &S)
where
    C: Contract<S, A>,
{
    let violations = C::post(before, after).err().unwrap_or_default();
    if !violations.is_empty() {
        warn!(descriptions = %describe(&violations), "Postcondition failed");
    }
    debug_assert!(
        violations.is_empty(),
        "Postcondition failed: {}",
        describe(&violations)
    );
}

fn describe(violations: &[InvariantViolation]) -> String {
    violations
        .iter()
        .map(|v| v.description.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}

fn into_result(violations: Vec<InvariantViolation>) -> Result<(), Vec<InvariantViolation>> {
    if violations.is_empty() {
        Ok(())
    } else {
        Err(violations)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract
// ─────────────────────────────────────────────────────────────

/// Contract for [`GameHistory::apply_move`].
///
/// Preconditions:
/// - Cell index in 0-8
/// - Active board not yet won
/// - Square empty
///
/// Postconditions:
/// - Pointer advanced by one
/// - Snapshots after the old pointer discarded, one appended
/// - Snapshots up to the old pointer untouched
/// - History invariants hold
pub struct MoveContract;

impl Contract<GameHistory, usize> for MoveContract {
    type Checked = Position;
    type Error = IllegalMove;

    fn pre(game: &GameHistory, index: &usize) -> Result<Position, IllegalMove> {
        rules::check_move(game.current_board(), *index)
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        if after.current_move() != before.current_move() + 1 {
            violations.push(InvariantViolation::new("Move pointer advances by exactly one"));
        }

        if after.snapshot_count() != before.current_move() + 2 {
            violations.push(InvariantViolation::new(
                "History is truncated to the active snapshot before appending",
            ));
        }

        let kept = before.current_move() + 1;
        if after.snapshots().get(..kept) != before.snapshots().get(..kept) {
            violations.push(InvariantViolation::new(
                "Snapshots up to the active one are preserved",
            ));
        }

        into_result(violations)
    }
}

// ─────────────────────────────────────────────────────────────
//  Jump Contract
// ─────────────────────────────────────────────────────────────

/// Contract for [`GameHistory::jump_to`].
///
/// Precondition: target is a recorded position.
/// Postcondition: snapshots unchanged, history invariants hold.
pub struct JumpContract;

impl Contract<GameHistory, usize> for JumpContract {
    type Checked = usize;
    type Error = OutOfRange;

    fn pre(game: &GameHistory, move_index: &usize) -> Result<usize, OutOfRange> {
        if *move_index < game.snapshot_count() {
            Ok(*move_index)
        } else {
            Err(OutOfRange {
                requested: *move_index,
                len: game.snapshot_count(),
            })
        }
    }

    fn post(before: &GameHistory, after: &GameHistory) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = HistoryInvariants::check_all(after).err().unwrap_or_default();

        if after.snapshots() != before.snapshots() {
            violations.push(InvariantViolation::new("Jumping never alters snapshots"));
        }

        into_result(violations)
    }
}
