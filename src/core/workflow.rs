//! Stage workflow - status transitions and sequencing
//!
//! Stages move strictly forward: PENDENTE → ANDAMENTO → CONCLUIDA. A stage
//! may only start once every earlier stage of the same aircraft is done,
//! where "earlier" means registered before it.

use crate::core::entity::Entity;
use crate::core::error::{AerocodeError, Result};
use crate::entities::{Stage, StageStatus};

/// Check if a status transition is valid
pub fn is_valid_transition(from: StageStatus, to: StageStatus) -> bool {
    matches!(
        (from, to),
        (StageStatus::Pending, StageStatus::InProgress) | (StageStatus::InProgress, StageStatus::Done)
    )
}

fn transition(stage: &mut Stage, to: StageStatus) -> Result<()> {
    if !is_valid_transition(stage.status, to) {
        return Err(AerocodeError::InvalidTransition {
            stage: stage.name.clone(),
            from: stage.status,
            to,
        });
    }
    stage.status = to;
    Ok(())
}

/// Names of the stages registered before `stages[index]` for the same
/// aircraft that are not done yet
pub fn incomplete_predecessors(stages: &[Stage], index: usize) -> Vec<String> {
    let Some(target) = stages.get(index) else {
        return Vec::new();
    };

    stages[..index]
        .iter()
        .filter(|s| s.aircraft_code == target.aircraft_code && !s.is_done())
        .map(|s| s.name.clone())
        .collect()
}

/// Move `stages[index]` from PENDENTE to ANDAMENTO
pub fn start(stages: &mut [Stage], index: usize) -> Result<()> {
    let pending = incomplete_predecessors(stages, index);
    let stage = stages
        .get_mut(index)
        .ok_or_else(|| AerocodeError::not_found(Stage::KIND, format!("#{}", index + 1)))?;

    if !is_valid_transition(stage.status, StageStatus::InProgress) {
        return transition(stage, StageStatus::InProgress);
    }
    if !pending.is_empty() {
        return Err(AerocodeError::PrecedingStageIncomplete {
            stage: stage.name.clone(),
            pending,
        });
    }

    transition(stage, StageStatus::InProgress)
}

/// Move a stage from ANDAMENTO to CONCLUIDA
pub fn finish(stage: &mut Stage) -> Result<()> {
    transition(stage, StageStatus::Done)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stages(names: &[&str]) -> Vec<Stage> {
        names.iter().map(|n| Stage::new("AC1", *n, 5)).collect()
    }

    #[test]
    fn test_valid_transitions() {
        assert!(is_valid_transition(StageStatus::Pending, StageStatus::InProgress));
        assert!(is_valid_transition(StageStatus::InProgress, StageStatus::Done));
        assert!(!is_valid_transition(StageStatus::Pending, StageStatus::Done));
        assert!(!is_valid_transition(StageStatus::Done, StageStatus::InProgress));
        assert!(!is_valid_transition(StageStatus::InProgress, StageStatus::Pending));
    }

    #[test]
    fn test_first_stage_starts_freely() {
        let mut list = stages(&["A", "B"]);
        start(&mut list, 0).unwrap();
        assert_eq!(list[0].status, StageStatus::InProgress);
    }

    #[test]
    fn test_start_blocked_by_earlier_stage() {
        let mut list = stages(&["A", "B", "C"]);
        let err = start(&mut list, 1).unwrap_err();
        match err {
            AerocodeError::PrecedingStageIncomplete { stage, pending } => {
                assert_eq!(stage, "B");
                assert_eq!(pending, vec!["A"]);
            }
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(list[1].status, StageStatus::Pending);

        start(&mut list, 0).unwrap();
        finish(&mut list[0]).unwrap();
        start(&mut list, 1).unwrap();
        assert_eq!(list[1].status, StageStatus::InProgress);
    }

    #[test]
    fn test_other_aircraft_does_not_block() {
        let mut list = vec![Stage::new("AC2", "X", 1), Stage::new("AC1", "A", 1)];
        start(&mut list, 1).unwrap();
        assert_eq!(list[1].status, StageStatus::InProgress);
    }

    #[test]
    fn test_finish_pending_is_invalid() {
        let mut stage = Stage::new("AC1", "A", 1);
        let err = finish(&mut stage).unwrap_err();
        assert!(matches!(
            err,
            AerocodeError::InvalidTransition {
                from: StageStatus::Pending,
                to: StageStatus::Done,
                ..
            }
        ));
        assert_eq!(stage.status, StageStatus::Pending);
    }

    #[test]
    fn test_start_out_of_range() {
        let mut list = stages(&["A"]);
        let err = start(&mut list, 3).unwrap_err();
        assert!(matches!(err, AerocodeError::NotFound { kind: "etapa", .. }));
        assert_eq!(list[0].status, StageStatus::Pending);
    }

    #[test]
    fn test_start_done_is_invalid() {
        let mut list = stages(&["A"]);
        start(&mut list, 0).unwrap();
        finish(&mut list[0]).unwrap();
        let err = start(&mut list, 0).unwrap_err();
        assert!(matches!(err, AerocodeError::InvalidTransition { .. }));
        assert_eq!(list[0].status, StageStatus::Done);
    }

    #[test]
    fn test_restart_in_progress_is_invalid() {
        let mut list = stages(&["A"]);
        start(&mut list, 0).unwrap();
        assert!(matches!(
            start(&mut list, 0),
            Err(AerocodeError::InvalidTransition { .. })
        ));
    }
}
