//! Sequencer arithmetic and invariant properties

use nexo_core::{
    Sequencer, SequencerConfig, SequencerEvent, SequencerState, Stage, StageStatus,
};
use proptest::prelude::*;

fn stages(n: usize) -> Vec<Stage> {
    (0..n)
        .map(|i| {
            Stage::new(
                format!("etapa {i}"),
                format!("descripción {i}"),
                vec!["uno".into(), "dos".into(), "tres".into()],
            )
        })
        .collect()
}

fn sequencer(n: usize, step: u8) -> Sequencer {
    Sequencer::new(stages(n), SequencerConfig::new().with_progress_step(step)).unwrap()
}

/// Steps that divide 100 evenly
fn even_steps() -> impl Strategy<Value = u8> {
    prop::sample::select(vec![1u8, 2, 4, 5, 10, 20, 25, 50, 100])
}

proptest! {
    #[test]
    fn done_after_exactly_n_times_ticks_per_stage(n in 1usize..7, step in even_steps()) {
        let mut seq = sequencer(n, step);
        seq.start();

        let total = n * (100 / step as usize);
        let mut completions = 0;

        for i in 0..total {
            prop_assert!(!seq.is_done(), "done too early at tick {i}");
            if let Some(SequencerEvent::Completed) = seq.tick() {
                completions += 1;
                prop_assert_eq!(i, total - 1, "completed on the wrong tick");
            }
        }

        prop_assert!(seq.is_done());
        prop_assert_eq!(completions, 1);
        // Terminal: no further events, ever
        prop_assert_eq!(seq.tick(), None);
        prop_assert_eq!(seq.tick(), None);
    }

    #[test]
    fn status_partition_holds_after_every_tick(n in 1usize..6, step in even_steps()) {
        let mut seq = sequencer(n, step);
        seq.start();

        let total = n * (100 / step as usize);
        for _ in 0..total {
            seq.tick();

            match seq.state() {
                SequencerState::Running { active, .. } => {
                    for i in 0..n {
                        let expected = if i < active {
                            StageStatus::Completed
                        } else if i == active {
                            StageStatus::Active
                        } else {
                            StageStatus::Pending
                        };
                        prop_assert_eq!(seq.status_of(i), expected);
                    }
                }
                SequencerState::Done => {
                    for i in 0..n {
                        prop_assert_eq!(seq.status_of(i), StageStatus::Completed);
                    }
                }
                SequencerState::NotStarted => prop_assert!(false, "ticked back to NotStarted"),
            }
        }
    }

    #[test]
    fn progress_is_monotone_and_bounded(n in 1usize..5, step in 1u8..=100) {
        let mut seq = sequencer(n, step);
        seq.start();

        let mut last: Option<(usize, u8)> = None;
        while !seq.is_done() {
            seq.tick();
            if let SequencerState::Running { active, progress, .. } = seq.state() {
                prop_assert!(progress <= 100);
                if let Some((prev_active, prev_progress)) = last {
                    if prev_active == active {
                        prop_assert!(progress >= prev_progress, "progress regressed");
                    } else {
                        prop_assert_eq!(active, prev_active + 1, "stage skipped");
                    }
                }
                last = Some((active, progress));
            }
        }
    }

    #[test]
    fn detail_index_stays_in_bounds_and_wraps(rotations in 0usize..20) {
        let mut seq = sequencer(2, 4);
        seq.start();

        for _ in 0..rotations {
            seq.rotate_detail();
        }

        let SequencerState::Running { detail_index, .. } = seq.state() else {
            panic!("expected running");
        };
        // All stages have 3 detail lines
        assert!(detail_index < 3);
        assert_eq!(detail_index, rotations % 3);
    }
}

#[test]
fn demo_fixture_run_takes_one_hundred_ticks() {
    // 4 stages at 4 points per tick: 25 ticks each
    let mut seq = Sequencer::new(
        nexo_fixtures::processing_stages(),
        SequencerConfig::default(),
    )
    .unwrap();
    seq.start();

    for _ in 0..99 {
        assert_ne!(seq.tick(), Some(SequencerEvent::Completed));
    }
    assert_eq!(seq.tick(), Some(SequencerEvent::Completed));
    assert!(seq.is_done());
}

#[test]
fn snapshot_serializes_for_the_presentation_layer() {
    let mut seq = Sequencer::new(
        nexo_fixtures::processing_stages(),
        SequencerConfig::default(),
    )
    .unwrap();
    seq.start();
    seq.tick();

    let json = serde_json::to_value(seq.snapshot()).unwrap();
    assert_eq!(json["active"], 0);
    assert_eq!(json["stages"][0]["status"], "Active");
    assert_eq!(json["stages"][0]["progress"], 4);
}

#[test]
fn snapshot_overall_percentage_is_weighted_by_stage() {
    let mut seq = Sequencer::new(
        nexo_fixtures::processing_stages(),
        SequencerConfig::new().with_progress_step(50),
    )
    .unwrap();
    seq.start();

    seq.tick(); // stage 0 at 50 of 4 stages
    assert_eq!(seq.snapshot().overall_pct, 12.5);

    seq.tick(); // stage 0 done
    seq.tick(); // stage 1 at 50
    assert_eq!(seq.snapshot().overall_pct, 37.5);
}
