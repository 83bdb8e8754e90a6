use crate::domain::allocation::{allocate_points, Allocation, TeamSubmission};

fn points_of(allocations: &[Allocation]) -> Vec<i32> {
    allocations.iter().map(|a| a.points).collect()
}

#[test]
fn empty_batch_allocates_nothing() {
    assert!(allocate_points(1, &[]).is_empty());
}

#[test]
fn round_one_worked_example() {
    // C is fastest but wrong: it takes the 100 tier and scores 0.
    let batch = [
        TeamSubmission::new(1, true, 30.0),
        TeamSubmission::new(2, true, 20.0),
        TeamSubmission::new(3, false, 10.0),
    ];

    let result = allocate_points(1, &batch);

    assert_eq!(points_of(&result), vec![50, 75, 0]);
    assert_eq!(
        result.iter().map(|a| a.rank).collect::<Vec<_>>(),
        vec![2, 1, 0]
    );
    assert_eq!(
        result.iter().map(|a| a.place_points).collect::<Vec<_>>(),
        vec![50, 75, 100]
    );
}

#[test]
fn allocations_are_paired_with_input_position_and_team() {
    let batch = [
        TeamSubmission::new(42, true, 90.0),
        TeamSubmission::new(7, true, 15.0),
    ];

    let result = allocate_points(2, &batch);

    assert_eq!(result[0].index, 0);
    assert_eq!(result[0].team_id, 42);
    assert_eq!(result[0].points, 75);
    assert_eq!(result[1].index, 1);
    assert_eq!(result[1].team_id, 7);
    assert_eq!(result[1].points, 100);
}

#[test]
fn first_place_scales_with_round_multiplier() {
    for (round, expected) in [(1, 100), (2, 100), (3, 200), (4, 200), (5, 300), (6, 100)] {
        let batch = [
            TeamSubmission::new(1, true, 5.0),
            TeamSubmission::new(2, true, 6.0),
            TeamSubmission::new(3, true, 7.0),
            TeamSubmission::new(4, true, 8.0),
        ];
        let result = allocate_points(round, &batch);
        assert_eq!(result[0].points, expected, "round {round}");
    }
}

#[test]
fn blitz_doubles_after_multiplier() {
    let batch = [
        TeamSubmission::new(1, true, 12.0).with_blitz(true),
        TeamSubmission::new(2, true, 13.0),
        TeamSubmission::new(3, true, 14.0),
        TeamSubmission::new(4, true, 15.0),
    ];

    let result = allocate_points(4, &batch);

    assert_eq!(points_of(&result), vec![400, 150, 100, 50]);
}

#[test]
fn single_blitz_submission_in_final_round() {
    let batch = [TeamSubmission::new(9, true, 44.5).with_blitz(true)];
    assert_eq!(points_of(&allocate_points(5, &batch)), vec![600]);
}

#[test]
fn incorrect_scores_zero_even_with_blitz() {
    let batch = [
        TeamSubmission::new(1, false, 1.0).with_blitz(true),
        TeamSubmission::new(2, false, 2.0),
    ];
    assert_eq!(points_of(&allocate_points(5, &batch)), vec![0, 0]);
}

#[test]
fn fifth_place_and_beyond_score_nothing() {
    let batch: Vec<TeamSubmission> = (0..6)
        .map(|i| TeamSubmission::new(i, true, 10.0 + i as f64))
        .collect();

    assert_eq!(
        points_of(&allocate_points(1, &batch)),
        vec![100, 75, 50, 25, 0, 0]
    );
}

#[test]
fn small_batch_only_uses_top_tiers() {
    let batch = [
        TeamSubmission::new(1, true, 40.0),
        TeamSubmission::new(2, true, 35.0),
    ];
    assert_eq!(points_of(&allocate_points(1, &batch)), vec![75, 100]);
}

#[test]
fn equal_times_rank_by_input_order() {
    let batch = [
        TeamSubmission::new(1, true, 20.0),
        TeamSubmission::new(2, true, 10.0),
        TeamSubmission::new(3, true, 20.0),
        TeamSubmission::new(4, true, 10.0),
    ];

    let result = allocate_points(1, &batch);

    // 2 and 4 tie at 10s, 1 and 3 tie at 20s; earlier entries win each tie.
    assert_eq!(points_of(&result), vec![50, 100, 25, 75]);
}

#[test]
fn incorrect_team_wastes_its_tier_instead_of_passing_it_down() {
    // Documented behavior: the wrong-but-fastest team keeps rank 0, so the
    // fastest correct team gets the 75 tier, not 100.
    let batch = [
        TeamSubmission::new(1, false, 3.0),
        TeamSubmission::new(2, true, 4.0),
    ];

    let result = allocate_points(1, &batch);

    assert_eq!(result[0].rank, 0);
    assert_eq!(result[0].points, 0);
    assert_eq!(result[1].rank, 1);
    assert_eq!(result[1].points, 75);
}

#[test]
fn zero_times_are_ranked_like_any_other() {
    let batch = [
        TeamSubmission::new(1, true, 0.0),
        TeamSubmission::new(2, true, 0.0),
        TeamSubmission::new(3, true, 0.0),
    ];
    assert_eq!(points_of(&allocate_points(3, &batch)), vec![200, 150, 100]);
}

#[test]
fn allocation_is_deterministic() {
    let batch = [
        TeamSubmission::new(1, true, 33.3),
        TeamSubmission::new(2, false, 12.0).with_blitz(true),
        TeamSubmission::new(3, true, 33.3).with_blitz(true),
        TeamSubmission::new(4, true, 50.0),
        TeamSubmission::new(5, true, 8.25),
    ];

    assert_eq!(allocate_points(4, &batch), allocate_points(4, &batch));
}
