use progress_tracker::{
    scan_and_notify, Course, RankingEngine, Roster, StudentRegistry, TrackerError, NO_DATA,
};

fn registry_with(points: &[[i64; 4]]) -> StudentRegistry {
    let mut registry = StudentRegistry::new();
    for (i, p) in points.iter().enumerate() {
        let id = registry
            .register("First", "Last", &format!("student{}@mail.com", i))
            .unwrap();
        registry.find_mut(id).unwrap().update_points(&[1, 2, 3, 4], p);
    }
    registry
}

#[test]
fn test_only_java_touched() {
    let registry = registry_with(&[[1, 0, 0, 0], [1, 0, 0, 0], [1, 0, 0, 0]]);
    let engine = RankingEngine::from_roster(&registry);
    assert_eq!(engine.most_popular(), "Java");
    assert_eq!(engine.least_popular(), "DSA, Databases, Spring");
}

#[test]
fn test_uniform_cohorts_have_no_least_popular() {
    for size in 1..=4 {
        let registry = registry_with(&vec![[3, 1, 4, 1]; size]);
        let engine = RankingEngine::from_roster(&registry);
        assert_eq!(engine.most_popular(), "DSA, Databases, Java, Spring");
        assert_eq!(engine.least_popular(), NO_DATA);
    }
}

#[test]
fn test_activity_and_difficulty_without_progress() {
    for size in [0, 1, 10] {
        let registry = registry_with(&vec![[0, 0, 0, 0]; size]);
        let engine = RankingEngine::from_roster(&registry);
        assert_eq!(engine.highest_activity(), NO_DATA);
        assert_eq!(engine.lowest_activity(), NO_DATA);
        assert_eq!(engine.easiest(), NO_DATA);
        assert_eq!(engine.hardest(), NO_DATA);
    }
}

#[test]
fn test_unknown_course_leaderboard() {
    let registry = registry_with(&[[1, 2, 3, 4]]);
    let result = RankingEngine::from_roster(&registry).course_leaderboard("Kotlin");
    assert!(matches!(result, Err(TrackerError::UnknownCourse { .. })));
}

#[test]
fn test_rankings_do_not_mutate_and_scan_only_flags() {
    let mut registry = registry_with(&[[5, 0, 0, 0], [0, 0, 0, 9]]);
    let before = registry.profiles().to_vec();

    let _ = RankingEngine::from_roster(&registry).statistics();
    assert_eq!(registry.profiles(), before.as_slice());

    let report = scan_and_notify(registry.profiles_mut());
    assert_eq!(report.students_notified, 2);
    for (after, before) in registry.profiles().iter().zip(&before) {
        for course in Course::ALL {
            assert_eq!(after.points(course), before.points(course));
        }
    }
}
