//! Integrationstests für Kurvenerzeugung und Aggregation über die öffentliche API.

use approx::assert_relative_eq;
use impact_curve_editor::{
    aggregate, aggregate_with, generate_curve, sample_projects, AggregateConfig, CurvePoint,
    EditorOptions, Project, ProjectStore,
};

#[test]
fn test_sample_projects_generate_exact_endpoints() {
    for project in sample_projects() {
        let points = generate_curve(&project);
        assert_eq!(points.len(), 201);
        assert_eq!(points[0], CurvePoint::new(0.0, project.y_intercept));
        assert_eq!(points[200], CurvePoint::new(project.x_intercept, 0.0));
    }
}

#[test]
fn test_sample_aggregate_spans_longest_project() {
    let result = aggregate(&sample_projects());

    assert_eq!(result.len(), 401);
    assert_eq!(result[0].x, 0.0);
    // Mittel der drei Y-Achsenabschnitte (85, 95, 90)
    assert_relative_eq!(result[0].y, 90.0, epsilon = 1e-9);
    assert_relative_eq!(result.last().map(|p| p.x).unwrap_or_default(), 193_000.0);
    for w in result.windows(2) {
        assert!(w[1].x > w[0].x);
    }
}

#[test]
fn test_aggregate_is_order_independent() {
    let mut projects = sample_projects();
    let forward = aggregate(&projects);
    projects.reverse();
    let backward = aggregate(&projects);

    assert_eq!(forward.len(), backward.len());
    for (a, b) in forward.iter().zip(&backward) {
        assert_eq!(a.x, b.x);
        assert_relative_eq!(a.y, b.y, epsilon = 1e-9);
    }
}

#[test]
fn test_aggregate_config_from_options() {
    let options = EditorOptions {
        aggregate_grid_divisions: 100,
        aggregate_smoothing_window: 1,
        ..EditorOptions::default()
    };
    let config = options.aggregate_config();
    assert_eq!(config.grid_divisions, 100);

    let store = ProjectStore::sample();
    let result = aggregate_with(&store.projects(), &config);
    // Schrittweite min(500, 193000 / 100) = 500 → 0..=193000 in 500er-Schritten
    assert_eq!(result.len(), 387);
    assert_eq!(result[1].x, 500.0);
}

#[test]
fn test_aggregate_tolerates_invalid_projects() {
    let projects = vec![
        Project::new("a", "NaN", f64::NAN, 50.0, CurvePoint::new(0.0, 0.0)),
        Project::new("b", "Gültig", 10_000.0, 80.0, CurvePoint::new(5_000.0, 40.0)),
    ];
    let config = AggregateConfig::default();
    let result = aggregate_with(&projects, &config);

    assert!(!result.is_empty());
    for p in &result {
        assert!(p.is_finite());
        assert!((0.0..=10_000.0).contains(&p.x));
        assert!((0.0..=100.0).contains(&p.y));
    }
}
