//! Statischer Beispiel-Datensatz (Fixture/Seed-Daten).

use super::{CurvePoint, Project};

/// Liefert die drei Beispielprojekte in fester Reihenfolge.
pub fn sample_projects() -> Vec<Project> {
    vec![
        Project::new(
            "1",
            "Clean Energy Initiative",
            50_000.0,
            85.0,
            CurvePoint::new(25_000.0, 45.0),
        )
        .with_description("Solar panel installation project for urban communities")
        .with_color("hsl(var(--chart-1))"),
        Project::new(
            "2",
            "Education Access Program",
            193_000.0,
            95.0,
            CurvePoint::new(157_500.0, 94.0),
        )
        .with_description("Digital learning resources for underserved schools")
        .with_color("hsl(var(--chart-2))"),
        Project::new(
            "3",
            "Healthcare Outreach",
            100_000.0,
            90.0,
            CurvePoint::new(50_000.0, 55.0),
        )
        .with_description("Mobile medical clinics for rural areas")
        .with_color("hsl(var(--chart-3))"),
    ]
}
