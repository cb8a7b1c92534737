pub mod chore;
pub mod dashboard;
pub mod grade;
pub mod study;

/// Lenient numeric parse: anything that is not a number coerces to 0.0.
/// Invalid input is normalized, never rejected.
pub fn parse_float_lenient(raw: &str) -> f64 {
    raw.trim().parse::<f64>().unwrap_or(0.0)
}
