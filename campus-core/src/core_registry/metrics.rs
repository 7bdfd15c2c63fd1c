/*
    Metrics - Registry instrumentation for monitoring

    Provides counters and gauges for:
    - Record creation (inserts and silent replacements)
    - Association activity (enrollments, assignments)
    - Association attempts against missing records

    Metrics are emitted through the `metrics` facade; the hosting process
    chooses the recorder/exporter.
*/

use metrics::{counter, describe_counter, describe_gauge, gauge};

/// Initialize metric descriptions (call once at startup)
pub fn init_metrics() {
    // Record creation
    describe_counter!(
        "campus_records_added_total",
        "Total number of records inserted, labeled by kind (student, faculty, course)"
    );

    describe_counter!(
        "campus_records_replaced_total",
        "Total number of records silently replaced by a re-used id, labeled by kind"
    );

    // Associations
    describe_counter!(
        "campus_enrollments_total",
        "Total number of student-course enrollments recorded through the facade"
    );

    describe_counter!(
        "campus_assignments_total",
        "Total number of faculty-course assignments recorded through the facade"
    );

    describe_counter!(
        "campus_association_misses_total",
        "Total number of association operations rejected because the target record was missing, labeled by kind"
    );

    // Store sizes
    describe_gauge!(
        "campus_records",
        "Current number of records held, labeled by kind"
    );
}

/// Record a fresh insert
pub fn record_added(kind: &'static str) {
    counter!("campus_records_added_total", "kind" => kind).increment(1);
}

/// Record a silent replacement of an existing id
pub fn record_replaced(kind: &'static str) {
    counter!("campus_records_replaced_total", "kind" => kind).increment(1);
}

/// Record a completed student-course enrollment
pub fn enrollment_recorded() {
    counter!("campus_enrollments_total").increment(1);
}

/// Record a completed faculty-course assignment
pub fn assignment_recorded() {
    counter!("campus_assignments_total").increment(1);
}

/// Record an association attempt against a missing record
pub fn association_target_missing(kind: &'static str) {
    counter!("campus_association_misses_total", "kind" => kind).increment(1);
}

/// Update the record-count gauge for one store
pub fn set_record_count(kind: &'static str, count: usize) {
    gauge!("campus_records", "kind" => kind).set(count as f64);
}
