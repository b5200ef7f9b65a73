//! Span definitions per engine entry point.

/// Create a diagnosis span.
#[macro_export]
macro_rules! diagnosis_span {
    ($municipality_id:expr) => {
        tracing::info_span!("civitas.diagnosis", municipality = %$municipality_id)
    };
}

/// Create a plan-generation span.
#[macro_export]
macro_rules! plan_span {
    ($municipality_id:expr, $model_city:expr) => {
        tracing::info_span!("civitas.plan", municipality = %$municipality_id, model_city = ?$model_city)
    };
}

/// Create a what-if simulation span.
#[macro_export]
macro_rules! simulation_span {
    ($municipality_id:expr, $targets:expr) => {
        tracing::info_span!("civitas.simulation", municipality = %$municipality_id, targets = $targets)
    };
}

/// Create a model-city discovery span.
#[macro_export]
macro_rules! model_city_span {
    ($municipality_id:expr) => {
        tracing::info_span!("civitas.model_cities", municipality = %$municipality_id)
    };
}
