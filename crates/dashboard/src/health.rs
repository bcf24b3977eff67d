use serde::Serialize;

/// Body of the `/health` response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct HealthRes {
    pub ok: bool,
    pub message: String,
}

/// Simple health service used by the `/health` route.
#[derive(Clone, Default)]
pub struct HealthService;

impl HealthService {
    /// Check health without creating an instance.
    ///
    /// The dashboard holds no external resources, so being able to answer is being healthy.
    pub fn check_health() -> HealthRes {
        HealthRes {
            ok: true,
            message: "PMP dashboard is alive".into(),
        }
    }
}
