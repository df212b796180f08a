/// Root of the ready queue in the coordination tree. Its existence signals a
/// non-empty conceptual queue, though it may transiently hold zero children.
pub const READY_ROOT: &str = "/state/ready";

/// Path of the ready entry for `job_name`. Any name usable as a
/// configuration key is usable here; the store enforces its own path rules.
pub fn ready_job_path(job_name: &str) -> String {
    format!("{READY_ROOT}/{job_name}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ready_job_path() {
        assert_eq!(ready_job_path("report-job"), "/state/ready/report-job");
    }

    #[test]
    fn test_ready_job_path_is_under_root() {
        assert!(ready_job_path("x").starts_with(READY_ROOT));
    }
}
