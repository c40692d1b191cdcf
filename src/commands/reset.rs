//! Forget the stored session

use super::RunContext;
use anyhow::{Context, Result};
use tracing::info;

/// Remove the saved session file
///
/// # Errors
///
/// Returns an error if an existing session file cannot be removed.
pub fn run_reset(ctx: &RunContext) -> Result<()> {
    let mut store = ctx.store();
    store.clear().context("removing saved session")?;
    info!("saved session cleared");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use chrono::NaiveDate;

    #[test]
    fn reset_removes_saved_session() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let config = GameConfig {
            state_file: Some(path.clone()),
            ..Default::default()
        };
        let ctx = RunContext::new(config, NaiveDate::from_ymd_opt(2026, 10, 16).unwrap());

        let _ = ctx.start_game();
        assert!(path.exists());

        run_reset(&ctx).unwrap();
        assert!(!path.exists());
        run_reset(&ctx).unwrap();
    }
}
