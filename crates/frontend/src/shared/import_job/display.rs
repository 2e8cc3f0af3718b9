//! Text and percentages for the import progress overlay

use super::progress::LocalProgress;

/// Shown while the total is unknown
pub const PLACEHOLDER_PERCENT: u32 = 10;

fn rounded_percent(completed: u32, total: u32) -> u64 {
    let (completed, total) = (u64::from(completed), u64::from(total));
    (200 * completed + total) / (2 * total)
}

/// `round(100 * completed / total)` clamped to 0..=100
pub fn percent(progress: &LocalProgress) -> u32 {
    if progress.total == 0 {
        return PLACEHOLDER_PERCENT;
    }
    rounded_percent(progress.completed, progress.total).min(100) as u32
}

pub fn stage_label(progress: &LocalProgress) -> &'static str {
    if progress.total == 0 {
        return "Starting up…";
    }
    if progress.completed == 0 {
        return "Spinning up store checks…";
    }
    match rounded_percent(progress.completed, progress.total) {
        0..=33 => "Pulling menus…",
        34..=66 => "Parsing items…",
        67..=99 => "Ranking deals…",
        _ => "Finalizing results…",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::usecases::u601_fetch_deals::JobStatus;

    fn at(completed: u32, total: u32) -> LocalProgress {
        LocalProgress {
            completed,
            failed: 0,
            total,
            status: JobStatus::Running,
            visible: true,
        }
    }

    #[test]
    fn test_percent() {
        assert_eq!(percent(&at(0, 3)), 0);
        assert_eq!(percent(&at(1, 3)), 33);
        assert_eq!(percent(&at(2, 3)), 67);
        assert_eq!(percent(&at(1, 8)), 13);
        assert_eq!(percent(&at(3, 3)), 100);
    }

    #[test]
    fn test_percent_is_clamped() {
        assert_eq!(percent(&at(9, 3)), 100);
    }

    #[test]
    fn test_percent_placeholder_without_total() {
        assert_eq!(percent(&at(4, 0)), PLACEHOLDER_PERCENT);
    }

    #[test]
    fn test_stage_label() {
        assert_eq!(stage_label(&at(0, 0)), "Starting up…");
        assert_eq!(stage_label(&at(0, 5)), "Spinning up store checks…");
        assert_eq!(stage_label(&at(1, 5)), "Pulling menus…");
        assert_eq!(stage_label(&at(1, 2)), "Parsing items…");
        assert_eq!(stage_label(&at(4, 5)), "Ranking deals…");
        assert_eq!(stage_label(&at(5, 5)), "Finalizing results…");
    }
}
