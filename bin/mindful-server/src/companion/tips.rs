//! Date-derived daily wellness tip.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

const TIPS: &[(&str, &str)] = &[
    ("mindfulness", "Take three slow breaths before you check your phone this morning."),
    ("movement", "A ten-minute walk outside can lift your mood and clear your head."),
    ("connection", "Send a kind message to someone you haven't talked to in a while."),
    ("sleep", "Aim to go to bed at the same time tonight as you did last night."),
    ("gratitude", "Write down three things that went well today, however small."),
    ("self-care", "Drink a glass of water and stretch for a minute between tasks."),
    ("boundaries", "It's okay to say no to something that drains you today."),
    ("mindfulness", "Pause and name five things you can see around you right now."),
    ("nature", "Spend a few minutes near a window or outdoors and notice the sky."),
    ("self-compassion", "Talk to yourself the way you would talk to a good friend."),
];

/// The tip of the day returned by `GET /api/daily-tip`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct DailyTip {
    pub tip: String,
    pub category: String,
    /// `YYYY-MM-DD` the tip was chosen for.
    pub date: String,
}

/// Tip for `date`; the same date always yields the same tip.
pub fn daily_tip(date: NaiveDate) -> DailyTip {
    let (category, tip) = TIPS[date.ordinal0() as usize % TIPS.len()];
    DailyTip {
        tip: tip.to_owned(),
        category: category.to_owned(),
        date: date.format("%Y-%m-%d").to_string(),
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn same_date_same_tip() {
        let d = NaiveDate::from_ymd_opt(2024, 5, 17).expect("date");
        assert_eq!(daily_tip(d), daily_tip(d));
        assert_eq!(daily_tip(d).date, "2024-05-17");
    }

    #[test]
    fn consecutive_days_rotate() {
        let d1 = NaiveDate::from_ymd_opt(2024, 1, 1).expect("date");
        let d2 = d1.succ_opt().expect("next day");
        assert_eq!(daily_tip(d1).tip, TIPS[0].1);
        assert_eq!(daily_tip(d2).tip, TIPS[1].1);
    }
}
