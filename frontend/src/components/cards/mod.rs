pub mod gap_card;
pub mod pattern_card;
pub mod post_wake_potty_card;
pub mod sleep_card;
pub mod streak_card;
pub mod today_card;
