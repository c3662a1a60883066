pub mod stage1_results;
pub mod stage2_predictions;
pub mod stage3_score;
pub mod stage4_rank;
pub mod stage5_report;
