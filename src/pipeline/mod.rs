pub mod stage1_input;
pub mod stage2_train;
pub mod stage3_predict;
pub mod stage4_trend;
pub mod stage5_report;
