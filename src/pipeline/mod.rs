pub mod stage1_table;
pub mod stage2_layout;
pub mod stage3_render;
pub mod stage4_summary;
