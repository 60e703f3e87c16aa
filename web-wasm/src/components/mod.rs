//! UIコンポーネント

pub mod analysis_panel;
pub mod cover_letter_panel;
pub mod header;
pub mod job_parser_panel;
pub mod keywords;
pub mod notice_bar;
pub mod rewriter_panel;
pub mod role_select;
pub mod score;
pub mod tab_bar;
pub mod template_gallery;
pub mod text_output;
pub mod upload_area;
