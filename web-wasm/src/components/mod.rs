//! Componenti UI

pub mod detail_panel;
pub mod finding_form;
pub mod header;
pub mod map_preview;
pub mod search_bar;
pub mod species_list;
