//! Interactive page pieces.

pub(crate) mod carousel;
pub(crate) mod client_form;
pub mod customization_form;
pub mod diagram;
pub(crate) mod image_zoom;
pub(crate) mod section_nav;
pub(crate) mod theme_toggle;
pub(crate) mod variant_card;
