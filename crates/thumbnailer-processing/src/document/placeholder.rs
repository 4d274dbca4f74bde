/// PNG icon used as the thumbnail of a PDF that could not be rasterized
pub static PLACEHOLDER_ICON: &[u8] = include_bytes!("../../assets/pdf.png");
