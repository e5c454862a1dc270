//! Pages - full-screen content below the overlays

pub mod landing;
