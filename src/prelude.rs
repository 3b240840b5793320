pub use geng::prelude::*;
pub use geng_utils::conversions::*;

pub use crate::{assets::*, config::*, model::*};

pub type Color = Rgba<f32>;
