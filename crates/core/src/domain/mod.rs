pub mod garment;
pub mod vocabulary;

pub use garment::{Garment, GarmentId, GarmentOptions, GarmentSpec};
pub use vocabulary::{
    Category, Event, FitStyle, Material, Pattern, Season, SeasonalPalette, Vibe, Weather,
};
