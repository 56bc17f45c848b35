use serde::{Deserialize, Serialize};

use crate::domain::{Event, SeasonalPalette, Vibe, Weather};

/// Situational input for one recommendation request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Context {
    pub weather: Option<Weather>,
    pub event: Option<Event>,
    pub mood: Option<Vibe>,
    pub palette: Option<SeasonalPalette>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_event(mut self, event: Event) -> Self {
        self.event = Some(event);
        self
    }

    pub fn with_mood(mut self, mood: Vibe) -> Self {
        self.mood = Some(mood);
        self
    }

    pub fn with_palette(mut self, palette: SeasonalPalette) -> Self {
        self.palette = Some(palette);
        self
    }
}
