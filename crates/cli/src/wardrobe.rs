//! Wardrobe intake for the command layer: a TOML wardrobe file or the
//! built-in demo wardrobe.

use std::fs;
use std::path::Path;

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::Deserialize;
use wardrobe_core::{
    ApplicationError, Category, FitStyle, Garment, GarmentOptions, GarmentSpec, Material, Pattern,
    Season, Vibe,
};

#[derive(Debug, Deserialize)]
struct WardrobeFile {
    #[serde(default)]
    garments: Vec<GarmentRecord>,
}

#[derive(Debug, Deserialize)]
struct GarmentRecord {
    #[serde(flatten)]
    spec: GarmentSpec,
    #[serde(flatten)]
    options: GarmentOptions,
    borrowed_by: Option<String>,
}

pub fn load(path: Option<&Path>, today: NaiveDate) -> Result<Vec<Garment>, ApplicationError> {
    match path {
        Some(path) => load_file(path, today),
        None => demo_wardrobe(today),
    }
}

pub fn load_file(path: &Path, today: NaiveDate) -> Result<Vec<Garment>, ApplicationError> {
    let raw = fs::read_to_string(path).map_err(|error| {
        ApplicationError::Intake(format!("could not read `{}`: {error}", path.display()))
    })?;
    let file: WardrobeFile = toml::from_str(&raw).map_err(|error| {
        ApplicationError::Intake(format!("could not parse `{}`: {error}", path.display()))
    })?;

    file.garments
        .into_iter()
        .map(|record| -> Result<Garment, ApplicationError> {
            let mut garment = Garment::create_on(record.spec, record.options, today)?;
            if let Some(borrower) = record.borrowed_by {
                garment.mark_as_borrowed(borrower)?;
            }
            Ok(garment)
        })
        .collect()
}

/// Three hand-entered pieces followed by two items from a shelf scan.
pub fn demo_wardrobe(today: NaiveDate) -> Result<Vec<Garment>, ApplicationError> {
    let blazer = Garment::create_on(
        GarmentSpec::new(Category::Jacket, "Black", "M", "100% wool", "Massimo Dutti"),
        GarmentOptions::default()
            .with_fit(FitStyle::Masculine)
            .with_vibe(Vibe::Bold)
            .with_material(Material::Wool)
            .with_season(Season::Winter)
            .with_season(Season::Autumn)
            .with_price(Decimal::new(5000, 0))
            .with_last_worn(today - Duration::days(45)),
        today,
    )?;

    let jeans = Garment::create_on(
        GarmentSpec::new(Category::Trousers, "Blue", "32", "Denim", "Mavi Jeans"),
        GarmentOptions::default()
            .with_fit(FitStyle::Unisex)
            .with_pattern(Pattern::Basic)
            .with_vibe(Vibe::Relaxed)
            .with_season(Season::AllSeasons)
            .with_last_worn(today - Duration::days(2)),
        today,
    )?;

    let suede_shoes = Garment::create_on(
        GarmentSpec::new(Category::Footwear, "Brown", "42", "Suede", "Divarese"),
        GarmentOptions::default()
            .with_material(Material::Suede)
            .with_vibe(Vibe::Composed)
            .with_season(Season::Autumn),
        today,
    )?;

    let scanned_sweater = Garment::create_on(
        GarmentSpec::new(Category::Outerwear, "Black", "M", "100% wool", "Zara"),
        GarmentOptions::default(),
        today,
    )?;

    let scanned_jeans = Garment::create_on(
        GarmentSpec::new(Category::Trousers, "Blue", "32", "Denim", "Levis"),
        GarmentOptions::default(),
        today,
    )?;

    Ok(vec![blazer, jeans, suede_shoes, scanned_sweater, scanned_jeans])
}
