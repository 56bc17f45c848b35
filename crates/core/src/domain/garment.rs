use std::collections::BTreeSet;

use chrono::{Local, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::vocabulary::{Category, FitStyle, Material, Pattern, Season, Vibe};
use crate::errors::DomainError;

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GarmentId(pub String);

impl GarmentId {
    fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }
}

/// Attributes every garment must carry.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GarmentSpec {
    pub category: Category,
    pub color: String,
    pub size: String,
    pub fabric_composition: String,
    pub brand: String,
}

impl GarmentSpec {
    pub fn new(
        category: Category,
        color: impl Into<String>,
        size: impl Into<String>,
        fabric_composition: impl Into<String>,
        brand: impl Into<String>,
    ) -> Self {
        Self {
            category,
            color: color.into(),
            size: size.into(),
            fabric_composition: fabric_composition.into(),
            brand: brand.into(),
        }
    }

    fn validate(&self) -> Result<(), DomainError> {
        let required = [
            ("color", &self.color),
            ("size", &self.size),
            ("fabric_composition", &self.fabric_composition),
            ("brand", &self.brand),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(DomainError::MissingRequiredField { field });
            }
        }
        Ok(())
    }
}

/// Optional attributes; anything left unset keeps its default.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GarmentOptions {
    pub material: Material,
    pub pattern: Pattern,
    pub fit: FitStyle,
    pub vibe: Vibe,
    pub seasons: BTreeSet<Season>,
    pub note: String,
    pub photo: String,
    pub price: Decimal,
    /// Defaults to the creation date when unset.
    pub last_worn: Option<NaiveDate>,
}

impl Default for GarmentOptions {
    fn default() -> Self {
        Self {
            material: Material::default(),
            pattern: Pattern::default(),
            fit: FitStyle::default(),
            vibe: Vibe::default(),
            seasons: BTreeSet::new(),
            note: String::new(),
            photo: String::new(),
            price: Decimal::ZERO,
            last_worn: None,
        }
    }
}

impl GarmentOptions {
    pub fn with_material(mut self, material: Material) -> Self {
        self.material = material;
        self
    }

    pub fn with_pattern(mut self, pattern: Pattern) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_fit(mut self, fit: FitStyle) -> Self {
        self.fit = fit;
        self
    }

    pub fn with_vibe(mut self, vibe: Vibe) -> Self {
        self.vibe = vibe;
        self
    }

    pub fn with_season(mut self, season: Season) -> Self {
        self.seasons.insert(season);
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = note.into();
        self
    }

    pub fn with_photo(mut self, photo: impl Into<String>) -> Self {
        self.photo = photo.into();
        self
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = price;
        self
    }

    pub fn with_last_worn(mut self, last_worn: NaiveDate) -> Self {
        self.last_worn = Some(last_worn);
        self
    }
}

/// One catalogued clothing item.
///
/// Attributes are fixed at creation. The only state transitions are
/// [`Garment::wear`] and [`Garment::mark_as_borrowed`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Garment {
    id: GarmentId,
    category: Category,
    color: String,
    size: String,
    fabric_composition: String,
    brand: String,
    material: Material,
    pattern: Pattern,
    fit: FitStyle,
    vibe: Vibe,
    seasons: BTreeSet<Season>,
    note: String,
    photo: String,
    date_added: NaiveDate,
    last_worn: NaiveDate,
    wear_count: u32,
    price: Decimal,
    borrowed: bool,
    borrowed_by: Option<String>,
}

impl Garment {
    pub fn create(spec: GarmentSpec, options: GarmentOptions) -> Result<Self, DomainError> {
        Self::create_on(spec, options, Local::now().date_naive())
    }

    pub fn create_on(
        spec: GarmentSpec,
        options: GarmentOptions,
        today: NaiveDate,
    ) -> Result<Self, DomainError> {
        spec.validate()?;

        if options.price < Decimal::ZERO {
            return Err(DomainError::InvariantViolation(format!(
                "purchase price must not be negative (got {})",
                options.price
            )));
        }

        let last_worn = options.last_worn.unwrap_or(today);
        if last_worn > today {
            return Err(DomainError::InvariantViolation(format!(
                "last worn date {last_worn} is after the date added {today}"
            )));
        }

        Ok(Self {
            id: GarmentId::generate(),
            category: spec.category,
            color: spec.color.trim().to_owned(),
            size: spec.size.trim().to_owned(),
            fabric_composition: spec.fabric_composition.trim().to_owned(),
            brand: spec.brand.trim().to_owned(),
            material: options.material,
            pattern: options.pattern,
            fit: options.fit,
            vibe: options.vibe,
            seasons: options.seasons,
            note: options.note,
            photo: options.photo,
            date_added: today,
            last_worn,
            wear_count: 0,
            price: options.price,
            borrowed: false,
            borrowed_by: None,
        })
    }

    pub fn wear(&mut self) {
        self.wear_on(Local::now().date_naive());
    }

    /// Records one wear event. The last-worn date never moves backwards.
    ///
    /// The wear count stops at `u32::MAX`; further wears leave it there.
    pub fn wear_on(&mut self, date: NaiveDate) {
        self.last_worn = self.last_worn.max(date);
        self.wear_count = self.wear_count.saturating_add(1);
    }

    pub fn mark_as_borrowed(&mut self, borrower: impl Into<String>) -> Result<(), DomainError> {
        let borrower = borrower.into();
        if borrower.trim().is_empty() {
            return Err(DomainError::MissingRequiredField { field: "borrower" });
        }
        self.borrowed = true;
        self.borrowed_by = Some(borrower.trim().to_owned());
        Ok(())
    }

    pub fn cost_per_wear(&self) -> Decimal {
        if self.wear_count == 0 {
            self.price
        } else {
            self.price / Decimal::from(self.wear_count)
        }
    }

    /// Whole calendar days between the last wear and `today`.
    pub fn days_since_worn(&self, today: NaiveDate) -> i64 {
        (today - self.last_worn).num_days()
    }

    pub fn display_name(&self) -> String {
        format!("{} {} {}", self.brand, self.color, self.category)
    }

    pub fn id(&self) -> &GarmentId {
        &self.id
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn color(&self) -> &str {
        &self.color
    }

    pub fn size(&self) -> &str {
        &self.size
    }

    pub fn fabric_composition(&self) -> &str {
        &self.fabric_composition
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn material(&self) -> Material {
        self.material
    }

    pub fn pattern(&self) -> Pattern {
        self.pattern
    }

    pub fn fit(&self) -> FitStyle {
        self.fit
    }

    pub fn vibe(&self) -> Vibe {
        self.vibe
    }

    pub fn seasons(&self) -> &BTreeSet<Season> {
        &self.seasons
    }

    pub fn note(&self) -> &str {
        &self.note
    }

    pub fn photo(&self) -> &str {
        &self.photo
    }

    pub fn date_added(&self) -> NaiveDate {
        self.date_added
    }

    pub fn last_worn(&self) -> NaiveDate {
        self.last_worn
    }

    pub fn wear_count(&self) -> u32 {
        self.wear_count
    }

    pub fn price(&self) -> Decimal {
        self.price
    }

    pub fn is_borrowed(&self) -> bool {
        self.borrowed
    }

    pub fn borrowed_by(&self) -> Option<&str> {
        self.borrowed_by.as_deref()
    }
}
