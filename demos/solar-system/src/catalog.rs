//! Celestial body catalog — bilingual display data plus the orbital and
//! visual parameters the scene is built from. Loaded from a JSON file
//! embedded at compile time; the host UI fetches the same JSON verbatim
//! for the info overlay.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Distance scaling: scene units per AU for planet orbits.
pub const PLANET_ORBIT_SCALE: f32 = 25.0;
/// Distance scaling for moon orbits, in the parent planet's local frame.
/// Larger than the planet scale so moons clear their parent's surface.
pub const MOON_ORBIT_SCALE: f32 = 50.0;

/// Earth's orbital period, the reference for the time compression.
pub const REFERENCE_PERIOD_DAYS: f64 = 365.25;
/// Real seconds for one Earth orbit at the reference compression.
pub const REFERENCE_ORBIT_SECONDS: f64 = 60.0;
/// Spin compression: rotation runs this many times faster than real time.
pub const SPIN_TIME_SCALE: f64 = 1440.0;

/// Index into [`Catalog::bodies`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyId(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyKind {
    Star,
    Planet,
    Moon,
}

/// One entry in the catalog. `distance` is AU from the sun for planets,
/// AU from the parent planet for moons, and zero for the star.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CelestialBody {
    pub kind: BodyKind,
    pub name_zh: String,
    pub name_en: String,
    pub diameter_km: f64,
    pub distance: f32,
    pub orbital_period_days: f64,
    pub rotation_period_hours: f64,
    /// Mesh radius in scene units.
    pub size: f32,
    pub color: [f32; 3],
    #[serde(default)]
    pub has_rings: bool,
    /// English name of the parent planet. Only meaningful for moons.
    #[serde(default)]
    pub parent: Option<String>,
    pub wikipedia_url: String,
    pub description_zh: String,
    pub description_en: String,
}

impl CelestialBody {
    /// Mesh radius as rendered. The sun draws at half its catalog size.
    pub fn mesh_radius(&self) -> f32 {
        match self.kind {
            BodyKind::Star => self.size * 0.5,
            _ => self.size,
        }
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Parse(serde_json::Error),
    /// A body failed validation; carries the body name and the reason.
    Invalid(String, &'static str),
    MissingStar,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Parse(e) => write!(f, "catalog JSON parse error: {e}"),
            CatalogError::Invalid(name, reason) => write!(f, "invalid body {name:?}: {reason}"),
            CatalogError::MissingStar => write!(f, "catalog has no star entry"),
        }
    }
}

impl std::error::Error for CatalogError {}

impl From<serde_json::Error> for CatalogError {
    fn from(e: serde_json::Error) -> Self {
        CatalogError::Parse(e)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Catalog {
    pub bodies: Vec<CelestialBody>,
}

const CATALOG_JSON: &str = include_str!("../assets/catalog.json");

impl Catalog {
    /// Parse and validate a catalog from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = serde_json::from_str(json)?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// The embedded default catalog: sun, 8 planets, 3 moons.
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(CATALOG_JSON)
    }

    fn validate(&self) -> Result<(), CatalogError> {
        if !self.bodies.iter().any(|b| b.kind == BodyKind::Star) {
            return Err(CatalogError::MissingStar);
        }
        for body in &self.bodies {
            if body.size <= 0.0 {
                return Err(CatalogError::Invalid(body.name_en.clone(), "size must be positive"));
            }
            if body.rotation_period_hours <= 0.0 {
                return Err(CatalogError::Invalid(
                    body.name_en.clone(),
                    "rotation period must be positive",
                ));
            }
            if body.kind != BodyKind::Star && body.orbital_period_days <= 0.0 {
                return Err(CatalogError::Invalid(
                    body.name_en.clone(),
                    "orbital period must be positive",
                ));
            }
            if body.kind == BodyKind::Moon && body.parent.is_none() {
                return Err(CatalogError::Invalid(body.name_en.clone(), "moon has no parent"));
            }
        }
        Ok(())
    }

    pub fn get(&self, id: BodyId) -> &CelestialBody {
        &self.bodies[id.0]
    }

    pub fn star(&self) -> BodyId {
        // validate() guarantees one exists
        BodyId(self.bodies.iter().position(|b| b.kind == BodyKind::Star).unwrap_or(0))
    }

    pub fn iter(&self) -> impl Iterator<Item = (BodyId, &CelestialBody)> {
        self.bodies.iter().enumerate().map(|(i, b)| (BodyId(i), b))
    }

    /// Resolve a planet by its English name. Used for moon parent lookup.
    pub fn find_planet(&self, name_en: &str) -> Option<BodyId> {
        self.bodies
            .iter()
            .position(|b| b.kind == BodyKind::Planet && b.name_en == name_en)
            .map(BodyId)
    }

    /// Serialize for the host overlay. The overlay reads names,
    /// descriptions, and physical data in both languages.
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_parses() {
        let catalog = Catalog::builtin().unwrap();
        let stars = catalog.bodies.iter().filter(|b| b.kind == BodyKind::Star).count();
        let planets = catalog.bodies.iter().filter(|b| b.kind == BodyKind::Planet).count();
        let moons = catalog.bodies.iter().filter(|b| b.kind == BodyKind::Moon).count();
        assert_eq!(stars, 1);
        assert_eq!(planets, 8);
        assert_eq!(moons, 3);
    }

    #[test]
    fn moon_parents_resolve() {
        let catalog = Catalog::builtin().unwrap();
        for (_, body) in catalog.iter() {
            if body.kind == BodyKind::Moon {
                let parent = body.parent.as_deref().unwrap();
                assert!(catalog.find_planet(parent).is_some(), "unresolved parent {parent}");
            }
        }
    }

    #[test]
    fn bilingual_data_present() {
        let catalog = Catalog::builtin().unwrap();
        for (_, body) in catalog.iter() {
            assert!(!body.name_zh.is_empty());
            assert!(!body.name_en.is_empty());
            assert!(!body.description_zh.is_empty());
            assert!(!body.description_en.is_empty());
        }
    }

    #[test]
    fn rejects_nonpositive_period() {
        let json = r#"{
            "bodies": [
                {
                    "kind": "star",
                    "name_zh": "太阳", "name_en": "Sun",
                    "diameter_km": 1.0, "distance": 0.0,
                    "orbital_period_days": 0.0, "rotation_period_hours": 1.0,
                    "size": 1.0, "color": [1.0, 1.0, 1.0],
                    "wikipedia_url": "", "description_zh": "x", "description_en": "x"
                },
                {
                    "kind": "planet",
                    "name_zh": "地球", "name_en": "Earth",
                    "diameter_km": 1.0, "distance": 1.0,
                    "orbital_period_days": -5.0, "rotation_period_hours": 24.0,
                    "size": 1.0, "color": [0.0, 0.0, 1.0],
                    "wikipedia_url": "", "description_zh": "x", "description_en": "x"
                }
            ]
        }"#;
        assert!(matches!(
            Catalog::from_json(json),
            Err(CatalogError::Invalid(_, _))
        ));
    }

    #[test]
    fn rejects_missing_star() {
        let json = r#"{ "bodies": [] }"#;
        assert!(matches!(Catalog::from_json(json), Err(CatalogError::MissingStar)));
    }

    #[test]
    fn to_json_round_trips() {
        let catalog = Catalog::builtin().unwrap();
        let rebuilt = Catalog::from_json(&catalog.to_json()).unwrap();
        assert_eq!(rebuilt.bodies.len(), catalog.bodies.len());
    }
}
